use super::{interceptor::*, routes, types::*};
use crate::{DeleteOperationMetadata, operation_routes};
use aiplatform_rest_core::{
    Error, Message,
    client::{CallOptions, Callable, RestTransport, RestTransportBuilder, RpcCallable},
    interceptor::Hooks,
    message::wkt::Empty,
    operations::{Operation, OperationHandle, OperationsClient},
};
use std::{collections::HashMap, sync::Arc};

/// The URL prefix of the Feature Store service.
pub const VERSION: &str = "v1beta1";

type Interceptor = dyn FeaturestoreServiceInterceptor;

pub static CREATE_FEATURESTORE: RpcCallable<Interceptor, CreateFeaturestoreRequest, Operation> =
    RpcCallable::new(
        &routes::CREATE_FEATURESTORE,
        Hooks::new(
            |i, r, m| i.pre_create_featurestore(r, m),
            |i, r| i.post_create_featurestore(r),
            |i, r, m| i.post_create_featurestore_with_metadata(r, m),
        ),
    );

pub static GET_FEATURESTORE: RpcCallable<Interceptor, GetFeaturestoreRequest, Featurestore> =
    RpcCallable::new(
        &routes::GET_FEATURESTORE,
        Hooks::new(
            |i, r, m| i.pre_get_featurestore(r, m),
            |i, r| i.post_get_featurestore(r),
            |i, r, m| i.post_get_featurestore_with_metadata(r, m),
        ),
    );

pub static LIST_FEATURESTORES: RpcCallable<
    Interceptor,
    ListFeaturestoresRequest,
    ListFeaturestoresResponse,
> = RpcCallable::new(
    &routes::LIST_FEATURESTORES,
    Hooks::new(
        |i, r, m| i.pre_list_featurestores(r, m),
        |i, r| i.post_list_featurestores(r),
        |i, r, m| i.post_list_featurestores_with_metadata(r, m),
    ),
);

pub static UPDATE_FEATURESTORE: RpcCallable<Interceptor, UpdateFeaturestoreRequest, Operation> =
    RpcCallable::new(
        &routes::UPDATE_FEATURESTORE,
        Hooks::new(
            |i, r, m| i.pre_update_featurestore(r, m),
            |i, r| i.post_update_featurestore(r),
            |i, r, m| i.post_update_featurestore_with_metadata(r, m),
        ),
    );

pub static DELETE_FEATURESTORE: RpcCallable<Interceptor, DeleteFeaturestoreRequest, Operation> =
    RpcCallable::new(
        &routes::DELETE_FEATURESTORE,
        Hooks::new(
            |i, r, m| i.pre_delete_featurestore(r, m),
            |i, r| i.post_delete_featurestore(r),
            |i, r, m| i.post_delete_featurestore_with_metadata(r, m),
        ),
    );

pub static CREATE_ENTITY_TYPE: RpcCallable<Interceptor, CreateEntityTypeRequest, Operation> =
    RpcCallable::new(
        &routes::CREATE_ENTITY_TYPE,
        Hooks::new(
            |i, r, m| i.pre_create_entity_type(r, m),
            |i, r| i.post_create_entity_type(r),
            |i, r, m| i.post_create_entity_type_with_metadata(r, m),
        ),
    );

pub static GET_ENTITY_TYPE: RpcCallable<Interceptor, GetEntityTypeRequest, EntityType> =
    RpcCallable::new(
        &routes::GET_ENTITY_TYPE,
        Hooks::new(
            |i, r, m| i.pre_get_entity_type(r, m),
            |i, r| i.post_get_entity_type(r),
            |i, r, m| i.post_get_entity_type_with_metadata(r, m),
        ),
    );

pub static LIST_ENTITY_TYPES: RpcCallable<
    Interceptor,
    ListEntityTypesRequest,
    ListEntityTypesResponse,
> = RpcCallable::new(
    &routes::LIST_ENTITY_TYPES,
    Hooks::new(
        |i, r, m| i.pre_list_entity_types(r, m),
        |i, r| i.post_list_entity_types(r),
        |i, r, m| i.post_list_entity_types_with_metadata(r, m),
    ),
);

pub static UPDATE_ENTITY_TYPE: RpcCallable<Interceptor, UpdateEntityTypeRequest, EntityType> =
    RpcCallable::new(
        &routes::UPDATE_ENTITY_TYPE,
        Hooks::new(
            |i, r, m| i.pre_update_entity_type(r, m),
            |i, r| i.post_update_entity_type(r),
            |i, r, m| i.post_update_entity_type_with_metadata(r, m),
        ),
    );

pub static DELETE_ENTITY_TYPE: RpcCallable<Interceptor, DeleteEntityTypeRequest, Operation> =
    RpcCallable::new(
        &routes::DELETE_ENTITY_TYPE,
        Hooks::new(
            |i, r, m| i.pre_delete_entity_type(r, m),
            |i, r| i.post_delete_entity_type(r),
            |i, r, m| i.post_delete_entity_type_with_metadata(r, m),
        ),
    );

pub static CREATE_FEATURE: RpcCallable<Interceptor, CreateFeatureRequest, Operation> =
    RpcCallable::new(
        &routes::CREATE_FEATURE,
        Hooks::new(
            |i, r, m| i.pre_create_feature(r, m),
            |i, r| i.post_create_feature(r),
            |i, r, m| i.post_create_feature_with_metadata(r, m),
        ),
    );

pub static GET_FEATURE: RpcCallable<Interceptor, GetFeatureRequest, Feature> =
    RpcCallable::new(
        &routes::GET_FEATURE,
        Hooks::new(
            |i, r, m| i.pre_get_feature(r, m),
            |i, r| i.post_get_feature(r),
            |i, r, m| i.post_get_feature_with_metadata(r, m),
        ),
    );

pub static LIST_FEATURES: RpcCallable<Interceptor, ListFeaturesRequest, ListFeaturesResponse> =
    RpcCallable::new(
        &routes::LIST_FEATURES,
        Hooks::new(
            |i, r, m| i.pre_list_features(r, m),
            |i, r| i.post_list_features(r),
            |i, r, m| i.post_list_features_with_metadata(r, m),
        ),
    );

pub static UPDATE_FEATURE: RpcCallable<Interceptor, UpdateFeatureRequest, Feature> =
    RpcCallable::new(
        &routes::UPDATE_FEATURE,
        Hooks::new(
            |i, r, m| i.pre_update_feature(r, m),
            |i, r| i.post_update_feature(r),
            |i, r, m| i.post_update_feature_with_metadata(r, m),
        ),
    );

pub static DELETE_FEATURE: RpcCallable<Interceptor, DeleteFeatureRequest, Operation> =
    RpcCallable::new(
        &routes::DELETE_FEATURE,
        Hooks::new(
            |i, r, m| i.pre_delete_feature(r, m),
            |i, r| i.post_delete_feature(r),
            |i, r, m| i.post_delete_feature_with_metadata(r, m),
        ),
    );

static CALLABLES: [&'static dyn Callable; 15] = [
    &CREATE_FEATURESTORE,
    &GET_FEATURESTORE,
    &LIST_FEATURESTORES,
    &UPDATE_FEATURESTORE,
    &DELETE_FEATURESTORE,
    &CREATE_ENTITY_TYPE,
    &GET_ENTITY_TYPE,
    &LIST_ENTITY_TYPES,
    &UPDATE_ENTITY_TYPE,
    &DELETE_ENTITY_TYPE,
    &CREATE_FEATURE,
    &GET_FEATURE,
    &LIST_FEATURES,
    &UPDATE_FEATURE,
    &DELETE_FEATURE,
];

/// REST client of the Feature Store service.
#[derive(Debug, Clone)]
pub struct FeaturestoreServiceRestTransport {
    transport: RestTransport<Interceptor>,
}

impl FeaturestoreServiceRestTransport {
    pub fn builder() -> RestTransportBuilder<Interceptor> {
        let interceptor: Arc<Interceptor> = Arc::new(DefaultFeaturestoreServiceInterceptor);
        RestTransportBuilder::new(VERSION, interceptor, operation_routes::for_prefix)
    }

    pub fn transport(&self) -> &RestTransport<Interceptor> {
        &self.transport
    }

    async fn operation<Req, R, M>(
        &self,
        callable: &RpcCallable<Interceptor, Req, Operation>,
        request: Req,
        options: CallOptions,
    ) -> Result<OperationHandle<R, M>, Error>
    where
        Req: Message,
        R: Message,
        M: Message,
    {
        let operation = callable.call(&self.transport, request, options).await?;
        tracing::debug!(
            rpc = callable.rpc(),
            operation = %operation.name,
            done = operation.done,
            "Long-running operation started"
        );
        Ok(self.transport.operation_handle(operation))
    }

    // Featurestores

    pub async fn create_featurestore(
        &self,
        request: CreateFeaturestoreRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<Featurestore, CreateFeaturestoreOperationMetadata>, Error> {
        self.operation(&CREATE_FEATURESTORE, request, options).await
    }

    pub async fn get_featurestore(
        &self,
        request: GetFeaturestoreRequest,
        options: CallOptions,
    ) -> Result<Featurestore, Error> {
        GET_FEATURESTORE.call(&self.transport, request, options).await
    }

    pub async fn list_featurestores(
        &self,
        request: ListFeaturestoresRequest,
        options: CallOptions,
    ) -> Result<ListFeaturestoresResponse, Error> {
        LIST_FEATURESTORES.call(&self.transport, request, options).await
    }

    pub async fn update_featurestore(
        &self,
        request: UpdateFeaturestoreRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<Featurestore, UpdateFeaturestoreOperationMetadata>, Error> {
        self.operation(&UPDATE_FEATURESTORE, request, options).await
    }

    /// Fails unless the featurestore is empty or `force` is set.
    pub async fn delete_featurestore(
        &self,
        request: DeleteFeaturestoreRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<Empty, DeleteOperationMetadata>, Error> {
        self.operation(&DELETE_FEATURESTORE, request, options).await
    }

    // Entity types

    pub async fn create_entity_type(
        &self,
        request: CreateEntityTypeRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<EntityType, CreateEntityTypeOperationMetadata>, Error> {
        self.operation(&CREATE_ENTITY_TYPE, request, options).await
    }

    pub async fn get_entity_type(
        &self,
        request: GetEntityTypeRequest,
        options: CallOptions,
    ) -> Result<EntityType, Error> {
        GET_ENTITY_TYPE.call(&self.transport, request, options).await
    }

    pub async fn list_entity_types(
        &self,
        request: ListEntityTypesRequest,
        options: CallOptions,
    ) -> Result<ListEntityTypesResponse, Error> {
        LIST_ENTITY_TYPES.call(&self.transport, request, options).await
    }

    pub async fn update_entity_type(
        &self,
        request: UpdateEntityTypeRequest,
        options: CallOptions,
    ) -> Result<EntityType, Error> {
        UPDATE_ENTITY_TYPE.call(&self.transport, request, options).await
    }

    pub async fn delete_entity_type(
        &self,
        request: DeleteEntityTypeRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<Empty, DeleteOperationMetadata>, Error> {
        self.operation(&DELETE_ENTITY_TYPE, request, options).await
    }

    // Features

    pub async fn create_feature(
        &self,
        request: CreateFeatureRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<Feature, CreateFeatureOperationMetadata>, Error> {
        self.operation(&CREATE_FEATURE, request, options).await
    }

    pub async fn get_feature(
        &self,
        request: GetFeatureRequest,
        options: CallOptions,
    ) -> Result<Feature, Error> {
        GET_FEATURE.call(&self.transport, request, options).await
    }

    pub async fn list_features(
        &self,
        request: ListFeaturesRequest,
        options: CallOptions,
    ) -> Result<ListFeaturesResponse, Error> {
        LIST_FEATURES.call(&self.transport, request, options).await
    }

    pub async fn update_feature(
        &self,
        request: UpdateFeatureRequest,
        options: CallOptions,
    ) -> Result<Feature, Error> {
        UPDATE_FEATURE.call(&self.transport, request, options).await
    }

    pub async fn delete_feature(
        &self,
        request: DeleteFeatureRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<Empty, DeleteOperationMetadata>, Error> {
        self.operation(&DELETE_FEATURE, request, options).await
    }

    pub fn callables() -> HashMap<&'static str, &'static dyn Callable> {
        CALLABLES
            .iter()
            .map(|callable| (callable.rpc(), *callable))
            .collect()
    }

    pub fn operations(&self) -> &OperationsClient {
        self.transport.operations()
    }

    pub fn close(&self) {
        self.transport.close();
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_closed()
    }
}

impl From<RestTransport<Interceptor>> for FeaturestoreServiceRestTransport {
    fn from(transport: RestTransport<Interceptor>) -> Self {
        Self { transport }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiplatform_rest_core::{
        config::{ApiSurface, ClientConfig},
        http::AnonymousCredentials,
    };

    #[test]
    fn test_callables_are_keyed_by_rpc_name() {
        let callables = FeaturestoreServiceRestTransport::callables();

        assert_eq!(callables.len(), CALLABLES.len());
        assert_eq!(callables["GetFeature"].route().rules().len(), 2);
        assert!(callables["DeleteFeature"].route().is_idempotent());
        assert!(!callables["UpdateFeature"].route().is_idempotent());
    }

    #[test]
    fn test_ui_surface_swaps_prefix_and_operation_routes() {
        let client: FeaturestoreServiceRestTransport = FeaturestoreServiceRestTransport::builder()
            .config(ClientConfig::default().with_surface(ApiSurface::Ui))
            .credentials(Arc::new(AnonymousCredentials))
            .build()
            .unwrap()
            .into();

        assert_eq!(client.transport().prefix(), "ui");
        assert!(std::ptr::eq(
            client.operations().routes(),
            operation_routes::for_prefix("ui")
        ));
    }
}
