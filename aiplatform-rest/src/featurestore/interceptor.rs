use super::types::*;
use aiplatform_rest_core::{Metadata, operations::Operation};

/// Hooks around every Feature Store RPC, identity by default.
///
/// Long-running RPCs are observed as the raw [`Operation`].
pub trait FeaturestoreServiceInterceptor: Send + Sync {
    fn pre_create_featurestore(
        &self,
        request: CreateFeaturestoreRequest,
        metadata: Metadata,
    ) -> (CreateFeaturestoreRequest, Metadata) {
        (request, metadata)
    }

    fn post_create_featurestore(&self, response: Operation) -> Operation {
        response
    }

    fn post_create_featurestore_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_get_featurestore(
        &self,
        request: GetFeaturestoreRequest,
        metadata: Metadata,
    ) -> (GetFeaturestoreRequest, Metadata) {
        (request, metadata)
    }

    fn post_get_featurestore(&self, response: Featurestore) -> Featurestore {
        response
    }

    fn post_get_featurestore_with_metadata(
        &self,
        response: Featurestore,
        metadata: Metadata,
    ) -> (Featurestore, Metadata) {
        (response, metadata)
    }

    fn pre_list_featurestores(
        &self,
        request: ListFeaturestoresRequest,
        metadata: Metadata,
    ) -> (ListFeaturestoresRequest, Metadata) {
        (request, metadata)
    }

    fn post_list_featurestores(
        &self,
        response: ListFeaturestoresResponse,
    ) -> ListFeaturestoresResponse {
        response
    }

    fn post_list_featurestores_with_metadata(
        &self,
        response: ListFeaturestoresResponse,
        metadata: Metadata,
    ) -> (ListFeaturestoresResponse, Metadata) {
        (response, metadata)
    }

    fn pre_update_featurestore(
        &self,
        request: UpdateFeaturestoreRequest,
        metadata: Metadata,
    ) -> (UpdateFeaturestoreRequest, Metadata) {
        (request, metadata)
    }

    fn post_update_featurestore(&self, response: Operation) -> Operation {
        response
    }

    fn post_update_featurestore_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_delete_featurestore(
        &self,
        request: DeleteFeaturestoreRequest,
        metadata: Metadata,
    ) -> (DeleteFeaturestoreRequest, Metadata) {
        (request, metadata)
    }

    fn post_delete_featurestore(&self, response: Operation) -> Operation {
        response
    }

    fn post_delete_featurestore_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_create_entity_type(
        &self,
        request: CreateEntityTypeRequest,
        metadata: Metadata,
    ) -> (CreateEntityTypeRequest, Metadata) {
        (request, metadata)
    }

    fn post_create_entity_type(&self, response: Operation) -> Operation {
        response
    }

    fn post_create_entity_type_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_get_entity_type(
        &self,
        request: GetEntityTypeRequest,
        metadata: Metadata,
    ) -> (GetEntityTypeRequest, Metadata) {
        (request, metadata)
    }

    fn post_get_entity_type(&self, response: EntityType) -> EntityType {
        response
    }

    fn post_get_entity_type_with_metadata(
        &self,
        response: EntityType,
        metadata: Metadata,
    ) -> (EntityType, Metadata) {
        (response, metadata)
    }

    fn pre_list_entity_types(
        &self,
        request: ListEntityTypesRequest,
        metadata: Metadata,
    ) -> (ListEntityTypesRequest, Metadata) {
        (request, metadata)
    }

    fn post_list_entity_types(&self, response: ListEntityTypesResponse) -> ListEntityTypesResponse {
        response
    }

    fn post_list_entity_types_with_metadata(
        &self,
        response: ListEntityTypesResponse,
        metadata: Metadata,
    ) -> (ListEntityTypesResponse, Metadata) {
        (response, metadata)
    }

    fn pre_update_entity_type(
        &self,
        request: UpdateEntityTypeRequest,
        metadata: Metadata,
    ) -> (UpdateEntityTypeRequest, Metadata) {
        (request, metadata)
    }

    fn post_update_entity_type(&self, response: EntityType) -> EntityType {
        response
    }

    fn post_update_entity_type_with_metadata(
        &self,
        response: EntityType,
        metadata: Metadata,
    ) -> (EntityType, Metadata) {
        (response, metadata)
    }

    fn pre_delete_entity_type(
        &self,
        request: DeleteEntityTypeRequest,
        metadata: Metadata,
    ) -> (DeleteEntityTypeRequest, Metadata) {
        (request, metadata)
    }

    fn post_delete_entity_type(&self, response: Operation) -> Operation {
        response
    }

    fn post_delete_entity_type_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_create_feature(
        &self,
        request: CreateFeatureRequest,
        metadata: Metadata,
    ) -> (CreateFeatureRequest, Metadata) {
        (request, metadata)
    }

    fn post_create_feature(&self, response: Operation) -> Operation {
        response
    }

    fn post_create_feature_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_get_feature(
        &self,
        request: GetFeatureRequest,
        metadata: Metadata,
    ) -> (GetFeatureRequest, Metadata) {
        (request, metadata)
    }

    fn post_get_feature(&self, response: Feature) -> Feature {
        response
    }

    fn post_get_feature_with_metadata(
        &self,
        response: Feature,
        metadata: Metadata,
    ) -> (Feature, Metadata) {
        (response, metadata)
    }

    fn pre_list_features(
        &self,
        request: ListFeaturesRequest,
        metadata: Metadata,
    ) -> (ListFeaturesRequest, Metadata) {
        (request, metadata)
    }

    fn post_list_features(&self, response: ListFeaturesResponse) -> ListFeaturesResponse {
        response
    }

    fn post_list_features_with_metadata(
        &self,
        response: ListFeaturesResponse,
        metadata: Metadata,
    ) -> (ListFeaturesResponse, Metadata) {
        (response, metadata)
    }

    fn pre_update_feature(
        &self,
        request: UpdateFeatureRequest,
        metadata: Metadata,
    ) -> (UpdateFeatureRequest, Metadata) {
        (request, metadata)
    }

    fn post_update_feature(&self, response: Feature) -> Feature {
        response
    }

    fn post_update_feature_with_metadata(
        &self,
        response: Feature,
        metadata: Metadata,
    ) -> (Feature, Metadata) {
        (response, metadata)
    }

    fn pre_delete_feature(
        &self,
        request: DeleteFeatureRequest,
        metadata: Metadata,
    ) -> (DeleteFeatureRequest, Metadata) {
        (request, metadata)
    }

    fn post_delete_feature(&self, response: Operation) -> Operation {
        response
    }

    fn post_delete_feature_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFeaturestoreServiceInterceptor;

impl FeaturestoreServiceInterceptor for DefaultFeaturestoreServiceInterceptor {}
