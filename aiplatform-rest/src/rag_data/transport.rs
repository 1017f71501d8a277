use super::{interceptor::*, routes, types::*};
use crate::{DeleteOperationMetadata, operation_routes};
use aiplatform_rest_core::{
    Error,
    client::{CallOptions, Callable, RestTransport, RestTransportBuilder, RpcCallable},
    interceptor::Hooks,
    message::wkt::Empty,
    operations::{Operation, OperationHandle, OperationsClient},
};
use std::{collections::HashMap, sync::Arc};

/// The URL prefix of the RAG Data service.
pub const VERSION: &str = "v1";

type Interceptor = dyn VertexRagDataServiceInterceptor;

pub static CREATE_RAG_CORPUS: RpcCallable<Interceptor, CreateRagCorpusRequest, Operation> =
    RpcCallable::new(
        &routes::CREATE_RAG_CORPUS,
        Hooks::new(
            |i, r, m| i.pre_create_rag_corpus(r, m),
            |i, r| i.post_create_rag_corpus(r),
            |i, r, m| i.post_create_rag_corpus_with_metadata(r, m),
        ),
    );

pub static UPDATE_RAG_CORPUS: RpcCallable<Interceptor, UpdateRagCorpusRequest, Operation> =
    RpcCallable::new(
        &routes::UPDATE_RAG_CORPUS,
        Hooks::new(
            |i, r, m| i.pre_update_rag_corpus(r, m),
            |i, r| i.post_update_rag_corpus(r),
            |i, r, m| i.post_update_rag_corpus_with_metadata(r, m),
        ),
    );

pub static GET_RAG_CORPUS: RpcCallable<Interceptor, GetRagCorpusRequest, RagCorpus> =
    RpcCallable::new(
        &routes::GET_RAG_CORPUS,
        Hooks::new(
            |i, r, m| i.pre_get_rag_corpus(r, m),
            |i, r| i.post_get_rag_corpus(r),
            |i, r, m| i.post_get_rag_corpus_with_metadata(r, m),
        ),
    );

pub static LIST_RAG_CORPORA: RpcCallable<
    Interceptor,
    ListRagCorporaRequest,
    ListRagCorporaResponse,
> = RpcCallable::new(
    &routes::LIST_RAG_CORPORA,
    Hooks::new(
        |i, r, m| i.pre_list_rag_corpora(r, m),
        |i, r| i.post_list_rag_corpora(r),
        |i, r, m| i.post_list_rag_corpora_with_metadata(r, m),
    ),
);

pub static DELETE_RAG_CORPUS: RpcCallable<Interceptor, DeleteRagCorpusRequest, Operation> =
    RpcCallable::new(
        &routes::DELETE_RAG_CORPUS,
        Hooks::new(
            |i, r, m| i.pre_delete_rag_corpus(r, m),
            |i, r| i.post_delete_rag_corpus(r),
            |i, r, m| i.post_delete_rag_corpus_with_metadata(r, m),
        ),
    );

pub static IMPORT_RAG_FILES: RpcCallable<Interceptor, ImportRagFilesRequest, Operation> =
    RpcCallable::new(
        &routes::IMPORT_RAG_FILES,
        Hooks::new(
            |i, r, m| i.pre_import_rag_files(r, m),
            |i, r| i.post_import_rag_files(r),
            |i, r, m| i.post_import_rag_files_with_metadata(r, m),
        ),
    );

pub static GET_RAG_FILE: RpcCallable<Interceptor, GetRagFileRequest, RagFile> =
    RpcCallable::new(
        &routes::GET_RAG_FILE,
        Hooks::new(
            |i, r, m| i.pre_get_rag_file(r, m),
            |i, r| i.post_get_rag_file(r),
            |i, r, m| i.post_get_rag_file_with_metadata(r, m),
        ),
    );

pub static LIST_RAG_FILES: RpcCallable<Interceptor, ListRagFilesRequest, ListRagFilesResponse> =
    RpcCallable::new(
        &routes::LIST_RAG_FILES,
        Hooks::new(
            |i, r, m| i.pre_list_rag_files(r, m),
            |i, r| i.post_list_rag_files(r),
            |i, r, m| i.post_list_rag_files_with_metadata(r, m),
        ),
    );

pub static DELETE_RAG_FILE: RpcCallable<Interceptor, DeleteRagFileRequest, Operation> =
    RpcCallable::new(
        &routes::DELETE_RAG_FILE,
        Hooks::new(
            |i, r, m| i.pre_delete_rag_file(r, m),
            |i, r| i.post_delete_rag_file(r),
            |i, r, m| i.post_delete_rag_file_with_metadata(r, m),
        ),
    );

/// REST client of the RAG Data service.
///
/// Cloning is cheap: clones share the session, the interceptor and the operations client.
#[derive(Debug, Clone)]
pub struct VertexRagDataServiceRestTransport {
    transport: RestTransport<Interceptor>,
}

impl VertexRagDataServiceRestTransport {
    /// A builder preloaded with the `v1` prefix, the operation URL families and the
    /// identity interceptor.
    pub fn builder() -> RestTransportBuilder<Interceptor> {
        let interceptor: Arc<Interceptor> = Arc::new(DefaultVertexRagDataServiceInterceptor);
        RestTransportBuilder::new(VERSION, interceptor, operation_routes::for_prefix)
    }

    pub fn transport(&self) -> &RestTransport<Interceptor> {
        &self.transport
    }

    pub async fn create_rag_corpus(
        &self,
        request: CreateRagCorpusRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<RagCorpus, CreateRagCorpusOperationMetadata>, Error> {
        let operation = CREATE_RAG_CORPUS
            .call(&self.transport, request, options)
            .await?;
        Ok(self.transport.operation_handle(operation))
    }

    /// Updates a corpus; the target is `rag_corpus.name`.
    pub async fn update_rag_corpus(
        &self,
        request: UpdateRagCorpusRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<RagCorpus, UpdateRagCorpusOperationMetadata>, Error> {
        let operation = UPDATE_RAG_CORPUS
            .call(&self.transport, request, options)
            .await?;
        Ok(self.transport.operation_handle(operation))
    }

    pub async fn get_rag_corpus(
        &self,
        request: GetRagCorpusRequest,
        options: CallOptions,
    ) -> Result<RagCorpus, Error> {
        GET_RAG_CORPUS.call(&self.transport, request, options).await
    }

    /// One page of corpora; follow `next_page_token` for the rest.
    pub async fn list_rag_corpora(
        &self,
        request: ListRagCorporaRequest,
        options: CallOptions,
    ) -> Result<ListRagCorporaResponse, Error> {
        LIST_RAG_CORPORA.call(&self.transport, request, options).await
    }

    pub async fn delete_rag_corpus(
        &self,
        request: DeleteRagCorpusRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<Empty, DeleteOperationMetadata>, Error> {
        let operation = DELETE_RAG_CORPUS
            .call(&self.transport, request, options)
            .await?;
        Ok(self.transport.operation_handle(operation))
    }

    pub async fn import_rag_files(
        &self,
        request: ImportRagFilesRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<ImportRagFilesResponse, ImportRagFilesOperationMetadata>, Error>
    {
        let operation = IMPORT_RAG_FILES
            .call(&self.transport, request, options)
            .await?;
        tracing::debug!(operation = %operation.name, "Import of RAG files started");
        Ok(self.transport.operation_handle(operation))
    }

    pub async fn get_rag_file(
        &self,
        request: GetRagFileRequest,
        options: CallOptions,
    ) -> Result<RagFile, Error> {
        GET_RAG_FILE.call(&self.transport, request, options).await
    }

    pub async fn list_rag_files(
        &self,
        request: ListRagFilesRequest,
        options: CallOptions,
    ) -> Result<ListRagFilesResponse, Error> {
        LIST_RAG_FILES.call(&self.transport, request, options).await
    }

    pub async fn delete_rag_file(
        &self,
        request: DeleteRagFileRequest,
        options: CallOptions,
    ) -> Result<OperationHandle<Empty, DeleteOperationMetadata>, Error> {
        let operation = DELETE_RAG_FILE
            .call(&self.transport, request, options)
            .await?;
        Ok(self.transport.operation_handle(operation))
    }

    /// Every RPC of the service, keyed by name.
    pub fn callables() -> HashMap<&'static str, &'static dyn Callable> {
        let callables: [&'static dyn Callable; 9] = [
            &CREATE_RAG_CORPUS,
            &UPDATE_RAG_CORPUS,
            &GET_RAG_CORPUS,
            &LIST_RAG_CORPORA,
            &DELETE_RAG_CORPUS,
            &IMPORT_RAG_FILES,
            &GET_RAG_FILE,
            &LIST_RAG_FILES,
            &DELETE_RAG_FILE,
        ];
        callables
            .into_iter()
            .map(|callable| (callable.rpc(), callable))
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

impl From<RestTransport<Interceptor>> for VertexRagDataServiceRestTransport {
    fn from(transport: RestTransport<Interceptor>) -> Self {
        Self { transport }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiplatform_rest_core::http::AnonymousCredentials;

    #[test]
    fn test_callables_cover_every_route() {
        let callables = VertexRagDataServiceRestTransport::callables();

        assert_eq!(callables.len(), 9);
        assert_eq!(
            callables["ImportRagFiles"].route().rules()[0].uri,
            "/{parent=projects/*/locations/*/ragCorpora/*}/ragFiles:import"
        );
        assert!(callables["GetRagFile"].route().is_idempotent());
        assert!(!callables["CreateRagCorpus"].route().is_idempotent());
    }

    #[test]
    fn test_builder_targets_v1() {
        let client: VertexRagDataServiceRestTransport = VertexRagDataServiceRestTransport::builder()
            .credentials(Arc::new(AnonymousCredentials))
            .build()
            .unwrap()
            .into();

        assert_eq!(
            client.transport().base_url().as_str(),
            "https://aiplatform.googleapis.com/v1/"
        );
        assert!(std::ptr::eq(
            client.operations().routes(),
            operation_routes::for_prefix("v1")
        ));
    }
}
