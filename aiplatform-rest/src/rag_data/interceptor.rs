use super::types::*;
use aiplatform_rest_core::{Metadata, operations::Operation};

/// Hooks around every RAG Data RPC.
///
/// Every method defaults to passing its input through, so implementors only override the
/// hooks they care about. Mutating RPCs are observed as the raw [`Operation`] the server
/// returned, before it is wrapped in a handle.
///
/// `post_<rpc>` runs before `post_<rpc>_with_metadata`; new code should prefer the latter,
/// which also sees the response headers.
pub trait VertexRagDataServiceInterceptor: Send + Sync {
    fn pre_create_rag_corpus(
        &self,
        request: CreateRagCorpusRequest,
        metadata: Metadata,
    ) -> (CreateRagCorpusRequest, Metadata) {
        (request, metadata)
    }

    fn post_create_rag_corpus(&self, response: Operation) -> Operation {
        response
    }

    fn post_create_rag_corpus_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_update_rag_corpus(
        &self,
        request: UpdateRagCorpusRequest,
        metadata: Metadata,
    ) -> (UpdateRagCorpusRequest, Metadata) {
        (request, metadata)
    }

    fn post_update_rag_corpus(&self, response: Operation) -> Operation {
        response
    }

    fn post_update_rag_corpus_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_get_rag_corpus(
        &self,
        request: GetRagCorpusRequest,
        metadata: Metadata,
    ) -> (GetRagCorpusRequest, Metadata) {
        (request, metadata)
    }

    fn post_get_rag_corpus(&self, response: RagCorpus) -> RagCorpus {
        response
    }

    fn post_get_rag_corpus_with_metadata(
        &self,
        response: RagCorpus,
        metadata: Metadata,
    ) -> (RagCorpus, Metadata) {
        (response, metadata)
    }

    fn pre_list_rag_corpora(
        &self,
        request: ListRagCorporaRequest,
        metadata: Metadata,
    ) -> (ListRagCorporaRequest, Metadata) {
        (request, metadata)
    }

    fn post_list_rag_corpora(&self, response: ListRagCorporaResponse) -> ListRagCorporaResponse {
        response
    }

    fn post_list_rag_corpora_with_metadata(
        &self,
        response: ListRagCorporaResponse,
        metadata: Metadata,
    ) -> (ListRagCorporaResponse, Metadata) {
        (response, metadata)
    }

    fn pre_delete_rag_corpus(
        &self,
        request: DeleteRagCorpusRequest,
        metadata: Metadata,
    ) -> (DeleteRagCorpusRequest, Metadata) {
        (request, metadata)
    }

    fn post_delete_rag_corpus(&self, response: Operation) -> Operation {
        response
    }

    fn post_delete_rag_corpus_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_import_rag_files(
        &self,
        request: ImportRagFilesRequest,
        metadata: Metadata,
    ) -> (ImportRagFilesRequest, Metadata) {
        (request, metadata)
    }

    fn post_import_rag_files(&self, response: Operation) -> Operation {
        response
    }

    fn post_import_rag_files_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }

    fn pre_get_rag_file(
        &self,
        request: GetRagFileRequest,
        metadata: Metadata,
    ) -> (GetRagFileRequest, Metadata) {
        (request, metadata)
    }

    fn post_get_rag_file(&self, response: RagFile) -> RagFile {
        response
    }

    fn post_get_rag_file_with_metadata(
        &self,
        response: RagFile,
        metadata: Metadata,
    ) -> (RagFile, Metadata) {
        (response, metadata)
    }

    fn pre_list_rag_files(
        &self,
        request: ListRagFilesRequest,
        metadata: Metadata,
    ) -> (ListRagFilesRequest, Metadata) {
        (request, metadata)
    }

    fn post_list_rag_files(&self, response: ListRagFilesResponse) -> ListRagFilesResponse {
        response
    }

    fn post_list_rag_files_with_metadata(
        &self,
        response: ListRagFilesResponse,
        metadata: Metadata,
    ) -> (ListRagFilesResponse, Metadata) {
        (response, metadata)
    }

    fn pre_delete_rag_file(
        &self,
        request: DeleteRagFileRequest,
        metadata: Metadata,
    ) -> (DeleteRagFileRequest, Metadata) {
        (request, metadata)
    }

    fn post_delete_rag_file(&self, response: Operation) -> Operation {
        response
    }

    fn post_delete_rag_file_with_metadata(
        &self,
        response: Operation,
        metadata: Metadata,
    ) -> (Operation, Metadata) {
        (response, metadata)
    }
}

/// The interceptor installed when none is supplied: every hook is the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVertexRagDataServiceInterceptor;

impl VertexRagDataServiceInterceptor for DefaultVertexRagDataServiceInterceptor {}
