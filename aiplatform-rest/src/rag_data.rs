//! # RAG Data Service (`v1`)
//!
//! Manages RAG corpora and the files imported into them.
//!
//! | RPC | HTTP | Returns |
//! |-----|------|---------|
//! | `CreateRagCorpus` | `POST /v1/{parent}/ragCorpora` | operation → [`RagCorpus`] |
//! | `UpdateRagCorpus` | `PATCH /v1/{rag_corpus.name}` | operation → [`RagCorpus`] |
//! | `GetRagCorpus` | `GET /v1/{name}` | [`RagCorpus`] |
//! | `ListRagCorpora` | `GET /v1/{parent}/ragCorpora` | [`ListRagCorporaResponse`] |
//! | `DeleteRagCorpus` | `DELETE /v1/{name}` | operation → empty |
//! | `ImportRagFiles` | `POST /v1/{parent}/ragFiles:import` | operation → [`ImportRagFilesResponse`] |
//! | `GetRagFile` | `GET /v1/{name}` | [`RagFile`] |
//! | `ListRagFiles` | `GET /v1/{parent}/ragFiles` | [`ListRagFilesResponse`] |
//! | `DeleteRagFile` | `DELETE /v1/{name}` | operation → empty |
//!
//! Direct file uploads go through a separate multipart endpoint and are not exposed here.
mod interceptor;
pub mod routes;
mod transport;
mod types;

pub use interceptor::{DefaultVertexRagDataServiceInterceptor, VertexRagDataServiceInterceptor};
pub use transport::{
    CREATE_RAG_CORPUS, DELETE_RAG_CORPUS, DELETE_RAG_FILE, GET_RAG_CORPUS, GET_RAG_FILE,
    IMPORT_RAG_FILES, LIST_RAG_CORPORA, LIST_RAG_FILES, UPDATE_RAG_CORPUS, VERSION,
    VertexRagDataServiceRestTransport,
};
pub use types::*;
