//! # AI Platform REST
//!
//! Typed REST clients for two Vertex AI services, built on `aiplatform-rest-core`:
//!
//! * **[`rag_data`]:** the RAG Data service (`v1`): corpora, files and file imports.
//! * **[`featurestore`]:** the Feature Store service (`v1beta1`): featurestores, entity
//!   types and features.
//!
//! Each service module exposes its messages, its route table, an interceptor trait whose
//! hooks default to identity, and a REST transport with one async method per RPC. Mutating
//! RPCs return an [`OperationHandle`](aiplatform_rest_core::operations::OperationHandle).
//!
//! ## Example
//!
//! ```rust,no_run
//! use aiplatform_rest::rag_data::{
//!     CreateRagCorpusRequest, RagCorpus, VertexRagDataServiceRestTransport,
//! };
//! use aiplatform_rest_core::{client::CallOptions, http::StaticToken};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client: VertexRagDataServiceRestTransport = VertexRagDataServiceRestTransport::builder()
//!     .credentials(Arc::new(StaticToken::new("ya29...")))
//!     .build()?
//!     .into();
//!
//! let request = CreateRagCorpusRequest {
//!     parent: "projects/p/locations/us-central1".to_string(),
//!     rag_corpus: Some(RagCorpus::default().with_display_name("docs")),
//! };
//! let corpus = client
//!     .create_rag_corpus(request, CallOptions::new())
//!     .await?
//!     .wait(None)
//!     .await?;
//! println!("created {}", corpus.name);
//! # Ok(())
//! # }
//! ```
mod common;
pub mod featurestore;
pub mod operation_routes;
pub mod rag_data;

pub use common::{DeleteOperationMetadata, GenericOperationMetadata};

// Re-exports
pub use aiplatform_rest_core;
