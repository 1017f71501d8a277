//! # AI Platform REST Core
//!
//! `aiplatform-rest-core` is the transport engine behind the typed Vertex AI REST clients
//! in `aiplatform-rest`. It knows nothing about any particular service: every service
//! surface is described to it as data (route tables, message descriptors, operation URL
//! families) and it turns typed requests into authenticated HTTP/JSON calls.
//!
//! ## Key Components
//!
//! * **[`message`]:** The [`Message`] trait, static field descriptors and the canonical JSON
//!   codec (default omission, tag groups, well-known types).
//! * **[`routing`]:** URL templates (`{field=pattern}`), route tables and the transcoder that
//!   turns a request into a `(verb, path, query, body)` quadruple.
//! * **[`http`]:** The authenticated [`Session`](http::session::Session) with bearer token
//!   caching, optional mTLS and retry/deadline handling.
//! * **[`client`]:** The [`RestTransport`](client::RestTransport) and the per-RPC
//!   [`RpcCallable`](client::RpcCallable) dispatcher wrapping every call with
//!   interceptor hooks.
//! * **[`operations`]:** The long-running operations client, its per-verb URL families and
//!   the typed [`OperationHandle`](operations::OperationHandle).
//! * **[`error`]:** The error taxonomy and the HTTP status/body mapper.
//! * **[`config`]:** File-backed client configuration.
//!
//! ## Re-exports
//!
//! This crate re-exports `prost_types` (for `Timestamp`) and `serde_json` so that service
//! crates use compatible versions of these dependencies.
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod message;
pub mod operations;
pub mod routing;

pub use error::{Error, ErrorKind};
pub use message::Message;

// Re-exports
pub use prost_types;
pub use serde_json;

/// Type alias for the standard boxed error used in generic bounds.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outgoing or incoming metadata (HTTP headers) as ordered key/value pairs.
pub type Metadata = Vec<(String, String)>;
