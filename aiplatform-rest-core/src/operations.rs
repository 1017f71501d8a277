//! # Long-Running Operations
//!
//! Mutating RPCs answer with an [`Operation`]: an opaque resource name such as
//! `projects/p/locations/l/ragCorpora/c/operations/op1` plus a `done` flag. This module
//! addresses those names and drives them to completion.
//!
//! ## How it works
//!
//! 1. **Routing:** [`OperationRoutes`] keeps one URL family per [`OperationVerb`]. A name is
//!    resolved against the family of the requested verb; the match with the longest
//!    concrete prefix wins.
//! 2. **Calls:** [`OperationsClient`] issues the resolved HTTP call through the transport's
//!    session. `list` is a lazy stream over pages.
//! 3. **Waiting:** `wait` polls per [`PollingPolicy`], optionally holding each poll open on
//!    the server (`:wait`) and falling back to plain `Get` polling when that is unsupported.
//! 4. **Typing:** [`OperationHandle`] binds an operation to its declared result and metadata
//!    messages and unpacks them when it finishes.
mod client;
mod handle;
mod polling;
mod routes;
mod types;

pub use client::OperationsClient;
pub use handle::OperationHandle;
pub use polling::PollingPolicy;
pub use routes::{OperationRoutes, OperationVerb};
pub use types::{ListOperationsRequest, ListOperationsResponse, Operation, OperationResult};
