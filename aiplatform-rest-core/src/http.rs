//! # HTTP Layer
//!
//! * **[`session`]:** the pooled, authenticated client and its send/execute entry points.
//! * **[`credentials`]:** the token provider seam and the refresh-serialising token cache.
//! * **[`retry`]:** backoff and retry policy.
pub mod credentials;
pub mod retry;
pub mod session;

pub use credentials::{AccessToken, AnonymousCredentials, CredentialsProvider, StaticToken, TokenRequest};
pub use retry::{Backoff, RetryPolicy};
pub use session::{ClientCertSource, HttpRequest, HttpResponse, Session, SessionSettings};
