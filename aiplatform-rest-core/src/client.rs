//! # REST Transport
//!
//! A [`RestTransport`] is what every typed service client is built on. It owns:
//!
//! * the authenticated [`Session`] (one connection pool, one token cache),
//! * the base URL (`scheme://host/<prefix>/`) every route path is appended to,
//! * the default retry, timeout and polling policies,
//! * the interceptor object of the service, shared read-only by all calls,
//! * a lazily created [`OperationsClient`] bound to the surface's operation URL families.
//!
//! Cloning a transport is cheap; clones share all of the above.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aiplatform_rest_core::{
//!     client::RestTransportBuilder,
//!     config::ClientConfig,
//!     http::StaticToken,
//!     operations::OperationRoutes,
//! };
//! use once_cell::sync::Lazy;
//! use std::sync::Arc;
//!
//! static ROUTES: Lazy<OperationRoutes> =
//!     Lazy::new(|| OperationRoutes::new(&["projects/*/locations/*"]));
//!
//! struct NoopInterceptor;
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = RestTransportBuilder::new("v1", Arc::new(NoopInterceptor), |_| &*ROUTES)
//!     .config(ClientConfig::default())
//!     .credentials(Arc::new(StaticToken::new("token")))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
mod callable;

pub use callable::{Callable, RpcCallable};

use crate::{
    Metadata,
    config::{ClientConfig, ConfigError},
    http::{
        ClientCertSource, CredentialsProvider, RetryPolicy, Session, SessionSettings,
        StaticToken, TokenRequest,
    },
    message::Message,
    operations::{Operation, OperationHandle, OperationRoutes, OperationsClient, PollingPolicy},
};
use once_cell::sync::OnceCell;
use std::{fmt, sync::Arc, time::Duration};
use url::Url;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-call overrides of the transport defaults.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub retry: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
    pub metadata: Metadata,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a request header.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }
}

struct Inner<I: ?Sized> {
    session: Arc<Session>,
    base_url: Url,
    prefix: String,
    retry: RetryPolicy,
    timeout: Option<Duration>,
    polling: PollingPolicy,
    operation_routes: &'static OperationRoutes,
    operations: OnceCell<OperationsClient>,
    interceptor: Arc<I>,
}

pub struct RestTransport<I: ?Sized> {
    inner: Arc<Inner<I>>,
}

impl<I: ?Sized> RestTransport<I> {
    pub fn session(&self) -> &Arc<Session> {
        &self.inner.session
    }

    /// `scheme://host/<prefix>/`.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The API prefix in use (`v1`, `v1beta1` or `ui`).
    pub fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    pub fn interceptor(&self) -> &I {
        &self.inner.interceptor
    }

    pub fn default_retry(&self) -> RetryPolicy {
        self.inner.retry
    }

    pub fn default_timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    /// The operations client, created on first access.
    pub fn operations(&self) -> &OperationsClient {
        self.inner.operations.get_or_init(|| {
            tracing::debug!(prefix = %self.inner.prefix, "Creating the operations client");
            OperationsClient::new(
                self.inner.session.clone(),
                self.inner.base_url.clone(),
                self.inner.operation_routes,
                self.inner.retry,
                self.inner.polling,
            )
        })
    }

    /// Binds an operation returned by a mutating RPC to its result and metadata types.
    pub fn operation_handle<R: Message, M: Message>(
        &self,
        operation: Operation,
    ) -> OperationHandle<R, M> {
        OperationHandle::new(operation, self.operations().clone())
    }

    /// Closes the session; later calls fail with
    /// [`ErrorKind::TransportClosed`](crate::ErrorKind::TransportClosed).
    pub fn close(&self) {
        self.inner.session.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.session.is_closed()
    }
}

impl<I: ?Sized> Clone for RestTransport<I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I: ?Sized> fmt::Debug for RestTransport<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestTransport")
            .field("base_url", &self.inner.base_url.as_str())
            .field("session", &self.inner.session)
            .field("retry", &self.inner.retry)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

/// Builds a [`RestTransport`] from a [`ClientConfig`] plus the runtime-only parameters.
pub struct RestTransportBuilder<I: ?Sized> {
    version: &'static str,
    config: ClientConfig,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    cert_source: Option<ClientCertSource>,
    interceptor: Arc<I>,
    operation_routes: fn(&str) -> &'static OperationRoutes,
}

impl<I: ?Sized> RestTransportBuilder<I> {
    /// `version` is the service's own URL prefix; `operation_routes` maps the prefix in use
    /// to its operation URL families.
    pub fn new(
        version: &'static str,
        interceptor: Arc<I>,
        operation_routes: fn(&str) -> &'static OperationRoutes,
    ) -> Self {
        Self {
            version,
            config: ClientConfig::default(),
            credentials: None,
            cert_source: None,
            interceptor,
            operation_routes,
        }
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn client_cert_source(mut self, source: ClientCertSource) -> Self {
        self.cert_source = Some(source);
        self
    }

    pub fn interceptor(mut self, interceptor: Arc<I>) -> Self {
        self.interceptor = interceptor;
        self
    }

    pub fn build(self) -> Result<RestTransport<I>, ConfigError> {
        let config = self.config;
        let credentials: Arc<dyn CredentialsProvider> =
            match (self.credentials, &config.credentials_file) {
                (Some(_), Some(_)) => return Err(ConfigError::DuplicateCredentials),
                (Some(credentials), None) => credentials,
                (None, Some(path)) => Arc::new(StaticToken::from_file(path)?),
                (None, None) => return Err(ConfigError::MissingCredentials),
            };

        let base_url = config.base_url(self.version)?;
        let prefix = config.prefix(self.version).to_string();

        let user_agent = config.user_agent.clone().unwrap_or_else(|| {
            let mut agent = format!("aiplatform-rest/{VERSION} reqwest");
            if let Some(info) = &config.client_info {
                agent = format!("{info} {agent}");
            }
            agent
        });
        let api_client = match &config.client_info {
            Some(info) => format!("{info} gccl/{VERSION} rest/reqwest"),
            None => format!("gccl/{VERSION} rest/reqwest"),
        };

        let session = Session::new(
            SessionSettings {
                user_agent,
                api_client,
                quota_project_id: config.quota_project_id.clone(),
                pool_idle_timeout: config.pool_idle_timeout,
                pool_max_idle_per_host: config.pool_max_idle_per_host,
            },
            credentials,
            TokenRequest {
                scopes: config.scopes.clone(),
                audience: config.api_audience.clone(),
                always_use_jwt_access: config.always_use_jwt_access,
            },
            self.cert_source,
        );

        tracing::debug!(base_url = %base_url, "Built REST transport");
        Ok(RestTransport {
            inner: Arc::new(Inner {
                session: Arc::new(session),
                base_url,
                operation_routes: (self.operation_routes)(&prefix),
                prefix,
                retry: config.retry,
                timeout: config.timeout,
                polling: config.polling,
                operations: OnceCell::new(),
                interceptor: self.interceptor,
            }),
        })
    }
}
