//! # Authenticated Session
//!
//! A [`Session`] owns one pooled `reqwest` client for the lifetime of a transport. The
//! client is built on first use, which is also when the optional client certificate
//! callback runs. Every request carries the default headers, a bearer token from the
//! [`TokenCache`] and the caller's metadata.
//!
//! [`Session::execute`] layers the retry policy and the caller's deadline on top of
//! [`Session::send`] and maps every non-success status to an [`Error`].
use super::{
    credentials::{CredentialsError, CredentialsProvider, TokenCache, TokenRequest},
    retry::RetryPolicy,
};
use crate::{
    BoxError, Metadata,
    error::{Error, ErrorKind},
};
use http::{HeaderMap, HeaderName, HeaderValue, header};
use parking_lot::RwLock;
use std::{fmt, str::FromStr, sync::Arc, time::Duration};
use url::Url;

/// Produces a PEM encoded `(certificate chain, private key)` pair for mutual TLS.
pub type ClientCertSource = Arc<dyn Fn() -> Result<(Vec<u8>, Vec<u8>), BoxError> + Send + Sync>;

/// Static properties of a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub user_agent: String,
    /// Value of the `x-goog-api-client` header.
    pub api_client: String,
    pub quota_project_id: Option<String>,
    pub pool_idle_timeout: Option<Duration>,
    pub pool_max_idle_per_host: usize,
}

/// An outgoing HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: http::Method,
    pub url: Url,
    pub metadata: Metadata,
    pub body: Option<Vec<u8>>,
}

/// A received HTTP response, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// The response headers as metadata pairs (non UTF-8 values are skipped).
    pub fn metadata(&self) -> Metadata {
        self.headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect()
    }
}

enum State {
    Idle,
    Ready(reqwest::Client),
    Closed,
}

pub struct Session {
    settings: SessionSettings,
    tokens: TokenCache,
    cert_source: Option<ClientCertSource>,
    state: RwLock<State>,
}

impl Session {
    pub fn new(
        settings: SessionSettings,
        credentials: Arc<dyn CredentialsProvider>,
        token_request: TokenRequest,
        cert_source: Option<ClientCertSource>,
    ) -> Self {
        Self {
            settings,
            tokens: TokenCache::new(credentials, token_request),
            cert_source,
            state: RwLock::new(State::Idle),
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    fn client(&self) -> Result<reqwest::Client, Error> {
        match &*self.state.read() {
            State::Ready(client) => return Ok(client.clone()),
            State::Closed => return Err(Error::transport_closed()),
            State::Idle => {}
        }

        let mut state = self.state.write();
        match &*state {
            State::Ready(client) => Ok(client.clone()),
            State::Closed => Err(Error::transport_closed()),
            State::Idle => {
                let client = self.build_client()?;
                *state = State::Ready(client.clone());
                Ok(client)
            }
        }
    }

    fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            HeaderName::from_static("x-goog-api-client"),
            header_value("x-goog-api-client", &self.settings.api_client)?,
        );
        if let Some(project) = &self.settings.quota_project_id {
            headers.insert(
                HeaderName::from_static("x-goog-user-project"),
                header_value("x-goog-user-project", project)?,
            );
        }

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(self.settings.user_agent.as_str())
            .default_headers(headers)
            .pool_idle_timeout(self.settings.pool_idle_timeout)
            .pool_max_idle_per_host(self.settings.pool_max_idle_per_host);

        if let Some(source) = &self.cert_source {
            let (cert, key) = source().map_err(|e| {
                Error::new(
                    ErrorKind::Unauthenticated,
                    format!("client certificate source failed: {e}"),
                )
                .with_source(e)
            })?;
            let mut pem = cert;
            pem.push(b'\n');
            pem.extend_from_slice(&key);
            let identity = reqwest::Identity::from_pem(&pem).map_err(|e| {
                Error::new(
                    ErrorKind::Unauthenticated,
                    format!("invalid client certificate: {e}"),
                )
                .with_source(e)
            })?;
            tracing::debug!("Using a client certificate for mutual TLS");
            builder = builder.identity(identity);
        }

        builder.build().map_err(|e| {
            Error::new(
                ErrorKind::Internal,
                format!("failed to build the HTTP client: {e}"),
            )
            .with_source(e)
        })
    }

    /// Sends one request and returns the response whatever its status.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let client = self.client()?;
        let authorization = self
            .tokens
            .authorization()
            .await
            .map_err(credentials_error)?;

        let mut headers = HeaderMap::new();
        for (key, value) in &request.metadata {
            let name = HeaderName::from_str(key).map_err(|e| {
                Error::new(
                    ErrorKind::InvalidArgument,
                    format!("Invalid metadata (header) key '{key}': '{e}'"),
                )
            })?;
            headers.append(name, header_value(key, value)?);
        }
        if let Some(authorization) = &authorization {
            let mut value = header_value("authorization", authorization)?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            headers = ?Redacted(&headers),
            body_len = request.body.as_ref().map_or(0, Vec::len),
            "Sending request"
        );

        let mut builder = client
            .request(request.method.clone(), request.url.clone())
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(network_error)?.to_vec();

        tracing::debug!(status, body_len = body.len(), "Received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// Sends a request under a retry policy and an end-to-end deadline.
    ///
    /// Statuses `>= 400` become errors. Retryable failures are repeated only when
    /// `idempotent` is set; an elapsed deadline is [`ErrorKind::DeadlineExceeded`].
    pub async fn execute(
        &self,
        request: &HttpRequest,
        retry: &RetryPolicy,
        idempotent: bool,
        timeout: Option<Duration>,
    ) -> Result<HttpResponse, Error> {
        let attempts = retry.run(idempotent, || self.attempt(request));
        match timeout {
            Some(timeout) => tokio::time::timeout(timeout, attempts)
                .await
                .map_err(|_| Error::deadline_exceeded(timeout))?,
            None => attempts.await,
        }
    }

    async fn attempt(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let response = self.send(request).await?;
        if response.status >= 400 {
            return Err(Error::from_http_response(
                response.status,
                &response.headers,
                &response.body,
            ));
        }
        Ok(response)
    }

    /// Drops the pooled client; later sends fail with [`ErrorKind::TransportClosed`].
    pub fn close(&self) {
        *self.state.write() = State::Closed;
        tracing::debug!("Session closed");
    }

    pub fn is_closed(&self) -> bool {
        matches!(*self.state.read(), State::Closed)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("settings", &self.settings)
            .field("tokens", &self.tokens)
            .field("mtls", &self.cert_source.is_some())
            .field("closed", &self.is_closed())
            .finish()
    }
}

fn header_value(key: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|e| {
        Error::new(
            ErrorKind::InvalidArgument,
            format!("Invalid metadata (header) value for key '{key}': '{e}'"),
        )
    })
}

fn network_error(e: reqwest::Error) -> Error {
    Error::new(ErrorKind::Unavailable, format!("network error: {e}")).with_source(e)
}

fn credentials_error(e: CredentialsError) -> Error {
    Error::new(ErrorKind::Unauthenticated, e.to_string())
        .with_source(e)
        .with_retryable(false)
}

/// Debug view of request headers that hides credentials.
struct Redacted<'a>(&'a HeaderMap);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(name, value)| {
                let shown = if name == header::AUTHORIZATION || value.is_sensitive() {
                    "<redacted>"
                } else {
                    value.to_str().unwrap_or("<binary>")
                };
                (name.as_str(), shown)
            }))
            .finish()
    }
}
