//! # Client Configuration
//!
//! [`ClientConfig`] gathers every construction parameter that can live in a file: host,
//! scheme, API surface, OAuth scopes, client identification, default call policies and
//! connection pool settings. Durations are written as strings (`"30s"`, `"100ms"`).
//!
//! ```json
//! {
//!   "host": "europe-west4-aiplatform.googleapis.com",
//!   "quota_project_id": "my-project",
//!   "timeout": "60s",
//!   "retry": { "max_attempts": 3, "backoff": { "initial": "200ms" } },
//!   "polling": { "timeout": "600s" }
//! }
//! ```
//!
//! Runtime-only parameters (credentials provider, client certificate callback, interceptor)
//! are given to the [`RestTransportBuilder`](crate::client::RestTransportBuilder).
use crate::{
    http::{RetryPolicy, credentials::CredentialsError},
    operations::PollingPolicy,
};
use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

pub const DEFAULT_HOST: &str = "aiplatform.googleapis.com";
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Errors raised while building a transport.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Both a credentials provider and a credentials file were supplied")]
    DuplicateCredentials,
    #[error("No credentials provider or credentials file was supplied")]
    MissingCredentials,
    #[error("Failed to read config file '{path}': '{source}'")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': '{source}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid host '{host}': '{source}'")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
}

/// Which URL prefix the transport talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiSurface {
    /// The service's own version prefix (`v1`, `v1beta1`).
    #[default]
    Default,
    /// The UI-oriented surface under `ui`.
    Ui,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_scopes() -> Vec<String> {
    vec![CLOUD_PLATFORM_SCOPE.to_string()]
}

fn default_pool_idle_timeout() -> Option<Duration> {
    Some(Duration::from_secs(90))
}

fn default_pool_max_idle_per_host() -> usize {
    32
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Host name, optionally with a port. A value carrying a scheme (`http://127.0.0.1:8080`)
    /// is used as-is and `url_scheme` is ignored.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_scheme")]
    pub url_scheme: String,
    #[serde(default)]
    pub surface: ApiSurface,
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub quota_project_id: Option<String>,
    /// Replaces the generated `user-agent` header when set.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Caller identification (`name/version`) prepended to the client headers.
    #[serde(default)]
    pub client_info: Option<String>,
    #[serde(default)]
    pub always_use_jwt_access: bool,
    #[serde(default)]
    pub api_audience: Option<String>,
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
    /// Default end-to-end deadline of every RPC.
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub retry: RetryPolicy,
    #[serde(default)]
    pub polling: PollingPolicy,
    #[serde(
        default = "default_pool_idle_timeout",
        deserialize_with = "deserialize_option_duration"
    )]
    pub pool_idle_timeout: Option<Duration>,
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            url_scheme: default_scheme(),
            surface: ApiSurface::default(),
            scopes: default_scopes(),
            quota_project_id: None,
            user_agent: None,
            client_info: None,
            always_use_jwt_access: false,
            api_audience: None,
            credentials_file: None,
            timeout: None,
            retry: RetryPolicy::default(),
            polling: PollingPolicy::default(),
            pool_idle_timeout: default_pool_idle_timeout(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }
}

impl ClientConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_surface(mut self, surface: ApiSurface) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_polling(mut self, polling: PollingPolicy) -> Self {
        self.polling = polling;
        self
    }

    pub fn with_quota_project_id(mut self, project: impl Into<String>) -> Self {
        self.quota_project_id = Some(project.into());
        self
    }

    pub fn with_client_info(mut self, client_info: impl Into<String>) -> Self {
        self.client_info = Some(client_info.into());
        self
    }

    /// The URL prefix for a service whose own version is `version`.
    pub fn prefix<'a>(&self, version: &'a str) -> &'a str {
        match self.surface {
            ApiSurface::Default => version,
            ApiSurface::Ui => "ui",
        }
    }

    /// `scheme://host/prefix/`: the URL every route path is appended to.
    pub fn base_url(&self, version: &str) -> Result<Url, ConfigError> {
        let root = if self.host.contains("://") {
            self.host.clone()
        } else {
            format!("{}://{}", self.url_scheme, self.host)
        };
        let url = format!("{}/{}/", root.trim_end_matches('/'), self.prefix(version));
        Url::parse(&url).map_err(|source| ConfigError::InvalidHost {
            host: self.host.clone(),
            source,
        })
    }
}
