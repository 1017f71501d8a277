//! # Credentials
//!
//! The session does not acquire credentials itself; it asks a [`CredentialsProvider`] for an
//! access token and caches it until shortly before it expires. Refreshes are serialised so
//! that concurrent callers share a single in-flight token request.
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Tokens are refreshed this long before their advertised expiry.
const REFRESH_BUFFER: Duration = Duration::from_secs(60);

#[derive(thiserror::Error, Debug)]
pub enum CredentialsError {
    #[error("Failed to read credentials file '{path}': '{source}'")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Credentials file '{path}' is not valid: '{source}'")]
    InvalidFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to obtain an access token: '{0}'")]
    Provider(#[source] crate::BoxError),
}

/// What the transport asks a provider for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRequest {
    pub scopes: Vec<String>,
    pub audience: Option<String>,
    /// Prefer self-signed JWTs over OAuth access tokens where the provider supports both.
    pub always_use_jwt_access: bool,
}

#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    /// `None` means the token never expires.
    pub expires_at: Option<SystemTime>,
}

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    pub fn expiring_in(token: impl Into<String>, ttl: Duration) -> Self {
        Self {
            token: token.into(),
            expires_at: Some(SystemTime::now() + ttl),
        }
    }

    fn is_fresh(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => SystemTime::now() + REFRESH_BUFFER < expires_at,
            None => true,
        }
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// A source of bearer tokens.
///
/// Returning `Ok(None)` means the calls are sent without an `Authorization` header.
#[async_trait]
pub trait CredentialsProvider: Send + Sync + 'static {
    async fn token(&self, request: &TokenRequest) -> Result<Option<AccessToken>, CredentialsError>;
}

/// A fixed token.
#[derive(Debug, Clone)]
pub struct StaticToken(AccessToken);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(AccessToken::new(token))
    }

    pub fn expiring_in(token: impl Into<String>, ttl: Duration) -> Self {
        Self(AccessToken::expiring_in(token, ttl))
    }

    /// Loads `{"access_token": "...", "expires_in": 3600}` from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CredentialsError> {
        #[derive(Deserialize)]
        struct TokenFile {
            access_token: String,
            #[serde(default)]
            expires_in: Option<u64>,
        }

        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CredentialsError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let file: TokenFile =
            serde_json::from_slice(&bytes).map_err(|source| CredentialsError::InvalidFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(match file.expires_in {
            Some(seconds) => Self::expiring_in(file.access_token, Duration::from_secs(seconds)),
            None => Self::new(file.access_token),
        })
    }
}

#[async_trait]
impl CredentialsProvider for StaticToken {
    async fn token(&self, _: &TokenRequest) -> Result<Option<AccessToken>, CredentialsError> {
        Ok(Some(self.0.clone()))
    }
}

/// Sends every call unauthenticated. Useful against emulators and fake servers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousCredentials;

#[async_trait]
impl CredentialsProvider for AnonymousCredentials {
    async fn token(&self, _: &TokenRequest) -> Result<Option<AccessToken>, CredentialsError> {
        Ok(None)
    }
}

/// Caches the provider's token and serialises refreshes.
pub(crate) struct TokenCache {
    provider: Arc<dyn CredentialsProvider>,
    request: TokenRequest,
    token: RwLock<Option<AccessToken>>,
    refresh: tokio::sync::Mutex<()>,
}

impl TokenCache {
    pub(crate) fn new(provider: Arc<dyn CredentialsProvider>, request: TokenRequest) -> Self {
        Self {
            provider,
            request,
            token: RwLock::new(None),
            refresh: tokio::sync::Mutex::new(()),
        }
    }

    fn cached(&self) -> Option<AccessToken> {
        self.token
            .read()
            .as_ref()
            .filter(|token| token.is_fresh())
            .cloned()
    }

    /// The `Authorization` header value, or `None` for anonymous calls.
    pub(crate) async fn authorization(&self) -> Result<Option<String>, CredentialsError> {
        if let Some(token) = self.cached() {
            return Ok(Some(format!("Bearer {}", token.token)));
        }

        let _guard = self.refresh.lock().await;
        // Another caller may have refreshed while we were waiting.
        if let Some(token) = self.cached() {
            return Ok(Some(format!("Bearer {}", token.token)));
        }

        tracing::info!(scopes = ?self.request.scopes, "Refreshing access token");
        let Some(token) = self.provider.token(&self.request).await? else {
            return Ok(None);
        };
        let header = format!("Bearer {}", token.token);
        *self.token.write() = Some(token);
        Ok(Some(header))
    }
}

impl fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCache")
            .field("request", &self.request)
            .field("token", &*self.token.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CredentialsProvider for CountingProvider {
        async fn token(&self, _: &TokenRequest) -> Result<Option<AccessToken>, CredentialsError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(Some(AccessToken::expiring_in(
                format!("token-{n}"),
                Duration::from_secs(3600),
            )))
        }
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_refresh() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });
        let cache = Arc::new(TokenCache::new(provider.clone(), TokenRequest::default()));

        let calls = (0..16).map(|_| {
            let cache = cache.clone();
            tokio::spawn(async move { cache.authorization().await.unwrap() })
        });
        let headers = futures_util::future::join_all(calls).await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        for header in headers {
            assert_eq!(header.unwrap(), Some("Bearer token-0".to_string()));
        }
    }

    #[tokio::test]
    async fn test_expired_tokens_are_refreshed() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });
        let cache = TokenCache::new(provider.clone(), TokenRequest::default());
        *cache.token.write() = Some(AccessToken::expiring_in("stale", Duration::from_secs(1)));

        let header = cache.authorization().await.unwrap();

        assert_eq!(header, Some("Bearer token-0".to_string()));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_anonymous_sends_no_header() {
        let cache = TokenCache::new(Arc::new(AnonymousCredentials), TokenRequest::default());
        assert_eq!(cache.authorization().await.unwrap(), None);
    }

    #[test]
    fn test_token_file() {
        let dir = std::env::temp_dir().join(format!("aiplatform-token-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("token.json");
        std::fs::write(&path, r#"{"access_token":"abc","expires_in":3600}"#).unwrap();

        let token = StaticToken::from_file(&path).unwrap();
        assert_eq!(token.0.token, "abc");
        assert!(token.0.expires_at.is_some());

        let err = StaticToken::from_file(dir.join("missing.json")).unwrap_err();
        assert!(matches!(err, CredentialsError::ReadFile { .. }));
    }
}
