use crate::http::retry::Backoff;
use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

fn default_backoff() -> Backoff {
    Backoff {
        initial: Duration::from_secs(1),
        multiplier: 2.0,
        max: Duration::from_secs(60),
        jitter: false,
    }
}

/// How [`wait`](super::OperationsClient::wait) drives an operation to completion.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PollingPolicy {
    /// Delays between polls.
    #[serde(default = "default_backoff")]
    pub backoff: Backoff,
    /// Overall deadline of the wait; `None` waits forever.
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
    /// Ask the server to hold each poll open (`:wait`) instead of polling with `Get`.
    #[serde(default)]
    pub prefer_server_wait: bool,
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self {
            backoff: default_backoff(),
            timeout: None,
            prefer_server_wait: false,
        }
    }
}

impl PollingPolicy {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_server_wait(mut self, prefer_server_wait: bool) -> Self {
        self.prefer_server_wait = prefer_server_wait;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_json() {
        let policy: PollingPolicy = serde_json::from_value(serde_json::json!({
            "timeout": "300s",
            "prefer_server_wait": true
        }))
        .unwrap();

        assert_eq!(policy.timeout, Some(Duration::from_secs(300)));
        assert!(policy.prefer_server_wait);
        assert_eq!(policy.backoff.initial, Duration::from_secs(1));
    }
}
