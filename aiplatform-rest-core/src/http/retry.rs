//! # Retry Policy
//!
//! Exponential backoff with optional jitter, executed with `tokio_retry::RetryIf`. Only
//! errors flagged as retryable (network failures, `503`, `504`) are retried, and only for
//! routes that are safe to repeat.
use crate::error::Error;
use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{future::Future, iter, time::Duration};
use tokio_retry::{RetryIf, strategy::jitter};

fn default_initial() -> Duration {
    Duration::from_millis(100)
}

fn default_multiplier() -> f64 {
    2.0
}

fn default_max() -> Duration {
    Duration::from_secs(10)
}

fn default_jitter() -> bool {
    true
}

fn default_max_attempts() -> usize {
    5
}

/// Exponential delays: `initial`, `initial * multiplier`, ... capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Backoff {
    #[serde(default = "default_initial", deserialize_with = "deserialize_duration")]
    pub initial: Duration,
    /// Growth factor between delays; values below `1.0` are treated as `1.0`.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    #[serde(default = "default_max", deserialize_with = "deserialize_duration")]
    pub max: Duration,
    #[serde(default = "default_jitter")]
    pub jitter: bool,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            multiplier: default_multiplier(),
            max: default_max(),
            jitter: default_jitter(),
        }
    }
}

impl Backoff {
    /// An endless iterator of delays.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + Send + 'static {
        let multiplier = self.multiplier.max(1.0);
        let max = self.max;
        let with_jitter = self.jitter;

        iter::successors(Some(self.initial.min(max)), move |delay| {
            let nanos = (delay.as_nanos() as f64 * multiplier).round();
            if nanos >= max.as_nanos() as f64 {
                Some(max)
            } else {
                Some(Duration::from_nanos(nanos as u64))
            }
        })
        .map(move |delay| if with_jitter { jitter(delay) } else { delay })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RetryPolicy {
    #[serde(default)]
    pub backoff: Backoff,
    /// Total attempts, the first one included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            backoff: Backoff::default(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    /// Runs `action` until it succeeds, fails with a non-retryable error or the attempts
    /// are exhausted. Non-idempotent calls are attempted once.
    pub(crate) async fn run<A, Fut, T>(&self, idempotent: bool, action: A) -> Result<T, Error>
    where
        A: FnMut() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let retries = if idempotent {
            self.max_attempts.saturating_sub(1)
        } else {
            0
        };
        let strategy = self.backoff.delays().take(retries);

        let result = RetryIf::spawn(strategy, action, |err: &Error| {
            if err.is_retryable() {
                tracing::debug!(error = %err, "Retrying after transient failure");
            }
            err.is_retryable()
        })
        .await;

        if let Err(err) = &result {
            if err.is_retryable() && retries > 0 {
                tracing::warn!(error = %err, attempts = retries + 1, "Giving up after retries");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fixed() -> RetryPolicy {
        RetryPolicy {
            backoff: Backoff {
                initial: Duration::from_millis(1),
                multiplier: 1.0,
                max: Duration::from_millis(1),
                jitter: false,
            },
            max_attempts: 3,
        }
    }

    #[test]
    fn test_delays_grow_and_cap() {
        let backoff = Backoff {
            initial: Duration::from_millis(100),
            multiplier: 2.0,
            max: Duration::from_millis(500),
            jitter: false,
        };

        let delays: Vec<_> = backoff.delays().take(4).collect();

        assert_eq!(
            delays,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(400),
                Duration::from_millis(500),
            ]
        );
    }

    #[test]
    fn test_first_delay_is_the_initial_delay() {
        let backoff = Backoff {
            initial: Duration::from_millis(150),
            multiplier: 4.0,
            max: Duration::from_secs(10),
            jitter: false,
        };

        let delays: Vec<_> = backoff.delays().take(2).collect();

        assert_eq!(
            delays,
            vec![Duration::from_millis(150), Duration::from_millis(600)]
        );
    }

    #[test]
    fn test_fractional_multiplier() {
        let backoff = Backoff {
            initial: Duration::from_millis(100),
            multiplier: 1.5,
            max: Duration::from_millis(300),
            jitter: false,
        };

        let delays: Vec<_> = backoff.delays().take(4).collect();

        assert_eq!(
            delays,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(150),
                Duration::from_millis(225),
                Duration::from_millis(300),
            ]
        );
    }

    #[test]
    fn test_fractional_multiplier_from_json() {
        let backoff: Backoff = serde_json::from_value(serde_json::json!({
            "initial": "1s",
            "multiplier": 1.3,
            "jitter": false
        }))
        .unwrap();

        let delays: Vec<_> = backoff.delays().take(3).collect();

        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_millis(1300),
                Duration::from_millis(1690),
            ]
        );
    }

    #[tokio::test]
    async fn test_retries_only_retryable_errors() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), Error> = fixed()
            .run(true, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(Error::new(ErrorKind::NotFound, "missing"))
            })
            .await;

        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let calls = AtomicUsize::new(0);
        let result = fixed()
            .run(true, || async {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(Error::new(ErrorKind::Unavailable, "busy"))
                } else {
                    Ok("done")
                }
            })
            .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_idempotent_calls_are_not_retried() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), Error> = fixed()
            .run(false, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(Error::new(ErrorKind::Unavailable, "busy"))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_policy_from_json() {
        let policy: RetryPolicy = serde_json::from_value(serde_json::json!({
            "backoff": {"initial": "250ms", "max": "2s"},
            "max_attempts": 4
        }))
        .unwrap();

        assert_eq!(policy.backoff.initial, Duration::from_millis(250));
        assert_eq!(policy.backoff.max, Duration::from_secs(2));
        assert_eq!(policy.backoff.multiplier, 2.0);
        assert_eq!(policy.max_attempts, 4);
    }
}
