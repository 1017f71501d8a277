#![allow(dead_code)]

use aiplatform_rest_core::{
    config::ClientConfig,
    http::{Backoff, RetryPolicy},
    operations::PollingPolicy,
};
use std::time::Duration;

pub const TOKEN: &str = "test-token";

pub fn fast_backoff() -> Backoff {
    Backoff {
        initial: Duration::from_millis(10),
        multiplier: 2.0,
        max: Duration::from_millis(40),
        jitter: false,
    }
}

/// Points a client at the mock server with millisecond retries and polling.
pub fn config(uri: &str) -> ClientConfig {
    ClientConfig::default()
        .with_host(uri)
        .with_retry(RetryPolicy {
            backoff: fast_backoff(),
            max_attempts: 3,
        })
        .with_polling(PollingPolicy::default().with_backoff(fast_backoff()))
}
