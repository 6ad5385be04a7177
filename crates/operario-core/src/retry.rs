//! Bounded attempts helper for flaky operations.
//!
//! Robot steps that talk to unreliable sites or services are wrapped in a
//! fixed number of attempts with a constant wait. This is deliberately not
//! a scheduler: no backoff curves, no queues, just "try N times".

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// How many times to attempt an operation and how long to wait in between.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Wait between attempts.
    pub wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            wait: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Policy with `max_attempts` attempts and the default one-second wait.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Set the wait between attempts.
    #[must_use]
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Run `operation` until it succeeds or attempts are exhausted.
    ///
    /// Each failed attempt is logged as a warning; the final error is
    /// returned unchanged so callers keep their typed errors.
    pub async fn run<F, Fut, T, E>(&self, name: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let max = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < max => {
                    tracing::warn!("Attempt {}/{} of '{}' failed: {}", attempt, max, name, err);
                    tokio::time::sleep(self.wait).await;
                    attempt += 1;
                }
                Err(err) => {
                    tracing::error!(
                        "'{}' failed after {} attempt(s): {}",
                        name,
                        attempt,
                        err
                    );
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_succeeds_first_attempt() {
        let policy = RetryPolicy::default();
        let result: Result<i32, String> = policy.run("noop", || async { Ok(42) }).await;
        assert_eq!(result.expect("first attempt"), 42);
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let policy = RetryPolicy::new(3).with_wait(Duration::from_millis(1));
        let calls = AtomicU32::new(0);
        let result: Result<&str, String> = policy
            .run("flaky", || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err("not yet".to_string())
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;
        assert_eq!(result.expect("third attempt"), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_returns_last_error_when_exhausted() {
        let policy = RetryPolicy::new(2).with_wait(Duration::from_millis(1));
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = policy
            .run("always-fails", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err("boom".to_string()) }
            })
            .await;
        assert_eq!(result.expect_err("exhausted"), "boom");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_runs_once() {
        let policy = RetryPolicy::new(0).with_wait(Duration::from_millis(1));
        let result: Result<i32, String> = policy.run("noop", || async { Ok(7) }).await;
        assert_eq!(result.expect("one attempt"), 7);
    }
}
