use std::fmt::{Debug, Display};
use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Bounded retry for bringing up an infrastructure dependency.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 5, delay: Duration::from_secs(5) }
    }
}

#[derive(Debug, Error)]
#[error("dependency unavailable after {attempts} attempts: {last_error}")]
pub struct ConnectError<E: Display + Debug> {
    pub attempts: u32,
    pub last_error: E,
}

/// Runs the factory until it yields a ready handle, or fails with a typed
/// error once the policy is exhausted.
pub async fn connect_with_retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut factory: F,
) -> Result<T, ConnectError<E>>
where
    E: Display + Debug,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match factory().await {
            Ok(handle) => return Ok(handle),
            Err(e) if attempt < policy.max_attempts => {
                tracing::warn!(
                    "Connect attempt {attempt}/{} failed, retrying in {:?}: {e}",
                    policy.max_attempts,
                    policy.delay
                );
                tokio::time::sleep(policy.delay).await;
            }
            Err(e) => return Err(ConnectError { attempts: attempt, last_error: e }),
        }
    }
}
