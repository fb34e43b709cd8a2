use std::fmt::Display;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Attempt budget and fixed pause for startup operations.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` is raised to at least one.
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts: max_attempts.max(1), delay }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Run `operation` until it succeeds or the policy's attempt budget is spent.
/// Returns the last error when every attempt fails.
pub async fn retry_with_policy<F, Fut, T, E>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: Display,
{
    let max = policy.max_attempts();
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!(attempt, "operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(error) if attempt >= max => {
                warn!(attempt, max, %error, "operation failed, no attempts left");
                return Err(error);
            }
            Err(error) => {
                let delay = policy.delay();
                warn!(attempt, max, %error, retry_in = ?delay, "operation failed, retrying");
                sleep(delay).await;
                debug!(attempt = attempt + 1, "retrying");
                attempt += 1;
            }
        }
    }
}
