use std::{future::Future, time::Duration};

use crate::error::{GeminiError, Result};

/// Backoff policy for the `generateContent` call: up to `max_attempts`
/// attempts, the delay doubling from `base_delay` after each failed one,
/// plus a uniform random jitter in `[0, max_jitter)`.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_jitter: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
            max_jitter: Duration::from_secs(1),
        }
    }
}

impl RetryConfig {
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    #[must_use]
    pub fn with_max_jitter(mut self, max_jitter: Duration) -> Self {
        self.max_jitter = max_jitter;
        self
    }

    /// Jitter-free delay slept after the failed attempt with 0-based index
    /// `attempt`: `base_delay * 2^attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * (1u32 << attempt.min(31))
    }

    /// The full jitter-free sleep schedule, one entry per possible failed
    /// attempt. With the defaults this sums to 1+2+4+8+16 = 31 seconds.
    pub fn backoff_schedule(&self) -> Vec<Duration> {
        (0..self.max_attempts).map(|i| self.delay_for(i)).collect()
    }

    fn jitter(&self) -> Duration {
        if self.max_jitter.is_zero() {
            return Duration::ZERO;
        }
        use rand::Rng;
        self.max_jitter.mul_f64(rand::thread_rng().gen_range(0.0..1.0))
    }
}

/// Runs `operation` under the retry policy. Retryable failures (HTTP 429,
/// HTTP 503, transport errors) sleep and retry until the attempt cap, then
/// surface as [`GeminiError::RetriesExhausted`]; everything else returns on
/// the first failure.
pub async fn execute_with_retry<T, Op, Fut>(config: &RetryConfig, mut operation: Op) -> Result<T>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt: u32 = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_retryable() => {
                attempt += 1;
                tracing::warn!(
                    attempt,
                    max_attempts = config.max_attempts,
                    error = %error,
                    "Gemini request failed with retryable error"
                );
                tokio::time::sleep(config.delay_for(attempt - 1) + config.jitter()).await;
                if attempt >= config.max_attempts {
                    return Err(GeminiError::RetriesExhausted {
                        attempts: attempt,
                        last: Box::new(error),
                    });
                }
            }
            Err(error) => return Err(error),
        }
    }
}
