//! Provider-side retry policy with exponential backoff and jitter.
//!
//! The analytics engine never retries; transient upstream failures are
//! absorbed here, inside the provider, before an error is surfaced.

use std::time::Duration;

use crate::http_client::{HttpError, HttpResponse};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    Fixed {
        delay: Duration,
    },
    /// `base * factor^attempt`, capped at `max`, optionally jittered by +/- 50%.
    Exponential {
        base: Duration,
        factor: f64,
        max: Duration,
        jitter: bool,
    },
}

impl Default for Backoff {
    fn default() -> Self {
        Self::Exponential {
            base: Duration::from_millis(250),
            factor: 2.0,
            max: Duration::from_secs(2),
            jitter: true,
        }
    }
}

impl Backoff {
    /// Delay before retry number `attempt` (0-based).
    pub fn delay(self, attempt: u32) -> Duration {
        match self {
            Self::Fixed { delay } => delay,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
                let seconds = base.as_secs_f64() * factor.powi(exponent);
                let capped = Duration::from_secs_f64(seconds.min(max.as_secs_f64()));

                if !jitter {
                    return capped;
                }

                let half = capped.as_millis() as u64 / 2;
                let offset = fastrand::u64(0..=half * 2);
                Duration::from_millis((capped.as_millis() as u64 - half) + offset)
            }
        }
    }
}

/// What the provider does with failed upstream calls.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt; total attempts = `max_retries + 1`.
    pub max_retries: u32,
    pub backoff: Backoff,
    pub retry_on_status: Vec<u16>,
    pub retry_on_timeout: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Backoff::default(),
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
        }
    }
}

impl RetryConfig {
    pub fn fixed(delay: Duration, max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff: Backoff::Fixed { delay },
            ..Self::default()
        }
    }

    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_on_status.contains(&status)
    }

    pub fn should_retry_error(&self, error: &HttpError) -> bool {
        if error.is_timeout() {
            return self.retry_on_timeout;
        }
        error.retryable()
    }

    /// Whether the outcome of attempt number `attempt` (0-based) warrants another try.
    pub fn should_retry(&self, attempt: u32, outcome: &Result<HttpResponse, HttpError>) -> bool {
        if attempt >= self.max_retries {
            return false;
        }
        match outcome {
            Ok(response) => self.should_retry_status(response.status),
            Err(error) => self.should_retry_error(error),
        }
    }

    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff.delay(attempt)
    }
}
