use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::data_source::SourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    pub failure_threshold: u32,
    pub open_timeout: Duration,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 3,
            open_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug)]
struct CircuitInner {
    state: CircuitState,
    consecutive_failures: u32,
    opened_at: Option<Instant>,
}

/// Fails upstream calls fast after repeated transport failures.
///
/// Once `failure_threshold` consecutive failures are recorded the circuit
/// opens; after `open_timeout` a single probe is let through (half-open) and
/// its outcome closes or re-opens the circuit.
#[derive(Debug)]
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    inner: Mutex<CircuitInner>,
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new(CircuitBreakerConfig::default())
    }
}

impl CircuitBreaker {
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(CircuitInner {
                state: CircuitState::Closed,
                consecutive_failures: 0,
                opened_at: None,
            }),
        }
    }

    /// Admits a call or rejects it with an `Unavailable` error naming `provider`.
    pub fn check(&self, provider: &str) -> Result<(), SourceError> {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed | CircuitState::HalfOpen => Ok(()),
            CircuitState::Open => {
                let elapsed = inner
                    .opened_at
                    .is_some_and(|opened_at| opened_at.elapsed() >= self.config.open_timeout);

                if elapsed {
                    inner.state = CircuitState::HalfOpen;
                    inner.opened_at = None;
                    Ok(())
                } else {
                    tracing::debug!(provider, "circuit breaker rejected upstream call");
                    Err(SourceError::unavailable(format!(
                        "{provider} circuit breaker is open; skipping upstream call"
                    )))
                }
            }
        }
    }

    pub fn record_success(&self) {
        let mut inner = self.lock();
        inner.state = CircuitState::Closed;
        inner.consecutive_failures = 0;
        inner.opened_at = None;
    }

    pub fn record_failure(&self) {
        let mut inner = self.lock();
        inner.consecutive_failures = inner.consecutive_failures.saturating_add(1);

        if inner.state == CircuitState::HalfOpen
            || inner.consecutive_failures >= self.config.failure_threshold
        {
            if inner.state != CircuitState::Open {
                tracing::warn!(
                    failures = inner.consecutive_failures,
                    "circuit breaker opened"
                );
            }
            inner.state = CircuitState::Open;
            inner.opened_at = Some(Instant::now());
        }
    }

    pub fn state(&self) -> CircuitState {
        self.lock().state
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.lock().consecutive_failures
    }

    fn lock(&self) -> MutexGuard<'_, CircuitInner> {
        // State stays consistent even if a holder panicked; recover the guard.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
