use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use skyfare_core::{EngineEvent, EventSink};
use skyfare_types::{RetryConfig, SkyfareError};

/// Bounded exponential-backoff retry for provider calls.
///
/// Only transient failures are retried. Transience is judged by matching the
/// error's rendered text against the configured substrings, case
/// insensitively; anything else propagates unchanged on the first failure.
/// When the attempt budget runs out the last transient error is wrapped in
/// [`SkyfareError::RetryExhausted`].
pub struct RetryHandler {
    config: RetryConfig,
    sink: Option<Arc<dyn EventSink>>,
}

impl RetryHandler {
    /// Create a handler from its configuration.
    #[must_use]
    pub fn new(config: RetryConfig) -> Self {
        Self { config, sink: None }
    }

    /// Attach an event sink notified when a retry is scheduled.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Drive `op` to success within the attempt budget. `provider` names the
    /// call site in events and in the exhaustion error.
    pub async fn execute<T, F, Fut>(&self, provider: &str, mut op: F) -> Result<T, SkyfareError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, SkyfareError>>,
    {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let err = match op().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if !self.is_retryable(&err) {
                return Err(err);
            }
            if attempt >= self.config.max_attempts {
                return Err(SkyfareError::RetryExhausted {
                    provider: provider.to_string(),
                    attempts: attempt,
                    last: Box::new(err),
                });
            }

            let delay = self.delay_for(attempt);
            if let Some(sink) = &self.sink {
                sink.record(&EngineEvent::RetryScheduled {
                    provider: provider.to_string(),
                    attempt,
                    delay,
                });
            }
            tracing::warn!(
                provider,
                attempt,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                error = %err,
                "transient failure, backing off"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Whether this error would be retried rather than propagated.
    #[must_use]
    pub fn is_retryable(&self, err: &SkyfareError) -> bool {
        let text = err.to_string().to_lowercase();
        self.config
            .retryable_patterns
            .iter()
            .any(|pat| text.contains(&pat.to_lowercase()))
    }

    /// Backoff before the retry that follows failed attempt `attempt`
    /// (1-based). Grows geometrically and is capped at the configured
    /// maximum. The cap is applied in f64 space, so a factor past what
    /// `Duration` can represent still lands on the cap.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let factor = self.config.backoff_multiplier.powi(exp).max(0.0);
        let raw_secs = self.config.initial_delay.as_secs_f64() * factor;
        let capped = raw_secs.min(self.config.max_delay.as_secs_f64());
        Duration::from_secs_f64(capped)
    }
}
