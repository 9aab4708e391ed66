use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use skyfare_core::{EngineEvent, EventSink};
use skyfare_types::SkyfareError;

type InFlight<T> = Shared<BoxFuture<'static, Result<T, SkyfareError>>>;

/// Coalesces concurrent identical requests onto one in-flight computation.
///
/// The first caller for a key owns the computation; callers arriving before
/// it settles await the same shared future and receive a clone of its
/// outcome, including a failure. The owner removes the entry once settled,
/// so a later request for the same key starts fresh rather than observing a
/// stale result.
pub struct RequestDeduplicator<T> {
    in_flight: Mutex<HashMap<String, InFlight<T>>>,
    sink: Option<Arc<dyn EventSink>>,
}

impl<T> RequestDeduplicator<T>
where
    T: Clone + Send + 'static,
{
    /// Create an empty deduplicator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            in_flight: Mutex::new(HashMap::new()),
            sink: None,
        }
    }

    /// Attach an event sink notified when a caller joins an in-flight
    /// computation.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Run `make`'s future for `key`, or join the one already in flight.
    ///
    /// `make` is invoked only when no computation for `key` exists; at most
    /// one invocation is in flight per key at any moment.
    pub async fn run<F, Fut>(&self, key: &str, make: F) -> Result<T, SkyfareError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, SkyfareError>> + Send + 'static,
    {
        let (shared, owner) = {
            let mut map = self.in_flight.lock().expect("dedup lock poisoned");
            match map.get(key) {
                Some(existing) => (existing.clone(), false),
                None => {
                    let shared = make().boxed().shared();
                    map.insert(key.to_string(), shared.clone());
                    (shared, true)
                }
            }
        };

        if !owner {
            if let Some(sink) = &self.sink {
                sink.record(&EngineEvent::DedupJoined {
                    key: key.to_string(),
                });
            }
            tracing::debug!(key, "joining in-flight request");
        }

        let result = shared.await;

        if owner {
            self.in_flight
                .lock()
                .expect("dedup lock poisoned")
                .remove(key);
        }
        result
    }

    /// Number of computations currently in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.lock().expect("dedup lock poisoned").len()
    }

    /// Forget every in-flight entry. Pending computations still settle for
    /// callers already awaiting them; new callers start fresh.
    pub fn clear(&self) {
        self.in_flight.lock().expect("dedup lock poisoned").clear();
    }
}

impl<T> Default for RequestDeduplicator<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
