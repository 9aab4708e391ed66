use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use skyfare_core::{FlightProvider, RawResponse};
use skyfare_types::{ProviderKind, SearchParams, SkyfareError};

/// Instruction for how one `search` call should behave.
#[derive(Debug, Clone)]
pub enum ScriptedBehavior {
    /// Return the payload immediately.
    Respond(RawResponse),
    /// Fail immediately with the error.
    Fail(SkyfareError),
    /// Hang forever (simulate a stalled connection).
    Hang,
}

/// Deterministic provider that replays a queued script.
///
/// Each `search` call consumes the next queued behavior; once the script is
/// empty every call uses the fallback, which defaults to an empty payload in
/// this provider's schema. Calls are counted so tests can assert how many
/// times the engine actually reached the provider.
pub struct ScriptedProvider {
    name: &'static str,
    kind: ProviderKind,
    script: Mutex<VecDeque<ScriptedBehavior>>,
    fallback: ScriptedBehavior,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    /// Provider with an empty script and an empty-payload fallback.
    #[must_use]
    pub fn new(name: &'static str, kind: ProviderKind) -> Self {
        Self {
            name,
            kind,
            script: Mutex::new(VecDeque::new()),
            fallback: ScriptedBehavior::Respond(RawResponse::empty_for(kind)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the behavior used once the script runs out.
    #[must_use]
    pub fn with_fallback(mut self, fallback: ScriptedBehavior) -> Self {
        self.fallback = fallback;
        self
    }

    /// Queue one behavior for the next unserved `search` call.
    pub fn push(&self, behavior: ScriptedBehavior) {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(behavior);
    }

    /// Builder-style [`push`](Self::push) for test setup chains.
    #[must_use]
    pub fn then(self, behavior: ScriptedBehavior) -> Self {
        self.push(behavior);
        self
    }

    /// Number of `search` calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlightProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn search(&self, _params: &SearchParams) -> Result<RawResponse, SkyfareError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = self
            .script
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match behavior {
            ScriptedBehavior::Respond(payload) => Ok(payload),
            ScriptedBehavior::Fail(err) => Err(err),
            ScriptedBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!("pending future never resolves")
            }
        }
    }
}
