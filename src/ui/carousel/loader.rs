use std::sync::Arc;
use tokio::runtime::Handle;

use crate::rates::{ExchangeRateRecord, RateError, RateSource};

/// Result of one fetch, tagged with the request number it was spawned for.
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: u64,
    pub result: Result<Vec<ExchangeRateRecord>, RateError>,
}

/// Delivers a finished fetch back to whoever owns the controller.
///
/// Called from a runtime worker thread; implementations forward the
/// outcome to the UI thread (e.g. over the event channel).
pub type OutcomeNotifier = Arc<dyn Fn(FetchOutcome) + Send + Sync>;

/// Fire-and-forget fetch dispatcher.
#[derive(Clone)]
pub struct RateLoader {
    source: Arc<dyn RateSource>,
    runtime: Handle,
    notify: OutcomeNotifier,
}

impl RateLoader {
    pub fn new(source: Arc<dyn RateSource>, runtime: Handle, notify: OutcomeNotifier) -> Self {
        Self {
            source,
            runtime,
            notify,
        }
    }

    /// Spawns a fetch for `request` and returns immediately.
    pub fn spawn(&self, request: u64) {
        let source = Arc::clone(&self.source);
        let notify = Arc::clone(&self.notify);
        self.runtime.spawn(async move {
            let result = source.fetch().await;
            notify(FetchOutcome { request, result });
        });
    }
}

