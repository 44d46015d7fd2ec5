//! Shared test utilities: a recording view, scripted rate sources and
//! controller builders.

#![allow(dead_code, unused_imports)]

pub mod mock_endpoint;

use async_trait::async_trait;
use kpi_carousel::config::EndpointConfig;
use kpi_carousel::images::{kpi_images, ImageDescriptor};
use kpi_carousel::rates::{ExchangeRateRecord, RateClient, RateError, RateSource};
use kpi_carousel::ui::carousel::{CarouselController, CarouselView, FetchOutcome, RateLoader};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// View that records what the controller wrote to it.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub image: Option<ImageDescriptor>,
    pub table_visible: bool,
    pub rows: Vec<ExchangeRateRecord>,
    pub show_image_calls: usize,
    pub replace_rows_calls: usize,
}

impl RecordingView {
    /// Pre-populated table body, as if an earlier load had filled it.
    pub fn with_rows(rows: Vec<ExchangeRateRecord>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn cell_text(&self) -> Vec<(&str, &str)> {
        self.rows
            .iter()
            .map(|row| (row.date.as_str(), row.rate.as_str()))
            .collect()
    }
}

impl CarouselView for RecordingView {
    fn show_image(&mut self, image: &ImageDescriptor) {
        self.image = Some(*image);
        self.show_image_calls += 1;
    }

    fn set_table_visible(&mut self, visible: bool) {
        self.table_visible = visible;
    }

    fn replace_rows(&mut self, rows: &[ExchangeRateRecord]) {
        self.rows.clear();
        self.rows.extend_from_slice(rows);
        self.replace_rows_calls += 1;
    }
}

/// One scripted reply: wait `delay`, then return `result`.
pub struct Scripted {
    pub delay: Duration,
    pub result: Result<Vec<ExchangeRateRecord>, u16>,
}

/// Rate source that replays scripted replies in call order and counts calls.
/// Once the script runs out it returns an empty table.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn always_empty() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<ExchangeRateRecord>, RateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().pop_front();
        let Some(Scripted { delay, result }) = next else {
            return Ok(Vec::new());
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result.map_err(|status| RateError::Status {
            url: "scripted".to_string(),
            status,
        })
    }
}

pub fn records(pairs: &[(&str, &str)]) -> Vec<ExchangeRateRecord> {
    pairs
        .iter()
        .map(|(date, rate)| ExchangeRateRecord::new(*date, *rate))
        .collect()
}

pub type Carousel = CarouselController<RecordingView>;

/// Controller over the KPI images, spawning on the current runtime and
/// reporting outcomes on the returned receiver.
pub fn carousel_with(
    source: Arc<dyn RateSource>,
    view: RecordingView,
) -> (Carousel, UnboundedReceiver<FetchOutcome>) {
    let (tx, rx) = unbounded_channel();
    let notify = Arc::new(move |outcome: FetchOutcome| {
        let _ = tx.send(outcome);
    });
    let loader = RateLoader::new(source, Handle::current(), notify);
    let carousel = CarouselController::new(kpi_images().to_vec(), view, loader)
        .expect("KPI images are never empty");
    (carousel, rx)
}

/// Controller backed by the real HTTP client pointed at `base_url`.
pub fn http_carousel(
    base_url: &str,
    view: RecordingView,
) -> (Carousel, UnboundedReceiver<FetchOutcome>) {
    http_carousel_with_timeout(base_url, 2, view)
}

/// Like [`http_carousel`], with a total request timeout of `timeout_seconds`.
pub fn http_carousel_with_timeout(
    base_url: &str,
    timeout_seconds: u32,
    view: RecordingView,
) -> (Carousel, UnboundedReceiver<FetchOutcome>) {
    let endpoint = EndpointConfig {
        base_url: base_url.to_string(),
        timeout_seconds,
        connect_timeout_seconds: 1,
        ..EndpointConfig::default()
    };
    let client = RateClient::new(&endpoint).expect("valid endpoint");
    carousel_with(Arc::new(client), view)
}

/// Waits for the next fetch outcome, failing the test after two seconds.
pub async fn next_outcome(rx: &mut UnboundedReceiver<FetchOutcome>) -> FetchOutcome {
    next_outcome_within(rx, Duration::from_secs(2)).await
}

/// Waits for the next fetch outcome, failing the test after `limit`.
pub async fn next_outcome_within(
    rx: &mut UnboundedReceiver<FetchOutcome>,
    limit: Duration,
) -> FetchOutcome {
    tokio::time::timeout(limit, rx.recv())
        .await
        .expect("fetch did not complete in time")
        .expect("notifier dropped")
}
