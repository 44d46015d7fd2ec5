//! Exchange-rate data shown beside the dollar graph.
//!
//! The data comes from a single backend route returning a JSON array of
//! `{ "date": ..., "rate": ... }` objects. [`RateSource`] is the seam the
//! carousel fetches through; [`RateClient`] is the HTTP implementation.

mod client;
mod error;
mod record;

pub use client::RateClient;
pub use error::RateError;
pub use record::ExchangeRateRecord;

use async_trait::async_trait;

/// Something the carousel can load exchange-rate rows from.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the current rows, in the order they should be displayed.
    async fn fetch(&self) -> Result<Vec<ExchangeRateRecord>, RateError>;
}
