use async_trait::async_trait;
use reqwest::{Client, Url};

use super::{ExchangeRateRecord, RateError, RateSource};
use crate::config::EndpointConfig;

/// HTTP client for the exchange-rate route.
///
/// Issues one plain GET per [`RateSource::fetch`]; no retries, no caching.
#[derive(Debug, Clone)]
pub struct RateClient {
    client: Client,
    url: Url,
}

impl RateClient {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, RateError> {
        let url_text = endpoint.url();
        let url = Url::parse(&url_text).map_err(|e| RateError::InvalidUrl {
            url: url_text.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(endpoint.connect_timeout())
            .timeout(endpoint.timeout())
            .build()
            .map_err(RateError::Client)?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

#[async_trait]
impl RateSource for RateClient {
    async fn fetch(&self) -> Result<Vec<ExchangeRateRecord>, RateError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| RateError::Request {
                url: self.url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| RateError::Request {
            url: self.url.to_string(),
            source: e,
        })?;

        let records: Vec<ExchangeRateRecord> =
            serde_json::from_slice(&body).map_err(|e| RateError::Decode {
                url: self.url.to_string(),
                source: e,
            })?;

        tracing::debug!(url = %self.url, rows = records.len(), "Fetched exchange-rate data");
        Ok(records)
    }
}
