use async_trait::async_trait;
use common::{
    Ack, ForecastCatalog, ForecastSeries, MedicineName, RegionName, SelectionRequest, StockWarningSet, endpoints,
};
use compute::error::{RepositoryError, Result};
use compute::repository::{ForecastRepository, decode_ack, decode_catalog, decode_json};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, trace};

use crate::config::ServiceConfig;

/// Forecasting service client for native builds.
pub struct ReqwestForecastRepository {
    client: Client,
    base_url: String,
}

impl ReqwestForecastRepository {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ServiceConfig) -> reqwest::Result<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(|e| {
            error!("{} - Request failed: {}", endpoint, e);
            RepositoryError::network(endpoint, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("{} - HTTP error: {}", endpoint, status);
            return Err(RepositoryError::status(endpoint, status.as_u16()));
        }

        trace!("{} - Response received, reading body", endpoint);
        response.text().await.map_err(|e| {
            error!("{} - Failed to read body: {}", endpoint, e);
            RepositoryError::network(endpoint, e)
        })
    }

    async fn get_body(&self, endpoint: &str) -> Result<String> {
        let url = self.url(endpoint);
        debug!("GET request to: {}", url);
        self.send(endpoint, self.client.get(&url)).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let body = self.get_body(endpoint).await?;
        let value = decode_json(endpoint, &body)?;
        info!("GET {} - Success", endpoint);
        Ok(value)
    }
}

#[async_trait(?Send)]
impl ForecastRepository for ReqwestForecastRepository {
    async fn list_medicines(&self) -> Result<Vec<MedicineName>> {
        self.get(endpoints::MEDICINES).await
    }

    async fn list_regions(&self) -> Result<Vec<RegionName>> {
        self.get(endpoints::REGIONS).await
    }

    async fn fetch_catalog(&self) -> Result<ForecastCatalog> {
        let body = self.get_body(endpoints::ALL_FORECASTS).await?;
        let catalog = decode_catalog(&body)?;
        info!("GET {} - Success ({} medicines)", endpoints::ALL_FORECASTS, catalog.len());
        Ok(catalog)
    }

    async fn fetch_stock_warnings(&self) -> Result<StockWarningSet> {
        self.get(endpoints::STOCK).await
    }

    async fn fetch_series_for_current_selection(&self) -> Result<ForecastSeries> {
        self.get(endpoints::FORECAST).await
    }

    async fn submit_selection(&self, request: &SelectionRequest) -> Result<Ack> {
        let url = self.url(endpoints::SELECTION);
        debug!("POST request to: {}", url);

        let body = self
            .send(endpoints::SELECTION, self.client.post(&url).json(request))
            .await?;
        let ack: Ack = decode_json(endpoints::SELECTION, &body)?;
        info!("POST {} - Success: {}", endpoints::SELECTION, ack.message);
        Ok(ack)
    }

    async fn trigger_server_recompute(&self) -> Result<Ack> {
        let body = self.get_body(endpoints::RECOMPUTE).await?;
        info!("GET {} - Recompute triggered", endpoints::RECOMPUTE);
        Ok(decode_ack(endpoints::RECOMPUTE, &body))
    }
}
