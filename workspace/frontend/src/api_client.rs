use async_trait::async_trait;
use common::{
    Ack, ForecastCatalog, ForecastSeries, MedicineName, RegionName, SelectionRequest, StockWarningSet, endpoints,
};
use compute::error::{RepositoryError, Result};
use compute::repository::{ForecastRepository, decode_ack, decode_catalog, decode_json};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::settings;

/// Forecasting service client for the browser, built on `fetch`.
pub struct HttpForecastRepository {
    base_url: String,
}

impl HttpForecastRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the service named in the application settings.
    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().api_base_url)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_body(&self, endpoint: &str) -> Result<String> {
        let url = self.url(endpoint);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url).send().await.map_err(|e| {
            log::error!("GET {} - Request failed: {}", endpoint, e);
            RepositoryError::network(endpoint, e)
        })?;

        read_body(endpoint, response).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let body = self.get_body(endpoint).await?;
        let value = decode_json(endpoint, &body)?;
        log::info!("GET {} - Success", endpoint);
        Ok(value)
    }
}

/// Returns the body of a 2xx response.
async fn read_body(endpoint: &str, response: Response) -> Result<String> {
    if !response.ok() {
        log::error!("{} - HTTP error: {}", endpoint, response.status());
        return Err(RepositoryError::status(endpoint, response.status()));
    }

    log::trace!("{} - Response received, reading body", endpoint);
    response.text().await.map_err(|e| {
        log::error!("{} - Failed to read body: {}", endpoint, e);
        RepositoryError::network(endpoint, e)
    })
}

#[async_trait(?Send)]
impl ForecastRepository for HttpForecastRepository {
    async fn list_medicines(&self) -> Result<Vec<MedicineName>> {
        self.get(endpoints::MEDICINES).await
    }

    async fn list_regions(&self) -> Result<Vec<RegionName>> {
        self.get(endpoints::REGIONS).await
    }

    async fn fetch_catalog(&self) -> Result<ForecastCatalog> {
        let body = self.get_body(endpoints::ALL_FORECASTS).await?;
        let catalog = decode_catalog(&body)?;
        log::info!("GET {} - Success ({} medicines)", endpoints::ALL_FORECASTS, catalog.len());
        Ok(catalog)
    }

    async fn fetch_stock_warnings(&self) -> Result<StockWarningSet> {
        self.get(endpoints::STOCK).await
    }

    async fn fetch_series_for_current_selection(&self) -> Result<ForecastSeries> {
        self.get(endpoints::FORECAST).await
    }

    async fn submit_selection(&self, request: &SelectionRequest) -> Result<Ack> {
        let endpoint = endpoints::SELECTION;
        let url = self.url(endpoint);
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| {
                log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
                RepositoryError::decode(endpoint, e)
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} - Request failed: {}", endpoint, e);
                RepositoryError::network(endpoint, e)
            })?;

        let body = read_body(endpoint, response).await?;
        let ack: Ack = decode_json(endpoint, &body)?;
        log::info!("POST {} - Success: {}", endpoint, ack.message);
        Ok(ack)
    }

    async fn trigger_server_recompute(&self) -> Result<Ack> {
        let body = self.get_body(endpoints::RECOMPUTE).await?;
        log::info!("GET {} - Recompute triggered", endpoints::RECOMPUTE);
        Ok(decode_ack(endpoints::RECOMPUTE, &body))
    }
}
