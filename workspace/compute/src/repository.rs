use async_trait::async_trait;
use common::{
    Ack, AllForecastsResponse, ForecastCatalog, ForecastSeries, MedicineName, RegionName, SelectionRequest,
    StockWarningSet, endpoints,
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::trace;

use crate::error::{RepositoryError, Result};

/// Async adapter over the forecasting service.
///
/// Each call is independent and is not retried internally; the orchestrator
/// decides what a failure means for the view. The futures are not required
/// to be `Send` so browser fetch implementations fit the same trait.
#[async_trait(?Send)]
pub trait ForecastRepository {
    /// Medicines the operator can pick from.
    async fn list_medicines(&self) -> Result<Vec<MedicineName>>;

    /// Regions the operator can pick from.
    async fn list_regions(&self) -> Result<Vec<RegionName>>;

    /// Full medicine -> series catalog, in the service's order.
    async fn fetch_catalog(&self) -> Result<ForecastCatalog>;

    async fn fetch_stock_warnings(&self) -> Result<StockWarningSet>;

    /// Series computed server-side for the last submitted selection.
    async fn fetch_series_for_current_selection(&self) -> Result<ForecastSeries>;

    /// Posts a selection. Callers fetch the resulting series afterwards.
    async fn submit_selection(&self, request: &SelectionRequest) -> Result<Ack>;

    /// Asks the service to recompute every forecast. Callers refetch the
    /// catalog and stock warnings afterwards.
    async fn trigger_server_recompute(&self) -> Result<Ack>;
}

/// Shared handles forward to the wrapped repository.
#[async_trait(?Send)]
impl<T: ForecastRepository + ?Sized> ForecastRepository for std::rc::Rc<T> {
    async fn list_medicines(&self) -> Result<Vec<MedicineName>> {
        (**self).list_medicines().await
    }

    async fn list_regions(&self) -> Result<Vec<RegionName>> {
        (**self).list_regions().await
    }

    async fn fetch_catalog(&self) -> Result<ForecastCatalog> {
        (**self).fetch_catalog().await
    }

    async fn fetch_stock_warnings(&self) -> Result<StockWarningSet> {
        (**self).fetch_stock_warnings().await
    }

    async fn fetch_series_for_current_selection(&self) -> Result<ForecastSeries> {
        (**self).fetch_series_for_current_selection().await
    }

    async fn submit_selection(&self, request: &SelectionRequest) -> Result<Ack> {
        (**self).submit_selection(request).await
    }

    async fn trigger_server_recompute(&self) -> Result<Ack> {
        (**self).trigger_server_recompute().await
    }
}

/// Decodes a response body. Well-formed JSON of the wrong shape is reported
/// as [`RepositoryError::ShapeMismatch`], anything else as a decode failure.
pub fn decode_json<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|err| match err.classify() {
        Category::Data => RepositoryError::shape_mismatch(endpoint, err),
        _ => RepositoryError::decode(endpoint, err),
    })
}

/// Decodes the `/all_forecasts` body and extracts the catalog from element 0.
pub fn decode_catalog(body: &str) -> Result<ForecastCatalog> {
    decode_json::<AllForecastsResponse>(endpoints::ALL_FORECASTS, body)?
        .into_catalog()
        .ok_or_else(|| RepositoryError::shape_mismatch(endpoints::ALL_FORECASTS, "empty forecasts array"))
}

/// Reads an acknowledgement from an opaque body. Bodies without a message
/// (or that are not JSON at all) acknowledge with an empty message.
pub fn decode_ack(endpoint: &str, body: &str) -> Ack {
    serde_json::from_str(body).unwrap_or_else(|err| {
        trace!(endpoint, %err, "Response carries no acknowledgement message");
        Ack::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_catalog_uses_first_element() {
        let body = r#"[{"forecasts": {"Paracetamol": {"2024-01-01": 10.5}}}, {"forecasts": {}}]"#;
        let catalog = decode_catalog(body).expect("Should decode catalog");

        assert_eq!(catalog.default_medicine(), Some("Paracetamol"));
        assert_eq!(catalog.series("Paracetamol").unwrap().get("2024-01-01"), Some(10.5));
    }

    #[test]
    fn test_decode_catalog_empty_array_is_shape_mismatch() {
        let err = decode_catalog("[]").unwrap_err();
        assert!(matches!(err, RepositoryError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_decode_json_classifies_errors() {
        let err = decode_json::<Vec<String>>("/medicines", r#"{"not": "a list"}"#).unwrap_err();
        assert!(matches!(err, RepositoryError::ShapeMismatch { .. }));

        let err = decode_json::<Vec<String>>("/medicines", "<html>").unwrap_err();
        assert!(matches!(err, RepositoryError::Decode { .. }));
        assert_eq!(err.endpoint(), "/medicines");
    }

    #[test]
    fn test_decode_ack_is_tolerant() {
        assert_eq!(decode_ack("/selection", r#"{"message": "ok"}"#).message, "ok");
        assert_eq!(decode_ack("/all_forecast_post", "Forecasts updated"), Ack::default());
        assert_eq!(decode_ack("/all_forecast_post", "[1, 2]"), Ack::default());
    }
}
