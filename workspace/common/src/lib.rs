//! Common transport-layer types shared between every forecast dashboard client.
//! These structs mirror the forecasting service's request/response payloads
//! so the browser frontend and the CLI deserialize the same shapes.

mod forecast;
mod selection;

pub use forecast::{
    AllForecastsResponse, ForecastCatalog, ForecastEnvelope, ForecastSeries, StockWarningSet,
};
pub use selection::{Period, SelectionRequest};

use serde::{Deserialize, Serialize};

/// Medicine identifier as listed by the service. Empty string means "unselected".
pub type MedicineName = String;

/// Region (state) identifier as listed by the service. Empty string means "unselected".
pub type RegionName = String;

/// Paths exposed by the forecasting service, relative to its base URL.
pub mod endpoints {
    pub const MEDICINES: &str = "/medicines";
    pub const REGIONS: &str = "/states";
    pub const ALL_FORECASTS: &str = "/all_forecasts";
    pub const STOCK: &str = "/stock";
    pub const FORECAST: &str = "/forecast";
    pub const SELECTION: &str = "/selection";
    pub const RECOMPUTE: &str = "/all_forecast_post";
}

/// Acknowledgement returned by the service for state-changing calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ack {
    /// Human readable message from the service
    #[serde(default)]
    pub message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
