pub mod dashboard;
pub mod forecast;
pub mod options;
pub mod refresh;

pub use dashboard::dashboard;
pub use forecast::forecast;
pub use options::options;
pub use refresh::refresh;

use anyhow::{Context, Result};
use compute::Dashboard;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::http_repository::ReqwestForecastRepository;

/// Build a dashboard controller talking to the configured service.
pub fn connect(config: &ServiceConfig) -> Result<Dashboard<ReqwestForecastRepository>> {
    debug!("Forecasting service: {}", config.api_base_url);
    let repository =
        ReqwestForecastRepository::from_config(config).context("Failed to create HTTP client")?;
    Ok(Dashboard::new(repository))
}
