use anyhow::Result;
use tracing::info;

use super::connect;
use crate::config::ServiceConfig;
use crate::render::render_dashboard;

pub async fn refresh(config: &ServiceConfig) -> Result<String> {
    let dashboard = connect(config)?;

    info!("Refreshing forecasts at {}", config.api_base_url);
    dashboard.on_refresh_requested().await;

    Ok(render_dashboard(&dashboard.view()))
}
