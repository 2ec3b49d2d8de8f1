use anyhow::Result;
use common::Period;
use compute::dashboard::NO_FORECAST_DATA;
use tracing::{info, warn};

use super::connect;
use crate::config::ServiceConfig;
use crate::render::render_chart;

pub async fn forecast(
    config: &ServiceConfig,
    period: Period,
    medicine: Option<String>,
    region: Option<String>,
) -> Result<String> {
    let dashboard = connect(config)?;

    dashboard.set_period(period);
    dashboard.set_medicine(medicine.unwrap_or_default());
    dashboard.set_region(region.unwrap_or_default());
    if !dashboard.state().selection.is_complete() {
        warn!("Submitting an incomplete selection, the service may reject it");
    }

    info!("Submitting selection to {}", config.api_base_url);
    dashboard.on_submit().await;

    let view = dashboard.view();
    let mut output = String::new();
    if let Some(message) = &view.last_message {
        output.push_str(&format!("Service: {}\n", message));
    }
    match &view.chart {
        Some(chart) => output.push_str(&render_chart(chart)),
        None => {
            if let Some(error) = &view.last_error {
                output.push_str(&format!("Warning: {}\n", error));
            }
            output.push_str(&format!("{}\n", NO_FORECAST_DATA));
        }
    }
    Ok(output)
}
