use anyhow::Result;
use compute::PageRequest;
use tracing::{debug, info, trace};

use super::connect;
use crate::config::ServiceConfig;
use crate::render::render_dashboard;

pub async fn dashboard(config: &ServiceConfig, medicine: Option<String>, page: Option<usize>) -> Result<String> {
    trace!("Entering dashboard command");
    let dashboard = connect(config)?;

    info!("Loading dashboard from {}", config.api_base_url);
    dashboard.on_mount().await;

    if let Some(medicine) = medicine {
        debug!("Showing table for {}", medicine);
        dashboard.on_table_medicine_changed(medicine);
    }
    if let Some(page) = page {
        debug!("Jumping to page {}", page);
        dashboard.on_page_changed(PageRequest::Goto(page));
    }

    Ok(render_dashboard(&dashboard.view()))
}
