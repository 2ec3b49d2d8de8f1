use anyhow::Result;

use super::connect;
use crate::config::ServiceConfig;
use crate::render::render_options;

pub async fn options(config: &ServiceConfig) -> Result<String> {
    let dashboard = connect(config)?;
    dashboard.on_mount().await;
    Ok(render_options(&dashboard.view()))
}
