use anyhow::Result;
use clap::{Parser, Subcommand};
use common::Period;

pub mod commands;

use crate::config::ServiceConfig;
use commands::{dashboard, forecast, options, refresh};

#[derive(Parser)]
#[command(name = "medforecast")]
#[command(about = "Medicine usage forecasts and stock warnings in the terminal")]
#[command(version)]
pub struct Cli {
    /// Configuration file
    ///
    /// Defaults to ./medforecast.toml when present. Every key can be
    /// overridden with a MEDFORECAST_* environment variable, e.g.
    /// MEDFORECAST_API_BASE_URL.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Base URL of the forecasting service, overrides the configuration
    ///
    /// Example: http://localhost:5000
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the forecast table and stock warnings
    Dashboard {
        /// Medicine shown in the table; defaults to the first one in the catalog
        #[arg(short, long)]
        medicine: Option<String>,

        /// Table page to show, clamped to the available pages
        #[arg(short, long)]
        page: Option<usize>,
    },
    /// Submit a selection and chart the forecast computed for it
    ///
    /// Missing fields are sent empty; the service decides whether to accept them.
    Forecast {
        /// Granularity: monthly, weekly or daily
        #[arg(short, long)]
        period: Option<Period>,

        /// Medicine to forecast
        #[arg(short, long)]
        medicine: Option<String>,

        /// Region (state) to forecast for
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Ask the service to recompute all forecasts, then show the dashboard
    Refresh,
    /// List the medicines and regions the service knows about
    Options,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = ServiceConfig::load(self.config.as_deref())?;
        if let Some(api_url) = self.api_url {
            config = config.with_api_base_url(api_url)?;
        }

        let output = match self.command {
            Commands::Dashboard { medicine, page } => dashboard(&config, medicine, page).await?,
            Commands::Forecast { period, medicine, region } => {
                forecast(&config, period.unwrap_or_default(), medicine, region).await?
            }
            Commands::Refresh => refresh(&config).await?,
            Commands::Options => options(&config).await?,
        };

        print!("{}", output);
        Ok(())
    }
}
