use std::cell::Cell;

use common::SelectionRequest;
use futures::join;
use tracing::{debug, info, instrument, warn};

use super::state::{ChartUpdate, DashboardAction, Operation, RequestId};
use crate::chart;
use crate::error::Result;
use crate::repository::ForecastRepository;

/// Sink receiving the actions produced by the orchestrator pipelines.
pub type Dispatch<'a> = &'a dyn Fn(DashboardAction);

/// Runs the dashboard's fetch pipelines against a repository.
///
/// Each pipeline is fetch -> transform -> dispatch. Every request is tagged
/// with a fresh [`RequestId`] announced through `Started` before the fetch
/// begins, so the reducer can drop responses that were superseded. Errors
/// never escape: they are logged here and dispatched as degraded results.
pub struct Orchestrator<R> {
    repository: R,
    next_id: Cell<u64>,
}

impl<R: ForecastRepository> Orchestrator<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            next_id: Cell::new(0),
        }
    }

    fn issue(&self, operation: Operation, dispatch: Dispatch<'_>) -> RequestId {
        let id = RequestId::new(self.next_id.get() + 1);
        self.next_id.set(id.value());
        debug!(?operation, %id, "Issuing request");
        dispatch(DashboardAction::Started { operation, id });
        id
    }

    /// Initial load: option lists, catalog and stock warnings, concurrently.
    #[instrument(skip_all)]
    pub async fn mount(&self, dispatch: Dispatch<'_>) {
        info!("Loading dashboard data");
        join!(
            self.load_medicines(dispatch),
            self.load_regions(dispatch),
            self.load_catalog(dispatch),
            self.load_stock_warnings(dispatch)
        );
    }

    pub async fn load_medicines(&self, dispatch: Dispatch<'_>) {
        let id = self.issue(Operation::Medicines, dispatch);
        let result = self.repository.list_medicines().await;
        log_failure("medicine list", &result);
        dispatch(DashboardAction::MedicinesLoaded { id, result });
    }

    pub async fn load_regions(&self, dispatch: Dispatch<'_>) {
        let id = self.issue(Operation::Regions, dispatch);
        let result = self.repository.list_regions().await;
        log_failure("region list", &result);
        dispatch(DashboardAction::RegionsLoaded { id, result });
    }

    pub async fn load_catalog(&self, dispatch: Dispatch<'_>) {
        let id = self.issue(Operation::Catalog, dispatch);
        let result = self.repository.fetch_catalog().await;
        match &result {
            Ok(catalog) => info!(medicines = catalog.len(), "Forecast catalog loaded"),
            Err(_) => log_failure("forecast catalog", &result),
        }
        dispatch(DashboardAction::CatalogLoaded { id, result });
    }

    pub async fn load_stock_warnings(&self, dispatch: Dispatch<'_>) {
        let id = self.issue(Operation::StockWarnings, dispatch);
        let result = self.repository.fetch_stock_warnings().await;
        log_failure("stock warnings", &result);
        dispatch(DashboardAction::StockWarningsLoaded { id, result });
    }

    /// Posts the selection, then fetches and charts the series it produced.
    #[instrument(skip(self, dispatch), fields(medicine = %request.medicine, region = %request.region, period = %request.period))]
    pub async fn submit(&self, request: SelectionRequest, dispatch: Dispatch<'_>) {
        let id = self.issue(Operation::Chart, dispatch);
        let result = self.submit_and_fetch(&request).await;
        match &result {
            Ok(update) => info!(points = update.chart.len(), "Forecast chart updated"),
            Err(_) => log_failure("forecast chart", &result),
        }
        dispatch(DashboardAction::ChartLoaded { id, result });
    }

    async fn submit_and_fetch(&self, request: &SelectionRequest) -> Result<ChartUpdate> {
        let ack = self.repository.submit_selection(request).await?;
        debug!(message = %ack.message, "Selection acknowledged");

        let series = self.repository.fetch_series_for_current_selection().await?;
        Ok(ChartUpdate {
            message: ack.message,
            chart: chart::build(&series),
        })
    }

    /// Asks the service to recompute, then reloads catalog and stock warnings.
    /// The refresh request is always finished, whatever the outcome.
    #[instrument(skip_all)]
    pub async fn refresh(&self, dispatch: Dispatch<'_>) {
        let id = self.issue(Operation::Refresh, dispatch);
        info!("Requesting server-side forecast recompute");

        let result = self.repository.trigger_server_recompute().await;
        match &result {
            Ok(_) => {
                join!(self.load_catalog(dispatch), self.load_stock_warnings(dispatch));
            }
            Err(_) => log_failure("forecast recompute", &result),
        }

        dispatch(DashboardAction::RefreshFinished { id, result });
    }
}

fn log_failure<T>(what: &str, result: &Result<T>) {
    if let Err(err) = result {
        warn!(%err, "Failed to load {}, showing no data", what);
    }
}
