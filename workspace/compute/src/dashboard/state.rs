use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use common::{Ack, ForecastCatalog, MedicineName, Period, RegionName, StockWarningSet};
use tracing::debug;

use crate::chart::ChartSeries;
use crate::error::Result;
use crate::selection::SelectionState;
use crate::table::{PageRequest, Pagination};

/// Class of asynchronous request. Responses are matched per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Medicines,
    Regions,
    Catalog,
    StockWarnings,
    Chart,
    Refresh,
}

/// Monotonically increasing tag attached to every issued request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Latest issued request per operation and which of those are still pending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestLedger {
    latest: BTreeMap<Operation, RequestId>,
    in_flight: BTreeSet<Operation>,
}

impl RequestLedger {
    fn start(&mut self, operation: Operation, id: RequestId) {
        if self.latest.get(&operation).is_some_and(|latest| *latest >= id) {
            debug!(?operation, %id, "Ignoring out-of-order request start");
            return;
        }
        self.latest.insert(operation, id);
        self.in_flight.insert(operation);
    }

    /// Marks `id` as completed. Returns false when a newer request of the same
    /// operation was issued since, in which case the response must be dropped.
    fn finish(&mut self, operation: Operation, id: RequestId) -> bool {
        if self.latest.get(&operation) != Some(&id) {
            debug!(?operation, %id, "Ignoring stale response");
            return false;
        }
        self.in_flight.remove(&operation);
        true
    }

    pub fn is_in_flight(&self, operation: Operation) -> bool {
        self.in_flight.contains(&operation)
    }
}

/// Result of a submitted selection: the service's acknowledgement and the
/// chart built from the series it computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartUpdate {
    pub message: String,
    pub chart: ChartSeries,
}

/// Everything that can change the dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    Started { operation: Operation, id: RequestId },
    MedicinesLoaded { id: RequestId, result: Result<Vec<MedicineName>> },
    RegionsLoaded { id: RequestId, result: Result<Vec<RegionName>> },
    CatalogLoaded { id: RequestId, result: Result<ForecastCatalog> },
    StockWarningsLoaded { id: RequestId, result: Result<StockWarningSet> },
    ChartLoaded { id: RequestId, result: Result<ChartUpdate> },
    RefreshFinished { id: RequestId, result: Result<Ack> },
    SetPeriod(Period),
    SetMedicine(MedicineName),
    SetRegion(RegionName),
    TableMedicineChanged(MedicineName),
    PageChanged(PageRequest),
}

/// Complete dashboard state, owned by whoever drives the orchestrator.
///
/// Never mutated in place: [`DashboardState::reduce`] consumes the current
/// state and returns the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub medicines: Vec<MedicineName>,
    pub regions: Vec<RegionName>,
    pub catalog: ForecastCatalog,
    pub stock_warnings: StockWarningSet,
    pub chart: Option<ChartSeries>,
    pub selection: SelectionState,
    pub table_medicine: Option<MedicineName>,
    pub pagination: Pagination,
    /// Message of the last acknowledged submit or refresh
    pub last_message: Option<String>,
    /// Description of the last request that degraded to "no data"
    pub last_error: Option<String>,
    /// Bumped on every recorded failure, so repeats of the same error are
    /// still distinguishable
    pub error_seq: u64,
    /// Bumped on every acknowledgement message
    pub message_seq: u64,
    pub requests: RequestLedger,
}

impl DashboardState {
    /// True while a catalog or chart request is pending.
    pub fn loading(&self) -> bool {
        self.requests.is_in_flight(Operation::Catalog) || self.requests.is_in_flight(Operation::Chart)
    }

    /// True while a server recompute and its follow-up refetches are pending.
    pub fn refreshing(&self) -> bool {
        self.requests.is_in_flight(Operation::Refresh)
    }

    /// Length of the series currently shown in the table, zero if none.
    pub fn table_series_len(&self) -> usize {
        self.table_medicine
            .as_deref()
            .and_then(|medicine| self.catalog.series(medicine))
            .map_or(0, |series| series.len())
    }

    pub fn reduce(mut self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::Started { operation, id } => {
                self.requests.start(operation, id);
            }
            DashboardAction::MedicinesLoaded { id, result } => {
                if self.requests.finish(Operation::Medicines, id) {
                    self.medicines = self.record(result).unwrap_or_default();
                }
            }
            DashboardAction::RegionsLoaded { id, result } => {
                if self.requests.finish(Operation::Regions, id) {
                    self.regions = self.record(result).unwrap_or_default();
                }
            }
            DashboardAction::CatalogLoaded { id, result } => {
                if self.requests.finish(Operation::Catalog, id) {
                    let catalog = self.record(result).unwrap_or_default();
                    self = self.replace_catalog(catalog);
                }
            }
            DashboardAction::StockWarningsLoaded { id, result } => {
                if self.requests.finish(Operation::StockWarnings, id) {
                    self.stock_warnings = self.record(result).unwrap_or_default();
                }
            }
            DashboardAction::ChartLoaded { id, result } => {
                if self.requests.finish(Operation::Chart, id) {
                    // A failed chart request leaves the previous chart on screen
                    if let Some(update) = self.record(result) {
                        self.acknowledge(update.message);
                        self.chart = Some(update.chart);
                    }
                }
            }
            DashboardAction::RefreshFinished { id, result } => {
                if self.requests.finish(Operation::Refresh, id) {
                    if let Some(ack) = self.record(result) {
                        self.acknowledge(ack.message);
                    }
                }
            }
            DashboardAction::SetPeriod(period) => {
                self.selection = self.selection.set_period(period);
            }
            DashboardAction::SetMedicine(medicine) => {
                self.selection = self.selection.set_medicine(medicine);
            }
            DashboardAction::SetRegion(region) => {
                self.selection = self.selection.set_region(region);
            }
            DashboardAction::TableMedicineChanged(medicine) => {
                self.table_medicine = Some(medicine);
                self.pagination = self.pagination.reset();
            }
            DashboardAction::PageChanged(request) => {
                let total = self.table_series_len();
                self.pagination = self.pagination.navigate(request, total);
            }
        }
        self
    }

    /// Installs a freshly fetched catalog. The table switches to the first
    /// medicine in catalog order; the page resets if that medicine changed.
    fn replace_catalog(mut self, catalog: ForecastCatalog) -> Self {
        let default_medicine = catalog.default_medicine().map(str::to_string);
        if default_medicine != self.table_medicine {
            self.pagination = self.pagination.reset();
        }
        self.table_medicine = default_medicine;
        self.catalog = catalog;
        let total = self.table_series_len();
        self.pagination = self.pagination.clamp(total);
        self
    }

    fn record<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.last_error = Some(err.to_string());
                self.error_seq += 1;
                None
            }
        }
    }

    fn acknowledge(&mut self, message: String) {
        self.last_message = non_empty(message);
        if self.last_message.is_some() {
            self.message_seq += 1;
        }
    }
}

fn non_empty(message: String) -> Option<String> {
    if message.trim().is_empty() { None } else { Some(message) }
}
