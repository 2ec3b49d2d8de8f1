use common::{MedicineName, RegionName};

use super::state::DashboardState;
use crate::chart::ChartSeries;
use crate::selection::SelectionState;
use crate::table::{TablePage, derive_with};

/// Text shown in place of the table when there is nothing to display.
pub const NO_FORECAST_DATA: &str = "No forecast data available";

/// Table section of the view.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// No medicine selected, unknown medicine, or an empty series
    Empty,
    Page { medicine: MedicineName, page: TablePage },
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        matches!(self, TableView::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarningLine {
    pub medicine: MedicineName,
    pub warning: String,
}

/// Render-ready projection of [`DashboardState`]. Recomputed on demand,
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub chart: Option<ChartSeries>,
    pub table: TableView,
    /// `None` when no medicine is flagged, so no empty panel is rendered
    pub stock_warnings: Option<Vec<WarningLine>>,
    pub loading: bool,
    pub refreshing: bool,
    pub medicines: Vec<MedicineName>,
    pub regions: Vec<RegionName>,
    /// Medicines available for the table, in catalog order
    pub catalog_medicines: Vec<MedicineName>,
    pub selection: SelectionState,
    pub table_medicine: Option<MedicineName>,
    pub last_message: Option<String>,
    pub last_error: Option<String>,
    /// Change whenever a new error or message is recorded, even a repeated one
    pub error_seq: u64,
    pub message_seq: u64,
}

impl DashboardState {
    pub fn view(&self) -> DashboardView {
        DashboardView {
            chart: self.chart.clone(),
            table: self.table_view(),
            stock_warnings: self.warning_lines(),
            loading: self.loading(),
            refreshing: self.refreshing(),
            medicines: self.medicines.clone(),
            regions: self.regions.clone(),
            catalog_medicines: self.catalog.medicines().map(str::to_string).collect(),
            selection: self.selection.clone(),
            table_medicine: self.table_medicine.clone(),
            last_message: self.last_message.clone(),
            last_error: self.last_error.clone(),
            error_seq: self.error_seq,
            message_seq: self.message_seq,
        }
    }

    pub fn table_view(&self) -> TableView {
        let Some(medicine) = self.table_medicine.as_deref() else {
            return TableView::Empty;
        };

        match self.catalog.series(medicine) {
            Some(series) if !series.is_empty() => TableView::Page {
                medicine: medicine.to_string(),
                page: derive_with(series, &self.pagination),
            },
            _ => TableView::Empty,
        }
    }

    pub fn warning_lines(&self) -> Option<Vec<WarningLine>> {
        if self.stock_warnings.is_empty() {
            return None;
        }

        Some(
            self.stock_warnings
                .iter()
                .map(|(medicine, warning)| WarningLine {
                    medicine: medicine.to_string(),
                    warning: warning.to_string(),
                })
                .collect(),
        )
    }
}
