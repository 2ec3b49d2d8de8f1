//! Dashboard orchestration: state, reducer, async pipelines and the
//! render-ready view derived from them.

pub mod controller;
pub mod orchestrator;
pub mod state;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use controller::Dashboard;
pub use orchestrator::{Dispatch, Orchestrator};
pub use state::{ChartUpdate, DashboardAction, DashboardState, Operation, RequestId, RequestLedger};
pub use view::{DashboardView, NO_FORECAST_DATA, TableView, WarningLine};
