//! Client-side core of the medicine forecast dashboard.
//!
//! Everything here is independent of how the dashboard is rendered: the
//! browser frontend and the CLI drive the same [`dashboard::Orchestrator`]
//! and render the same [`dashboard::DashboardView`].

pub mod chart;
pub mod dashboard;
pub mod date;
pub mod error;
pub mod repository;
pub mod selection;
pub mod table;

pub use chart::ChartSeries;
pub use dashboard::{Dashboard, DashboardAction, DashboardState, DashboardView, Orchestrator};
pub use date::{DateLabel, normalize};
pub use error::{RepositoryError, Result};
pub use repository::ForecastRepository;
pub use selection::SelectionState;
pub use table::{ITEMS_PER_PAGE, PageRequest, Pagination, TablePage, TableRow};
