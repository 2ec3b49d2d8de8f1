use std::cell::{Ref, RefCell};

use common::{MedicineName, Period, RegionName};

use super::orchestrator::Orchestrator;
use super::state::{DashboardAction, DashboardState};
use super::view::DashboardView;
use crate::repository::ForecastRepository;
use crate::table::PageRequest;

/// Single-owner dashboard controller for non-browser front ends.
///
/// Holds the state and folds every action dispatched by the orchestrator
/// through [`DashboardState::reduce`]. The browser front end keeps the state
/// in a reducer hook instead and only shares the orchestrator.
pub struct Dashboard<R> {
    orchestrator: Orchestrator<R>,
    state: RefCell<DashboardState>,
}

impl<R: ForecastRepository> Dashboard<R> {
    pub fn new(repository: R) -> Self {
        Self {
            orchestrator: Orchestrator::new(repository),
            state: RefCell::new(DashboardState::default()),
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator<R> {
        &self.orchestrator
    }

    /// Applies one action to the owned state.
    pub fn dispatch(&self, action: DashboardAction) {
        let current = self.state.take();
        self.state.replace(current.reduce(action));
    }

    pub fn state(&self) -> Ref<'_, DashboardState> {
        self.state.borrow()
    }

    pub fn view(&self) -> DashboardView {
        self.state.borrow().view()
    }

    pub async fn on_mount(&self) {
        self.orchestrator.mount(&|action| self.dispatch(action)).await;
    }

    /// Submits the current selection, complete or not.
    pub async fn on_submit(&self) {
        let request = self.state.borrow().selection.submit();
        self.orchestrator.submit(request, &|action| self.dispatch(action)).await;
    }

    pub async fn on_refresh_requested(&self) {
        self.orchestrator.refresh(&|action| self.dispatch(action)).await;
    }

    /// Refetches only the catalog.
    pub async fn reload_catalog(&self) {
        self.orchestrator.load_catalog(&|action| self.dispatch(action)).await;
    }

    pub fn on_table_medicine_changed(&self, medicine: impl Into<MedicineName>) {
        self.dispatch(DashboardAction::TableMedicineChanged(medicine.into()));
    }

    pub fn on_page_changed(&self, request: PageRequest) {
        self.dispatch(DashboardAction::PageChanged(request));
    }

    pub fn set_period(&self, period: Period) {
        self.dispatch(DashboardAction::SetPeriod(period));
    }

    pub fn set_medicine(&self, medicine: impl Into<MedicineName>) {
        self.dispatch(DashboardAction::SetMedicine(medicine.into()));
    }

    pub fn set_region(&self, region: impl Into<RegionName>) {
        self.dispatch(DashboardAction::SetRegion(region.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::testing::{MockRepository, paracetamol_catalog};
    use crate::dashboard::view::TableView;
    use crate::error::RepositoryError;
    use common::{ForecastCatalog, ForecastSeries, SelectionRequest, StockWarningSet};
    use std::rc::Rc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_mount_loads_everything() {
        let repository = MockRepository::new()
            .with_medicines(vec!["Paracetamol", "Ibuprofen"])
            .with_regions(vec!["Kerala"])
            .with_catalog(Ok(paracetamol_catalog()))
            .with_stock(Ok([("Ibuprofen", "Low stock")].into_iter().collect()));
        let dashboard = Dashboard::new(repository);

        dashboard.on_mount().await;
        let view = dashboard.view();

        assert!(!view.loading);
        assert_eq!(view.medicines, vec!["Paracetamol", "Ibuprofen"]);
        assert_eq!(view.regions, vec!["Kerala"]);
        assert_eq!(view.table_medicine.as_deref(), Some("Paracetamol"));
        assert_eq!(view.stock_warnings.map(|lines| lines.len()), Some(1));
        assert!(matches!(view.table, TableView::Page { .. }));
    }

    #[tokio::test]
    async fn test_mount_failures_degrade_to_no_data() {
        let repository = MockRepository::new()
            .with_catalog(Err(RepositoryError::shape_mismatch("/all_forecasts", "empty forecasts array")))
            .with_stock(Err(RepositoryError::status("/stock", 502)));
        let dashboard = Dashboard::new(repository);

        dashboard.on_mount().await;
        let view = dashboard.view();

        assert!(!view.loading);
        assert_eq!(view.table, TableView::Empty);
        assert_eq!(view.stock_warnings, None);
        assert!(view.last_error.is_some());
    }

    #[tokio::test]
    async fn test_submit_sends_empty_selection_and_builds_chart() {
        let series: ForecastSeries = [("2024-05-01 00:00:00 GMT", 42.0)].into_iter().collect();
        let repository = Rc::new(MockRepository::new().with_series(Ok(series)));
        let dashboard = Dashboard::new(repository.clone());

        dashboard.on_submit().await;

        assert_eq!(repository.submitted(), vec![SelectionRequest::default()]);
        let view = dashboard.view();
        let chart = view.chart.expect("Should have a chart");
        assert_eq!(chart.labels, vec!["May 1, 2024"]);
        assert_eq!(chart.values, vec![42.0]);
        assert_eq!(view.last_message.as_deref(), Some("Selection received"));
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn test_submit_uses_current_selection() {
        let repository = Rc::new(MockRepository::new());
        let dashboard = Dashboard::new(repository.clone());

        dashboard.set_period(Period::Monthly);
        dashboard.set_medicine("Insulin");
        dashboard.set_region("Goa");
        dashboard.on_submit().await;

        assert_eq!(
            repository.submitted(),
            vec![SelectionRequest::new(Period::Monthly, "Insulin", "Goa")]
        );
    }

    #[tokio::test]
    async fn test_rejected_selection_skips_series_fetch() {
        let repository = Rc::new(
            MockRepository::new().with_submit(Err(RepositoryError::status("/selection", 400))),
        );
        let dashboard = Dashboard::new(repository.clone());

        dashboard.on_submit().await;

        assert!(!repository.calls().contains(&"fetch_series_for_current_selection"));
        assert_eq!(dashboard.view().chart, None);
        assert!(!dashboard.view().loading);
    }

    #[tokio::test]
    async fn test_refresh_refetches_catalog_and_stock() {
        let repository = Rc::new(
            MockRepository::new()
                .with_catalog(Ok(paracetamol_catalog()))
                .with_stock(Ok(StockWarningSet::new())),
        );
        let dashboard = Dashboard::new(repository.clone());

        dashboard.on_refresh_requested().await;

        let calls = repository.calls();
        assert_eq!(calls[0], "trigger_server_recompute");
        assert!(calls.contains(&"fetch_catalog"));
        assert!(calls.contains(&"fetch_stock_warnings"));
        assert!(!dashboard.view().refreshing);
        assert_eq!(dashboard.view().table_medicine.as_deref(), Some("Paracetamol"));
    }

    #[tokio::test]
    async fn test_refresh_failure_resets_flag_without_refetch() {
        let repository = Rc::new(
            MockRepository::new().with_recompute(Err(RepositoryError::network("/all_forecast_post", "refused"))),
        );
        let dashboard = Dashboard::new(repository.clone());

        dashboard.on_refresh_requested().await;

        assert_eq!(repository.calls(), vec!["trigger_server_recompute"]);
        assert!(!dashboard.view().refreshing);
    }

    #[tokio::test]
    async fn test_slow_stale_catalog_does_not_clobber_newer_one() {
        let stale: ForecastCatalog = [("Stale", ForecastSeries::new())].into_iter().collect();
        let repository = MockRepository::new()
            .with_catalog_after(Duration::from_millis(60), Ok(stale))
            .with_catalog_after(Duration::from_millis(5), Ok(paracetamol_catalog()));
        let dashboard = Dashboard::new(repository);

        tokio::join!(dashboard.reload_catalog(), dashboard.reload_catalog());

        let state = dashboard.state();
        assert!(state.catalog.contains("Paracetamol"));
        assert!(!state.catalog.contains("Stale"));
        assert_eq!(state.table_medicine.as_deref(), Some("Paracetamol"));
        assert!(!state.loading());
    }

    #[tokio::test]
    async fn test_loading_is_visible_while_catalog_pending() {
        let repository = MockRepository::new().with_catalog_after(Duration::from_millis(30), Ok(paracetamol_catalog()));
        let dashboard = Dashboard::new(repository);

        let observe = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            dashboard.view().loading
        };
        let ((), loading_midway) = tokio::join!(dashboard.reload_catalog(), observe);

        assert!(loading_midway);
        assert!(!dashboard.view().loading);
    }

    #[tokio::test]
    async fn test_table_navigation_through_controller() {
        let series: ForecastSeries = (1..=25).map(|day| (format!("2024-01-{:02}", day), day as f64)).collect();
        let other: ForecastSeries = [("2024-01-01", 1.0)].into_iter().collect();
        let catalog: ForecastCatalog = [("A", series), ("B", other)].into_iter().collect();
        let dashboard = Dashboard::new(MockRepository::new().with_catalog(Ok(catalog)));

        dashboard.reload_catalog().await;
        dashboard.on_page_changed(PageRequest::Last);
        assert_eq!(dashboard.state().pagination.current_page(), 3);

        dashboard.on_page_changed(PageRequest::Next);
        assert_eq!(dashboard.state().pagination.current_page(), 3);

        dashboard.on_table_medicine_changed("B");
        assert_eq!(dashboard.state().pagination.current_page(), 1);
        dashboard.on_page_changed(PageRequest::Prev);
        assert_eq!(dashboard.state().pagination.current_page(), 1);
    }
}
