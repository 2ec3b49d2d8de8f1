//! Scripted repository for exercising the orchestrator without a service.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use common::{Ack, ForecastCatalog, ForecastSeries, MedicineName, RegionName, SelectionRequest, StockWarningSet};

use crate::error::Result;
use crate::repository::ForecastRepository;

/// Queue of scripted responses. The last entry repeats once the others are used.
struct Script<T> {
    responses: RefCell<VecDeque<(Duration, Result<T>)>>,
}

impl<T: Clone> Script<T> {
    fn new(default: Result<T>) -> Self {
        Self {
            responses: RefCell::new(VecDeque::from([(Duration::ZERO, default)])),
        }
    }

    fn replace(self, delay: Duration, response: Result<T>) -> Self {
        self.responses.replace(VecDeque::from([(delay, response)]));
        self
    }

    fn push(self, delay: Duration, response: Result<T>) -> Self {
        self.responses.borrow_mut().push_back((delay, response));
        self
    }

    async fn next(&self) -> Result<T> {
        let (delay, response) = {
            let mut responses = self.responses.borrow_mut();
            if responses.len() > 1 {
                responses.pop_front().expect("Script has entries")
            } else {
                responses.front().cloned().expect("Script has entries")
            }
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

pub struct MockRepository {
    medicines: Script<Vec<MedicineName>>,
    regions: Script<Vec<RegionName>>,
    catalog: Script<ForecastCatalog>,
    catalog_scripted: bool,
    stock: Script<StockWarningSet>,
    series: Script<ForecastSeries>,
    submit: Script<Ack>,
    recompute: Script<Ack>,
    calls: RefCell<Vec<&'static str>>,
    submitted: RefCell<Vec<SelectionRequest>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self {
            medicines: Script::new(Ok(Vec::new())),
            regions: Script::new(Ok(Vec::new())),
            catalog: Script::new(Ok(ForecastCatalog::new())),
            catalog_scripted: false,
            stock: Script::new(Ok(StockWarningSet::new())),
            series: Script::new(Ok(ForecastSeries::new())),
            submit: Script::new(Ok(Ack::new("Selection received"))),
            recompute: Script::new(Ok(Ack::new("Forecasts recomputed"))),
            calls: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
        }
    }

    pub fn with_medicines(mut self, medicines: Vec<&str>) -> Self {
        let medicines = medicines.into_iter().map(str::to_string).collect();
        self.medicines = self.medicines.replace(Duration::ZERO, Ok(medicines));
        self
    }

    pub fn with_regions(mut self, regions: Vec<&str>) -> Self {
        let regions = regions.into_iter().map(str::to_string).collect();
        self.regions = self.regions.replace(Duration::ZERO, Ok(regions));
        self
    }

    pub fn with_catalog(self, catalog: Result<ForecastCatalog>) -> Self {
        self.with_catalog_after(Duration::ZERO, catalog)
    }

    /// Scripts the next catalog response. Successive calls queue responses in order.
    pub fn with_catalog_after(mut self, delay: Duration, catalog: Result<ForecastCatalog>) -> Self {
        self.catalog = if self.catalog_scripted {
            self.catalog.push(delay, catalog)
        } else {
            self.catalog.replace(delay, catalog)
        };
        self.catalog_scripted = true;
        self
    }

    pub fn with_stock(mut self, stock: Result<StockWarningSet>) -> Self {
        self.stock = self.stock.replace(Duration::ZERO, stock);
        self
    }

    pub fn with_series(mut self, series: Result<ForecastSeries>) -> Self {
        self.series = self.series.replace(Duration::ZERO, series);
        self
    }

    pub fn with_submit(mut self, ack: Result<Ack>) -> Self {
        self.submit = self.submit.replace(Duration::ZERO, ack);
        self
    }

    pub fn with_recompute(mut self, ack: Result<Ack>) -> Self {
        self.recompute = self.recompute.replace(Duration::ZERO, ack);
        self
    }

    /// Repository methods called so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn submitted(&self) -> Vec<SelectionRequest> {
        self.submitted.borrow().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl ForecastRepository for MockRepository {
    async fn list_medicines(&self) -> Result<Vec<MedicineName>> {
        self.record("list_medicines");
        self.medicines.next().await
    }

    async fn list_regions(&self) -> Result<Vec<RegionName>> {
        self.record("list_regions");
        self.regions.next().await
    }

    async fn fetch_catalog(&self) -> Result<ForecastCatalog> {
        self.record("fetch_catalog");
        self.catalog.next().await
    }

    async fn fetch_stock_warnings(&self) -> Result<StockWarningSet> {
        self.record("fetch_stock_warnings");
        self.stock.next().await
    }

    async fn fetch_series_for_current_selection(&self) -> Result<ForecastSeries> {
        self.record("fetch_series_for_current_selection");
        self.series.next().await
    }

    async fn submit_selection(&self, request: &SelectionRequest) -> Result<Ack> {
        self.record("submit_selection");
        self.submitted.borrow_mut().push(request.clone());
        self.submit.next().await
    }

    async fn trigger_server_recompute(&self) -> Result<Ack> {
        self.record("trigger_server_recompute");
        self.recompute.next().await
    }
}

/// `{"Paracetamol": {"2024-01-01": 10.5, "2024-02-01": 20.25}}`
pub fn paracetamol_catalog() -> ForecastCatalog {
    let series: ForecastSeries = [("2024-01-01", 10.5), ("2024-02-01", 20.25)].into_iter().collect();
    [("Paracetamol", series)].into_iter().collect()
}
