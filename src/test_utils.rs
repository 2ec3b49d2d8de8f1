//! In-process stand-in for the forecasting service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use common::endpoints;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::ServiceConfig;

/// Data served by the fake service and what it has received so far.
pub struct FakeServiceState {
    pub medicines: Value,
    pub regions: Value,
    pub all_forecasts: Value,
    pub stock: Value,
    pub forecast: Value,
    /// Replaces `all_forecasts` when a recompute is triggered
    pub recomputed_forecasts: Option<Value>,
    /// Endpoints answering with HTTP 500
    pub failing: HashSet<&'static str>,
    pub selections: Vec<Value>,
    pub recompute_calls: usize,
}

impl Default for FakeServiceState {
    fn default() -> Self {
        Self {
            medicines: json!(["Paracetamol", "Ibuprofen"]),
            regions: json!(["Kerala", "Goa"]),
            all_forecasts: json!([{"forecasts": {
                "Paracetamol": {"2024-01-01": 10.5, "2024-02-01": 20.25}
            }}]),
            stock: json!({}),
            forecast: json!({}),
            recomputed_forecasts: None,
            failing: HashSet::new(),
            selections: Vec::new(),
            recompute_calls: 0,
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeService {
    state: Arc<Mutex<FakeServiceState>>,
}

impl FakeService {
    pub fn new(configure: impl FnOnce(&mut FakeServiceState)) -> Self {
        let service = Self::default();
        configure(&mut *service.lock());
        service
    }

    pub fn lock(&self) -> MutexGuard<'_, FakeServiceState> {
        self.state.lock().expect("Fake service state poisoned")
    }

    fn router(&self) -> Router {
        Router::new()
            .route(endpoints::MEDICINES, get(medicines))
            .route(endpoints::REGIONS, get(regions))
            .route(endpoints::ALL_FORECASTS, get(all_forecasts))
            .route(endpoints::STOCK, get(stock))
            .route(endpoints::FORECAST, get(forecast))
            .route(endpoints::SELECTION, post(selection))
            .route(endpoints::RECOMPUTE, get(recompute))
            .with_state(self.clone())
    }

    /// Serves on a random local port and returns a client configuration for it.
    pub async fn spawn(&self) -> ServiceConfig {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake service");
        let address = listener.local_addr().expect("Fake service has no address");
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake service stopped");
        });

        ServiceConfig {
            api_base_url: format!("http://{}", address),
            request_timeout_secs: 5,
        }
    }

    fn respond(&self, endpoint: &'static str, body: impl FnOnce(&mut FakeServiceState) -> Value) -> Response {
        let mut state = self.lock();
        if state.failing.contains(endpoint) {
            return (StatusCode::INTERNAL_SERVER_ERROR, "forecast backend unavailable").into_response();
        }
        Json(body(&mut *state)).into_response()
    }
}

async fn medicines(State(service): State<FakeService>) -> Response {
    service.respond(endpoints::MEDICINES, |s| s.medicines.clone())
}

async fn regions(State(service): State<FakeService>) -> Response {
    service.respond(endpoints::REGIONS, |s| s.regions.clone())
}

async fn all_forecasts(State(service): State<FakeService>) -> Response {
    service.respond(endpoints::ALL_FORECASTS, |s| s.all_forecasts.clone())
}

async fn stock(State(service): State<FakeService>) -> Response {
    service.respond(endpoints::STOCK, |s| s.stock.clone())
}

async fn forecast(State(service): State<FakeService>) -> Response {
    service.respond(endpoints::FORECAST, |s| s.forecast.clone())
}

async fn selection(State(service): State<FakeService>, Json(body): Json<Value>) -> Response {
    service.respond(endpoints::SELECTION, |s| {
        s.selections.push(body);
        json!({"message": "Selection received"})
    })
}

async fn recompute(State(service): State<FakeService>) -> Response {
    let mut state = service.lock();
    state.recompute_calls += 1;
    if state.failing.contains(endpoints::RECOMPUTE) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "recompute failed").into_response();
    }
    if let Some(forecasts) = state.recomputed_forecasts.take() {
        state.all_forecasts = forecasts;
    }
    "Forecasts updated".into_response()
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
