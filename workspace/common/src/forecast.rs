use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::MedicineName;

/// Forecast values for one medicine keyed by the service's raw date strings.
///
/// Keys keep the order in which the service delivered them. The date format
/// is not guaranteed, so keys are never parsed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ForecastSeries(IndexMap<String, f64>);

impl ForecastSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a point, replacing the value in place if the key already exists.
    pub fn insert(&mut self, date_key: impl Into<String>, value: f64) {
        self.0.insert(date_key.into(), value);
    }

    pub fn get(&self, date_key: &str) -> Option<f64> {
        self.0.get(date_key).copied()
    }

    /// Points in delivery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ForecastSeries {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Every medicine's forecast series, in the order returned by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ForecastCatalog(IndexMap<MedicineName, ForecastSeries>);

impl ForecastCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, medicine: impl Into<MedicineName>, series: ForecastSeries) {
        self.0.insert(medicine.into(), series);
    }

    pub fn series(&self, medicine: &str) -> Option<&ForecastSeries> {
        self.0.get(medicine)
    }

    pub fn contains(&self, medicine: &str) -> bool {
        self.0.contains_key(medicine)
    }

    /// Medicine names in catalog order.
    pub fn medicines(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// The medicine shown in the table when nothing else was chosen: the first
    /// key in catalog order, not the alphabetically first one.
    pub fn default_medicine(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }
}

impl<K: Into<MedicineName>> FromIterator<(K, ForecastSeries)> for ForecastCatalog {
    fn from_iter<I: IntoIterator<Item = (K, ForecastSeries)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Low-stock warnings keyed by medicine. A missing entry means no warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct StockWarningSet(IndexMap<MedicineName, String>);

impl StockWarningSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, medicine: impl Into<MedicineName>, warning: impl Into<String>) {
        self.0.insert(medicine.into(), warning.into());
    }

    pub fn warning_for(&self, medicine: &str) -> Option<&str> {
        self.0.get(medicine).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(m, w)| (m.as_str(), w.as_str()))
    }
}

impl<K: Into<MedicineName>, W: Into<String>> FromIterator<(K, W)> for StockWarningSet {
    fn from_iter<I: IntoIterator<Item = (K, W)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, w)| (k.into(), w.into())).collect())
    }
}

/// One element of the `/all_forecasts` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastEnvelope {
    pub forecasts: ForecastCatalog,
}

/// Raw `/all_forecasts` payload: an array whose first element carries the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AllForecastsResponse(pub Vec<ForecastEnvelope>);

impl AllForecastsResponse {
    /// Extracts the catalog from element 0. Any further elements are ignored.
    /// Returns `None` when the array is empty.
    pub fn into_catalog(self) -> Option<ForecastCatalog> {
        let extra = self.0.len().saturating_sub(1);
        if extra > 0 {
            warn!(extra, "Ignoring additional forecast envelopes");
        }
        self.0.into_iter().next().map(|envelope| envelope.forecasts)
    }
}
