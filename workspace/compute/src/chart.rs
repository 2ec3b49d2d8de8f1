use common::ForecastSeries;

use crate::date::normalize_label;

/// Name of the single dataset shown in the usage chart.
pub const DATASET_LABEL: &str = "Medicine Usage";

/// Chart-ready dataset: one label per bar, one value per label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest value, used for scaling text bars. `None` for an empty series.
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Maps a raw series to chart labels and values.
///
/// Labels follow the service's key order so the horizontal axis matches the
/// table. Values are passed through unmodified.
pub fn build(series: &ForecastSeries) -> ChartSeries {
    let (labels, values): (Vec<String>, Vec<f64>) = series
        .iter()
        .map(|(date_key, value)| (normalize_label(date_key), value))
        .unzip();

    ChartSeries {
        dataset_label: DATASET_LABEL.to_string(),
        labels,
        values,
    }
}
