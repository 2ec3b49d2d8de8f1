//! Plain-text rendering of the dashboard view for terminal output.

use compute::dashboard::{DashboardView, NO_FORECAST_DATA, TableView, WarningLine};
use compute::{ChartSeries, TablePage};
use std::fmt::Write;

const DATE_HEADER: &str = "Date";
const VALUE_HEADER: &str = "Forecast Value";
const CHART_WIDTH: usize = 40;

/// Renders the table section: the visible page or the "no data" sentinel.
pub fn render_table(table: &TableView) -> String {
    match table {
        TableView::Empty => format!("{}\n", NO_FORECAST_DATA),
        TableView::Page { medicine, page } => {
            let mut out = format!("Forecast for {}\n", medicine);
            out.push_str(&render_page(page));
            out
        }
    }
}

fn render_page(page: &TablePage) -> String {
    let date_width = page
        .rows
        .iter()
        .map(|row| row.date_label.chars().count())
        .chain([DATE_HEADER.len()])
        .max()
        .unwrap_or(DATE_HEADER.len());
    let value_width = page
        .rows
        .iter()
        .map(|row| row.value.len())
        .chain([VALUE_HEADER.len()])
        .max()
        .unwrap_or(VALUE_HEADER.len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<dw$} | {:>vw$}", DATE_HEADER, VALUE_HEADER, dw = date_width, vw = value_width);
    let _ = writeln!(out, "{}-+-{}", "-".repeat(date_width), "-".repeat(value_width));
    for row in &page.rows {
        let _ = writeln!(out, "{:<dw$} | {:>vw$}", row.date_label, row.value, dw = date_width, vw = value_width);
    }
    let _ = writeln!(
        out,
        "Page {} of {} ({} items){}{}",
        page.page,
        page.page_count,
        page.total_items,
        if page.has_prev { "  [prev]" } else { "" },
        if page.has_next { "  [next]" } else { "" },
    );
    out
}

/// Renders the stock warning panel. `None` when there is nothing to warn about,
/// so callers print no panel at all.
pub fn render_warnings(lines: Option<&[WarningLine]>) -> Option<String> {
    let lines = lines.filter(|lines| !lines.is_empty())?;

    let mut out = String::from("Stock warnings\n");
    for line in lines {
        let _ = writeln!(out, "  {}: {}", line.medicine, line.warning);
    }
    Some(out)
}

/// Renders the chart as horizontal text bars scaled to the largest value.
pub fn render_chart(chart: &ChartSeries) -> String {
    let mut out = format!("{}\n", chart.dataset_label);
    if chart.is_empty() {
        out.push_str("  (no data points)\n");
        return out;
    }

    let label_width = chart.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = chart.max_value().unwrap_or(0.0);
    for (label, value) in chart.labels.iter().zip(&chart.values) {
        let bar_len = if max > 0.0 && *value > 0.0 {
            ((value / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(out, "  {:<lw$} | {} {}", label, "#".repeat(bar_len), value, lw = label_width);
    }
    out
}

/// Renders the whole dashboard: status, chart, table and warnings.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut sections = Vec::new();

    if let Some(message) = &view.last_message {
        sections.push(format!("Service: {}\n", message));
    }
    if let Some(error) = &view.last_error {
        sections.push(format!("Warning: some data could not be loaded ({})\n", error));
    }
    if let Some(chart) = &view.chart {
        sections.push(render_chart(chart));
    }
    sections.push(render_table(&view.table));
    if let Some(warnings) = render_warnings(view.stock_warnings.as_deref()) {
        sections.push(warnings);
    }

    sections.join("\n")
}

/// Renders the selectable medicines and regions.
pub fn render_options(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Periods: monthly, weekly, daily");
    let _ = writeln!(out, "Medicines ({}):", view.medicines.len());
    for medicine in &view.medicines {
        let _ = writeln!(out, "  {}", medicine);
    }
    let _ = writeln!(out, "Regions ({}):", view.regions.len());
    for region in &view.regions {
        let _ = writeln!(out, "  {}", region);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::table::derive;
    use common::ForecastSeries;

    #[test]
    fn test_render_table_page() {
        let series: ForecastSeries = [("2024-01-01", 10.5), ("2024-02-01", 20.25)].into_iter().collect();
        let table = TableView::Page {
            medicine: "Paracetamol".into(),
            page: derive(&series, 1, 10),
        };

        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Forecast for Paracetamol");
        assert_eq!(lines[1], "Date             | Forecast Value");
        assert_eq!(lines[3], "January 1, 2024  |          10.50");
        assert_eq!(lines[4], "February 1, 2024 |          20.25");
        assert_eq!(lines[5], "Page 1 of 1 (2 items)");
    }

    #[test]
    fn test_render_empty_table_sentinel() {
        assert_eq!(render_table(&TableView::Empty), "No forecast data available\n");
    }

    #[test]
    fn test_render_warnings_absent_when_empty() {
        assert_eq!(render_warnings(None), None);
        assert_eq!(render_warnings(Some(&[])), None);

        let lines = vec![WarningLine {
            medicine: "Insulin".into(),
            warning: "Low stock".into(),
        }];
        assert_eq!(
            render_warnings(Some(&lines)).as_deref(),
            Some("Stock warnings\n  Insulin: Low stock\n")
        );
    }

    #[test]
    fn test_render_chart_scales_bars() {
        let chart = ChartSeries {
            dataset_label: "Medicine Usage".into(),
            labels: vec!["Jan".into(), "February".into()],
            values: vec![5.0, 10.0],
        };
        let text = render_chart(&chart);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Medicine Usage");
        assert_eq!(lines[1], format!("  Jan      | {} 5", "#".repeat(20)));
        assert_eq!(lines[2], format!("  February | {} 10", "#".repeat(40)));
    }
}
