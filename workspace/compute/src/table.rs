//! Paginated table over one forecast series.
//!
//! Rows keep the key order delivered by the service; only the label text is
//! normalized. Every navigation request is clamped into `[1, page_count]`.

use common::ForecastSeries;

use crate::date::normalize_label;

/// Rows shown per table page.
pub const ITEMS_PER_PAGE: usize = 10;

/// Number of pages needed for `total_items`, never less than one.
pub fn page_count(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1)).max(1)
}

/// Navigation requested from the table controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    First,
    Prev,
    Next,
    Last,
    Goto(usize),
}

/// Current page of the table. `current_page` is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn page_count(&self, total_items: usize) -> usize {
        page_count(total_items, self.items_per_page)
    }

    /// Back to page 1, used whenever the displayed series changes.
    pub fn reset(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }

    /// Moves to `page`, clamped into the valid range for `total_items`.
    pub fn goto(self, page: usize, total_items: usize) -> Self {
        let last = self.page_count(total_items);
        Self {
            current_page: page.clamp(1, last),
            ..self
        }
    }

    /// Re-applies the page invariant after the series length changed.
    pub fn clamp(self, total_items: usize) -> Self {
        self.goto(self.current_page, total_items)
    }

    pub fn navigate(self, request: PageRequest, total_items: usize) -> Self {
        let target = match request {
            PageRequest::First => 1,
            PageRequest::Prev => self.current_page.saturating_sub(1),
            PageRequest::Next => self.current_page.saturating_add(1),
            PageRequest::Last => self.page_count(total_items),
            PageRequest::Goto(page) => page,
        };
        self.goto(target, total_items)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_items: usize) -> bool {
        self.current_page < self.page_count(total_items)
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Key as delivered by the service
    pub date_key: String,
    /// Normalized label shown in the Date column
    pub date_label: String,
    /// Forecast value with exactly two decimals
    pub value: String,
}

/// Visible slice of a series plus navigation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<TableRow>,
    pub page: usize,
    pub page_count: usize,
    pub total_items: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Formats a forecast value the way the table displays it.
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

/// Derives the visible page of `series`. An out-of-range `page` is clamped.
pub fn derive(series: &ForecastSeries, page: usize, page_size: usize) -> TablePage {
    let total_items = series.len();
    let pagination = Pagination::new(page_size).goto(page, total_items);
    derive_with(series, &pagination)
}

pub fn derive_with(series: &ForecastSeries, pagination: &Pagination) -> TablePage {
    let total_items = series.len();
    let pagination = pagination.clamp(total_items);
    let size = pagination.items_per_page();
    let start = (pagination.current_page() - 1) * size;

    let rows = series
        .iter()
        .skip(start)
        .take(size)
        .map(|(date_key, value)| TableRow {
            date_key: date_key.to_string(),
            date_label: normalize_label(date_key),
            value: format_value(value),
        })
        .collect();

    TablePage {
        rows,
        page: pagination.current_page(),
        page_count: pagination.page_count(total_items),
        total_items,
        has_prev: pagination.has_prev(),
        has_next: pagination.has_next(total_items),
    }
}
