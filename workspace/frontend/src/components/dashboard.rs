pub mod chart;
pub mod selection_form;
pub mod stock_warnings;
pub mod table;
pub mod view;

pub use view::Dashboard;
