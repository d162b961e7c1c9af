//! Dashboard module
//!
//! Provides an overview page with the month's balance, a spending summary,
//! a chart of spending per category and the most recent expenses.

mod cards;
mod charts;
mod handlers;

pub use handlers::get_dashboard_page;
