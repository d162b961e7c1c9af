//! Expense records and the pages and endpoints for managing them.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validation of new expenses
//! - The in-memory `TransactionStore` shared by all requests
//! - Pure aggregations used by the transactions page and the dashboard
//! - View handlers and HTMX endpoints for listing, adding, editing and deleting expenses

pub(crate) mod aggregation;
pub(crate) mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
pub(crate) mod form;
pub(crate) mod grouping;
mod store;
mod transactions_page;

pub use core::{Expense, NewExpense, Transaction, TransactionId};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_new_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use store::{TransactionState, TransactionStore};
pub use transactions_page::get_transactions_page;
