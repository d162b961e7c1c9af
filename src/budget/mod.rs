//! Monthly category budgets and the budget planning page.

mod core;
mod page;

pub use core::{Budget, BudgetStatus, BudgetStore, BudgetTotals};
pub use page::get_budget_page;
