//! Pure summaries over a slice of transactions: search, per-category totals and
//! the figures shown on the dashboard.

use crate::category::category_of;

use super::core::Transaction;

/// The transactions whose description or category name contains `term`,
/// ignoring case.
///
/// A blank term matches every transaction.
pub fn search<'a>(transactions: &'a [Transaction], term: &str) -> Vec<&'a Transaction> {
    let term = term.trim().to_lowercase();

    if term.is_empty() {
        return transactions.iter().collect();
    }

    transactions
        .iter()
        .filter(|transaction| {
            transaction.description.to_lowercase().contains(&term)
                || category_of(&transaction.category_id)
                    .name
                    .to_lowercase()
                    .contains(&term)
        })
        .collect()
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal<'a> {
    pub category_id: &'a str,
    pub total: f64,
}

/// Sum the amounts per category id, ordered by first appearance in `transactions`.
pub fn sum_by_category<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<CategoryTotal<'a>> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions {
        match totals
            .iter_mut()
            .find(|total| total.category_id == transaction.category_id)
        {
            Some(total) => total.total += transaction.amount,
            None => totals.push(CategoryTotal {
                category_id: &transaction.category_id,
                total: transaction.amount,
            }),
        }
    }

    totals
}

pub fn total_amount<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    transactions
        .into_iter()
        .map(|transaction| transaction.amount)
        .sum()
}

/// The figures in the dashboard's spending summary.
#[derive(Debug, PartialEq)]
pub struct SpendingSummary<'a> {
    pub total: f64,
    /// `total` spread over the days in the period.
    pub average_per_day: f64,
    pub largest: Option<&'a Transaction>,
}

/// Summarize `transactions` over a period of `days_in_period` days.
pub fn spending_summary(transactions: &[Transaction], days_in_period: u8) -> SpendingSummary<'_> {
    let total = total_amount(transactions);
    let average_per_day = if days_in_period == 0 {
        0.0
    } else {
        total / f64::from(days_in_period)
    };
    let largest = transactions
        .iter()
        .max_by(|a, b| a.amount.total_cmp(&b.amount));

    SpendingSummary {
        total,
        average_per_day,
        largest,
    }
}

/// The `count` newest transactions, newest first.
pub fn most_recent(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(count);

    sorted
}
