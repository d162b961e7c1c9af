//! Grouping transactions into calendar days for the transaction list.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use super::core::Transaction;

/// Day heading format, e.g. "August 1, 2023".
const DAY_LABEL_FORMAT: &[BorrowedFormatItem] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// Transactions that happened on the same calendar day.
#[derive(Debug, PartialEq)]
pub struct DayGroup<'a> {
    pub date: Date,
    /// Newest first.
    pub transactions: Vec<&'a Transaction>,
}

impl DayGroup<'_> {
    /// The human-readable heading for the group.
    pub fn label(&self) -> String {
        self.date
            .format(DAY_LABEL_FORMAT)
            .unwrap_or_else(|_| self.date.to_string())
    }
}

/// Partition `transactions` by calendar day.
///
/// Groups are ordered from the latest day to the earliest and the transactions
/// in each group are ordered by descending timestamp. Transactions with equal
/// timestamps keep their input order.
pub fn group_by_day<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<DayGroup<'a>> {
    let mut sorted: Vec<&Transaction> = transactions.into_iter().collect();
    // `sort_by` is stable, which preserves the input order for ties.
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut groups: Vec<DayGroup> = Vec::new();

    for transaction in sorted {
        let date = transaction.date.date();

        match groups.last_mut() {
            Some(group) if group.date == date => group.transactions.push(transaction),
            _ => groups.push(DayGroup {
                date,
                transactions: vec![transaction],
            }),
        }
    }

    groups
}
