//! The expense record and the validation applied before it enters the store.

use time::{PrimitiveDateTime, macros::datetime};

use crate::{category::DEFAULT_CATEGORY_ID, error::ValidationError};

/// Identifies a transaction, e.g. "t12".
pub type TransactionId = String;

/// An expense the user has recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique within the store.
    pub id: TransactionId,
    /// When the expense happened, in the server's local time.
    pub date: PrimitiveDateTime,
    /// Always greater than zero.
    pub amount: f64,
    /// Never empty.
    pub description: String,
    /// May refer to a category that is not in the catalog.
    pub category_id: String,
}

/// The user-supplied fields of an expense before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// Must be a finite number above zero.
    pub amount: f64,
    /// When the expense happened.
    pub date: PrimitiveDateTime,
    /// Trimmed on validation and must not be blank.
    pub description: String,
    /// Empty means uncategorized.
    pub category_id: String,
}

/// An expense whose description and amount have been checked.
///
/// Only [NewExpense::validate] can create one, so the store never holds an
/// invalid record.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    amount: f64,
    date: PrimitiveDateTime,
    description: String,
    category_id: String,
}

impl NewExpense {
    /// Check the description is not blank and the amount is a finite number above zero.
    ///
    /// The description is trimmed and an empty category falls back to
    /// [DEFAULT_CATEGORY_ID].
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::EmptyDescription] or [ValidationError::InvalidAmount].
    pub fn validate(self) -> Result<Expense, ValidationError> {
        let description = self.description.trim();

        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }

        let category_id = match self.category_id.trim() {
            "" => DEFAULT_CATEGORY_ID.to_owned(),
            category_id => category_id.to_owned(),
        };

        Ok(Expense {
            amount: self.amount,
            date: self.date,
            description: description.to_owned(),
            category_id,
        })
    }
}

impl Expense {
    pub(crate) fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            description: self.description,
            category_id: self.category_id,
        }
    }
}

/// Parse the text of an amount input.
///
/// # Errors
///
/// Returns [ValidationError::InvalidAmount] if `raw` is not a number.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidAmount)
}

/// The expenses the store is seeded with.
pub fn sample_transactions() -> Vec<Transaction> {
    [
        ("t1", datetime!(2023-08-01 0:00), 2000.0, "Monthly Rent", "housing"),
        ("t2", datetime!(2023-08-02 0:00), 125.30, "Grocery Store", "food"),
        ("t3", datetime!(2023-08-03 0:00), 45.99, "Electric Bill", "utilities"),
        ("t4", datetime!(2023-08-04 0:00), 67.80, "Restaurant Dinner", "food"),
        ("t5", datetime!(2023-08-05 0:00), 199.99, "New Shoes", "shopping"),
        ("t6", datetime!(2023-08-06 0:00), 14.50, "Coffee Shop", "coffee"),
        ("t7", datetime!(2023-08-07 0:00), 32.99, "Book Store", "entertainment"),
        ("t8", datetime!(2023-08-08 0:00), 49.99, "Birthday Gift", "gifts"),
    ]
    .into_iter()
    .map(|(id, date, amount, description, category_id)| Transaction {
        id: id.to_owned(),
        date,
        amount,
        description: description.to_owned(),
        category_id: category_id.to_owned(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{category::DEFAULT_CATEGORY_ID, error::ValidationError};

    use super::{NewExpense, parse_amount, sample_transactions};

    fn new_expense(amount: f64, description: &str) -> NewExpense {
        NewExpense {
            amount,
            date: datetime!(2024-03-01 9:30),
            description: description.to_owned(),
            category_id: "food".to_owned(),
        }
    }

    #[test]
    fn accepts_positive_amount_and_description() {
        let transaction = new_expense(12.5, "  Lunch ")
            .validate()
            .unwrap()
            .into_transaction("t1".to_owned());

        assert_eq!(transaction.description, "Lunch");
        assert_eq!(transaction.amount, 12.5);
        assert_eq!(transaction.category_id, "food");
    }

    #[test]
    fn rejects_blank_description() {
        assert_eq!(
            new_expense(12.5, "   ").validate(),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn rejects_zero_negative_and_non_finite_amounts() {
        for amount in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                new_expense(amount, "Lunch").validate(),
                Err(ValidationError::InvalidAmount),
                "amount {amount} should be rejected"
            );
        }
    }

    #[test]
    fn empty_category_falls_back_to_default() {
        let mut expense = new_expense(1.0, "Lunch");
        expense.category_id = String::new();

        let transaction = expense.validate().unwrap().into_transaction("t1".to_owned());

        assert_eq!(transaction.category_id, DEFAULT_CATEGORY_ID);
    }

    #[test]
    fn parse_amount_rejects_text() {
        assert_eq!(parse_amount("abc"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount(" 4.20 "), Ok(4.2));
    }

    #[test]
    fn sample_data_is_valid() {
        let transactions = sample_transactions();

        assert_eq!(transactions.len(), 8);
        assert!(transactions.iter().all(|transaction| transaction.amount > 0.0));
    }
}
