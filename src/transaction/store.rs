//! The in-memory collection of expenses.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;

use crate::{
    AppState, Error,
    error::ValidationError,
    transaction::core::{NewExpense, Transaction, TransactionId, sample_transactions},
};

/// Holds the expenses, newest additions first.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after deletes.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::from_transactions(Vec::new())
    }
}

impl TransactionStore {
    /// A store containing `transactions` in the given order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let next_id = transactions.len() as u64 + 1;

        Self {
            transactions,
            next_id,
        }
    }

    /// A store seeded with the sample expenses.
    pub fn with_sample_data() -> Self {
        Self::from_transactions(sample_transactions())
    }

    /// Validate `expense` and insert it at the front with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns a [ValidationError] and leaves the store unchanged if the
    /// expense is invalid.
    pub fn add(&mut self, expense: NewExpense) -> Result<Transaction, ValidationError> {
        let expense = expense.validate()?;
        let transaction = expense.into_transaction(self.generate_id());

        self.transactions.insert(0, transaction.clone());

        Ok(transaction)
    }

    /// Validate `expense` and replace the transaction with `id`, keeping the id.
    ///
    /// Returns `Ok(None)` without changing anything if there is no such transaction.
    ///
    /// # Errors
    ///
    /// Returns a [ValidationError] if the expense is invalid.
    pub fn update(
        &mut self,
        id: &str,
        expense: NewExpense,
    ) -> Result<Option<Transaction>, ValidationError> {
        let expense = expense.validate()?;

        let Some(slot) = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
        else {
            return Ok(None);
        };

        *slot = expense.into_transaction(id.to_owned());

        Ok(Some(slot.clone()))
    }

    /// Remove the transaction with `id`, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<Transaction> {
        let position = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)?;

        Some(self.transactions.remove(position))
    }

    /// The transaction with `id`, if any.
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// Every transaction in store order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether there are no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn generate_id(&mut self) -> TransactionId {
        loop {
            let id = format!("t{}", self.next_id);
            self.next_id += 1;

            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// The state needed by the transaction pages and endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store shared by every request.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.transactions.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

impl TransactionState {
    /// Acquire the store lock.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, TransactionStore>, Error> {
        self.store
            .lock()
            .inspect_err(|error| tracing::error!("Could not acquire transaction store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }
}
