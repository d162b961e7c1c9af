//! Defines the endpoint for updating an expense.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{CookieJar, Form};
use axum_htmx::HxRedirect;

use crate::{
    Error, endpoints,
    flash::{Flash, set_flash},
    timezone::local_now,
    transaction::{TransactionState, core::TransactionId, form::ExpenseForm},
};

/// Replace the expense with `transaction_id`, redirecting to the transactions view on success.
///
/// Responds with an alert if the form is invalid or the expense does not exist.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    jar: CookieJar,
    Form(form): Form<ExpenseForm>,
) -> Response {
    match update_transaction(&state, &transaction_id, form) {
        Ok(()) => (
            StatusCode::SEE_OTHER,
            HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
            set_flash(jar, Flash::ExpenseUpdated),
        )
            .into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn update_transaction(
    state: &TransactionState,
    transaction_id: &str,
    form: ExpenseForm,
) -> Result<(), Error> {
    let now = local_now(&state.local_timezone)?;
    let mut store = state.lock_store()?;

    let previous = store
        .get(transaction_id)
        .map(|transaction| transaction.date)
        .ok_or(Error::UpdateMissingTransaction)?;

    let expense = form.into_new_expense(now, Some(previous))?;

    match store.update(transaction_id, expense)? {
        Some(transaction) => {
            tracing::info!("Updated transaction {}", transaction.id);
            Ok(())
        }
        None => Err(Error::UpdateMissingTransaction),
    }
}
