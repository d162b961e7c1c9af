//! Defines the endpoint for recording a new expense.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::{CookieJar, Form};
use axum_htmx::HxRedirect;

use crate::{
    Error, endpoints,
    flash::{Flash, set_flash},
    timezone::local_now,
    transaction::{TransactionState, form::ExpenseForm},
};

/// A route handler for recording a new expense, redirects to the transactions view on success.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    jar: CookieJar,
    Form(form): Form<ExpenseForm>,
) -> Response {
    match create_transaction(&state, form) {
        Ok(()) => (
            StatusCode::SEE_OTHER,
            HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
            set_flash(jar, Flash::ExpenseAdded),
        )
            .into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn create_transaction(state: &TransactionState, form: ExpenseForm) -> Result<(), Error> {
    let now = local_now(&state.local_timezone)?;
    let expense = form.into_new_expense(now, None)?;

    let transaction = state.lock_store()?.add(expense)?;
    tracing::info!(
        "Created transaction {} for {}",
        transaction.id,
        transaction.amount
    );

    Ok(())
}
