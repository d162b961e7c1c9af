use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    alert::Alert,
    transaction::{TransactionState, core::TransactionId},
};

/// A route handler for deleting an expense.
///
/// Responds with an empty body that replaces the expense's list item, plus an
/// out-of-band success alert. The status code has to be 200 OK or HTMX will not
/// remove the list item.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let removed = match state.lock_store() {
        Ok(mut store) => store.remove(&transaction_id),
        Err(error) => return error.into_alert_response(),
    };

    match removed {
        Some(transaction) => {
            tracing::info!("Deleted transaction {}", transaction.id);
            Alert::success("Expense deleted").into_html().into_response()
        }
        None => {
            tracing::warn!("Tried to delete missing transaction {transaction_id}");
            Error::DeleteMissingTransaction.into_alert_response()
        }
    }
}
