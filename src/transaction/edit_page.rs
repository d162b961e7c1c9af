//! Defines the route handler for the page for editing an expense.

use axum::{
    Extension,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    auth::User,
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles, loading_spinner},
    navigation::NavBar,
    transaction::{
        TransactionState,
        core::{Transaction, TransactionId},
        form::{ExpenseFormDefaults, expense_form_fields},
    },
};

fn edit_transaction_view(user: &User, transaction: &Transaction) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_TRANSACTION_VIEW, user).into_html();
    let update_url = format_endpoint(endpoints::TRANSACTION, &transaction.id);

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-put=(update_url)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="#submit-button"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Edit Expense" }

                (expense_form_fields(&ExpenseFormDefaults {
                    amount: Some(transaction.amount),
                    date: transaction.date.date(),
                    description: Some(&transaction.description),
                    category_id: &transaction.category_id,
                }))

                div class="flex gap-4"
                {
                    a
                        href=(endpoints::TRANSACTIONS_VIEW)
                        class="w-full px-4 py-2 text-center rounded border border-gray-300
                            dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-700"
                    {
                        "Cancel"
                    }

                    button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                    {
                        span id="indicator" class="inline htmx-indicator" { (loading_spinner()) }
                        " Save Changes"
                    }
                }
            }
        }
    };

    base("Edit Expense", &[dollar_input_styles()], &content)
}

/// Renders the page for editing an expense, or the 404 page if it does not exist.
pub async fn get_edit_transaction_page(
    State(state): State<TransactionState>,
    Extension(user): Extension<User>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let store = state.lock_store()?;

    let transaction = store.get(&transaction_id).ok_or_else(|| {
        tracing::debug!("Tried to edit missing transaction {transaction_id}");
        Error::NotFound
    })?;

    Ok(edit_transaction_view(&user, transaction).into_response())
}
