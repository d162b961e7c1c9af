//! Defines the route handler for the page for recording a new expense.

use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    Error,
    auth::User,
    category::DEFAULT_CATEGORY_ID,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles, loading_spinner},
    navigation::NavBar,
    timezone::local_now,
    transaction::{
        TransactionState,
        form::{ExpenseFormDefaults, expense_form_fields},
    },
};

fn create_transaction_view(user: &User, today: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW, user).into_html();
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="#submit-button"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Add Expense" }

                (expense_form_fields(&ExpenseFormDefaults {
                    amount: None,
                    date: today,
                    description: None,
                    category_id: DEFAULT_CATEGORY_ID,
                }))

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Add Expense"
                }
            }
        }
    };

    base("Add Expense", &[dollar_input_styles()], &content)
}

/// Renders the page for recording a new expense, with the date set to today.
pub async fn get_new_transaction_page(
    State(state): State<TransactionState>,
    Extension(user): Extension<User>,
) -> Result<Response, Error> {
    let today = local_now(&state.local_timezone)?.date();

    Ok(create_transaction_view(&user, today).into_response())
}
