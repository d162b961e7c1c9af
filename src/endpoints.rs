//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}/edit', use [format_endpoint].

use std::fmt::Display;

/// The auth page for anonymous visitors. Signed in users are sent to the dashboard.
pub const ROOT: &str = "/";
/// The landing page for logged in users.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for displaying the expense history.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for recording a new expense.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page for editing an existing expense.
pub const EDIT_TRANSACTION_VIEW: &str = "/transactions/{transaction_id}/edit";
/// The page comparing spending against the budgets.
pub const BUDGET_VIEW: &str = "/budget";
/// The page listing saving tips.
pub const SAVING_TIPS_VIEW: &str = "/saving-tips";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for creating an account.
pub const SIGN_UP_API: &str = "/api/sign_up";
/// The route for logging in with the demo account in one click.
pub const DEMO_LOG_IN_API: &str = "/api/log_in/demo";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to create expenses.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to update or delete a single expense.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
