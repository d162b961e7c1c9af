//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// User input that was rejected before any state was changed.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The expense description was empty or only whitespace.
    #[error("Please enter a description")]
    EmptyDescription,

    /// The expense amount was not a finite number greater than zero.
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// The name entered during sign-up was empty or only whitespace.
    #[error("Please enter your name")]
    EmptyName,

    /// The date could not be parsed as a calendar date (YYYY-MM-DD).
    #[error("Please enter a valid date")]
    InvalidDate,
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user submitted a form with invalid values.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The email and password did not match the demo account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A pending log-in or sign-up finished after the session was logged out
    /// or replaced, so its result was discarded.
    #[error("the session changed while the request was pending")]
    SessionSuperseded,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An error occurred while serializing or deserializing JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// Could not acquire the transaction store lock.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// Tried to update a transaction that does not exist.
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::Validation(error) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid expense".to_owned(),
                    details: error.to_string(),
                },
            ),
            Error::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Alert::Error {
                    message: "Could not log in".to_owned(),
                    details: Error::InvalidCredentials.to_string(),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            Error::UpdateMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update expense".to_owned(),
                    details: "The expense could not be found.".to_owned(),
                },
            ),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete expense".to_owned(),
                    details: "The expense could not be found. \
                    Try refreshing the page to see if the expense has already been deleted."
                        .to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{
        Error,
        error::ValidationError,
        test_utils::{assert_valid_html, must_get_alert, parse_html_document, parse_html_fragment},
    };

    #[test]
    fn validation_messages_match_form_copy() {
        assert_eq!(
            ValidationError::EmptyDescription.to_string(),
            "Please enter a description"
        );
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Please enter a valid amount"
        );
        assert_eq!(ValidationError::EmptyName.to_string(), "Please enter your name");
    }

    #[tokio::test]
    async fn validation_error_renders_bad_request_alert() {
        let response = Error::from(ValidationError::InvalidAmount).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let alert = must_get_alert(&html);
        assert_eq!(alert.message, "Invalid expense");
        assert_eq!(alert.details.as_deref(), Some("Please enter a valid amount"));
    }

    #[tokio::test]
    async fn missing_transaction_renders_not_found_alert() {
        let response = Error::DeleteMissingTransaction.into_alert_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let alert = must_get_alert(&parse_html_fragment(response).await);
        assert_eq!(alert.message, "Could not delete expense");
    }

    #[tokio::test]
    async fn not_found_renders_404_page() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
    }

    #[tokio::test]
    async fn lock_error_renders_500_page() {
        let response = Error::StoreLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
