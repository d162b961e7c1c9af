//! Expense Tracker is a web app for recording day to day expenses and seeing
//! where the money goes.
//!
//! This library provides a web server that directly serves HTML pages. Expenses
//! and budgets are kept in memory and seeded with sample data, and signing in
//! is simulated with a demo account.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod auth;
mod budget;
mod category;
mod dashboard;
mod endpoints;
mod error;
mod flash;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod saving_tips;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, DEFAULT_MONTHLY_INCOME};
pub use auth::{
    AuthConfig, AuthOutcome, AuthRequest, DEFAULT_LOGIN_DELAY, MemorySessionStorage, PendingAuth,
    SessionManager, SessionState, SessionStorage, User,
};
pub use budget::{Budget, BudgetStatus, BudgetStore, BudgetTotals};
pub use error::{Error, ValidationError};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_local_offset;
pub use transaction::{Expense, NewExpense, Transaction, TransactionId, TransactionStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
