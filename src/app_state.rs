//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use time::Duration;

use crate::{
    auth::{AuthConfig, DEFAULT_COOKIE_DURATION},
    budget::BudgetStore,
    transaction::TransactionStore,
};

/// The income shown on the dashboard when none is configured.
pub const DEFAULT_MONTHLY_INCOME: f64 = 5000.0;

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The duration for which session cookies are valid.
    pub cookie_duration: Duration,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// Settings for the simulated authentication backend.
    pub auth_config: AuthConfig,

    /// The expenses shared by every request.
    pub transactions: Arc<Mutex<TransactionStore>>,

    /// The read-only budgets.
    pub budgets: Arc<BudgetStore>,

    /// The mock income used for the balance on the dashboard.
    pub monthly_income: f64,
}

impl AppState {
    /// Create a new [AppState] seeded with the sample expenses and budgets.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(
        cookie_secret: &str,
        local_timezone: &str,
        auth_config: AuthConfig,
        monthly_income: f64,
    ) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            cookie_duration: DEFAULT_COOKIE_DURATION,
            local_timezone: local_timezone.to_owned(),
            auth_config,
            transactions: Arc::new(Mutex::new(TransactionStore::with_sample_data())),
            budgets: Arc::new(BudgetStore::with_sample_data()),
            monthly_income,
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
