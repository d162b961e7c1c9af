//! One-shot success notices that survive a redirect.
//!
//! The handler that redirects stores a [Flash] in a short-lived cookie and the
//! page at the redirect target renders it as an [Alert], removing the cookie
//! so the notice is shown once.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use time::Duration;

use crate::alert::Alert;

/// The name of the cookie holding the pending notice.
pub(crate) const COOKIE_FLASH: &str = "flash";

/// How long an unread notice is kept.
const FLASH_MAX_AGE: Duration = Duration::minutes(1);

/// A success notice for an action completed before a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// A new expense was recorded.
    ExpenseAdded,
    /// An expense was changed.
    ExpenseUpdated,
    /// The user signed in with existing credentials.
    LoggedIn,
    /// The user signed up.
    AccountCreated,
    /// The user ended their session.
    LoggedOut,
}

impl Flash {
    /// The text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Flash::ExpenseAdded => "Expense added",
            Flash::ExpenseUpdated => "Expense updated",
            Flash::LoggedIn => "Logged in successfully!",
            Flash::AccountCreated => "Account created successfully!",
            Flash::LoggedOut => "Logged out successfully!",
        }
    }

    // The cookie holds one of these codes, never the message itself.
    fn code(self) -> &'static str {
        match self {
            Flash::ExpenseAdded => "expense_added",
            Flash::ExpenseUpdated => "expense_updated",
            Flash::LoggedIn => "logged_in",
            Flash::AccountCreated => "account_created",
            Flash::LoggedOut => "logged_out",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        [
            Flash::ExpenseAdded,
            Flash::ExpenseUpdated,
            Flash::LoggedIn,
            Flash::AccountCreated,
            Flash::LoggedOut,
        ]
        .into_iter()
        .find(|flash| flash.code() == code)
    }

    /// The notice as a success alert.
    pub fn into_alert(self) -> Alert {
        Alert::success(self.message())
    }
}

/// Store `flash` for the next page the browser loads.
pub fn set_flash(jar: CookieJar, flash: Flash) -> CookieJar {
    jar.add(
        Cookie::build((COOKIE_FLASH, flash.code()))
            .max_age(FLASH_MAX_AGE)
            .http_only(true)
            .same_site(SameSite::Strict)
            .path("/"),
    )
}

/// Read the pending notice, if any, and clear it from the browser.
///
/// Unrecognised cookie values are cleared and ignored.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Alert>) {
    let Some(cookie) = jar.get(COOKIE_FLASH) else {
        return (jar, None);
    };

    let alert = Flash::from_code(cookie.value()).map(Flash::into_alert);
    let jar = jar.remove(Cookie::build(COOKIE_FLASH).path("/"));

    (jar, alert)
}
