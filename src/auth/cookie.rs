//! Persists the session in an encrypted private cookie.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::{
    Error,
    auth::{session::SessionStorage, user::User},
};

/// The name of the cookie holding the serialized session.
pub(crate) const COOKIE_USER: &str = "user";
/// The default duration for which session cookies are valid.
pub const DEFAULT_COOKIE_DURATION: Duration = Duration::days(7);

/// The JSON stored in the session cookie.
///
/// The expiry is kept in the value as well as on the cookie since the
/// browser does not send the cookie's expiry back to the server.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    user: User,
    /// Unix timestamp in seconds.
    expires_at: i64,
}

fn build_cookie(value: String, expiry: OffsetDateTime) -> Cookie<'static> {
    Cookie::build((COOKIE_USER, value))
        .expires(expiry)
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(true)
        .path("/")
        .build()
}

fn write_session(
    jar: PrivateCookieJar,
    user: User,
    expiry: OffsetDateTime,
) -> Result<PrivateCookieJar, Error> {
    let stored = StoredSession {
        user,
        expires_at: expiry.unix_timestamp(),
    };
    let value = serde_json::to_string(&stored)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    Ok(jar.add(build_cookie(value, expiry)))
}

fn read_session(jar: &PrivateCookieJar) -> Option<StoredSession> {
    let cookie = jar.get(COOKIE_USER)?;

    serde_json::from_str(cookie.value_trimmed())
        .inspect_err(|error| tracing::debug!("Ignoring unreadable session cookie: {error}"))
        .ok()
}

/// Add a session cookie for `user` that expires `duration` from now.
///
/// # Errors
///
/// Returns [Error::JSONSerializationError] if the session cannot be serialized.
pub(crate) fn set_session_cookie(
    jar: PrivateCookieJar,
    user: &User,
    duration: Duration,
) -> Result<PrivateCookieJar, Error> {
    write_session(jar, user.clone(), OffsetDateTime::now_utc() + duration)
}

/// Set the session cookie to an invalid value and set its max age to zero,
/// which should delete the cookie on the client side.
pub(crate) fn invalidate_session_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_USER, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true)
            .path("/"),
    )
}

/// Move the session expiry to the later of its current expiry and now plus `duration`.
///
/// # Errors
///
/// The cookie jar is not modified if an error is returned.
///
/// Returns:
/// - [Error::NotFound] if there is no readable session cookie.
/// - [Error::JSONSerializationError] if the session cannot be serialized.
pub(crate) fn extend_session_cookie(
    jar: PrivateCookieJar,
    duration: Duration,
) -> Result<PrivateCookieJar, Error> {
    let stored = read_session(&jar).ok_or(Error::NotFound)?;
    let current_expiry =
        OffsetDateTime::from_unix_timestamp(stored.expires_at).unwrap_or(OffsetDateTime::UNIX_EPOCH);
    let expiry = current_expiry.max(OffsetDateTime::now_utc() + duration);

    write_session(jar, stored.user, expiry)
}

/// [SessionStorage] backed by the request's private cookie jar.
///
/// Call [CookieSessionStorage::into_jar] and return the jar in the response so
/// that changes reach the browser.
#[derive(Debug, Clone)]
pub struct CookieSessionStorage {
    jar: PrivateCookieJar,
    duration: Duration,
}

impl CookieSessionStorage {
    /// New sessions written through this storage last for `duration`.
    pub fn new(jar: PrivateCookieJar, duration: Duration) -> Self {
        Self { jar, duration }
    }

    pub fn into_jar(self) -> PrivateCookieJar {
        self.jar
    }
}

impl SessionStorage for CookieSessionStorage {
    fn load(&self) -> Option<User> {
        let stored = read_session(&self.jar)?;

        if stored.expires_at <= OffsetDateTime::now_utc().unix_timestamp() {
            tracing::debug!("Session cookie for {} has expired", stored.user.email);
            return None;
        }

        Some(stored.user)
    }

    fn save(&mut self, user: &User) -> Result<(), Error> {
        self.jar = set_session_cookie(self.jar.clone(), user, self.duration)?;

        Ok(())
    }

    fn clear(&mut self) {
        self.jar = invalidate_session_cookie(self.jar.clone());
    }
}
