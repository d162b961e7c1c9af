//! Authentication middleware that resolves the session, refreshes the session
//! cookie, and redirects anonymous visitors to the log-in page.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, header::SET_COOKIE},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use time::Duration;

use crate::{
    AppState,
    auth::{
        cookie::{CookieSessionStorage, extend_session_cookie},
        session::{AuthConfig, SessionManager, SessionState},
    },
    endpoints,
};

/// The state needed for the auth middleware
#[derive(Clone)]
pub struct AuthState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// How long the session cookie stays valid after each request.
    pub cookie_duration: Duration,
    /// Settings for the simulated authentication backend.
    pub auth_config: AuthConfig,
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            auth_config: state.auth_config.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookie_key.clone()
    }
}

/// Resolve the session from the cookie jar and run the request if it is authenticated.
///
/// The [crate::auth::User] is placed into the request extensions, and the
/// session cookie's expiry is extended on the way out.
#[inline]
async fn auth_guard_internal(
    state: AuthState,
    request: Request,
    next: Next,
    get_redirect: impl Fn(&str) -> Response,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(err) => {
            tracing::error!("Error getting cookie jar: {err:?}. Redirecting to log in page.");
            return get_redirect(endpoints::ROOT);
        }
    };

    let mut session = SessionManager::new(
        CookieSessionStorage::new(jar, state.cookie_duration),
        state.auth_config.clone(),
    );

    // No navigation decision is made until the session has been resolved.
    let user = match session.restore() {
        SessionState::Authenticated(user) => user.clone(),
        SessionState::Anonymous | SessionState::Unresolved => {
            tracing::debug!(
                "No session for {}, redirecting to log in page.",
                parts.uri.path()
            );
            return get_redirect(endpoints::ROOT);
        }
    };

    parts.extensions.insert(user);
    let request = Request::from_parts(parts, body);
    let response = next.run(request).await;

    let (mut parts, body) = response.into_parts();
    let jar = session.into_storage().into_jar();
    let jar = match extend_session_cookie(jar.clone(), state.cookie_duration) {
        Ok(updated_jar) => updated_jar,
        Err(err) => {
            tracing::error!("Error extending cookie duration: {err:?}. Rolling back cookie jar.");
            jar
        }
    };
    for (key, val) in jar.into_response().headers().iter() {
        if key != SET_COOKIE {
            continue;
        }

        parts.headers.append(key, val.to_owned());
    }

    Response::from_parts(parts, body)
}

/// Middleware for pages: anonymous visitors get a 303 redirect to the log-in page.
///
/// **Note**: Route handlers can use the function argument `Extension(user): Extension<User>` to receive the user.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    auth_guard_internal(state, request, next, |redirect_url| {
        Redirect::to(redirect_url).into_response()
    })
    .await
}

/// Middleware for HTMX endpoints: anonymous visitors get an `HX-Redirect` to the log-in page.
///
/// **Note**: Route handlers can use the function argument `Extension(user): Extension<User>` to receive the user.
pub async fn auth_guard_hx(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    auth_guard_internal(state, request, next, |redirect_url| {
        (HxRedirect(redirect_url.to_owned()), StatusCode::OK).into_response()
    })
    .await
}
