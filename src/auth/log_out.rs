//! Log-out route handler that ends the session and redirects users.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, PrivateCookieJar};

use crate::{
    auth::{AuthState, CookieSessionStorage, SessionManager},
    endpoints,
    flash::{Flash, set_flash},
};

/// Clear the session cookie and redirect the client to the auth page.
pub async fn get_log_out(
    State(state): State<AuthState>,
    jar: PrivateCookieJar,
    flash_jar: CookieJar,
) -> Response {
    let mut session = SessionManager::new(
        CookieSessionStorage::new(jar, state.cookie_duration),
        state.auth_config,
    );

    session.restore();
    if let Some(user) = session.user() {
        tracing::info!("{} logged out", user.email);
    }

    session.logout();

    (
        session.into_storage().into_jar(),
        set_flash(flash_jar, Flash::LoggedOut),
        Redirect::to(endpoints::ROOT),
    )
        .into_response()
}
