//! This file defines the auth page and the handlers for log-in and sign-up requests.
//! The session module handles the simulated authentication backend.

use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, PrivateCookieJar};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    auth::{
        AuthState, DEMO_EMAIL, DEMO_PASSWORD,
        cookie::CookieSessionStorage,
        session::{SessionManager, SessionState},
    },
    endpoints,
    flash::{Flash, set_flash, take_flash},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        auth_layout, base_with_alert, loading_spinner, password_input,
    },
};

const INTERNAL_ERROR_MSG: &str = "An internal error occurred. Please try again later.";

/// Which form the auth page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    LogIn,
    SignUp,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthPageQuery {
    #[serde(default)]
    pub mode: AuthMode,
}

/// The raw data entered by the user in the log-in form.
#[derive(Clone, Deserialize)]
pub struct LogInData {
    pub email: String,
    pub password: String,
}

/// The raw data entered by the user in the sign-up form.
#[derive(Clone, Deserialize)]
pub struct SignUpData {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn text_input(
    label: &str,
    name: &str,
    type_: &str,
    value: &str,
    placeholder: &str,
    error_message: Option<&str>,
) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                type=(type_)
                name=(name)
                id=(name)
                placeholder=(placeholder)
                class=(FORM_TEXT_INPUT_STYLE)
                required
                value=(value);

            @if let Some(error_message) = error_message
            {
                p class="text-red-500 text-base" { (error_message) }
            }
        }
    }
}

fn submit_button(text: &str) -> Markup {
    html! {
        button
            type="submit" id="submit-button" tabindex="0"
            class=(BUTTON_PRIMARY_STYLE)
        {
            span class="inline htmx-indicator" id="indicator"
            {
                (loading_spinner())
            }
            (text)
        }
    }
}

fn log_in_form(email: &str, error_message: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::LOG_IN_API)
            hx-swap="outerHTML"
            hx-indicator="#indicator"
            hx-disabled-elt="#email, #password, #submit-button"
            class="space-y-4 md:space-y-6"
        {
            (text_input("Email", "email", "email", email, "you@example.com", None))
            (password_input("", error_message))
            (submit_button("Log in"))

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "Don't have an account? "

                a
                    href={ (endpoints::ROOT) "?mode=sign_up" } tabindex="0"
                    class="font-semibold leading-6 text-blue-600 hover:text-blue-500 dark:text-blue-500 dark:hover:text-blue-400"
                {
                    "Sign up"
                }
            }

            p class="text-xs text-gray-500 dark:text-gray-400"
            {
                "Demo account: " (DEMO_EMAIL) " / " (DEMO_PASSWORD)
            }
        }
    }
}

fn sign_up_form(name: &str, email: &str, error_message: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::SIGN_UP_API)
            hx-swap="outerHTML"
            hx-indicator="#indicator"
            hx-disabled-elt="#name, #email, #password, #submit-button"
            class="space-y-4 md:space-y-6"
        {
            (text_input("Name", "name", "text", name, "Your name", error_message))
            (text_input("Email", "email", "email", email, "you@example.com", None))
            (password_input("", None))
            (submit_button("Create account"))

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "Already have an account? "

                a
                    href=(endpoints::ROOT) tabindex="0"
                    class="font-semibold leading-6 text-blue-600 hover:text-blue-500 dark:text-blue-500 dark:hover:text-blue-400"
                {
                    "Log in"
                }
            }
        }
    }
}

fn demo_log_in_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::DEMO_LOG_IN_API)
            hx-disabled-elt="#demo-button"
            class="pt-2"
        {
            button type="submit" id="demo-button" class=(BUTTON_SECONDARY_STYLE)
            {
                "Continue as demo user"
            }
        }
    }
}

fn new_session(state: &AuthState, jar: PrivateCookieJar) -> SessionManager<CookieSessionStorage> {
    SessionManager::new(
        CookieSessionStorage::new(jar, state.cookie_duration),
        state.auth_config.clone(),
    )
}

/// Display the auth page, or send signed in users to the dashboard.
///
/// The notice left by logging out is shown once.
pub async fn get_index_page(
    State(state): State<AuthState>,
    jar: PrivateCookieJar,
    flash_jar: CookieJar,
    Query(query): Query<AuthPageQuery>,
) -> Response {
    let mut session = new_session(&state, jar);

    if let SessionState::Authenticated(user) = session.restore() {
        tracing::debug!("{} already has a session, redirecting to dashboard", user.email);
        return Redirect::to(endpoints::DASHBOARD_VIEW).into_response();
    }

    let (title, form_title, form) = match query.mode {
        AuthMode::LogIn => ("Log In", "Log in to your account", log_in_form("", None)),
        AuthMode::SignUp => ("Sign Up", "Create an account", sign_up_form("", "", None)),
    };

    let form = html! {
        (form)
        (demo_log_in_form())
    };

    let (flash_jar, alert) = take_flash(flash_jar);

    (
        flash_jar,
        base_with_alert(title, &[], &auth_layout(form_title, &form), alert),
    )
        .into_response()
}

fn redirect_to_dashboard(
    session: SessionManager<CookieSessionStorage>,
    flash_jar: CookieJar,
    flash: Flash,
) -> Response {
    (
        StatusCode::SEE_OTHER,
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        session.into_storage().into_jar(),
        set_flash(flash_jar, flash),
    )
        .into_response()
}

fn redirect_to_error_page() -> Response {
    (
        HxRedirect(endpoints::INTERNAL_ERROR_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

/// Handler for log-in requests via the POST method.
///
/// On a successful log-in request, the session cookie is set and the client is redirected to the dashboard page.
/// Otherwise, the form is returned with an error message explaining the problem.
pub async fn post_log_in(
    State(state): State<AuthState>,
    jar: PrivateCookieJar,
    flash_jar: CookieJar,
    Form(form): Form<LogInData>,
) -> Response {
    let mut session = new_session(&state, jar);

    match session.login(form.email.trim(), &form.password).await {
        Ok(user) => {
            tracing::info!("{} logged in", user.email);
            redirect_to_dashboard(session, flash_jar, Flash::LoggedIn)
        }
        Err(error @ Error::InvalidCredentials) => {
            tracing::warn!("Rejected log-in attempt for {}", form.email);
            log_in_form(&form.email, Some(&error.to_string())).into_response()
        }
        Err(error) => {
            tracing::error!("Unhandled error while logging in: {error}");
            log_in_form(&form.email, Some(INTERNAL_ERROR_MSG)).into_response()
        }
    }
}

/// Handler for sign-up requests.
///
/// Any non-blank name is accepted and becomes the signed in user.
pub async fn post_sign_up(
    State(state): State<AuthState>,
    jar: PrivateCookieJar,
    flash_jar: CookieJar,
    Form(form): Form<SignUpData>,
) -> Response {
    let mut session = new_session(&state, jar);

    match session
        .signup(&form.name, &form.email, &form.password)
        .await
    {
        Ok(user) => {
            tracing::info!("Created account for {}", user.email);
            redirect_to_dashboard(session, flash_jar, Flash::AccountCreated)
        }
        Err(Error::Validation(error)) => {
            sign_up_form(&form.name, &form.email, Some(&error.to_string())).into_response()
        }
        Err(error) => {
            tracing::error!("Unhandled error while signing up: {error}");
            sign_up_form(&form.name, &form.email, Some(INTERNAL_ERROR_MSG)).into_response()
        }
    }
}

/// Log in with the demo credentials.
pub async fn post_demo_log_in(
    State(state): State<AuthState>,
    jar: PrivateCookieJar,
    flash_jar: CookieJar,
) -> Response {
    let mut session = new_session(&state, jar);

    match session.login(DEMO_EMAIL, DEMO_PASSWORD).await {
        Ok(_) => redirect_to_dashboard(session, flash_jar, Flash::LoggedIn),
        Err(error) => {
            tracing::error!("Could not log in as the demo user: {error}");
            redirect_to_error_page()
        }
    }
}


#[cfg(test)]
mod log_in_tests {
    use std::time::Duration;

    use axum::{Router, http::StatusCode, routing::post};
    use axum_htmx::HX_REDIRECT;
    use axum_test::{TestResponse, TestServer};
    use scraper::{Html, Selector};
    use time::OffsetDateTime;

    use crate::{
        app_state::create_cookie_key,
        auth::{AuthConfig, AuthState, COOKIE_USER, DEFAULT_COOKIE_DURATION, DEMO_EMAIL, DEMO_PASSWORD},
        endpoints,
        flash::COOKIE_FLASH,
        test_utils::assert_hx_redirect,
    };

    use super::{post_demo_log_in, post_log_in, post_sign_up, redirect_to_error_page};

    fn test_state() -> AuthState {
        AuthState {
            cookie_key: create_cookie_key("foobar"),
            cookie_duration: DEFAULT_COOKIE_DURATION,
            auth_config: AuthConfig {
                login_delay: Duration::ZERO,
            },
        }
    }

    fn get_test_server() -> TestServer {
        let app = Router::new()
            .route(endpoints::LOG_IN_API, post(post_log_in))
            .route(endpoints::SIGN_UP_API, post(post_sign_up))
            .route(endpoints::DEMO_LOG_IN_API, post(post_demo_log_in))
            .with_state(test_state());

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn log_in_succeeds_with_demo_credentials() {
        let server = get_test_server();

        let response = server
            .post(endpoints::LOG_IN_API)
            .form(&[("email", DEMO_EMAIL), ("password", DEMO_PASSWORD)])
            .await;

        assert_signed_in(&response);
        assert_eq!(response.cookie(COOKIE_FLASH).value(), "logged_in");
    }

    #[tokio::test]
    async fn log_in_fails_with_wrong_credentials() {
        let server = get_test_server();

        let response = server
            .post(endpoints::LOG_IN_API)
            .form(&[("email", "x@x.com"), ("password", "wrong")])
            .await;

        response.assert_status_ok();
        assert!(response.headers().get(HX_REDIRECT).is_none());
        assert!(response.cookies().get(COOKIE_USER).is_none());
        assert!(response.cookies().get(COOKIE_FLASH).is_none());

        let fragment = Html::parse_fragment(&response.text());
        let error = fragment
            .select(&Selector::parse("input#password + p.text-red-500.text-base").unwrap())
            .next()
            .expect("expected error message paragraph");
        assert_eq!(error.text().collect::<String>().trim(), "Invalid email or password");

        let email = fragment
            .select(&Selector::parse("input#email").unwrap())
            .next()
            .expect("No email input");
        assert_eq!(email.value().attr("value"), Some("x@x.com"));
    }

    #[tokio::test]
    async fn log_in_fails_with_missing_fields() {
        let server = get_test_server();

        server
            .post(endpoints::LOG_IN_API)
            .content_type("application/x-www-form-urlencoded")
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn sign_up_uses_the_supplied_name() {
        let server = get_test_server();

        let response = server
            .post(endpoints::SIGN_UP_API)
            .form(&[
                ("name", "Grace Hopper"),
                ("email", "grace@example.com"),
                ("password", "anything"),
            ])
            .await;

        assert_signed_in(&response);
        assert_eq!(response.cookie(COOKIE_FLASH).value(), "account_created");
    }

    #[tokio::test]
    async fn sign_up_with_blank_name_shows_error() {
        let server = get_test_server();

        let response = server
            .post(endpoints::SIGN_UP_API)
            .form(&[
                ("name", "  "),
                ("email", "grace@example.com"),
                ("password", "anything"),
            ])
            .await;

        response.assert_status_ok();
        let fragment = Html::parse_fragment(&response.text());
        let error = fragment
            .select(&Selector::parse("input#name + p.text-red-500.text-base").unwrap())
            .next()
            .expect("expected error message paragraph");
        assert_eq!(error.text().collect::<String>().trim(), "Please enter your name");
    }

    #[tokio::test]
    async fn demo_log_in_sets_cookie() {
        let server = get_test_server();

        let response = server.post(endpoints::DEMO_LOG_IN_API).await;

        assert_signed_in(&response);
        assert_eq!(response.cookie(COOKIE_FLASH).value(), "logged_in");
    }

    #[test]
    fn failed_demo_log_in_redirects_to_error_page() {
        let response = redirect_to_error_page();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::INTERNAL_ERROR_VIEW);
    }

    #[track_caller]
    fn assert_signed_in(response: &TestResponse) {
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(HX_REDIRECT), endpoints::DASHBOARD_VIEW);

        let cookie = response.cookie(COOKIE_USER);
        assert!(cookie.expires_datetime() > Some(OffsetDateTime::now_utc()));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
