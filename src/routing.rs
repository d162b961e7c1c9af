//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::{
    AppState,
    auth::{
        auth_guard, auth_guard_hx, get_index_page, get_log_out, post_demo_log_in, post_log_in,
        post_sign_up,
    },
    budget::get_budget_page,
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    saving_tips::get_saving_tips_page,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_edit_transaction_page, get_new_transaction_page, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::SIGN_UP_API, post(post_sign_up))
        .route(endpoints::DEMO_LOG_IN_API, post(post_demo_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let protected_routes = Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::NEW_TRANSACTION_VIEW, get(get_new_transaction_page))
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .route(endpoints::BUDGET_VIEW, get(get_budget_page))
        .route(endpoints::SAVING_TIPS_VIEW, get(get_saving_tips_page))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    // These POST/PUT/DELETE routes need to use the HX-REDIRECT header for auth redirects to work properly for HTMX requests.
    let protected_routes = protected_routes.merge(
        Router::new()
            .route(
                endpoints::TRANSACTIONS_API,
                post(create_transaction_endpoint),
            )
            .route(
                endpoints::TRANSACTION,
                put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
            )
            .layer(middleware::from_fn_with_state(state.clone(), auth_guard_hx)),
    );

    protected_routes
        .merge(unprotected_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;
    use scraper::Html;

    use crate::{
        AppState,
        auth::{AuthConfig, COOKIE_USER},
        endpoints::{self, format_endpoint},
        flash::COOKIE_FLASH,
        test_utils::must_get_alert,
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = AppState::new(
            "routing tests",
            "Etc/UTC",
            AuthConfig {
                login_delay: Duration::ZERO,
            },
            5000.0,
        );

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn log_in(server: &TestServer) -> Cookie<'static> {
        let response = server.post(endpoints::DEMO_LOG_IN_API).await;

        response.assert_status_see_other();
        response.cookie(COOKIE_USER)
    }

    #[tokio::test]
    async fn pages_redirect_to_root_without_session() {
        let server = get_test_server();

        for page in [
            endpoints::DASHBOARD_VIEW,
            endpoints::TRANSACTIONS_VIEW,
            endpoints::NEW_TRANSACTION_VIEW,
            "/transactions/t1/edit",
            endpoints::BUDGET_VIEW,
            endpoints::SAVING_TIPS_VIEW,
        ] {
            let response = server.get(page).await;

            response.assert_status_see_other();
            assert_eq!(response.header("location"), endpoints::ROOT, "{page}");
        }
    }

    #[tokio::test]
    async fn api_routes_use_hx_redirect_without_session() {
        let server = get_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, "t1"))
            .add_header("HX-Request", "true")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("hx-redirect"), endpoints::ROOT);

        // The expense must still be there after logging in.
        let cookie = log_in(&server).await;
        server
            .get("/transactions/t1/edit")
            .add_cookie(cookie)
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn root_redirects_to_dashboard_with_session() {
        let server = get_test_server();
        let cookie = log_in(&server).await;

        let response = server.get(endpoints::ROOT).add_cookie(cookie).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::DASHBOARD_VIEW);
    }

    #[tokio::test]
    async fn every_page_renders_with_session() {
        let server = get_test_server();
        let cookie = log_in(&server).await;

        for page in [
            endpoints::DASHBOARD_VIEW,
            "/dashboard?chart=pie",
            endpoints::TRANSACTIONS_VIEW,
            "/transactions?search=coffee",
            endpoints::NEW_TRANSACTION_VIEW,
            "/transactions/t3/edit",
            endpoints::BUDGET_VIEW,
            endpoints::SAVING_TIPS_VIEW,
        ] {
            let response = server.get(page).add_cookie(cookie.clone()).await;

            assert_eq!(response.status_code(), StatusCode::OK, "{page}");
        }
    }

    #[tokio::test]
    async fn expense_lifecycle() {
        let server = get_test_server();
        let cookie = log_in(&server).await;

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .add_cookie(cookie.clone())
            .form(&[
                ("amount", "8.75"),
                ("date", "2023-08-09"),
                ("description", "Sandwich"),
                ("category_id", "food"),
            ])
            .await;
        response.assert_status_see_other();
        assert_eq!(response.header("hx-redirect"), endpoints::TRANSACTIONS_VIEW);

        let page = server
            .get(endpoints::TRANSACTIONS_VIEW)
            .add_cookie(cookie.clone())
            .add_cookie(response.cookie(COOKIE_FLASH))
            .await;
        page.assert_status_ok();
        assert_eq!(
            must_get_alert(&Html::parse_document(&page.text())).message,
            "Expense added"
        );
        assert_eq!(page.cookie(COOKIE_FLASH).max_age(), Some(time::Duration::ZERO));

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, "t9"))
            .add_cookie(cookie.clone())
            .form(&[
                ("amount", "9.25"),
                ("date", "2023-08-09"),
                ("description", "Sandwich and juice"),
                ("category_id", "food"),
            ])
            .await;
        response.assert_status_see_other();

        let page = server
            .get("/transactions?search=juice")
            .add_cookie(cookie.clone())
            .await
            .text();
        assert!(page.contains("Sandwich and juice"));
        assert!(page.contains("$9.25"));

        server
            .delete(&format_endpoint(endpoints::TRANSACTION, "t9"))
            .add_cookie(cookie.clone())
            .await
            .assert_status_ok();

        server
            .get("/transactions/t9/edit")
            .add_cookie(cookie)
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn incomplete_expense_form_gets_validation_alert() {
        let server = get_test_server();
        let cookie = log_in(&server).await;

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .add_cookie(cookie)
            .form(&[("date", "2023-08-09"), ("description", "Sandwich")])
            .await;

        response.assert_status_bad_request();
        let alert = must_get_alert(&Html::parse_fragment(&response.text()));
        assert_eq!(alert.details.as_deref(), Some("Please enter a valid amount"));
    }

    #[tokio::test]
    async fn log_out_ends_session() {
        let server = get_test_server();
        let cookie = log_in(&server).await;

        let response = server.get(endpoints::LOG_OUT).add_cookie(cookie).await;
        response.assert_status_see_other();
        let cleared = response.cookie(COOKIE_USER);

        server
            .get(endpoints::DASHBOARD_VIEW)
            .add_cookie(cleared)
            .await
            .assert_status_see_other();
    }

    #[tokio::test]
    async fn unknown_path_renders_404() {
        let server = get_test_server();

        server.get("/foo/bar").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn error_page_is_public() {
        let server = get_test_server();

        server
            .get(endpoints::INTERNAL_ERROR_VIEW)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
