//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{Method, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};

/// Bodies longer than this many characters are truncated at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the response body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and logged in full at the `debug` level.
/// Passwords in url-encoded form bodies are redacted.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (headers, body_text) = extract_header_and_body_text_from_request(request).await;

    let is_form = headers
        .headers
        .get(CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/x-www-form-urlencoded"));

    if headers.method != Method::GET && is_form {
        let display_text = redact_password(&body_text, "password");
        log_request(&headers, &display_text);
    } else {
        log_request(&headers, &body_text);
    }

    let request = Request::from_parts(headers, Body::from(body_text));
    let response = next.run(request).await;

    let (headers, body_text) = extract_header_and_body_text_from_response(response).await;
    log_response(&headers, &body_text);

    Response::from_parts(headers, Body::from(body_text))
}

fn redact_password(form_text: &str, field_name: &str) -> String {
    let prefix = format!("{field_name}=");

    form_text
        .split('&')
        .map(|pair| {
            if pair.starts_with(&prefix) {
                format!("{prefix}********")
            } else {
                pair.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

async fn extract_header_and_body_text_from_request(
    request: Request,
) -> (axum::http::request::Parts, String) {
    let (headers, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("Could not read request body: {error}"))
        .unwrap_or_default();

    (headers, String::from_utf8_lossy(&body_bytes).to_string())
}

async fn extract_header_and_body_text_from_response(
    response: Response,
) -> (axum::http::response::Parts, String) {
    let (headers, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("Could not read response body: {error}"))
        .unwrap_or_default();

    (headers, String::from_utf8_lossy(&body_bytes).to_string())
}

/// The first [LOG_BODY_LENGTH_LIMIT] characters of `body`, or `None` if it is short enough.
fn truncate(body: &str) -> Option<&str> {
    body.char_indices()
        .nth(LOG_BODY_LENGTH_LIMIT)
        .map(|(end, _)| &body[..end])
}

fn log_request(headers: &axum::http::request::Parts, body: &str) {
    match truncate(body) {
        Some(truncated) => {
            tracing::info!("Received request: {headers:#?}\nbody: {truncated}...");
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!("Received request: {headers:#?}\nbody: {body:?}"),
    }
}

fn log_response(headers: &axum::http::response::Parts, body: &str) {
    match truncate(body) {
        Some(truncated) => {
            tracing::info!("Sending response: {headers:#?}\nbody: {truncated}...");
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {headers:#?}\nbody: {body:?}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, middleware, routing::post};
    use axum_test::TestServer;

    use super::{LOG_BODY_LENGTH_LIMIT, logging_middleware, redact_password, truncate};

    #[test]
    fn redacts_only_the_named_field() {
        assert_eq!(
            redact_password("email=demo%40example.com&password=hunter2", "password"),
            "email=demo%40example.com&password=********"
        );
        assert_eq!(
            redact_password("password=hunter2&name=Ada", "password"),
            "password=********&name=Ada"
        );
        assert_eq!(redact_password("name=Ada", "password"), "name=Ada");
    }

    #[test]
    fn truncates_long_bodies_on_char_boundaries() {
        let short = "a".repeat(LOG_BODY_LENGTH_LIMIT);
        assert_eq!(truncate(&short), None);

        let long = "é".repeat(LOG_BODY_LENGTH_LIMIT + 1);
        assert_eq!(
            truncate(&long).map(|text| text.chars().count()),
            Some(LOG_BODY_LENGTH_LIMIT)
        );
    }

    #[tokio::test]
    async fn middleware_passes_body_through() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::try_new(app).expect("Could not create test server.");

        let response = server
            .post("/echo")
            .form(&[("email", "demo@example.com"), ("password", "secret")])
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "email=demo%40example.com&password=secret");
    }
}
