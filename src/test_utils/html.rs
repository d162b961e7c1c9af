use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).into_owned()
}

/// Parse a full page, e.g. from a GET handler.
pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

/// Parse an HTMX partial such as an alert.
pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The text of an alert rendered by [crate::alert::Alert].
#[derive(Debug, PartialEq)]
pub(crate) struct AlertText {
    pub message: String,
    pub details: Option<String>,
}

#[track_caller]
pub(crate) fn must_get_alert(html: &Html) -> AlertText {
    let container = html
        .select(&Selector::parse("#alert-container[hx-swap-oob=true]").unwrap())
        .next()
        .expect("No out-of-band alert container found");
    let text_of = |selector: &str| {
        container
            .select(&Selector::parse(selector).unwrap())
            .next()
            .map(|element| element.text().collect::<String>().trim().to_owned())
    };

    AlertText {
        message: text_of("p.text-sm.font-medium").expect("No alert message found"),
        details: text_of("p.mt-1.text-sm"),
    }
}
