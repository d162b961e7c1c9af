use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision, Scales};

use crate::alert::Alert;

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full py-2.5 px-5 \
    text-sm font-medium text-gray-900 bg-white rounded border border-gray-200 \
    hover:bg-gray-100 hover:text-blue-700 focus:z-10 dark:bg-gray-800 \
    dark:text-gray-400 dark:border-gray-600 dark:hover:text-white \
    dark:hover:bg-gray-700";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto lg:py-0 max-w-md text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Card style shared by the dashboard, budget and saving tips pages
pub const CARD_STYLE: &str = "p-6 rounded-lg bg-white dark:bg-gray-800 \
    border border-gray-200 dark:border-gray-700 shadow-sm";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto max-w-screen-xl lg:py-5 text-gray-900 dark:text-white";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
    Style(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    base_with_alert(title, head_elements, content, None)
}

/// The page layout with `alert` already shown in the alert container.
pub fn base_with_alert(
    title: &str,
    head_elements: &[HeadElement],
    content: &Markup,
    alert: Option<Alert>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }

                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js" {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }

                    #indicator.htmx-request.htmx-indicator {
                        display: inline;
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900 pb-[calc(5rem+env(safe-area-inset-bottom))] lg:pb-0"
            {
                (content)

                // Alert container for out-of-band swaps
                @match alert {
                    Some(alert) => (alert.into_html()),
                    None => {
                        div
                            id="alert-container"
                            class="hidden w-full max-w-md px-4"
                            style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                        {}
                    }
                }
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// The split layout of the auth page: a pitch for the app on one side and the
/// form card on the other.
pub fn auth_layout(form_title: &str, form: &Markup) -> Markup {
    let features = [
        "Analyze spending habits",
        "Get personalized saving tips",
        "Automate financial tracking",
    ];

    html! {
        div class="min-h-screen flex flex-col md:flex-row"
        {
            div class="flex-1 bg-blue-600 text-white flex flex-col items-center justify-center p-8 md:p-12"
            {
                div class="max-w-md mx-auto space-y-6 text-center md:text-left"
                {
                    h1 class="text-3xl md:text-4xl font-bold tracking-tight" { "Smart Expense Tracker" }

                    p class="text-lg text-blue-100"
                    {
                        "Track your spending, analyze patterns, and discover saving \
                        opportunities with our intelligent expense management system."
                    }

                    ul class="pt-4 space-y-4"
                    {
                        @for feature in features {
                            li class="flex items-center"
                            {
                                span class="h-10 w-10 rounded-full flex items-center justify-center bg-white/10" { "✓" }
                                span class="ml-4 text-lg" { (feature) }
                            }
                        }
                    }
                }
            }

            div class="flex-1 flex items-center justify-center px-6 py-8"
            {
                div class="w-full bg-white rounded-lg shadow dark:border sm:max-w-md dark:bg-gray-800 dark:border-gray-700"
                {
                    div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                    {
                        h2 class="text-xl font-bold leading-tight tracking-tight text-gray-900 md:text-2xl dark:text-white"
                        {
                            (form_title)
                        }

                        (form)
                    }
                }
            }
        }
    }
}

pub fn password_input(password: &str, error_message: Option<&str>) -> Markup {
    html! {
        div
        {
            label
                for="password"
                class=(FORM_LABEL_STYLE)
            {
                "Password"
            }

            input
                type="password"
                name="password"
                id="password"
                placeholder="••••••••"
                class=(FORM_TEXT_INPUT_STYLE)
                required
                value=(password);

            @if let Some(error_message) = error_message
            {
                p class="text-red-500 text-base" { (error_message) }
            }
        }
    }
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Returns the CSS styles for adding a dollar sign prefix to number inputs.
pub fn dollar_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
            display: inline-block;
        }
        .input-wrapper input[type="number"] {
            padding-left: 1.4rem;
        }
        .input-wrapper::before {
            content: '$';
            position: absolute;
            left: 0.6rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}

/// numfmt switches to scientific notation from this many dollars, so larger
/// figures are shown on the short scale instead, e.g. "$1.5 T".
const SHORT_SCALE_FROM: f64 = 1e12;

fn thousands_formatter() -> &'static Formatter {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();

    FORMATTER.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .unwrap()
            .precision(Precision::Decimals(0))
    })
}

fn short_scale_formatter() -> &'static Formatter {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();

    FORMATTER.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .unwrap()
            .scales(Scales::short())
            .precision(Precision::Decimals(1))
    })
}

fn sign_of(number: f64, is_zero: bool) -> &'static str {
    if number < 0.0 && !is_zero { "-" } else { "" }
}

/// Format `number` as dollars and cents, e.g. "$1,234.50" or "-$3.00".
///
/// Figures of a trillion dollars or more are abbreviated, e.g. "$1.5 T".
pub fn format_currency(number: f64) -> String {
    if number.abs() >= SHORT_SCALE_FROM {
        return format_short_scale(number);
    }

    let cents = (number.abs() * 100.0).round() as u64;
    let sign = sign_of(number, cents == 0);
    let dollars = cents / 100;
    let dollars = if dollars == 0 {
        // Zero is hardcoded as "0" by numfmt, so keep it explicit.
        "0".to_owned()
    } else {
        thousands_formatter().fmt_string(dollars)
    };

    format!("{sign}${dollars}.{:02}", cents % 100)
}

/// Format `number` rounded to whole dollars, e.g. "$150".
pub fn format_currency_rounded(number: f64) -> String {
    if number.abs() >= SHORT_SCALE_FROM {
        return format_short_scale(number);
    }

    let dollars = number.abs().round() as u64;
    let sign = sign_of(number, dollars == 0);
    let dollars = if dollars == 0 {
        "0".to_owned()
    } else {
        thousands_formatter().fmt_string(dollars)
    };

    format!("{sign}${dollars}")
}

fn format_short_scale(number: f64) -> String {
    let sign = sign_of(number, false);

    format!("{sign}${}", short_scale_formatter().fmt_string(number.abs()))
}

/// A horizontal bar filled to `percentage` (clamped to 0..=100).
pub fn progress_bar(percentage: f64, fill_class: &str) -> Markup {
    let width = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    };

    html! {
        div
            class="w-full h-2 rounded-full bg-gray-200 dark:bg-gray-700"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=(format!("{width:.0}"))
        {
            div
                class={ "h-2 rounded-full " (fill_class) }
                style=(format!("width: {width:.1}%"))
            {}
        }
    }
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a
            href=(url)
            class=(LINK_STYLE)
        {
          (text)
        }
    )
}
