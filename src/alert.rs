//! Alert system for displaying success and error messages to users.
//!
//! Alerts are returned as HTMX fragments that replace the `#alert-container`
//! element in the base page via an out-of-band swap.

use maud::{Markup, html};

/// A dismissable notification shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Confirms that an action worked, e.g. "Expense deleted".
    Success {
        /// The headline of the alert.
        message: String,
        /// Optional extra text, may be empty.
        details: String,
    },
    /// Explains why an action failed.
    Error {
        /// The headline of the alert.
        message: String,
        /// Optional extra text, may be empty.
        details: String,
    },
}

impl Alert {
    /// Create a success alert without details.
    pub fn success(message: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
            details: String::new(),
        }
    }

    /// Render the alert as the `#alert-container` element.
    pub fn into_html(self) -> Markup {
        let (message, details, container_style, icon) = match self {
            Alert::Success { message, details } => (
                message,
                details,
                "p-4 rounded-lg shadow-lg border bg-green-50 border-green-300 \
                text-green-800 dark:bg-gray-800 dark:border-green-800 dark:text-green-400",
                "✓",
            ),
            Alert::Error { message, details } => (
                message,
                details,
                "p-4 rounded-lg shadow-lg border bg-red-50 border-red-300 \
                text-red-800 dark:bg-gray-800 dark:border-red-800 dark:text-red-400",
                "!",
            ),
        };

        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div role="alert" class=(container_style)
                {
                    div class="flex items-start gap-3"
                    {
                        span class="font-bold" aria-hidden="true" { (icon) }

                        div class="flex-1"
                        {
                            p class="text-sm font-medium" { (message) }

                            @if !details.is_empty() {
                                p class="mt-1 text-sm text-gray-600 dark:text-gray-300" { (details) }
                            }
                        }

                        button
                            type="button"
                            aria-label="Dismiss"
                            class="text-lg leading-none opacity-70 hover:opacity-100"
                            onclick="document.getElementById('alert-container').classList.add('hidden')"
                        {
                            "×"
                        }
                    }
                }
            }
        }
    }
}
