//! Defines the route handler for the page that lists expenses grouped by day.

use axum::{
    Extension,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use maud::{Markup, html};
use serde::Deserialize;
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    auth::User,
    category::{category_icon, category_of},
    endpoints::{self, format_endpoint},
    flash::take_flash,
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        base_with_alert, format_currency,
    },
    navigation::NavBar,
    transaction::{
        TransactionState,
        aggregation::search,
        core::Transaction,
        grouping::{DayGroup, group_by_day},
    },
};

/// Time of day shown next to each expense, e.g. "2:05 PM".
const TIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[hour repr:12 padding:none]:[minute] [period]");

const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this expense? This action cannot be undone.";

#[derive(Debug, Default, Deserialize)]
pub struct TransactionsQuery {
    #[serde(default)]
    pub search: String,
}

/// Render the expense history, filtered by the `search` query parameter.
///
/// A pending notice from adding or editing an expense is shown once.
pub async fn get_transactions_page(
    State(state): State<TransactionState>,
    Extension(user): Extension<User>,
    jar: CookieJar,
    Query(query): Query<TransactionsQuery>,
) -> Result<Response, Error> {
    let store = state.lock_store()?;
    let matches = search(store.all(), &query.search);
    let groups = group_by_day(matches);

    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW, &user).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="flex flex-wrap items-center justify-between gap-4 mb-6"
            {
                h1 class="text-2xl font-bold" { "Transactions" }

                a
                    href=(endpoints::NEW_TRANSACTION_VIEW)
                    class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded"
                {
                    "Add Expense"
                }
            }

            input
                type="search"
                name="search"
                id="search"
                placeholder="Search transactions..."
                value=(query.search)
                hx-get=(endpoints::TRANSACTIONS_VIEW)
                hx-trigger="input changed delay:300ms, search"
                hx-target="#transaction-list"
                hx-select="#transaction-list"
                hx-swap="outerHTML"
                hx-push-url="true"
                class={ (FORM_TEXT_INPUT_STYLE) " mb-6" };

            (transaction_list(&groups))
        }
    };

    let (jar, alert) = take_flash(jar);

    Ok((jar, base_with_alert("Transactions", &[], &content, alert)).into_response())
}

fn transaction_list(groups: &[DayGroup<'_>]) -> Markup {
    html! {
        div id="transaction-list" class="space-y-6"
        {
            @if groups.is_empty() {
                div class={ (CARD_STYLE) " text-center text-gray-500 dark:text-gray-400" }
                {
                    p { "No transactions found" }
                }
            }

            @for group in groups {
                section
                {
                    h2 class="text-sm font-semibold text-gray-500 dark:text-gray-400 mb-2"
                    {
                        (group.label())
                    }

                    ul class={ (CARD_STYLE) " divide-y divide-gray-200 dark:divide-gray-700 p-0" }
                    {
                        @for transaction in &group.transactions {
                            (transaction_row(transaction))
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let category = category_of(&transaction.category_id);
    let time_of_day = transaction.date.format(TIME_FORMAT).unwrap_or_default();
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, &transaction.id);
    let delete_url = format_endpoint(endpoints::TRANSACTION, &transaction.id);

    html! {
        li class="flex items-center gap-4 px-4 py-3" data-transaction-id=(transaction.id)
        {
            (category_icon(category))

            div class="flex-1 min-w-0"
            {
                p class="font-medium truncate" { (transaction.description) }
                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    span data-category { (category.name) }
                    " · "
                    time { (time_of_day) }
                }
            }

            span class="font-semibold tabular-nums" { (format_currency(transaction.amount)) }

            a href=(edit_url) class=(LINK_STYLE) { "Edit" }

            button
                hx-delete=(delete_url)
                hx-confirm=(DELETE_CONFIRMATION)
                hx-target="closest li"
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
                class=(BUTTON_DELETE_STYLE)
            {
                "Delete"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Extension,
        extract::{Query, State},
    };
    use axum_extra::extract::CookieJar;
    use scraper::{ElementRef, Html, Selector};
    use time::macros::datetime;

    use crate::{
        auth::User,
        endpoints::{self, format_endpoint},
        test_utils::{assert_valid_html, jar_with_flash, must_get_alert, parse_html_document},
        transaction::{
            TransactionState, TransactionStore,
            core::{Transaction, sample_transactions},
        },
    };

    use super::{TransactionsQuery, get_transactions_page};

    fn get_state(transactions: Vec<Transaction>) -> TransactionState {
        TransactionState {
            store: Arc::new(Mutex::new(TransactionStore::from_transactions(transactions))),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    async fn render(state: TransactionState, search: &str) -> Html {
        render_with_jar(state, CookieJar::new(), search).await
    }

    async fn render_with_jar(state: TransactionState, jar: CookieJar, search: &str) -> Html {
        let response = get_transactions_page(
            State(state),
            Extension(User::demo()),
            jar,
            Query(TransactionsQuery {
                search: search.to_owned(),
            }),
        )
        .await
        .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        html
    }

    #[track_caller]
    fn transaction_ids(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("li[data-transaction-id]").unwrap())
            .filter_map(|item| item.value().attr("data-transaction-id"))
            .map(str::to_owned)
            .collect()
    }

    #[track_caller]
    fn day_headings(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("#transaction-list section h2").unwrap())
            .map(|heading| heading.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[tokio::test]
    async fn lists_transactions_grouped_by_day_newest_first() {
        let html = render(get_state(sample_transactions()), "").await;

        assert_eq!(
            transaction_ids(&html),
            vec!["t8", "t7", "t6", "t5", "t4", "t3", "t2", "t1"]
        );
        let headings = day_headings(&html);
        assert_eq!(headings.len(), 8);
        assert_eq!(headings[0], "August 8, 2023");
        assert_eq!(headings[7], "August 1, 2023");
    }

    #[tokio::test]
    async fn search_filters_by_description_and_category() {
        let state = get_state(sample_transactions());

        let html = render(state.clone(), "COFFEE").await;
        assert_eq!(transaction_ids(&html), vec!["t6"]);

        let html = render(state, "food & dining").await;
        assert_eq!(transaction_ids(&html), vec!["t4", "t2"]);
    }

    #[tokio::test]
    async fn shows_notice_after_expense_added() {
        let html = render_with_jar(
            get_state(sample_transactions()),
            jar_with_flash("expense_added"),
            "",
        )
        .await;

        let alert = must_get_alert(&html);
        assert_eq!(alert.message, "Expense added");
        assert_eq!(alert.details, None);
    }

    #[tokio::test]
    async fn no_notice_without_flash_cookie() {
        let html = render(get_state(sample_transactions()), "").await;

        assert_eq!(html.select(&Selector::parse("[role=alert]").unwrap()).count(), 0);
    }

    #[tokio::test]
    async fn shows_empty_state_when_nothing_matches() {
        let html = render(get_state(sample_transactions()), "zzz").await;

        assert!(transaction_ids(&html).is_empty());
        let list = html
            .select(&Selector::parse("#transaction-list").unwrap())
            .next()
            .unwrap();
        assert!(list.text().collect::<String>().contains("No transactions found"));
    }

    #[tokio::test]
    async fn rows_show_time_and_link_to_actions() {
        let html = render(
            get_state(vec![Transaction {
                id: "t1".to_owned(),
                date: datetime!(2024-03-05 14:05),
                amount: 1234.5,
                description: "Laptop".to_owned(),
                category_id: "shopping".to_owned(),
            }]),
            "",
        )
        .await;

        let row = html
            .select(&Selector::parse("li[data-transaction-id=t1]").unwrap())
            .next()
            .expect("No row for t1");

        assert_eq!(text_of(&row, "time"), "2:05 PM");
        assert_eq!(text_of(&row, "[data-category]"), "Shopping");
        assert!(row.text().collect::<String>().contains("$1,234.50"));

        let edit = row.select(&Selector::parse("a").unwrap()).next().unwrap();
        assert_eq!(
            edit.value().attr("href"),
            Some(format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, "t1").as_str())
        );

        let delete = row.select(&Selector::parse("button").unwrap()).next().unwrap();
        assert_eq!(delete.value().attr("hx-delete"), Some("/api/transactions/t1"));
        assert_eq!(
            delete.value().attr("hx-confirm"),
            Some("Are you sure you want to delete this expense? This action cannot be undone.")
        );
    }

    #[track_caller]
    fn text_of(element: &ElementRef<'_>, selector: &str) -> String {
        element
            .select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("No element matching {selector}"))
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }
}
