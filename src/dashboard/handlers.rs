//! Dashboard HTTP handler and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - The HTML view function for rendering the dashboard UI
//! - State and query types used by the handler

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    alert::Alert,
    auth::User,
    dashboard::{
        cards::{
            balance_cards_view, recent_transactions_view, saving_opportunities_view,
            spending_summary_view,
        },
        charts::{
            ChartKind, DashboardChart, ECHARTS_SCRIPT, chart_container, charts_script,
            spending_chart,
        },
    },
    endpoints,
    flash::take_flash,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base_with_alert, link},
    navigation::NavBar,
    saving_tips::saving_opportunities,
    timezone::{days_in_month, local_now},
    transaction::{
        TransactionState,
        aggregation::{most_recent, spending_summary, sum_by_category, total_amount},
    },
};

/// The number of expenses listed under "Recent Transactions".
const RECENT_TRANSACTION_COUNT: usize = 5;

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The shared expenses and the local timezone.
    pub transactions: TransactionState,
    /// The mock income shown on the balance cards.
    pub monthly_income: f64,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: TransactionState::from_ref(state),
            monthly_income: state.monthly_income,
        }
    }
}

/// The query string for the dashboard, e.g. `?chart=pie`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub chart: ChartKind,
}

/// Display a page with an overview of the user's spending.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Extension(user): Extension<User>,
    jar: CookieJar,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let today = local_now(&state.transactions.local_timezone)?.date();
    let transactions = state.transactions.lock_store()?.all().to_vec();

    let expenses = total_amount(&transactions);
    let summary = spending_summary(&transactions, days_in_month(today));
    let totals = sum_by_category(&transactions);
    let recent = most_recent(&transactions, RECENT_TRANSACTION_COUNT);

    let chart = (!totals.is_empty()).then(|| DashboardChart {
        id: "spending-chart",
        options: spending_chart(&totals, query.chart).to_string(),
    });

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW, &user);

    let content = html! {
        div class="flex flex-col space-y-10 mb-10"
        {
            (balance_cards_view(state.monthly_income, expenses))
            (spending_summary_view(&summary))
            (spending_analysis_view(chart.as_ref(), query.chart))

            div class="grid grid-cols-1 md:grid-cols-2 gap-6"
            {
                (recent_transactions_view(&recent))
                (saving_opportunities_view(saving_opportunities()))
            }
        }
    };

    let (jar, alert) = take_flash(jar);

    Ok((jar, dashboard_view(nav_bar, &content, chart.as_ref(), alert)).into_response())
}

fn chart_toggle(selected: ChartKind) -> Markup {
    html! {
        div role="tablist" class="inline-flex rounded-lg bg-gray-100 dark:bg-gray-700 p-1"
        {
            @for kind in [ChartKind::Bar, ChartKind::Pie] {
                @let is_selected = kind == selected;
                @let style = if is_selected {
                    "px-3 py-1 text-sm rounded-md bg-white dark:bg-gray-900 shadow-sm font-medium"
                } else {
                    "px-3 py-1 text-sm rounded-md text-gray-600 dark:text-gray-300 hover:text-gray-900"
                };

                a
                    role="tab"
                    href={ (endpoints::DASHBOARD_VIEW) "?chart=" (kind.query_value()) }
                    aria-selected=(is_selected)
                    class=(style)
                {
                    (kind.label())
                }
            }
        }
    }
}

fn spending_analysis_view(chart: Option<&DashboardChart>, selected: ChartKind) -> Markup {
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "adding an expense");

    html! {
        section id="spending-analysis"
        {
            div class="flex justify-between items-center mb-6"
            {
                h2 class="text-2xl font-bold" { "Spending Analysis" }
                (chart_toggle(selected))
            }

            @match chart {
                Some(chart) => {
                    (chart_container(chart))
                }
                None => {
                    p class="text-gray-500 dark:text-gray-400"
                    {
                        "The chart will show up here once you start by " (new_transaction_link) "."
                    }
                }
            }
        }
    }
}

fn dashboard_view(
    nav_bar: NavBar<'_>,
    content: &Markup,
    chart: Option<&DashboardChart>,
    alert: Option<Alert>,
) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html! {
        (nav_bar)

        div id="dashboard-content" class=(PAGE_CONTAINER_STYLE)
        {
            (content)
        }
    };

    let scripts = match chart {
        Some(chart) => vec![
            HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
            charts_script(std::slice::from_ref(chart)),
        ],
        None => Vec::new(),
    };

    base_with_alert("Dashboard", &scripts, &content, alert)
}
