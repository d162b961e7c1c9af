//! Renders the budget planning page: the overall progress and one card per category.

use std::sync::Arc;

use axum::{
    Extension,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    auth::User,
    budget::{Budget, BudgetStatus, BudgetStore, BudgetTotals},
    category::{category_icon, category_of},
    endpoints,
    html::{CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_currency, progress_bar},
    navigation::NavBar,
};

/// The state needed for the budget page.
#[derive(Debug, Clone)]
pub struct BudgetState {
    pub budgets: Arc<BudgetStore>,
}

impl FromRef<AppState> for BudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            budgets: state.budgets.clone(),
        }
    }
}

fn status_badge_style(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Good => {
            "text-xs px-2 py-1 rounded-full font-medium bg-green-100 text-green-700"
        }
        BudgetStatus::Warning => {
            "text-xs px-2 py-1 rounded-full font-medium bg-yellow-100 text-yellow-700"
        }
        BudgetStatus::Exceeded => {
            "text-xs px-2 py-1 rounded-full font-medium bg-red-100 text-red-700"
        }
    }
}

fn progress_fill_class(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Good => "bg-green-500",
        BudgetStatus::Warning => "bg-yellow-500",
        BudgetStatus::Exceeded => "bg-red-500",
    }
}

/// "$X remaining", or "$X over budget" when `remaining` is negative.
fn remaining_text(remaining: f64) -> String {
    if remaining < 0.0 {
        format!("{} over budget", format_currency(remaining.abs()))
    } else {
        format!("{} remaining", format_currency(remaining))
    }
}

fn overall_card(totals: &BudgetTotals) -> Markup {
    html! {
        section class=(CARD_STYLE) data-budget-overview
        {
            div class="flex flex-col md:flex-row md:items-center md:justify-between mb-6"
            {
                div
                {
                    h3 class="text-lg font-semibold" { "Total Budget" }
                    p class="text-sm text-gray-500 dark:text-gray-400" { "Monthly overview" }
                }

                div class="mt-2 md:mt-0 md:text-right"
                {
                    p class="text-2xl font-bold" data-total-budget { (format_currency(totals.budget)) }
                    p class="text-sm"
                    {
                        span class="text-gray-500 dark:text-gray-400" { "Spent: " }
                        span class="font-medium" data-total-spent { (format_currency(totals.spent)) }
                    }
                }
            }

            div class="flex mb-2 items-center justify-between"
            {
                span
                    class="text-xs font-semibold py-1 px-2 uppercase rounded-full
                        bg-blue-100 text-blue-700 dark:bg-blue-900/40 dark:text-blue-300"
                {
                    (format!("{:.0}% Used", totals.percentage_used))
                }

                span class="text-xs font-semibold text-blue-700 dark:text-blue-300" data-total-remaining
                {
                    (remaining_text(totals.remaining))
                }
            }

            (progress_bar(totals.percentage_used, "bg-blue-600"))
        }
    }
}

fn budget_card(budget: &Budget) -> Markup {
    let category = category_of(budget.category_id);
    let status = budget.status();
    let remaining = budget.remaining();
    let remaining_style = if remaining < 0.0 {
        "text-red-600 dark:text-red-400"
    } else {
        "text-blue-700 dark:text-blue-300"
    };

    html! {
        div class=(CARD_STYLE) data-budget-id=(budget.id)
        {
            div class="flex items-center justify-between mb-2"
            {
                div class="flex items-center gap-3"
                {
                    (category_icon(category))
                    span class="font-medium" { (category.name) }
                }

                span class=(status_badge_style(status)) data-status { (status.label()) }
            }

            div class="flex justify-between text-sm mb-1"
            {
                span class="text-gray-500 dark:text-gray-400"
                {
                    (format_currency(budget.spent)) " / " (format_currency(budget.amount))
                }
                span class="font-medium" { (format!("{:.0}%", budget.display_percentage())) }
            }

            (progress_bar(budget.display_percentage(), progress_fill_class(status)))

            p class={ "mt-2 text-xs text-right " (remaining_style) } data-remaining
            {
                (remaining_text(remaining))
            }
        }
    }
}

fn saving_tip_teaser() -> Markup {
    html! {
        div
            class="p-6 rounded-lg border border-green-200 bg-green-50
                dark:bg-green-900/20 dark:border-green-800"
        {
            span
                class="inline-block px-2 py-1 mb-2 rounded-full text-xs font-medium
                    bg-green-100 text-green-700 dark:bg-green-900/40 dark:text-green-300"
            {
                "Saving Tip"
            }

            h3 class="text-lg font-semibold mb-1" { "Reduce Coffee Spending" }
            p class="text-sm text-gray-500 dark:text-gray-400"
            {
                "Making coffee at home could save you $150 per month."
            }

            a href=(endpoints::SAVING_TIPS_VIEW) class={ "inline-block mt-4 text-sm font-medium " (LINK_STYLE) }
            {
                "See more saving tips →"
            }
        }
    }
}

fn budget_view(user: &User, budgets: &BudgetStore) -> Markup {
    let nav_bar = NavBar::new(endpoints::BUDGET_VIEW, user).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Budget Planning" }

            div class="space-y-8"
            {
                (overall_card(&budgets.totals()))

                section class="space-y-4"
                {
                    h3 class="text-lg font-semibold" { "Category Budgets" }

                    div class="grid grid-cols-1 md:grid-cols-2 gap-4"
                    {
                        @for budget in budgets.all() {
                            (budget_card(budget))
                        }
                    }
                }

                (saving_tip_teaser())
            }
        }
    };

    base("Budget", &[], &content)
}

/// Renders the budget planning page.
pub async fn get_budget_page(
    State(state): State<BudgetState>,
    Extension(user): Extension<User>,
) -> Response {
    budget_view(&user, &state.budgets).into_response()
}
