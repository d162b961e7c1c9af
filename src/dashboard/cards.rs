//! Card components for the dashboard:
//! - Income, expenses and balance for the month
//! - The spending summary (total, average per day, largest expense)
//! - The most recent expenses
//! - Saving opportunities linking to the saving tips page

use maud::{Markup, html};
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    category::{category_icon, category_of},
    endpoints,
    html::{CARD_STYLE, LINK_STYLE, format_currency, format_currency_rounded},
    saving_tips::{SavingTip, tip_icon},
    transaction::{Transaction, aggregation::SpendingSummary},
};

/// e.g. "Aug 8, 2023"
const SHORT_DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:short] [day padding:none], [year]");

fn summary_card(title: &str, amount: &str, amount_style: &str, caption: &str) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            p class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
            p class={ "text-2xl font-bold " (amount_style) } data-amount { (amount) }
            p class="text-sm text-gray-500 dark:text-gray-400" { (caption) }
        }
    }
}

/// The income, expenses and balance cards at the top of the dashboard.
pub(super) fn balance_cards_view(income: f64, expenses: f64) -> Markup {
    let balance = income - expenses;

    html! {
        section id="balance-overview" class="grid grid-cols-1 md:grid-cols-3 gap-6"
        {
            (summary_card("Income", &format_currency(income), "text-green-600", "This month's earnings"))
            (summary_card("Expenses", &format_currency(expenses), "text-red-600", "This month's spending"))
            (summary_card("Balance", &format_currency(balance), "", "Remaining this month"))
        }
    }
}

pub(super) fn spending_summary_view(summary: &SpendingSummary<'_>) -> Markup {
    let largest_amount = summary
        .largest
        .map(|transaction| transaction.amount)
        .unwrap_or_default();
    let largest_caption = summary
        .largest
        .map(|transaction| transaction.description.as_str())
        .unwrap_or("No expenses yet");

    html! {
        section id="spending-summary"
        {
            h2 class="text-2xl font-bold mb-6" { "Spending Summary" }

            div class="grid grid-cols-1 md:grid-cols-3 gap-6"
            {
                (summary_card("Total Spending", &format_currency(summary.total), "", "All recorded expenses"))
                (summary_card("Average Per Day", &format_currency(summary.average_per_day), "", "Over the days of this month"))
                (summary_card("Largest Expense", &format_currency(largest_amount), "", largest_caption))
            }
        }
    }
}

pub(super) fn recent_transactions_view(transactions: &[&Transaction]) -> Markup {
    html! {
        section id="recent-transactions"
        {
            div class="flex justify-between items-center mb-4"
            {
                h2 class="text-lg font-semibold" { "Recent Transactions" }
                a href=(endpoints::TRANSACTIONS_VIEW) class={ "text-sm " (LINK_STYLE) } { "View All ›" }
            }

            @if transactions.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    "No expenses yet. "
                    a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE) { "Add one" }
                    "."
                }
            } @else {
                ul class="space-y-3"
                {
                    @for transaction in transactions {
                        (recent_transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn recent_transaction_row(transaction: &Transaction) -> Markup {
    let category = category_of(&transaction.category_id);
    // The format only uses date components, which always succeed.
    let date = transaction
        .date
        .format(SHORT_DATE_FORMAT)
        .unwrap_or_default();

    html! {
        li
            class="p-3 flex justify-between items-center rounded-lg bg-white dark:bg-gray-800
                border border-gray-200 dark:border-gray-700"
            data-transaction-id=(transaction.id)
        {
            div class="flex items-center gap-3"
            {
                (category_icon(category))

                div
                {
                    p class="font-medium" { (transaction.description) }
                    p class="text-xs text-gray-500 dark:text-gray-400" { (date) }
                }
            }

            span class="font-semibold" { (format_currency(transaction.amount)) }
        }
    }
}

pub(super) fn saving_opportunities_view<'a>(tips: impl Iterator<Item = &'a SavingTip>) -> Markup {
    html! {
        section id="saving-opportunities"
        {
            div class="flex justify-between items-center mb-4"
            {
                h2 class="text-lg font-semibold" { "Saving Opportunities" }
                a href=(endpoints::SAVING_TIPS_VIEW) class={ "text-sm " (LINK_STYLE) } { "All Tips ›" }
            }

            ul class="space-y-3"
            {
                @for tip in tips {
                    li class="p-4 flex items-start gap-3 rounded-lg bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700"
                    {
                        (tip_icon(tip))

                        div
                        {
                            h3 class="font-medium" { (tip.title) }
                            p class="text-sm text-gray-500 dark:text-gray-400"
                            {
                                "Could save you " (format_currency_rounded(tip.potential_saving)) " per month"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::datetime;

    use crate::transaction::{Transaction, aggregation::SpendingSummary};

    use super::{balance_cards_view, recent_transactions_view, spending_summary_view};

    #[track_caller]
    fn amounts(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("[data-amount]").unwrap())
            .map(|element| element.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let html = Html::parse_fragment(&balance_cards_view(5000.0, 2536.56).into_string());

        assert_eq!(amounts(&html), ["$5,000.00", "$2,536.56", "$2,463.44"]);
    }

    #[test]
    fn summary_without_expenses_shows_zero() {
        let summary = SpendingSummary {
            total: 0.0,
            average_per_day: 0.0,
            largest: None,
        };
        let html = Html::parse_fragment(&spending_summary_view(&summary).into_string());

        assert_eq!(amounts(&html), ["$0.00", "$0.00", "$0.00"]);
        assert!(html.root_element().text().any(|text| text.contains("No expenses yet")));
    }

    #[test]
    fn recent_transaction_shows_short_date() {
        let transaction = Transaction {
            id: "t8".to_owned(),
            date: datetime!(2023-08-08 0:00),
            amount: 49.99,
            description: "Birthday Gift".to_owned(),
            category_id: "gifts".to_owned(),
        };
        let html =
            Html::parse_fragment(&recent_transactions_view(&[&transaction]).into_string());

        let row = html
            .select(&Selector::parse("li[data-transaction-id=t8]").unwrap())
            .next()
            .expect("No row for t8");
        let text = row.text().collect::<String>();
        assert!(text.contains("Aug 8, 2023"), "{text}");
        assert!(text.contains("$49.99"), "{text}");
    }
}
