//! The static list of saving tips, grouped by how hard they are to put into practice.

use axum::{
    Extension,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    auth::User,
    endpoints,
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base, format_currency_rounded},
    navigation::NavBar,
};

/// How much effort a tip takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The heading of the group of tips with this difficulty.
    pub fn heading(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy Wins",
            Difficulty::Medium => "Moderate Effort",
            Difficulty::Hard => "High Impact Strategies",
        }
    }

    fn dot_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "bg-green-400",
            Difficulty::Medium => "bg-yellow-400",
            Difficulty::Hard => "bg-red-400",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct SavingTip {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Estimated dollars saved per month.
    pub potential_saving: f64,
    pub icon: &'static str,
    /// Tailwind background class for the icon badge.
    pub color_class: &'static str,
    pub difficulty: Difficulty,
}

pub static SAVING_TIPS: [SavingTip; 11] = [
    SavingTip {
        id: "coffee",
        title: "Brew Coffee at Home",
        description: "Making coffee at home instead of buying it can save you a significant amount over time.",
        potential_saving: 150.0,
        icon: "☕",
        color_class: "bg-amber-500",
        difficulty: Difficulty::Easy,
    },
    SavingTip {
        id: "diningout",
        title: "Reduce Dining Out",
        description: "Cook more meals at home and limit restaurant visits to special occasions.",
        potential_saving: 200.0,
        icon: "🍴",
        color_class: "bg-green-500",
        difficulty: Difficulty::Medium,
    },
    SavingTip {
        id: "subscriptions",
        title: "Audit Subscriptions",
        description: "Review your monthly subscriptions and cancel those you barely use.",
        potential_saving: 50.0,
        icon: "🧾",
        color_class: "bg-purple-500",
        difficulty: Difficulty::Easy,
    },
    SavingTip {
        id: "grocerylists",
        title: "Plan Grocery Shopping",
        description: "Create a shopping list and stick to it to avoid impulse purchases.",
        potential_saving: 120.0,
        icon: "🛍",
        color_class: "bg-pink-500",
        difficulty: Difficulty::Easy,
    },
    SavingTip {
        id: "energysaving",
        title: "Reduce Energy Usage",
        description: "Lower your thermostat by a few degrees and unplug unused electronics.",
        potential_saving: 80.0,
        icon: "🏠",
        color_class: "bg-blue-500",
        difficulty: Difficulty::Medium,
    },
    SavingTip {
        id: "cashbacks",
        title: "Use Cashback Apps",
        description: "Earn money back on purchases with cashback apps and credit cards.",
        potential_saving: 100.0,
        icon: "🪙",
        color_class: "bg-green-600",
        difficulty: Difficulty::Easy,
    },
    SavingTip {
        id: "bulkbuying",
        title: "Buy in Bulk",
        description: "Purchase non-perishable items in bulk to save money over time.",
        potential_saving: 70.0,
        icon: "🛍",
        color_class: "bg-orange-500",
        difficulty: Difficulty::Medium,
    },
    SavingTip {
        id: "salesdeals",
        title: "Shop Sales & Discounts",
        description: "Wait for sales before making large purchases and use discount codes.",
        potential_saving: 150.0,
        icon: "％",
        color_class: "bg-red-500",
        difficulty: Difficulty::Easy,
    },
    SavingTip {
        id: "autoexpenses",
        title: "Lower Transportation Costs",
        description: "Use public transport, carpool, or bike to reduce transportation expenses.",
        potential_saving: 130.0,
        icon: "📉",
        color_class: "bg-cyan-500",
        difficulty: Difficulty::Medium,
    },
    SavingTip {
        id: "emergencyfund",
        title: "Build Emergency Fund",
        description: "Save money for unexpected expenses to avoid costly loans or credit card debt.",
        potential_saving: 300.0,
        icon: "🐷",
        color_class: "bg-blue-600",
        difficulty: Difficulty::Hard,
    },
    SavingTip {
        id: "budgeting",
        title: "Use the 50/30/20 Rule",
        description: "Allocate 50% of income to needs, 30% to wants, and 20% to savings and debt repayment.",
        potential_saving: 250.0,
        icon: "$",
        color_class: "bg-teal-500",
        difficulty: Difficulty::Hard,
    },
];

/// The tips with `difficulty`, in catalog order.
pub fn tips_with_difficulty(difficulty: Difficulty) -> Vec<&'static SavingTip> {
    SAVING_TIPS
        .iter()
        .filter(|tip| tip.difficulty == difficulty)
        .collect()
}

/// The three tips shown on the dashboard.
pub fn saving_opportunities() -> impl Iterator<Item = &'static SavingTip> {
    ["coffee", "diningout", "subscriptions"]
        .into_iter()
        .filter_map(|id| SAVING_TIPS.iter().find(|tip| tip.id == id))
}

/// The round badge with the tip's icon.
pub fn tip_icon(tip: &SavingTip) -> Markup {
    html! {
        span
            class={ "inline-flex shrink-0 items-center justify-center w-10 h-10 rounded-full text-white " (tip.color_class) }
            aria-hidden="true"
        {
            (tip.icon)
        }
    }
}

fn tip_card(tip: &SavingTip) -> Markup {
    html! {
        div class=(CARD_STYLE) data-tip-id=(tip.id)
        {
            div class="flex items-start gap-4"
            {
                (tip_icon(tip))

                div class="flex-1"
                {
                    h3 class="text-lg font-semibold mb-1" { (tip.title) }
                    p class="text-sm text-gray-500 dark:text-gray-400 mb-2" { (tip.description) }
                    p class="text-sm font-medium text-green-600" data-potential-saving
                    {
                        "Potential savings: " (format_currency_rounded(tip.potential_saving)) "/month"
                    }
                }
            }
        }
    }
}

fn tip_group(difficulty: Difficulty) -> Markup {
    let tips = tips_with_difficulty(difficulty);
    let total: f64 = tips.iter().map(|tip| tip.potential_saving).sum();

    html! {
        section data-difficulty=(difficulty.heading())
        {
            div class="flex items-center justify-between mb-4"
            {
                h2 class="text-xl font-semibold flex items-center"
                {
                    span class={ "inline-block w-3 h-3 rounded-full mr-2 " (difficulty.dot_class()) } {}
                    (difficulty.heading())
                }

                span class="text-sm text-gray-500 dark:text-gray-400" data-group-total
                {
                    "Up to " (format_currency_rounded(total)) "/month"
                }
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                @for tip in tips {
                    (tip_card(tip))
                }
            }
        }
    }
}

fn saving_tips_view(user: &User) -> Markup {
    let nav_bar = NavBar::new(endpoints::SAVING_TIPS_VIEW, user).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Saving Tips" }

            div class="space-y-8"
            {
                @for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                    (tip_group(difficulty))
                }
            }
        }
    };

    base("Saving Tips", &[], &content)
}

/// Renders the saving tips page.
pub async fn get_saving_tips_page(Extension(user): Extension<User>) -> Response {
    saving_tips_view(&user).into_response()
}

#[cfg(test)]
mod tests {
    use axum::Extension;
    use scraper::Selector;

    use crate::{
        auth::User,
        test_utils::{assert_content_type, assert_status_ok, assert_valid_html, parse_html_document},
    };

    use super::{
        Difficulty, SAVING_TIPS, get_saving_tips_page, saving_opportunities, tips_with_difficulty,
    };

    #[test]
    fn tips_are_split_by_difficulty() {
        assert_eq!(tips_with_difficulty(Difficulty::Easy).len(), 5);
        assert_eq!(tips_with_difficulty(Difficulty::Medium).len(), 4);
        assert_eq!(tips_with_difficulty(Difficulty::Hard).len(), 2);
    }

    #[test]
    fn dashboard_shows_three_opportunities() {
        let titles: Vec<_> = saving_opportunities().map(|tip| tip.title).collect();

        assert_eq!(
            titles,
            ["Brew Coffee at Home", "Reduce Dining Out", "Audit Subscriptions"]
        );
    }

    #[tokio::test]
    async fn renders_every_tip_in_its_group() {
        let response = get_saving_tips_page(Extension(User::demo())).await;

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let headings: Vec<_> = html
            .select(&Selector::parse("section[data-difficulty]").unwrap())
            .map(|section| section.value().attr("data-difficulty").unwrap().to_owned())
            .collect();
        assert_eq!(
            headings,
            ["Easy Wins", "Moderate Effort", "High Impact Strategies"]
        );

        let cards = html.select(&Selector::parse("[data-tip-id]").unwrap()).count();
        assert_eq!(cards, SAVING_TIPS.len());

        let coffee = html
            .select(&Selector::parse("[data-tip-id=coffee] [data-potential-saving]").unwrap())
            .next()
            .expect("No coffee tip");
        assert_eq!(
            coffee.text().collect::<String>().trim(),
            "Potential savings: $150/month"
        );

        let easy_total = html
            .select(&Selector::parse("section[data-difficulty='Easy Wins'] [data-group-total]").unwrap())
            .next()
            .expect("No group total");
        assert_eq!(easy_total.text().collect::<String>().trim(), "Up to $570/month");
    }
}
