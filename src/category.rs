//! The static catalog of spending categories.
//!
//! Transactions and budgets refer to categories by id. The catalog is never
//! modified at runtime and lookups never fail: an id that is not in the
//! catalog resolves to [UNKNOWN_CATEGORY].

use maud::{Markup, html};

/// The id of the category given to new expenses when none is picked.
pub const DEFAULT_CATEGORY_ID: &str = "uncategorized";

/// A symbolic reference to the icon shown next to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Utensils,
    ShoppingBag,
    Zap,
    BookOpen,
    Coffee,
    Gift,
    CreditCard,
}

impl Icon {
    /// The glyph used to draw the icon.
    pub fn symbol(self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Utensils => "🍴",
            Icon::ShoppingBag => "🛍",
            Icon::Zap => "⚡",
            Icon::BookOpen => "📖",
            Icon::Coffee => "☕",
            Icon::Gift => "🎁",
            Icon::CreditCard => "💳",
        }
    }
}

/// Display metadata for a spending category.
#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    /// Tailwind background class, e.g. "bg-blue-500".
    pub color_class: &'static str,
    /// The same color as a hex string for charts.
    pub color_hex: &'static str,
    pub icon: Icon,
}

/// All known categories in display order.
pub static CATEGORIES: [Category; 8] = [
    Category {
        id: "housing",
        name: "Housing",
        color_class: "bg-blue-500",
        color_hex: "#3b82f6",
        icon: Icon::Home,
    },
    Category {
        id: "food",
        name: "Food & Dining",
        color_class: "bg-green-500",
        color_hex: "#22c55e",
        icon: Icon::Utensils,
    },
    Category {
        id: "shopping",
        name: "Shopping",
        color_class: "bg-pink-500",
        color_hex: "#ec4899",
        icon: Icon::ShoppingBag,
    },
    Category {
        id: "utilities",
        name: "Utilities",
        color_class: "bg-yellow-500",
        color_hex: "#eab308",
        icon: Icon::Zap,
    },
    Category {
        id: "entertainment",
        name: "Entertainment",
        color_class: "bg-purple-500",
        color_hex: "#a855f7",
        icon: Icon::BookOpen,
    },
    Category {
        id: "coffee",
        name: "Coffee",
        color_class: "bg-amber-500",
        color_hex: "#f59e0b",
        icon: Icon::Coffee,
    },
    Category {
        id: "gifts",
        name: "Gifts",
        color_class: "bg-red-500",
        color_hex: "#ef4444",
        icon: Icon::Gift,
    },
    Category {
        id: DEFAULT_CATEGORY_ID,
        name: "Uncategorized",
        color_class: "bg-gray-500",
        color_hex: "#6b7280",
        icon: Icon::CreditCard,
    },
];

/// Stand-in for ids that are not in [CATEGORIES].
pub static UNKNOWN_CATEGORY: Category = Category {
    id: "unknown",
    name: "Unknown",
    color_class: "bg-gray-500",
    color_hex: "#6b7280",
    icon: Icon::CreditCard,
};

/// Look up the category for `id`, falling back to [UNKNOWN_CATEGORY].
pub fn category_of(id: &str) -> &'static Category {
    CATEGORIES
        .iter()
        .find(|category| category.id == id)
        .unwrap_or(&UNKNOWN_CATEGORY)
}

/// A round colored badge with the category's icon.
pub fn category_icon(category: &Category) -> Markup {
    html! {
        span
            class={ "inline-flex shrink-0 items-center justify-center w-10 h-10 rounded-full text-white " (category.color_class) }
            title=(category.name)
        {
            (category.icon.symbol())
        }
    }
}
