//! Monthly budgets per category and the progress figures derived from them.

/// How far through its allocation a budget is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// At most 80% used.
    Good,
    /// More than 80% and at most 100% used.
    Warning,
    /// More than 100% used.
    Exceeded,
}

impl BudgetStatus {
    /// Classify an unclamped percentage.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 100.0 {
            BudgetStatus::Exceeded
        } else if percentage > 80.0 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        }
    }

    /// The text of the status badge.
    pub fn label(self) -> &'static str {
        match self {
            BudgetStatus::Good => "On Track",
            BudgetStatus::Warning => "Almost Reached",
            BudgetStatus::Exceeded => "Exceeded",
        }
    }
}

/// A spending limit for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    /// Unique among the budgets, e.g. "b1".
    pub id: &'static str,
    /// The category this budget limits.
    pub category_id: &'static str,
    /// The allocated amount.
    pub amount: f64,
    /// Spending so far this month.
    pub spent: f64,
}

impl Budget {
    /// `spent` as a percentage of `amount`, not clamped.
    ///
    /// A zero allocation is 0% used until something is spent, after which it is
    /// treated as infinitely over budget.
    pub fn percentage_used(&self) -> f64 {
        if self.amount > 0.0 {
            self.spent / self.amount * 100.0
        } else if self.spent > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    }

    /// [Budget::percentage_used] clamped to 0..=100 for progress bars.
    pub fn display_percentage(&self) -> f64 {
        self.percentage_used().clamp(0.0, 100.0)
    }

    /// Negative when over budget.
    pub fn remaining(&self) -> f64 {
        self.amount - self.spent
    }

    /// Classify [Budget::percentage_used].
    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_percentage(self.percentage_used())
    }
}

/// The sums over every budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTotals {
    /// The sum of every allocation.
    pub budget: f64,
    /// The sum of spending across budgets.
    pub spent: f64,
    /// Negative when spending is over the total budget.
    pub remaining: f64,
    /// 0 when the total budget is 0.
    pub percentage_used: f64,
}

/// The read-only set of budgets.
#[derive(Debug, Clone, Default)]
pub struct BudgetStore {
    budgets: Vec<Budget>,
}

impl BudgetStore {
    /// A store holding `budgets` in display order.
    pub fn new(budgets: Vec<Budget>) -> Self {
        Self { budgets }
    }

    /// The sample budgets for the current month.
    pub fn with_sample_data() -> Self {
        let budgets = [
            ("b1", "housing", 2500.0, 2000.0),
            ("b2", "food", 500.0, 193.10),
            ("b3", "utilities", 300.0, 45.99),
            ("b4", "shopping", 400.0, 199.99),
            ("b5", "entertainment", 200.0, 32.99),
            ("b6", "coffee", 50.0, 14.50),
            ("b7", "gifts", 100.0, 49.99),
        ]
        .into_iter()
        .map(|(id, category_id, amount, spent)| Budget {
            id,
            category_id,
            amount,
            spent,
        })
        .collect();

        Self::new(budgets)
    }

    /// Every budget in display order.
    pub fn all(&self) -> &[Budget] {
        &self.budgets
    }

    /// Sum the allocations and spending of every budget.
    pub fn totals(&self) -> BudgetTotals {
        let budget: f64 = self.budgets.iter().map(|budget| budget.amount).sum();
        let spent: f64 = self.budgets.iter().map(|budget| budget.spent).sum();
        let percentage_used = if budget == 0.0 {
            0.0
        } else {
            spent / budget * 100.0
        };

        BudgetTotals {
            budget,
            spent,
            remaining: budget - spent,
            percentage_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Budget, BudgetStatus, BudgetStore};

    fn budget(amount: f64, spent: f64) -> Budget {
        Budget {
            id: "b",
            category_id: "food",
            amount,
            spent,
        }
    }

    #[test]
    fn under_eighty_percent_is_good() {
        let budget = budget(500.0, 193.10);

        assert_eq!(budget.status(), BudgetStatus::Good);
        assert!((budget.percentage_used() - 38.62).abs() < 0.01);
        assert_eq!(budget.status().label(), "On Track");
    }

    #[test]
    fn over_budget_is_exceeded_and_clamped() {
        let budget = budget(50.0, 60.0);

        assert_eq!(budget.status(), BudgetStatus::Exceeded);
        assert_eq!(budget.display_percentage(), 100.0);
        assert!((budget.percentage_used() - 120.0).abs() < 1e-9);
        assert!((budget.remaining() + 10.0).abs() < 1e-9);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(budget(100.0, 80.0).status(), BudgetStatus::Good);
        assert_eq!(budget(100.0, 80.5).status(), BudgetStatus::Warning);
        assert_eq!(budget(100.0, 100.0).status(), BudgetStatus::Warning);
        assert_eq!(budget(100.0, 100.5).status(), BudgetStatus::Exceeded);
    }

    #[test]
    fn zero_allocation_does_not_divide_by_zero() {
        assert_eq!(budget(0.0, 0.0).percentage_used(), 0.0);
        assert_eq!(budget(0.0, 5.0).status(), BudgetStatus::Exceeded);
        assert_eq!(budget(0.0, 5.0).display_percentage(), 100.0);
    }

    #[test]
    fn totals_over_sample_budgets() {
        let totals = BudgetStore::with_sample_data().totals();

        assert!((totals.budget - 4050.0).abs() < 1e-9);
        assert!((totals.spent - 2536.56).abs() < 1e-9);
        assert!((totals.remaining - 1513.44).abs() < 1e-9);
        assert!((totals.percentage_used - 2536.56 / 4050.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_store_totals_are_zero_percent() {
        let totals = BudgetStore::default().totals();

        assert_eq!(totals.budget, 0.0);
        assert_eq!(totals.percentage_used, 0.0);
    }
}
