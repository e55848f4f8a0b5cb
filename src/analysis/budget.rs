//! Budget calculator
//!
//! Pure functions turning income and expenses into the ratios used by the
//! dashboard and the health score. Nothing here touches storage; callers load
//! the budget and pass it in, so derived values are always recomputed from
//! the current state.

use crate::models::{Budget, Expense, Money};

/// Upper bound on the share of income considered investable
pub const INVESTABLE_RATIO_CAP: f64 = 0.3;

/// Sum of all effective expenses
///
/// Entries with a blank category or a non-positive amount are ignored.
pub fn total_expenses<'a, I>(expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| e.is_effective())
        .map(|e| e.amount)
        .sum()
}

/// Net income minus total expenses; negative when overspending
pub fn surplus(net_income: Money, total_expenses: Money) -> Money {
    net_income - total_expenses
}

/// Surplus as a fraction of net income
///
/// Zero income yields a rate of 0. That is a display policy, not an identity:
/// there is no meaningful rate without income, and 0 keeps the score defined.
pub fn savings_rate(surplus: Money, net_income: Money) -> f64 {
    ratio(surplus, net_income)
}

/// Total expenses as a fraction of net income, 0 when there is no income
pub fn fixed_cost_ratio(total_expenses: Money, net_income: Money) -> f64 {
    ratio(total_expenses, net_income)
}

/// Savings rate capped at [`INVESTABLE_RATIO_CAP`]
pub fn investable_ratio(savings_rate: f64) -> f64 {
    investable_ratio_with_cap(savings_rate, INVESTABLE_RATIO_CAP)
}

/// Savings rate capped at `cap`
pub fn investable_ratio_with_cap(savings_rate: f64, cap: f64) -> f64 {
    savings_rate.min(cap)
}

fn ratio(numerator: Money, net_income: Money) -> f64 {
    if net_income.is_zero() {
        return 0.0;
    }
    numerator.as_f64() / net_income.as_f64()
}

/// Metrics derived from a budget; never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetMetrics {
    pub net_income: Money,
    pub total_expenses: Money,
    pub surplus: Money,
    pub savings_rate: f64,
    pub fixed_cost_ratio: f64,
    pub investable_ratio: f64,
}

impl BudgetMetrics {
    /// Compute metrics with the default investable cap
    pub fn compute(budget: &Budget) -> Self {
        Self::compute_with_cap(budget, INVESTABLE_RATIO_CAP)
    }

    /// Compute metrics with a custom investable cap
    pub fn compute_with_cap(budget: &Budget, investable_cap: f64) -> Self {
        let net_income = budget.net_income;
        let total_expenses = total_expenses(&budget.expenses);
        let surplus = surplus(net_income, total_expenses);
        let savings_rate = savings_rate(surplus, net_income);

        Self {
            net_income,
            total_expenses,
            surplus,
            savings_rate,
            fixed_cost_ratio: fixed_cost_ratio(total_expenses, net_income),
            investable_ratio: investable_ratio_with_cap(savings_rate, investable_cap),
        }
    }

    /// Where the budget stands overall
    pub fn situation(&self) -> BudgetSituation {
        if self.surplus.is_positive() {
            BudgetSituation::Surplus
        } else if self.surplus.is_zero() {
            BudgetSituation::BreakEven
        } else {
            BudgetSituation::Deficit
        }
    }
}

/// Sign of the monthly surplus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetSituation {
    Surplus,
    BreakEven,
    Deficit,
}

impl BudgetSituation {
    /// One-line verdict for the dashboard
    pub fn message(&self) -> &'static str {
        match self {
            Self::Surplus => "You have money left over to invest.",
            Self::BreakEven => "You break even: there is no buffer.",
            Self::Deficit => "You are spending more than you earn.",
        }
    }
}

/// One category's part of the total expenses
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Fraction of total effective expenses, 0..=1
    pub share: f64,
}

/// Effective expenses grouped by category, in first-seen order
pub fn expense_breakdown(budget: &Budget) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = Vec::new();

    for expense in budget.effective_expenses() {
        let category = expense.category.trim();
        match shares.iter_mut().find(|s| s.category == category) {
            Some(existing) => existing.amount += expense.amount,
            None => shares.push(CategoryShare {
                category: category.to_string(),
                amount: expense.amount,
                share: 0.0,
            }),
        }
    }

    let total: Money = shares.iter().map(|s| s.amount).sum();
    if total.is_positive() {
        for share in &mut shares {
            share.share = share.amount.as_f64() / total.as_f64();
        }
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-4;

    fn sample_budget() -> Budget {
        let mut budget = Budget::with_income(Money::from_units(3000));
        budget.add_expense(Expense::new("Rent", Money::from_units(1000)));
        budget.add_expense(Expense::new("Food", Money::from_units(400)));
        budget
    }

    #[test]
    fn test_reference_budget_metrics() {
        let metrics = BudgetMetrics::compute(&sample_budget());

        assert_eq!(metrics.total_expenses, Money::from_units(1400));
        assert_eq!(metrics.surplus, Money::from_units(1600));
        assert!((metrics.savings_rate - 0.5333).abs() < EPS);
        assert!((metrics.fixed_cost_ratio - 0.4667).abs() < EPS);
        assert_eq!(metrics.investable_ratio, 0.3);
        assert_eq!(metrics.situation(), BudgetSituation::Surplus);
    }

    #[test]
    fn test_total_ignores_placeholder_rows() {
        let expenses = vec![
            Expense::new("Rent", Money::from_units(1000)),
            Expense::new("", Money::from_units(999)),
            Expense::new("Gym", Money::zero()),
            Expense::new("Refund", Money::from_units(-50)),
        ];
        assert_eq!(total_expenses(&expenses), Money::from_units(1000));
    }

    #[test]
    fn test_zero_income_policy() {
        assert_eq!(savings_rate(Money::from_units(-400), Money::zero()), 0.0);
        assert_eq!(fixed_cost_ratio(Money::from_units(400), Money::zero()), 0.0);

        let mut budget = Budget::default();
        budget.add_expense(Expense::new("Rent", Money::from_units(400)));
        let metrics = BudgetMetrics::compute(&budget);
        assert_eq!(metrics.surplus, Money::from_units(-400));
        assert_eq!(metrics.savings_rate, 0.0);
        assert_eq!(metrics.fixed_cost_ratio, 0.0);
        assert_eq!(metrics.situation(), BudgetSituation::Deficit);
    }

    #[test]
    fn test_deficit_gives_negative_rates() {
        let mut budget = Budget::with_income(Money::from_units(1000));
        budget.add_expense(Expense::new("Rent", Money::from_units(1500)));
        let metrics = BudgetMetrics::compute(&budget);

        assert!((metrics.savings_rate + 0.5).abs() < EPS);
        assert!((metrics.investable_ratio + 0.5).abs() < EPS);
    }

    #[test]
    fn test_break_even() {
        let mut budget = Budget::with_income(Money::from_units(1000));
        budget.add_expense(Expense::new("Rent", Money::from_units(1000)));
        assert_eq!(
            BudgetMetrics::compute(&budget).situation(),
            BudgetSituation::BreakEven
        );
    }

    #[test]
    fn test_custom_investable_cap() {
        let metrics = BudgetMetrics::compute_with_cap(&sample_budget(), 0.5);
        assert!((metrics.investable_ratio - 0.5).abs() < EPS);
    }

    #[test]
    fn test_expense_breakdown_groups_categories() {
        let mut budget = sample_budget();
        budget.add_expense(Expense::new("Food ", Money::from_units(600)));
        budget.add_expense(Expense::new("", Money::from_units(100)));

        let breakdown = expense_breakdown(&budget);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Rent");
        assert_eq!(breakdown[1].amount, Money::from_units(1000));
        assert!((breakdown[0].share - 0.5).abs() < EPS);
        assert!((breakdown[1].share - 0.5).abs() < EPS);
    }

    #[test]
    fn test_expense_breakdown_empty() {
        assert!(expense_breakdown(&Budget::default()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_total_counts_only_effective_rows(
            rows in proptest::collection::vec(
                (prop_oneof![Just(String::new()), Just(" ".to_string()), "[a-z]{1,8}"], -5_000i64..5_000),
                0..12,
            )
        ) {
            let expenses: Vec<Expense> = rows
                .iter()
                .map(|(category, cents)| Expense::new(category.clone(), Money::from_cents(*cents)))
                .collect();

            let expected: i64 = rows
                .iter()
                .filter(|(category, cents)| !category.trim().is_empty() && *cents > 0)
                .map(|(_, cents)| *cents)
                .sum();

            prop_assert_eq!(total_expenses(&expenses).cents(), expected);
        }
    }
}
