//! Budget-allocation planner.
//!
//! Fixed percentage tables over a salary figure. Currency formatting is the
//! presentation layer's problem and not handled here.

use serde::Serialize;

/// Allocation rule applied to the salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetModel {
    /// Needs 50%, wants 30%, savings 20%.
    FiftyThirtyTwenty,
    /// Living expenses 70%, savings 20%, debt/donation 10%.
    SeventyTwentyTen,
    /// Living expenses 80%, savings 20%.
    EightyTwenty,
    /// Caller-defined percentages; the planner produces no rows.
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Period {
    Monthly,
    Annual,
}

/// One row of the allocation table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAllocation {
    pub category: String,
    pub percentage: u8,
    pub amount: f64,
    pub description: String,
}

/// Allocation table plus the inputs it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub allocations: Vec<BudgetAllocation>,
    pub total_salary: f64,
    pub period: Period,
}

fn allocation(category: &str, percentage: u8, salary: f64, description: &str) -> BudgetAllocation {
    BudgetAllocation {
        category: category.to_string(),
        percentage,
        amount: salary * f64::from(percentage) / 100.0,
        description: description.to_string(),
    }
}

/// Split a salary according to the chosen model.
pub fn calculate_budget(salary: f64, model: BudgetModel, period: Period) -> BudgetSummary {
    let allocations = match model {
        BudgetModel::FiftyThirtyTwenty => vec![
            allocation(
                "Needs",
                50,
                salary,
                "Essential expenses like rent, groceries, utilities.",
            ),
            allocation(
                "Wants",
                30,
                salary,
                "Non-essential spending like dining out, entertainment.",
            ),
            allocation(
                "Savings",
                20,
                salary,
                "Investments, emergency fund, debt repayment.",
            ),
        ],
        BudgetModel::SeventyTwentyTen => vec![
            allocation(
                "Living Expenses",
                70,
                salary,
                "All daily living costs including rent and food.",
            ),
            allocation(
                "Savings & Investments",
                20,
                salary,
                "Long-term savings and retirement.",
            ),
            allocation(
                "Debt / Donation",
                10,
                salary,
                "Credit card debt or charitable giving.",
            ),
        ],
        BudgetModel::EightyTwenty => vec![
            allocation(
                "Living Expenses",
                80,
                salary,
                "Everything you spend money on.",
            ),
            allocation("Savings", 20, salary, "Pay yourself first."),
        ],
        BudgetModel::Custom => vec![],
    };

    BudgetSummary {
        allocations,
        total_salary: salary,
        period,
    }
}
