//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::input::RiskLevel;

use super::depletion::DepletionAge;

/// One row of projection output per calendar year.
///
/// Rows are produced once, in increasing year order, and never mutated.
/// `scenario_values` is aligned with the input's scenario order so the
/// engine stays scenario-count-agnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    pub year: i32,
    pub age: u32,

    /// Projected monthly salary (zero outside the working range)
    pub salary: f64,

    pub monthly_living_cost: f64,
    pub living_cost: f64,

    /// Annual surplus available to invest, floored at zero
    pub investable_surplus: f64,

    /// DB baseline balance (frozen after retirement)
    pub db_value: f64,

    /// One balance per scenario, in input order
    pub scenario_values: Vec<f64>,
}

/// Whole-scenario summary figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub id: u32,
    pub label: String,

    /// Balance at the end of the final working year
    pub final_amount: f64,
    pub final_amount_after_tax: f64,

    /// Mean gross return rate (%) over the growth years before retirement
    pub avg_return_rate: f64,

    pub switch_year: i32,
    pub risk_level: RiskLevel,
    pub depletion_age: DepletionAge,
}

/// Whole-career and per-scenario aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Final working calendar year
    pub final_year: i32,
    pub total_years_worked: u32,

    /// Monthly salary in the final working year
    pub final_salary: f64,

    pub final_db: f64,
    pub final_db_after_tax: f64,

    /// Total surplus invested over the career
    pub total_invested_surplus: f64,

    pub post_retirement_years: u32,

    pub scenarios: Vec<ScenarioSummary>,

    /// Winning scenario under the ranking rules
    pub best_option_id: u32,
    pub best_option: String,
}

/// Terminal output of the projection engine: the full year-ordered
/// sequence plus the summary, returned atomically and treated as
/// read-only by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub projections: Vec<YearlyProjection>,
    pub summary: Summary,
}
