//! Core projection engine: one validated input in, one result out

use std::cmp::Ordering;

use chrono::Datelike;

use crate::assumptions::Assumptions;
use crate::input::{validate, InputError, Scenario, UserInput};

use super::db_track::DbTrack;
use super::depletion::{DepletionAge, DepletionAnalyzer};
use super::living_cost::LivingCostModel;
use super::result::{CalculationResult, ScenarioSummary, Summary, YearlyProjection};
use super::salary::SalaryPath;
use super::scenario_sim::ScenarioSimulator;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Calendar year the projection starts from. Captured once by the
    /// caller; the engine itself never reads the clock.
    pub current_year: i32,
}

impl ProjectionConfig {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Capture the current year from the system clock (UTC)
    pub fn for_today() -> Self {
        Self {
            current_year: chrono::Utc::now().year(),
        }
    }
}

/// Main projection engine.
///
/// Pure and synchronous: the same input and config always produce the same
/// result, with no I/O and no shared state. Callers may re-invoke it on
/// every input change and run independent invocations concurrently.
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    /// Run the full projection for one input record.
    ///
    /// Fails fast on invalid input; no partial computation is performed.
    pub fn project(&self, input: &UserInput) -> Result<CalculationResult, InputError> {
        let cy = self.config.current_year;
        validate(input, cy)?;

        let ry = input.retirement_year();
        let ly = input.life_expectancy_year();

        let salary = SalaryPath::build(input, cy);
        let costs = LivingCostModel::new(
            self.assumptions.living_cost.base_monthly(input.family_size),
            input.inflation_rate,
            cy,
        );
        let db = DbTrack::build(input, &salary, &costs, &self.assumptions.accrual, cy);

        let simulations: Vec<Vec<f64>> = input
            .scenarios
            .iter()
            .map(|s| ScenarioSimulator::new(s, input.management_fee).simulate(&db, cy, ly))
            .collect();

        let projections = self.build_rows(input, &salary, &costs, &db, &simulations, cy, ly);
        let summary = self.build_summary(input, &salary, &costs, &db, &simulations, cy, ry, ly);

        Ok(CalculationResult {
            projections,
            summary,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn build_rows(
        &self,
        input: &UserInput,
        salary: &SalaryPath,
        costs: &LivingCostModel,
        db: &DbTrack,
        simulations: &[Vec<f64>],
        cy: i32,
        ly: i32,
    ) -> Vec<YearlyProjection> {
        (cy..=ly)
            .map(|year| {
                let idx = (year - cy) as usize;
                YearlyProjection {
                    year,
                    age: (year - input.birth_year).max(0) as u32,
                    salary: salary.monthly(year),
                    monthly_living_cost: costs.monthly(year),
                    living_cost: costs.annual(year),
                    investable_surplus: db.surplus(year),
                    db_value: db.value(year),
                    scenario_values: simulations.iter().map(|v| v[idx]).collect(),
                }
            })
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    fn build_summary(
        &self,
        input: &UserInput,
        salary: &SalaryPath,
        costs: &LivingCostModel,
        db: &DbTrack,
        simulations: &[Vec<f64>],
        cy: i32,
        ry: i32,
        ly: i32,
    ) -> Summary {
        // Balance year the lump sum is taken from: the final working year,
        // or the projection start when retirement is already past
        let final_balance_year = (ry - 1).clamp(cy, ly);
        let final_idx = (final_balance_year - cy) as usize;
        let first_drawdown_year = ry.max(cy);

        let analyzer = DepletionAnalyzer::new(costs, &self.assumptions.drawdown);

        let scenarios: Vec<ScenarioSummary> = input
            .scenarios
            .iter()
            .zip(simulations)
            .map(|(scenario, values)| {
                let final_amount = values[final_idx];
                let final_amount_after_tax =
                    DepletionAnalyzer::post_tax_fund(final_amount, input.tax_rate);
                let depletion_age = analyzer.analyze(
                    final_amount_after_tax,
                    input.birth_year,
                    first_drawdown_year,
                    ly,
                );

                ScenarioSummary {
                    id: scenario.id,
                    label: scenario.label.clone(),
                    final_amount,
                    final_amount_after_tax,
                    avg_return_rate: average_applied_rate(scenario, ry, cy),
                    switch_year: scenario.switch_year,
                    risk_level: scenario.risk_level,
                    depletion_age,
                }
            })
            .collect();

        // Validation guarantees at least one scenario
        let mut best = &scenarios[0];
        for candidate in &scenarios[1..] {
            if outranks(candidate, best) == Ordering::Greater {
                best = candidate;
            }
        }

        let final_db = db.value(final_balance_year);

        Summary {
            final_year: ry - 1,
            total_years_worked: (ry - input.work_start_date.year()).max(0) as u32,
            final_salary: salary.monthly(ry - 1),
            final_db,
            final_db_after_tax: DepletionAnalyzer::post_tax_fund(final_db, input.tax_rate),
            total_invested_surplus: db.total_surplus(),
            post_retirement_years: input.life_expectancy - input.retirement_age,
            best_option_id: best.id,
            best_option: best.label.clone(),
            scenarios,
        }
    }
}

/// Mean gross segment rate (%) applied over the growth years between the
/// switch and retirement. Zero when the switch leaves no growth years.
fn average_applied_rate(scenario: &Scenario, retirement_year: i32, current_year: i32) -> f64 {
    let first = (scenario.switch_year + 1).max(current_year + 1);
    let last = retirement_year - 1;
    if first > last {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut count = 0;
    for year in first..=last {
        let k = (year - scenario.switch_year) as u32;
        sum += scenario.segment_rate(k);
        count += 1;
    }
    sum / count as f64
}

/// Strict total order over scenario outcomes: `Greater` means `a` wins.
///
/// Never-depleting outranks depleting; among non-depleting, higher post-tax
/// balance wins; among depleting, later depletion age wins; ties fall to
/// the lowest id. Ids are unique, so the order has no equal elements and
/// ranking is permutation-stable.
fn outranks(a: &ScenarioSummary, b: &ScenarioSummary) -> Ordering {
    let primary = match (a.depletion_age, b.depletion_age) {
        (DepletionAge::Never, DepletionAge::Never) => {
            a.final_amount_after_tax.total_cmp(&b.final_amount_after_tax)
        }
        (DepletionAge::Never, DepletionAge::At(_)) => Ordering::Greater,
        (DepletionAge::At(_), DepletionAge::Never) => Ordering::Less,
        (DepletionAge::At(x), DepletionAge::At(y)) => x.cmp(&y),
    };
    primary.then_with(|| b.id.cmp(&a.id))
}
