//! Defined-benefit severance track: the "do nothing" baseline

use crate::assumptions::DbAccrualPolicy;
use crate::input::UserInput;

use super::living_cost::LivingCostModel;
use super::salary::SalaryPath;

/// Year-indexed DB baseline balance.
///
/// Opens at the member's stated severance balance plus other liquid assets.
/// Each working year adds the statutory severance accrual (one month of
/// trailing-average salary) and the household's investable surplus, both
/// held uninvested. From the retirement year on the balance is frozen and
/// becomes the lump-sum comparison baseline.
#[derive(Debug, Clone)]
pub struct DbTrack {
    start_year: i32,
    values: Vec<f64>,
    accruals: Vec<f64>,
    surpluses: Vec<f64>,
}

impl DbTrack {
    pub fn build(
        input: &UserInput,
        salary: &SalaryPath,
        costs: &LivingCostModel,
        policy: &DbAccrualPolicy,
        current_year: i32,
    ) -> Self {
        let life_year = input.life_expectancy_year();
        let years = (life_year - current_year + 1).max(0) as usize;

        let mut values = Vec::with_capacity(years);
        let mut accruals = Vec::with_capacity(years);
        let mut surpluses = Vec::with_capacity(years);

        let mut balance = input.current_estimated_severance + input.other_assets;
        let window = policy.trailing_years.max(1) as i32;

        for year in current_year..=life_year {
            let (accrual, surplus) = if salary.is_working_year(year) {
                let accrual = trailing_average_monthly(salary, year, current_year, window);
                let surplus = (salary.annual(year) - costs.annual(year)).max(0.0);
                (accrual, surplus)
            } else {
                (0.0, 0.0)
            };

            balance += accrual + surplus;
            values.push(balance);
            accruals.push(accrual);
            surpluses.push(surplus);
        }

        Self {
            start_year: current_year,
            values,
            accruals,
            surpluses,
        }
    }

    fn index(&self, year: i32) -> Option<usize> {
        let offset = year - self.start_year;
        (offset >= 0 && (offset as usize) < self.values.len()).then_some(offset as usize)
    }

    /// DB balance at the end of a projected year (frozen after retirement)
    pub fn value(&self, year: i32) -> f64 {
        self.index(year).map_or(0.0, |i| self.values[i])
    }

    /// Severance accrual credited in a year (zero outside the working range)
    pub fn accrual(&self, year: i32) -> f64 {
        self.index(year).map_or(0.0, |i| self.accruals[i])
    }

    /// Investable surplus generated in a year (floored at zero)
    pub fn surplus(&self, year: i32) -> f64 {
        self.index(year).map_or(0.0, |i| self.surpluses[i])
    }

    /// Annual contribution shared by the DB baseline and every DC scenario
    pub fn contribution(&self, year: i32) -> f64 {
        self.accrual(year) + self.surplus(year)
    }

    /// Sum of all investable surplus over the career
    pub fn total_surplus(&self) -> f64 {
        self.surpluses.iter().sum()
    }
}

/// Mean monthly salary over the trailing window ending at `year`, clipped
/// to the projected working years.
fn trailing_average_monthly(salary: &SalaryPath, year: i32, start_year: i32, window: i32) -> f64 {
    let from = (year - window + 1).max(start_year);
    let mut sum = 0.0;
    let mut count = 0;
    for y in from..=year {
        if salary.is_working_year(y) {
            sum += salary.monthly(y);
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_input() -> UserInput {
        let mut input = UserInput::default_profile(2024);
        input.expected_wage_growth_rate = 0.0;
        input.inflation_rate = 0.0;
        input
    }

    fn build(input: &UserInput) -> DbTrack {
        let salary = SalaryPath::build(input, 2024);
        let costs = LivingCostModel::new(280.0, input.inflation_rate, 2024);
        DbTrack::build(input, &salary, &costs, &DbAccrualPolicy::default_policy(), 2024)
    }

    #[test]
    fn test_opens_with_severance_and_other_assets() {
        let mut input = flat_input();
        input.current_estimated_severance = 1000.0;
        input.other_assets = 500.0;

        let track = build(&input);
        // First year: opening balance + one month accrual + surplus
        let surplus = 450.0 * 12.0 - 280.0 * 12.0;
        assert_relative_eq!(track.value(2024), 1500.0 + 450.0 + surplus);
    }

    #[test]
    fn test_flat_salary_accrues_one_month_per_year() {
        let track = build(&flat_input());
        assert_relative_eq!(track.accrual(2024), 450.0);
        assert_relative_eq!(track.accrual(2040), 450.0);
        let surplus = (450.0 - 280.0) * 12.0;
        assert_relative_eq!(track.value(2025) - track.value(2024), 450.0 + surplus);
    }

    #[test]
    fn test_frozen_after_retirement() {
        let track = build(&flat_input());
        let final_value = track.value(2049);
        assert_eq!(track.value(2050), final_value);
        assert_eq!(track.value(2090), final_value);
        assert_eq!(track.accrual(2050), 0.0);
        assert_eq!(track.surplus(2050), 0.0);
    }

    #[test]
    fn test_trailing_average_lags_growing_salary() {
        let mut input = flat_input();
        input.expected_wage_growth_rate = 10.0;
        let track = build(&input);
        let salary = SalaryPath::build(&input, 2024);

        // With a 3-year window the accrual in 2030 averages 2028-2030
        let expected =
            (salary.monthly(2028) + salary.monthly(2029) + salary.monthly(2030)) / 3.0;
        assert_relative_eq!(track.accrual(2030), expected, epsilon = 1e-9);
        assert!(track.accrual(2030) < salary.monthly(2030));
    }

    #[test]
    fn test_deficit_years_contribute_no_surplus() {
        let mut input = flat_input();
        input.current_monthly_income = 200.0; // below the 280 living cost
        let track = build(&input);
        assert_eq!(track.surplus(2024), 0.0);
        assert_relative_eq!(track.value(2024), 200.0); // accrual only
    }
}
