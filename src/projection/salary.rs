//! Nominal salary path over the working years

use crate::input::UserInput;

/// Projected monthly salary per calendar year.
///
/// The path compounds annually from the current monthly income over the
/// working range `current_year..retirement_year` (age below retirement age)
/// and is zero outside it. Values are precomputed once; lookups are O(1).
#[derive(Debug, Clone)]
pub struct SalaryPath {
    start_year: i32,
    retirement_year: i32,
    monthly: Vec<f64>,
}

impl SalaryPath {
    /// Build the path from an input record and the configured current year
    pub fn build(input: &UserInput, current_year: i32) -> Self {
        let retirement_year = input.retirement_year();
        let growth = 1.0 + input.expected_wage_growth_rate / 100.0;

        let working_years = (retirement_year - current_year).max(0) as usize;
        let mut monthly = Vec::with_capacity(working_years);
        let mut salary = input.current_monthly_income;
        for _ in 0..working_years {
            monthly.push(salary);
            salary *= growth;
        }

        Self {
            start_year: current_year,
            retirement_year,
            monthly,
        }
    }

    /// Monthly salary for a calendar year; zero outside the working range
    pub fn monthly(&self, year: i32) -> f64 {
        if year < self.start_year || year >= self.retirement_year {
            return 0.0;
        }
        self.monthly[(year - self.start_year) as usize]
    }

    /// Annual salary for a calendar year
    pub fn annual(&self, year: i32) -> f64 {
        self.monthly(year) * 12.0
    }

    /// Whether the member is still working in the given year
    pub fn is_working_year(&self, year: i32) -> bool {
        year >= self.start_year && year < self.retirement_year
    }

    /// Final working calendar year, if any working years remain
    pub fn final_working_year(&self) -> Option<i32> {
        (!self.monthly.is_empty()).then(|| self.retirement_year - 1)
    }
}
