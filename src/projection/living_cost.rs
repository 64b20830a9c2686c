//! Inflation-adjusted living cost per projected year

/// Household living cost, compounded at the inflation rate from the base
/// monthly cost for the household size. Applies uniformly before and after
/// retirement; the retirement-year cost is not discounted.
#[derive(Debug, Clone)]
pub struct LivingCostModel {
    base_monthly: f64,
    inflation_rate: f64,
    current_year: i32,
}

impl LivingCostModel {
    pub fn new(base_monthly: f64, inflation_rate: f64, current_year: i32) -> Self {
        Self {
            base_monthly,
            inflation_rate,
            current_year,
        }
    }

    /// Monthly living cost for a calendar year
    pub fn monthly(&self, year: i32) -> f64 {
        let years_out = (year - self.current_year).max(0);
        self.base_monthly * (1.0 + self.inflation_rate / 100.0).powi(years_out)
    }

    /// Annual living cost for a calendar year
    pub fn annual(&self, year: i32) -> f64 {
        self.monthly(year) * 12.0
    }
}
