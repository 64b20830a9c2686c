//! Input data structures matching the web front-end's profile format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender of the member (display/metadata only; the math never reads it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Risk classification of a scenario's chosen return rates.
///
/// Narration only: the tag never alters the projection, it labels the
/// return schedule for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Conservative,
    Moderate,
    Aggressive,
    Custom,
}

/// One DC switch scenario: the calendar year the member rolls the DB balance
/// into a DC account, and the return schedule assumed from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Unique scenario identifier (ties in the ranking break on the lowest id)
    pub id: u32,

    /// Display label
    pub label: String,

    /// Calendar year the DC switch occurs
    pub switch_year: i32,

    /// Annual return rates in % for years 0-5, 6-10, and 11+ after the
    /// switch. Exactly three segments; enforced by validation.
    pub return_rates: Vec<f64>,

    /// Risk classification of the chosen rates
    pub risk_level: RiskLevel,
}

impl Scenario {
    /// Gross annual return rate (%) applied `years_since_switch` years after
    /// the switch. Assumes a validated 3-segment schedule.
    pub fn segment_rate(&self, years_since_switch: u32) -> f64 {
        match years_since_switch {
            0..=5 => self.return_rates[0],
            6..=10 => self.return_rates[1],
            _ => self.return_rates[2],
        }
    }
}

/// Immutable snapshot of a member's financial profile.
///
/// Monetary fields are in man-won (10,000 KRW), matching the front-end.
/// Serialized names follow the web app's camelCase schema so persisted and
/// shared records round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    /// Display nickname (may be empty)
    #[serde(default)]
    pub nickname: String,

    /// Gender (metadata only)
    pub gender: Gender,

    /// Year of birth; ages are computed as `year - birth_year`
    pub birth_year: i32,

    /// First day of employment (drives years-of-service in the summary)
    pub work_start_date: NaiveDate,

    /// Current monthly income, man-won
    pub current_monthly_income: f64,

    /// Age at which work stops and drawdown begins
    pub retirement_age: u32,

    /// Age the projection runs to
    pub life_expectancy: u32,

    /// Expected annual wage growth, %
    pub expected_wage_growth_rate: f64,

    /// Current DB severance balance, man-won
    pub current_estimated_severance: f64,

    /// Other liquid financial assets, man-won
    pub other_assets: f64,

    /// Annual DC management fee, %
    pub management_fee: f64,

    /// Flat tax rate applied to lump-sum payouts, %
    pub tax_rate: f64,

    /// Annual inflation rate, %
    pub inflation_rate: f64,

    /// Household size; must be 2, 3, or 4
    pub family_size: u8,

    /// Ordered switch scenarios. The product ships four; the engine only
    /// requires at least one with unique ids.
    pub scenarios: Vec<Scenario>,
}

impl UserInput {
    /// The front-end's initial profile: a 1990-born member on 450 man-won a
    /// month, retiring at 60, with four switch scenarios at now/+5y/+10y/+15y.
    ///
    /// Used by the CLI when no input file is given and by the share decoder
    /// as the base record that persisted state merges over.
    pub fn default_profile(current_year: i32) -> Self {
        Self {
            nickname: String::new(),
            gender: Gender::Male,
            birth_year: 1990,
            work_start_date: NaiveDate::from_ymd_opt(2018, 1, 1).expect("valid date"),
            current_monthly_income: 450.0,
            retirement_age: 60,
            life_expectancy: 100,
            expected_wage_growth_rate: 3.5,
            current_estimated_severance: 0.0,
            other_assets: 0.0,
            management_fee: 0.5,
            tax_rate: 3.3,
            inflation_rate: 2.5,
            family_size: 3,
            scenarios: vec![
                Scenario {
                    id: 1,
                    label: "Switch now".to_string(),
                    switch_year: current_year,
                    return_rates: vec![5.0, 5.0, 5.0],
                    risk_level: RiskLevel::Conservative,
                },
                Scenario {
                    id: 2,
                    label: "Switch in 5 years".to_string(),
                    switch_year: current_year + 5,
                    return_rates: vec![5.0, 5.0, 5.0],
                    risk_level: RiskLevel::Conservative,
                },
                Scenario {
                    id: 3,
                    label: "Switch in 10 years".to_string(),
                    switch_year: current_year + 10,
                    return_rates: vec![7.0, 7.0, 7.0],
                    risk_level: RiskLevel::Moderate,
                },
                Scenario {
                    id: 4,
                    label: "Switch in 15 years".to_string(),
                    switch_year: current_year + 15,
                    return_rates: vec![7.0, 7.0, 7.0],
                    risk_level: RiskLevel::Moderate,
                },
            ],
        }
    }

    /// Calendar year the member reaches retirement age
    pub fn retirement_year(&self) -> i32 {
        self.birth_year + self.retirement_age as i32
    }

    /// Final projected calendar year (age == life expectancy)
    pub fn life_expectancy_year(&self) -> i32 {
        self.birth_year + self.life_expectancy as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_rate_boundaries() {
        let scenario = Scenario {
            id: 1,
            label: "test".to_string(),
            switch_year: 2024,
            return_rates: vec![5.0, 7.0, 3.0],
            risk_level: RiskLevel::Custom,
        };

        assert_eq!(scenario.segment_rate(0), 5.0);
        assert_eq!(scenario.segment_rate(5), 5.0);
        assert_eq!(scenario.segment_rate(6), 7.0);
        assert_eq!(scenario.segment_rate(10), 7.0);
        assert_eq!(scenario.segment_rate(11), 3.0);
        assert_eq!(scenario.segment_rate(40), 3.0);
    }

    #[test]
    fn test_default_profile_shape() {
        let input = UserInput::default_profile(2024);

        assert_eq!(input.scenarios.len(), 4);
        assert_eq!(input.scenarios[0].switch_year, 2024);
        assert_eq!(input.scenarios[3].switch_year, 2039);
        assert_eq!(input.retirement_year(), 2050);
        assert_eq!(input.life_expectancy_year(), 2090);
    }

    #[test]
    fn test_camel_case_round_trip() {
        let input = UserInput::default_profile(2024);
        let json = serde_json::to_string(&input).unwrap();

        assert!(json.contains("\"currentMonthlyIncome\""));
        assert!(json.contains("\"switchYear\""));
        assert!(json.contains("\"familySize\""));

        let back: UserInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
