//! Structural validation of a [`UserInput`] record.
//!
//! The engine fails fast on the first offending field and never clamps or
//! guesses. Numeric edge cases (zero rates, zero surplus, immediate
//! depletion) are valid inputs, not errors.

use thiserror::Error;

use super::data::UserInput;

/// Invalid-input errors, each naming the offending field
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("familySize must be 2, 3, or 4 (got {0})")]
    InvalidFamilySize(u8),

    #[error("retirementAge ({retirement_age}) must be below lifeExpectancy ({life_expectancy})")]
    RetirementNotBeforeLifeExpectancy {
        retirement_age: u32,
        life_expectancy: u32,
    },

    #[error("birthYear ({birth_year}) must be before the current year ({current_year})")]
    BirthYearNotInPast { birth_year: i32, current_year: i32 },

    #[error("lifeExpectancy year ({life_expectancy_year}) is before the current year ({current_year})")]
    LifeExpectancyInPast {
        life_expectancy_year: i32,
        current_year: i32,
    },

    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("{field} must not exceed 100% (got {value})")]
    RateAboveHundred { field: &'static str, value: f64 },

    #[error("scenarios must contain at least one entry")]
    NoScenarios,

    #[error("duplicate scenario id {0}")]
    DuplicateScenarioId(u32),

    #[error("scenario {id}: expected exactly 3 return-rate segments, got {count}")]
    BadReturnSchedule { id: u32, count: usize },

    #[error("scenario {id}: returnRates[{segment}] must not be negative (got {value})")]
    NegativeReturnRate { id: u32, segment: usize, value: f64 },

    #[error("scenario {id}: switchYear ({switch_year}) is before the current year ({current_year})")]
    SwitchYearInPast {
        id: u32,
        switch_year: i32,
        current_year: i32,
    },
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if value < 0.0 {
        return Err(InputError::NegativeValue { field, value });
    }
    Ok(())
}

fn percentage(field: &'static str, value: f64) -> Result<(), InputError> {
    non_negative(field, value)?;
    if value > 100.0 {
        return Err(InputError::RateAboveHundred { field, value });
    }
    Ok(())
}

/// Validate a full input record against the configured current year.
///
/// All-or-nothing: the caller runs no projection work before this passes.
pub fn validate(input: &UserInput, current_year: i32) -> Result<(), InputError> {
    if !matches!(input.family_size, 2..=4) {
        return Err(InputError::InvalidFamilySize(input.family_size));
    }

    if input.retirement_age >= input.life_expectancy {
        return Err(InputError::RetirementNotBeforeLifeExpectancy {
            retirement_age: input.retirement_age,
            life_expectancy: input.life_expectancy,
        });
    }

    if input.birth_year >= current_year {
        return Err(InputError::BirthYearNotInPast {
            birth_year: input.birth_year,
            current_year,
        });
    }

    // A profile whose final projected year already lies in the past has an
    // empty projection range; nothing meaningful can be computed for it.
    if input.life_expectancy_year() < current_year {
        return Err(InputError::LifeExpectancyInPast {
            life_expectancy_year: input.life_expectancy_year(),
            current_year,
        });
    }

    non_negative("currentMonthlyIncome", input.current_monthly_income)?;
    non_negative("expectedWageGrowthRate", input.expected_wage_growth_rate)?;
    non_negative("currentEstimatedSeverance", input.current_estimated_severance)?;
    non_negative("otherAssets", input.other_assets)?;
    non_negative("inflationRate", input.inflation_rate)?;
    percentage("managementFee", input.management_fee)?;
    percentage("taxRate", input.tax_rate)?;

    if input.scenarios.is_empty() {
        return Err(InputError::NoScenarios);
    }

    let mut seen_ids = Vec::with_capacity(input.scenarios.len());
    for scenario in &input.scenarios {
        if seen_ids.contains(&scenario.id) {
            return Err(InputError::DuplicateScenarioId(scenario.id));
        }
        seen_ids.push(scenario.id);

        if scenario.return_rates.len() != 3 {
            return Err(InputError::BadReturnSchedule {
                id: scenario.id,
                count: scenario.return_rates.len(),
            });
        }

        for (segment, &rate) in scenario.return_rates.iter().enumerate() {
            if rate < 0.0 {
                return Err(InputError::NegativeReturnRate {
                    id: scenario.id,
                    segment,
                    value: rate,
                });
            }
        }

        // Non-increasing switch years across scenarios are allowed; only a
        // switch before the current year is rejected.
        if scenario.switch_year < current_year {
            return Err(InputError::SwitchYearInPast {
                id: scenario.id,
                switch_year: scenario.switch_year,
                current_year,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2024;

    #[test]
    fn test_default_profile_is_valid() {
        let input = UserInput::default_profile(YEAR);
        assert_eq!(validate(&input, YEAR), Ok(()));
    }

    #[test]
    fn test_family_size_out_of_range() {
        let mut input = UserInput::default_profile(YEAR);
        input.family_size = 5;
        assert_eq!(validate(&input, YEAR), Err(InputError::InvalidFamilySize(5)));

        input.family_size = 1;
        assert_eq!(validate(&input, YEAR), Err(InputError::InvalidFamilySize(1)));
    }

    #[test]
    fn test_retirement_must_precede_life_expectancy() {
        let mut input = UserInput::default_profile(YEAR);
        input.retirement_age = 100;
        assert_eq!(
            validate(&input, YEAR),
            Err(InputError::RetirementNotBeforeLifeExpectancy {
                retirement_age: 100,
                life_expectancy: 100,
            })
        );
    }

    #[test]
    fn test_birth_year_in_future() {
        let mut input = UserInput::default_profile(YEAR);
        input.birth_year = YEAR;
        assert!(matches!(
            validate(&input, YEAR),
            Err(InputError::BirthYearNotInPast { .. })
        ));
    }

    #[test]
    fn test_life_expectancy_year_in_past() {
        // Born 1920 with a life expectancy of 100: the final projected year
        // (2020) precedes the current year, leaving nothing to project.
        let mut input = UserInput::default_profile(YEAR);
        input.birth_year = 1920;
        assert_eq!(
            validate(&input, YEAR),
            Err(InputError::LifeExpectancyInPast {
                life_expectancy_year: 2020,
                current_year: YEAR,
            })
        );

        // The boundary year itself is still projectable
        input.birth_year = YEAR - 100;
        assert_eq!(validate(&input, YEAR), Ok(()));
    }

    #[test]
    fn test_negative_income_names_the_field() {
        let mut input = UserInput::default_profile(YEAR);
        input.current_monthly_income = -1.0;
        let err = validate(&input, YEAR).unwrap_err();
        assert_eq!(
            err,
            InputError::NegativeValue {
                field: "currentMonthlyIncome",
                value: -1.0,
            }
        );
        assert!(err.to_string().contains("currentMonthlyIncome"));
    }

    #[test]
    fn test_fee_above_hundred_rejected() {
        let mut input = UserInput::default_profile(YEAR);
        input.management_fee = 120.0;
        assert!(matches!(
            validate(&input, YEAR),
            Err(InputError::RateAboveHundred { field: "managementFee", .. })
        ));
    }

    #[test]
    fn test_scenario_checks() {
        let mut input = UserInput::default_profile(YEAR);
        input.scenarios.clear();
        assert_eq!(validate(&input, YEAR), Err(InputError::NoScenarios));

        let mut input = UserInput::default_profile(YEAR);
        input.scenarios[2].id = input.scenarios[0].id;
        assert_eq!(validate(&input, YEAR), Err(InputError::DuplicateScenarioId(1)));

        let mut input = UserInput::default_profile(YEAR);
        input.scenarios[1].return_rates = vec![5.0, 5.0];
        assert_eq!(
            validate(&input, YEAR),
            Err(InputError::BadReturnSchedule { id: 2, count: 2 })
        );

        let mut input = UserInput::default_profile(YEAR);
        input.scenarios[0].switch_year = YEAR - 1;
        assert!(matches!(
            validate(&input, YEAR),
            Err(InputError::SwitchYearInPast { id: 1, .. })
        ));
    }

    #[test]
    fn test_zero_rates_are_valid() {
        let mut input = UserInput::default_profile(YEAR);
        input.expected_wage_growth_rate = 0.0;
        input.inflation_rate = 0.0;
        input.management_fee = 0.0;
        for scenario in &mut input.scenarios {
            scenario.return_rates = vec![0.0, 0.0, 0.0];
        }
        assert_eq!(validate(&input, YEAR), Ok(()));
    }
}
