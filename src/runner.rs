//! Batch runner for projecting many profiles efficiently
//!
//! Pre-loads assumptions once, then allows running many projections
//! without re-reading CSV files.

use rayon::prelude::*;

use crate::assumptions::Assumptions;
use crate::input::{InputError, UserInput};
use crate::projection::{CalculationResult, ProjectionConfig, ProjectionEngine};

/// Pre-loaded runner for single and batch projections.
///
/// # Example
/// ```ignore
/// let runner = ProjectionRunner::new();
/// let config = ProjectionConfig::for_today();
/// let result = runner.run(&input, config)?;
/// ```
#[derive(Debug, Clone)]
pub struct ProjectionRunner {
    base_assumptions: Assumptions,
}

impl ProjectionRunner {
    /// Create runner with default in-memory assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_policy(),
        }
    }

    /// Create runner by loading assumptions from the bundled CSV files
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run a single projection with the given config
    pub fn run(
        &self,
        input: &UserInput,
        config: ProjectionConfig,
    ) -> Result<CalculationResult, InputError> {
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        engine.project(input)
    }

    /// Run projections for multiple profiles with the same config, in
    /// parallel. Results line up index-for-index with the inputs.
    pub fn run_batch(
        &self,
        inputs: &[UserInput],
        config: ProjectionConfig,
    ) -> Vec<Result<CalculationResult, InputError>> {
        log::info!("projecting batch of {} profiles", inputs.len());
        inputs
            .par_iter()
            .map(|input| {
                let engine =
                    ProjectionEngine::new(self.base_assumptions.clone(), config.clone());
                engine.project(input)
            })
            .collect()
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ProjectionRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_matches_direct_engine() {
        let input = UserInput::default_profile(2024);
        let config = ProjectionConfig::new(2024);

        let runner = ProjectionRunner::new();
        let via_runner = runner.run(&input, config.clone()).unwrap();

        let engine = ProjectionEngine::new(Assumptions::default_policy(), config);
        let direct = engine.project(&input).unwrap();

        assert_eq!(via_runner, direct);
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut a = UserInput::default_profile(2024);
        a.current_monthly_income = 300.0;
        let mut b = UserInput::default_profile(2024);
        b.current_monthly_income = 600.0;

        let runner = ProjectionRunner::new();
        let results = runner.run_batch(&[a, b], ProjectionConfig::new(2024));

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        let second = results[1].as_ref().unwrap();
        assert!(second.summary.final_salary > first.summary.final_salary);
    }

    #[test]
    fn test_batch_surfaces_invalid_input() {
        let good = UserInput::default_profile(2024);
        let mut bad = UserInput::default_profile(2024);
        bad.scenarios.clear();

        let runner = ProjectionRunner::new();
        let results = runner.run_batch(&[good, bad], ProjectionConfig::new(2024));

        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(InputError::NoScenarios));
    }
}
