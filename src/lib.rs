//! Pension Strategy - DB-vs-DC retirement projection engine
//!
//! This library provides:
//! - Year-by-year salary, living-cost, and DB severance projections
//! - DC switch scenario simulation with segmented return schedules
//! - Post-retirement drawdown and depletion-age analysis
//! - Scenario ranking and best-option selection
//! - Shareable input encoding compatible with the web front-end

pub mod input;
pub mod assumptions;
pub mod projection;
pub mod runner;

// Re-export commonly used types
pub use input::{validate, InputError, RiskLevel, Scenario, UserInput};
pub use assumptions::Assumptions;
pub use projection::{
    CalculationResult, DepletionAge, ProjectionConfig, ProjectionEngine, Summary,
    YearlyProjection,
};
pub use runner::ProjectionRunner;
