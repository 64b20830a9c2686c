//! Retirement projection: salary and cost series, the DB baseline, DC
//! switch scenarios, drawdown analysis, and the engine that ties them
//! together.

mod db_track;
mod depletion;
mod engine;
mod living_cost;
mod result;
mod salary;
mod scenario_sim;

pub use db_track::DbTrack;
pub use depletion::{DepletionAge, DepletionAnalyzer};
pub use engine::{ProjectionConfig, ProjectionEngine};
pub use living_cost::LivingCostModel;
pub use result::{CalculationResult, ScenarioSummary, Summary, YearlyProjection};
pub use salary::SalaryPath;
pub use scenario_sim::ScenarioSimulator;
