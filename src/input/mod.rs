//! Input records, validation, and the persisted-state codec

mod data;
mod validation;
pub mod share;

pub use data::{Gender, RiskLevel, Scenario, UserInput};
pub use validation::{validate, InputError};
