//! Projection assumptions: living-cost table and documented policy rates

mod living_cost;
mod policy;
pub mod loader;

pub use living_cost::LivingCostTable;
pub use policy::{DbAccrualPolicy, DrawdownPolicy};

use std::path::Path;

/// Container for all projection assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub living_cost: LivingCostTable,
    pub accrual: DbAccrualPolicy,
    pub drawdown: DrawdownPolicy,
}

impl Assumptions {
    /// Create assumptions with the documented in-memory policy defaults
    pub fn default_policy() -> Self {
        Self {
            living_cost: LivingCostTable::default_policy(),
            accrual: DbAccrualPolicy::default_policy(),
            drawdown: DrawdownPolicy::default_policy(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory.
    /// Only the living-cost base table is file-backed; the accrual and
    /// drawdown policies stay at their documented defaults.
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let rows = loader::load_living_cost_base(path)?;

        Ok(Self {
            living_cost: LivingCostTable::from_loaded(&rows),
            accrual: DbAccrualPolicy::default_policy(),
            drawdown: DrawdownPolicy::default_policy(),
        })
    }
}
