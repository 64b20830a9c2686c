//! Documented policy parameters for DB accrual and retirement drawdown.
//!
//! Both are deliberate modeling choices rather than user inputs: the DB
//! accrual follows the statutory severance shape (one month of
//! trailing-average salary per service year) and the drawdown return is a
//! conservative cash-like rate applied while the retirement fund is being
//! spent down.

/// DB severance accrual parameters
#[derive(Debug, Clone)]
pub struct DbAccrualPolicy {
    /// Window (in years, ending at the accrual year) over which monthly
    /// salary is averaged for each year's severance accrual
    pub trailing_years: u32,
}

impl DbAccrualPolicy {
    pub fn default_policy() -> Self {
        Self { trailing_years: 3 }
    }
}

/// Post-retirement drawdown parameters
#[derive(Debug, Clone)]
pub struct DrawdownPolicy {
    /// Annual return (%) earned on the remaining balance between
    /// withdrawals during retirement
    pub annual_return_pct: f64,
}

impl DrawdownPolicy {
    pub fn default_policy() -> Self {
        Self {
            annual_return_pct: 2.0,
        }
    }
}
