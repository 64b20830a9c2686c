//! Base living-cost table by household size

/// Base monthly living cost (man-won) keyed by household size.
///
/// Values are policy constants for households of 2, 3, and 4 people; any
/// other size fails input validation before this table is consulted.
#[derive(Debug, Clone)]
pub struct LivingCostTable {
    /// Monthly base cost for household sizes 2, 3, 4 (in that order)
    costs: [f64; 3],
}

impl LivingCostTable {
    /// Default policy table: 220 / 280 / 340 man-won per month
    pub fn default_policy() -> Self {
        Self {
            costs: [220.0, 280.0, 340.0],
        }
    }

    /// Create from loaded CSV data (pairs of household size, monthly cost).
    /// Sizes outside 2..=4 are ignored; missing sizes keep the defaults.
    pub fn from_loaded(rows: &[(u8, f64)]) -> Self {
        let mut table = Self::default_policy();
        for &(size, cost) in rows {
            if (2..=4).contains(&size) {
                table.costs[(size - 2) as usize] = cost;
            }
        }
        table
    }

    /// Base monthly cost for a validated household size
    pub fn base_monthly(&self, family_size: u8) -> f64 {
        debug_assert!((2..=4).contains(&family_size));
        self.costs[(family_size.clamp(2, 4) - 2) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_larger_household_costs_more() {
        let table = LivingCostTable::default_policy();
        assert!(table.base_monthly(2) < table.base_monthly(3));
        assert!(table.base_monthly(3) < table.base_monthly(4));
    }

    #[test]
    fn test_from_loaded_overrides_and_ignores_junk() {
        let table = LivingCostTable::from_loaded(&[(3, 300.0), (9, 999.0)]);
        assert_eq!(table.base_monthly(2), 220.0);
        assert_eq!(table.base_monthly(3), 300.0);
        assert_eq!(table.base_monthly(4), 340.0);
    }
}
