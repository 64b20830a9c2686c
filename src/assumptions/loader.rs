//! CSV-based assumption loader
//!
//! Loads the living-cost base table from CSV files in data/assumptions/

use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to the assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Load the living-cost base table from CSV.
/// Returns Vec<(family_size, monthly_cost)> rows.
pub fn load_living_cost_base(path: &Path) -> Result<Vec<(u8, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("living_cost_base.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let family_size: u8 = record[0].parse()?;
        let monthly_cost: f64 = record[1].parse()?;
        rows.push((family_size, monthly_cost));
    }

    log::debug!("loaded {} living-cost rows from {:?}", rows.len(), path);

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bundled_living_cost_table() {
        let rows = load_living_cost_base(Path::new(DEFAULT_ASSUMPTIONS_PATH))
            .expect("bundled living_cost_base.csv should load");

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().any(|&(size, _)| size == 2));
        assert!(rows.iter().all(|&(_, cost)| cost > 0.0));
    }
}
