//! Per-scenario DC balance simulation

use crate::input::Scenario;

use super::db_track::DbTrack;

/// Simulates one scenario's balance across the projected years.
///
/// The balance tracks the DB baseline through the switch year (the switch
/// itself is a one-time rollover, no tax event). From the following year it
/// compounds at the scenario's segment rate net of the management fee and
/// keeps receiving the shared annual contribution while the member works.
#[derive(Debug)]
pub struct ScenarioSimulator<'a> {
    scenario: &'a Scenario,
    management_fee: f64,
}

impl<'a> ScenarioSimulator<'a> {
    pub fn new(scenario: &'a Scenario, management_fee: f64) -> Self {
        Self {
            scenario,
            management_fee,
        }
    }

    /// Net annual growth rate (%) in effect `years_since_switch` years after
    /// the switch
    fn net_rate(&self, years_since_switch: u32) -> f64 {
        self.scenario.segment_rate(years_since_switch) - self.management_fee
    }

    /// Produce one balance per projected year, aligned with `start_year..`
    pub fn simulate(&self, db: &DbTrack, start_year: i32, end_year: i32) -> Vec<f64> {
        let mut values = Vec::with_capacity((end_year - start_year + 1).max(0) as usize);
        let mut prev = 0.0;

        for year in start_year..=end_year {
            let value = if year <= self.scenario.switch_year {
                db.value(year)
            } else {
                let k = (year - self.scenario.switch_year) as u32;
                prev * (1.0 + self.net_rate(k) / 100.0) + db.contribution(year)
            };
            values.push(value);
            prev = value;
        }

        values
    }
}
