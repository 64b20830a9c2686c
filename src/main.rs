//! Pension Strategy CLI
//!
//! Command-line interface for running a retirement projection on one profile

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pension_strategy::{
    projection::{ProjectionConfig, ProjectionEngine},
    Assumptions, UserInput,
};

#[derive(Parser, Debug)]
#[command(name = "pension_strategy", about = "DB-vs-DC retirement projection")]
struct Args {
    /// Path to a profile JSON file (camelCase web schema). Uses the default
    /// profile when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory with assumption CSV files. Uses the documented in-memory
    /// defaults when omitted.
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Write the full year-by-year projection to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Override the projection start year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = match args.year {
        Some(year) => ProjectionConfig::new(year),
        None => ProjectionConfig::for_today(),
    };

    let input = match &args.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading profile {}", path.display()))?;
            serde_json::from_str::<UserInput>(&raw)
                .with_context(|| format!("parsing profile {}", path.display()))?
        }
        None => UserInput::default_profile(config.current_year),
    };

    let assumptions = match &args.assumptions {
        Some(path) => Assumptions::from_csv_path(path)
            .map_err(|e| anyhow::anyhow!("loading assumptions from {}: {e}", path.display()))?,
        None => Assumptions::default_policy(),
    };

    println!("Pension Strategy v0.1.0");
    println!("=======================\n");
    println!("Profile: born {}, retiring at {}, family of {}",
        input.birth_year, input.retirement_age, input.family_size);
    println!("  Monthly income: {:.0} man-won", input.current_monthly_income);
    println!("  Wage growth: {:.1}% / inflation: {:.1}%",
        input.expected_wage_growth_rate, input.inflation_rate);
    println!("  Scenarios: {}", input.scenarios.len());
    println!();

    let engine = ProjectionEngine::new(assumptions, config);
    let result = engine.project(&input)?;

    println!("Projection ({} years):", result.projections.len());
    println!("{:>6} {:>4} {:>10} {:>10} {:>10} {:>12}",
        "Year", "Age", "Salary", "Cost/mo", "Surplus", "DB Value");
    println!("{}", "-".repeat(58));

    for row in result.projections.iter().take(15) {
        println!("{:>6} {:>4} {:>10.1} {:>10.1} {:>10.1} {:>12.1}",
            row.year,
            row.age,
            row.salary,
            row.monthly_living_cost,
            row.investable_surplus,
            row.db_value,
        );
    }
    if result.projections.len() > 15 {
        println!("... ({} more years)", result.projections.len() - 15);
    }

    if let Some(csv_path) = &args.csv {
        let mut file = File::create(csv_path)
            .with_context(|| format!("creating {}", csv_path.display()))?;

        write!(file, "Year,Age,Salary,MonthlyLivingCost,LivingCost,InvestableSurplus,DbValue")?;
        for scenario in &input.scenarios {
            write!(file, ",Scenario{}", scenario.id)?;
        }
        writeln!(file)?;

        for row in &result.projections {
            write!(file, "{},{},{:.4},{:.4},{:.4},{:.4},{:.4}",
                row.year,
                row.age,
                row.salary,
                row.monthly_living_cost,
                row.living_cost,
                row.investable_surplus,
                row.db_value,
            )?;
            for value in &row.scenario_values {
                write!(file, ",{:.4}", value)?;
            }
            writeln!(file)?;
        }

        println!("\nFull results written to: {}", csv_path.display());
    }

    let summary = &result.summary;
    println!("\nSummary:");
    println!("  Final working year: {}", summary.final_year);
    println!("  Years worked: {}", summary.total_years_worked);
    println!("  Final salary: {:.1} man-won/mo", summary.final_salary);
    println!("  Final DB balance: {:.1} ({:.1} after tax)",
        summary.final_db, summary.final_db_after_tax);
    println!("  Surplus invested: {:.1}", summary.total_invested_surplus);
    println!("  Retirement span: {} years", summary.post_retirement_years);

    println!("\nScenarios:");
    for s in &summary.scenarios {
        println!("  [{}] {} (switch {}, avg {:.1}%): {:.1} after tax, depletes {}",
            s.id, s.label, s.switch_year, s.avg_return_rate,
            s.final_amount_after_tax, s.depletion_age);
    }

    println!("\nBest option: [{}] {}", summary.best_option_id, summary.best_option);

    Ok(())
}
