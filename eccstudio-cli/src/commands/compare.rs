use super::run::print_report;
use anyhow::{Context, Result};
use colored::*;
use eccstudio_core::{
    simulation::{Comparison, ComparisonOutcome},
    NoiseKind, Studio, StudioConfig,
};
use tracing::info;

pub fn execute(config: &StudioConfig, input: &str, noise: NoiseKind) -> Result<Comparison> {
    info!("Comparing all schemes on {:?} with {}", input, noise);

    let studio = Studio::new(config.clone()).context("Failed to set up codecs")?;
    let mut rng = crate::make_rng(config);

    let comparison = studio
        .compare_all(input, &noise.into(), &mut rng)
        .context("Comparison failed")?;

    println!("\n=== Comparison Mode ===");
    for row in &comparison.rows {
        println!();
        match &row.outcome {
            ComparisonOutcome::Ran { report } => print_report(report),
            ComparisonOutcome::Skipped { reason } => {
                println!("[{}] {} ({})", row.scheme, "skipped".yellow(), reason)
            }
        }
    }

    println!("\n=== Summary ===");
    for row in &comparison.rows {
        let verdict = match &row.outcome {
            ComparisonOutcome::Ran { report } if report.success => "✓".green(),
            ComparisonOutcome::Ran { .. } => "✗".red(),
            ComparisonOutcome::Skipped { .. } => "-".normal(),
        };
        println!("{:<16} {}", row.scheme.to_string(), verdict);
    }

    Ok(comparison)
}
