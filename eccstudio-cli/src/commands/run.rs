use crate::NoiseOverride;
use anyhow::{Context, Result};
use colored::*;
use eccstudio_core::{
    reed_solomon::ReedSolomonCodec, NoiseKind, Scheme, Studio, StudioConfig, TrialReport,
};
use tracing::info;

pub fn execute(
    config: &StudioConfig,
    scheme: Scheme,
    input: &str,
    noise: NoiseKind,
    noise_override: NoiseOverride,
) -> Result<TrialReport> {
    info!("Running {} on {:?}", scheme, input);

    let studio = Studio::new(config.clone()).context("Failed to set up codecs")?;
    let mut rng = crate::make_rng(config);
    let plan = noise_override.plan(noise);

    let report = studio
        .run(scheme, input, &plan, &mut rng)
        .with_context(|| format!("Invalid input for {}", scheme))?;

    println!();
    print_report(&report);

    if scheme == Scheme::ReedSolomon {
        let codeword = ReedSolomonCodec::new(config.rs_parity)?.encode(input)?;
        println!("Codeword (hex):     {}", hex::encode(&codeword));
    }

    println!(
        "Success Rate:       {:.2}%",
        studio.stats().success_rate(scheme)
    );

    Ok(report)
}

/// Print a trial report with a colored status line
pub fn print_report(report: &TrialReport) {
    let text = report.to_string();
    // Everything but the final status line prints as-is
    let body = text.rsplit_once('\n').map_or("", |(body, _)| body);
    println!("{}", body);
    if report.success {
        println!("Status:             {} {}", "✓".green(), report.status().green());
    } else {
        println!("Status:             {} {}", "✗".red(), report.status().red());
    }
}
