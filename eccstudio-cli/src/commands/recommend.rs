use anyhow::{Context, Result};
use colored::*;
use eccstudio_core::{simulation::Recommendation, Studio, StudioConfig};
use tracing::info;

pub fn execute(config: &StudioConfig, input: &str) -> Result<Recommendation> {
    info!("Recommending a scheme for {:?}", input);

    let studio = Studio::new(config.clone()).context("Failed to set up codecs")?;
    let rec = studio.recommend(input).context("Cannot recommend a scheme")?;

    println!("\n=== Recommendation ===");
    println!("Recommended ECC:    {}", rec.scheme.to_string().cyan().bold());
    println!("Reason:             {}", rec.reason);

    Ok(rec)
}
