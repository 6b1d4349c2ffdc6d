use anyhow::{Context, Result};
use colored::*;
use eccstudio_core::{
    simulation::BattleReport, stats::StatsSnapshot, NoiseKind, Studio, StudioConfig,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

/// What `battle --output` writes
#[derive(Serialize, Deserialize)]
pub struct BattleOutput {
    /// Per-scheme battle scores
    pub report: BattleReport,
    /// Tracker counters after the battle
    pub stats: StatsSnapshot,
}

pub fn execute(
    config: &StudioConfig,
    rounds: Option<usize>,
    noise: NoiseKind,
    output: Option<&str>,
    progress: bool,
) -> Result<BattleReport> {
    let mut settings = config.battle.clone();
    if let Some(rounds) = rounds {
        settings.rounds = rounds;
    }
    info!(
        "Battle: {} rounds, {} samples, {} worker(s)",
        settings.rounds,
        settings.samples.len(),
        settings.workers
    );

    let studio = Studio::new(config.clone()).context("Failed to set up codecs")?;
    let mut rng = crate::make_rng(config);

    let bar = if progress {
        let bar = ProgressBar::new(settings.rounds as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} rounds")
                .context("Invalid progress template")?
                .progress_chars("=> "),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let report = studio
        .battle(&settings, noise, &mut rng, &|| bar.inc(1))
        .context("Battle failed")?;
    bar.finish_and_clear();

    println!("\n=== Battle Results ===");
    println!("Rounds:             {}", report.rounds);
    println!("Noise:              {}", report.noise);
    println!();
    for score in &report.scores {
        let accuracy = format!("{:>6.2}%", score.accuracy);
        let accuracy = if score.success_rate >= 80.0 {
            accuracy.green()
        } else if score.success_rate >= 50.0 {
            accuracy.yellow()
        } else {
            accuracy.red()
        };
        println!(
            "{:<16} {}  ({}/{} trials)",
            score.scheme.to_string(),
            accuracy,
            score.successes,
            score.trials
        );
    }

    if let Some(output_path) = output {
        let out = BattleOutput {
            report: report.clone(),
            stats: studio.stats().snapshot(),
        };
        let json = serde_json::to_string_pretty(&out)
            .with_context(|| "Failed to serialize battle report")?;
        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("Battle report written to: {}", output_path);
    }

    Ok(report)
}
