//! Library entry for eccstudio-cli used by integration tests and embedding.

pub mod commands;

use anyhow::{Context, Result};
use eccstudio_core::{NoiseKind, NoiseModel, NoisePlan, Scheme, StudioConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use tracing::info;

// Re-export commands for convenience
pub use commands::*;

/// Scheme selector on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemeArg {
    /// (7,4) Hamming code, exactly 4 binary digits
    Hamming,
    /// Rate 1/2 convolutional code, any binary string
    Convolutional,
    /// Reed-Solomon, any text
    ReedSolomon,
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Hamming => Scheme::Hamming,
            SchemeArg::Convolutional => Scheme::Convolutional,
            SchemeArg::ReedSolomon => Scheme::ReedSolomon,
        }
    }
}

/// Noise family selector on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum NoiseArg {
    /// Distinct random flips
    Random,
    /// Contiguous burst
    Burst,
    /// Independent per-position flips
    Gaussian,
}

impl From<NoiseArg> for NoiseKind {
    fn from(arg: NoiseArg) -> Self {
        match arg {
            NoiseArg::Random => NoiseKind::Random,
            NoiseArg::Burst => NoiseKind::Burst,
            NoiseArg::Gaussian => NoiseKind::Gaussian,
        }
    }
}

/// Explicit noise intensity; at most one is set
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NoiseOverride {
    /// Flip exactly this many random positions
    pub flips: Option<usize>,
    /// Flip a contiguous run of this length
    pub burst: Option<usize>,
    /// Flip each position with this probability
    pub probability: Option<f64>,
}

impl NoiseOverride {
    /// Fixed model if an intensity was given, otherwise adaptive noise of `kind`
    pub fn plan(&self, kind: NoiseKind) -> NoisePlan {
        if let Some(count) = self.flips {
            NoisePlan::Fixed(NoiseModel::RandomFlip { count })
        } else if let Some(length) = self.burst {
            NoisePlan::Fixed(NoiseModel::Burst { length })
        } else if let Some(probability) = self.probability {
            NoisePlan::Fixed(NoiseModel::Gaussian { probability })
        } else {
            NoisePlan::Adaptive(kind)
        }
    }
}

/// Load configuration from an optional JSON file and apply the seed override
pub fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<StudioConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: StudioConfig = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            info!("Loaded configuration from {}", path.display());
            config
        }
        None => StudioConfig::default(),
    };

    if seed.is_some() {
        config.seed = seed;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Random generator for a run, seeded when the configuration asks for it
pub fn make_rng(config: &StudioConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
