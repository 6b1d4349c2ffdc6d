use anyhow::Result;
use clap::{Parser, Subcommand};
use eccstudio_cli::{commands, load_config, NoiseArg, NoiseOverride, SchemeArg};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "eccstudio")]
#[command(about = "ECC Studio - Hamming, convolutional and Reed-Solomon codes over a noisy channel", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the noise generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode, corrupt and decode with one scheme
    Run {
        /// Scheme to use
        #[arg(short, long, value_enum)]
        scheme: SchemeArg,

        /// Data to protect (binary digits, or text for Reed-Solomon)
        #[arg(short, long)]
        input: String,

        /// Noise family; intensity follows the codeword length
        #[arg(short, long, value_enum, conflicts_with_all = ["flips", "burst", "probability"])]
        noise: Option<NoiseArg>,

        /// Flip exactly this many random positions
        #[arg(long, conflicts_with_all = ["burst", "probability"])]
        flips: Option<usize>,

        /// Flip a contiguous run of this many positions
        #[arg(long, conflicts_with = "probability")]
        burst: Option<usize>,

        /// Flip every position with this probability
        #[arg(long)]
        probability: Option<f64>,
    },

    /// Run every applicable scheme on the same input
    Compare {
        /// Data to protect
        #[arg(short, long)]
        input: String,

        /// Noise family
        #[arg(short, long, value_enum)]
        noise: Option<NoiseArg>,
    },

    /// Play random samples against every scheme and score them
    Battle {
        /// Number of rounds
        #[arg(short, long)]
        rounds: Option<usize>,

        /// Noise family
        #[arg(short, long, value_enum)]
        noise: Option<NoiseArg>,

        /// Output JSON file for the report
        #[arg(short, long)]
        output: Option<String>,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },

    /// Suggest a scheme for the input
    Recommend {
        /// Data to protect
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref(), cli.seed)?;
    let noise_kind = |arg: Option<NoiseArg>| arg.map(Into::into).unwrap_or(config.noise);

    // Execute command
    match cli.command {
        Commands::Run {
            scheme,
            input,
            noise,
            flips,
            burst,
            probability,
        } => commands::run::execute(
            &config,
            scheme.into(),
            &input,
            noise_kind(noise),
            NoiseOverride {
                flips,
                burst,
                probability,
            },
        )
        .map(drop),

        Commands::Compare { input, noise } => {
            commands::compare::execute(&config, &input, noise_kind(noise)).map(drop)
        }

        Commands::Battle {
            rounds,
            noise,
            output,
            progress,
        } => commands::battle::execute(
            &config,
            rounds,
            noise_kind(noise),
            output.as_deref(),
            progress,
        )
        .map(drop),

        Commands::Recommend { input } => commands::recommend::execute(&config, &input).map(drop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("eccstudio").chain(args.iter().copied()))
    }

    #[test]
    fn test_noise_family_conflicts_with_explicit_intensity() {
        for extra in [["--flips", "3"], ["--burst", "2"], ["--probability", "0.1"]] {
            let mut args = vec!["run", "-s", "hamming", "-i", "1011", "--noise", "burst"];
            args.extend(extra);
            let err = parse(&args).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        }
    }

    #[test]
    fn test_noise_family_or_intensity_alone_parse() {
        assert!(parse(&["run", "-s", "hamming", "-i", "1011", "--noise", "burst"]).is_ok());
        assert!(parse(&["run", "-s", "reed-solomon", "-i", "hi", "--flips", "3"]).is_ok());
        assert!(parse(&["run", "-s", "convolutional", "-i", "1011"]).is_ok());
    }
}
