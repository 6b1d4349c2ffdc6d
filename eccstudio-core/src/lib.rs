//! # ECC Studio Core
//!
//! Three error-correcting codes, a synthetic noisy channel and the bookkeeping
//! needed to compare them side by side.
//!
//! ## Modules
//!
//! - `constants`: Code parameters and defaults
//! - `error`: The crate-wide error type
//! - `bits`: Binary strings backed by a packed bit vector
//! - `types`: Scheme identifiers and decode results
//! - `codec`: The encode/decode contract every scheme implements
//! - `hamming`: (7,4) Hamming code
//! - `convolutional`: Rate 1/2, K=3 convolutional code with Viterbi decoding
//! - `reed_solomon`: Reed-Solomon over GF(2^8)
//! - `noise`: Single, random, burst and Gaussian-style corruption
//! - `stats`: Thread-safe per-scheme success counters
//! - `config`: Studio configuration
//! - `simulation`: Trials, comparisons, battle mode and recommendations

#![warn(missing_docs)]

pub mod bits;
pub mod codec;
pub mod config;
pub mod constants;
pub mod convolutional;
pub mod error;
pub mod hamming;
pub mod noise;
pub mod reed_solomon;
pub mod simulation;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use bits::BitString;
pub use codec::Codec;
pub use config::{BattleSettings, StudioConfig};
pub use error::EccError;
pub use noise::{inject_noise, NoiseKind, NoiseModel};
pub use simulation::{run_trial, NoisePlan, Studio, TrialReport};
pub use stats::StatsTracker;
pub use types::{Decoded, Diagnostic, Scheme};

/// Result type alias for ECC Studio operations
pub type Result<T> = core::result::Result<T, EccError>;
