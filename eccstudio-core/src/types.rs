//! Core types shared by the codecs, statistics and simulation layers

use crate::error::EccError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// The error-correcting schemes the studio knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scheme {
    /// (7,4) Hamming block code
    Hamming,
    /// Rate 1/2, K=3 convolutional code with Viterbi decoding
    Convolutional,
    /// Reed-Solomon over GF(2^8)
    ReedSolomon,
}

impl Scheme {
    /// All schemes in display order
    pub const ALL: [Scheme; 3] = [Scheme::Hamming, Scheme::Convolutional, Scheme::ReedSolomon];

    /// Human-readable name used in reports and as the statistics key
    pub const fn name(&self) -> &'static str {
        match self {
            Scheme::Hamming => "Hamming",
            Scheme::Convolutional => "Convolutional",
            Scheme::ReedSolomon => "Reed-Solomon",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = EccError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hamming" => Ok(Scheme::Hamming),
            "convolutional" | "conv" => Ok(Scheme::Convolutional),
            "reed-solomon" | "reed_solomon" | "rs" => Ok(Scheme::ReedSolomon),
            other => Err(EccError::Config(format!("unknown scheme: {}", other))),
        }
    }
}

/// Scheme-specific detail about a decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Hamming: 1-indexed corrected position, 0 for a clean syndrome
    ErrorPosition {
        /// Position reported by the syndrome
        position: u8,
    },

    /// Viterbi: Hamming distance of the winning path
    PathMetric {
        /// Cumulative path metric
        metric: u32,
    },

    /// Reed-Solomon: bytes repaired
    CorrectedSymbols {
        /// Repaired byte count
        count: usize,
    },

    /// Decoding gave up
    Failure {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ErrorPosition { position: 0 } => f.write_str("Error Corrected At: None"),
            Diagnostic::ErrorPosition { position } => {
                write!(f, "Error Corrected At: {}", position)
            }
            Diagnostic::PathMetric { metric } => write!(f, "Path Metric: {}", metric),
            Diagnostic::CorrectedSymbols { count } => write!(f, "Symbols Corrected: {}", count),
            Diagnostic::Failure { reason } => write!(f, "Error: {}", reason),
        }
    }
}

/// Result of one decode call
///
/// Built fresh by every decode and never modified afterwards. `value` is
/// `None` only when the codec itself reports failure; a wrong but
/// syntactically valid decode still carries a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded<T> {
    /// The recovered input, if any
    pub value: Option<T>,

    /// Scheme-specific detail
    pub diagnostic: Diagnostic,
}

impl<T> Decoded<T> {
    /// A decode that produced a value
    pub fn recovered(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value: Some(value),
            diagnostic,
        }
    }

    /// A decode the codec itself rejected
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            value: None,
            diagnostic: Diagnostic::Failure {
                reason: reason.into(),
            },
        }
    }
}

impl<T: PartialEq> Decoded<T> {
    /// True if the decoded value equals the ground truth
    pub fn matches(&self, original: &T) -> bool {
        self.value.as_ref() == Some(original)
    }
}
