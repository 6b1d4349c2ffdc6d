//! The contract every error-correcting scheme satisfies
//!
//! Orchestration and statistics only talk to [`Codec`], so a trial looks the
//! same whichever scheme runs it.

use crate::error::EccError;
use crate::noise::Corruptible;
use crate::types::{Decoded, Scheme};
use core::fmt;

/// An encode/decode pair over a scheme-specific input and codeword type
pub trait Codec {
    /// What the user supplies and what decoding should give back
    type Input: Clone + PartialEq + fmt::Display;

    /// What travels over the noisy channel
    type Encoded: Corruptible;

    /// Which scheme this is
    fn scheme(&self) -> Scheme;

    /// Validate raw user input for this scheme
    fn parse_input(&self, raw: &str) -> Result<Self::Input, EccError>;

    /// Add redundancy
    fn encode(&self, input: &Self::Input) -> Result<Self::Encoded, EccError>;

    /// Recover the input from a possibly corrupted codeword
    ///
    /// `Err` is reserved for malformed codewords (wrong length, odd length).
    /// A decode that runs but cannot recover the data is an `Ok` with
    /// `value: None`.
    fn decode(&self, received: &Self::Encoded) -> Result<Decoded<Self::Input>, EccError>;

    /// Printable form of a codeword
    fn render(&self, encoded: &Self::Encoded) -> String;
}
