//! Synthetic channel noise
//!
//! Every injector is pure: it takes a codeword by reference and returns a new
//! codeword of the same length. Randomness comes from the caller's generator so
//! runs can be seeded and concurrent trials never share one.
//!
//! A "position" is one bit of a [`BitString`] and one byte of a Reed-Solomon
//! [`Bytes`] codeword. Flipping a byte inverts all eight of its bits, so one
//! injected error is always exactly one symbol error.

use crate::bits::BitString;
use crate::constants::SHORT_CODEWORD_LEN;
use crate::error::EccError;
use bytes::{Bytes, BytesMut};
use core::fmt;
use core::str::FromStr;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::trace;

/// A codeword that noise can be applied to
pub trait Corruptible: Clone {
    /// Number of independently flippable positions
    fn symbol_count(&self) -> usize;

    /// Copy of `self` with every listed position flipped once
    ///
    /// Positions must be distinct and in range.
    fn with_flips(&self, positions: &[usize]) -> Self;

    /// Positions at which `self` and `other` differ
    fn differing_positions(&self, other: &Self) -> Vec<usize>;
}

impl Corruptible for BitString {
    fn symbol_count(&self) -> usize {
        self.len()
    }

    fn with_flips(&self, positions: &[usize]) -> Self {
        debug_assert!(
            positions.iter().all(|&p| p < self.len()),
            "flip position out of range for {} bits: {:?}",
            self.len(),
            positions
        );
        let mut out = self.clone();
        for &p in positions {
            let _ = out.toggle(p);
        }
        out
    }

    fn differing_positions(&self, other: &Self) -> Vec<usize> {
        self.iter()
            .zip(other.iter())
            .enumerate()
            .filter_map(|(i, (a, b))| (a != b).then_some(i))
            .collect()
    }
}

impl Corruptible for Bytes {
    fn symbol_count(&self) -> usize {
        self.len()
    }

    fn with_flips(&self, positions: &[usize]) -> Self {
        debug_assert!(
            positions.iter().all(|&p| p < self.len()),
            "flip position out of range for {} bytes: {:?}",
            self.len(),
            positions
        );
        let mut out = BytesMut::from(&self[..]);
        for &p in positions {
            if let Some(byte) = out.get_mut(p) {
                *byte ^= 0xFF;
            }
        }
        out.freeze()
    }

    fn differing_positions(&self, other: &Self) -> Vec<usize> {
        self.iter()
            .zip(other.iter())
            .enumerate()
            .filter_map(|(i, (a, b))| (a != b).then_some(i))
            .collect()
    }
}

/// How a codeword gets corrupted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum NoiseModel {
    /// Flip one given position
    SingleFlip {
        /// Zero-based position to flip
        index: usize,
    },

    /// Flip `count` distinct positions chosen uniformly at random
    RandomFlip {
        /// Number of positions to flip
        count: usize,
    },

    /// Flip `length` consecutive positions at a random offset
    Burst {
        /// Run length
        length: usize,
    },

    /// Flip every position independently with `probability`
    Gaussian {
        /// Per-position flip probability in [0, 1]
        probability: f64,
    },
}

impl NoiseModel {
    /// Pick the intensity for `kind` from the codeword length
    ///
    /// Codewords of up to 10 positions get one random flip, a 2-long burst or
    /// 10 % flip probability; longer ones get two flips, a 3-long burst or 20 %.
    pub fn adaptive(kind: NoiseKind, codeword_len: usize) -> Self {
        let short = codeword_len <= SHORT_CODEWORD_LEN;
        match kind {
            NoiseKind::Random => NoiseModel::RandomFlip {
                count: if short { 1 } else { 2 },
            },
            NoiseKind::Burst => NoiseModel::Burst {
                length: if short { 2 } else { 3 },
            },
            NoiseKind::Gaussian => NoiseModel::Gaussian {
                probability: if short { 0.1 } else { 0.2 },
            },
        }
    }

    /// The family this model belongs to, if it is one of the random ones
    pub fn kind(&self) -> Option<NoiseKind> {
        match self {
            NoiseModel::SingleFlip { .. } => None,
            NoiseModel::RandomFlip { .. } => Some(NoiseKind::Random),
            NoiseModel::Burst { .. } => Some(NoiseKind::Burst),
            NoiseModel::Gaussian { .. } => Some(NoiseKind::Gaussian),
        }
    }
}

impl fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseModel::SingleFlip { index } => write!(f, "Single Flip (position {})", index),
            NoiseModel::RandomFlip { count } => write!(f, "Random Flip ({} positions)", count),
            NoiseModel::Burst { length } => write!(f, "Burst Error (length {})", length),
            NoiseModel::Gaussian { probability } => {
                write!(f, "Gaussian Noise (p = {:.2})", probability)
            }
        }
    }
}

/// Noise families selectable without fixing an intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Random distinct flips
    Random,
    /// Contiguous burst
    Burst,
    /// Independent per-position flips
    Gaussian,
}

impl NoiseKind {
    /// All kinds in display order
    pub const ALL: [NoiseKind; 3] = [NoiseKind::Random, NoiseKind::Burst, NoiseKind::Gaussian];
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NoiseKind::Random => "Random Flip",
            NoiseKind::Burst => "Burst Error",
            NoiseKind::Gaussian => "Gaussian Noise",
        })
    }
}

impl FromStr for NoiseKind {
    type Err = EccError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "random-flip" | "random_flip" => Ok(NoiseKind::Random),
            "burst" => Ok(NoiseKind::Burst),
            "gaussian" => Ok(NoiseKind::Gaussian),
            other => Err(EccError::Config(format!("unknown noise kind: {}", other))),
        }
    }
}

/// Flip exactly the position `index`
pub fn flip_one<C: Corruptible>(data: &C, index: usize) -> Result<C, EccError> {
    let len = data.symbol_count();
    if index >= len {
        return Err(EccError::IndexOutOfRange { index, len });
    }
    Ok(data.with_flips(&[index]))
}

/// Flip `k` distinct positions sampled uniformly without replacement
pub fn flip_random_k<C, R>(data: &C, k: usize, rng: &mut R) -> Result<C, EccError>
where
    C: Corruptible,
    R: Rng + ?Sized,
{
    let len = data.symbol_count();
    if k > len {
        return Err(EccError::TooManyFlips {
            requested: k,
            available: len,
        });
    }
    let positions = rand::seq::index::sample(rng, len, k).into_vec();

    #[cfg(feature = "logging")]
    trace!("Random flip at positions {:?}", positions);

    Ok(data.with_flips(&positions))
}

/// Flip `length` consecutive positions starting at a uniformly random offset
///
/// A burst longer than the codeword degrades to a single random flip.
pub fn burst_flip<C, R>(data: &C, length: usize, rng: &mut R) -> Result<C, EccError>
where
    C: Corruptible,
    R: Rng + ?Sized,
{
    let len = data.symbol_count();
    if len == 0 {
        return Err(EccError::EmptyInput);
    }
    if length > len {
        return flip_random_k(data, 1, rng);
    }

    let start = rng.gen_range(0..=len - length);
    let positions: Vec<usize> = (start..start + length).collect();

    #[cfg(feature = "logging")]
    trace!("Burst of {} at offset {}", length, start);

    Ok(data.with_flips(&positions))
}

/// Flip each position independently with the given probability
pub fn gaussian_flip<C, R>(data: &C, probability: f64, rng: &mut R) -> Result<C, EccError>
where
    C: Corruptible,
    R: Rng + ?Sized,
{
    if !(0.0..=1.0).contains(&probability) {
        return Err(EccError::InvalidProbability(probability));
    }
    let positions: Vec<usize> = (0..data.symbol_count())
        .filter(|_| rng.gen_bool(probability))
        .collect();

    #[cfg(feature = "logging")]
    trace!("Gaussian noise flipped {} positions", positions.len());

    Ok(data.with_flips(&positions))
}

/// Apply a noise model to a codeword
pub fn inject_noise<C, R>(data: &C, model: &NoiseModel, rng: &mut R) -> Result<C, EccError>
where
    C: Corruptible,
    R: Rng + ?Sized,
{
    match *model {
        NoiseModel::SingleFlip { index } => flip_one(data, index),
        NoiseModel::RandomFlip { count } => flip_random_k(data, count, rng),
        NoiseModel::Burst { length } => burst_flip(data, length, rng),
        NoiseModel::Gaussian { probability } => gaussian_flip(data, probability, rng),
    }
}
