//! (7,4) Hamming code
//!
//! Codeword layout (1-indexed positions):
//!
//! ```text
//! 1   2   3   4   5   6   7
//! p1  p2  d0  p3  d1  d2  d3
//! ```
//!
//! with p1 = d0^d1^d3, p2 = d0^d2^d3 and p3 = d1^d2^d3. The syndrome read from
//! a received word is the 1-indexed position of a single flipped bit, or 0.
//!
//! The code has minimum distance 3. Two or more flipped bits produce a
//! syndrome that points at the wrong position, and decoding silently returns
//! wrong data. Callers that know the original data compare against it.

use crate::bits::BitString;
use crate::codec::Codec;
use crate::constants::{HAMMING_CODE_BITS, HAMMING_DATA_BITS};
use crate::error::EccError;
use crate::types::{Decoded, Diagnostic, Scheme};
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::trace;

/// Result of decoding one Hamming codeword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HammingDecoded {
    /// The four recovered data bits
    pub data: BitString,

    /// 1-indexed position that was corrected, 0 if the syndrome was clean
    pub error_position: u8,
}

/// Encode exactly four data bits into a 7-bit codeword
pub fn encode(data: &BitString) -> Result<BitString, EccError> {
    check_len(data, HAMMING_DATA_BITS)?;

    let d = [data.bit(0), data.bit(1), data.bit(2), data.bit(3)];
    let p1 = d[0] ^ d[1] ^ d[3];
    let p2 = d[0] ^ d[2] ^ d[3];
    let p3 = d[1] ^ d[2] ^ d[3];

    Ok([p1, p2, d[0], p3, d[1], d[2], d[3]].into_iter().collect())
}

/// Decode a 7-bit codeword, correcting at most one flipped bit
pub fn decode(received: &BitString) -> Result<HammingDecoded, EccError> {
    check_len(received, HAMMING_CODE_BITS)?;

    let error_position = syndrome(received);
    let mut corrected = received.clone();
    if error_position != 0 {
        #[cfg(feature = "logging")]
        trace!("Hamming syndrome points at position {}", error_position);

        corrected.toggle(usize::from(error_position) - 1)?;
    }

    let data = [2, 4, 5, 6].into_iter().map(|i| corrected.bit(i)).collect();
    Ok(HammingDecoded {
        data,
        error_position,
    })
}

/// Compute the syndrome of a 7-bit word as a 1-indexed error position
pub fn syndrome(received: &BitString) -> u8 {
    let e = |i: usize| u8::from(received.bit(i));
    let s1 = e(0) ^ e(2) ^ e(4) ^ e(6);
    let s2 = e(1) ^ e(2) ^ e(5) ^ e(6);
    let s3 = e(3) ^ e(4) ^ e(5) ^ e(6);
    s1 + 2 * s2 + 4 * s3
}

/// Parse and encode a 4-character binary string
pub fn encode_str(data: &str) -> Result<BitString, EccError> {
    encode(&BitString::parse_exact(data, HAMMING_DATA_BITS)?)
}

/// Parse and decode a 7-character binary string
pub fn decode_str(received: &str) -> Result<HammingDecoded, EccError> {
    decode(&BitString::parse_exact(received, HAMMING_CODE_BITS)?)
}

/// [`Codec`] adapter for the (7,4) Hamming code
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingCodec;

impl Codec for HammingCodec {
    type Input = BitString;
    type Encoded = BitString;

    fn scheme(&self) -> Scheme {
        Scheme::Hamming
    }

    fn parse_input(&self, raw: &str) -> Result<BitString, EccError> {
        BitString::parse_exact(raw, HAMMING_DATA_BITS)
    }

    fn encode(&self, input: &BitString) -> Result<BitString, EccError> {
        encode(input)
    }

    fn decode(&self, received: &BitString) -> Result<Decoded<BitString>, EccError> {
        let decoded = decode(received)?;
        Ok(Decoded::recovered(
            decoded.data,
            Diagnostic::ErrorPosition {
                position: decoded.error_position,
            },
        ))
    }

    fn render(&self, encoded: &BitString) -> String {
        encoded.to_string()
    }
}

fn check_len(bits: &BitString, expected: usize) -> Result<(), EccError> {
    if bits.len() != expected {
        return Err(EccError::InvalidLength {
            expected,
            actual: bits.len(),
        });
    }
    Ok(())
}
