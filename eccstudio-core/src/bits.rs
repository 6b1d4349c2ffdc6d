//! Compact binary strings used as Hamming and convolutional data and codewords

use crate::error::EccError;
use bitvec::prelude::*;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered sequence of bits, parsed from and rendered as `'0'`/`'1'` text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitString(BitVec<u8, Msb0>);

impl BitString {
    /// Create an empty bit string
    pub fn new() -> Self {
        Self(BitVec::new())
    }

    /// Create a bit string of `len` zero bits
    pub fn zeros(len: usize) -> Self {
        Self(BitVec::repeat(false, len))
    }

    /// Parse a string of `'0'`/`'1'` characters
    ///
    /// Any other character (including whitespace) is rejected with the
    /// position where it was found.
    pub fn parse(text: &str) -> Result<Self, EccError> {
        let mut bits = BitVec::with_capacity(text.len());
        for (position, c) in text.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(EccError::NonBinary { position, found }),
            }
        }
        Ok(Self(bits))
    }

    /// Parse a string that must contain exactly `expected` bits
    pub fn parse_exact(text: &str, expected: usize) -> Result<Self, EccError> {
        let bits = Self::parse(text)?;
        if bits.len() != expected {
            return Err(EccError::InvalidLength {
                expected,
                actual: bits.len(),
            });
        }
        Ok(bits)
    }

    /// True if every character of `text` is a binary digit (and there is at least one)
    pub fn is_binary(text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| c == '0' || c == '1')
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no bits
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bit at `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn bit(&self, index: usize) -> bool {
        self.0[index]
    }

    /// Bit at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).map(|b| *b)
    }

    /// Append a bit
    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    /// Invert the bit at `index`
    pub fn toggle(&mut self, index: usize) -> Result<(), EccError> {
        let len = self.len();
        let current = self
            .get(index)
            .ok_or(EccError::IndexOutOfRange { index, len })?;
        self.0.set(index, !current);
        Ok(())
    }

    /// Iterate over the bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().by_vals()
    }

    /// Borrow the underlying bit slice
    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.0
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.0.count_ones()
    }

    /// Bitwise XOR of two equal-length strings
    pub fn xor(&self, other: &BitString) -> Result<BitString, EccError> {
        if self.len() != other.len() {
            return Err(EccError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a ^ b).collect())
    }

    /// Number of positions at which two equal-length strings differ
    pub fn hamming_distance(&self, other: &BitString) -> Result<usize, EccError> {
        Ok(self.xor(other)?.count_ones())
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for BitString {
    type Err = EccError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Serialize for BitString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BitString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let bits = BitString::parse("1011").unwrap();
        assert_eq!(bits.len(), 4);
        assert!(bits.bit(0));
        assert!(!bits.bit(1));
        assert_eq!(bits.to_string(), "1011");
    }

    #[test]
    fn test_parse_rejects_non_binary() {
        let err = BitString::parse("10a1").unwrap_err();
        assert_eq!(
            err,
            EccError::NonBinary {
                position: 2,
                found: 'a'
            }
        );
        assert!(BitString::parse(" 101").is_err());
    }

    #[test]
    fn test_parse_exact_length() {
        assert!(BitString::parse_exact("1010", 4).is_ok());
        assert_eq!(
            BitString::parse_exact("101", 4).unwrap_err(),
            EccError::InvalidLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_is_binary() {
        assert!(BitString::is_binary("0110"));
        assert!(!BitString::is_binary(""));
        assert!(!BitString::is_binary("hello"));
    }

    #[test]
    fn test_xor_and_distance() {
        let a = BitString::parse("1100").unwrap();
        let b = BitString::parse("1010").unwrap();
        assert_eq!(a.xor(&b).unwrap().to_string(), "0110");
        assert_eq!(a.hamming_distance(&b).unwrap(), 2);

        let short = BitString::parse("1").unwrap();
        assert!(a.xor(&short).is_err());
    }

    #[test]
    fn test_toggle() {
        let mut bits = BitString::zeros(3);
        bits.toggle(1).unwrap();
        assert_eq!(bits.to_string(), "010");
        assert_eq!(
            bits.toggle(3).unwrap_err(),
            EccError::IndexOutOfRange { index: 3, len: 3 }
        );
    }
}
