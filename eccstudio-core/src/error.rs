//! Error types for ECC Studio operations

/// Errors that can occur while encoding, corrupting or decoding codewords
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EccError {
    /// Input has the wrong number of symbols for the scheme
    #[error("Invalid input length: expected {expected}, got {actual}")]
    InvalidLength {
        /// The number of symbols expected.
        expected: usize,
        /// The number of symbols actually supplied.
        actual: usize,
    },

    /// Input contains a character other than '0' or '1'
    #[error("Non-binary character {found:?} at position {position}")]
    NonBinary {
        /// Zero-based character position.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Convolutional codewords are made of 2-bit segments
    #[error("Encoded length {0} is not a multiple of 2")]
    OddLength(usize),

    /// Nothing to encode or decode
    #[error("Input is empty")]
    EmptyInput,

    /// Flip position outside the codeword
    #[error("Index {index} out of range for codeword of length {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Codeword length.
        len: usize,
    },

    /// More distinct flips requested than there are positions
    #[error("Cannot flip {requested} distinct positions in a codeword of length {available}")]
    TooManyFlips {
        /// Number of flips requested.
        requested: usize,
        /// Number of positions available.
        available: usize,
    },

    /// Flip probability outside [0, 1]
    #[error("Flip probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    /// Reed-Solomon parity count the codec cannot support
    #[error("Invalid parity symbol count {0}: must be between 1 and 254")]
    InvalidParity(usize),

    /// Operands of a bitwise operation differ in length
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Left operand length.
        left: usize,
        /// Right operand length.
        right: usize,
    },

    /// Errors exceed the correction capacity of the code
    #[error("Uncorrectable: {0}")]
    Uncorrectable(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EccError {
    /// True for every error raised by input validation, before any codec work
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, EccError::Uncorrectable(_) | EccError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EccError::InvalidLength {
            expected: 4,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Invalid input length: expected 4, got 5");

        let err = EccError::NonBinary {
            position: 2,
            found: 'x',
        };
        assert_eq!(err.to_string(), "Non-binary character 'x' at position 2");
    }

    #[test]
    fn test_classification() {
        assert!(EccError::EmptyInput.is_invalid_input());
        assert!(EccError::OddLength(3).is_invalid_input());
        assert!(!EccError::Uncorrectable("too many errors".into()).is_invalid_input());
    }
}
