//! Code parameters and limits shared by the codecs

/// Data bits per Hamming block
pub const HAMMING_DATA_BITS: usize = 4;

/// Bits per Hamming codeword (4 data + 3 parity)
pub const HAMMING_CODE_BITS: usize = 7;

/// Constraint length of the convolutional code
pub const CONV_CONSTRAINT_LENGTH: usize = 3;

/// Number of encoder states (2^(K-1))
pub const CONV_NUM_STATES: usize = 1 << (CONV_CONSTRAINT_LENGTH - 1);

/// Output bits per input bit
pub const CONV_OUTPUTS_PER_INPUT: usize = 2;

/// Generator polynomial G1 = 111 (binary), newest bit in the MSB
pub const CONV_G1: u8 = 0b111;

/// Generator polynomial G2 = 101 (binary), newest bit in the MSB
pub const CONV_G2: u8 = 0b101;

/// Default number of Reed-Solomon parity bytes per block
pub const DEFAULT_RS_PARITY: usize = 10;

/// Maximum Reed-Solomon block length over GF(2^8)
pub const RS_BLOCK_SIZE: usize = 255;

/// Largest parity count that still leaves room for one data byte
pub const MAX_RS_PARITY: usize = RS_BLOCK_SIZE - 1;

/// Codewords up to this length get the gentle adaptive noise settings
pub const SHORT_CODEWORD_LEN: usize = 10;

/// Correction rate above which a recommendation mentions past performance
pub const HIGH_CORRECTION_RATE: f64 = 80.0;

/// Default number of battle-mode rounds
pub const DEFAULT_BATTLE_ROUNDS: usize = 100;

/// Sample inputs used by battle mode when none are configured
pub const DEFAULT_BATTLE_SAMPLES: [&str; 8] = [
    "1101", "1010", "hello", "0110", "world", "1110", "0011", "data",
];
