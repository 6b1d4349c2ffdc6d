//! Fuzzing entry points for the eccstudio-core decoders
//!
//! Each function takes arbitrary bytes and must never panic. To use with
//! cargo-fuzz, call them from a `fuzz_target!`:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_viterbi

use eccstudio_core::{convolutional, hamming, reed_solomon::ReedSolomonCodec, BitString};

/// Unpack bytes MSB first into a bit string
fn to_bits(data: &[u8]) -> BitString {
    data.iter()
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect()
}

pub fn fuzz_hamming_decode(data: &[u8]) {
    // Every 7-bit window is a candidate codeword
    let bits = to_bits(data);
    let mut window = BitString::new();
    for bit in bits.iter() {
        window.push(bit);
        if window.len() == 7 {
            let decoded = hamming::decode(&window);
            assert!(matches!(decoded, Ok(ref d) if d.error_position <= 7));
            window = BitString::new();
        }
    }
    let _ = hamming::decode(&window);
}

pub fn fuzz_viterbi(data: &[u8]) {
    let bits = to_bits(data);
    if let Ok(decoded) = convolutional::decode(&bits) {
        assert_eq!(decoded.len() * 2, bits.len());
    }
}

pub fn fuzz_rs_decode(data: &[u8]) {
    let rs = ReedSolomonCodec::default();
    let decoded = rs.decode(data);
    assert_eq!(decoded.text.is_some(), decoded.error.is_none());
}

pub fn fuzz_binary_parse(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(bits) = BitString::parse(text) {
            assert_eq!(bits.to_string(), text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fuzz_empty() {
        fuzz_hamming_decode(&[]);
        fuzz_viterbi(&[]);
        fuzz_rs_decode(&[]);
        fuzz_binary_parse(&[]);
    }

    #[test]
    fn test_fuzz_hamming_all_bytes() {
        let all: Vec<u8> = (0..=255).collect();
        fuzz_hamming_decode(&all);
    }

    #[test]
    fn test_fuzz_viterbi_random() {
        fuzz_viterbi(&[0x12, 0x34, 0x56, 0x78]);
        fuzz_viterbi(&[0xFF; 256]);
    }

    #[test]
    fn test_fuzz_rs_decode_fixed() {
        fuzz_rs_decode(&[0xFF; 40]);
        fuzz_rs_decode(&[0x00; 300]);
        fuzz_rs_decode(b"short");
    }

    #[test]
    fn test_fuzz_binary_parse() {
        fuzz_binary_parse(b"0101");
        fuzz_binary_parse(b"01x1");
        fuzz_binary_parse(&[0xC3, 0x28]);
    }

    proptest! {
        #[test]
        fn prop_decoders_never_panic(data in prop::collection::vec(any::<u8>(), 0..128)) {
            fuzz_hamming_decode(&data);
            fuzz_viterbi(&data);
            fuzz_rs_decode(&data);
            fuzz_binary_parse(&data);
        }

        #[test]
        fn prop_rs_decode_never_panics_across_blocks(
            data in prop::collection::vec(any::<u8>(), 0..600)
        ) {
            fuzz_rs_decode(&data);
        }
    }
}
