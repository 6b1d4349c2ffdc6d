//! Property-based tests using proptest

use bytes::Bytes;
use eccstudio_core::{
    convolutional,
    hamming,
    noise::{flip_random_k, gaussian_flip, Corruptible},
    reed_solomon::ReedSolomonCodec,
    BitString,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bit_string(max: usize) -> impl Strategy<Value = BitString> {
    prop::collection::vec(any::<bool>(), 1..max).prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_hamming_corrects_any_single_flip(
        data in prop::collection::vec(any::<bool>(), 4),
        flip in 0usize..7
    ) {
        let data: BitString = data.into_iter().collect();
        let mut noisy = hamming::encode(&data).unwrap();
        noisy.toggle(flip).unwrap();
        let decoded = hamming::decode(&noisy).unwrap();
        prop_assert_eq!(decoded.data, data);
        prop_assert_eq!(usize::from(decoded.error_position), flip + 1);
    }

    #[test]
    fn prop_convolutional_round_trip(input in bit_string(256)) {
        let encoded = convolutional::encode(&input).unwrap();
        prop_assert_eq!(encoded.len(), input.len() * 2);
        prop_assert_eq!(convolutional::decode(&encoded).unwrap(), input);
    }

    #[test]
    fn prop_viterbi_never_panics(received in bit_string(512)) {
        // Odd lengths are rejected, even lengths always decode
        let result = convolutional::decode(&received);
        prop_assert_eq!(result.is_ok(), received.len() % 2 == 0);
        if let Ok(bits) = result {
            prop_assert_eq!(bits.len(), received.len() / 2);
        }
    }

    #[test]
    fn prop_random_flip_changes_exactly_k(
        input in bit_string(128),
        seed in any::<u64>(),
        k_frac in 0.0f64..=1.0
    ) {
        let k = (input.len() as f64 * k_frac) as usize;
        let mut rng = StdRng::seed_from_u64(seed);
        let noisy = flip_random_k(&input, k, &mut rng).unwrap();
        prop_assert_eq!(noisy.len(), input.len());
        prop_assert_eq!(input.hamming_distance(&noisy).unwrap(), k);
    }

    #[test]
    fn prop_gaussian_extremes(input in bit_string(128), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(gaussian_flip(&input, 0.0, &mut rng).unwrap(), input.clone());
        let all = gaussian_flip(&input, 1.0, &mut rng).unwrap();
        prop_assert_eq!(input.hamming_distance(&all).unwrap(), input.len());
    }

    #[test]
    fn prop_reed_solomon_round_trip(text in "[a-zA-Z0-9 ]{1,600}") {
        let rs = ReedSolomonCodec::default();
        let encoded = rs.encode(&text).unwrap();
        prop_assert_eq!(encoded.len(), rs.encoded_len(text.len()));
        let decoded = rs.decode(&encoded);
        prop_assert_eq!(decoded.text, Some(text));
        prop_assert_eq!(decoded.corrected_symbols, 0);
    }

    #[test]
    fn prop_reed_solomon_corrects_up_to_capacity(
        text in "[a-z]{1,40}",
        seed in any::<u64>(),
        errors in 0usize..=5
    ) {
        let rs = ReedSolomonCodec::default();
        let encoded = rs.encode(&text).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let noisy: Bytes = flip_random_k(&encoded, errors, &mut rng).unwrap();
        prop_assert_eq!(encoded.differing_positions(&noisy).len(), errors);

        let decoded = rs.decode(&noisy);
        prop_assert_eq!(decoded.text, Some(text));
        prop_assert_eq!(decoded.corrected_symbols, errors);
    }
}

#[test]
fn test_reed_solomon_usually_fails_past_capacity() {
    let rs = ReedSolomonCodec::default();
    let text = "the quick brown fox";
    let encoded = rs.encode(text).unwrap();
    let mut rng = StdRng::seed_from_u64(1234);

    let trials = 200;
    let mut failures = 0;
    for _ in 0..trials {
        let noisy = flip_random_k(&encoded, 8, &mut rng).unwrap();
        if rs.decode(&noisy).text.as_deref() != Some(text) {
            failures += 1;
        }
    }
    assert!(failures * 100 >= trials * 80, "only {} of {} failed", failures, trials);
}
