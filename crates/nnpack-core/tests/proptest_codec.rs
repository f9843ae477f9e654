//! Property tests for the codec.
//!
//! - Any bit/probability pairing round-trips
//! - Encoded length never beats the entropy bound
//! - `bisect` lands strictly inside its bounds

use std::cmp::Ordering;

use proptest::prelude::*;

use nnpack_core::coder::bisect::bisect;
use nnpack_core::{decode_all, encode, entropy_bits};

/// Compare two numerals digit by digit with their implicit tails.
fn cmp_padded(a: &[u8], a_fill: u8, b: &[u8], b_fill: u8) -> Ordering {
    let n = a.len().max(b.len()) + 1;
    for i in 0..n {
        let x = a.get(i).copied().unwrap_or(a_fill);
        let y = b.get(i).copied().unwrap_or(b_fill);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            o => return o,
        }
    }
    Ordering::Equal
}

fn stream_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    prop::collection::vec((0u8..=1, 1u8..=255), 0..300)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

/// Probabilities concentrated at the extremes, where truncation bites hardest.
fn extreme_stream_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    let p = prop_oneof![Just(1u8), Just(2u8), Just(128u8), Just(254u8), Just(255u8)];
    prop::collection::vec((0u8..=1, p), 1..200).prop_map(|pairs| pairs.into_iter().unzip())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        max_shrink_iters: 100,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_roundtrip((bits, probs) in stream_strategy()) {
        let enc = encode(&bits, &probs).unwrap();
        prop_assert_eq!(decode_all(&enc, &probs).unwrap(), bits);
    }

    #[test]
    fn prop_roundtrip_extreme_probabilities((bits, probs) in extreme_stream_strategy()) {
        let enc = encode(&bits, &probs).unwrap();
        prop_assert_eq!(decode_all(&enc, &probs).unwrap(), bits);
    }

    #[test]
    fn prop_length_respects_entropy((bits, probs) in stream_strategy()) {
        let enc = encode(&bits, &probs).unwrap();
        let h = entropy_bits(&bits, &probs).unwrap();
        prop_assert!((enc.len() * 8) as f64 >= h, "bytes={} entropy={}", enc.len(), h);
    }

    #[test]
    fn prop_bisect_stays_inside(
        a in prop::collection::vec(any::<u8>(), 0..8),
        b in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let (lo, hi) = if cmp_padded(&a, 0, &b, 255) != Ordering::Greater {
            (a, b)
        } else {
            (b, a)
        };
        let mid = bisect(&lo, &hi);

        prop_assert_eq!(cmp_padded(&lo, 0, &mid, 0), Ordering::Less);
        prop_assert_eq!(cmp_padded(&mid, 0, &hi, 255), Ordering::Less);
    }

    #[test]
    fn prop_bisect_shares_common_prefix(
        prefix in prop::collection::vec(any::<u8>(), 0..6),
        x in any::<u8>(),
        y in any::<u8>(),
    ) {
        prop_assume!(x != y);
        let (x, y) = (x.min(y), x.max(y));
        let mut lo = prefix.clone();
        lo.push(x);
        let mut hi = prefix.clone();
        hi.push(y);

        let mid = bisect(&lo, &hi);
        prop_assert_eq!(&mid[..prefix.len()], &prefix[..]);
        if y - x > 1 {
            prop_assert_eq!(mid.len(), prefix.len() + 1);
            prop_assert!(mid[prefix.len()] > x && mid[prefix.len()] < y);
        }
    }
}
