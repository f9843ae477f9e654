use nnpack_core::coder::encode::OracleEncoder;
use nnpack_core::{encode, Probability};

#[test]
fn deterministic_output() {
    let bits: Vec<u8> = (0..1500u32).map(|i| ((i * 7919) % 13 < 4) as u8).collect();
    let probs: Vec<u8> = (0..1500u32).map(|i| (40 + (i * 31) % 200) as u8).collect();

    let a = encode(&bits, &probs).unwrap();
    let b = encode(&bits, &probs).unwrap();
    assert_eq!(a, b);
}

#[test]
fn search_stats_are_deterministic_and_consistent() {
    let bits: Vec<u8> = (0..500u32).map(|i| (i % 5 == 0) as u8).collect();
    let probs = Probability::from_slice(&vec![200u8; 500]).unwrap();

    let mut e1 = OracleEncoder::new(&bits, &probs).unwrap();
    let out1 = e1.run().unwrap();
    let mut e2 = OracleEncoder::new(&bits, &probs).unwrap();
    let out2 = e2.run().unwrap();

    assert_eq!(out1, out2);
    assert_eq!(e1.stats, e2.stats);
    assert!(e1.stats.locked <= bits.len() as u64);
    // Two trial decodes per loop turn at least.
    assert!(e1.stats.decodes >= 2 * (e1.stats.locked + e1.stats.bisections));
}
