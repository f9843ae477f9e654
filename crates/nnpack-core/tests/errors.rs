use nnpack_core::error::NpError;
use nnpack_core::{decode_all, encode, entropy_bits};

#[test]
fn rejects_zero_probability() {
    let err = encode(&[0, 1, 0], &[128, 0, 128]).unwrap_err();
    assert!(matches!(err, NpError::InvalidProbability { index: 1, value: 0 }));
}

#[test]
fn rejects_length_mismatch() {
    let err = encode(&[0, 1], &[128]).unwrap_err();
    assert!(matches!(err, NpError::LengthMismatch { bits: 2, probs: 1 }));
}

#[test]
fn rejects_non_binary_bits() {
    let err = encode(&[0, 2], &[128, 128]).unwrap_err();
    assert!(matches!(err, NpError::InvalidBit { index: 1, value: 2 }));
}

#[test]
fn decode_and_entropy_share_the_contract() {
    assert!(matches!(
        decode_all(&[1, 2, 3], &[5, 0]).unwrap_err(),
        NpError::InvalidProbability { index: 1, .. }
    ));
    assert!(matches!(
        entropy_bits(&[0], &[128, 128]).unwrap_err(),
        NpError::LengthMismatch { .. }
    ));
}

#[test]
fn error_messages_name_the_problem() {
    let msg = format!("{}", encode(&[0], &[0]).unwrap_err());
    assert!(msg.contains("invalid probability"));
    let msg = format!("{}", NpError::SearchInvariantViolated { bit_index: 3 });
    assert!(msg.contains("bit 3"));
}
