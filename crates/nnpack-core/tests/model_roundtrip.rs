// crates/nnpack-core/tests/model_roundtrip.rs

use nnpack_core::model::bitmodel::{
    decode_values, decode_values_counted, encode_values, model_values,
};
use nnpack_core::model::cutoffs::{ClassHistogram, CutoffTable};
use nnpack_core::model::quantize::{dequantize, quantize_all, DEFAULT_QUANTIZE};
use nnpack_core::{decode_all, Table};

const SAMPLE: [i32; 16] = [0, 1, -2, 3, 0, 0, 5, -1, 0, 12, -7, 0, 2, 0, 0, 1];

fn lcg_next(x: &mut u64) -> u64 {
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

/// Roughly Laplacian weights around zero, like a trained layer.
fn synthetic_weights(seed: u64, n: usize) -> Vec<f64> {
    let mut s = seed;
    (0..n)
        .map(|_| {
            let u = ((lcg_next(&mut s) >> 11) as f64 + 0.5) / (1u64 << 53) as f64;
            let sign = if lcg_next(&mut s) >> 63 == 1 { -1.0 } else { 1.0 };
            sign * -u.ln() * 0.05
        })
        .collect()
}

#[test]
fn cutoffs_golden() {
    let t = CutoffTable::from_values(&SAMPLE);
    assert_eq!(t.to_raw(), vec![112, 85, 128, 170, 255]);
}

#[test]
fn sample_encoding_golden() {
    let t = CutoffTable::from_values(&SAMPLE);
    let (stream, bytes) = encode_values(&SAMPLE, &t).unwrap();
    assert_eq!(stream.len(), 54);
    assert_eq!(bytes, vec![56, 216, 88, 198, 240, 186, 96, 0, 0]);

    let back = decode_values(&bytes, &t, SAMPLE.len()).unwrap();
    assert_eq!(back, SAMPLE.to_vec());

    let (_, bits) = decode_values_counted(&bytes, &t, SAMPLE.len()).unwrap();
    assert_eq!(bits, stream.len() as u64);
}

#[test]
fn bit_layout_matches_class_sign_mantissa() {
    let t = CutoffTable::from_raw(&[100, 90, 80, 70]).unwrap();
    // -6 = class 3: continue, continue, continue, stop; sign; mantissa 0b10 LSB first.
    let s = model_values(&[-6], &t).unwrap();
    assert_eq!(s.bits, vec![1, 1, 1, 0, 1, 0, 1]);
    assert_eq!(s.probs, vec![100, 90, 80, 70, 128, 128, 128]);

    // zero costs a single stop bit.
    let z = model_values(&[0], &t).unwrap();
    assert_eq!(z.bits, vec![0]);
    assert_eq!(z.probs, vec![100]);
}

#[test]
fn decoded_bits_follow_the_stream() {
    let t = CutoffTable::from_values(&SAMPLE);
    let (stream, bytes) = encode_values(&SAMPLE, &t).unwrap();
    assert_eq!(decode_all(&bytes, &stream.probs).unwrap(), stream.bits);
}

#[test]
fn synthetic_layer_roundtrip() {
    let weights = synthetic_weights(0xC0FFEE, 3000);
    let q = quantize_all(&weights, DEFAULT_QUANTIZE);
    let table = Table::from_values(&q, DEFAULT_QUANTIZE).unwrap();

    let (stream, bytes) = encode_values(&q, &table.cutoffs).unwrap();
    let back = decode_values(&bytes, &table.cutoffs, q.len()).unwrap();
    assert_eq!(back, q);

    // Dequantized values sit on the 1/64 grid within half a step.
    for (w, &v) in weights.iter().zip(back.iter()) {
        assert!((w - dequantize(v, DEFAULT_QUANTIZE)).abs() <= 0.5 / 64.0 + 1e-12);
    }

    let h = stream.entropy_bits().unwrap();
    assert!((bytes.len() * 8) as f64 >= h);
    assert!((bytes.len() * 8) as f64 <= h + 32.0);
}

#[test]
fn histogram_tracks_signs_and_expected_cost() {
    let h = ClassHistogram::from_values(&SAMPLE);
    assert_eq!(h.counts, vec![7, 3, 3, 2, 1]);
    assert_eq!(h.negatives, vec![0, 1, 1, 1, 0]);
    assert_eq!(h.total, 16);
    assert_eq!(h.sign_ratio(0), Some(0.0));
    assert_eq!(h.sign_ratio(3), Some(0.5));
    assert!(h.expected_bits_per_value() > 0.0);

    let empty = ClassHistogram::from_values(&[]);
    assert_eq!(empty.classes(), 1);
    assert_eq!(empty.sign_ratio(0), None);
    assert_eq!(CutoffTable::from_histogram(&empty).to_raw(), vec![255]);
}

#[test]
fn class_outside_table_is_rejected() {
    let t = CutoffTable::from_raw(&[128, 128]).unwrap();
    assert!(model_values(&[1], &t).is_ok());
    assert!(model_values(&[2], &t).is_err());
}

#[test]
fn corrupt_stream_cannot_run_past_the_table() {
    // All-ones bytes keep choosing "continue" at every class.
    let t = CutoffTable::from_raw(&[128, 128, 128]).unwrap();
    let err = decode_values(&[0xFF; 16], &t, 4).unwrap_err();
    assert!(format!("{err}").contains("magnitude class"));
}

#[test]
fn value_count_past_the_stream_is_rejected() {
    let t = CutoffTable::from_values(&SAMPLE);
    let (_, bytes) = encode_values(&SAMPLE, &t).unwrap();

    assert!(decode_values(&bytes, &t, usize::MAX).is_err());
    assert!(decode_values(&bytes[..2], &t, SAMPLE.len()).is_err());
    assert!(decode_values(&[], &t, 1).is_err());
    assert_eq!(decode_values(&[], &t, 0).unwrap(), Vec::<i32>::new());
}

#[test]
fn table_rejects_zero_cutoff() {
    assert!(CutoffTable::from_raw(&[128, 0]).is_err());
}
