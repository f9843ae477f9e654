// crates/nnpack-core/src/model/quantize.rs

/// Default quantization step: weights are stored in units of 1/64.
pub const DEFAULT_QUANTIZE: u32 = 64;

/// Classes 0..=31: bit lengths of magnitudes up to `i32::MAX`.
pub const MAX_CLASSES: usize = 32;

/// Round-to-nearest onto the integer grid `1/step`.
///
/// Saturates to `-i32::MAX..=i32::MAX` so every magnitude has a class.
pub fn quantize(w: f64, step: u32) -> i32 {
    let q = (w * step as f64).round();
    if q.is_nan() {
        return 0;
    }
    q.clamp(-(i32::MAX as f64), i32::MAX as f64) as i32
}

#[inline]
pub fn dequantize(q: i32, step: u32) -> f64 {
    q as f64 / step as f64
}

pub fn quantize_all(weights: &[f64], step: u32) -> Vec<i32> {
    weights.iter().map(|&w| quantize(w, step)).collect()
}

/// Bit length of `|q|`; 0 for 0.
#[inline]
pub fn magnitude_class(q: i32) -> usize {
    (u32::BITS - q.unsigned_abs().leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_bit_lengths() {
        assert_eq!(magnitude_class(0), 0);
        assert_eq!(magnitude_class(1), 1);
        assert_eq!(magnitude_class(-1), 1);
        assert_eq!(magnitude_class(2), 2);
        assert_eq!(magnitude_class(-3), 2);
        assert_eq!(magnitude_class(4), 3);
        assert_eq!(magnitude_class(i32::MAX), 31);
        assert_eq!(magnitude_class(-i32::MAX), 31);
    }

    #[test]
    fn quantize_rounds_to_step() {
        assert_eq!(quantize(0.5, 64), 32);
        assert_eq!(quantize(-0.26, 64), -17);
        assert_eq!(quantize(1e12, 64), i32::MAX);
        assert_eq!(quantize(-1e12, 64), -i32::MAX);
        assert_eq!(dequantize(32, 64), 0.5);
    }
}
