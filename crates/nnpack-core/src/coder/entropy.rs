// crates/nnpack-core/src/coder/entropy.rs

use crate::error::Result;
use crate::validate::validate_stream;

/// Information content of `bits` under `probs`, in bits.
///
/// Lower bound on `8 * encode(bits, probs).len()`; diagnostics only.
pub fn entropy_bits(bits: &[u8], probs: &[u8]) -> Result<f64> {
    let probs = validate_stream(bits, probs)?;
    let nats: f64 = bits
        .iter()
        .zip(probs.iter())
        .map(|(&b, p)| {
            let p = p.as_fraction();
            if b != 0 {
                (1.0 - p).ln()
            } else {
                p.ln()
            }
        })
        .sum();
    Ok(nats / 0.5f64.ln())
}
