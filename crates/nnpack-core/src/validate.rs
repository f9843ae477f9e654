use crate::coder::probability::Probability;
use crate::error::{NpError, Result};
use crate::table::table::Table;

/// Bits must be 0 or 1.
pub fn validate_bits(bits: &[u8]) -> Result<()> {
    match bits.iter().position(|&b| b > 1) {
        Some(index) => Err(NpError::InvalidBit {
            index,
            value: bits[index],
        }),
        None => Ok(()),
    }
}

/// Check the encoder's input contract and return the typed probabilities.
pub fn validate_stream(bits: &[u8], probs: &[u8]) -> Result<Vec<Probability>> {
    if bits.len() != probs.len() {
        return Err(NpError::LengthMismatch {
            bits: bits.len(),
            probs: probs.len(),
        });
    }
    validate_bits(bits)?;
    Probability::from_slice(probs)
}

pub fn validate_table(t: &Table) -> Result<()> {
    if t.quantize == 0 {
        return Err(NpError::Validation("quantize must be non-zero".into()));
    }
    // Class 0 must exist or no value can be coded.
    if t.cutoffs.is_empty() {
        return Err(NpError::Validation("cutoff table must not be empty".into()));
    }
    if t.cutoffs.len() > crate::model::quantize::MAX_CLASSES {
        return Err(NpError::Validation(format!(
            "cutoff table too long: {} classes (max {})",
            t.cutoffs.len(),
            crate::model::quantize::MAX_CLASSES
        )));
    }
    Ok(())
}
