// crates/nnpack-core/src/coder/probability.rs

use crate::error::{NpError, Result};

/// Probability that the next bit is 0, in units of 1/256.
///
/// Only `1..=255` is representable: 0 and 256 would make one of the two
/// sub-intervals empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probability(u8);

impl Probability {
    /// Even odds; used for sign and mantissa bits.
    pub const HALF: Probability = Probability(128);
    pub const MIN: Probability = Probability(1);
    pub const MAX: Probability = Probability(255);

    #[inline]
    pub fn new(value: u8) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Probability(value))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The same probability as a fraction in (0, 1).
    #[inline]
    pub fn as_fraction(self) -> f64 {
        self.0 as f64 / 256.0
    }

    /// Validate a raw probability sequence, reporting the first bad index.
    pub fn from_slice(raw: &[u8]) -> Result<Vec<Probability>> {
        raw.iter()
            .enumerate()
            .map(|(index, &value)| {
                Probability::new(value).ok_or(NpError::InvalidProbability {
                    index,
                    value: value as u32,
                })
            })
            .collect()
    }
}
