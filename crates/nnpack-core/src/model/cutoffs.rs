// crates/nnpack-core/src/model/cutoffs.rs

use crate::coder::probability::Probability;
use crate::error::{NpError, Result};
use crate::model::quantize::{magnitude_class, MAX_CLASSES};

/// Per-class occurrence counts of a quantized weight set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassHistogram {
    pub counts: Vec<u64>,
    /// Negative values per class; reported, never coded against.
    pub negatives: Vec<u64>,
    pub total: u64,
}

impl ClassHistogram {
    pub fn from_values(values: &[i32]) -> Self {
        let mut h = ClassHistogram {
            counts: vec![0],
            negatives: vec![0],
            total: 0,
        };
        for &q in values {
            let k = magnitude_class(q);
            if k >= h.counts.len() {
                h.counts.resize(k + 1, 0);
                h.negatives.resize(k + 1, 0);
            }
            h.counts[k] += 1;
            if q < 0 {
                h.negatives[k] += 1;
            }
            h.total += 1;
        }
        h
    }

    pub fn classes(&self) -> usize {
        self.counts.len()
    }

    pub fn frequency(&self, class: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.get(class).copied().unwrap_or(0) as f64 / self.total as f64
    }

    /// Share of negative values within a class, if the class occurs.
    pub fn sign_ratio(&self, class: usize) -> Option<f64> {
        let c = self.counts.get(class).copied().unwrap_or(0);
        if c == 0 {
            return None;
        }
        Some(self.negatives[class] as f64 / c as f64)
    }

    /// Ideal cost per value: class entropy plus `k` raw bits
    /// (sign + `k-1` mantissa) for class `k`.
    pub fn expected_bits_per_value(&self) -> f64 {
        (0..self.classes())
            .map(|k| {
                let f = self.frequency(k);
                if f > 0.0 {
                    f * (k as f64 - f.log2())
                } else {
                    0.0
                }
            })
            .sum()
    }
}

/// Stop probabilities per magnitude class.
///
/// Entry `k` is P(class == k | class >= k) in 1/256 units. Coding a value
/// of class `k` walks entries `0..=k`: a 1 for every class passed, a 0 to
/// stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutoffTable(Vec<Probability>);

impl CutoffTable {
    /// Conditional stop probabilities from the histogram.
    ///
    /// Computed on integer counts: `floor(count_k * 256 / remaining_k)`
    /// clamped into `1..=255`. Classes past the last occupied one stop with
    /// probability 255.
    pub fn from_histogram(h: &ClassHistogram) -> Self {
        let mut remaining = h.total;
        let probs = h
            .counts
            .iter()
            .map(|&count| {
                let p = if remaining == 0 {
                    Probability::MAX
                } else {
                    let raw = (count * 256 / remaining).clamp(1, 255);
                    Probability::new(raw as u8).unwrap_or(Probability::MIN)
                };
                remaining -= count;
                p
            })
            .collect();
        CutoffTable(probs)
    }

    pub fn from_values(values: &[i32]) -> Self {
        Self::from_histogram(&ClassHistogram::from_values(values))
    }

    pub fn from_probabilities(probs: Vec<Probability>) -> Result<Self> {
        if probs.len() > MAX_CLASSES {
            return Err(NpError::Validation(format!(
                "cutoff table too long: {} classes (max {})",
                probs.len(),
                MAX_CLASSES
            )));
        }
        Ok(CutoffTable(probs))
    }

    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        Self::from_probabilities(Probability::from_slice(raw)?)
    }

    #[inline]
    pub fn get(&self, class: usize) -> Option<Probability> {
        self.0.get(class).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_raw(&self) -> Vec<u8> {
        self.0.iter().map(|p| p.get()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Probability> + '_ {
        self.0.iter().copied()
    }
}
