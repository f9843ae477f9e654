// crates/nnpack-core/src/table/table.rs

use crate::error::Result;
use crate::model::cutoffs::{ClassHistogram, CutoffTable};
use crate::validate::validate_table;

/// Current `NPT1` layout version.
pub const TABLE_VERSION: u16 = 1;

/// Everything a decoder needs besides the byte stream and the value count.
///
/// Built once from the quantized weights, then read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub version: u16,
    /// Quantization step: stored integers are weights * quantize.
    pub quantize: u32,
    pub cutoffs: CutoffTable,
}

impl Table {
    pub fn new(quantize: u32, cutoffs: CutoffTable) -> Result<Self> {
        let t = Table {
            version: TABLE_VERSION,
            quantize,
            cutoffs,
        };
        validate_table(&t)?;
        Ok(t)
    }

    /// Derive cutoffs from already-quantized values.
    pub fn from_values(values: &[i32], quantize: u32) -> Result<Self> {
        let h = ClassHistogram::from_values(values);
        Self::new(quantize, CutoffTable::from_histogram(&h))
    }
}
