// crates/nnpack-core/src/model/bitmodel.rs

use crate::coder::decode::Decoder;
use crate::coder::encode::encode;
use crate::coder::entropy::entropy_bits;
use crate::coder::probability::Probability;
use crate::error::{NpError, Result};
use crate::model::cutoffs::CutoffTable;
use crate::model::quantize::magnitude_class;

/// Parallel bit / probability sequences, ready for the codec.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitStream {
    pub bits: Vec<u8>,
    pub probs: Vec<u8>,
}

impl BitStream {
    #[inline]
    fn push(&mut self, bit: u8, p: Probability) {
        self.bits.push(bit);
        self.probs.push(p.get());
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn entropy_bits(&self) -> Result<f64> {
        entropy_bits(&self.bits, &self.probs)
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        encode(&self.bits, &self.probs)
    }
}

/// Lay out quantized values as codec bits.
///
/// Per value of class `k`:
/// - `k` continue bits (1) then a stop bit (0), bit `i` under `cutoffs[i]`;
/// - for `k > 0`: sign (1 = negative), then the `k-1` bits below the
///   leading one, LSB first, all at even odds.
pub fn model_values(values: &[i32], table: &CutoffTable) -> Result<BitStream> {
    let mut out = BitStream::default();
    for (i, &q) in values.iter().enumerate() {
        let k = magnitude_class(q);
        if k >= table.len() {
            return Err(NpError::Validation(format!(
                "value {} at index {} has class {} but table has {} classes",
                q,
                i,
                k,
                table.len()
            )));
        }

        for class in 0..=k {
            let p = table.get(class).unwrap_or(Probability::MAX);
            out.push((class != k) as u8, p);
        }
        if k == 0 {
            continue;
        }

        out.push((q < 0) as u8, Probability::HALF);
        let mut m = q.unsigned_abs();
        for _ in 0..k - 1 {
            out.push((m & 1) as u8, Probability::HALF);
            m >>= 1;
        }
        debug_assert_eq!(m, 1, "leading bit of class {k} magnitude");
    }
    Ok(out)
}

/// Read `count` values back out of an encoded stream.
pub fn decode_values(encoded: &[u8], table: &CutoffTable, count: usize) -> Result<Vec<i32>> {
    decode_values_counted(encoded, table, count).map(|(values, _bits)| values)
}

/// `decode_values`, also returning the number of coded bits consumed.
///
/// The encoder's output ends exactly where the decoder's cursor stops, so a
/// read past the last byte means the stream is truncated or `count` is too
/// large; that is reported instead of decoding implicit zeros forever.
pub fn decode_values_counted(
    encoded: &[u8],
    table: &CutoffTable,
    count: usize,
) -> Result<(Vec<i32>, u64)> {
    let mut dec = Decoder::new(encoded);
    let mut bits: u64 = 0;
    let mut next = |dec: &mut Decoder<'_>, p: Probability, i: usize| -> Result<u8> {
        let b = dec.decode(p);
        bits += 1;
        if dec.consumed() > encoded.len() {
            return Err(NpError::Validation(format!(
                "stream exhausted at value {} ({} bytes, {} bits decoded)",
                i,
                encoded.len(),
                bits
            )));
        }
        Ok(b)
    };

    // `count` may come from an untrusted header.
    let mut out = Vec::with_capacity(count.min(encoded.len().saturating_mul(8).saturating_add(1)));
    for i in 0..count {
        let mut k = 0usize;
        loop {
            let p = table.get(k).ok_or_else(|| {
                NpError::Validation(format!(
                    "value {} runs past the last magnitude class ({})",
                    i,
                    table.len()
                ))
            })?;
            if next(&mut dec, p, i)? == 0 {
                break;
            }
            k += 1;
        }

        if k == 0 {
            out.push(0);
            continue;
        }

        let negative = next(&mut dec, Probability::HALF, i)? == 1;
        let mut m: u32 = 0;
        for bit in 0..k - 1 {
            m |= (next(&mut dec, Probability::HALF, i)? as u32) << bit;
        }
        m |= 1u32 << (k - 1);

        let v = m as i32;
        out.push(if negative { -v } else { v });
    }
    Ok((out, bits))
}

/// Model + encode in one step; returns the stream alongside the bytes.
pub fn encode_values(values: &[i32], table: &CutoffTable) -> Result<(BitStream, Vec<u8>)> {
    let stream = model_values(values, table)?;
    let bytes = stream.encode()?;
    Ok((stream, bytes))
}
