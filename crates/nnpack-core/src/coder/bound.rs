// crates/nnpack-core/src/coder/bound.rs
//
// Byte numerals with an implicit infinite tail.

use crate::coder::LOOKAHEAD;

/// Anything the decoder can pull bytes from by absolute position.
pub trait ByteSource {
    fn byte_at(&self, index: usize) -> u8;
}

/// A finite byte slice reads as 0 past its end.
impl ByteSource for [u8] {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.get(index).copied().unwrap_or(0)
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.as_slice().byte_at(index)
    }
}

/// One end of the search interval.
///
/// `fill` is the value of every digit past `bytes`: 0 for a lower bound,
/// 255 for an upper bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bound {
    bytes: Vec<u8>,
    fill: u8,
}

impl Bound {
    pub const LOWER_FILL: u8 = 0;
    pub const UPPER_FILL: u8 = 255;

    pub fn lower(bytes: Vec<u8>) -> Self {
        Bound {
            bytes,
            fill: Self::LOWER_FILL,
        }
    }

    pub fn upper(bytes: Vec<u8>) -> Self {
        Bound {
            bytes,
            fill: Self::UPPER_FILL,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Materialize fill digits so at least `LOOKAHEAD` bytes follow `cursor`.
    ///
    /// The materialized digits matter: `bisect` looks at physical lengths.
    pub fn reserve_lookahead(&mut self, cursor: usize) {
        let want = cursor + LOOKAHEAD;
        if self.bytes.len() < want {
            self.bytes.resize(want, self.fill);
        }
    }

    /// The first `n` digits, fill included.
    pub fn head(&self, n: usize) -> Vec<u8> {
        (0..n).map(|i| self.byte_at(i)).collect()
    }

    /// Drop the first `n` digits.
    pub fn shift_out(&mut self, n: usize) {
        let n = n.min(self.bytes.len());
        self.bytes.drain(..n);
    }

    /// Reinterpret the same physical digits with another tail.
    pub fn into_lower(self) -> Bound {
        Bound::lower(self.bytes)
    }

    pub fn into_upper(self) -> Bound {
        Bound::upper(self.bytes)
    }
}

impl ByteSource for Bound {
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(self.fill)
    }
}
