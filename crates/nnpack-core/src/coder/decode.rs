// crates/nnpack-core/src/coder/decode.rs

use crate::coder::bound::ByteSource;
use crate::coder::probability::Probability;
use crate::coder::state::CoderState;
use crate::coder::{BASE, RENORM_FLOOR};
use crate::error::Result;

/// Decode one bit from `src` at `state`.
///
/// Pure: the caller owns the state and gets the successor back.
/// `high >= RENORM_FLOOR` holds whenever the threshold is computed, so the
/// threshold is never 0 and never equal to `high`.
#[inline]
pub fn decode_bit<S: ByteSource + ?Sized>(
    p: Probability,
    src: &S,
    mut state: CoderState,
) -> (u8, CoderState) {
    while state.high < RENORM_FLOOR {
        state.high *= BASE;
        state.current = state.current * BASE + src.byte_at(state.index) as u32;
        state.index += 1;
    }

    let threshold = state.high * p.get() as u32 / BASE;
    if state.current < threshold {
        state.high = threshold;
        (0, state)
    } else {
        state.current -= threshold;
        state.high -= threshold;
        (1, state)
    }
}

/// Streaming replay over a finished byte sequence.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    src: &'a [u8],
    state: CoderState,
}

impl<'a> Decoder<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Decoder {
            src,
            state: CoderState::new(),
        }
    }

    #[inline]
    pub fn decode(&mut self, p: Probability) -> u8 {
        let (bit, next) = decode_bit(p, self.src, self.state);
        self.state = next;
        bit
    }

    pub fn state(&self) -> CoderState {
        self.state
    }

    pub fn snapshot(&self) -> CoderState {
        self.state.snapshot()
    }

    pub fn restore(&mut self, snapshot: CoderState) {
        self.state.restore(snapshot);
    }

    /// Bytes consumed so far (may run past the end of the source).
    pub fn consumed(&self) -> usize {
        self.state.index
    }
}

/// Replay `probs` against `encoded`, one bit per probability.
pub fn decode_all(encoded: &[u8], probs: &[u8]) -> Result<Vec<u8>> {
    let probs = Probability::from_slice(probs)?;
    let mut dec = Decoder::new(encoded);
    Ok(probs.iter().map(|&p| dec.decode(p)).collect())
}
