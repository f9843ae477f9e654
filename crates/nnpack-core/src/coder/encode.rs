// crates/nnpack-core/src/coder/encode.rs
//
// Encoder built on top of the decoder: search for the byte numeral that
// `decode_bit` maps to the target bits instead of mirroring its arithmetic.

use tracing::{debug, trace};

use crate::coder::bisect::bisect_bounds;
use crate::coder::bound::{Bound, ByteSource};
use crate::coder::decode::decode_bit;
use crate::coder::probability::Probability;
use crate::coder::state::CoderState;
use crate::error::{NpError, Result};
use crate::validate::{validate_bits, validate_stream};

/// Counters for one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into `decode_bit`.
    pub decodes: u64,
    /// Midpoints taken between the bounds.
    pub bisections: u64,
    /// Bits committed through lock-in (the rest were accepted by a midpoint trial).
    pub locked: u64,
}

pub struct OracleEncoder<'a> {
    bits: &'a [u8],
    probs: &'a [Probability],
    pub stats: SearchStats,
}

impl<'a> OracleEncoder<'a> {
    pub fn new(bits: &'a [u8], probs: &'a [Probability]) -> Result<Self> {
        if bits.len() != probs.len() {
            return Err(NpError::LengthMismatch {
                bits: bits.len(),
                probs: probs.len(),
            });
        }
        validate_bits(bits)?;
        Ok(OracleEncoder {
            bits,
            probs,
            stats: SearchStats::default(),
        })
    }

    #[inline]
    fn trial<S: ByteSource + ?Sized>(
        &mut self,
        p: Probability,
        src: &S,
        state: CoderState,
    ) -> (u8, CoderState) {
        self.stats.decodes += 1;
        decode_bit(p, src, state)
    }

    /// Find the byte sequence that replays to `bits`.
    ///
    /// `low`/`high` bracket every continuation consistent with the bits
    /// resolved so far; `state` is the decoder after replaying `prefix`,
    /// with its cursor relative to the bounds.
    pub fn run(&mut self) -> Result<Vec<u8>> {
        let n = self.bits.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut prefix: Vec<u8> = Vec::new();
        let mut low = Bound::lower(Vec::new());
        let mut high = Bound::upper(Vec::new());
        let mut state = CoderState::new();
        let mut bp = 0usize;

        loop {
            low.reserve_lookahead(state.index);
            high.reserve_lookahead(state.index);

            let p = self.probs[bp];
            let (b_low, s_low) = self.trial(p, &low, state);
            let (b_high, s_high) = self.trial(p, &high, state);

            // Every numeral between the bounds decodes this bit the same way.
            if b_low == b_high && s_low == s_high {
                state = s_low;
                prefix.extend_from_slice(&low.head(state.index));
                low.shift_out(state.index);
                high.shift_out(state.index);
                state.index = 0;

                self.stats.locked += 1;
                trace!(bit = bp, value = b_low, prefix_len = prefix.len(), "locked in");

                bp += 1;
                if bp >= n {
                    return Ok(prefix);
                }
                continue;
            }

            if b_low > b_high {
                return Err(NpError::SearchInvariantViolated { bit_index: bp });
            }

            let mut mid = bisect_bounds(&low, &high);
            mid.reserve_lookahead(state.index);
            self.stats.bisections += 1;

            let (mut b_mid, mut s_mid) = self.trial(p, &mid, state);

            // Follow the midpoint until it leaves the target path.
            let mut pi = bp;
            while b_mid == self.bits[pi] {
                pi += 1;
                if pi >= n {
                    prefix.extend_from_slice(&mid.head(s_mid.index));
                    return Ok(prefix);
                }
                mid.reserve_lookahead(s_mid.index);
                (b_mid, s_mid) = self.trial(self.probs[pi], &mid, s_mid);
            }

            trace!(bit = bp, diverged_at = pi, mid_len = mid.len(), "bisect");

            if self.bits[pi] < b_mid {
                high = mid.into_upper();
            } else {
                low = mid;
            }
        }
    }
}

/// Shortest byte sequence found by the search that decodes to `bits`
/// under `probs`.
pub fn encode(bits: &[u8], probs: &[u8]) -> Result<Vec<u8>> {
    let probs = validate_stream(bits, probs)?;
    let mut enc = OracleEncoder::new(bits, &probs)?;
    let out = enc.run()?;
    debug!(
        bits = bits.len(),
        bytes = out.len(),
        decodes = enc.stats.decodes,
        bisections = enc.stats.bisections,
        locked = enc.stats.locked,
        "encode done"
    );
    Ok(out)
}
