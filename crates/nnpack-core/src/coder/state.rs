// crates/nnpack-core/src/coder/state.rs

/// Decoder position: interval width, consumed numeral, byte cursor.
///
/// Plain value type. Search branches copy it freely and compare field-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoderState {
    pub high: u32,
    pub current: u32,
    pub index: usize,
}

impl CoderState {
    pub const fn new() -> Self {
        CoderState {
            high: 1,
            current: 0,
            index: 0,
        }
    }

    #[inline]
    pub fn snapshot(&self) -> CoderState {
        *self
    }

    #[inline]
    pub fn restore(&mut self, snapshot: CoderState) {
        *self = snapshot;
    }
}

impl Default for CoderState {
    fn default() -> Self {
        Self::new()
    }
}
