// crates/nnpack-core/src/coder/mod.rs

pub mod bisect;
pub mod bound;
pub mod decode;
pub mod encode;
pub mod entropy;
pub mod probability;
pub mod state;

/// Radix of the byte numeral.
pub const BASE: u32 = 256;

/// `high` is rescaled whenever it drops below this floor.
pub const RENORM_FLOOR: u32 = 16384;

/// Bytes kept available past the decoder cursor while searching.
pub const LOOKAHEAD: usize = 4;
