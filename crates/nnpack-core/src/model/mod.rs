// crates/nnpack-core/src/model/mod.rs
//
// Weights -> (bits, probabilities) and back. The codec itself never sees
// any of this: it gets a flat probability sequence.

pub mod bitmodel;
pub mod cutoffs;
pub mod quantize;
pub mod weights;
