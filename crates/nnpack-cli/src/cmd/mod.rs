// crates/nnpack-cli/src/cmd/mod.rs

pub mod analyze;
pub mod compress;
pub mod decompress;
pub mod header;
pub mod inspect;
