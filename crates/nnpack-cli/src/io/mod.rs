// crates/nnpack-cli/src/io/mod.rs

pub mod cpp;
pub mod pack;
pub mod weights_file;
