// crates/nnpack-core/src/table/mod.rs

pub mod checksum;
pub mod format;
pub mod table;
