pub mod error;
pub mod validate;

pub mod coder;
pub mod model;
pub mod table;

pub use crate::coder::decode::{decode_all, decode_bit, Decoder};
pub use crate::coder::encode::{encode, OracleEncoder};
pub use crate::coder::entropy::entropy_bits;
pub use crate::coder::probability::Probability;
pub use crate::coder::state::CoderState;
pub use crate::table::table::Table;
