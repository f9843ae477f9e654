// crates/nnpack-cli/src/io/weights_file.rs

use anyhow::{Context, Result};
use nnpack_core::model::weights::{format_weights, parse_weights};

/// Load a text weight list (one number per line).
pub fn load_weights(path: &str) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read weights {path}"))?;
    let w = parse_weights(&text).with_context(|| format!("parse weights {path}"))?;
    Ok(w)
}

pub fn save_weights(path: &str, weights: &[f64]) -> Result<()> {
    std::fs::write(path, format_weights(weights)).with_context(|| format!("write weights {path}"))?;
    Ok(())
}
