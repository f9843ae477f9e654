// crates/nnpack-core/src/model/weights.rs
//
// Plain-text weight lists: one decimal number per line.

use crate::error::{NpError, Result};

pub fn parse_weights(text: &str) -> Result<Vec<f64>> {
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let s = line.trim();
        if s.is_empty() {
            continue;
        }
        let w: f64 = s.parse().map_err(|_| {
            NpError::Validation(format!("line {}: not a number: {:?}", lineno + 1, s))
        })?;
        if !w.is_finite() {
            return Err(NpError::Validation(format!(
                "line {}: non-finite weight {}",
                lineno + 1,
                s
            )));
        }
        out.push(w);
    }
    Ok(out)
}

pub fn format_weights(weights: &[f64]) -> String {
    let mut s = String::with_capacity(weights.len() * 10);
    for (i, w) in weights.iter().enumerate() {
        if i != 0 {
            s.push('\n');
        }
        s.push_str(&w.to_string());
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_and_skips_blanks() {
        let w = parse_weights("0.5\n\n-1.25\n  3 \n").unwrap();
        assert_eq!(w, vec![0.5, -1.25, 3.0]);
    }

    #[test]
    fn reports_bad_line_number() {
        let err = parse_weights("1\n2\nabc\n").unwrap_err();
        assert!(format!("{err}").contains("line 3"));
    }

    #[test]
    fn format_then_parse_is_exact() {
        let w = vec![0.015625, -2.5, 0.0, 1e-7];
        assert_eq!(parse_weights(&format_weights(&w)).unwrap(), w);
    }
}
