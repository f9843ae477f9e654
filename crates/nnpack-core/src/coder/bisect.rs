// crates/nnpack-core/src/coder/bisect.rs

use crate::coder::bound::Bound;

/// Pick a numeral inside `[lower, upper]`.
///
/// `lower` reads as 0 past its end and `upper` as 255. Digits are copied
/// while they agree. At the first disagreement `c1 < c2`:
/// - if `c2 - c1 > 1`, emit the rounded average and stop;
/// - otherwise emit the adjacent boundary: `c1, 255, 255, ..` when `lower`
///   is no longer than `upper`, else `c2, 0, 0, ..`, padded to one digit
///   past the shorter input.
pub fn bisect(lower: &[u8], upper: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(lower.len().max(upper.len()) + 2);
    let mut idx = 0usize;
    loop {
        let c1 = lower.get(idx).copied().unwrap_or(Bound::LOWER_FILL);
        let c2 = upper.get(idx).copied().unwrap_or(Bound::UPPER_FILL);
        idx += 1;

        if c1 == c2 {
            out.push(c1);
            continue;
        }

        debug_assert!(c1 < c2, "bisect bounds out of order at digit {}", idx - 1);

        if c2 - c1 > 1 {
            out.push(((c1 as u16 + c2 as u16 + 1) / 2) as u8);
            return out;
        }

        if lower.len() <= upper.len() {
            out.push(c1);
            out.push(Bound::UPPER_FILL);
            if out.len() <= lower.len() {
                out.resize(lower.len() + 1, Bound::UPPER_FILL);
            }
        } else {
            out.push(c2);
            out.push(Bound::LOWER_FILL);
            if out.len() <= upper.len() {
                out.resize(upper.len() + 1, Bound::LOWER_FILL);
            }
        }
        return out;
    }
}

/// `bisect` over two search bounds; the result is a lower-filled numeral.
pub fn bisect_bounds(low: &Bound, high: &Bound) -> Bound {
    Bound::lower(bisect(low.as_bytes(), high.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_wide_gap_with_rounded_average() {
        assert_eq!(bisect(&[1, 2], &[1, 5]), vec![1, 4]);
        assert_eq!(bisect(&[10], &[200]), vec![105]);
        assert_eq!(bisect(&[], &[]), vec![128]);
    }

    #[test]
    fn adjacent_digits_take_boundary_representative() {
        assert_eq!(bisect(&[1, 2], &[1, 3]), vec![1, 2, 255]);
        assert_eq!(bisect(&[1, 2, 7], &[1, 3]), vec![1, 3, 0]);
        assert_eq!(bisect(&[0, 0], &[0]), vec![0, 128]);
    }
}
