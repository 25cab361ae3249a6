//! Numeric tail extraction for whitespace-split lines.
//!
//! A marked line may carry any amount of leading text (names, flags, ids), but
//! always ends in two coordinate pairs. Extraction anchors on that tail.

use crate::error::{MarkError, Result};
use crate::utils::Rect;

/// Number of numeric tokens that make up a coordinate tail.
pub const TAIL_LEN: usize = 4;

/// Parse a single token as a float.
///
/// Accepts what `f64::from_str` accepts (sign, fraction, exponent, `inf`,
/// `infinity`, `nan`) plus single underscores between digits (`1_000.25`).
pub fn parse_float_token(tok: &str) -> Option<f64> {
    if !tok.contains('_') {
        return tok.parse().ok();
    }

    let bytes = tok.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !before.is_some_and(|c| c.is_ascii_digit()) || !after.is_some_and(|c| c.is_ascii_digit())
        {
            return None;
        }
    }

    tok.replace('_', "").parse().ok()
}

/// Extract the last four numeric tokens of a line as two corners.
///
/// Tokens are scanned from the end; non-numeric tokens are skipped. In
/// left-to-right order the four values read `x2 y2 x1 y1`, and the result is
/// returned as `(x1, y1, x2, y2)`.
///
/// # Errors
/// [`MarkError::InsufficientNumericData`] when fewer than four tokens parse.
pub fn extract_last_four_floats<S: AsRef<str>>(tokens: &[S]) -> Result<Rect> {
    let mut tail = [0.0f64; TAIL_LEN];
    let mut found = 0;
    for tok in tokens.iter().rev() {
        if let Some(v) = parse_float_token(tok.as_ref()) {
            // Filled back to front so `tail` ends up in line order.
            tail[TAIL_LEN - 1 - found] = v;
            found += 1;
            if found == TAIL_LEN {
                break;
            }
        }
    }

    if found < TAIL_LEN {
        return Err(MarkError::InsufficientNumericData { found });
    }

    let [x2, y2, x1, y1] = tail;
    Ok((x1, y1, x2, y2))
}
