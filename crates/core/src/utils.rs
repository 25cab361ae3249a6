//! Miscellaneous Routines
//!
//! Provides utility types and functions shared by the pipeline stages:
//! - Geometric types (Point, Rect) and center/size helpers
//! - Distance and bearing between two points
//! - Fixed-precision rounding used for report values
//! - Text helpers (HTML escaping, lossy input decoding)

use std::borrow::Cow;

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle given by two opposite corners (x1, y1, x2, y2).
///
/// The corners are kept in the order they were read; no normalization to
/// bottom-left/top-right is applied.
pub type Rect = (f64, f64, f64, f64);

/// Number of decimal places kept for distances and angles.
pub const DECIMALS: i32 = 3;

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Midpoint of the two corners of a rectangle.
pub fn rect_center(rect: Rect) -> Point {
    let (x1, y1, x2, y2) = rect;
    ((x1 + x2) / 2.0, (y1 + y2) / 2.0)
}

/// Absolute extents of a rectangle; never negative regardless of corner order.
pub fn rect_size(rect: Rect) -> Point {
    let (x1, y1, x2, y2) = rect;
    ((x2 - x1).abs(), (y2 - y1).abs())
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// Bearing from `from` to `to` in degrees, normalized into [0, 360).
///
/// Measured like `atan2(dy, dx)`: 0 points along +x, 90 along +y.
pub fn bearing_degrees(from: Point, to: Point) -> f64 {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    (dy.atan2(dx).to_degrees() + 360.0) % 360.0
}

/// Format a float with exactly [`DECIMALS`] decimal places.
pub fn fmt3(x: f64) -> String {
    format!("{:.*}", DECIMALS as usize, x)
}

/// Round to [`DECIMALS`] decimal places.
///
/// Rounds the exact binary value through the decimal formatter, so the result
/// always agrees with [`fmt3`] of the unrounded input.
pub fn round3(x: f64) -> f64 {
    fmt3(x).parse().unwrap_or(x)
}

/// Round a bearing to [`DECIMALS`] places, folding a rounded 360 back to 0.
pub fn round_bearing(angle: f64) -> f64 {
    let rounded = round3(angle);
    if rounded >= 360.0 { 0.0 } else { rounded }
}

/// Split text into lines on `\r\n`, `\n` or a bare `\r`.
///
/// Like [`str::lines`], a trailing line break does not produce an empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(i) => {
                lines.push(&rest[..i]);
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Encode a string for safe inclusion in HTML text or quoted attributes.
pub fn enc(x: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(x)
}

/// Decode raw bytes as UTF-8, dropping invalid sequences instead of failing.
pub fn decode_text(s: &[u8]) -> String {
    let mut out = String::with_capacity(s.len());
    for chunk in s.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
