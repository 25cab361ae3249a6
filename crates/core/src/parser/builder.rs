//! Mark record construction from raw text lines.

use tracing::{debug, trace};

use crate::error::Result;
use crate::model::{Family, MarkRecord};
use crate::parser::layer::LayerRule;
use crate::parser::tokens::{extract_last_four_floats, parse_float_token};
use crate::utils::{rect_center, rect_size};

/// Pick the identifier token of a split line.
///
/// Normally the second token. When the second token is the bare family marker
/// it names nothing, so the following non-numeric token is used instead.
fn identifier_token<'a>(parts: &[&'a str], marker: &str) -> &'a str {
    match parts.get(1).copied() {
        Some(tok) if tok == marker => match parts.get(2).copied() {
            Some(next) if parse_float_token(next).is_none() => next,
            _ => tok,
        },
        Some(tok) => tok,
        None => "",
    }
}

/// Build a record from one line already known to carry `family`'s marker.
///
/// # Errors
/// Propagates [`crate::MarkError::InsufficientNumericData`] when the line does
/// not end in two coordinate pairs.
pub fn parse_mark_line(family: Family, line_no: usize, line: &str) -> Result<MarkRecord> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let identifier = identifier_token(&parts, family.marker());
    let rect = extract_last_four_floats(&parts)?;
    let layer = LayerRule::for_family(family).decode(identifier);

    Ok(MarkRecord {
        family,
        identifier: identifier.to_string(),
        layer: layer.to_string(),
        center: rect_center(rect),
        size: rect_size(rect),
        line: line_no,
    })
}

/// Collect every parseable mark of `family` from `lines`, in line order.
///
/// Lines are selected by plain substring containment of the family marker.
/// Selected lines without a four-number tail are skipped.
pub fn parse_marks<S: AsRef<str>>(lines: &[S], family: Family) -> Vec<MarkRecord> {
    let marker = family.marker();
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line_no, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        if !raw.contains(marker) {
            continue;
        }
        match parse_mark_line(family, line_no, raw) {
            Ok(record) => {
                trace!(%family, line = line_no, identifier = %record.identifier, "parsed mark");
                records.push(record);
            }
            Err(err) => {
                debug!(%family, line = line_no, %err, "skipping marked line");
                skipped += 1;
            }
        }
    }

    debug!(%family, parsed = records.len(), skipped, "mark scan finished");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mark_line_basic() {
        let rec =
            parse_mark_line(Family::Tvp, 0, "foo _MC_TVP bar.TVPAY1_NS 1.0 2.0 3.0 4.0").unwrap();
        assert_eq!(rec.identifier, "bar.TVPAY1_NS");
        assert_eq!(rec.layer, "1");
        assert_eq!(rec.center, (2.0, 3.0));
        assert_eq!(rec.size, (2.0, 2.0));
    }

    #[test]
    fn test_identifier_is_second_token() {
        let rec = parse_mark_line(Family::Tvp, 0, "CELL A_MC_TVP.TVPQY12_NS r0 5 5 7 9").unwrap();
        assert_eq!(rec.identifier, "A_MC_TVP.TVPQY12_NS");
        assert_eq!(rec.layer, "12");

        let rec = parse_mark_line(Family::Tvp, 0, "x name.TVPY3_NS _MC_TVP 0 0 1 1").unwrap();
        assert_eq!(rec.identifier, "name.TVPY3_NS");
    }

    #[test]
    fn test_bare_marker_followed_by_number_keeps_marker() {
        let rec = parse_mark_line(Family::Tvp, 0, "foo _MC_TVP 1 2 3 4").unwrap();
        assert_eq!(rec.identifier, "_MC_TVP");
        assert_eq!(rec.layer, "");
    }

    #[test]
    fn test_parse_marks_filters_family() {
        let lines = [
            "a _MC_TVP.TVPY1_NS 0 0 2 2",
            "b _MC_AGA.AGAX2_NS 0 0 4 4",
            "c unrelated 1 2 3 4",
        ];
        let tvp = parse_marks(&lines, Family::Tvp);
        let aga = parse_marks(&lines, Family::Aga);
        assert_eq!(tvp.len(), 1);
        assert_eq!(aga.len(), 1);
        assert_eq!(tvp[0].layer, "1");
        assert_eq!(aga[0].layer, "2");
        assert_eq!(aga[0].line, 1);
    }

    #[test]
    fn test_short_lines_are_rejected() {
        // One token cannot carry four numbers, so the line is dropped.
        assert!(parse_marks(&["_MC_TVP"], Family::Tvp).is_empty());
        let err = parse_mark_line(Family::Tvp, 0, "1 2 3 _MC_TVP").unwrap_err();
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn test_size_non_negative_for_reversed_corners() {
        let rec = parse_mark_line(Family::Aga, 0, "x _MC_AGA 10 10 -2 4").unwrap();
        assert_eq!(rec.size, (12.0, 6.0));
        assert_eq!(rec.center, (4.0, 7.0));
    }
}
