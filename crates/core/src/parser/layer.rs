//! Layer code decoding from encoded mark identifiers.
//!
//! Identifiers embed a segment `.<TAG><BODY>_NS` where `BODY` is uppercase
//! alphanumeric. The layer is the tail of `BODY` after a split marker; which
//! markers count depends on the family.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Family;

static TVP_SEGMENT: LazyLock<Regex> = LazyLock::new(|| segment_regex(Family::Tvp));
static AGA_SEGMENT: LazyLock<Regex> = LazyLock::new(|| segment_regex(Family::Aga));

fn segment_regex(family: Family) -> Regex {
    let pattern = format!(r"\.{}([A-Z0-9]+)_NS", regex::escape(family.tag()));
    Regex::new(&pattern).expect("segment pattern is a valid regex")
}

/// Characters after which the layer code starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// After the last `Y`.
    LastY,
    /// After whichever of the last `Y` or last `X` is further right.
    LastYOrX,
}

impl SplitRule {
    const fn markers(self) -> &'static [char] {
        match self {
            Self::LastY => &['Y'],
            Self::LastYOrX => &['Y', 'X'],
        }
    }

    /// Byte offset just past the rightmost marker in `body`.
    fn split_point(self, body: &str) -> Option<usize> {
        body.rfind(self.markers()).map(|pos| pos + 1)
    }
}

/// Decoder configuration for one family.
#[derive(Debug, Clone, Copy)]
pub struct LayerRule {
    pub family: Family,
    pub split: SplitRule,
}

impl LayerRule {
    pub const TVP: Self = Self {
        family: Family::Tvp,
        split: SplitRule::LastY,
    };

    pub const AGA: Self = Self {
        family: Family::Aga,
        split: SplitRule::LastYOrX,
    };

    pub const fn for_family(family: Family) -> Self {
        match family {
            Family::Tvp => Self::TVP,
            Family::Aga => Self::AGA,
        }
    }

    fn segment(&self) -> &'static Regex {
        match self.family {
            Family::Tvp => &TVP_SEGMENT,
            Family::Aga => &AGA_SEGMENT,
        }
    }

    /// Decode the layer code from an identifier.
    ///
    /// Returns an empty string when the identifier has no `.<TAG>..._NS`
    /// segment, when the body has no split marker, or when the marker is the
    /// body's last character.
    pub fn decode<'a>(&self, identifier: &'a str) -> &'a str {
        let Some(body) = self
            .segment()
            .captures(identifier)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return "";
        };

        match self.split.split_point(body) {
            Some(pos) => &body[pos..],
            None => "",
        }
    }
}

/// Decode the layer code of `identifier` using `family`'s rule.
pub fn decode_layer(family: Family, identifier: &str) -> &str {
    LayerRule::for_family(family).decode(identifier)
}
