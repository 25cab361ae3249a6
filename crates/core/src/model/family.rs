//! Mark families.

use std::fmt;

/// The two supported mark categories.
///
/// A family fixes the marker substring that selects its lines and the tag
/// its layer decoder looks for inside an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    /// TVP marks; layer follows the last `Y` of the encoded body.
    Tvp,
    /// AGA marks; layer follows the later of the last `Y` or `X`.
    Aga,
}

impl Family {
    /// All families in report order.
    pub const ALL: [Self; 2] = [Self::Tvp, Self::Aga];

    /// Substring that marks a line as belonging to this family.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Tvp => "_MC_TVP",
            Self::Aga => "_MC_AGA",
        }
    }

    /// Tag that precedes the encoded layer body inside an identifier.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Tvp => "TVP",
            Self::Aga => "AGA",
        }
    }

    /// Section title used by the report.
    pub const fn title(self) -> &'static str {
        self.tag()
    }

    /// Lowercase anchor id of the family's report section.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Tvp => "tvp",
            Self::Aga => "aga",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
