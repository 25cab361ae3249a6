//! Mark records before and after neighbor annotation.

use crate::model::Family;
use crate::utils::Point;

/// One mark as parsed from a single source line.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkRecord {
    pub family: Family,
    /// Second whitespace-delimited token of the source line, or empty.
    pub identifier: String,
    /// Layer code decoded from `identifier`; empty when decoding fails.
    pub layer: String,
    pub center: Point,
    /// Absolute extents, always non-negative.
    pub size: Point,
    /// 0-based index of the source line.
    pub line: usize,
}

impl MarkRecord {
    pub const fn center_x(&self) -> f64 {
        self.center.0
    }

    pub const fn center_y(&self) -> f64 {
        self.center.1
    }

    pub const fn size_x(&self) -> f64 {
        self.size.0
    }

    pub const fn size_y(&self) -> f64 {
        self.size.1
    }
}

/// Nearest same-layer neighbor of a mark.
#[derive(Debug, Clone, PartialEq)]
pub struct Nearest {
    /// Index of the neighbor within the owning [`MarkSet`].
    pub index: usize,
    /// Identifier of the neighbor.
    pub name: String,
    /// Center-to-center distance, rounded to 3 decimals.
    pub distance: f64,
    /// Bearing to the neighbor in degrees, rounded to 3 decimals, in [0, 360).
    pub angle: f64,
}

/// A mark with its neighbor and final position.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedMark {
    pub record: MarkRecord,
    /// `None` when no other mark shares the layer.
    pub nearest: Option<Nearest>,
    /// 1-based rank in the final ordering.
    pub sequence: usize,
}

impl AnnotatedMark {
    pub fn identifier(&self) -> &str {
        &self.record.identifier
    }

    pub fn layer(&self) -> &str {
        &self.record.layer
    }

    /// Anchor id of this mark's report row, e.g. `tvp-3`.
    pub fn anchor(&self) -> String {
        format!("{}-{}", self.record.family.anchor(), self.sequence)
    }
}

/// The finalized, ordered marks of one family.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkSet {
    pub family: Family,
    marks: Vec<AnnotatedMark>,
}

impl MarkSet {
    /// Wrap marks that are already in final order with sequences assigned.
    pub(crate) const fn from_ordered(family: Family, marks: Vec<AnnotatedMark>) -> Self {
        Self { family, marks }
    }

    /// An empty set, used for families that were not requested.
    pub const fn empty(family: Family) -> Self {
        Self {
            family,
            marks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedMark> {
        self.marks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&AnnotatedMark> {
        self.marks.get(index)
    }

    pub fn as_slice(&self) -> &[AnnotatedMark] {
        &self.marks
    }

    /// The mark referenced by `mark.nearest`, if any.
    pub fn neighbor_of(&self, mark: &AnnotatedMark) -> Option<&AnnotatedMark> {
        mark.nearest.as_ref().and_then(|n| self.marks.get(n.index))
    }
}

impl<'a> IntoIterator for &'a MarkSet {
    type Item = &'a AnnotatedMark;
    type IntoIter = std::slice::Iter<'a, AnnotatedMark>;

    fn into_iter(self) -> Self::IntoIter {
        self.marks.iter()
    }
}
