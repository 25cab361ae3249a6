//! Per-layer spatial index over mark centers.
//!
//! Wraps an rstar R-tree keyed by member position within a layer group, and
//! answers "nearest other member" queries with the same selection rule as the
//! pairwise scan: smallest Euclidean distance, ties to the lowest position.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::utils::{Point, distance};

/// Relative slack used when collecting tie candidates by squared distance.
///
/// Squared distances from the tree and `hypot` distances round differently, so
/// every candidate within this band is re-checked with the exact rule.
const TIE_SLACK: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
struct CenterNode {
    pos: usize,
    point: [f64; 2],
}

impl RTreeObject for CenterNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CenterNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// R-tree over the centers of one layer group.
pub struct LayerIndex {
    centers: Vec<Point>,
    tree: RTree<CenterNode>,
}

impl LayerIndex {
    /// Bulk-load an index. Returns `None` if any center is not finite, since
    /// the tree cannot order such points.
    pub fn build(centers: Vec<Point>) -> Option<Self> {
        if centers.iter().any(|c| !c.0.is_finite() || !c.1.is_finite()) {
            return None;
        }
        let nodes = centers
            .iter()
            .enumerate()
            .map(|(pos, c)| CenterNode {
                pos,
                point: [c.0, c.1],
            })
            .collect();
        Some(Self {
            centers,
            tree: RTree::bulk_load(nodes),
        })
    }

    /// Nearest member other than `pos`, with its distance.
    pub fn nearest_other(&self, pos: usize) -> Option<(usize, f64)> {
        let origin = *self.centers.get(pos)?;
        let query = [origin.0, origin.1];

        let mut band: Option<f64> = None;
        let mut best: Option<(usize, f64)> = None;
        for (node, d2) in self.tree.nearest_neighbor_iter_with_distance_2(&query) {
            if node.pos == pos {
                continue;
            }
            let limit = *band.get_or_insert(d2 * (1.0 + TIE_SLACK) + f64::MIN_POSITIVE);
            if d2 > limit {
                break;
            }
            let d = distance(origin, self.centers[node.pos]);
            best = match best {
                Some((bpos, bd)) if bd < d || (bd == d && bpos < node.pos) => Some((bpos, bd)),
                _ => Some((node.pos, d)),
            };
        }
        best
    }
}

/// Nearest member other than `pos` by exhaustive scan.
///
/// The first strictly smaller distance wins, so ties go to the lowest position.
pub fn nearest_other_pairwise(centers: &[Point], pos: usize) -> Option<(usize, f64)> {
    let origin = *centers.get(pos)?;
    let mut best: Option<(usize, f64)> = None;
    let mut best_d = f64::INFINITY;
    for (other, &c) in centers.iter().enumerate() {
        if other == pos {
            continue;
        }
        let d = distance(origin, c);
        if d < best_d {
            best_d = d;
            best = Some((other, d));
        }
    }
    best
}
