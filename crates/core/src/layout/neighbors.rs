//! Same-layer nearest-neighbor annotation and final ordering.
//!
//! Records are grouped by layer (the empty layer is a group like any other),
//! each record gets its nearest other record of the same group, and then the
//! whole set is ordered by (layer, center x, center y) and numbered from 1.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::layout::params::AnnotateParams;
use crate::layout::spatial::{LayerIndex, nearest_other_pairwise};
use crate::model::{AnnotatedMark, Family, MarkRecord, MarkSet, Nearest};
use crate::utils::{Point, bearing_degrees, round_bearing, round3};

/// Neighbor of a record, by index into the pre-sort record list.
#[derive(Debug, Clone, Copy)]
struct RawNearest {
    index: usize,
    distance: f64,
    angle: f64,
}

/// Total order used for the final listing.
fn listing_order(a: &MarkRecord, b: &MarkRecord) -> Ordering {
    a.layer
        .cmp(&b.layer)
        .then_with(|| OrderedFloat(a.center_x()).cmp(&OrderedFloat(b.center_x())))
        .then_with(|| OrderedFloat(a.center_y()).cmp(&OrderedFloat(b.center_y())))
}

/// Nearest other member for every member of one layer group.
///
/// `members` holds indices into `records` in source order; positions returned
/// by the search are positions within `members`.
fn search_group(
    records: &[MarkRecord],
    members: &[usize],
    params: &AnnotateParams,
) -> Vec<Option<(usize, f64)>> {
    let centers: Vec<Point> = members.iter().map(|&i| records[i].center).collect();

    let index = if params.use_index(centers.len()) {
        LayerIndex::build(centers.clone())
    } else {
        None
    };

    (0..members.len())
        .map(|pos| {
            let hit = match &index {
                Some(index) => index.nearest_other(pos),
                None => nearest_other_pairwise(&centers, pos),
            };
            hit.map(|(other, d)| (members[other], d))
        })
        .collect()
}

fn find_neighbors(records: &[MarkRecord], params: &AnnotateParams) -> Vec<Option<RawNearest>> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, record) in records.iter().enumerate() {
        groups.entry(record.layer.as_str()).or_default().push(i);
    }
    debug!(marks = records.len(), layers = groups.len(), "grouped marks by layer");

    let mut nearest = vec![None; records.len()];
    for members in groups.values() {
        for (&i, hit) in members.iter().zip(search_group(records, members, params)) {
            nearest[i] = hit.map(|(j, d)| RawNearest {
                index: j,
                distance: round3(d),
                angle: round_bearing(bearing_degrees(records[i].center, records[j].center)),
            });
        }
    }
    nearest
}

/// Annotate one family's records and put them in their final order.
///
/// Ties in neighbor distance go to the record that appears first in `records`
/// (lowest source line). Records that share layer and center keep their source
/// order in the listing.
pub fn annotate(family: Family, records: Vec<MarkRecord>, params: &AnnotateParams) -> MarkSet {
    let nearest = find_neighbors(&records, params);

    let mut rows: Vec<(usize, MarkRecord, Option<RawNearest>)> = records
        .into_iter()
        .zip(nearest)
        .enumerate()
        .map(|(i, (record, near))| (i, record, near))
        .collect();
    rows.sort_by(|a, b| listing_order(&a.1, &b.1));

    // Source index -> position in the final listing.
    let mut rank = vec![0usize; rows.len()];
    for (pos, (i, _, _)) in rows.iter().enumerate() {
        rank[*i] = pos;
    }

    let resolved: Vec<Option<Nearest>> = rows
        .iter()
        .map(|(_, _, near)| {
            near.map(|raw| {
                let index = rank[raw.index];
                Nearest {
                    index,
                    name: rows[index].1.identifier.clone(),
                    distance: raw.distance,
                    angle: raw.angle,
                }
            })
        })
        .collect();

    let marks: Vec<AnnotatedMark> = rows
        .into_iter()
        .zip(resolved)
        .enumerate()
        .map(|(pos, ((_, record, _), nearest))| AnnotatedMark {
            record,
            nearest,
            sequence: pos + 1,
        })
        .collect();

    debug!(
        %family,
        marks = marks.len(),
        with_neighbor = marks.iter().filter(|m| m.nearest.is_some()).count(),
        "annotated marks"
    );
    MarkSet::from_ordered(family, marks)
}
