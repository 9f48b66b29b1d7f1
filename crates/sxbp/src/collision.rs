//! Collision predicate (spec.md §4.E).
//!
//! Two segments collide iff the closed lattice-point sets they traverse
//! intersect. The coordinate cache already excludes each segment's shared
//! turn vertex from its own point set (see [`crate::figure`]'s cache module),
//! so that case needs no special handling here.

use crate::figure::Figure;

/// Does segment `last` collide with any earlier segment? If so, name the
/// lowest-indexed collider (spec.md §4.E determinism clause).
///
/// Requires the coordinate cache to already be materialised through `last`
/// (the caller in [`crate::refine`] ensures this before calling).
pub fn find_collision(figure: &Figure, last: usize) -> Option<usize> {
    // Geometrically impossible to self-intersect below 4 segments.
    if figure.len() < 4 {
        return None;
    }
    // A brute-force per-segment scan would be able to skip `last - 2`
    // (perpendicular to `last` and touching it only at the shared vertex,
    // per invariant (2)); the owner map below already makes that scan
    // unnecessary, since every point's earliest owner is looked up directly.
    let mut collider: Option<usize> = None;
    for &point in figure.segment_points(last) {
        if let Some(owner) = figure.owner_before(point, last) {
            collider = Some(match collider {
                Some(best) => best.min(owner),
                None => owner,
            });
        }
    }
    collider
}
