//! Length-suggestion heuristic (spec.md §4.F).
//!
//! Given a collision between the just-placed segment `i` and an earlier
//! `collider`, proposes a new length for segment `i - 1` that is likely to
//! resolve it in one step. [`crate::refine`] re-validates the suggestion by
//! re-running the collision predicate; this is only ever a heuristic.

use crate::figure::Figure;
use crate::geometry::Direction;

fn axis_coord(direction: Direction, point: (i64, i64)) -> i64 {
    if direction.is_vertical() {
        point.1
    } else {
        point.0
    }
}

/// Suggest a new length for `segments[i - 1]` ("previous") given that
/// segment `i` just collided with `segments[collider]` ("rigid").
///
/// Requires `i >= 1`, `collider < i - 1`, and the cache materialised through
/// `i`. `threshold` is the perfection threshold `T` of spec.md §4.F.
pub fn suggest_length(figure: &Figure, i: usize, collider: usize, threshold: u32) -> u32 {
    let previous = figure.segment(i - 1);
    let rigid = figure.segment(collider);

    // Rule 1: above the perfection threshold, defer to the trivial increment.
    if threshold > 0 && figure.segment(i).length > threshold {
        return previous.length + 1;
    }
    // Rule 2: non-parallel guard.
    if !previous.direction.is_parallel_to(rigid.direction) {
        return previous.length + 1;
    }
    // Rule 3: parallel case — move `previous`'s far end just past `rigid`.
    let p_a = figure.vertex_before(i - 1);
    let r_a = figure.vertex_before(collider);
    let r_b = figure.vertex(collider);
    let relevant_endpoint = if previous.direction == rigid.direction {
        r_a
    } else {
        r_b
    };
    let delta = (axis_coord(previous.direction, relevant_endpoint) - axis_coord(previous.direction, p_a))
        .unsigned_abs() as u32;
    delta + rigid.length + 1
}
