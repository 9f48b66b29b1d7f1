//! The inner-loop backtracker (spec.md §4.G, "Inner loop `resize`").
//!
//! Kept as an explicit index-walking loop rather than recursion: the source
//! walks segment indices up and down by mutating local state, and recursion
//! depth here is bounded only by `N`, which can be large (spec.md §9).

use crate::collision::find_collision;
use crate::figure::Figure;
use crate::heuristic::suggest_length;

/// Grow `segments[target_index]` to `target_length`, backtracking into
/// earlier segments as needed until the figure is collision-free through
/// `target_index`.
pub(super) fn resize(figure: &mut Figure, target_index: usize, target_length: u32, threshold: u32) {
    let mut cur_index = target_index;
    let mut cur_length = target_length;
    loop {
        figure.set_length(cur_index, cur_length);
        figure.ensure_cached_through(cur_index);
        match find_collision(figure, cur_index) {
            Some(collider) => {
                cur_length = suggest_length(figure, cur_index, collider, threshold);
                cur_index -= 1;
            }
            None if cur_index != target_index => {
                cur_index += 1;
                cur_length = 1;
            }
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{check_invariants, Segment};
    use crate::geometry::Direction;

    #[test]
    fn resolves_a_spiral_by_lengthening_the_colliding_predecessor() {
        // Up 3, Right 1, Down 1, Left 1 would close onto segment 0 at unit
        // lengths; resize(3, 1) must grow segment 2 until it clears.
        let mut f = crate::figure::Figure::from_segments(vec![
            Segment::new(Direction::Up, 3),
            Segment::new(Direction::Right, 3),
            Segment::new(Direction::Down, 1),
            Segment::new(Direction::Left, 1),
        ]);
        resize(&mut f, 3, 1, 1);
        f.ensure_cached_through(3);
        assert_eq!(find_collision(&f, 3), None);
    }

    #[test]
    fn result_satisfies_figure_invariants() {
        let mut f = crate::encode::begin_figure(b"hi").unwrap();
        for i in 1..f.len() {
            resize(&mut f, i, 1, 1);
            f.set_solved_count(i + 1);
        }
        assert!(check_invariants(&f).is_ok());
    }
}
