//! Property tests for the testable invariants of spec.md §8.
//!
//! Input byte strings are kept short (refinement time is not known to be
//! polynomial in segment count, per spec.md §9) but still exercise segment
//! counts well past the self-intersection threshold of 4.

use proptest::prelude::*;
use sxbp::figure::check_invariants;
use sxbp::{begin_figure, dump, load, refine_with_defaults};

fn bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..6)
}

proptest! {
    #[test]
    fn refined_figures_satisfy_all_invariants(bytes in bytes_strategy()) {
        let mut figure = begin_figure(&bytes).unwrap();
        refine_with_defaults(&mut figure).unwrap();
        prop_assert!(check_invariants(&figure).is_ok());
        prop_assert_eq!(figure.solved_count(), figure.len());
    }

    #[test]
    fn dump_then_load_round_trips_segment_for_segment(bytes in bytes_strategy()) {
        let mut figure = begin_figure(&bytes).unwrap();
        refine_with_defaults(&mut figure).unwrap();
        let loaded = load(&dump(&figure)).unwrap();
        prop_assert_eq!(figure.segments(), loaded.segments());
    }

    #[test]
    fn refine_is_idempotent_under_proptest(bytes in bytes_strategy()) {
        let mut figure = begin_figure(&bytes).unwrap();
        refine_with_defaults(&mut figure).unwrap();
        let solved_before = figure.solved_count();
        refine_with_defaults(&mut figure).unwrap();
        prop_assert_eq!(figure.solved_count(), solved_before);
    }

    #[test]
    fn rendering_two_equal_figures_is_bit_for_bit_identical(bytes in bytes_strategy()) {
        let mut a = begin_figure(&bytes).unwrap();
        let mut b = begin_figure(&bytes).unwrap();
        refine_with_defaults(&mut a).unwrap();
        refine_with_defaults(&mut b).unwrap();
        prop_assert_eq!(sxbp::render_to_bitmap(&mut a), sxbp::render_to_bitmap(&mut b));
    }
}
