//! The refinement engine (spec.md §4.G): a two-level state machine that
//! finalises segment lengths one at a time, backtracking into earlier
//! segments whenever a collision is introduced.

mod backtrack;

use std::time::Instant;

use crate::error::{SxbpError, SxbpResult};
use crate::figure::Figure;
use crate::progress::{NullObserver, ProgressObserver, ProgressSignal};

/// Which refinement algorithm to run (spec.md §6, "method").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefineMethod {
    /// The only implemented variant: grow each segment from its current
    /// minimal length, shrinking the search back into earlier segments on
    /// collision.
    ShrinkFromEnd,
    /// Mentioned but never implemented by the source this was distilled
    /// from; always returns `Unimplemented`. Its algorithm is not specified
    /// anywhere and is deliberately not invented here.
    GrowFromStart,
}

/// Tuning knobs for [`refine`] (spec.md §6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefineOptions {
    /// Perfection threshold `T`; `0` disables the aggressive heuristic.
    pub threshold: u32,
    /// Upper bound on the last segment index to finalise; saturates at `N`.
    pub max_segments: usize,
    pub method: RefineMethod,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            threshold: 1,
            max_segments: usize::MAX,
            method: RefineMethod::ShrinkFromEnd,
        }
    }
}

/// Finalise segment lengths for `[figure.solved_count(), min(options.max_segments, N))`.
///
/// Idempotent: calling this again with the same options on an
/// already-refined figure returns immediately (spec.md §8.6). Calls
/// `observer.on_progress` at most once per successful outer-loop iteration,
/// never from inside the backtracker; the figure is fully invariant-respecting
/// at each call (spec.md §5).
pub fn refine(
    figure: &mut Figure,
    options: RefineOptions,
    observer: &mut dyn ProgressObserver,
) -> SxbpResult<()> {
    if options.method != RefineMethod::ShrinkFromEnd {
        return Err(SxbpError::Unimplemented { method: "grow-from-start" });
    }
    if figure.is_empty() {
        return Err(SxbpError::PreconditionFailed {
            reason: "cannot refine an empty figure".into(),
        });
    }

    let cap = options.max_segments.min(figure.len());
    let mut checkpoint = Instant::now();
    for i in figure.solved_count()..cap {
        backtrack::resize(figure, i, 1, options.threshold);
        figure.set_solved_count(i + 1);
        figure.add_seconds_spent(checkpoint.elapsed());
        checkpoint = Instant::now();
        if observer.on_progress(figure, i + 1, cap) == ProgressSignal::Cancel {
            return Err(SxbpError::Cancelled);
        }
    }
    Ok(())
}

/// `refine` with the default options and no progress observer.
pub fn refine_with_defaults(figure: &mut Figure) -> SxbpResult<()> {
    refine(figure, RefineOptions::default(), &mut NullObserver)
}
