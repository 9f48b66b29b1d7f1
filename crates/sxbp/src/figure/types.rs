//! The figure data model (spec.md §3).

use std::time::Duration;

use crate::error::{SxbpError, SxbpResult};
use crate::figure::cache::{CoordinateCache, Point};
use crate::geometry::Direction;

/// Maximum number of segments a figure may hold. `begin_figure` rejects
/// inputs whose bit count would exceed this with `CapacityExceeded`.
///
/// 8 bytes short of `2^24` segments, which already implies gigabytes of
/// coordinate-cache storage at unit length; chosen as a generous but finite
/// ceiling rather than a tight one, per spec.md §4.B ("MAY reject").
pub const MAX_SEGMENTS: usize = 1 << 24;

/// A directed segment: a `direction` and an integer `length` (spec.md §3,
/// fits in 30 bits — see [`crate::serialize`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub direction: Direction,
    pub length: u32,
}

impl Segment {
    pub fn new(direction: Direction, length: u32) -> Self {
        Self { direction, length }
    }
}

/// An owned, self-avoiding-in-progress polyline (spec.md §3).
#[derive(Clone, Debug)]
pub struct Figure {
    segments: Vec<Segment>,
    cache: CoordinateCache,
    solved_count: usize,
    seconds_spent: Duration,
}

impl Figure {
    /// An empty figure (`N = 0`), with no backing storage.
    pub fn blank() -> Self {
        Self {
            segments: Vec::new(),
            cache: CoordinateCache::new(),
            solved_count: 0,
            seconds_spent: Duration::ZERO,
        }
    }

    /// Build a figure directly from a segment array. Asserts invariant (1)
    /// (segment 0 is `(UP, 3)`) in debug builds; callers outside this crate
    /// should go through [`crate::encode::begin_figure`] instead.
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        debug_assert!(
            segments.is_empty()
                || (segments[0].direction == Direction::Up && segments[0].length == 3),
            "segment 0 must be (UP, 3)"
        );
        // Segment 0 is fixed at construction time, so it counts as already
        // solved; the refinement engine's outer loop then starts at index 1.
        let solved_count = if segments.is_empty() { 0 } else { 1 };
        Self {
            segments,
            cache: CoordinateCache::new(),
            solved_count,
            seconds_spent: Duration::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    pub fn lines_remaining(&self) -> usize {
        self.len() - self.solved_count
    }

    pub fn seconds_spent(&self) -> Duration {
        self.seconds_spent
    }

    pub(crate) fn add_seconds_spent(&mut self, d: Duration) {
        self.seconds_spent += d;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, i: usize) -> Segment {
        self.segments[i]
    }

    /// Advance `solved_count`. Monotone: never decreases (spec.md §5, §8.4).
    pub(crate) fn set_solved_count(&mut self, n: usize) {
        debug_assert!(n >= self.solved_count, "solved_count must not decrease");
        self.solved_count = n;
    }

    /// Write segment `i`'s length, clamping the cache watermark first so the
    /// invalidation policy of §4.C holds before the write is observable.
    pub(crate) fn set_length(&mut self, i: usize, length: u32) {
        self.cache.invalidate_from(i);
        self.segments[i].length = length;
    }

    pub(crate) fn ensure_cached_through(&mut self, k: usize) {
        self.cache.ensure_cached_through(&self.segments, k);
    }

    pub(crate) fn vertex(&self, i: usize) -> Point {
        self.cache.vertex(i)
    }

    pub(crate) fn vertex_before(&self, i: usize) -> Point {
        self.cache.vertex_before(i)
    }

    pub(crate) fn segment_points(&self, i: usize) -> &[Point] {
        self.cache.segment_points(i)
    }

    pub(crate) fn owner_before(&self, p: Point, before: usize) -> Option<usize> {
        self.cache.owner_before(p, before)
    }

    /// Release a figure's storage. Rust already frees eagerly on scope exit;
    /// this exists only for symmetry with spec.md §6's `free_figure` entry
    /// for callers that want an explicit release point.
    pub fn release(self) {
        drop(self)
    }
}

/// Validate invariants (2)-(4) over the solved prefix `[0, solved_count)`.
/// Exposed for property tests (spec.md §8); not required by normal callers.
pub fn check_invariants(figure: &Figure) -> SxbpResult<()> {
    if figure.is_empty() {
        return Ok(());
    }
    if figure.segment(0).direction != Direction::Up || figure.segment(0).length != 3 {
        return Err(SxbpError::PreconditionFailed {
            reason: "segment 0 is not (UP, 3)".into(),
        });
    }
    for i in 1..figure.solved_count().min(figure.len()) {
        let prev = figure.segment(i - 1);
        let cur = figure.segment(i);
        if prev.direction.is_parallel_to(cur.direction) {
            return Err(SxbpError::PreconditionFailed {
                reason: format!("segments {} and {} are not perpendicular", i - 1, i),
            });
        }
        if cur.length == 0 {
            return Err(SxbpError::PreconditionFailed {
                reason: format!("segment {i} has length 0 below solved_count"),
            });
        }
    }
    Ok(())
}
