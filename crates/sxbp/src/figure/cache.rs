//! Incrementally materialised vertex cache (spec.md §4.C).
//!
//! The cache does not just remember segment endpoints: it remembers every
//! lattice point each segment traverses, because the collision predicate
//! (§4.E) needs point-level granularity, not just bounding endpoints. Each
//! segment's point range excludes the vertex it shares with its predecessor
//! — that vertex already belongs to the predecessor's own range — which is
//! exactly how §4.E's "shared vertex is not a collision" falls out for free
//! instead of needing a special case.

use std::collections::HashMap;
use std::ops::Range;

use crate::figure::Segment;

pub type Point = (i64, i64);

#[derive(Clone, Debug, Default)]
pub struct CoordinateCache {
    /// Flattened lattice points of every cached segment, in segment order.
    points: Vec<Point>,
    /// `ranges[i]` indexes into `points` for segment `i`.
    ranges: Vec<Range<usize>>,
    /// Earliest-owning segment for every cached point, for O(1) collision lookups.
    owner: HashMap<Point, usize>,
    /// Highest segment index whose range is valid; cache is valid for `[0, watermark)`.
    watermark: usize,
}

impl CoordinateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp the watermark down to `at_least_invalid_from` and forget every
    /// point owned by segments at or beyond it. Must run before any write to
    /// segment `at_least_invalid_from`'s direction or length becomes observable.
    pub fn invalidate_from(&mut self, at_least_invalid_from: usize) {
        if at_least_invalid_from >= self.watermark {
            return;
        }
        let cut = self.ranges[at_least_invalid_from].start;
        self.owner.retain(|_, &mut o| o < at_least_invalid_from);
        self.points.truncate(cut);
        self.ranges.truncate(at_least_invalid_from);
        self.watermark = at_least_invalid_from;
    }

    /// Ensure segment `k`'s endpoint (and every lattice point it traverses)
    /// is materialised. No-op if already valid.
    pub fn ensure_cached_through(&mut self, segments: &[Segment], k: usize) {
        if self.watermark > k {
            return;
        }
        self.points.reserve(
            segments[self.watermark..=k]
                .iter()
                .map(|s| s.length as usize + 1)
                .sum(),
        );
        for (i, &seg) in segments.iter().enumerate().take(k + 1).skip(self.watermark) {
            let start = self.vertex_before(i);
            let vector = seg.direction.unit_vector();
            let range_start = self.points.len();
            if i == 0 {
                self.points.push(start);
            }
            let mut cur = nalgebra::Vector2::new(start.0, start.1);
            for _ in 0..seg.length {
                cur += vector;
                self.points.push((cur.x, cur.y));
            }
            // A zero-length transient segment still needs a non-empty range
            // so `vertex(i)` resolves; it degenerates to the shared start point.
            if self.points.len() == range_start {
                self.points.push(start);
            }
            let range = range_start..self.points.len();
            for &p in &self.points[range.clone()] {
                self.owner.entry(p).or_insert(i);
            }
            self.ranges.push(range);
        }
        self.watermark = k + 1;
    }

    /// The polyline's position after segment `i` completes. Requires `i < watermark`.
    pub fn vertex(&self, i: usize) -> Point {
        self.points[self.ranges[i].end - 1]
    }

    /// The polyline's position before segment `i` starts (the origin for `i == 0`).
    pub fn vertex_before(&self, i: usize) -> Point {
        if i == 0 {
            (0, 0)
        } else {
            self.vertex(i - 1)
        }
    }

    /// Every lattice point segment `i` owns (excluding the vertex shared with
    /// its predecessor). Requires `i < watermark`.
    pub fn segment_points(&self, i: usize) -> &[Point] {
        &self.points[self.ranges[i].clone()]
    }

    /// The lowest-indexed segment in `[0, before)` owning lattice point `p`, if any.
    pub fn owner_before(&self, p: Point, before: usize) -> Option<usize> {
        self.owner.get(&p).copied().filter(|&o| o < before)
    }
}
