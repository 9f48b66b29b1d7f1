//! Bit-encoding: input bytes → blank unit-length figure (spec.md §4.H).

use crate::error::{SxbpError, SxbpResult};
use crate::figure::{Figure, Segment, MAX_SEGMENTS};
use crate::geometry::{Direction, Rotation};

/// An empty figure (`N = 0`).
pub fn blank_figure() -> Figure {
    Figure::blank()
}

/// Build a figure from an input byte string: `N = 8 * bytes.len() + 1`
/// segments, segment 0 fixed at `(UP, 3)`, every later segment unit length
/// and perpendicular to its predecessor, turning right for a `0` bit and
/// left for a `1` bit, read MSB-first.
pub fn begin_figure(bytes: &[u8]) -> SxbpResult<Figure> {
    let n = 8usize
        .checked_mul(bytes.len())
        .and_then(|bits| bits.checked_add(1))
        .ok_or(SxbpError::CapacityExceeded {
            segments: usize::MAX,
            max: MAX_SEGMENTS,
        })?;
    if n > MAX_SEGMENTS {
        return Err(SxbpError::CapacityExceeded { segments: n, max: MAX_SEGMENTS });
    }

    let mut segments = Vec::with_capacity(n);
    segments.push(Segment::new(Direction::Up, 3));
    let mut direction = Direction::Up;
    for &byte in bytes {
        for bit_index in (0..8).rev() {
            let bit = (byte >> bit_index) & 1 == 1;
            direction = direction.turn(Rotation::from_bit(bit));
            segments.push(Segment::new(direction, 1));
        }
    }
    Ok(Figure::from_segments(segments))
}
