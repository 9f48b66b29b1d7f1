//! Directions, rotations, and the integer unit-vector map.
//!
//! A figure lives on an axis-aligned integer lattice. Every segment points in
//! one of four directions; turning between segments composes a `Rotation`
//! with the current `Direction` mod 4.

use nalgebra::Vector2;

/// One of the four axis-aligned compass directions.
///
/// Numeric encoding is load-bearing: `UP=0, RIGHT=1, DOWN=2, LEFT=3` so that
/// parity (`as u8 & 1`) distinguishes the vertical pair from the horizontal
/// pair, and `(d + r) mod 4` implements turning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// The unit step vector for this direction: `UP=(0,1)`, `RIGHT=(1,0)`,
    /// `DOWN=(0,-1)`, `LEFT=(-1,0)`.
    #[inline]
    pub fn unit_vector(self) -> Vector2<i64> {
        match self {
            Direction::Up => Vector2::new(0, 1),
            Direction::Right => Vector2::new(1, 0),
            Direction::Down => Vector2::new(0, -1),
            Direction::Left => Vector2::new(-1, 0),
        }
    }

    #[inline]
    fn from_encoding(e: u8) -> Direction {
        match e & 0b11 {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    /// Apply a rotation, yielding the direction after the turn.
    #[inline]
    pub fn turn(self, r: Rotation) -> Direction {
        let d = self as i8;
        let next = (d + r as i8).rem_euclid(4);
        Direction::from_encoding(next as u8)
    }

    /// True iff `self` and `other` share an axis (both vertical or both
    /// horizontal), i.e. their encodings have the same parity.
    #[inline]
    pub fn is_parallel_to(self, other: Direction) -> bool {
        (self as u8) % 2 == (other as u8) % 2
    }

    /// True iff `self` and `other` point along the same axis but away from
    /// each other (encodings differ by exactly 2 mod 4).
    #[inline]
    pub fn is_opposite_to(self, other: Direction) -> bool {
        ((self as i8) - (other as i8)).rem_euclid(4) == 2
    }

    /// True iff this direction runs along the Y axis (`UP`/`DOWN`).
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A 90-degree turn, applied between consecutive segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    LeftTurn = -1,
    RightTurn = 1,
}

impl Rotation {
    /// Decode one input bit into a turn: `0` is clockwise (right), `1` is
    /// anti-clockwise (left), per spec.md §4.H.
    #[inline]
    pub fn from_bit(bit: bool) -> Rotation {
        if bit {
            Rotation::LeftTurn
        } else {
            Rotation::RightTurn
        }
    }
}
