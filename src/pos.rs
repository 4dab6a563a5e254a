use std::{cmp::Ordering, ops::Add};

/// A signed grid coordinate. `x` is the column, `y` is the row.
///
/// Coordinates are signed so that boundary arithmetic (e.g. the neighbor
/// above row 0) stays total; the grid decides what is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: compare y coordinate first, then x coordinate
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// The 8 compass offsets around a cell: N, NE, E, SE, S, SW, W, NW.
///
/// The enumeration order is fixed so neighbor traversal is deterministic.
pub(crate) const NEIGHBOR_OFFSETS: [Pos2; 8] = [
    Pos2 { x: 0, y: -1 },
    Pos2 { x: 1, y: -1 },
    Pos2 { x: 1, y: 0 },
    Pos2 { x: 1, y: 1 },
    Pos2 { x: 0, y: 1 },
    Pos2 { x: -1, y: 1 },
    Pos2 { x: -1, y: 0 },
    Pos2 { x: -1, y: -1 },
];
