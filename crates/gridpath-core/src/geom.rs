//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Boards are addressed by `(column, row)` pairs. Y grows downward, so
//! "north" is `y - 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer board coordinate: `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const NORTH: Self = Self { x: 0, y: -1 };
    pub const EAST: Self = Self { x: 1, y: 0 };
    pub const SOUTH: Self = Self { x: 0, y: 1 };
    pub const WEST: Self = Self { x: -1, y: 0 };
    pub const NORTH_WEST: Self = Self { x: -1, y: -1 };
    pub const NORTH_EAST: Self = Self { x: 1, y: -1 };
    pub const SOUTH_EAST: Self = Self { x: 1, y: 1 };
    pub const SOUTH_WEST: Self = Self { x: -1, y: 1 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether `self` and `other` differ on both axes.
    ///
    /// For adjacent cells this means the move between them is diagonal.
    #[inline]
    pub const fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }

    /// Component-wise sign, mapping each axis to -1, 0 or 1.
    #[inline]
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// The four cardinal neighbours, in North, East, South, West order.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            self + Self::NORTH,
            self + Self::EAST,
            self + Self::SOUTH,
            self + Self::WEST,
        ]
    }

    /// The four diagonal neighbours, in NorthWest, NorthEast, SouthEast,
    /// SouthWest order.
    #[inline]
    pub fn diagonals(self) -> [Point; 4] {
        [
            self + Self::NORTH_WEST,
            self + Self::NORTH_EAST,
            self + Self::SOUTH_EAST,
            self + Self::SOUTH_WEST,
        ]
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// Board bounds: the cells with `min.x <= x < max.x` and
/// `min.y <= y < max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Bounds spanning two opposite corners, given in any order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Bounds of a `size` board anchored at the origin.
    #[inline]
    pub fn with_size(size: Point) -> Self {
        Self::new(0, 0, size.x, size.y)
    }

    #[inline]
    pub fn size(self) -> Point {
        self.max - self.min
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        let s = self.size();
        s.x.max(0) as usize * s.y.max(0) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Cells in row-major order, matching node ids on a [`Board`](crate::Board).
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let w = self.range.size().x as usize;
        let (col, row) = (self.next % w, self.next / w);
        self.next += 1;
        Some(self.range.min + Point::new(col as i32, row as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}
