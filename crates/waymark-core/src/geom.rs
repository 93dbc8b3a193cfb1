//! Geometry primitives: [`Loc`] and [`Edge`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Loc
// ---------------------------------------------------------------------------

/// A grid cell identified by (row, column). Rows grow downward, columns grow
/// to the right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loc {
    pub row: i32,
    pub col: i32,
}

impl Loc {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a location shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Loc; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
        ]
    }

    /// All eight neighbours (cardinal + diagonal), in row-major offset order.
    #[inline]
    pub fn neighbors_8(self) -> [Loc; 8] {
        [
            Self::new(self.row - 1, self.col - 1),
            Self::new(self.row - 1, self.col),
            Self::new(self.row - 1, self.col + 1),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col - 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row + 1, self.col + 1),
        ]
    }
}

// --- trait impls for Loc ---

impl PartialOrd for Loc {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Loc {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Loc {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Loc {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// An unordered pair of locations.
///
/// The constructor normalizes endpoint order, so `Edge::new(a, b)` and
/// `Edge::new(b, a)` compare and hash identically, making an `Edge` usable
/// directly as a map or set key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    a: Loc,
    b: Loc,
}

impl Edge {
    /// Create an edge between `a` and `b`.
    #[inline]
    pub fn new(a: Loc, b: Loc) -> Self {
        if b < a { Self { a: b, b: a } } else { Self { a, b } }
    }

    /// The lesser endpoint (row-major order).
    #[inline]
    pub const fn a(self) -> Loc {
        self.a
    }

    /// The greater endpoint.
    #[inline]
    pub const fn b(self) -> Loc {
        self.b
    }

    /// Both endpoints, lesser first.
    #[inline]
    pub const fn endpoints(self) -> (Loc, Loc) {
        (self.a, self.b)
    }

    /// Whether `loc` is one of the endpoints.
    #[inline]
    pub fn touches(self, loc: Loc) -> bool {
        self.a == loc || self.b == loc
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}
