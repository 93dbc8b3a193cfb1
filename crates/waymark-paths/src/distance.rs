use waymark_core::Loc;

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: Loc, b: Loc) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two locations.
#[inline]
pub fn chebyshev(a: Loc, b: Loc) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}
