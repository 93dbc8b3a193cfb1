use waymark_core::Loc;

/// Cached neighbor computation helper.
///
/// Provides methods for enumerating cardinal (4-way) or all (8-way)
/// neighbors of a grid cell, filtered by a predicate (typically a grid
/// bounds check), so out-of-range cells never reach the search core.
pub struct Neighbors {
    buf: Vec<Loc>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 4-directional (cardinal) neighbors of `loc`, keeping only
    /// those for which `keep` returns `true`.
    pub fn cardinal(&mut self, loc: Loc, keep: impl Fn(Loc) -> bool) -> &[Loc] {
        self.buf.clear();
        for n in loc.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return all eight neighbors of `loc`, keeping only those for which
    /// `keep` returns `true`. Order is fixed (row-major over the offsets).
    pub fn all(&mut self, loc: Loc, keep: impl Fn(Loc) -> bool) -> &[Loc] {
        self.buf.clear();
        for n in loc.neighbors_8() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
