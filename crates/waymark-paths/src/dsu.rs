//! Disjoint-set (union-find) over dense cell indices.

/// Union-find over the elements `0..len` with path compression.
///
/// Roots are merged without rank balancing: [`union`](Self::union) attaches
/// `b`'s root under `a`'s root. Path compression keeps chains short enough
/// for grid-sized inputs.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    /// Create `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Number of elements (not sets).
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The representative of `x`'s set.
    ///
    /// Every node on the walked chain is re-pointed at the root, so repeated
    /// queries stay cheap.
    ///
    /// # Panics
    ///
    /// If `x >= len`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: compress the walked chain.
        let mut cur = x;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` (and changes nothing) if they are already in the same
    /// set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent[rb] = ra;
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut sets = DisjointSet::new(4);
        assert_eq!(sets.len(), 4);
        assert!(!sets.is_empty());
        for i in 0..4 {
            assert_eq!(sets.find(i), i);
        }
        assert!(!sets.same_set(0, 1));
    }

    #[test]
    fn union_merges_and_reports() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.same_set(0, 1));
        // Merging again is a no-op.
        assert!(!sets.union(1, 0));
    }

    #[test]
    fn union_is_transitive() {
        let mut sets = DisjointSet::new(5);
        sets.union(0, 1);
        sets.union(2, 3);
        assert!(!sets.same_set(1, 3));
        sets.union(1, 2);
        assert!(sets.same_set(0, 3));
        assert!(!sets.same_set(0, 4));
    }

    #[test]
    fn find_compresses_paths() {
        let mut sets = DisjointSet::new(4);
        // Build the chain 3 -> 2 -> 1 -> 0 by merging bottom-up.
        sets.union(2, 3);
        sets.union(1, 2);
        sets.union(0, 1);
        assert_eq!(sets.find(3), 0);
        // The walked chain now points straight at the root.
        assert_eq!(sets.parent[3], 0);
        assert_eq!(sets.parent[2], 0);
    }

    #[test]
    #[should_panic]
    fn find_out_of_range_panics() {
        let mut sets = DisjointSet::new(2);
        sets.find(2);
    }
}
