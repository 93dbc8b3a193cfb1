//! Randomized Kruskal maze carving.

use std::collections::HashSet;

use rand::{Rng, RngExt};
use waymark_core::{Edge, Loc};

use crate::dsu::DisjointSet;
use crate::queue::MinQueue;

/// Carve a random spanning tree over a rows × cols cell grid.
///
/// Every rightward and downward cell pair becomes a candidate passage with a
/// uniform random weight in `[0, 1)`; passages are then accepted in
/// ascending weight order whenever they join two previously disconnected
/// cells (Kruskal). The result is a perfect maze: exactly
/// `rows * cols - 1` edges, no cycles, every cell reachable from every
/// other. An empty grid yields no edges.
///
/// The edge set is fully determined by the values drawn from `rng`, so a
/// seeded generator reproduces the same maze.
pub fn kruskal_maze<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> HashSet<Edge> {
    let mut result = HashSet::new();
    if rows == 0 || cols == 0 {
        return result;
    }

    let cell = |row: usize, col: usize| Loc::new(row as i32, col as i32);
    let mut queue: MinQueue<Edge> = MinQueue::new();

    for row in 0..rows {
        for col in 0..cols {
            let curr = cell(row, col);
            if col + 1 < cols {
                queue.enqueue(Edge::new(curr, cell(row, col + 1)), rng.random());
            }
            if row + 1 < rows {
                queue.enqueue(Edge::new(curr, cell(row + 1, col)), rng.random());
            }
        }
    }

    let mut sets = DisjointSet::new(rows * cols);
    let idx = |loc: Loc| loc.row as usize * cols + loc.col as usize;

    while let Some((edge, _)) = queue.dequeue_min() {
        let (a, b) = edge.endpoints();
        if sets.union(idx(a), idx(b)) {
            result.insert(edge);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Assert the spanning-tree property: edge count, connectivity, no cycle.
    fn assert_spanning(edges: &HashSet<Edge>, rows: usize, cols: usize) {
        assert_eq!(edges.len(), rows * cols - 1);
        let idx = |loc: Loc| loc.row as usize * cols + loc.col as usize;
        let mut sets = DisjointSet::new(rows * cols);
        for edge in edges {
            let (a, b) = edge.endpoints();
            // A rejected union would mean the edge closes a cycle.
            assert!(sets.union(idx(a), idx(b)), "cycle through {edge}");
        }
        for i in 1..rows * cols {
            assert!(sets.same_set(0, i), "cell {i} unreachable");
        }
    }

    #[test]
    fn one_cell_maze_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(kruskal_maze(1, 1, &mut rng).is_empty());
    }

    #[test]
    fn empty_grid_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(kruskal_maze(0, 4, &mut rng).is_empty());
        assert!(kruskal_maze(4, 0, &mut rng).is_empty());
    }

    #[test]
    fn two_by_two_maze_has_three_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let edges = kruskal_maze(2, 2, &mut rng);
        assert_spanning(&edges, 2, 2);
    }

    #[test]
    fn maze_spans_rectangular_grid() {
        let mut rng = StdRng::seed_from_u64(99);
        let edges = kruskal_maze(4, 5, &mut rng);
        assert_spanning(&edges, 4, 5);
    }

    #[test]
    fn single_row_and_single_column() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_spanning(&kruskal_maze(1, 5, &mut rng), 1, 5);
        // A 5×1 grid only has vertical pairs, so this exercises the
        // row-bound check on downward adjacency.
        assert_spanning(&kruskal_maze(5, 1, &mut rng), 5, 1);
    }

    #[test]
    fn edges_connect_cardinal_grid_neighbors() {
        let mut rng = StdRng::seed_from_u64(11);
        let (rows, cols) = (3, 4);
        let edges = kruskal_maze(rows, cols, &mut rng);
        for edge in &edges {
            let (a, b) = edge.endpoints();
            assert_eq!(manhattan(a, b), 1, "non-adjacent edge {edge}");
            for loc in [a, b] {
                assert!(loc.row >= 0 && (loc.row as usize) < rows);
                assert!(loc.col >= 0 && (loc.col as usize) < cols);
            }
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_maze() {
        let first = kruskal_maze(6, 6, &mut StdRng::seed_from_u64(0xC0FFEE));
        let second = kruskal_maze(6, 6, &mut StdRng::seed_from_u64(0xC0FFEE));
        assert_eq!(first, second);
    }

    #[test]
    fn every_seed_yields_a_spanning_tree() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let edges = kruskal_maze(5, 4, &mut rng);
            assert_spanning(&edges, 5, 4);
        }
    }
}
