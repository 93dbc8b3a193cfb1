use waymark_core::{Loc, TerrainGrid};

use crate::distance::chebyshev;

/// Cost model for one step between two adjacent cells.
pub trait EdgeCost {
    /// Cost of moving from `from` to the adjacent cell `to`. Must be
    /// non-negative; `f64::INFINITY` marks the step as impassable.
    fn cost(&self, from: Loc, to: Loc, grid: &TerrainGrid) -> f64;
}

/// Adapter turning a plain function or closure into an [`EdgeCost`].
#[derive(Debug, Clone, Copy)]
pub struct CostFn<F>(pub F);

impl<F: Fn(Loc, Loc, &TerrainGrid) -> f64> EdgeCost for CostFn<F> {
    #[inline]
    fn cost(&self, from: Loc, to: Loc, grid: &TerrainGrid) -> f64 {
        (self.0)(from, to, grid)
    }
}

/// Estimate of the remaining cost from a cell to the goal.
pub trait Heuristic {
    /// Estimated cost from `from` to `goal`. Must never overestimate the
    /// true remaining cost (admissible).
    fn estimate(&self, from: Loc, goal: Loc, grid: &TerrainGrid) -> f64;
}

/// Adapter turning a plain function or closure into a [`Heuristic`].
#[derive(Debug, Clone, Copy)]
pub struct HeuristicFn<F>(pub F);

impl<F: Fn(Loc, Loc, &TerrainGrid) -> f64> Heuristic for HeuristicFn<F> {
    #[inline]
    fn estimate(&self, from: Loc, goal: Loc, grid: &TerrainGrid) -> f64 {
        (self.0)(from, goal, grid)
    }
}

/// Uniform cost model: every step costs 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCost;

impl EdgeCost for UnitCost {
    #[inline]
    fn cost(&self, _from: Loc, _to: Loc, _grid: &TerrainGrid) -> f64 {
        1.0
    }
}

/// Terrain-driven cost model: the mean of the two cells' values.
///
/// Cells outside the grid count as impassable.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellCost;

impl EdgeCost for CellCost {
    #[inline]
    fn cost(&self, from: Loc, to: Loc, grid: &TerrainGrid) -> f64 {
        let a = grid.at(from).unwrap_or(f64::INFINITY);
        let b = grid.at(to).unwrap_or(f64::INFINITY);
        (a + b) / 2.0
    }
}

/// Zero heuristic: degrades the search to plain Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _from: Loc, _goal: Loc, _grid: &TerrainGrid) -> f64 {
        0.0
    }
}

/// Chebyshev-distance heuristic.
///
/// Admissible and consistent for 8-way movement when every step costs at
/// least 1 (e.g. [`UnitCost`], or [`CellCost`] over terrain values ≥ 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct ChebyshevHeuristic;

impl Heuristic for ChebyshevHeuristic {
    #[inline]
    fn estimate(&self, from: Loc, goal: Loc, _grid: &TerrainGrid) -> f64 {
        chebyshev(from, goal) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cost_ignores_terrain() {
        let g = TerrainGrid::uniform(2, 2, 9.0);
        assert_eq!(UnitCost.cost(Loc::new(0, 0), Loc::new(0, 1), &g), 1.0);
    }

    #[test]
    fn cell_cost_averages_endpoints() {
        let mut g = TerrainGrid::new(2, 2);
        g.set(Loc::new(0, 1), 3.0);
        assert_eq!(CellCost.cost(Loc::new(0, 0), Loc::new(0, 1), &g), 2.0);
    }

    #[test]
    fn cell_cost_treats_out_of_bounds_as_impassable() {
        let g = TerrainGrid::new(2, 2);
        let c = CellCost.cost(Loc::new(0, 0), Loc::new(-1, 0), &g);
        assert!(c.is_infinite());
    }

    #[test]
    fn closures_are_models() {
        let g = TerrainGrid::new(2, 2);
        let cost = CostFn(|_: Loc, to: Loc, grid: &TerrainGrid| {
            grid.at(to).unwrap_or(f64::INFINITY)
        });
        assert_eq!(cost.cost(Loc::new(0, 0), Loc::new(0, 1), &g), 1.0);
        let h = HeuristicFn(|from: Loc, goal: Loc, _: &TerrainGrid| chebyshev(from, goal) as f64);
        assert_eq!(h.estimate(Loc::new(0, 0), Loc::new(1, 1), &g), 1.0);
    }

    #[test]
    fn chebyshev_heuristic_never_overestimates_unit_steps() {
        let g = TerrainGrid::new(5, 5);
        // One diagonal step covers one unit of Chebyshev distance.
        let h = ChebyshevHeuristic.estimate(Loc::new(0, 0), Loc::new(4, 3), &g);
        assert_eq!(h, 4.0);
    }
}
