//! Best-first shortest-path search over a terrain grid.

use std::fmt;

use waymark_core::{Loc, TerrainGrid};

use crate::neighbors::Neighbors;
use crate::queue::MinQueue;
use crate::traits::{EdgeCost, Heuristic, ZeroHeuristic};

// ---------------------------------------------------------------------------
// Visitation states
// ---------------------------------------------------------------------------

/// Per-cell visitation state during one search.
///
/// A cell only ever moves forward through these states:
/// `Unvisited → Frontier → Finalized`. A finalized cell is never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitState {
    /// Not yet reached by the search.
    #[default]
    Unvisited,
    /// Queued with a tentative distance.
    Frontier,
    /// Distance settled.
    Finalized,
}

// ---------------------------------------------------------------------------
// Observer
// ---------------------------------------------------------------------------

/// Hook invoked on every cell state transition, for visualization.
///
/// The default implementation does nothing, and observers cannot influence
/// the computed path.
pub trait SearchObserver {
    /// `loc` just transitioned to `state`.
    fn on_state(&mut self, grid: &TerrainGrid, loc: Loc, state: VisitState) {
        let _ = (grid, loc, state);
    }
}

/// The do-nothing observer used by [`shortest_path`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors reported by [`shortest_path`] and [`dijkstra_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The goal is not reachable from the start.
    Unreachable { start: Loc, end: Loc },
    /// An endpoint lies outside the grid.
    OutOfBounds(Loc),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { start, end } => {
                write!(f, "no path from {start} to {end}")
            }
            Self::OutOfBounds(loc) => write!(f, "{loc} is outside the grid"),
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// Search context
// ---------------------------------------------------------------------------

/// Sentinel parent index for cells without a predecessor.
const NO_PARENT: usize = usize::MAX;

/// Transient per-call search state, one entry per grid cell.
///
/// Groups the visitation, distance, and predecessor maps so the main loop
/// and the reconstruction step share them explicitly.
struct SearchContext {
    cols: usize,
    state: Vec<VisitState>,
    dist: Vec<f64>,
    parent: Vec<usize>,
}

impl SearchContext {
    fn new(grid: &TerrainGrid) -> Self {
        let len = grid.len();
        Self {
            cols: grid.cols(),
            state: vec![VisitState::Unvisited; len],
            dist: vec![f64::INFINITY; len],
            parent: vec![NO_PARENT; len],
        }
    }

    /// Flat index of an in-bounds location.
    #[inline]
    fn idx(&self, loc: Loc) -> usize {
        loc.row as usize * self.cols + loc.col as usize
    }

    /// Location of a flat index.
    #[inline]
    fn loc(&self, idx: usize) -> Loc {
        Loc::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Walk predecessor links back from `end` and reverse into start → end
    /// order.
    fn reconstruct(&self, end: usize) -> Vec<Loc> {
        let mut path = Vec::new();
        let mut ci = end;
        while ci != NO_PARENT {
            path.push(self.loc(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Find the cheapest path from `start` to `end` over the grid's 8-way
/// adjacency.
///
/// `cost` prices each step and `heuristic` estimates the remaining cost to
/// the goal; with an admissible, consistent heuristic the result is
/// cost-optimal, and with [`ZeroHeuristic`] the search is plain Dijkstra.
/// The returned path contains both endpoints in traversal order, and
/// `start == end` yields the single-element path.
///
/// A step priced at `f64::INFINITY` is impassable; if no finite-cost path
/// exists the search reports [`SearchError::Unreachable`] rather than a
/// partial result.
pub fn shortest_path<C, H>(
    grid: &TerrainGrid,
    start: Loc,
    end: Loc,
    cost: &C,
    heuristic: &H,
) -> Result<Vec<Loc>, SearchError>
where
    C: EdgeCost + ?Sized,
    H: Heuristic + ?Sized,
{
    shortest_path_observed(grid, start, end, cost, heuristic, &mut NoopObserver)
}

/// [`shortest_path`] with a [`SearchObserver`] receiving every cell state
/// transition.
pub fn shortest_path_observed<C, H>(
    grid: &TerrainGrid,
    start: Loc,
    end: Loc,
    cost: &C,
    heuristic: &H,
    observer: &mut impl SearchObserver,
) -> Result<Vec<Loc>, SearchError>
where
    C: EdgeCost + ?Sized,
    H: Heuristic + ?Sized,
{
    if !grid.in_bounds(start) {
        return Err(SearchError::OutOfBounds(start));
    }
    if !grid.in_bounds(end) {
        return Err(SearchError::OutOfBounds(end));
    }
    if start == end {
        return Ok(vec![start]);
    }

    let mut ctx = SearchContext::new(grid);
    let mut queue: MinQueue<usize> = MinQueue::new();
    let mut neighbors = Neighbors::new();

    let start_idx = ctx.idx(start);
    let end_idx = ctx.idx(end);

    ctx.state[start_idx] = VisitState::Frontier;
    ctx.dist[start_idx] = 0.0;
    observer.on_state(grid, start, VisitState::Frontier);
    queue.enqueue(start_idx, heuristic.estimate(start, end, grid));

    let mut found = false;
    while let Some((ci, _)) = queue.dequeue_min() {
        let curr = ctx.loc(ci);
        ctx.state[ci] = VisitState::Finalized;
        observer.on_state(grid, curr, VisitState::Finalized);

        if ci == end_idx {
            found = true;
            break;
        }

        let curr_dist = ctx.dist[ci];
        for &n in neighbors.all(curr, |l| grid.in_bounds(l)) {
            let ni = ctx.idx(n);
            let candidate = curr_dist + cost.cost(curr, n, grid);
            if !candidate.is_finite() {
                // Impassable step.
                continue;
            }
            match ctx.state[ni] {
                VisitState::Unvisited => {
                    ctx.state[ni] = VisitState::Frontier;
                    ctx.dist[ni] = candidate;
                    ctx.parent[ni] = ci;
                    observer.on_state(grid, n, VisitState::Frontier);
                    queue.enqueue(ni, candidate + heuristic.estimate(n, end, grid));
                }
                VisitState::Frontier if candidate < ctx.dist[ni] => {
                    ctx.dist[ni] = candidate;
                    ctx.parent[ni] = ci;
                    queue.decrease_key(ni, candidate + heuristic.estimate(n, end, grid));
                }
                _ => {}
            }
        }
    }

    if !found {
        return Err(SearchError::Unreachable { start, end });
    }
    Ok(ctx.reconstruct(end_idx))
}

/// [`shortest_path`] with a zero heuristic: plain Dijkstra.
pub fn dijkstra_path<C>(
    grid: &TerrainGrid,
    start: Loc,
    end: Loc,
    cost: &C,
) -> Result<Vec<Loc>, SearchError>
where
    C: EdgeCost + ?Sized,
{
    shortest_path(grid, start, end, cost, &ZeroHeuristic)
}
