//! Shortest-path search and maze carving on 2D grids.
//!
//! Two algorithm families operate on a [`TerrainGrid`](waymark_core::TerrainGrid):
//!
//! - **Best-first shortest path** ([`shortest_path`], [`dijkstra_path`]):
//!   A* over the grid's 8-way adjacency, driven by pluggable [`EdgeCost`]
//!   and [`Heuristic`] models. With [`ZeroHeuristic`] the search degrades to
//!   plain Dijkstra.
//! - **Maze carving** ([`kruskal_maze`]): a randomized Kruskal spanning tree
//!   over the grid's 4-way adjacency, built on [`DisjointSet`].
//!
//! All transient search state lives for a single call; nothing is shared
//! between invocations or threads.
//!
//! # Pluggable models
//!
//! | Trait | Role |
//! |---|---|
//! | [`EdgeCost`] | cost of one step between adjacent cells |
//! | [`Heuristic`] | admissible estimate of the remaining cost to the goal |
//!
//! The [`CostFn`] and [`HeuristicFn`] adapters lift any
//! `Fn(Loc, Loc, &TerrainGrid) -> f64` into a model, so plain closures work
//! anywhere a model is expected.

mod distance;
mod dsu;
mod maze;
mod neighbors;
mod queue;
mod search;
mod traits;

pub use distance::{chebyshev, manhattan};
pub use dsu::DisjointSet;
pub use maze::kruskal_maze;
pub use neighbors::Neighbors;
pub use queue::MinQueue;
pub use search::{
    NoopObserver, SearchError, SearchObserver, VisitState, dijkstra_path, shortest_path,
    shortest_path_observed,
};
pub use traits::{
    CellCost, ChebyshevHeuristic, CostFn, EdgeCost, Heuristic, HeuristicFn, UnitCost,
    ZeroHeuristic,
};
