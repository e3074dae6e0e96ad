//! Grid move-graph primitives for cell-based solvers.
//!
//! This library provides the vocabulary and search routines shared by
//! grid-world decision code: integer cells, the four cardinal moves, the
//! legal-move topology of a walled maze, and breadth-first distance maps.
//!
//! - **Deterministic**: all containers iterate in ascending cell order, and
//!   no result depends on hash iteration order
//! - **Exact**: distances are shortest-path step counts in the move graph
//! - **Absent means unreachable**: a cell missing from a [`DistanceMap`] is
//!   unreachable from the source within the requested bound
//!
//! # Architecture
//!
//! - [`Cell`] / [`CardinalDirection`]: the vertex and edge vocabulary
//! - [`Topology`]: per-cell legal moves derived from a wall predicate
//! - [`DistanceMap`]: layered breadth-first expansion, optionally bounded
//! - [`nearest_of`]: early-exit probe for the closest of several targets

pub mod cell;
pub mod distance;
pub mod topology;

// Re-export core types for ergonomic API
pub use cell::{CardinalDirection, Cell};
pub use distance::{DistanceMap, nearest_of};
pub use topology::{MoveSet, Topology};
