//! Inbound boundary: read-only maze data and per-tick observations.
//!
//! The [`MazeOracle`] exposes the static wall layout; [`TickObservation`]
//! carries the dynamic state one decision cycle consumes. The solver never
//! reads the host environment directly.
mod map;
mod observation;

pub use map::{MazeDimensions, MazeOracle};
pub use observation::{HazardSighting, TickObservation};
