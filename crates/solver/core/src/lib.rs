//! Deterministic grid-MDP decision logic shared across agent integrations.
//!
//! `solver-core` defines the canonical solve pipeline (hazard classification,
//! reward field seeding, value iteration, policy extraction) and exposes pure
//! APIs invoked once per decision tick. All solving flows through
//! [`engine::PolicyEngine`], and integration layers depend on the types
//! re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod field;
pub mod hazard;
pub mod policy;
pub mod sweep;

pub use config::{GridProfile, RewardTable};
pub use engine::{DecideError, PolicyEngine};
pub use env::{HazardSighting, MazeDimensions, MazeOracle, TickObservation};
pub use field::{SeededField, ValueField, gradient};
pub use hazard::HazardSet;
pub use policy::{best_move, expected_utility};
pub use sweep::{Relaxation, relax};

// The grid vocabulary is part of the public API surface.
pub use grid_nav::{CardinalDirection, Cell, DistanceMap, Topology};
