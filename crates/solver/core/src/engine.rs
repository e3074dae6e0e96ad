//! Per-maze decision engine: cached topology, fresh solve every tick.

use grid_nav::{CardinalDirection, Cell, DistanceMap, Topology, nearest_of};

use crate::config::{GridProfile, RewardTable};
use crate::env::{MazeOracle, TickObservation};
use crate::field::SeededField;
use crate::hazard::HazardSet;
use crate::policy;
use crate::sweep;

/// Errors surfaced while answering a decision tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecideError {
    /// The caller must keep the agent on the accessible map built at setup.
    #[error("agent cell {cell} is not part of the maze topology")]
    AgentOffGrid { cell: Cell },
}

/// Decision engine for one maze layout.
///
/// The topology, dead ends, and reward profile are derived once from the
/// maze oracle and cached for the grid's lifetime. Every [`decide`] call is
/// an independent solve over freshly observed state: distance map, hazard
/// classification, seeded field, and relaxation are rebuilt from scratch,
/// so no stale values leak between ticks.
///
/// [`decide`]: PolicyEngine::decide
pub struct PolicyEngine {
    topology: Topology,
    dead_ends: Vec<Cell>,
    profile: GridProfile,
    rewards: RewardTable,
}

impl PolicyEngine {
    pub fn new(maze: &dyn MazeOracle) -> Self {
        let dimensions = maze.dimensions();
        let topology = Topology::build(dimensions.width, dimensions.height, |cell| {
            maze.is_wall(cell)
        });
        let dead_ends: Vec<Cell> = topology.dead_ends().collect();
        let profile = GridProfile::for_open_cells(topology.open_cell_count());
        let rewards = RewardTable::for_profile(profile);
        tracing::debug!(
            "Prepared {} maze: {} open cells, {} dead ends",
            profile,
            topology.open_cell_count(),
            dead_ends.len()
        );

        Self {
            topology,
            dead_ends,
            profile,
            rewards,
        }
    }

    /// Replaces the profile-derived reward table, keeping the cached
    /// topology. Intended for per-variant tuning and tests.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn profile(&self) -> GridProfile {
        self.profile
    }

    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn dead_ends(&self) -> &[Cell] {
        &self.dead_ends
    }

    /// Runs one full decision cycle and returns the best cardinal move.
    pub fn decide(&self, observation: &TickObservation) -> Result<CardinalDirection, DecideError> {
        if !self.topology.contains(observation.agent) {
            return Err(DecideError::AgentOffGrid {
                cell: observation.agent,
            });
        }

        let distances = DistanceMap::from_source(observation.agent, &self.topology);
        let hazards = HazardSet::classify(&observation.hazards, &distances);
        let mut field = SeededField::seed(
            &self.topology,
            &self.dead_ends,
            observation,
            &hazards,
            &distances,
            &self.rewards,
        );
        let outcome = sweep::relax(&mut field, &self.topology, &self.rewards);
        let direction = policy::best_move(observation.agent, &field.values, &self.topology);
        tracing::debug!(
            "Decided {} from {} after {} sweeps (converged: {})",
            direction,
            observation.agent,
            outcome.sweeps,
            outcome.converged
        );

        Ok(direction)
    }

    /// Step distance to the closest live hazard, searching at most `limit`
    /// layers out from the agent. `None` when no hazard is that close.
    pub fn hazard_within(&self, observation: &TickObservation, limit: u32) -> Option<u32> {
        let distances = DistanceMap::from_source(observation.agent, &self.topology);
        let hazards = HazardSet::classify(&observation.hazards, &distances);
        let targets: Vec<Cell> = hazards.all().collect();
        nearest_of(observation.agent, &self.topology, &targets, limit)
    }
}
