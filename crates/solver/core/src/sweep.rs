//! Synchronous value iteration over a seeded field.

use grid_nav::{CardinalDirection, Cell, Topology};

use crate::config::RewardTable;
use crate::field::{SeededField, ValueField};
use crate::policy;

/// Outcome summary of one relaxation run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relaxation {
    pub sweeps: u32,
    pub converged: bool,
    /// Largest per-cell change of the final sweep.
    pub max_delta: f64,
}

/// Relaxes the seeded field to a fixed point with repeated Bellman sweeps.
///
/// Each sweep reads the field produced by the previous sweep for every
/// non-frozen cell and replaces the whole field at once. The loop stops when
/// the largest per-cell change drops below the convergence threshold, or at
/// [`RewardTable::MAX_SWEEPS`] when the configuration never converges; in
/// that case the best field found so far is kept.
pub fn relax(field: &mut SeededField, topology: &Topology, rewards: &RewardTable) -> Relaxation {
    let updatable: Vec<Cell> = topology
        .cells()
        .filter(|cell| !field.frozen.contains(cell))
        .collect();

    let mut sweeps = 0u32;
    let mut max_delta = f64::INFINITY;

    while max_delta > rewards.convergence_threshold {
        if sweeps == RewardTable::MAX_SWEEPS {
            tracing::warn!(
                "Relaxation hit the sweep cap after {} sweeps (max delta {})",
                sweeps,
                max_delta
            );
            return Relaxation {
                sweeps,
                converged: false,
                max_delta,
            };
        }
        sweeps += 1;
        max_delta = 0.0;

        let mut updates = Vec::with_capacity(updatable.len());
        for &cell in &updatable {
            let value = bellman(cell, &field.values, topology, rewards);
            max_delta = max_delta.max((value - field.values.value(cell)).abs());
            updates.push((cell, value));
        }
        for (cell, value) in updates {
            field.values.set(cell, value);
        }
    }

    tracing::debug!("Relaxation converged after {} sweeps (max delta {})", sweeps, max_delta);
    Relaxation {
        sweeps,
        converged: true,
        max_delta,
    }
}

/// One Bellman update: the move cost plus the discounted utility of the best
/// move attempt from `cell`.
fn bellman(cell: Cell, field: &ValueField, topology: &Topology, rewards: &RewardTable) -> f64 {
    let best = CardinalDirection::ALL
        .iter()
        .map(|&direction| policy::expected_utility(cell, direction, field, topology))
        .fold(f64::NEG_INFINITY, f64::max);
    rewards.move_cost + rewards.discount * best
}
