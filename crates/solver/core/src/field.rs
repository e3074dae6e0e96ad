//! Reward field generation: gradients, flat rewards, and the frozen set.
//!
//! The seed field is rebuilt from scratch every decision cycle. Gradient
//! contributions from hazards and dead ends accumulate additively, then the
//! flat goal and agent rewards are added on top. Cells holding a hazard or a
//! goal are frozen: they keep their seeded value as absorbing sources while
//! relaxation updates everything else.

use std::collections::{BTreeMap, BTreeSet};

use grid_nav::{Cell, DistanceMap, Topology};

use crate::config::RewardTable;
use crate::env::TickObservation;
use crate::hazard::HazardSet;

/// Real-valued utility per open cell.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueField {
    values: BTreeMap<Cell, f64>,
}

impl ValueField {
    /// A field covering every open cell of the topology, all zero.
    pub fn zeroed(topology: &Topology) -> Self {
        Self {
            values: topology.cells().map(|cell| (cell, 0.0)).collect(),
        }
    }

    /// Utility at `cell`; cells outside the field read as zero.
    pub fn value(&self, cell: Cell) -> f64 {
        self.values.get(&cell).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, cell: Cell, value: f64) {
        self.values.insert(cell, value);
    }

    pub fn add(&mut self, cell: Cell, delta: f64) {
        *self.values.entry(cell).or_insert(0.0) += delta;
    }

    /// Sums every contribution of `other` into this field.
    pub fn accumulate(&mut self, other: &ValueField) {
        for (cell, value) in other.iter() {
            self.add(cell, value);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cells and values in ascending cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.values.iter().map(|(cell, value)| (*cell, *value))
    }
}

impl FromIterator<(Cell, f64)> for ValueField {
    fn from_iter<I: IntoIterator<Item = (Cell, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Distance-decayed reward contribution around a source cell.
///
/// Every cell within `radius` steps of `center` receives
/// `decay.powi(distance) * reward`; the centre carries the full reward and
/// cells beyond the radius are absent.
pub fn gradient(
    center: Cell,
    reward: f64,
    topology: &Topology,
    radius: u32,
    decay: f64,
) -> ValueField {
    DistanceMap::bounded(center, topology, radius)
        .iter()
        .map(|(cell, distance)| (cell, decay.powi(distance as i32) * reward))
        .collect()
}

/// Seed field plus the absorbing cells relaxation must not update.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeededField {
    pub values: ValueField,
    /// Hazard and goal cells; they keep their seeded value throughout.
    pub frozen: BTreeSet<Cell>,
}

impl SeededField {
    /// Builds the pre-relaxation field for one decision cycle.
    ///
    /// Gradients for active hazards, edible hazards, and dead ends accumulate
    /// additively into a zeroed field, then every goal cell gains the flat
    /// goal reward and the agent cell the agent reward. When exactly one goal
    /// remains and the profile defines a last-goal reward, that replaces the
    /// flat reward. A dead end one step from the agent suppresses the
    /// dead-end penalty for the whole cycle: the agent may have no better
    /// option than passing through it.
    pub fn seed(
        topology: &Topology,
        dead_ends: &[Cell],
        observation: &TickObservation,
        hazards: &HazardSet,
        distances: &DistanceMap,
        rewards: &RewardTable,
    ) -> Self {
        let mut values = ValueField::zeroed(topology);

        for &hazard in &hazards.active {
            values.accumulate(&gradient(
                hazard,
                rewards.active_hazard_reward,
                topology,
                rewards.active_hazard_radius,
                rewards.gradient_decay,
            ));
        }
        for &hazard in &hazards.edible {
            values.accumulate(&gradient(
                hazard,
                rewards.edible_hazard_reward,
                topology,
                rewards.edible_hazard_radius,
                rewards.gradient_decay,
            ));
        }

        let adjacent_dead_end = dead_ends
            .iter()
            .any(|&dead_end| distances.distance(dead_end) == Some(1));
        if !adjacent_dead_end {
            for &dead_end in dead_ends {
                values.accumulate(&gradient(
                    dead_end,
                    rewards.dead_end_reward,
                    topology,
                    rewards.dead_end_radius,
                    rewards.gradient_decay,
                ));
            }
        }

        let goal_reward = match rewards.last_food_reward {
            Some(last) if observation.goals.len() == 1 => last,
            _ => rewards.food_reward,
        };
        for &goal in &observation.goals {
            values.add(goal, goal_reward);
        }
        values.add(observation.agent, rewards.agent_reward);

        let frozen = hazards
            .all()
            .chain(observation.goals.iter().copied())
            .collect();

        Self { values, frozen }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridProfile;
    use crate::env::HazardSighting;

    fn open(width: u32, height: u32) -> Topology {
        Topology::build(width, height, |cell| {
            cell.x == 0
                || cell.y == 0
                || cell.x == width as i32 - 1
                || cell.y == height as i32 - 1
        })
    }

    fn corridor(length: i32) -> Topology {
        Topology::build(length as u32 + 2, 3, |cell| {
            !(cell.y == 1 && (1..=length).contains(&cell.x))
        })
    }

    fn close_to(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn gradient_decays_geometrically_with_distance() {
        let topology = open(7, 7);
        let center = Cell::new(3, 3);
        let field = gradient(center, -5.0, &topology, 2, 0.7);

        assert!(close_to(field.value(center), -5.0));
        assert!(close_to(field.value(Cell::new(4, 3)), -3.5));
        assert!(close_to(field.value(Cell::new(5, 3)), -2.45));
        // beyond the radius the contribution is absent, not zero-valued
        assert_eq!(field.iter().find(|(cell, _)| *cell == Cell::new(5, 5)), None);
    }

    #[test]
    fn overlapping_gradients_accumulate_additively() {
        let topology = corridor(5);
        let mut field = ValueField::zeroed(&topology);
        field.accumulate(&gradient(Cell::new(2, 1), 1.0, &topology, 2, 0.5));
        field.accumulate(&gradient(Cell::new(4, 1), 1.0, &topology, 2, 0.5));

        // (3,1) is one step from both sources
        assert!(close_to(field.value(Cell::new(3, 1)), 1.0));
    }

    #[test]
    fn seeding_places_flat_rewards_and_freezes_sources() {
        let topology = open(6, 6);
        let dead_ends: Vec<Cell> = topology.dead_ends().collect();
        let observation = TickObservation::new(
            Cell::new(1, 1),
            vec![Cell::new(4, 4), Cell::new(2, 3)],
            vec![HazardSighting::new(4.0, 1.0, false)],
        );
        let distances = DistanceMap::from_source(observation.agent, &topology);
        let hazards = HazardSet::classify(&observation.hazards, &distances);
        let rewards = RewardTable::default();

        let field = SeededField::seed(
            &topology,
            &dead_ends,
            &observation,
            &hazards,
            &distances,
            &rewards,
        );

        // goal cells carry the flat reward on top of any hazard gradient
        let hazard_at_goal = rewards.active_hazard_reward
            * rewards.gradient_decay.powi(
                distances_from(&topology, Cell::new(4, 1), Cell::new(2, 3)) as i32,
            );
        assert!(close_to(
            field.values.value(Cell::new(2, 3)),
            rewards.food_reward + hazard_at_goal,
        ));
        // the agent reward lands on the agent cell
        let hazard_at_agent = rewards.active_hazard_reward
            * rewards.gradient_decay.powi(
                distances_from(&topology, Cell::new(4, 1), Cell::new(1, 1)) as i32,
            );
        assert!(close_to(
            field.values.value(Cell::new(1, 1)),
            rewards.agent_reward + hazard_at_agent,
        ));
        // hazards and goals are frozen, the agent cell is not
        assert!(field.frozen.contains(&Cell::new(4, 1)));
        assert!(field.frozen.contains(&Cell::new(4, 4)));
        assert!(field.frozen.contains(&Cell::new(2, 3)));
        assert!(!field.frozen.contains(&Cell::new(1, 1)));
    }

    fn distances_from(topology: &Topology, source: Cell, target: Cell) -> u32 {
        DistanceMap::from_source(source, topology)
            .distance(target)
            .expect("target reachable")
    }

    #[test]
    fn last_goal_reward_replaces_the_flat_reward_when_defined() {
        let topology = open(5, 5);
        let dead_ends: Vec<Cell> = topology.dead_ends().collect();
        let observation =
            TickObservation::new(Cell::new(1, 1), vec![Cell::new(3, 3)], Vec::new());
        let distances = DistanceMap::from_source(observation.agent, &topology);
        let hazards = HazardSet::default();
        let rewards = RewardTable::for_profile(GridProfile::Small);

        let field = SeededField::seed(
            &topology,
            &dead_ends,
            &observation,
            &hazards,
            &distances,
            &rewards,
        );
        assert!(close_to(
            field.values.value(Cell::new(3, 3)),
            RewardTable::LAST_FOOD_REWARD_SMALL,
        ));

        // two goals left: back to the flat reward
        let observation = TickObservation::new(
            Cell::new(1, 1),
            vec![Cell::new(3, 3), Cell::new(3, 1)],
            Vec::new(),
        );
        let field = SeededField::seed(
            &topology,
            &dead_ends,
            &observation,
            &hazards,
            &distances,
            &rewards,
        );
        assert!(close_to(
            field.values.value(Cell::new(3, 3)),
            rewards.food_reward
        ));
    }

    #[test]
    fn adjacent_dead_end_suppresses_the_penalty_for_the_cycle() {
        // five-cell corridor: dead ends at (1,1) and (5,1)
        let topology = corridor(5);
        let dead_ends: Vec<Cell> = topology.dead_ends().collect();
        assert_eq!(dead_ends.len(), 2);
        let hazards = HazardSet::default();
        let rewards = RewardTable::default();

        // agent two steps from the nearest dead end: full penalty applies
        let observation = TickObservation::new(Cell::new(3, 1), Vec::new(), Vec::new());
        let distances = DistanceMap::from_source(observation.agent, &topology);
        let field = SeededField::seed(
            &topology,
            &dead_ends,
            &observation,
            &hazards,
            &distances,
            &rewards,
        );
        assert!(close_to(
            field.values.value(Cell::new(1, 1)),
            rewards.dead_end_reward
        ));
        assert!(close_to(
            field.values.value(Cell::new(2, 1)),
            rewards.dead_end_reward * rewards.gradient_decay
        ));

        // agent adjacent to a dead end: no dead-end contribution anywhere
        let observation = TickObservation::new(Cell::new(2, 1), Vec::new(), Vec::new());
        let distances = DistanceMap::from_source(observation.agent, &topology);
        let field = SeededField::seed(
            &topology,
            &dead_ends,
            &observation,
            &hazards,
            &distances,
            &rewards,
        );
        assert!(close_to(field.values.value(Cell::new(1, 1)), 0.0));
        assert!(close_to(field.values.value(Cell::new(5, 1)), 0.0));
    }
}
