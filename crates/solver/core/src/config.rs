//! Solver configuration: grid-size profiles and the per-cycle reward table.
//!
//! All tunables live in an immutable [`RewardTable`] built once at setup and
//! passed by reference into every solve. The [`GridProfile`] variant replaces
//! scattered small-grid boolean checks with a single tagged selection.

/// Grid-size regime, selected once from the open-cell count.
///
/// Small mazes play differently: hazards are less dangerous relative to the
/// reward of finishing, and the final goal carries a large bonus to stop the
/// agent from orbiting it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GridProfile {
    Small,
    #[default]
    Large,
}

impl GridProfile {
    /// Open-cell count below which a maze is treated as small.
    pub const SMALL_OPEN_CELL_LIMIT: usize = 30;

    pub fn for_open_cells(count: usize) -> Self {
        if count < Self::SMALL_OPEN_CELL_LIMIT {
            Self::Small
        } else {
            Self::Large
        }
    }
}

/// Reward and convergence constants for one decision cycle.
///
/// Read-only once constructed. Rewards are utilities added to the seed
/// field, radii bound the gradient influence of each source kind, and the
/// discount/threshold pair drives the relaxation loop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardTable {
    /// Flat reward at every remaining goal cell.
    pub food_reward: f64,
    /// Replacement reward for the final goal; profiles without a last-goal
    /// boost leave this unset.
    pub last_food_reward: Option<f64>,
    /// Cost of attempting any move.
    pub move_cost: f64,
    pub active_hazard_reward: f64,
    pub edible_hazard_reward: f64,
    /// Reward at the agent's own cell, pushing it to move somewhere.
    pub agent_reward: f64,
    pub dead_end_reward: f64,
    /// Bellman discount factor. Must stay below 1 for convergence; the sweep
    /// cap covers the misconfigured case.
    pub discount: f64,
    /// Relaxation stops once the largest per-cell change drops below this.
    pub convergence_threshold: f64,
    /// Geometric decay of gradient contributions per step of distance.
    pub gradient_decay: f64,
    pub active_hazard_radius: u32,
    pub edible_hazard_radius: u32,
    pub dead_end_radius: u32,
}

impl RewardTable {
    // ===== shared defaults =====
    pub const FOOD_REWARD: f64 = 1.0;
    pub const MOVE_COST: f64 = -0.04;
    pub const EDIBLE_HAZARD_REWARD: f64 = -2.0;
    pub const AGENT_REWARD: f64 = -10.0;
    pub const DEAD_END_REWARD: f64 = -15.0;
    pub const DISCOUNT: f64 = 0.95;
    pub const CONVERGENCE_THRESHOLD: f64 = 0.05;
    pub const GRADIENT_DECAY: f64 = 0.7;
    pub const ACTIVE_HAZARD_RADIUS: u32 = 7;
    pub const EDIBLE_HAZARD_RADIUS: u32 = 3;
    pub const DEAD_END_RADIUS: u32 = 1;

    // ===== profile-specific =====
    pub const ACTIVE_HAZARD_REWARD: f64 = -5.0;
    pub const ACTIVE_HAZARD_REWARD_SMALL: f64 = -2.5;
    pub const LAST_FOOD_REWARD_SMALL: f64 = 16.0;

    /// Hard bound on relaxation sweeps. Guards liveness when the discount is
    /// misconfigured; any realistic maze converges far earlier.
    pub const MAX_SWEEPS: u32 = 500;

    pub fn for_profile(profile: GridProfile) -> Self {
        match profile {
            GridProfile::Large => Self {
                food_reward: Self::FOOD_REWARD,
                last_food_reward: None,
                move_cost: Self::MOVE_COST,
                active_hazard_reward: Self::ACTIVE_HAZARD_REWARD,
                edible_hazard_reward: Self::EDIBLE_HAZARD_REWARD,
                agent_reward: Self::AGENT_REWARD,
                dead_end_reward: Self::DEAD_END_REWARD,
                discount: Self::DISCOUNT,
                convergence_threshold: Self::CONVERGENCE_THRESHOLD,
                gradient_decay: Self::GRADIENT_DECAY,
                active_hazard_radius: Self::ACTIVE_HAZARD_RADIUS,
                edible_hazard_radius: Self::EDIBLE_HAZARD_RADIUS,
                dead_end_radius: Self::DEAD_END_RADIUS,
            },
            GridProfile::Small => Self {
                active_hazard_reward: Self::ACTIVE_HAZARD_REWARD_SMALL,
                last_food_reward: Some(Self::LAST_FOOD_REWARD_SMALL),
                ..Self::for_profile(GridProfile::Large)
            },
        }
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::for_profile(GridProfile::Large)
    }
}
