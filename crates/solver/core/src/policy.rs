//! Move utility under the stochastic transition model, and policy extraction.

use grid_nav::{CardinalDirection, Cell, Topology};

use crate::field::ValueField;

/// Probability that the attempted move is the one actually made.
pub const PRIMARY_WEIGHT: f64 = 0.8;
/// Probability of slipping into each perpendicular direction instead.
pub const SLIP_WEIGHT: f64 = 0.1;

/// Value of the cell one move attempt lands on: the destination when the
/// move is legal, the origin itself when the move would hit a wall.
fn landing_value(
    cell: Cell,
    direction: CardinalDirection,
    field: &ValueField,
    topology: &Topology,
) -> f64 {
    let landing = if topology.is_legal(cell, direction) {
        cell.step(direction)
    } else {
        cell
    };
    field.value(landing)
}

/// Expected utility of attempting `direction` from `cell`: a convex blend of
/// the primary landing value and the two perpendicular slip landings.
pub fn expected_utility(
    cell: Cell,
    direction: CardinalDirection,
    field: &ValueField,
    topology: &Topology,
) -> f64 {
    let mut utility = PRIMARY_WEIGHT * landing_value(cell, direction, field, topology);
    for slip in direction.perpendicular() {
        utility += SLIP_WEIGHT * landing_value(cell, slip, field, topology);
    }
    utility
}

/// The best of the four cardinal moves out of `cell`.
///
/// Moves that would hit a wall stay in the running, since the agent just
/// bounces back to `cell`. Equal utilities resolve to the earliest direction
/// in [`CardinalDirection::ALL`], so East wins a full tie.
pub fn best_move(cell: Cell, field: &ValueField, topology: &Topology) -> CardinalDirection {
    let mut best = CardinalDirection::ALL[0];
    let mut best_utility = expected_utility(cell, best, field, topology);

    for &direction in &CardinalDirection::ALL[1..] {
        let utility = expected_utility(cell, direction, field, topology);
        if utility > best_utility {
            best = direction;
            best_utility = utility;
        }
    }

    best
}
