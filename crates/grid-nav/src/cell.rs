use core::fmt;

/// Discrete grid coordinate expressed in tile units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Destination of a single step in the given direction.
    pub fn step(self, direction: CardinalDirection) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal unit moves.
///
/// The declaration order doubles as the fixed evaluation order for policy
/// extraction, so equal-utility moves resolve East first.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    East,
    West,
    North,
    South,
}

impl CardinalDirection {
    /// All directions in evaluation order.
    pub const ALL: [CardinalDirection; 4] = [Self::East, Self::West, Self::North, Self::South];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::North => (0, 1),
            Self::South => (0, -1),
        }
    }

    /// The two orthogonal directions a stochastic transition can slip into.
    pub const fn perpendicular(self) -> [CardinalDirection; 2] {
        match self {
            Self::East | Self::West => [Self::North, Self::South],
            Self::North | Self::South => [Self::East, Self::West],
        }
    }

    pub const fn opposite(self) -> CardinalDirection {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_applies_unit_deltas() {
        let cell = Cell::new(3, 4);
        assert_eq!(cell.step(CardinalDirection::East), Cell::new(4, 4));
        assert_eq!(cell.step(CardinalDirection::West), Cell::new(2, 4));
        assert_eq!(cell.step(CardinalDirection::North), Cell::new(3, 5));
        assert_eq!(cell.step(CardinalDirection::South), Cell::new(3, 3));
    }

    #[test]
    fn perpendicular_pairs_are_orthogonal() {
        for direction in CardinalDirection::ALL {
            let (dx, dy) = direction.delta();
            for slip in direction.perpendicular() {
                let (sx, sy) = slip.delta();
                assert_eq!(dx * sx + dy * sy, 0);
            }
        }
    }

    #[test]
    fn opposite_round_trips() {
        for direction in CardinalDirection::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn evaluation_order_starts_east() {
        assert_eq!(CardinalDirection::ALL[0], CardinalDirection::East);
    }

    #[test]
    fn directions_parse_case_insensitively() {
        assert_eq!(
            "north".parse::<CardinalDirection>().unwrap(),
            CardinalDirection::North
        );
        assert_eq!(
            "East".parse::<CardinalDirection>().unwrap(),
            CardinalDirection::East
        );
    }
}
