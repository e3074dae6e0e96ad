use std::collections::{BTreeMap, BTreeSet};

use arrayvec::ArrayVec;

use crate::{CardinalDirection, Cell};

/// Legal moves out of a single cell. At most one per cardinal direction.
pub type MoveSet = ArrayVec<CardinalDirection, 4>;

/// Per-cell legal moves of a walled grid.
///
/// A move is legal from a cell iff both the cell and the destination are
/// open (in bounds and not a wall). An isolated open cell simply has an
/// empty move set. The mapping is static for a fixed layout and is meant to
/// be built once and shared by every decision cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topology {
    moves: BTreeMap<Cell, MoveSet>,
}

impl Topology {
    /// Builds the legal-move map for a `width` x `height` grid, treating
    /// every cell for which `is_wall` returns true as impassable.
    pub fn build<F>(width: u32, height: u32, mut is_wall: F) -> Self
    where
        F: FnMut(Cell) -> bool,
    {
        let mut open = BTreeSet::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let cell = Cell::new(x, y);
                if !is_wall(cell) {
                    open.insert(cell);
                }
            }
        }

        let mut moves = BTreeMap::new();
        for &cell in &open {
            let mut set = MoveSet::new();
            for direction in CardinalDirection::ALL {
                if open.contains(&cell.step(direction)) {
                    set.push(direction);
                }
            }
            moves.insert(cell, set);
        }

        Self { moves }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.moves.contains_key(&cell)
    }

    /// Legal moves out of `cell`, or `None` when the cell is not open.
    pub fn legal_moves(&self, cell: Cell) -> Option<&[CardinalDirection]> {
        self.moves.get(&cell).map(|set| set.as_slice())
    }

    pub fn is_legal(&self, cell: Cell, direction: CardinalDirection) -> bool {
        self.legal_moves(cell)
            .is_some_and(|moves| moves.contains(&direction))
    }

    /// Open cells in ascending order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.moves.keys().copied()
    }

    pub fn open_cell_count(&self) -> usize {
        self.moves.len()
    }

    /// Cells with exactly one legal move (three surrounding walls).
    pub fn dead_ends(&self) -> impl Iterator<Item = Cell> + '_ {
        self.moves
            .iter()
            .filter(|(_, moves)| moves.len() == 1)
            .map(|(cell, _)| *cell)
    }
}
