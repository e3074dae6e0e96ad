use grid_nav::Cell;

/// Static maze oracle exposing the immutable wall layout.
///
/// This is the inbound boundary for everything that never changes over a
/// game: the bounding box and the wall set. Dynamic state arrives separately
/// through [`TickObservation`](super::TickObservation).
pub trait MazeOracle: Send + Sync {
    fn dimensions(&self) -> MazeDimensions;
    fn is_wall(&self, cell: Cell) -> bool;

    fn contains(&self, cell: Cell) -> bool {
        self.dimensions().contains(cell)
    }

    /// True when the cell is in bounds and not a wall.
    fn is_open(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.is_wall(cell)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeDimensions {
    pub width: u32,
    pub height: u32,
}

impl MazeDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < self.width as i32
            && cell.y < self.height as i32
    }
}
