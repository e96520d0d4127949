//! Cell storage with checked placement

use thiserror::Error;

use super::{PlayerId, Pos, TOTAL_CELLS};

/// Errors raised by checked grid mutation.
///
/// Both are defensive: callers are expected to pre-check coordinates, and
/// the session boundary absorbs them as no-ops.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("position {pos} is outside the board")]
    OutOfBounds { pos: Pos },

    #[error("cell {pos} is already occupied by {occupant:?}")]
    CellOccupied { pos: Pos, occupant: PlayerId },
}

/// 15x15 grid of cell occupancy.
///
/// Cell storage is private; all access goes through [`get`](Grid::get),
/// [`set`](Grid::set), [`clear`](Grid::clear) and [`place`](Grid::place).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<PlayerId>; TOTAL_CELLS],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Get the occupant at a position, or `None` for an empty cell.
    ///
    /// Out-of-range positions read as empty; callers that care about the
    /// distinction check [`Pos::is_valid`] first.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<PlayerId> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells[pos.to_index()]
    }

    /// Checked placement. Fails without mutating on an off-board
    /// coordinate or an occupied cell.
    pub fn set(&mut self, pos: Pos, player: PlayerId) -> Result<(), GridError> {
        if !pos.in_bounds() {
            return Err(GridError::OutOfBounds { pos });
        }
        if let Some(occupant) = self.cells[pos.to_index()] {
            return Err(GridError::CellOccupied { pos, occupant });
        }
        self.cells[pos.to_index()] = Some(player);
        Ok(())
    }

    /// Unconditionally reset a cell to empty. No-op off the board.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        if pos.in_bounds() {
            self.cells[pos.to_index()] = None;
        }
    }

    /// Unchecked write, overwriting whatever is in the cell.
    /// Use `set` for game moves; this is for replaying recorded moves
    /// and for test setup.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: PlayerId) {
        if pos.in_bounds() {
            self.cells[pos.to_index()] = Some(player);
        }
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty_cell(&self, pos: Pos) -> bool {
        pos.in_bounds() && self.cells[pos.to_index()].is_none()
    }

    /// Total stones on the board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True when no legal move remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Iterate over all empty positions in index order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(idx, _)| Pos::from_index(idx))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
