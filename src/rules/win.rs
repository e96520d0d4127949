//! Win condition checking
//!
//! A move wins when it is part of a line of five or more contiguous
//! stones of the same participant (overlines count). The check runs
//! after every placement, by any participant, since any move can
//! complete a line.

use crate::board::{Grid, Pos, DIRECTIONS, WIN_LENGTH};

/// Check whether the stone at `pos` completes a line of five.
///
/// Walks the 4 line directions through `pos`, counting contiguous
/// same-identity cells in the positive then the negative sense (the cell
/// at `pos` itself counts as 1). Returns false for an empty cell.
/// No allocation.
///
/// # Example
///
/// ```
/// use renju::{Grid, PlayerId, Pos};
/// use renju::rules::is_winning_move;
///
/// let mut grid = Grid::new();
/// for x in 3..8 {
///     grid.place(Pos::new(x, 7), PlayerId::Human);
/// }
/// assert!(is_winning_move(&grid, Pos::new(5, 7)));
/// ```
#[must_use]
pub fn is_winning_move(grid: &Grid, pos: Pos) -> bool {
    let Some(color) = grid.get(pos) else {
        return false;
    };

    for (dx, dy) in DIRECTIONS {
        let mut count = 1usize;
        for sense in [1i32, -1] {
            for i in 1..WIN_LENGTH as i32 {
                let x = pos.x as i32 + dx * i * sense;
                let y = pos.y as i32 + dy * i * sense;
                if !Pos::is_valid(x, y) {
                    break;
                }
                if grid.get(Pos::new(x as u8, y as u8)) == Some(color) {
                    count += 1;
                } else {
                    break;
                }
            }
        }
        if count >= WIN_LENGTH {
            return true;
        }
    }
    false
}
