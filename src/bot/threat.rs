//! Threat scanning: finding the empty cell that completes or blocks a line
//!
//! The scan order is load-bearing. Cells are visited column-major
//! (x outer, y inner), directions in the fixed [`DIRECTIONS`] order, and
//! each direction walks its forward sense before its backward sense.
//! The first qualifying (cell, direction) pair wins, so repeated calls on
//! the same board always return the same cell.

use crate::board::{Grid, PlayerId, Pos, DIRECTIONS, GRID_SIZE};

/// Find an empty cell that would extend a `player` run to `length`.
///
/// For every stone of `player`, each of the 4 directions is walked up to
/// `length - 1` steps in both senses, counting consecutive `player` cells
/// and recording the first empty cell met in each sense; the walk stops
/// at the first foreign stone or the board edge. When the combined count
/// is exactly `length - 1` and an adjacent empty cell was recorded, that
/// cell (forward sense first) is returned.
///
/// Used with `length = 5` to complete or block a win and `length = 4` to
/// block an open three.
#[must_use]
pub fn find_threat_or_win(grid: &Grid, player: PlayerId, length: usize) -> Option<Pos> {
    for x in 0..GRID_SIZE as i32 {
        for y in 0..GRID_SIZE as i32 {
            if grid.get(Pos::new(x as u8, y as u8)) != Some(player) {
                continue;
            }
            for (dx, dy) in DIRECTIONS {
                let mut count = 1usize;
                let mut empty_spots: Vec<Pos> = Vec::new();

                for sense in [1i32, -1] {
                    for i in 1..length as i32 {
                        let c = x + dx * i * sense;
                        let r = y + dy * i * sense;
                        if !Pos::is_valid(c, r) {
                            break;
                        }
                        match grid.get(Pos::new(c as u8, r as u8)) {
                            Some(p) if p == player => count += 1,
                            Some(_) => break,
                            None => {
                                empty_spots.push(Pos::new(c as u8, r as u8));
                                break;
                            }
                        }
                    }
                }

                if count == length - 1 && !empty_spots.is_empty() {
                    return Some(empty_spots[0]);
                }
            }
        }
    }
    None
}

/// Collect every empty cell one step away from a `player` stone, in the
/// positive sense of each of the 4 directions, in scan order.
///
/// Duplicates are kept: a cell next to several own stones appears once
/// per stone, which weights the random pick towards clustered play.
#[must_use]
pub fn moves_near_own(grid: &Grid, player: PlayerId) -> Vec<Pos> {
    let mut candidates = Vec::new();
    for x in 0..GRID_SIZE as i32 {
        for y in 0..GRID_SIZE as i32 {
            if grid.get(Pos::new(x as u8, y as u8)) != Some(player) {
                continue;
            }
            for (dx, dy) in DIRECTIONS {
                let c = x + dx;
                let r = y + dy;
                if Pos::is_valid(c, r) && grid.is_empty_cell(Pos::new(c as u8, r as u8)) {
                    candidates.push(Pos::new(c as u8, r as u8));
                }
            }
        }
    }
    candidates
}
