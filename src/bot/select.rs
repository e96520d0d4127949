//! Opponent move selection
//!
//! A strict priority chain over the threat scanner, with a random
//! fallback. Steps 1-3 are fully deterministic given the board; the
//! randomness of steps 4-5 comes from the caller-supplied RNG so that a
//! seeded session replays identically.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Grid, PlayerId, Pos, WIN_LENGTH};

use super::threat::{find_threat_or_win, moves_near_own};

/// Which step of the priority chain produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    /// Completed the bot's own winning line
    WinningLine,
    /// Blocked the human's immediate win
    BlockWin,
    /// Blocked the human's open three
    BlockOpenThree,
    /// Random cell adjacent to an own stone
    NearOwn,
    /// Random cell anywhere on the board
    Random,
}

/// A selected move with the tactic that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub pos: Pos,
    pub tactic: Tactic,
}

impl BotMove {
    #[inline]
    fn new(pos: Pos, tactic: Tactic) -> Self {
        Self { pos, tactic }
    }
}

/// Pick one move for `bot`. Returns `None` only on a full board.
///
/// Priority order, each step tried only when the previous found nothing:
/// 1. complete the bot's own line of five
/// 2. block the human's line of five
/// 3. block the human's open three (length-4 threat)
/// 4. uniform random pick among empty cells next to own stones
/// 5. uniform random pick among all empty cells
#[must_use]
pub fn select_move<R: Rng>(
    grid: &Grid,
    bot: PlayerId,
    human: PlayerId,
    rng: &mut R,
) -> Option<BotMove> {
    // 1. Complete own winning line
    if let Some(pos) = find_threat_or_win(grid, bot, WIN_LENGTH) {
        return Some(BotMove::new(pos, Tactic::WinningLine));
    }

    // 2. Block the human's immediate win
    if let Some(pos) = find_threat_or_win(grid, human, WIN_LENGTH) {
        return Some(BotMove::new(pos, Tactic::BlockWin));
    }

    // 3. Block the human's open three
    if let Some(pos) = find_threat_or_win(grid, human, WIN_LENGTH - 1) {
        return Some(BotMove::new(pos, Tactic::BlockOpenThree));
    }

    // 4. Play next to own stones
    let near = moves_near_own(grid, bot);
    if let Some(&pos) = near.choose(rng) {
        return Some(BotMove::new(pos, Tactic::NearOwn));
    }

    // 5. Anywhere that is still free
    let empties: Vec<Pos> = grid.empty_cells().collect();
    empties
        .choose(rng)
        .map(|&pos| BotMove::new(pos, Tactic::Random))
}
