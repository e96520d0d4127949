//! Composite-turn undo/redo history
//!
//! The unit of history is a [`Turn`]: one human move plus every bot move
//! it triggered. Undo reverts the whole turn from the grid; redo
//! re-applies it in the original order. Recording a new turn makes the
//! history linear again by dropping the redo stack.

use crate::board::{Grid, PlayerId, Pos};

/// A single placement, immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub player: PlayerId,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, player: PlayerId) -> Self {
        Self { pos, player }
    }
}

/// One human move and the ordered bot responses it triggered.
///
/// The bot list may be shorter than the roster when the game ended or
/// the board filled mid-turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    human: Move,
    bots: Vec<Move>,
}

impl Turn {
    pub fn new(human: Move) -> Self {
        Self {
            human,
            bots: Vec::new(),
        }
    }

    /// Append a bot response to this turn
    pub fn push_bot(&mut self, mv: Move) {
        self.bots.push(mv);
    }

    /// The human move that opened the turn
    #[inline]
    pub fn human(&self) -> Move {
        self.human
    }

    /// The bot responses, in turn order
    #[inline]
    pub fn bots(&self) -> &[Move] {
        &self.bots
    }

    /// All moves of the turn in applied order: human first, then bots
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        std::iter::once(self.human).chain(self.bots.iter().copied())
    }

    /// Number of placements in this turn
    pub fn len(&self) -> usize {
        1 + self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        false // a turn always holds at least the human move
    }
}

/// Undo and redo stacks of applied turns.
///
/// The "no undo after the game ended" rule lives on the session; this
/// type only maintains the stack/grid invariant.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    undo: Vec<Turn>,
    redo: Vec<Turn>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly applied turn. Any undone turns are discarded:
    /// branching history is not supported.
    pub fn record(&mut self, turn: Turn) {
        self.redo.clear();
        self.undo.push(turn);
    }

    /// Revert the most recent turn from the grid. Returns false when
    /// there is nothing to undo.
    pub fn undo(&mut self, grid: &mut Grid) -> bool {
        let Some(turn) = self.undo.pop() else {
            return false;
        };
        // Clearing is commutative, order does not matter
        for mv in turn.moves() {
            grid.clear(mv.pos);
        }
        self.redo.push(turn);
        true
    }

    /// Re-apply the most recently undone turn in its original order.
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self, grid: &mut Grid) -> bool {
        let Some(turn) = self.redo.pop() else {
            return false;
        };
        for mv in turn.moves() {
            grid.place(mv.pos, mv.player);
        }
        self.undo.push(turn);
        true
    }

    /// Number of applied turns
    #[inline]
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Applied turns, oldest first
    pub fn turns(&self) -> &[Turn] {
        &self.undo
    }
}
