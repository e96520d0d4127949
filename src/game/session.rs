//! Game session: turn sequencing, timers, outcome and restart
//!
//! The session is the single owner of a game's mutable state. A human
//! move entering [`GameSession::play`] synchronously drives every bot
//! response before returning; the periodic [`tick`](GameSession::tick)
//! only burns down the clocks and never touches the grid.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Grid, PlayerId, Pos};
use crate::bot::select_move;
use crate::rules::is_winning_move;

use super::config::GameConfig;
use super::history::{HistoryStack, Move, Turn};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Someone completed a line of five
    FiveInRow,
    /// The board filled with no winner
    BoardFull,
    /// The total game time budget ran out
    TotalTimeExpired,
    /// The human's per-move time ran out
    MoveTimeExpired,
}

/// Terminal state of a session. `winner == None` is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Option<PlayerId>,
    pub reason: EndReason,
}

/// Everything the presentation layer needs after one applied turn:
/// the placements to render, and whether/how the game ended.
///
/// A rejected input (occupied cell, off-board click, game already over)
/// yields a report with no placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Placements made this turn, human first, bots in turn order
    pub placements: Vec<Move>,
    pub ended: bool,
    pub winner: Option<PlayerId>,
}

/// Menu input from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Restart,
    ExitToLobby,
    ExitToOptions,
}

/// Where the caller should go after a menu action. Navigation is data
/// returned to the caller, not callbacks held by the session.
#[derive(Debug)]
pub enum MenuOutcome {
    /// Keep playing with this (possibly fresh) session
    InGame(GameSession),
    Lobby,
    Options,
}

/// A single game: grid, history, bots, clocks and outcome.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    history: HistoryStack,
    bots: Vec<PlayerId>,
    rng: StdRng,
    outcome: Option<GameOutcome>,
    total_remaining: u32,
    move_remaining: u32,
}

impl GameSession {
    /// Start a fresh game from the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let bot_count = config.bots.max(1);
        Self {
            config,
            grid: Grid::new(),
            history: HistoryStack::new(),
            bots: (0..bot_count).map(PlayerId::Bot).collect(),
            rng,
            outcome: None,
            total_remaining: config.total_time,
            move_remaining: config.move_time,
        }
    }

    /// Discard this session and build a fresh one from the same
    /// configuration.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::new(self.config)
    }

    /// Apply a human move at raw board coordinates and drive every bot
    /// response before returning.
    ///
    /// Inputs that cannot be played (game over, off-board coordinate,
    /// occupied cell) are absorbed as no-ops and yield an empty report.
    pub fn play(&mut self, x: i32, y: i32) -> TurnReport {
        if self.outcome.is_some() || !Pos::is_valid(x, y) {
            return self.noop_report();
        }
        let pos = Pos::new(x as u8, y as u8);
        if self.grid.set(pos, PlayerId::Human).is_err() {
            return self.noop_report();
        }

        self.move_remaining = self.config.move_time;
        let mut turn = Turn::new(Move::new(pos, PlayerId::Human));

        if is_winning_move(&self.grid, pos) {
            self.outcome = Some(GameOutcome {
                winner: Some(PlayerId::Human),
                reason: EndReason::FiveInRow,
            });
        } else if self.grid.is_full() {
            self.outcome = Some(GameOutcome {
                winner: None,
                reason: EndReason::BoardFull,
            });
        } else {
            self.run_bot_turns(&mut turn);
        }

        let placements: Vec<Move> = turn.moves().collect();
        self.history.record(turn);
        TurnReport {
            placements,
            ended: self.ended(),
            winner: self.winner(),
        }
    }

    /// Let each bot respond once, in index order, stopping at the first
    /// win. A later bot never reconsiders an earlier bot's win.
    fn run_bot_turns(&mut self, turn: &mut Turn) {
        for i in 0..self.bots.len() {
            let bot = self.bots[i];
            let Some(chosen) = select_move(&self.grid, bot, PlayerId::Human, &mut self.rng)
            else {
                break; // board full, nothing left to play
            };
            self.grid.place(chosen.pos, bot);
            turn.push_bot(Move::new(chosen.pos, bot));

            if is_winning_move(&self.grid, chosen.pos) {
                self.outcome = Some(GameOutcome {
                    winner: Some(bot),
                    reason: EndReason::FiveInRow,
                });
                return;
            }
            if self.grid.is_full() {
                self.outcome = Some(GameOutcome {
                    winner: None,
                    reason: EndReason::BoardFull,
                });
                return;
            }
        }
    }

    /// Revert the most recent composite turn. No-op after the game has
    /// ended or with an empty history.
    pub fn undo(&mut self) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.history.undo(&mut self.grid)
    }

    /// Re-apply the most recently undone turn. No-op after the game has
    /// ended or with nothing undone.
    pub fn redo(&mut self) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.history.redo(&mut self.grid)
    }

    /// Burn `elapsed_secs` off both clocks. Driven externally, once per
    /// rendered frame or second; never mutates the grid or moves a bot.
    ///
    /// Total time running out ends the game as a draw; the human's
    /// per-move time running out hands the game to the machine side.
    pub fn tick(&mut self, elapsed_secs: u32) {
        if self.outcome.is_some() {
            return;
        }
        self.total_remaining = self.total_remaining.saturating_sub(elapsed_secs);
        self.move_remaining = self.move_remaining.saturating_sub(elapsed_secs);

        if self.total_remaining == 0 {
            self.outcome = Some(GameOutcome {
                winner: None,
                reason: EndReason::TotalTimeExpired,
            });
        } else if self.move_remaining == 0 {
            self.outcome = Some(GameOutcome {
                winner: Some(PlayerId::Bot(0)),
                reason: EndReason::MoveTimeExpired,
            });
        }
    }

    /// Resolve a menu action into the caller's next screen.
    #[must_use]
    pub fn handle_menu(self, action: MenuAction) -> MenuOutcome {
        match action {
            MenuAction::Restart => MenuOutcome::InGame(self.reset()),
            MenuAction::ExitToLobby => MenuOutcome::Lobby,
            MenuAction::ExitToOptions => MenuOutcome::Options,
        }
    }

    fn noop_report(&self) -> TurnReport {
        TurnReport {
            placements: Vec::new(),
            ended: self.ended(),
            winner: self.winner(),
        }
    }

    /// Current board snapshot
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn ended(&self) -> bool {
        self.outcome.is_some()
    }

    /// The winner, if the game ended with one
    #[inline]
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome.and_then(|o| o.winner)
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Bot roster in turn order
    #[inline]
    pub fn bots(&self) -> &[PlayerId] {
        &self.bots
    }

    #[inline]
    pub fn total_remaining(&self) -> u32 {
        self.total_remaining
    }

    #[inline]
    pub fn move_remaining(&self) -> u32 {
        self.move_remaining
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.outcome.is_none() && self.history.can_undo()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.outcome.is_none() && self.history.can_redo()
    }

    /// Applied turn history, oldest first
    #[inline]
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    fn seeded(bots: u8) -> GameSession {
        GameSession::new(GameConfig {
            bots,
            seed: Some(42),
            ..GameConfig::default()
        })
    }

    fn play_first_empty(session: &mut GameSession) -> TurnReport {
        let pos = session.grid.empty_cells().next().unwrap();
        session.play(pos.x as i32, pos.y as i32)
    }

    #[test]
    fn test_first_turn_human_and_one_bot() {
        let mut session = seeded(1);
        let report = session.play(7, 7);

        assert_eq!(session.grid.get(Pos::new(7, 7)), Some(PlayerId::Human));
        assert_eq!(report.placements.len(), 2);
        assert_eq!(report.placements[0], Move::new(Pos::new(7, 7), PlayerId::Human));
        assert_eq!(report.placements[1].player, PlayerId::Bot(0));
        assert!(!report.ended);
        assert_eq!(report.winner, None);
        assert_eq!(session.grid.stone_count(), 2);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut session = seeded(1);
        session.play(7, 7);
        let before = session.grid.clone();
        let report = session.play(7, 7);
        assert!(report.placements.is_empty());
        assert_eq!(session.grid, before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_off_board_click_is_noop() {
        let mut session = seeded(1);
        let report = session.play(-1, 99);
        assert!(report.placements.is_empty());
        assert_eq!(session.grid.stone_count(), 0);
    }

    #[test]
    fn test_human_win_stops_bots() {
        let mut session = seeded(1);
        for y in 3..7 {
            session.grid.place(Pos::new(4, y), PlayerId::Human);
        }
        let report = session.play(4, 7);

        assert!(report.ended);
        assert_eq!(report.winner, Some(PlayerId::Human));
        assert_eq!(report.placements.len(), 1);
        assert_eq!(
            session.outcome(),
            Some(GameOutcome {
                winner: Some(PlayerId::Human),
                reason: EndReason::FiveInRow,
            })
        );
    }

    #[test]
    fn test_bot_completes_own_line_and_wins() {
        let mut session = seeded(1);
        for y in 5..9 {
            session.grid.place(Pos::new(5, y), PlayerId::Bot(0));
        }
        let report = session.play(0, 0);

        assert!(report.ended);
        assert_eq!(report.winner, Some(PlayerId::Bot(0)));
        assert_eq!(report.placements.len(), 2);
        assert_eq!(report.placements[1].pos, Pos::new(5, 9));
    }

    #[test]
    fn test_bot_blocks_human_four() {
        let mut session = seeded(1);
        // Vertical four: (5,5)..(5,8); scan order finds (5,9) first
        for y in 5..9 {
            session.grid.place(Pos::new(5, y), PlayerId::Human);
        }
        let report = session.play(0, 0);

        assert!(!report.ended);
        assert_eq!(report.placements[1].pos, Pos::new(5, 9));
        assert_eq!(session.grid.get(Pos::new(5, 9)), Some(PlayerId::Bot(0)));
    }

    #[test]
    fn test_play_after_end_is_noop() {
        let mut session = seeded(1);
        for y in 3..7 {
            session.grid.place(Pos::new(4, y), PlayerId::Human);
        }
        session.play(4, 7);
        assert!(session.ended());

        let before = session.grid.clone();
        let report = session.play(0, 0);
        assert!(report.placements.is_empty());
        assert!(report.ended);
        assert_eq!(session.grid, before);
    }

    #[test]
    fn test_multi_bot_turn_one_move_per_bot() {
        let mut session = seeded(3);
        let report = session.play(7, 7);

        assert_eq!(report.placements.len(), 4);
        assert_eq!(report.placements[1].player, PlayerId::Bot(0));
        assert_eq!(report.placements[2].player, PlayerId::Bot(1));
        assert_eq!(report.placements[3].player, PlayerId::Bot(2));
        assert_eq!(session.grid.stone_count(), 4);
        // All placements landed on distinct cells
        let mut cells: Vec<Pos> = report.placements.iter().map(|m| m.pos).collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut session = seeded(2);
        for _ in 0..4 {
            let report = play_first_empty(&mut session);
            assert!(!report.ended);
        }
        let snapshot = session.grid.clone();
        let turns = session.history().turns().to_vec();

        for _ in 0..4 {
            assert!(session.undo());
        }
        assert_eq!(session.grid.stone_count(), 0);
        assert!(!session.undo());

        for _ in 0..4 {
            assert!(session.redo());
        }
        assert!(!session.redo());
        assert_eq!(session.grid, snapshot);
        assert_eq!(session.history().turns(), &turns[..]);
    }

    #[test]
    fn test_new_move_clears_redo() {
        let mut session = seeded(1);
        session.play(7, 7);
        play_first_empty(&mut session);
        assert!(session.undo());
        assert!(session.can_redo());

        play_first_empty(&mut session);
        assert!(!session.can_redo());
        assert!(!session.redo());
    }

    #[test]
    fn test_undo_after_end_is_noop() {
        let mut session = seeded(1);
        for y in 3..7 {
            session.grid.place(Pos::new(4, y), PlayerId::Human);
        }
        session.play(4, 7);
        assert!(session.ended());
        assert!(!session.undo());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_undo_on_fresh_session_is_noop() {
        let mut session = seeded(1);
        assert!(!session.undo());
        assert!(!session.redo());
        assert_eq!(session.grid.stone_count(), 0);
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let mut a = seeded(2);
        let mut b = seeded(2);
        for _ in 0..5 {
            let ra = play_first_empty(&mut a);
            let rb = play_first_empty(&mut b);
            assert_eq!(ra, rb);
        }
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_total_time_expiry_is_a_draw() {
        let mut session = GameSession::new(GameConfig {
            total_time: 10,
            move_time: 15,
            seed: Some(1),
            ..GameConfig::default()
        });
        session.tick(10);
        assert!(session.ended());
        assert_eq!(
            session.outcome(),
            Some(GameOutcome {
                winner: None,
                reason: EndReason::TotalTimeExpired,
            })
        );
    }

    #[test]
    fn test_move_time_expiry_hands_game_to_bot() {
        let mut session = seeded(1);
        session.tick(15);
        assert_eq!(
            session.outcome(),
            Some(GameOutcome {
                winner: Some(PlayerId::Bot(0)),
                reason: EndReason::MoveTimeExpired,
            })
        );
    }

    #[test]
    fn test_tick_does_not_touch_the_grid() {
        let mut session = seeded(1);
        session.play(7, 7);
        let before = session.grid.clone();
        session.tick(3);
        assert_eq!(session.grid, before);
        assert!(!session.ended());
        assert_eq!(session.move_remaining(), 12);
        assert_eq!(session.total_remaining(), 177);
    }

    #[test]
    fn test_tick_after_end_is_noop() {
        let mut session = seeded(1);
        session.tick(200);
        let outcome = session.outcome();
        session.tick(200);
        assert_eq!(session.outcome(), outcome);
    }

    #[test]
    fn test_human_move_resets_move_timer() {
        let mut session = seeded(1);
        session.tick(10);
        assert_eq!(session.move_remaining(), 5);
        session.play(7, 7);
        assert_eq!(session.move_remaining(), 15);
    }

    #[test]
    fn test_draw_when_board_fills() {
        let mut session = seeded(1);
        // Fill every cell but (14,14) with a pattern that contains no
        // five-in-a-row for either side: identity flips with
        // (x / 2 + y) % 2, capping every run at two stones.
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if pos == Pos::new(14, 14) {
                continue;
            }
            let player = if (pos.x as usize / 2 + pos.y as usize) % 2 == 0 {
                PlayerId::Human
            } else {
                PlayerId::Bot(0)
            };
            session.grid.place(pos, player);
        }

        let report = session.play(14, 14);
        assert!(report.ended);
        assert_eq!(report.winner, None);
        assert_eq!(report.placements.len(), 1);
        assert_eq!(
            session.outcome(),
            Some(GameOutcome {
                winner: None,
                reason: EndReason::BoardFull,
            })
        );
    }

    #[test]
    fn test_reset_builds_fresh_session() {
        let mut session = seeded(2);
        session.play(7, 7);
        session.tick(5);

        let session = session.reset();
        assert_eq!(session.grid.stone_count(), 0);
        assert!(!session.ended());
        assert_eq!(session.total_remaining(), 180);
        assert_eq!(session.move_remaining(), 15);
        assert_eq!(session.bots().len(), 2);
        assert_eq!(session.history().len(), 0);
    }

    #[test]
    fn test_menu_actions() {
        let session = seeded(1);
        match session.handle_menu(MenuAction::Restart) {
            MenuOutcome::InGame(fresh) => assert_eq!(fresh.grid.stone_count(), 0),
            other => panic!("expected InGame, got {other:?}"),
        }

        let session = seeded(1);
        assert!(matches!(
            session.handle_menu(MenuAction::ExitToLobby),
            MenuOutcome::Lobby
        ));
        let session = seeded(1);
        assert!(matches!(
            session.handle_menu(MenuAction::ExitToOptions),
            MenuOutcome::Options
        ));
    }

    #[test]
    fn test_bot_roster_never_empty() {
        let session = GameSession::new(GameConfig {
            bots: 0,
            ..GameConfig::default()
        });
        assert_eq!(session.bots(), &[PlayerId::Bot(0)]);
    }
}
