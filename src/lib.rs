//! Renju rule and move-decision engine
//!
//! The rule engine for a five-in-a-row board game played against one or
//! more scripted opponents:
//! - 15x15 board, 5-in-a-row to win (overlines count)
//! - scripted bots driven by a fixed-priority heuristic, no search
//! - composite-turn history: one undo reverts the human move together
//!   with every bot response it triggered
//! - total-game and per-move clocks ticked by the caller
//!
//! Presentation (windows, stone images, mouse handling, theme storage)
//! is the caller's job; the engine consumes board coordinates and hands
//! back the placements to render.
//!
//! # Architecture
//!
//! - [`board`]: grid storage, positions and participant identities
//! - [`rules`]: the win condition
//! - [`bot`]: threat scanning and the opponent priority chain
//! - [`game`]: session state, turn sequencing, history and timers
//!
//! # Quick Start
//!
//! ```
//! use renju::{GameConfig, GameSession};
//!
//! let config = GameConfig {
//!     seed: Some(7),
//!     ..GameConfig::default()
//! };
//! let mut session = GameSession::new(config);
//!
//! // Human plays the centre; the bot answers in the same call.
//! let report = session.play(7, 7);
//! assert_eq!(report.placements.len(), 2);
//! assert!(!report.ended);
//! ```
//!
//! # Opponent Priority
//!
//! Each bot turn resolves the first step that produces a move:
//! 1. Complete the bot's own line of five
//! 2. Block the human's line of five
//! 3. Block the human's open three
//! 4. Random cell next to an own stone
//! 5. Random empty cell anywhere
//!
//! Steps 1-3 are deterministic; 4-5 draw from the session RNG, which a
//! fixed seed makes reproducible.

pub mod board;
pub mod bot;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Grid, GridError, PlayerId, Pos, GRID_SIZE, WIN_LENGTH};
pub use bot::{select_move, BotMove, Tactic};
pub use game::{
    EndReason, GameConfig, GameOutcome, GameSession, HistoryStack, MenuAction, MenuOutcome, Move,
    Turn, TurnReport,
};
