//! Game session management
//!
//! A [`GameSession`] owns one game: the grid, the undo/redo history, the
//! bot roster, the timers and the outcome. One human move drives the
//! whole bot-response chain synchronously; the caller renders from the
//! returned [`TurnReport`].

pub mod config;
pub mod history;
pub mod session;

// Re-exports
pub use config::GameConfig;
pub use history::{HistoryStack, Move, Turn};
pub use session::{EndReason, GameOutcome, GameSession, MenuAction, MenuOutcome, TurnReport};
