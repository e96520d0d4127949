//! Scripted opponent logic
//!
//! The opponent is a fixed-priority heuristic, not a search: it completes
//! its own line when possible, blocks the human's near-complete lines,
//! and otherwise plays near its own stones or anywhere at random.
//!
//! - [`threat`]: deterministic scan for line completions and candidates
//! - [`select`]: the priority chain producing one move per bot turn

pub mod select;
pub mod threat;

// Re-exports
pub use select::{select_move, BotMove, Tactic};
pub use threat::{find_threat_or_win, moves_near_own};
