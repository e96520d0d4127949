//! Game rules for Renju
//!
//! Only the win condition lives here: five or more contiguous stones of
//! one participant along any of the four line directions.

pub mod win;

// Re-exports for convenient access
pub use win::is_winning_move;
