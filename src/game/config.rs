//! Session configuration

/// Plain numeric parameters consumed at session start.
///
/// The board size is fixed at [`GRID_SIZE`](crate::board::GRID_SIZE);
/// everything else about a game is set here. How these values are
/// persisted or picked in menus is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of scripted opponents (1 for the classic mode)
    pub bots: u8,
    /// Total game time budget in seconds
    pub total_time: u32,
    /// Per-move time budget for the human, in seconds
    pub move_time: u32,
    /// RNG seed for the bots' random steps; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bots: 1,
            total_time: 180,
            move_time: 15,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Configuration for the multi-opponent mode
    #[must_use]
    pub fn with_bots(bots: u8) -> Self {
        Self {
            bots,
            ..Self::default()
        }
    }
}
