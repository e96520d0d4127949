//! Board representation for Renju

pub mod grid;


// Re-exports
pub use grid::{Grid, GridError};

/// Board size (15x15)
pub const GRID_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE; // 225

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Line directions as (dx, dy): horizontal, vertical,
/// diagonal down-right, diagonal down-left.
///
/// The order is fixed; the threat scanner relies on it for
/// deterministic results.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Participant identity: the human player or one of the scripted bots.
///
/// Bots carry a stable 0-based index that fixes their turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Human,
    Bot(u8),
}

impl PlayerId {
    /// True for any bot identity
    #[inline]
    pub fn is_bot(self) -> bool {
        matches!(self, PlayerId::Bot(_))
    }
}

/// Position on the board: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * GRID_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % GRID_SIZE) as u8,
            y: (idx / GRID_SIZE) as u8,
        }
    }

    /// Signed bounds check, used when walking lines off a known-good cell
    /// and when validating raw input coordinates.
    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < GRID_SIZE as i32 && y >= 0 && y < GRID_SIZE as i32
    }

    /// Whether this position lies on the board
    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.x as usize) < GRID_SIZE && (self.y as usize) < GRID_SIZE
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
