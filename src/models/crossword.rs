use serde::{Deserialize, Serialize};

/// Orientation of a word on the grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The direction a word must take to cross a word running in `self`
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Unit step `(dx, dy)` along this direction
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Across => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// A word that made it onto the grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedWord {
    pub id: String,
    /// Uppercased answer text
    #[serde(rename = "word")]
    pub text: String,
    pub clue: String,
    pub direction: Direction,
    #[serde(rename = "startX")]
    pub start_x: usize,
    #[serde(rename = "startY")]
    pub start_y: usize,
    /// Clue number, assigned in placement order starting at 1
    #[serde(rename = "number")]
    pub sequence_number: u32,
}

/// A single grid cell: a letter, or `None` when blocked
pub type Cell = Option<char>;

/// Finished crossword, trimmed to the area around its words
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrosswordGrid {
    /// Rows of cells, `cells[y][x]`
    #[serde(rename = "grid")]
    pub cells: Vec<Vec<Cell>>,
    pub words: Vec<PlacedWord>,
    pub width: usize,
    pub height: usize,
}
