pub mod crossword;
pub mod word;

pub use crossword::{Cell, CrosswordGrid, Direction, PlacedWord};
pub use word::WordEntry;
