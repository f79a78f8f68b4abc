// Crossword layout engine

pub mod generator;
pub mod grid;

pub use generator::{CrosswordGenerator, DEFAULT_GRID_SIZE};
