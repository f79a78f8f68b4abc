use std::cmp::Reverse;

use crate::{
    game::grid::WorkingGrid,
    models::{CrosswordGrid, Direction, PlacedWord, WordEntry},
};

/// Side length of the working grid when none is configured
pub const DEFAULT_GRID_SIZE: usize = 20;

/// A word list entry prepared for placement
struct Candidate<'a> {
    entry: &'a WordEntry,
    text: String,
    letters: Vec<char>,
}

impl<'a> Candidate<'a> {
    fn new(entry: &'a WordEntry) -> Self {
        let text = entry.text.to_uppercase();
        let letters = text.chars().collect();
        Self {
            entry,
            text,
            letters,
        }
    }
}

/// A candidate committed to the working grid
struct Placement<'a> {
    candidate: &'a Candidate<'a>,
    direction: Direction,
    x: usize,
    y: usize,
}

impl Placement<'_> {
    /// Inclusive working-grid coordinates of the last letter.
    /// Empty words end one cell before they start.
    fn end(&self) -> (isize, isize) {
        let (dx, dy) = self.direction.step();
        let last = self.candidate.letters.len() as isize - 1;
        (self.x as isize + dx * last, self.y as isize + dy * last)
    }
}

/// Lays out a word list as a crossword.
///
/// Placement is single-pass and first-fit: words go down longest first, each
/// one crossing the earliest placed word it can legally cross. Words that fit
/// nowhere are dropped rather than reported.
#[derive(Debug, Clone, Copy)]
pub struct CrosswordGenerator {
    grid_size: usize,
}

impl Default for CrosswordGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl CrosswordGenerator {
    pub fn new(grid_size: usize) -> Self {
        Self { grid_size }
    }

    /// Build a crossword from `words`. Returns `None` only for an empty list.
    pub fn generate(&self, words: &[WordEntry]) -> Option<CrosswordGrid> {
        let mut candidates: Vec<Candidate> = words.iter().map(Candidate::new).collect();
        // Length of the text as entered, before case folding. Stable sort
        // keeps input order among equal lengths.
        candidates.sort_by_key(|candidate| Reverse(candidate.entry.text.chars().count()));

        let (seed, rest) = candidates.split_first()?;

        let longest = candidates
            .iter()
            .map(|candidate| candidate.letters.len())
            .max()
            .unwrap_or(0);
        let size = self.grid_size.max(longest).max(1);
        let mut grid = WorkingGrid::new(size);
        let mut placed: Vec<Placement> = Vec::with_capacity(candidates.len());

        let start_x = (size - seed.letters.len()) / 2;
        let start_y = size / 2;
        grid.place(&seed.letters, start_x, start_y, Direction::Across);
        placed.push(Placement {
            candidate: seed,
            direction: Direction::Across,
            x: start_x,
            y: start_y,
        });

        for candidate in rest {
            match Self::find_fit(&grid, &placed, candidate) {
                Some((x, y, direction)) => {
                    grid.place(&candidate.letters, x, y, direction);
                    placed.push(Placement {
                        candidate,
                        direction,
                        x,
                        y,
                    });
                }
                None => {
                    tracing::debug!(
                        "Dropping word '{}' (id {}): no valid intersection",
                        candidate.text,
                        candidate.entry.id
                    );
                }
            }
        }

        let (min, max) = Self::bounds(&placed);
        let trimmed = grid.trim(min, max);

        let words: Vec<PlacedWord> = placed
            .iter()
            .zip(1..)
            .map(|(placement, number)| PlacedWord {
                id: placement.candidate.entry.id.clone(),
                text: placement.candidate.text.clone(),
                clue: placement.candidate.entry.clue.clone(),
                direction: placement.direction,
                start_x: placement.x - trimmed.offset_x,
                start_y: placement.y - trimmed.offset_y,
                sequence_number: number,
            })
            .collect();

        tracing::debug!(
            "Generated {}x{} crossword with {} of {} words",
            trimmed.width,
            trimmed.height,
            words.len(),
            candidates.len()
        );

        Some(CrosswordGrid {
            cells: trimmed.cells,
            words,
            width: trimmed.width,
            height: trimmed.height,
        })
    }

    /// Find the first legal crossing for `candidate`.
    ///
    /// Scans placed words in placement order, then candidate letters, then
    /// the placed word's letters, and takes the first position that passes
    /// `WorkingGrid::can_place`.
    fn find_fit(
        grid: &WorkingGrid,
        placed: &[Placement],
        candidate: &Candidate,
    ) -> Option<(usize, usize, Direction)> {
        for existing in placed {
            let direction = existing.direction.perpendicular();

            for (j, letter) in candidate.letters.iter().enumerate() {
                for (k, other) in existing.candidate.letters.iter().enumerate() {
                    if letter != other {
                        continue;
                    }

                    let start = match direction {
                        Direction::Down => existing.y.checked_sub(j).map(|y| (existing.x + k, y)),
                        Direction::Across => existing.x.checked_sub(j).map(|x| (x, existing.y + k)),
                    };
                    // Starts above or left of the grid are out of bounds
                    let Some((x, y)) = start else {
                        continue;
                    };

                    if grid.can_place(&candidate.letters, x, y, direction) {
                        return Some((x, y, direction));
                    }
                }
            }
        }

        None
    }

    /// Inclusive bounding box over every placement
    fn bounds(placed: &[Placement]) -> ((isize, isize), (isize, isize)) {
        let mut min = (isize::MAX, isize::MAX);
        let mut max = (isize::MIN, isize::MIN);

        for placement in placed {
            let end = placement.end();
            min.0 = min.0.min(placement.x as isize);
            min.1 = min.1.min(placement.y as isize);
            max.0 = max.0.max(end.0);
            max.1 = max.1.max(end.1);
        }

        (min, max)
    }
}
