use crate::models::{Cell, Direction};

/// Square scratch grid that words are written onto while a crossword is built
pub struct WorkingGrid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

/// The copied-out area of a working grid and where it sat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedGrid {
    pub offset_x: usize,
    pub offset_y: usize,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Vec<Cell>>,
}

impl WorkingGrid {
    /// Create a `size` x `size` grid with every cell blocked
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![None; size]; size],
        }
    }

    /// Cell at `(x, y)`, or `None` when the position is off the grid
    fn get(&self, x: isize, y: isize) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Off-grid positions count as blocked
    fn is_blocked(&self, x: isize, y: isize) -> bool {
        !matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `word` can be written starting at `(start_x, start_y)`.
    ///
    /// Rules:
    /// - the whole word lies on the grid
    /// - the cells just before the start and just after the end are blocked
    /// - an occupied cell must already hold the same letter
    /// - an empty cell must have blocked neighbours on both sides across the word
    pub fn can_place(&self, word: &[char], start_x: usize, start_y: usize, direction: Direction) -> bool {
        let (extent_x, extent_y) = match direction {
            Direction::Across => (word.len(), 1),
            Direction::Down => (1, word.len()),
        };
        if start_x + extent_x > self.size || start_y + extent_y > self.size {
            return false;
        }

        let (dx, dy) = direction.step();
        let (start_x, start_y) = (start_x as isize, start_y as isize);
        let len = word.len() as isize;

        if !self.is_blocked(start_x - dx, start_y - dy) {
            return false;
        }
        if !self.is_blocked(start_x + dx * len, start_y + dy * len) {
            return false;
        }

        for (i, &letter) in word.iter().enumerate() {
            let x = start_x + dx * i as isize;
            let y = start_y + dy * i as isize;

            match self.cells[y as usize][x as usize] {
                Some(existing) if existing != letter => return false,
                Some(_) => {}
                None => {
                    // Side neighbours run perpendicular to the word
                    if !self.is_blocked(x + dy, y + dx) || !self.is_blocked(x - dy, y - dx) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Write `word` onto the grid. Callers check `can_place` first.
    pub fn place(&mut self, word: &[char], start_x: usize, start_y: usize, direction: Direction) {
        let (dx, dy) = direction.step();
        let (start_x, start_y) = (start_x as isize, start_y as isize);

        for (i, &letter) in word.iter().enumerate() {
            let x = start_x + dx * i as isize;
            let y = start_y + dy * i as isize;
            let cell = &mut self.cells[y as usize][x as usize];
            debug_assert!(
                cell.is_none() || *cell == Some(letter),
                "placement would overwrite '{:?}' with '{}'",
                cell,
                letter
            );
            *cell = Some(letter);
        }
    }

    /// Copy out the rectangle spanning `min..=max` plus one cell of padding
    /// on each side, clipped to the grid.
    pub fn trim(&self, min: (isize, isize), max: (isize, isize)) -> TrimmedGrid {
        let last = self.size as isize - 1;
        let min_x = (min.0 - 1).clamp(0, last) as usize;
        let min_y = (min.1 - 1).clamp(0, last) as usize;
        let max_x = (max.0 + 1).clamp(0, last) as usize;
        let max_y = (max.1 + 1).clamp(0, last) as usize;

        let cells: Vec<Vec<Cell>> = self.cells[min_y..=max_y]
            .iter()
            .map(|row| row[min_x..=max_x].to_vec())
            .collect();

        TrimmedGrid {
            offset_x: min_x,
            offset_y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
            cells,
        }
    }
}
