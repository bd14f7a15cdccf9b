use std::str::FromStr;

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Fraction of cells brought to life by a default randomize.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// A bounded Life board.
///
/// Cells are stored row-major in one buffer, `y * width + x`. A second buffer
/// of the same size receives the next generation and is swapped in once every
/// cell has been computed, so a step never reads a cell it already wrote.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    scratch: Vec<bool>,
    generation: u64,
}

impl Board {

    /// # Panics
    ///
    /// When `width * height` does not fit in a `usize`.
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        let len = match cell_count(width, height) {
            Some(n) => n,
            None => panic!("a {width}x{height} board overflows usize"),
        };
        Board {
            width,
            height,
            cells: vec![false; len],
            scratch: vec![false; len],
            generation: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// Rows from top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // an empty buffer yields no chunks, so width 0 never reaches chunks(0)
        self.cells.chunks(self.width.max(1))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(y * self.width + x)
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        self.get(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool> {
        Ok(self.cells[self.index(x, y)?])
    }

    pub fn set_cell(&mut self, alive: bool, x: usize, y: usize) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = !self.cells[i];
        Ok(())
    }

    /// Brings each cell to life independently with probability `threshold`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, threshold: f64) {
        for c in self.cells.iter_mut() {
            *c = rng.gen::<f64>() < threshold;
        }
    }

    /// Live cells around `(x, y)`, not counting the cell itself. The
    /// neighborhood is cut off at the board edges, there is no wraparound.
    pub fn neighbors(&self, x: usize, y: usize) -> Result<usize> {
        self.index(x, y)?;
        Ok(count_neighbors(&self.cells, self.width, self.height, x, y))
    }

    pub fn next_state(&self, x: usize, y: usize) -> Result<bool> {
        let i = self.index(x, y)?;
        Ok(produce_value(self.cells[i], count_neighbors(&self.cells, self.width, self.height, x, y)))
    }

    /// Advances the board `generations` times.
    ///
    /// The generation counter goes up by one per call, not per generation
    /// advanced. Callers that count generations should call `step(1)`.
    pub fn step(&mut self, generations: usize) {
        for _ in 0..generations {
            self.advance();
        }
        self.generation += 1;
        debug!(generations, generation = self.generation, "stepped board");
    }

    #[inline]
    pub fn tick(&mut self) {
        self.step(1)
    }

    fn advance(&mut self) {
        let Board { width, height, cells, scratch, .. } = self;
        let (w, h) = (*width, *height);

        for y in 0..h {
            for x in 0..w {
                let i = y * w + x;
                scratch[i] = produce_value(cells[i], count_neighbors(cells, w, h, x, y));
            }
        }

        std::mem::swap(cells, scratch);
        trace!(population = self.population(), "generation computed");
    }
}

impl PartialEq for Board {
    // scratch holds whatever the last step left behind and is not board state
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.generation == other.generation
            && self.cells == other.cells
    }
}

impl Eq for Board {}

/// Parses a text pattern, one line per row. `' '`, `'0'` and `'.'` are dead
/// cells, any other character is alive. Blank lines are skipped.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut data: Vec<Vec<bool>> = vec![];

        for line in s.lines() {
            let r: Vec<bool> = line
                .trim_end_matches('\r')
                .chars()
                .map(|c| !matches!(c, '0' | ' ' | '.'))
                .collect();
            if !r.is_empty() {
                data.push(r);
            }
        }

        let width = data.first().map_or(0, Vec::len);
        if let Some((row, r)) = data.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::RaggedPattern {
                row,
                expected: width,
                found: r.len(),
            });
        }

        let mut board = Board::new(width, data.len());
        board.cells = data.into_iter().flatten().collect();
        Ok(board)
    }
}

/// Number of cells on a `width` by `height` board, `None` on overflow.
#[inline]
pub fn cell_count(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)
}

fn count_neighbors(cells: &[bool], width: usize, height: usize, x: usize, y: usize) -> usize {
    let xs = x.saturating_sub(1)..=(x + 1).min(width - 1);
    let ys = y.saturating_sub(1)..=(y + 1).min(height - 1);

    let mut n = 0;
    for j in ys {
        for i in xs.clone() {
            if (i, j) != (x, y) && cells[j * width + i] {
                n += 1;
            }
        }
    }
    n
}

fn produce_value(current: bool, n: usize) -> bool {
    match (current, n) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}
