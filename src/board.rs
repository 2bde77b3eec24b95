//! The shooter's knowledge of the opponent grid.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::ShooterError;
use crate::geom::Coord;

/// Everything the engine can know about one cell. A cell starts `Empty` and
/// only ever advances to `Ship` or `Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Miss,
}

/// W×H grid of [`Cell`] states, the record of everything learned in one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Allocate an all-`Empty` grid.
    pub fn new(width: i32, height: i32) -> Result<Self, ShooterError> {
        if width <= 0 || height <= 0 {
            return Err(ShooterError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; (width * height) as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, at: Coord) -> bool {
        at.x >= 0 && at.x < self.width && at.y >= 0 && at.y < self.height
    }

    /// Cell state at `at`. Off-board reads yield `Empty`, so callers can
    /// probe past the rim without bounds checks.
    pub fn at(&self, at: Coord) -> Cell {
        if self.in_bounds(at) {
            self.cells[(at.y * self.width + at.x) as usize]
        } else {
            Cell::Empty
        }
    }

    /// Overwrite the state of `at`.
    pub fn mark(&mut self, at: Coord, state: Cell) -> Result<(), ShooterError> {
        if !self.in_bounds(at) {
            return Err(ShooterError::OutOfBounds { at });
        }
        self.cells[(at.y * self.width + at.x) as usize] = state;
        Ok(())
    }

    /// In-bounds cells of the 3×3 block around `at`. The block keeps its
    /// centre offset, so `at` itself is produced whenever it lies on the
    /// board.
    pub fn neighbours(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| at + Coord::new(dx, dy)))
            .filter(move |&n| self.in_bounds(n))
    }

    /// Number of consecutive `Empty` cells strictly after `start` along
    /// `step`, stopping at the first marked or off-board cell.
    pub fn empty_run(&self, start: Coord, step: Coord) -> i32 {
        let mut run = 0;
        let mut cur = start + step;
        while self.in_bounds(cur) && self.at(cur) == Cell::Empty {
            run += 1;
            cur = cur + step;
        }
        run
    }
}
