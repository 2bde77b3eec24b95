//! The targeting engine: a hunt/engage state machine over the knowledge
//! board.
//!
//! While no ship is engaged the engine hunts with a diagonal-stride scan
//! tuned to the longest ship still afloat. A wound switches it to engaging:
//! it sweeps the four cardinal directions around the wound until a second
//! hit fixes the line, then walks that line from both ends until the kill
//! report arrives. A kill outlines the sunk ship, retires its size from the
//! pool and drops the engine back to hunting.

use alloc::vec::Vec;

use crate::board::{Board, Cell};
use crate::common::{NextShot, ShooterError, ShotOutcome};
use crate::geom::{Coord, DIRECTIONS};

/// Tried/untried flags for the four cardinal directions, kept in their
/// fixed sweep order.
#[derive(Debug, Clone, Default)]
struct DirectionTrials {
    tried: [bool; 4],
}

impl DirectionTrials {
    fn reset(&mut self) {
        self.tried = [false; 4];
    }

    fn mark_tried(&mut self, dir: Coord) {
        if let Some(i) = DIRECTIONS.iter().position(|&d| d == dir) {
            self.tried[i] = true;
        }
    }

    fn untried(&self) -> impl Iterator<Item = Coord> {
        DIRECTIONS
            .into_iter()
            .zip(self.tried)
            .filter(|&(_, tried)| !tried)
            .map(|(d, _)| d)
    }
}

/// Automated shooter for a single game. Owns the knowledge board, the pool
/// of undestroyed ship sizes and the state of the current engagement; a new
/// game needs a new instance.
pub struct Shooter {
    board: Board,
    pool: Vec<i32>,
    wounds: Vec<Coord>,
    direction: Coord,
    trials: DirectionTrials,
}

impl Shooter {
    /// Start a new game on a `width`×`height` board against the given
    /// multiset of ship lengths.
    pub fn new(width: i32, height: i32, sizes: &[i32]) -> Result<Self, ShooterError> {
        let board = Board::new(width, height)?;
        let longest_side = width.max(height);
        for &size in sizes {
            if size <= 0 || size > longest_side {
                return Err(ShooterError::InvalidShipSizes { size });
            }
        }
        Ok(Shooter {
            board,
            pool: sizes.to_vec(),
            wounds: Vec::new(),
            direction: Coord::new(0, 1),
            trials: DirectionTrials::default(),
        })
    }

    /// The engine's opening shot.
    pub fn first_shot(&self) -> Result<Coord, ShooterError> {
        self.hunt()
    }

    /// Feed the outcome of the most recent shot and get the next move.
    pub fn report(&mut self, at: Coord, outcome: ShotOutcome) -> Result<NextShot, ShooterError> {
        match outcome {
            ShotOutcome::Miss => self.report_miss(at).map(NextShot::Fire),
            ShotOutcome::Wound => self.report_wound(at).map(NextShot::Fire),
            ShotOutcome::Kill => self.report_kill(at),
        }
    }

    /// The previous shot splashed down at `at`.
    pub fn report_miss(&mut self, at: Coord) -> Result<Coord, ShooterError> {
        self.board.mark(at, Cell::Miss)?;
        if let Some(shot) = self.press_engagement()? {
            return Ok(shot);
        }
        self.hunt()
    }

    /// The previous shot wounded a ship at `at` without sinking it.
    pub fn report_wound(&mut self, at: Coord) -> Result<Coord, ShooterError> {
        if !self.wounds.is_empty() {
            // The line of attack runs from the closest known wound to the
            // new one; first match wins ties.
            let mut delta = at - self.wounds[0];
            for &w in &self.wounds[1..] {
                let d = at - w;
                if d.len() < delta.len() {
                    delta = d;
                }
            }
            self.direction = delta;
        }
        self.wounds.push(at);
        self.board.mark(at, Cell::Ship)?;

        let shot = at + self.direction;
        if self.is_legal(shot) {
            return Ok(shot);
        }
        if self.wounds.len() > 1 {
            // Blocked ahead: extrapolate past the other end of the line.
            return Ok(self.wounds[0] + (self.wounds[0] - self.wounds[1]));
        }
        let dir = self.first_open_direction(at)?;
        self.direction = dir;
        Ok(at + dir)
    }

    /// The previous shot sank a ship; `at` is its last segment.
    pub fn report_kill(&mut self, at: Coord) -> Result<NextShot, ShooterError> {
        self.wounds.push(at);
        self.board.mark(at, Cell::Ship)?;
        self.mark_outline()?;
        let sunk = self.wounds.len() as i32;
        if let Some(i) = self.pool.iter().position(|&s| s == sunk) {
            self.pool.remove(i);
        } else {
            log::warn!("sunk ship of length {} is not in the remaining pool", sunk);
        }
        self.wounds.clear();
        self.direction = Coord::new(0, 1);
        self.trials.reset();
        if self.pool.is_empty() {
            return Ok(NextShot::GameOver);
        }
        self.hunt().map(NextShot::Fire)
    }

    /// Sizes of ships not yet confirmed sunk.
    pub fn remaining_sizes(&self) -> &[i32] {
        &self.pool
    }

    /// True while a wounded, unsunk ship is being attacked.
    pub fn is_engaging(&self) -> bool {
        !self.wounds.is_empty()
    }

    /// Read access to everything learned so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pick a fresh search target: row-major scan restricted to the
    /// diagonal stride of the longest remaining ship, first plausible cell
    /// wins. No ship of that length can hide between stride cells.
    fn hunt(&self) -> Result<Coord, ShooterError> {
        let stride = *self
            .pool
            .iter()
            .max()
            .ok_or(ShooterError::NoLegalTarget)?;
        for y in 0..self.board.height() {
            for x in 0..self.board.width() {
                if (x + y + 1) % stride != 0 {
                    continue;
                }
                let cell = Coord::new(x, y);
                if self.is_legal(cell) {
                    return Ok(cell);
                }
            }
        }
        Err(ShooterError::NoLegalTarget)
    }

    /// After a miss while engaged, work out where to keep pressing the
    /// current ship. `None` means the engagement has no move here and the
    /// caller falls back to hunting.
    fn press_engagement(&mut self) -> Result<Option<Coord>, ShooterError> {
        if self.wounds.len() > 1 {
            // The line is known; attack the ship from its other end.
            let shot = self.wounds[0] - self.direction;
            if self.is_legal(shot) {
                return Ok(Some(shot));
            }
        } else if self.wounds.len() == 1 {
            self.trials.mark_tried(self.direction);
            let anchor = self.wounds[0];
            let dir = self.first_open_direction(anchor)?;
            self.direction = dir;
            return Ok(Some(anchor + dir));
        }
        Ok(None)
    }

    /// First untried cardinal direction whose neighbouring cell is still a
    /// plausible shot. Exhausting all four means the wound is isolated,
    /// which a correct referee never produces.
    fn first_open_direction(&self, anchor: Coord) -> Result<Coord, ShooterError> {
        self.trials
            .untried()
            .find(|&d| self.is_legal(anchor + d))
            .ok_or(ShooterError::NoLegalTarget)
    }

    /// A cell is worth shooting if it is on the board, unexplored, and
    /// could still hold a ship along at least one axis.
    fn is_legal(&self, target: Coord) -> bool {
        self.board.in_bounds(target)
            && self.board.at(target) == Cell::Empty
            && (self.possible_ship(target, Coord::new(1, 0))
                || self.possible_ship(target, Coord::new(0, 1)))
    }

    /// Could an afloat ship run through `target` along `axis`?
    ///
    /// With two or more wounds the line is already determined and the test
    /// is trivially true. With exactly one wound the test pivots onto the
    /// wound itself, along the vector from the candidate to the wound.
    /// Otherwise the maximal empty run through the cell must fit the
    /// smallest ship still afloat.
    fn possible_ship(&self, target: Coord, axis: Coord) -> bool {
        if self.wounds.len() > 1 {
            return true;
        }
        let (target, axis) = match self.wounds.first() {
            Some(&wound) => (wound, wound - target),
            None => (target, axis),
        };
        let smallest = match self.pool.iter().min() {
            Some(&s) => s,
            None => return false,
        };
        let run = self.board.empty_run(target, axis) + self.board.empty_run(target, -axis);
        run + 1 >= smallest
    }

    /// Flag the whole 3×3 block around every segment of the finished ship
    /// as dead water; nothing can touch a sunk ship, even diagonally.
    fn mark_outline(&mut self) -> Result<(), ShooterError> {
        let mut outline = Vec::new();
        for &w in &self.wounds {
            outline.extend(self.board.neighbours(w));
        }
        for cell in outline {
            self.board.mark(cell, Cell::Miss)?;
        }
        Ok(())
    }
}
