//! Truth-side collaborator: owns the real ship positions and adjudicates
//! shots. The targeting engine never sees this state; it only receives the
//! outcomes.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::common::ShotOutcome;
use crate::geom::Coord;

/// Axis a placed ship lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn step(self) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(1, 0),
            Orientation::Vertical => Coord::new(0, 1),
        }
    }
}

/// Errors returned by referee operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefereeError {
    /// Board width or height is not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// Ship size is not positive.
    InvalidShipSize { size: i32 },
    /// Placement leaves the board.
    ShipOutOfBounds,
    /// Placement overlaps or touches another ship.
    ShipTouches,
    /// Random placement gave up after too many collisions.
    UnableToPlaceShip,
}

impl core::fmt::Display for RefereeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RefereeError::InvalidDimensions { width, height } => {
                write!(f, "Board dimensions {}x{} are not positive", width, height)
            }
            RefereeError::InvalidShipSize { size } => {
                write!(f, "Ship size {} is not positive", size)
            }
            RefereeError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            RefereeError::ShipTouches => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            RefereeError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// A placed ship tracked by its still-afloat segments.
#[derive(Debug, Clone)]
struct PlacedShip {
    alive: Vec<Coord>,
}

/// Ship layout and shot adjudication for one game.
pub struct Referee {
    width: i32,
    height: i32,
    occupancy: Vec<Option<usize>>,
    ships: Vec<PlacedShip>,
}

impl Referee {
    /// Create an empty field (no ships placed).
    pub fn new(width: i32, height: i32) -> Result<Self, RefereeError> {
        if width <= 0 || height <= 0 {
            return Err(RefereeError::InvalidDimensions { width, height });
        }
        Ok(Referee {
            width,
            height,
            occupancy: vec![None; (width * height) as usize],
            ships: Vec::new(),
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

    /// Number of ships placed so far.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// True once every placed ship has lost all its segments.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.alive.is_empty())
    }

    /// Whether a ship of `size` can start at `origin` along `orientation`:
    /// every segment on the board, and no occupied cell anywhere in any
    /// segment's 3×3 block (ships may not touch, even diagonally).
    pub fn can_place(&self, origin: Coord, size: i32, orientation: Orientation) -> bool {
        let cells = Self::ship_cells(origin, size, orientation);
        if !cells.iter().all(|&c| self.in_bounds(c)) {
            return false;
        }
        cells
            .iter()
            .all(|&c| self.neighbours(c).all(|n| self.occupancy[self.idx(n)].is_none()))
    }

    /// Place one ship, enforcing bounds and the no-touch rule.
    pub fn place(
        &mut self,
        origin: Coord,
        size: i32,
        orientation: Orientation,
    ) -> Result<(), RefereeError> {
        if size <= 0 {
            return Err(RefereeError::InvalidShipSize { size });
        }
        let cells = Self::ship_cells(origin, size, orientation);
        if !cells.iter().all(|&c| self.in_bounds(c)) {
            return Err(RefereeError::ShipOutOfBounds);
        }
        if !self.can_place(origin, size, orientation) {
            return Err(RefereeError::ShipTouches);
        }
        let index = self.ships.len();
        for &c in &cells {
            let i = self.idx(c);
            self.occupancy[i] = Some(index);
        }
        self.ships.push(PlacedShip { alive: cells });
        Ok(())
    }

    /// Place one ship of `size` uniformly at random, retrying on collision.
    pub fn place_random<R: Rng>(&mut self, rng: &mut R, size: i32) -> Result<(), RefereeError> {
        if size <= 0 {
            return Err(RefereeError::InvalidShipSize { size });
        }
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > 1000 {
                return Err(RefereeError::UnableToPlaceShip);
            }
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (self.width - size, self.height - 1),
                Orientation::Vertical => (self.width - 1, self.height - size),
            };
            if max_x < 0 || max_y < 0 {
                return Err(RefereeError::ShipOutOfBounds);
            }
            let origin = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            if self.can_place(origin, size, orientation) {
                self.place(origin, size, orientation)?;
                return Ok(());
            }
        }
    }

    /// Place a whole fleet at random. Sizes are placed in the given order;
    /// listing larger ships first leaves the most room to manoeuvre.
    pub fn place_random_fleet<R: Rng>(
        &mut self,
        rng: &mut R,
        sizes: &[i32],
    ) -> Result<(), RefereeError> {
        for &size in sizes {
            self.place_random(rng, size)?;
        }
        Ok(())
    }

    /// Adjudicate a shot. Off-field and repeated shots are misses and
    /// change nothing.
    pub fn shot(&mut self, at: Coord) -> ShotOutcome {
        if !self.in_bounds(at) {
            return ShotOutcome::Miss;
        }
        if let Some(index) = self.occupancy[self.idx(at)] {
            let ship = &mut self.ships[index];
            if let Some(pos) = ship.alive.iter().position(|&c| c == at) {
                ship.alive.swap_remove(pos);
                return if ship.alive.is_empty() {
                    ShotOutcome::Kill
                } else {
                    ShotOutcome::Wound
                };
            }
        }
        ShotOutcome::Miss
    }

    fn idx(&self, at: Coord) -> usize {
        (at.y * self.width + at.x) as usize
    }

    fn ship_cells(origin: Coord, size: i32, orientation: Orientation) -> Vec<Coord> {
        (0..size).map(|i| origin + orientation.step() * i).collect()
    }

    fn neighbours(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| at + Coord::new(dx, dy)))
            .filter(move |&n| self.in_bounds(n))
    }
}
