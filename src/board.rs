use crate::{
    Cell, Config, Pos2, Status,
    config::check_grid_size,
    error::{BoardError, ConfigError},
    neighbors::{BorderPolicy, NeighborResolver},
    rules, view::BoardView,
};
use log::{debug, trace};
use rand::Rng;
use rayon::prelude::*;
use std::ops::Range;

/// The new status of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Change {
    pub pos: Pos2,
    pub status: Status,
}

/// A fixed-size square grid of cells
#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
    policy: BorderPolicy,
    cells: Vec<Cell>,
    resolver: NeighborResolver,
    alive: usize,
    generation: u64,
}

impl Board {
    /// Creates an all-dead `size`x`size` board
    pub fn new(size: usize, policy: BorderPolicy) -> Result<Self, ConfigError> {
        check_grid_size(size, policy)?;

        let size = size as i32;
        let cells = (0..(size * size) as usize)
            .map(|index| Cell::new(Pos2::from_index(index, size)))
            .collect();
        Ok(Self {
            size,
            policy,
            cells,
            resolver: NeighborResolver::new(policy, size),
            alive: 0,
            generation: 0,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.grid_size, config.border_policy)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }
    #[inline]
    pub fn policy(&self) -> BorderPolicy {
        self.policy
    }
    /// Number of steps applied so far
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive
    }

    /// The coordinate range of the simulated area, on both axes
    #[inline]
    pub fn simulated_bounds(&self) -> Range<i32> {
        let frame = self.policy.frame_width();
        frame..self.size - frame
    }
    #[inline]
    pub fn is_simulated(&self, pos: Pos2) -> bool {
        let bounds = self.simulated_bounds();
        pos.within(bounds.start, bounds.end)
    }
    /// Number of cells inside the simulated area
    #[inline]
    pub fn simulated_count(&self) -> usize {
        self.simulated_bounds().len().pow(2)
    }
    /// Simulated positions in row-major order
    pub fn simulated_positions(&self) -> impl Iterator<Item = Pos2> + use<> {
        let bounds = self.simulated_bounds();
        bounds
            .clone()
            .flat_map(move |y| bounds.clone().map(move |x| Pos2::new(x, y)))
    }

    fn check_in_grid(&self, pos: Pos2) -> Result<usize, BoardError> {
        if pos.within(0, self.size) {
            Ok(pos.to_index(self.size))
        } else {
            Err(BoardError::OutOfBounds {
                pos,
                size: self.size(),
            })
        }
    }
    fn check_simulated(&self, pos: Pos2) -> Result<usize, BoardError> {
        let index = self.check_in_grid(pos)?;
        if self.is_simulated(pos) {
            Ok(index)
        } else {
            Err(BoardError::Frame { pos })
        }
    }

    /// Any cell of the grid, frame included
    pub fn cell(&self, pos: Pos2) -> Result<&Cell, BoardError> {
        let index = self.check_in_grid(pos)?;
        Ok(&self.cells[index])
    }
    pub fn status(&self, pos: Pos2) -> Result<Status, BoardError> {
        self.cell(pos).map(Cell::status)
    }
    pub fn neighbors(&self, pos: Pos2) -> Result<Vec<Pos2>, BoardError> {
        self.check_in_grid(pos)?;
        Ok(self.resolver.neighbors(pos))
    }
    pub fn living_neighbors(&self, pos: Pos2) -> Result<u8, BoardError> {
        self.check_in_grid(pos)?;
        Ok(self.resolver.living_neighbors(pos, &self.cells))
    }

    /// The status `pos` would have after the next step, without stepping
    pub fn preview(&self, pos: Pos2) -> Result<Status, BoardError> {
        let index = self.check_simulated(pos)?;
        Ok(self.next_status(index))
    }

    /// Live positions in row-major order
    pub fn alive(&self) -> Vec<Pos2> {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(Cell::pos)
            .collect()
    }

    /// Renders the simulated area as text
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(self)
    }

    /// Flips the status of one simulated cell
    pub fn toggle(&mut self, pos: Pos2) -> Result<Change, BoardError> {
        let index = self.check_simulated(pos)?;
        let change = Change {
            pos,
            status: self.cells[index].status().flipped(),
        };
        self.write(index, change.status);
        Ok(change)
    }

    /// Sets one simulated cell, returning the change if its status differs
    pub fn set(&mut self, pos: Pos2, status: Status) -> Result<Option<Change>, BoardError> {
        let index = self.check_simulated(pos)?;
        if self.cells[index].status() == status {
            return Ok(None);
        }
        self.write(index, status);
        Ok(Some(Change { pos, status }))
    }

    /// Brings every position of `alive`, shifted by `offset`, to life
    ///
    /// Nothing is written unless the whole pattern lands inside the simulated area.
    pub fn place(&mut self, alive: &[Pos2], offset: Pos2) -> Result<Vec<Change>, BoardError> {
        let indices = alive
            .iter()
            .map(|&pos| {
                let shifted = pos.checked_add(offset).ok_or(BoardError::OutOfBounds {
                    pos,
                    size: self.size(),
                })?;
                self.check_simulated(shifted)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut changes = Vec::new();
        for index in indices {
            if !self.cells[index].is_alive() {
                self.write(index, Status::Alive);
                changes.push(Change {
                    pos: self.cells[index].pos(),
                    status: Status::Alive,
                });
            }
        }
        changes.sort_by_key(|change| change.pos);
        Ok(changes)
    }

    /// Kills every living cell
    pub fn clear(&mut self) -> Vec<Change> {
        let changes = self
            .alive()
            .into_iter()
            .map(|pos| Change {
                pos,
                status: Status::Dead,
            })
            .collect::<Vec<_>>();
        self.apply(&changes);
        changes
    }

    /// Flips every simulated cell with probability 0.5
    pub fn randomize(&mut self) -> Vec<Change> {
        self.randomize_with(&mut rand::rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Change> {
        let changes = self
            .simulated_positions()
            .filter(|_| rng.random_bool(0.5))
            .map(|pos| Change {
                pos,
                status: self.cells[pos.to_index(self.size)].status().flipped(),
            })
            .collect::<Vec<_>>();
        self.apply(&changes);
        debug!("randomized {} cells, {} alive", changes.len(), self.alive);
        changes
    }

    /// Advances the board by one generation
    ///
    /// Every next status is computed from the current generation before any of
    /// them is written. Returns the cells that changed.
    pub fn step(&mut self) -> Vec<Change> {
        let changes = self
            .simulated_positions()
            .filter_map(|pos| self.compute(pos))
            .collect::<Vec<_>>();
        self.finish_step(changes)
    }

    /// Same as [`Board::step`], computing the next generation on the rayon pool
    pub fn step_parallel(&mut self) -> Vec<Change> {
        let bounds = self.simulated_bounds();
        let board = &*self;
        let changes = bounds
            .clone()
            .into_par_iter()
            .flat_map_iter(|y| {
                bounds
                    .clone()
                    .filter_map(move |x| board.compute(Pos2::new(x, y)))
            })
            .collect::<Vec<_>>();
        self.finish_step(changes)
    }

    fn finish_step(&mut self, changes: Vec<Change>) -> Vec<Change> {
        self.apply(&changes);
        self.generation += 1;
        trace!(
            "generation {}: {} changed, {} alive",
            self.generation,
            changes.len(),
            self.alive
        );
        changes
    }

    #[inline]
    fn next_status(&self, index: usize) -> Status {
        let cell = &self.cells[index];
        let living = self.resolver.living_neighbors(cell.pos(), &self.cells);
        rules::next_status(cell.status(), living)
    }

    /// The change `pos` undergoes in the next generation, if any
    #[inline]
    fn compute(&self, pos: Pos2) -> Option<Change> {
        let index = pos.to_index(self.size);
        let status = self.next_status(index);
        (status != self.cells[index].status()).then_some(Change { pos, status })
    }

    fn apply(&mut self, changes: &[Change]) {
        for change in changes {
            self.write(change.pos.to_index(self.size), change.status);
        }
    }

    fn write(&mut self, index: usize, status: Status) {
        let cell = &mut self.cells[index];
        match (cell.status(), status) {
            (Status::Dead, Status::Alive) => self.alive += 1,
            (Status::Alive, Status::Dead) => self.alive -= 1,
            _ => {}
        }
        cell.set_status(status);
    }
}
