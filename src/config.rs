use crate::{BorderPolicy, error::ConfigError};
use std::time::Duration;

/// Largest grid edge whose cell count still fits the `i32` coordinate space
pub const MAX_GRID_SIZE: usize = 46_340;

/// Checks that a `size`x`size` grid leaves a simulated cell and stays addressable
pub fn check_grid_size(size: usize, policy: BorderPolicy) -> Result<(), ConfigError> {
    let min = policy.min_grid_size();
    if size < min {
        return Err(ConfigError::GridTooSmall { size, policy, min });
    }
    if size > MAX_GRID_SIZE {
        return Err(ConfigError::GridTooLarge {
            size,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(())
}

/// Board shape and update loop timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Edge length of the square grid, frame included
    pub grid_size: usize,
    /// Time between generations while the update loop runs
    pub tick_interval: Duration,
    pub border_policy: BorderPolicy,
    /// Compute generations on the rayon thread pool
    pub parallel: bool,
}

impl Config {
    /// A 40x40 framed board stepped as fast as the timer allows
    pub fn bordered() -> Self {
        Self {
            grid_size: 40,
            tick_interval: Duration::from_millis(1),
            border_policy: BorderPolicy::Bordered,
            parallel: false,
        }
    }

    /// A 10x10 board without a frame, stepped once a second
    pub fn clamped() -> Self {
        Self {
            grid_size: 10,
            tick_interval: Duration::from_millis(1000),
            border_policy: BorderPolicy::Clamped,
            parallel: false,
        }
    }

    /// The preset for the given policy
    pub fn preset(policy: BorderPolicy) -> Self {
        match policy {
            BorderPolicy::Bordered => Self::bordered(),
            BorderPolicy::Clamped => Self::clamped(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_grid_size(self.grid_size, self.border_policy)?;
        if self.tick_interval < Duration::from_millis(1) {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
impl Default for Config {
    fn default() -> Self {
        Self::bordered()
    }
}
