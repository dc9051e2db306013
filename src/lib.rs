//! A fixed-size Game of Life board with an interval-driven update loop.

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod neighbors;
pub mod pattern;
pub mod pos;
pub mod rules;
pub mod update_loop;
pub mod view;

pub use board::{Board, Change};
pub use cell::{Cell, Status};
pub use config::Config;
pub use error::{BoardError, ConfigError, PatternError};
pub use neighbors::{BorderPolicy, NeighborResolver};
pub use pattern::Pattern;
pub use pos::Pos2;
pub use update_loop::{Generation, LoopState, SharedBoard, UpdateLoop};
pub use view::BoardView;
