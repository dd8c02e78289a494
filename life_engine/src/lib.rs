// lib.rs - Conway's Game of Life engine: grid, rules, clock and lifecycle

pub mod cell;
pub mod clock;
pub mod error;
pub mod game;
pub mod grid;
pub mod rules;

pub use cell::Cell;
pub use clock::SimulationClock;
pub use error::ConfigError;
pub use game::{BoardObserver, Game, SimulationState};
pub use grid::{Grid, NeighborCounts};
