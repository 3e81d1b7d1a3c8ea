//! Simulation engine for Conway's Game of Life.
//!
//! The engine owns the cell grid and its per-cell activity counters and knows
//! how to advance them one generation under a finite, toroidal or unbounded
//! boundary. Drawing, input and timing belong to the caller; [`frame`] exposes
//! the buffers a renderer needs.

pub mod boundary;
pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod neighbors;
pub mod resize;
pub mod rules;
pub mod simulation;
pub mod step;

pub use boundary::{BoundaryPolicy, Edge, EdgeSet, DEFAULT_GROWTH_MARGIN};
pub use config::{ConfigError, EngineConfig};
pub use error::EngineError;
pub use frame::Frame;
pub use grid::{ActivityCounts, Grid, GridState};
pub use neighbors::count_live_neighbors;
pub use resize::{expand, expand_state, resize_to_fit};
pub use rules::{GameRules, Pattern};
pub use simulation::{Phase, Simulation, Tick};
pub use step::{step, step_buffers, step_with, StepConfig, StepOutcome, TransitionEvent, TransitionKind};

/// A new all-dead grid with zeroed activity counts.
pub fn create_grid(rows: i64, cols: i64) -> error::Result<GridState> {
    GridState::create(rows, cols)
}
