use crate::boundary::{BoundaryPolicy, EdgeSet};
use crate::config::{ConfigError, EngineConfig};
use crate::error::Result;
use crate::grid::{checked_dims, GridState};
use crate::rules::{centered_origin, place_pattern, Pattern};
use crate::step::{step_with, StepConfig, TransitionEvent, TransitionKind};

/// Where the session is within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Stepping,
}

/// What a single tick reports back to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
    pub transitions: Vec<TransitionEvent>,
    pub changed: bool,
    pub grown: EdgeSet,
}

impl Tick {
    pub fn births(&self) -> usize {
        self.count(TransitionKind::Birth)
    }

    pub fn deaths(&self) -> usize {
        self.count(TransitionKind::Death)
    }

    fn count(&self, kind: TransitionKind) -> usize {
        self.transitions.iter().filter(|t| t.kind == kind).count()
    }
}

/// A grid plus everything needed to advance it, as seen by the driver that
/// owns the epoch timer. Painting and stepping both take `&mut self`, so they
/// can never overlap.
pub struct Simulation {
    state: GridState,
    policy: BoundaryPolicy,
    step_config: StepConfig,
    generation: u64,
    phase: Phase,
    running: bool,
    settled: bool,
}

impl Simulation {
    /// Build a session from a config, rejecting configs that fail
    /// [`EngineConfig::validate`].
    pub fn new(config: &EngineConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GridState::create(config.rows, config.cols)?,
            policy: config.policy,
            step_config: config.step_config(),
            generation: 0,
            phase: Phase::Idle,
            running: false,
            settled: false,
        })
    }

    /// Advance one generation.
    ///
    /// When nothing changes the session is marked settled and stops running;
    /// the caller should treat that as the end of the run, not as an error.
    pub fn tick(&mut self) -> Result<Tick> {
        self.phase = Phase::Stepping;
        let result = step_with(&self.state, self.policy, &self.step_config);
        self.phase = Phase::Idle;
        let outcome = result?;

        self.state = outcome.state;
        self.generation += 1;
        if !outcome.changed {
            self.settled = true;
            if self.running {
                log::info!("Simulation settled at generation {}", self.generation);
            }
            self.running = false;
        }

        Ok(Tick {
            generation: self.generation,
            transitions: outcome.transitions,
            changed: outcome.changed,
            grown: outcome.grown,
        })
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("Simulation started ({} boundary)", self.policy);
        }
        self.running = true;
        self.settled = false;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("Simulation stopped at generation {}", self.generation);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.state.population()
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn step_config(&self) -> &StepConfig {
        &self.step_config
    }

    /// Switch topology. The grid keeps its current size and cells.
    pub fn set_policy(&mut self, policy: BoundaryPolicy) {
        if policy != self.policy {
            log::debug!("Boundary policy {} -> {}", self.policy, policy);
            self.policy = policy;
        }
    }

    /// Set one cell directly. No activity is recorded.
    pub fn paint(&mut self, row: i64, col: i64, alive: bool) -> Result<()> {
        self.state.set_cell(row, col, alive)?;
        self.settled = false;
        Ok(())
    }

    /// Paint a square brush of side `2 * radius + 1` centred on `(row, col)`,
    /// clipped to the grid. A negative radius paints just the centre. Returns
    /// the number of cells written.
    pub fn paint_brush(&mut self, row: i64, col: i64, radius: i64, alive: bool) -> usize {
        if self.state.cells().index(row, col).is_none() {
            log::warn!("Ignoring brush outside the grid at ({}, {})", row, col);
            return 0;
        }
        let radius = radius.max(0);
        let (rows, cols) = self.state.dimensions();
        let (last_row, last_col) = (rows as i64 - 1, cols as i64 - 1);
        let row_range = row.saturating_sub(radius).max(0)..=row.saturating_add(radius).min(last_row);
        let col_range = col.saturating_sub(radius).max(0)..=col.saturating_add(radius).min(last_col);

        let mut painted = 0;
        for r in row_range {
            for c in col_range.clone() {
                if self.state.set_cell(r, c, alive).is_ok() {
                    painted += 1;
                }
            }
        }
        self.settled = false;
        painted
    }

    /// Paint `pattern` centred in the grid.
    pub fn place_centered(&mut self, pattern: Pattern) -> usize {
        let (row, col) = centered_origin(&self.state, pattern);
        self.place_pattern(pattern, row, col)
    }

    pub fn place_pattern(&mut self, pattern: Pattern, row: i64, col: i64) -> usize {
        self.settled = false;
        place_pattern(&mut self.state, pattern, row, col)
    }

    /// Clear everything at the current size, counts included.
    pub fn reset(&mut self) -> Result<()> {
        let (rows, cols) = self.state.dimensions();
        self.replace(GridState::create(rows as i64, cols as i64)?);
        Ok(())
    }

    /// Refit to a new container size; activity counts are discarded.
    pub fn resize_to_fit(&mut self, rows: i64, cols: i64) -> Result<()> {
        checked_dims(rows, cols)?;
        let resized = self.state.resize_to_fit(rows, cols)?;
        self.replace(resized);
        Ok(())
    }

    fn replace(&mut self, state: GridState) {
        self.state = state;
        self.generation = 0;
        self.running = false;
        self.settled = false;
    }
}
