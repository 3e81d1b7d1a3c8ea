use crate::boundary::{edges_to_grow, BoundaryPolicy, EdgeSet, DEFAULT_GROWTH_MARGIN};
use crate::error::{EngineError, Result};
use crate::grid::{ActivityCounts, Grid, GridState};
use crate::neighbors::count_live_neighbors;
use crate::resize::expand_edges;
use crate::rules::GameRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Birth,
    Death,
}

/// A cell that changed state during one step. Coordinates refer to the grid
/// returned by that step, i.e. after any growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionEvent {
    pub row: usize,
    pub col: usize,
    pub kind: TransitionKind,
}

/// Everything one generation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub state: GridState,
    pub transitions: Vec<TransitionEvent>,
    /// False once the automaton has settled; the driver should stop.
    pub changed: bool,
    /// Edges grown before the rule pass (always empty unless unbounded).
    pub grown: EdgeSet,
}

impl StepOutcome {
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

/// Step parameters that stay fixed between generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepConfig {
    pub rules: GameRules,
    /// Rows/columns added per flagged edge under `Unbounded`.
    pub growth_margin: usize,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            growth_margin: DEFAULT_GROWTH_MARGIN,
        }
    }
}

/// Compute one generation from a cell buffer and its activity buffer.
///
/// Order is fixed: grow (unbounded only), then evaluate every cell against the
/// pre-step grid, then bump activity for each death. The inputs are never
/// modified, so a failed call leaves nothing half-applied.
pub fn step_buffers(
    grid: &Grid,
    activity: &ActivityCounts,
    policy: BoundaryPolicy,
    config: &StepConfig,
) -> Result<StepOutcome> {
    if grid.dimensions() != activity.dimensions() {
        return Err(EngineError::ShapeMismatch {
            grid: grid.dimensions(),
            activity: activity.dimensions(),
        });
    }

    let mut current = GridState::from_parts(grid.clone(), activity.clone())?;
    let mut grown = EdgeSet::default();
    if policy.grows() {
        grown = edges_to_grow(current.cells(), &config.rules);
        if !grown.is_empty() {
            current = expand_edges(current, grown, config.growth_margin)?;
        }
    }

    let (cells, mut counts) = current.into_parts();
    let (rows, cols) = cells.dimensions();
    let mut next = Grid::new(rows, cols)?;
    let mut transitions = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            let alive = cells.at(r, c);
            let neighbors = count_live_neighbors(&cells, r as i64, c as i64, policy);
            let next_alive = config.rules.next_state(alive, neighbors);
            *next.at_mut(r, c) = next_alive;

            match (alive, next_alive) {
                (true, false) => {
                    let count = counts.at_mut(r, c);
                    *count = count.saturating_add(1);
                    transitions.push(TransitionEvent {
                        row: r,
                        col: c,
                        kind: TransitionKind::Death,
                    });
                }
                (false, true) => transitions.push(TransitionEvent {
                    row: r,
                    col: c,
                    kind: TransitionKind::Birth,
                }),
                _ => {}
            }
        }
    }

    let changed = !transitions.is_empty();
    log::trace!(
        "Step {}x{} ({}): {} transitions, grown {:?}",
        rows,
        cols,
        policy,
        transitions.len(),
        grown
    );

    Ok(StepOutcome {
        state: GridState::from_parts(next, counts)?,
        transitions,
        changed,
        grown,
    })
}

/// One generation with the given rules and growth margin.
pub fn step_with(state: &GridState, policy: BoundaryPolicy, config: &StepConfig) -> Result<StepOutcome> {
    step_buffers(state.cells(), state.activity(), policy, config)
}

/// One generation with the standard rules and the default growth margin.
pub fn step(state: &GridState, policy: BoundaryPolicy) -> Result<StepOutcome> {
    step_with(state, policy, &StepConfig::default())
}
