use crate::boundary::{Edge, EdgeSet};
use crate::error::Result;
use crate::grid::{checked_dims, ActivityCounts, Grid, GridState, Plane};

/// Add `amount` default-valued rows or columns along `edge`, keeping every
/// existing value at the same position relative to its neighbours.
pub fn expand<T: Copy + Default>(plane: &Plane<T>, edge: Edge, amount: usize) -> Plane<T> {
    let (rows, cols) = plane.dimensions();
    let (new_rows, new_cols, row_off, col_off) = match edge {
        Edge::Top => (rows + amount, cols, amount, 0),
        Edge::Bottom => (rows + amount, cols, 0, 0),
        Edge::Left => (rows, cols + amount, 0, amount),
        Edge::Right => (rows, cols + amount, 0, 0),
    };

    let mut data = vec![T::default(); new_rows * new_cols];
    for (r, src) in plane.as_slice().chunks_exact(cols.max(1)).enumerate().take(rows) {
        let start = (r + row_off) * new_cols + col_off;
        data[start..start + cols].copy_from_slice(&src[..cols]);
    }
    Plane::from_raw(new_rows, new_cols, data)
}

/// Grow cells and activity counts together along one edge.
pub fn expand_state(state: &GridState, edge: Edge, amount: usize) -> Result<GridState> {
    let cells = expand(state.cells(), edge, amount);
    let activity = expand(state.activity(), edge, amount);
    log::debug!(
        "Expanded grid {:?} by {}: now {}x{}",
        edge,
        amount,
        cells.rows(),
        cells.cols()
    );
    GridState::from_parts(cells, activity)
}

/// Apply every flagged edge in turn. Edges are independent: growing one never
/// suppresses another.
pub fn expand_edges(state: GridState, edges: EdgeSet, amount: usize) -> Result<GridState> {
    edges
        .iter()
        .try_fold(state, |acc, edge| expand_state(&acc, edge, amount))
}

/// Rebuild the grid at a new size. Cells in the overlapping top-left region are
/// kept; activity counts are discarded.
pub fn resize_to_fit(state: &GridState, rows: i64, cols: i64) -> Result<GridState> {
    let (rows, cols) = checked_dims(rows, cols)?;
    let mut cells = Grid::new(rows, cols)?;
    let (old_rows, old_cols) = state.dimensions();
    for r in 0..rows.min(old_rows) {
        for c in 0..cols.min(old_cols) {
            *cells.at_mut(r, c) = state.cells().at(r, c);
        }
    }
    log::debug!("Resized grid {}x{} -> {}x{}", old_rows, old_cols, rows, cols);
    GridState::from_parts(cells, ActivityCounts::new(rows, cols)?)
}

impl GridState {
    pub fn resize_to_fit(&self, rows: i64, cols: i64) -> Result<GridState> {
        resize_to_fit(self, rows, cols)
    }
}
