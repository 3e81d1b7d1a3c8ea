use bytemuck::{Pod, Zeroable};

use crate::grid::{ActivityCounts, Grid, GridState};

/// Shader-compatible description of a captured frame
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct FrameParams {
    pub rows: u32,
    pub cols: u32,
    pub max_activity: u32,
    pub _padding: u32, // Ensure 16-byte alignment
}

/// Dimensions beyond `u32::MAX` saturate rather than wrap.
fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// One value per cell, 1.0 alive / 0.0 dead, row-major.
pub fn cell_buffer(grid: &Grid) -> Vec<f32> {
    grid.as_slice()
        .iter()
        .map(|&alive| if alive { 1.0 } else { 0.0 })
        .collect()
}

/// Activity counts scaled into `0.0..=1.0` by the busiest cell.
pub fn heat_buffer(activity: &ActivityCounts) -> Vec<f32> {
    let max = activity.max();
    if max == 0 {
        return vec![0.0; activity.as_slice().len()];
    }
    let scale = 1.0 / max as f32;
    activity.as_slice().iter().map(|&n| n as f32 * scale).collect()
}

/// Read-only snapshot handed to an external renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub params: FrameParams,
    pub cells: Vec<f32>,
    pub heat: Vec<f32>,
}

impl Frame {
    pub fn capture(state: &GridState) -> Self {
        let (rows, cols) = state.dimensions();
        Self {
            params: FrameParams {
                rows: saturating_u32(rows),
                cols: saturating_u32(cols),
                max_activity: state.activity().max(),
                _padding: 0,
            },
            cells: cell_buffer(state.cells()),
            heat: heat_buffer(state.activity()),
        }
    }

    pub fn params_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.params)
    }

    pub fn cell_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    pub fn heat_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.heat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_are_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<FrameParams>(), 16);
    }

    #[test]
    fn capture_reflects_cells_and_heat() {
        let mut state = GridState::create(2, 2).unwrap();
        state.set_cell(0, 1, true).unwrap();
        let (cells, mut activity) = state.into_parts();
        activity.set(1, 0, 4).unwrap();
        activity.set(1, 1, 2).unwrap();
        let state = GridState::from_parts(cells, activity).unwrap();

        let frame = Frame::capture(&state);
        assert_eq!(frame.params.rows, 2);
        assert_eq!(frame.params.max_activity, 4);
        assert_eq!(frame.cells, vec![0.0, 1.0, 0.0, 0.0]);
        assert_eq!(frame.heat, vec![0.0, 0.0, 1.0, 0.5]);
        assert_eq!(frame.cell_bytes().len(), 16);
        assert_eq!(frame.params_bytes().len(), 16);
    }

    #[test]
    fn oversized_dimensions_saturate() {
        assert_eq!(saturating_u32(7), 7);
        assert_eq!(saturating_u32(u32::MAX as usize), u32::MAX);
        assert_eq!(saturating_u32(usize::MAX), u32::MAX);
    }

    #[test]
    fn idle_grid_has_no_heat() {
        let state = GridState::create(3, 3).unwrap();
        let frame = Frame::capture(&state);
        assert!(frame.heat.iter().all(|&h| h == 0.0));
        assert_eq!(frame.heat_bytes().len(), 36);
    }
}
