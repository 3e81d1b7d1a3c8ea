use crate::boundary::BoundaryPolicy;
use crate::grid::Grid;

/// The eight Moore-neighbourhood offsets, `(0, 0)` excluded.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the live neighbours of `(row, col)` under `policy`.
///
/// The coordinate may lie outside the grid. Under `Finite` and `Unbounded`
/// anything out of range counts as dead; under `Toroidal` every coordinate is
/// wrapped, including the centre. Pure and side-effect free.
pub fn count_live_neighbors(grid: &Grid, row: i64, col: i64, policy: BoundaryPolicy) -> u8 {
    let (rows, cols) = (grid.rows() as i64, grid.cols() as i64);
    if rows == 0 || cols == 0 {
        return 0;
    }

    let mut count = 0;
    for (dr, dc) in MOORE_OFFSETS {
        let (nr, nc) = (row + dr, col + dc);
        let alive = match policy {
            BoundaryPolicy::Toroidal => {
                grid.at(nr.rem_euclid(rows) as usize, nc.rem_euclid(cols) as usize)
            }
            BoundaryPolicy::Finite | BoundaryPolicy::Unbounded => grid
                .index(nr, nc)
                .map(|idx| grid.as_slice()[idx])
                .unwrap_or(false),
        };
        if alive {
            count += 1;
        }
    }
    count
}
