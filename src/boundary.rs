use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::neighbors::count_live_neighbors;
use crate::rules::GameRules;

/// Default number of rows/columns added when an unbounded grid grows.
pub const DEFAULT_GROWTH_MARGIN: usize = 10;

/// How cells beyond the grid edge are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Fixed size, everything outside is dead.
    #[default]
    Finite,
    /// Fixed size, coordinates wrap around.
    Toroidal,
    /// Counts like `Finite`, but the grid grows wherever a birth would happen
    /// just past an edge.
    Unbounded,
}

impl BoundaryPolicy {
    pub const ALL: [BoundaryPolicy; 3] = [
        BoundaryPolicy::Finite,
        BoundaryPolicy::Toroidal,
        BoundaryPolicy::Unbounded,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BoundaryPolicy::Finite => "finite",
            BoundaryPolicy::Toroidal => "toroidal",
            BoundaryPolicy::Unbounded => "unbounded",
        }
    }

    pub fn grows(self) -> bool {
        matches!(self, BoundaryPolicy::Unbounded)
    }
}

impl std::fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BoundaryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "finite" => Ok(BoundaryPolicy::Finite),
            "toroidal" | "torus" | "wrap" => Ok(BoundaryPolicy::Toroidal),
            "unbounded" | "infinite" => Ok(BoundaryPolicy::Unbounded),
            other => Err(format!("unknown boundary policy '{other}'")),
        }
    }
}

/// One side of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// The set of edges flagged for growth in one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeSet {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeSet {
    pub fn contains(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    pub fn insert(&mut self, edge: Edge) {
        match edge {
            Edge::Top => self.top = true,
            Edge::Bottom => self.bottom = true,
            Edge::Left => self.left = true,
            Edge::Right => self.right = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }

    /// Flagged edges in `Edge::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::ALL.into_iter().filter(move |&edge| self.contains(edge))
    }
}

/// Would a dead virtual cell at `(row, col)` outside the grid be born next tick?
fn births_beyond(grid: &Grid, row: i64, col: i64, rules: &GameRules) -> bool {
    rules.is_birth(count_live_neighbors(grid, row, col, BoundaryPolicy::Finite))
}

/// Tests the ring of virtual cells just past each edge.
///
/// Cells further out have no live neighbours and are never born. A corner
/// cell lies beyond two edges, so a birth there flags both.
pub fn edges_to_grow(grid: &Grid, rules: &GameRules) -> EdgeSet {
    let (rows, cols) = (grid.rows() as i64, grid.cols() as i64);
    let mut edges = EdgeSet::default();
    if rows == 0 || cols == 0 {
        return edges;
    }

    if (0..cols).any(|c| births_beyond(grid, -1, c, rules)) {
        edges.insert(Edge::Top);
    }
    if (0..cols).any(|c| births_beyond(grid, rows, c, rules)) {
        edges.insert(Edge::Bottom);
    }
    if (0..rows).any(|r| births_beyond(grid, r, -1, rules)) {
        edges.insert(Edge::Left);
    }
    if (0..rows).any(|r| births_beyond(grid, r, cols, rules)) {
        edges.insert(Edge::Right);
    }

    let corners = [
        (-1, -1, Edge::Top, Edge::Left),
        (-1, cols, Edge::Top, Edge::Right),
        (rows, -1, Edge::Bottom, Edge::Left),
        (rows, cols, Edge::Bottom, Edge::Right),
    ];
    for (r, c, vertical, horizontal) in corners {
        if births_beyond(grid, r, c, rules) {
            edges.insert(vertical);
            edges.insert(horizontal);
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, live: &[(i64, i64)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(r, c) in live {
            grid.set(r, c, true).unwrap();
        }
        grid
    }

    #[test]
    fn policy_parses_and_displays() {
        for policy in BoundaryPolicy::ALL {
            assert_eq!(policy.name().parse::<BoundaryPolicy>(), Ok(policy));
        }
        assert_eq!("Torus".parse(), Ok(BoundaryPolicy::Toroidal));
        assert!("sphere".parse::<BoundaryPolicy>().is_err());
        assert_eq!(BoundaryPolicy::default(), BoundaryPolicy::Finite);
    }

    #[test]
    fn three_cells_on_top_row_flag_top_only() {
        let grid = grid_with(5, 5, &[(0, 1), (0, 2), (0, 3)]);
        let edges = edges_to_grow(&grid, &GameRules::default());
        assert_eq!(
            edges,
            EdgeSet {
                top: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn vertical_line_on_left_column_flags_left() {
        let grid = grid_with(5, 5, &[(1, 0), (2, 0), (3, 0)]);
        let edges = edges_to_grow(&grid, &GameRules::default());
        assert!(edges.left);
        assert!(!edges.right && !edges.top && !edges.bottom);
    }

    #[test]
    fn opposite_edges_grow_together() {
        // A 3x3 block of three horizontal lines touches top and bottom.
        let grid = grid_with(
            3,
            5,
            &[(0, 1), (0, 2), (0, 3), (2, 1), (2, 2), (2, 3)],
        );
        let edges = edges_to_grow(&grid, &GameRules::default());
        assert!(edges.top && edges.bottom);
        assert_eq!(edges.iter().collect::<Vec<_>>(), vec![Edge::Top, Edge::Bottom]);
    }

    #[test]
    fn pattern_away_from_edges_does_not_grow() {
        let grid = grid_with(7, 7, &[(3, 2), (3, 3), (3, 4)]);
        assert!(edges_to_grow(&grid, &GameRules::default()).is_empty());
    }

    #[test]
    fn two_cells_on_edge_are_not_enough() {
        let grid = grid_with(4, 4, &[(0, 1), (0, 2)]);
        assert!(edges_to_grow(&grid, &GameRules::default()).is_empty());
    }

    #[test]
    fn empty_grid_never_grows() {
        let grid = Grid::new(0, 0).unwrap();
        assert!(edges_to_grow(&grid, &GameRules::default()).is_empty());
    }

    #[test]
    fn corner_births_flag_both_edges() {
        // Under B1 a corner virtual cell next to one live cell is born.
        let rules = GameRules::new(2, 3, 1);
        let grid = grid_with(2, 2, &[(0, 0), (0, 1), (1, 0)]);
        let edges = edges_to_grow(&grid, &rules);
        assert!(edges.top && edges.left && edges.bottom && edges.right);

        let lone = grid_with(3, 3, &[(0, 0)]);
        let edges = edges_to_grow(&lone, &rules);
        assert!(edges.top && edges.left);
    }
}
