use crate::grid::GridState;

/// Predefined patterns for seeding the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Period-2 oscillator, vertical phase
    Blinker,
    /// Period-2 oscillator
    Toad,
    /// Still life
    Block,
    /// Period-2 oscillator made of two blocks
    Beacon,
    /// Diagonal spaceship heading down and right
    Glider,
    /// Horizontal spaceship heading right
    LightweightSpaceship,
    /// Methuselah that settles after 1103 generations on an unbounded plane
    RPentomino,
    /// Emits a glider every 30 generations
    GosperGliderGun,
}

const BLINKER: &[(i64, i64)] = &[(0, 0), (1, 0), (2, 0)];
const TOAD: &[(i64, i64)] = &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)];
const BLOCK: &[(i64, i64)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const BEACON: &[(i64, i64)] = &[
    (0, 0), (0, 1), (1, 0), (1, 1),
    (2, 2), (2, 3), (3, 2), (3, 3),
];
const GLIDER: &[(i64, i64)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const LWSS: &[(i64, i64)] = &[
    (0, 0), (0, 3),
    (1, 4),
    (2, 0), (2, 4),
    (3, 1), (3, 2), (3, 3), (3, 4),
];
const R_PENTOMINO: &[(i64, i64)] = &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)];
const GOSPER_GLIDER_GUN: &[(i64, i64)] = &[
    // Left block
    (4, 0), (4, 1), (5, 0), (5, 1),
    // Left ship
    (4, 10), (5, 10), (6, 10),
    (3, 11), (7, 11),
    (2, 12), (8, 12),
    (2, 13), (8, 13),
    (5, 14),
    (3, 15), (7, 15),
    (4, 16), (5, 16), (6, 16),
    (5, 17),
    // Right ship
    (2, 20), (3, 20), (4, 20),
    (2, 21), (3, 21), (4, 21),
    (1, 22), (5, 22),
    (0, 24), (1, 24), (5, 24), (6, 24),
    // Right block
    (2, 34), (3, 34), (2, 35), (3, 35),
];

impl Pattern {
    pub const ALL: [Pattern; 8] = [
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Block,
        Pattern::Beacon,
        Pattern::Glider,
        Pattern::LightweightSpaceship,
        Pattern::RPentomino,
        Pattern::GosperGliderGun,
    ];

    /// Live cells as `(row, col)` offsets from the top-left of the pattern's
    /// bounding box.
    pub fn cells(&self) -> &'static [(i64, i64)] {
        match self {
            Pattern::Blinker => BLINKER,
            Pattern::Toad => TOAD,
            Pattern::Block => BLOCK,
            Pattern::Beacon => BEACON,
            Pattern::Glider => GLIDER,
            Pattern::LightweightSpaceship => LWSS,
            Pattern::RPentomino => R_PENTOMINO,
            Pattern::GosperGliderGun => GOSPER_GLIDER_GUN,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Block => "block",
            Pattern::Beacon => "beacon",
            Pattern::Glider => "glider",
            Pattern::LightweightSpaceship => "lightweight-spaceship",
            Pattern::RPentomino => "r-pentomino",
            Pattern::GosperGliderGun => "gosper-glider-gun",
        }
    }

    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (i64, i64) {
        self.cells()
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| format!("unknown pattern '{s}'"))
    }
}

/// Anchor that places `pattern` in the middle of the grid.
pub fn centered_origin(state: &GridState, pattern: Pattern) -> (i64, i64) {
    let (rows, cols) = state.dimensions();
    let (h, w) = pattern.extent();
    ((rows as i64 - h) / 2, (cols as i64 - w) / 2)
}

/// Paint `pattern` with its top-left corner at `(row, col)`. Cells that fall
/// outside the grid are clipped. Returns how many cells were painted.
pub fn place_pattern(state: &mut GridState, pattern: Pattern, row: i64, col: i64) -> usize {
    let mut painted = 0;
    for &(dr, dc) in pattern.cells() {
        if state.set_cell(row + dr, col + dc, true).is_ok() {
            painted += 1;
        }
    }
    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryPolicy;
    use crate::step::step;

    #[test]
    fn extents_match_known_shapes() {
        assert_eq!(Pattern::Blinker.extent(), (3, 1));
        assert_eq!(Pattern::Glider.extent(), (3, 3));
        assert_eq!(Pattern::LightweightSpaceship.extent(), (4, 5));
        assert_eq!(Pattern::GosperGliderGun.extent(), (9, 36));
        assert_eq!(Pattern::GosperGliderGun.cells().len(), 36);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>(), Ok(pattern));
        }
        assert_eq!("R_Pentomino".parse(), Ok(Pattern::RPentomino));
        assert!("spaceship".parse::<Pattern>().is_err());
    }

    #[test]
    fn lightweight_spaceship_heads_right() {
        let mut state = GridState::create(12, 30).unwrap();
        place_pattern(&mut state, Pattern::LightweightSpaceship, 4, 5);
        let mean_col = |s: &GridState| {
            let (rows, cols) = s.dimensions();
            let mut sum = 0;
            for r in 0..rows {
                for c in 0..cols {
                    if s.cells().at(r, c) {
                        sum += c;
                    }
                }
            }
            sum as f64 / s.population() as f64
        };

        let start = mean_col(&state);
        for _ in 0..8 {
            state = step(&state, BoundaryPolicy::Finite).unwrap().state;
        }
        assert_eq!(state.population(), 9);
        assert!((mean_col(&state) - start - 4.0).abs() < 1e-9);
    }

    #[test]
    fn place_pattern_clips_at_edges() {
        let mut state = GridState::create(3, 3).unwrap();
        let painted = place_pattern(&mut state, Pattern::Block, 2, 2);
        assert_eq!(painted, 1);
        assert_eq!(state.population(), 1);
        assert_eq!(state.activity().total(), 0);
    }

    #[test]
    fn centered_glider() {
        let mut state = GridState::create(9, 9).unwrap();
        let (row, col) = centered_origin(&state, Pattern::Glider);
        assert_eq!((row, col), (3, 3));
        assert_eq!(place_pattern(&mut state, Pattern::Glider, row, col), 5);
    }
}
