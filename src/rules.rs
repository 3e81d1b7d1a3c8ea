//! Rules module for the life engine
//!
//! Holds the birth/survival thresholds applied to every cell, and the named
//! seed patterns in [`patterns`].
pub mod patterns;

pub use patterns::{centered_origin, place_pattern, Pattern};

use serde::{Deserialize, Serialize};

/// Birth/survival thresholds. The defaults are the standard rules:
/// 1. Any live cell with fewer than two live neighbors dies (underpopulation)
/// 2. Any live cell with two or three live neighbors lives (survival)
/// 3. Any live cell with more than three live neighbors dies (overpopulation)
/// 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Minimum neighbors for a live cell to survive
    pub survival_min: u8,
    /// Maximum neighbors for a live cell to survive
    pub survival_max: u8,
    /// Number of neighbors for a dead cell to become alive
    pub birth_count: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        // Conway's B3/S23
        Self {
            survival_min: 2,
            survival_max: 3,
            birth_count: 3,
        }
    }
}

impl GameRules {
    /// Create a new rule set with custom parameters
    pub fn new(survival_min: u8, survival_max: u8, birth_count: u8) -> Self {
        Self {
            survival_min,
            survival_max,
            birth_count,
        }
    }

    /// Preset for Conway's classic Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::default()
    }

    /// Checks the thresholds describe a usable Moore-neighbourhood rule.
    ///
    /// Birth on zero neighbours is rejected: it would fill the plane, and an
    /// unbounded grid could never stop growing.
    pub fn validate(&self) -> Result<(), String> {
        if self.birth_count == 0 || self.birth_count > 8 {
            return Err(format!("birth_count must be in 1..=8, got {}", self.birth_count));
        }
        if self.survival_min > self.survival_max || self.survival_max > 8 {
            return Err(format!(
                "survival range {}..={} is not within 0..=8",
                self.survival_min, self.survival_max
            ));
        }
        Ok(())
    }

    pub fn survives(&self, neighbors: u8) -> bool {
        (self.survival_min..=self.survival_max).contains(&neighbors)
    }

    pub fn is_birth(&self, neighbors: u8) -> bool {
        neighbors == self.birth_count
    }

    /// Next state of one cell given its current state and live-neighbour count.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survives(neighbors)
        } else {
            self.is_birth(neighbors)
        }
    }
}

impl std::fmt::Display for GameRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "B{}/S{}-{}",
            self.birth_count, self.survival_min, self.survival_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_transitions() {
        let rules = GameRules::conway();
        assert!(!rules.next_state(true, 1));
        assert!(rules.next_state(true, 2));
        assert!(rules.next_state(true, 3));
        assert!(!rules.next_state(true, 4));
        assert!(rules.next_state(false, 3));
        assert!(!rules.next_state(false, 2));
        assert!(!rules.next_state(false, 4));
    }

    #[test]
    fn validate_rejects_bad_thresholds() {
        assert!(GameRules::default().validate().is_ok());
        assert!(GameRules::new(2, 3, 0).validate().is_err());
        assert!(GameRules::new(4, 3, 3).validate().is_err());
        assert!(GameRules::new(2, 9, 3).validate().is_err());
    }

    #[test]
    fn display_shows_rule_string() {
        assert_eq!(GameRules::default().to_string(), "B3/S2-3");
    }
}
