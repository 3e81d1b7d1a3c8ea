use crate::error::{EngineError, Result};

/// Validates externally supplied dimensions and converts them to buffer sizes.
pub(crate) fn checked_dims(rows: i64, cols: i64) -> Result<(usize, usize)> {
    let invalid = EngineError::InvalidSize { rows, cols };
    let r = usize::try_from(rows).map_err(|_| invalid.clone())?;
    let c = usize::try_from(cols).map_err(|_| invalid.clone())?;
    r.checked_mul(c).ok_or(invalid)?;
    Ok((r, c))
}

/// A row-major `rows x cols` buffer. Both the cell grid and the activity
/// counters are planes of the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Cell states, `true` = alive.
pub type Grid = Plane<bool>;

/// Per-cell count of alive -> dead transitions.
pub type ActivityCounts = Plane<u32>;

impl<T: Copy + Default> Plane<T> {
    /// Create a plane filled with `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows.checked_mul(cols).ok_or(EngineError::InvalidSize {
            rows: rows as i64,
            cols: cols as i64,
        })?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::default(); len],
        })
    }

    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Converts a signed coordinate into a buffer index, if it is in range.
    pub fn index(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (r, c) = (row as usize, col as usize);
        (r < self.rows && c < self.cols).then(|| r * self.cols + c)
    }

    fn out_of_bounds(&self, row: i64, col: i64) -> EngineError {
        EngineError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn get(&self, row: i64, col: i64) -> Result<T> {
        self.index(row, col)
            .map(|idx| self.data[idx])
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    pub fn set(&mut self, row: i64, col: i64, value: T) -> Result<()> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.data[idx] = value;
        Ok(())
    }

    /// Unchecked read for coordinates already known to be in range.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }

    /// Row-major view of the whole buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Plane<bool> {
    /// True iff every cell is dead.
    pub fn is_blank(&self) -> bool {
        !self.data.iter().any(|&alive| alive)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.data.iter().filter(|&&alive| alive).count()
    }
}

impl Plane<u32> {
    /// Highest count in the plane, used to normalise heat-map intensity.
    pub fn max(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.data.iter().map(|&n| n as u64).sum()
    }
}

/// The authoritative simulation state: cells plus their activity counters,
/// always of identical shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cells: Grid,
    activity: ActivityCounts,
}

impl GridState {
    /// New all-dead grid with zeroed activity counts.
    pub fn create(rows: i64, cols: i64) -> Result<Self> {
        let (rows, cols) = checked_dims(rows, cols)?;
        log::debug!("Creating {}x{} grid", rows, cols);
        Ok(Self {
            cells: Grid::new(rows, cols)?,
            activity: ActivityCounts::new(rows, cols)?,
        })
    }

    /// Pairs a cell grid with its activity counters.
    pub fn from_parts(cells: Grid, activity: ActivityCounts) -> Result<Self> {
        if cells.dimensions() != activity.dimensions() {
            return Err(EngineError::ShapeMismatch {
                grid: cells.dimensions(),
                activity: activity.dimensions(),
            });
        }
        Ok(Self { cells, activity })
    }

    pub fn into_parts(self) -> (Grid, ActivityCounts) {
        (self.cells, self.activity)
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    pub fn activity(&self) -> &ActivityCounts {
        &self.activity
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dimensions()
    }

    pub fn cell_at(&self, row: i64, col: i64) -> Result<bool> {
        self.cells.get(row, col)
    }

    pub fn activity_at(&self, row: i64, col: i64) -> Result<u32> {
        self.activity.get(row, col)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.is_blank()
    }

    pub fn population(&self) -> usize {
        self.cells.population()
    }

    /// Direct write used for interactive drawing. Bypasses the update rule:
    /// activity counts are untouched and no transitions are produced.
    pub fn set_cell(&mut self, row: i64, col: i64, alive: bool) -> Result<()> {
        self.cells.set(row, col, alive)
    }

    /// Value-returning form of [`GridState::set_cell`].
    pub fn paint(mut self, row: i64, col: i64, alive: bool) -> Result<Self> {
        self.set_cell(row, col, alive)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_is_blank_with_zero_counts() {
        let state = GridState::create(4, 6).unwrap();
        assert_eq!(state.dimensions(), (4, 6));
        assert!(state.is_blank());
        assert_eq!(state.activity().total(), 0);
        assert_eq!(state.cells().as_slice().len(), 24);
    }

    #[test]
    fn create_rejects_negative_dimensions() {
        assert_eq!(
            GridState::create(-1, 3),
            Err(EngineError::InvalidSize { rows: -1, cols: 3 })
        );
        assert!(GridState::create(3, -2).is_err());
    }

    #[test]
    fn zero_sized_grid_is_valid_and_blank() {
        let state = GridState::create(0, 5).unwrap();
        assert_eq!(state.dimensions(), (0, 5));
        assert!(state.is_blank());
    }

    #[test]
    fn get_and_set_check_bounds() {
        let mut state = GridState::create(3, 3).unwrap();
        state.set_cell(2, 1, true).unwrap();
        assert!(state.cell_at(2, 1).unwrap());
        assert!(!state.cell_at(1, 2).unwrap());

        let err = state.cell_at(3, 0).unwrap_err();
        assert_eq!(
            err,
            EngineError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            }
        );
        assert!(state.set_cell(0, -1, true).is_err());
        assert!(state.activity_at(-1, 0).is_err());
    }

    #[test]
    fn paint_leaves_activity_alone() {
        let state = GridState::create(2, 2)
            .unwrap()
            .paint(0, 0, true)
            .unwrap()
            .paint(0, 0, false)
            .unwrap()
            .paint(1, 1, true)
            .unwrap();
        assert_eq!(state.population(), 1);
        assert_eq!(state.activity().total(), 0);
    }

    #[test]
    fn is_blank_is_stable_without_mutation() {
        let state = GridState::create(5, 5).unwrap().paint(2, 2, true).unwrap();
        assert_eq!(state.is_blank(), state.is_blank());
        assert!(!state.is_blank());
    }

    #[test]
    fn from_parts_requires_matching_shapes() {
        let cells = Grid::new(2, 3).unwrap();
        let activity = ActivityCounts::new(3, 2).unwrap();
        assert_eq!(
            GridState::from_parts(cells, activity),
            Err(EngineError::ShapeMismatch {
                grid: (2, 3),
                activity: (3, 2)
            })
        );
    }
}
