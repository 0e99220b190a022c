//! Grid - rectangular board of live/dead cells
//!
//! Stored row-major in a single `Vec<bool>`:
//!   cells[row * cols + col]
//! instead of `Vec<Vec<bool>>`, so rectangularity is a property of the type
//! rather than something every caller has to re-check.

use std::fmt;

use super::error::GridError;

mod indexing;
mod accessors;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of the given size
    ///
    /// # Panics
    /// When `rows * cols` overflows `usize`. Use [`Grid::try_new`] for sizes that
    /// come from outside the crate.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(grid) => grid,
            Err(err) => panic!("Grid::new: {}", err),
        }
    }

    /// All-dead grid, rejecting dimensions whose cell count overflows
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Build from rows of columns, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();

        let mut cells = Vec::with_capacity(row_count * expected);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows: row_count,
            cols: expected,
            cells,
        })
    }

    /// Build a grid where exactly the listed cells are alive
    pub fn from_cells(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::try_new(rows, cols)?;
        for &(row, col) in alive {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    /// Rebuild with the same dimensions from a row-major cell vector.
    /// Used by the stepper, which always produces exactly `rows * cols` cells.
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Copy back out as rows of columns
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Iterate rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks_exact(0) panics, and a 0-column grid still has `rows` empty rows
        let cols = self.cols;
        (0..self.rows).map(move |row| &self.cells[row * cols..(row + 1) * cols])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}
