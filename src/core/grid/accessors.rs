use super::*;

impl Grid {
    /// Cell state, `None` outside the grid
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.check(row, col).ok().map(|idx| self.cells[idx])
    }

    /// Cell state with everything outside the grid treated as dead
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.check(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip a cell, returning its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self.check(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Kill every cell, keeping dimensions
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Row-major cells for whole-grid fills
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}
