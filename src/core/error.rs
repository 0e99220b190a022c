use thiserror::Error;

/// Errors raised while building or editing a [`Grid`](super::Grid).
///
/// The stepping functions never produce these; they only show up at
/// construction time and at the JS boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("{rows}x{cols} grid has more cells than fit in memory")]
    TooLarge { rows: usize, cols: usize },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// JS input that isn't an array of arrays; names the offending part
    #[error("{0} is not an array")]
    NotAnArray(String),
}
