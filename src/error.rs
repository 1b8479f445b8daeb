//! Error types for sparse_grid

use thiserror::Error;

/// Result type alias using sparse_grid's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Which coordinate of a window an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors raised by the dense window operations.
///
/// Cell access itself never fails; every coordinate in range of the index
/// type is valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Window range whose start lies after its end
    #[error("Inverted {axis} range: start {start} is after end {end}")]
    InvertedRange {
        /// Offending axis
        axis: Axis,
        /// Range start, formatted
        start: String,
        /// Range end, formatted
        end: String,
    },

    /// Window with more coordinates along one axis than can be addressed
    #[error("Window along {axis} is too large to materialize")]
    WindowTooLarge {
        /// Offending axis
        axis: Axis,
    },

    /// Window whose total cell count or byte size cannot be allocated
    #[error("Window of {rows}x{cols} cells is too large to materialize")]
    WindowTooManyCells {
        /// Cells along x
        rows: usize,
        /// Cells along y
        cols: usize,
    },

    /// Dense block does not fit in the index type at the requested origin
    #[error("Placing {len} cells along {axis} overflows the index type")]
    CoordinateOverflow {
        /// Offending axis
        axis: Axis,
        /// Length of the block along that axis
        len: usize,
    },
}
