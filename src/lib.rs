//! Sparse two-dimensional matrices over an unbounded integer grid.
//!
//! Every cell of a [`SparseMatrix`] holds a compile-time fill value until it
//! is written with something else, and only those occupied cells take up
//! memory.
//!
//! ```
//! use sparse_grid::{Fill, SparseMatrix};
//!
//! let mut m = SparseMatrix::<i32, Fill<-1>>::new();
//! m.row_mut(100).cell(-3).set(7);
//! assert_eq!(7, m.row(100).cell(-3).value());
//! assert_eq!(-1, m.get(0, 0));
//!
//! m.row_mut(100).cell(-3).set(-1);
//! assert_eq!(0, m.size());
//! ```

pub mod data_structures;
pub mod error;

pub use data_structures::{
    fill::{Fill, FillValue, TypeDefault},
    hash_map_spmat::{Iter, SparseMatrix},
    index::GridIndex,
    proxy::{Cell, CellMut, Row, RowMut},
    SparseView,
};
pub use error::{Axis, Error, Result};
