//! Row and cell handles for `m.row(x).cell(y)` style access.
//!
//! A handle only records coordinates. Storage is touched when a cell handle
//! is read or written, at which point it forwards to
//! [`SparseMatrix::get`] or [`SparseMatrix::set`].

use std::{
    fmt::{self, Display},
    hash::Hash,
};

use crate::data_structures::{fill::FillValue, hash_map_spmat::SparseMatrix};

/// Read-only handle on one row of a [`SparseMatrix`].
#[derive(Debug)]
pub struct Row<'a, T, F, Idx> {
    matrix: &'a SparseMatrix<T, F, Idx>,
    x: Idx,
}

// Manual impls; a derive would also bound `T` and `F`.
impl<'a, T, F, Idx: Copy> Clone for Row<'a, T, F, Idx> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, F, Idx: Copy> Copy for Row<'a, T, F, Idx> {}

impl<'a, T, F, Idx> Row<'a, T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    pub(crate) fn new(matrix: &'a SparseMatrix<T, F, Idx>, x: Idx) -> Self {
        Self { matrix, x }
    }

    /// Returns the row coordinate.
    pub fn x(&self) -> Idx {
        self.x
    }

    /// Returns a read-only handle on cell (`x`, `y`).
    ///
    /// There is no way to write through it:
    ///
    /// ```compile_fail
    /// use sparse_grid::SparseMatrix;
    ///
    /// let m = SparseMatrix::<i32>::new();
    /// m.row(0).cell(0).set(1);
    /// ```
    pub fn cell(&self, y: Idx) -> Cell<'a, T, F, Idx> {
        Cell {
            matrix: self.matrix,
            x: self.x,
            y,
        }
    }

    /// Returns the value at (`x`, `y`).
    pub fn get(&self, y: Idx) -> T {
        self.matrix.get(self.x, y)
    }
}

/// Read-only handle on one cell of a [`SparseMatrix`].
#[derive(Debug)]
pub struct Cell<'a, T, F, Idx> {
    matrix: &'a SparseMatrix<T, F, Idx>,
    x: Idx,
    y: Idx,
}

impl<'a, T, F, Idx: Copy> Clone for Cell<'a, T, F, Idx> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, F, Idx: Copy> Copy for Cell<'a, T, F, Idx> {}

impl<'a, T, F, Idx> Cell<'a, T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    /// Returns the coordinates of the cell.
    pub fn coords(&self) -> (Idx, Idx) {
        (self.x, self.y)
    }

    /// Reads the cell.
    pub fn value(&self) -> T {
        self.matrix.get(self.x, self.y)
    }
}

impl<'a, T, F, Idx> Display for Cell<'a, T, F, Idx>
where
    T: Copy + PartialEq + Display,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}

/// Read-write handle on one row of a [`SparseMatrix`].
#[derive(Debug)]
pub struct RowMut<'a, T, F, Idx> {
    matrix: &'a mut SparseMatrix<T, F, Idx>,
    x: Idx,
}

impl<'a, T, F, Idx> RowMut<'a, T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    pub(crate) fn new(matrix: &'a mut SparseMatrix<T, F, Idx>, x: Idx) -> Self {
        Self { matrix, x }
    }

    /// Returns the row coordinate.
    pub fn x(&self) -> Idx {
        self.x
    }

    /// Returns a read-write handle on cell (`x`, `y`).
    pub fn cell(&mut self, y: Idx) -> CellMut<'_, T, F, Idx> {
        CellMut {
            matrix: &mut *self.matrix,
            x: self.x,
            y,
        }
    }

    /// Consumes the row handle, returning a cell handle with the full borrow.
    pub fn into_cell(self, y: Idx) -> CellMut<'a, T, F, Idx> {
        CellMut {
            matrix: self.matrix,
            x: self.x,
            y,
        }
    }

    /// Returns the value at (`x`, `y`).
    pub fn get(&self, y: Idx) -> T {
        self.matrix.get(self.x, y)
    }

    /// Writes `value` at (`x`, `y`).
    pub fn set(&mut self, y: Idx, value: T) {
        self.matrix.set(self.x, y, value);
    }
}

/// Read-write handle on one cell of a [`SparseMatrix`].
#[derive(Debug)]
pub struct CellMut<'a, T, F, Idx> {
    matrix: &'a mut SparseMatrix<T, F, Idx>,
    x: Idx,
    y: Idx,
}

impl<'a, T, F, Idx> CellMut<'a, T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    /// Returns the coordinates of the cell.
    pub fn coords(&self) -> (Idx, Idx) {
        (self.x, self.y)
    }

    /// Reads the cell.
    pub fn value(&self) -> T {
        self.matrix.get(self.x, self.y)
    }

    /// Writes the cell. Writing the fill value vacates it.
    pub fn set(&mut self, value: T) -> &mut Self {
        self.matrix.set(self.x, self.y, value);
        self
    }

    /// Writes the cell and returns the value it held before.
    pub fn replace(&mut self, value: T) -> T {
        self.matrix.replace(self.x, self.y, value)
    }
}

impl<'a, T, F, Idx> PartialEq<T> for CellMut<'a, T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    fn eq(&self, other: &T) -> bool {
        self.value() == *other
    }
}

impl<'a, T, F, Idx> Display for CellMut<'a, T, F, Idx>
where
    T: Copy + PartialEq + Display,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}
