//! Conversion between sparse matrices and dense `ndarray` windows.

use std::{mem::size_of, ops::RangeInclusive};

use log::debug;
use ndarray::Array2;

use crate::{
    data_structures::{fill::FillValue, hash_map_spmat::SparseMatrix, index::GridIndex},
    error::{Axis, Error, Result},
};

fn window_len<Idx: GridIndex>(range: &RangeInclusive<Idx>, axis: Axis) -> Result<usize> {
    let (lo, hi) = (*range.start(), *range.end());
    if lo > hi {
        return Err(Error::InvertedRange {
            axis,
            start: format!("{:?}", lo),
            end: format!("{:?}", hi),
        });
    }
    Idx::span(lo, hi).ok_or(Error::WindowTooLarge { axis })
}

/// Cell count of a `rows` x `cols` window, rejecting windows whose array
/// would exceed `isize::MAX` bytes or elements.
fn window_cells<T>(rows: usize, cols: usize) -> Result<usize> {
    let too_many = Error::WindowTooManyCells { rows, cols };
    let cells = rows.checked_mul(cols).ok_or_else(|| too_many.clone())?;
    let bytes = cells
        .checked_mul(size_of::<T>().max(1))
        .ok_or_else(|| too_many.clone())?;
    if bytes > isize::MAX as usize {
        return Err(too_many);
    }
    Ok(cells)
}

impl<T, F, Idx> SparseMatrix<T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: GridIndex,
{
    /// Copies the window `xs` × `ys` into a dense array.
    ///
    /// Element `[(i, j)]` of the result holds the cell at
    /// (`xs.start() + i`, `ys.start() + j`); unoccupied cells hold the fill.
    pub fn fragment(&self, xs: RangeInclusive<Idx>, ys: RangeInclusive<Idx>) -> Result<Array2<T>> {
        let rows = window_len(&xs, Axis::X)?;
        let cols = window_len(&ys, Axis::Y)?;
        let cells = window_cells::<T>(rows, cols)?;
        let (x0, y0) = (*xs.start(), *ys.start());

        let mut out = Array2::from_elem((rows, cols), Self::fill());
        if cells > self.size() {
            // Fewer occupied cells than window cells: scan storage instead of
            // probing every coordinate.
            debug!("filling {}x{} window from {} occupied cells", rows, cols, self.size());
            for (x, y, v) in self {
                if !xs.contains(&x) || !ys.contains(&y) {
                    continue;
                }
                if let (Some(i), Some(j)) = (Idx::span(x0, x), Idx::span(y0, y)) {
                    out[(i - 1, j - 1)] = v;
                }
            }
        } else {
            debug!("probing {}x{} window", rows, cols);
            for (i, mut row) in out.rows_mut().into_iter().enumerate() {
                let x = x0
                    .offset(i)
                    .ok_or(Error::WindowTooLarge { axis: Axis::X })?;
                for (j, cell) in row.iter_mut().enumerate() {
                    let y = y0
                        .offset(j)
                        .ok_or(Error::WindowTooLarge { axis: Axis::Y })?;
                    *cell = self.get(x, y);
                }
            }
        }
        Ok(out)
    }

    /// Builds a matrix from a dense block whose element `[(0, 0)]` lands on
    /// `origin`. Cells equal to the fill are not stored.
    pub fn from_dense(origin: (Idx, Idx), block: &Array2<T>) -> Result<Self> {
        let (rows, cols) = block.dim();
        let (x0, y0) = origin;
        let mut m = Self::new();
        for ((i, j), &v) in block.indexed_iter() {
            let x = x0.offset(i).ok_or(Error::CoordinateOverflow {
                axis: Axis::X,
                len: rows,
            })?;
            let y = y0.offset(j).ok_or(Error::CoordinateOverflow {
                axis: Axis::Y,
                len: cols,
            })?;
            m.set(x, y, v);
        }
        debug!(
            "loaded {} occupied cells from a {}x{} block",
            m.size(),
            rows,
            cols
        );
        Ok(m)
    }
}
