use std::{
    collections::{hash_map, HashMap},
    fmt::{self, Display},
    hash::Hash,
    iter::{FromIterator, FusedIterator},
    marker::PhantomData,
};

use log::trace;

use crate::data_structures::{
    fill::{FillValue, TypeDefault},
    proxy::{Row, RowMut},
};

/// An unbounded 2-D grid where every cell holds the fill value `F` unless it
/// was explicitly written with something else.
///
/// Only occupied cells (those differing from the fill) are stored. Writing the
/// fill to a cell removes it, and reading never allocates.
///
/// A `SparseMatrix` is not synchronized; share it across threads behind a
/// lock.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T, F = TypeDefault, Idx = i64> {
    /// `entries[(x, y)]` = value at (`x`, `y`), never equal to the fill
    entries: HashMap<(Idx, Idx), T>,
    fill: PhantomData<F>,
}

impl<T, F, Idx> SparseMatrix<T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fill: PhantomData,
        }
    }

    /// Returns the value of every unoccupied cell.
    #[inline]
    pub fn fill() -> T {
        F::fill()
    }

    /// Returns the value at (`x`, `y`).
    pub fn get(&self, x: Idx, y: Idx) -> T {
        self.entries
            .get(&(x, y))
            .copied()
            .unwrap_or_else(F::fill)
    }

    /// Writes `value` at (`x`, `y`). Writing the fill value vacates the cell.
    pub fn set(&mut self, x: Idx, y: Idx, value: T) {
        self.replace(x, y, value);
    }

    /// Writes `value` at (`x`, `y`) and returns the value it held before.
    pub fn replace(&mut self, x: Idx, y: Idx, value: T) -> T {
        let old = if value == F::fill() {
            let old = self.entries.remove(&(x, y));
            if old.is_some() {
                trace!("vacated cell, {} occupied", self.entries.len());
            }
            old
        } else {
            let old = self.entries.insert((x, y), value);
            if old.is_none() {
                trace!("occupied new cell, {} occupied", self.entries.len());
            }
            old
        };
        old.unwrap_or_else(F::fill)
    }

    /// Returns whether (`x`, `y`) holds something other than the fill.
    pub fn is_occupied(&self, x: Idx, y: Idx) -> bool {
        self.entries.contains_key(&(x, y))
    }

    /// Returns the number of occupied cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resets every cell to the fill.
    pub fn clear(&mut self) {
        trace!("clearing {} occupied cells", self.entries.len());
        self.entries.clear();
    }

    /// Iterates over occupied cells as `(x, y, value)` in storage order.
    ///
    /// The order is unspecified but stable while the matrix is not mutated;
    /// call `iter()` again to restart.
    #[doc(alias = "entries")]
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        Iter {
            iter: self.entries.iter(),
        }
    }

    /// Returns a read-only handle on row `x`.
    #[inline]
    pub fn row(&self, x: Idx) -> Row<'_, T, F, Idx> {
        Row::new(self, x)
    }

    /// Returns a read-write handle on row `x`.
    #[inline]
    pub fn row_mut(&mut self, x: Idx) -> RowMut<'_, T, F, Idx> {
        RowMut::new(self, x)
    }
}

impl<T, F, Idx> Default for SparseMatrix<T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F, Idx> PartialEq for SparseMatrix<T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T, F, Idx> Extend<(Idx, Idx, T)> for SparseMatrix<T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (Idx, Idx, T)>>(&mut self, iter: I) {
        for (x, y, value) in iter {
            self.set(x, y, value);
        }
    }
}

impl<T, F, Idx> FromIterator<(Idx, Idx, T)> for SparseMatrix<T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (Idx, Idx, T)>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl<T, F, Idx> Display for SparseMatrix<T, F, Idx>
where
    T: Copy + PartialEq + Display,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x,y,value")?;
        for (x, y, v) in self {
            writeln!(f, "{},{},{}", x, y, v)?;
        }
        Ok(())
    }
}

impl<'a, T, F, Idx> IntoIterator for &'a SparseMatrix<T, F, Idx>
where
    T: Copy + PartialEq,
    F: FillValue<T>,
    Idx: Copy + Eq + Hash,
{
    type Item = (Idx, Idx, T);
    type IntoIter = Iter<'a, T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the occupied cells of a [`SparseMatrix`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T, Idx> {
    iter: hash_map::Iter<'a, (Idx, Idx), T>,
}

impl<'a, T, Idx> Iterator for Iter<'a, T, Idx>
where
    T: Copy,
    Idx: Copy,
{
    type Item = (Idx, Idx, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(&(x, y), &v)| (x, y, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: Copy, Idx: Copy> ExactSizeIterator for Iter<'a, T, Idx> {}

impl<'a, T: Copy, Idx: Copy> FusedIterator for Iter<'a, T, Idx> {}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use proptest::prelude::*;

    use super::*;
    use crate::data_structures::fill::Fill;

    type IntMatrix = SparseMatrix<i32, Fill<-1>>;

    fn sorted_cells<T: Copy + PartialEq, F: FillValue<T>>(
        m: &SparseMatrix<T, F>,
    ) -> Vec<(i64, i64, T)> {
        let mut cells: Vec<_> = m.iter().collect();
        cells.sort_by_key(|&(x, y, _)| (x, y));
        cells
    }

    #[test]
    fn test_empty() {
        let m = IntMatrix::new();
        assert_eq!(0, m.size());
        assert!(m.is_empty());
        assert_eq!(-1, m.get(0, 0));
        assert_eq!(-1, m.get(i64::MIN, i64::MAX));
        assert_eq!(None, m.iter().next());
    }

    #[test]
    fn test_diagonals() {
        let mut m = IntMatrix::new();
        for i in 0..10 {
            m.set(i, i, i as i32);
        }
        for i in 0..10 {
            m.set(i, 9 - i, (9 - i) as i32);
        }
        assert_eq!(20, m.size());
        assert_eq!(1, m.get(1, 1));
        assert_eq!(8, m.get(1, 8));
        assert_eq!(4, m.get(4, 4));
        assert_eq!(9, m.get(0, 9));
        assert_eq!(-1, m.get(1, 2));
        assert_eq!(20, m.iter().count());
    }

    #[test]
    fn test_fill_write_on_empty() {
        let mut m = SparseMatrix::<i32>::new();
        m.set(3, 3, 0);
        assert_eq!(0, m.size());
        assert_eq!(0, m.get(3, 3));
    }

    #[test]
    fn test_fill_write_vacates() {
        let mut m = SparseMatrix::<i32>::new();
        m.set(3, 3, 5);
        assert_eq!(1, m.size());
        m.set(3, 3, 0);
        assert_eq!(0, m.size());
        assert_eq!(0, m.get(3, 3));
        assert!(!m.is_occupied(3, 3));
    }

    #[test]
    fn test_replace() {
        let mut m = IntMatrix::new();
        assert_eq!(-1, m.replace(2, 5, 7));
        assert_eq!(7, m.replace(2, 5, 8));
        assert_eq!(8, m.replace(2, 5, -1));
        assert_eq!(-1, m.replace(2, 5, -1));
        assert!(m.is_empty());
    }

    #[test]
    fn test_coordinates_are_ordered() {
        let mut m = IntMatrix::new();
        m.set(1, 2, 12);
        assert_eq!(12, m.get(1, 2));
        assert_eq!(-1, m.get(2, 1));
    }

    #[test]
    fn test_clear() {
        let mut m = IntMatrix::new();
        m.set(0, 0, 1);
        m.set(-5, 5, 2);
        m.clear();
        assert!(m.is_empty());
        assert_eq!(-1, m.get(-5, 5));
    }

    #[test]
    fn test_from_iter_elides_fill() {
        let m: IntMatrix = vec![(0, 0, 3), (1, 1, -1), (2, 2, 4), (0, 0, -1)]
            .into_iter()
            .collect();
        assert_eq!(vec![(2, 2, 4)], sorted_cells(&m));
    }

    #[test]
    fn test_iter_restarts() {
        let mut m = IntMatrix::new();
        m.extend(vec![(4, 1, 1), (-3, 8, 2), (7, 7, 3)]);
        let first: Vec<_> = m.iter().collect();
        let second: Vec<_> = (&m).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(3, m.iter().len());
    }

    #[test]
    fn test_display() {
        let mut m = IntMatrix::new();
        m.set(2, -3, 9);
        assert_eq!("x,y,value\n2,-3,9\n", m.to_string());
    }

    #[test]
    fn test_eq() {
        let mut a = IntMatrix::new();
        let mut b = IntMatrix::new();
        a.set(1, 1, 1);
        b.set(1, 1, 1);
        b.set(2, 2, 2);
        assert_ne!(a, b);
        b.set(2, 2, -1);
        assert_eq!(a, b);
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Get(i64, i64),
        Set(i64, i64, i32),
    }

    fn op() -> impl Strategy<Value = Op> {
        let coord = -8..8_i64;
        prop_oneof![
            (coord.clone(), coord.clone()).prop_map(|(x, y)| Op::Get(x, y)),
            (coord.clone(), coord, -2..3_i32).prop_map(|(x, y, v)| Op::Set(x, y, v)),
        ]
    }

    proptest! {
        /// Checks the matrix against a dense reference model.
        #[test]
        fn test_against_model(ops in prop::collection::vec(op(), 0..200)) {
            let mut m = IntMatrix::new();
            let mut model: BTreeMap<(i64, i64), i32> = BTreeMap::new();
            for step in ops {
                match step {
                    Op::Get(x, y) => {
                        let before = m.size();
                        let expected = model.get(&(x, y)).copied().unwrap_or(-1);
                        prop_assert_eq!(expected, m.get(x, y));
                        prop_assert_eq!(before, m.size());
                    }
                    Op::Set(x, y, v) => {
                        m.set(x, y, v);
                        if v == -1 {
                            model.remove(&(x, y));
                        } else {
                            model.insert((x, y), v);
                        }
                        prop_assert_eq!(v, m.get(x, y));
                    }
                }
                prop_assert_eq!(model.len(), m.size());
            }
            let cells: BTreeSet<_> = m.iter().collect();
            let expected: BTreeSet<_> = model.iter().map(|(&(x, y), &v)| (x, y, v)).collect();
            prop_assert_eq!(expected, cells);
            prop_assert!(m.iter().all(|(_, _, v)| v != -1));
        }

        /// Untouched cells read as the fill anywhere in the index range.
        #[test]
        fn test_fresh_reads_fill(x: i64, y: i64) {
            let m = IntMatrix::new();
            prop_assert_eq!(-1, m.get(x, y));
            prop_assert_eq!(0, m.size());
        }

        /// Any non-fill write reads back.
        #[test]
        fn test_write_read(x: i64, y: i64, v in any::<i32>().prop_filter("fill", |&v| v != -1)) {
            let mut m = IntMatrix::new();
            m.set(x, y, v);
            prop_assert_eq!(v, m.get(x, y));
            prop_assert_eq!(1, m.size());
            m.set(x, y, -1);
            prop_assert_eq!(-1, m.get(x, y));
            prop_assert_eq!(0, m.size());
        }
    }
}
