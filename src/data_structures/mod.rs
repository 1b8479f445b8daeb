pub mod fill;
pub mod hash_map_spmat;
pub mod index;
pub mod proxy;
pub mod window;

use std::hash::Hash;

use crate::data_structures::{
    fill::FillValue,
    hash_map_spmat::{Iter, SparseMatrix},
};

/// Read-only view of a sparse 2-D container.
pub trait SparseView<Elem, Idx> {
    type Iter: Iterator<Item = (Idx, Idx, Elem)>;

    /// Value of every cell not reported by `iter`.
    fn fill(&self) -> Elem;
    fn get(&self, x: Idx, y: Idx) -> Elem;
    /// Number of occupied cells.
    fn size(&self) -> usize;

    fn iter(&self) -> Self::Iter;
}

impl<'a, Elem, F, Idx> SparseView<Elem, Idx> for &'a SparseMatrix<Elem, F, Idx>
where
    Elem: Copy + PartialEq,
    F: FillValue<Elem>,
    Idx: Copy + Eq + Hash,
{
    type Iter = Iter<'a, Elem, Idx>;

    fn fill(&self) -> Elem {
        SparseMatrix::<Elem, F, Idx>::fill()
    }

    fn get(&self, x: Idx, y: Idx) -> Elem {
        SparseMatrix::get(*self, x, y)
    }

    fn size(&self) -> usize {
        SparseMatrix::size(*self)
    }

    fn iter(&self) -> Self::Iter {
        SparseMatrix::iter(*self)
    }
}
