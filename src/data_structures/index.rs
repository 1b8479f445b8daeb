use std::{fmt::Debug, hash::Hash};

/// Coordinate type that supports the arithmetic dense windows need.
///
/// Plain cell access only requires `Copy + Eq + Hash`; this trait is needed
/// for [`fragment`](crate::SparseMatrix::fragment) and
/// [`from_dense`](crate::SparseMatrix::from_dense).
pub trait GridIndex: Copy + Eq + Hash + Ord + Debug {
    /// Number of coordinates in `lo..=hi`, or `None` if `lo > hi` or the
    /// count does not fit in a `usize`.
    fn span(lo: Self, hi: Self) -> Option<usize>;

    /// `self + by`, or `None` on overflow.
    fn offset(self, by: usize) -> Option<Self>;
}

macro_rules! impl_grid_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl GridIndex for $t {
                #[inline]
                fn span(lo: Self, hi: Self) -> Option<usize> {
                    if lo > hi {
                        return None;
                    }
                    let diff = hi as i128 - lo as i128;
                    usize::try_from(diff).ok()?.checked_add(1)
                }

                #[inline]
                fn offset(self, by: usize) -> Option<Self> {
                    let by = i128::try_from(by).ok()?;
                    <$t>::try_from(self as i128 + by).ok()
                }
            }
        )*
    };
}

impl_grid_index!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
