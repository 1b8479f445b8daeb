//! Compile-time fill values.
//!
//! A sparse matrix reports its fill value for every cell that has never been
//! written (or was last written with the fill value itself). The fill is part
//! of the matrix type, carried by a zero-sized marker implementing
//! [`FillValue`].

/// Supplies the fill value of type `T` for a sparse matrix.
pub trait FillValue<T> {
    fn fill() -> T;
}

/// Fill with `T::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeDefault;

impl<T: Default> FillValue<T> for TypeDefault {
    #[inline]
    fn fill() -> T {
        T::default()
    }
}

/// Fill with the integer constant `V`.
///
/// Implemented for every primitive integer type, so
/// `SparseMatrix<i32, Fill<-1>>` reads `-1` from untouched cells. A `V` that
/// the element type cannot represent is rejected at compile time:
///
/// ```compile_fail
/// use sparse_grid::{Fill, SparseMatrix};
///
/// let m = SparseMatrix::<u8, Fill<256>>::new();
/// assert_eq!(0, m.get(0, 0));
/// ```
///
/// ```compile_fail
/// use sparse_grid::{Fill, SparseMatrix};
///
/// let m = SparseMatrix::<u64, Fill<-1>>::new();
/// assert_eq!(u64::MAX, m.get(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fill<const V: i64>;

/// `V` converted to `T`, evaluated once per instantiation.
trait IntFill<T> {
    const VALUE: T;
}

macro_rules! impl_int_fill {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const V: i64> IntFill<$t> for Fill<V> {
                const VALUE: $t = {
                    assert!(
                        V as i128 >= <$t>::MIN as i128 && V as i128 <= <$t>::MAX as i128,
                        "fill constant out of range for the element type"
                    );
                    V as $t
                };
            }

            impl<const V: i64> FillValue<$t> for Fill<V> {
                #[inline]
                fn fill() -> $t {
                    <Self as IntFill<$t>>::VALUE
                }
            }
        )*
    };
}

impl_int_fill!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Declares a named fill marker for values a const generic cannot carry.
///
/// # Examples
///
/// ```
/// use sparse_grid::{fill_value, SparseMatrix};
///
/// fill_value!(pub Sentinel: f32 = f32::MAX);
///
/// let m = SparseMatrix::<f32, Sentinel>::new();
/// assert_eq!(f32::MAX, m.get(3, -7));
/// ```
#[macro_export]
macro_rules! fill_value {
    ($vis:vis $name:ident : $t:ty = $value:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::FillValue<$t> for $name {
            #[inline]
            fn fill() -> $t {
                $value
            }
        }
    };
}
