use std::{array, slice};

use crate::{approx::ApproxEq, ShapeError, Zero};

mod ops;

/// The dimension-agnostic base of all fixed-size numeric sequences.
///
/// A [`Tuple`] is an ordered sequence of exactly `N` elements of type `T`, stored inline. Its size
/// never changes, and it never allocates.
///
/// Implementors only provide access to their backing array; everything else (construction,
/// element access, iteration, comparison) is written once here, in terms of those four methods.
/// The [`impl_tuple!`][crate::impl_tuple] macro implements this trait for a concrete tuple struct
/// and adds the operator family on top, so that operators on that struct return the struct itself.
///
/// This trait is not meant to be used as a value type on its own. Concrete types such as
/// [`Vector`][crate::Vector] specialize it.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays, including the panic on an
///   out-of-range index.
/// - [`Tuple::get`] and [`Tuple::get_mut`] return [`None`] for an out-of-range index.
/// - [`Tuple::get_unchecked`] and [`Tuple::get_unchecked_mut`] skip the bounds check. Their
///   precondition is only verified in builds with `debug_assertions` enabled.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
pub trait Tuple<const N: usize, T>: Sized {
    /// The number of elements in this tuple type.
    const LEN: usize = N;

    #[doc(hidden)]
    const NON_EMPTY: () = assert!(N > 0, "a tuple must have at least one element");

    /// Creates a tuple from an array of exactly `N` elements.
    fn from_array(elems: [T; N]) -> Self;

    /// Returns a reference to the underlying elements as an array of length `N`.
    fn as_array(&self) -> &[T; N];

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    fn as_mut_array(&mut self) -> &mut [T; N];

    /// Converts this tuple into an `N`-element array.
    fn into_array(self) -> [T; N];

    /// Creates a tuple with each element set to zero.
    ///
    /// This is also what the [`Default`] impl of every [`impl_tuple!`][crate::impl_tuple] type
    /// returns.
    #[inline]
    fn zero() -> Self
    where
        T: Zero,
    {
        Self::from_array([T::ZERO; N])
    }

    /// Creates a tuple with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = Vector::<4>::splat(32.0);
    /// assert_eq!(v.into_array(), [32.0; 4]);
    /// ```
    #[inline]
    fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self::from_array([elem; N])
    }

    /// Creates a tuple from a list of exactly `N` values convertible to `T`.
    ///
    /// The list is an array, so passing the wrong number of values is a compile error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = Vector::<3, f64>::from_elems([1.0f32, 2.0, 3.0]);
    /// assert_eq!(v, [1.0, 2.0, 3.0]);
    ///
    /// let w = Vector::<2, i64>::from_elems([1u8, 2]);
    /// assert_eq!(w, [1, 2]);
    /// ```
    fn from_elems<U>(elems: [U; N]) -> Self
    where
        U: Into<T>,
    {
        Self::from_array(elems.map(Into::into))
    }

    /// Creates a tuple from the first `N` elements produced by `iter`.
    ///
    /// Any elements past the first `N` are left unconsumed.
    ///
    /// # Panics
    ///
    /// Panics if `iter` yields fewer than `N` elements. Use [`Tuple::try_from_prefix`] if the
    /// source length is not known to be sufficient.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let source = vec![12.0; 4];
    /// let v = Vector::<4>::from_prefix(source);
    /// assert_eq!(v, Vector::splat(12.0));
    /// ```
    #[track_caller]
    fn from_prefix<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        match Self::try_from_prefix(iter) {
            Ok(tuple) => tuple,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a tuple from the first `N` elements produced by `iter`, or returns an error if
    /// `iter` runs out early.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = Vector::<3>::try_from_prefix([1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    ///
    /// let err = Vector::<3>::try_from_prefix([1.0]).unwrap_err();
    /// assert_eq!(err, ShapeError::TooFewElements { expected: 3, found: 1 });
    /// ```
    fn try_from_prefix<I>(iter: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let elems: [Option<T>; N] = array::from_fn(|_| iter.next());
        let found = elems.iter().take_while(|elem| elem.is_some()).count();
        if found < N {
            return Err(ShapeError::TooFewElements { expected: N, found });
        }

        Ok(Self::from_array(elems.map(|elem| elem.unwrap())))
    }

    /// Creates a tuple from a slice that must contain exactly `N` elements.
    ///
    /// The [`TryFrom<&[T]>`][TryFrom] impl of [`impl_tuple!`][crate::impl_tuple] types forwards to
    /// this method.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = Vector::<2>::try_from_slice(&[1.0, 2.0]).unwrap();
    /// assert_eq!(v, vec2(1.0, 2.0));
    ///
    /// let err = Vector::<2>::try_from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
    /// assert_eq!(err, ShapeError::LengthMismatch { expected: 2, found: 3 });
    /// ```
    fn try_from_slice(elems: &[T]) -> Result<Self, ShapeError>
    where
        T: Copy,
    {
        let elems: &[T; N] = elems.try_into().map_err(|_| ShapeError::LengthMismatch {
            expected: N,
            found: elems.len(),
        })?;
        Ok(Self::from_array(*elems))
    }

    /// Overwrites every element of `self` with the values from `elems`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let mut v = vec4(1.0, 2.0, 3.0, 4.0);
    /// v.assign([2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(v, vec4(2.0, 3.0, 4.0, 5.0));
    /// ```
    fn assign(&mut self, elems: [T; N]) {
        *self.as_mut_array() = elems;
    }

    /// Returns the number of elements, `N`.
    #[inline]
    fn size(&self) -> usize {
        N
    }

    /// Returns a reference to the element at `index`, or [`None`] if `index >= N`.
    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_array().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if `index >= N`.
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_array().get_mut(index)
    }

    /// Returns a reference to the element at `index`, without checking that it is in range.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. This is asserted when `debug_assertions` are enabled.
    #[inline]
    #[track_caller]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "index {index} out of range for tuple of size {N}");
        unsafe { self.as_array().get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index`, without checking that it is in
    /// range.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. This is asserted when `debug_assertions` are enabled.
    #[inline]
    #[track_caller]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "index {index} out of range for tuple of size {N}");
        unsafe { self.as_mut_array().get_unchecked_mut(index) }
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    fn as_slice(&self) -> &[T] {
        self.as_array()
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.as_mut_array()
    }

    /// Returns an iterator over references to the elements, in index order.
    ///
    /// The iterator is double-ended, so `.rev()` traverses the elements back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    #[inline]
    fn iter(&self) -> slice::Iter<'_, T> {
        self.as_array().iter()
    }

    /// Returns an iterator over mutable references to the elements, in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.iter_mut().for_each(|elem| *elem *= 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    #[inline]
    fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_array().iter_mut()
    }

    /// Applies a closure to each element, returning a new tuple of the same type.
    fn map_elems<F>(self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self::from_array(self.into_array().map(f))
    }

    /// Combines the elements of `self` and `other` pairwise, returning a new tuple of the same
    /// type.
    ///
    /// This is what the element-wise operators are built on.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = vec3(1, 5, 3).zip_with(vec3(4, 2, 6), i32::max);
    /// assert_eq!(v, vec3(4, 5, 6));
    /// ```
    fn zip_with<F>(self, other: Self, mut f: F) -> Self
    where
        T: Copy,
        F: FnMut(T, T) -> T,
    {
        let (lhs, rhs) = (self.into_array(), other.into_array());
        Self::from_array(array::from_fn(|i| f(lhs[i], rhs[i])))
    }

    /// Compares `self` and `other` element-wise, using `epsilon` instead of the element type's
    /// default tolerance.
    ///
    /// `==` is equivalent to calling this with
    /// [`DEFAULT_ABS_TOLERANCE`][crate::DefaultTolerances::DEFAULT_ABS_TOLERANCE].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let a = vec2(1.0, 2.0);
    /// let b = vec2(1.001, 2.0);
    /// assert_ne!(a, b);
    /// assert!(a.approx_eq_with(&b, 0.01));
    /// ```
    fn approx_eq_with(&self, other: &Self, epsilon: T::Tolerance) -> bool
    where
        T: ApproxEq,
    {
        self.as_array().abs_diff_eq(other.as_array(), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, vec4, ShapeError, Vec3, Vector};

    use super::*;

    #[test]
    fn default_is_zero() {
        let v: Vector<4> = Vector::default();
        assert_eq!(v.into_array(), [0.0; 4]);
        let v = Vector::<3, i32>::zero();
        assert_eq!(v.into_array(), [0; 3]);
    }

    #[test]
    fn element_list() {
        let v = Vector::<3, f64>::from_elems([1.0, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);

        let v: Vector<3, f64> = [4.0, 5.0, 6.0].into();
        assert_eq!(v.into_array(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn fill() {
        let v = Vector::<4, f64>::splat(32.0);
        for elem in v.iter() {
            assert_eq!(*elem, 32.0);
        }
        assert_eq!(v.size(), 4);
        assert_eq!(Vector::<4, f64>::LEN, 4);
    }

    #[test]
    fn from_prefix() {
        let source = vec![12.0f32; 4];
        let v = Vector::<4>::from_prefix(source.iter().copied());
        assert_eq!(v.into_array(), [12.0; 4]);

        let mut longer = (0..10).map(|i| i as f32);
        let v = Vector::<3>::from_prefix(&mut longer);
        assert_eq!(v, vec3(0.0, 1.0, 2.0));
        assert_eq!(longer.next(), Some(3.0));
    }

    #[test]
    #[should_panic(expected = "expected at least 4 elements, got 2")]
    fn from_prefix_too_short() {
        Vector::<4>::from_prefix([1.0, 2.0]);
    }

    #[test]
    fn try_constructors() {
        assert_eq!(
            Vector::<3>::try_from_prefix(std::iter::empty()),
            Err(ShapeError::TooFewElements {
                expected: 3,
                found: 0
            })
        );
        assert_eq!(
            Vector::<3>::try_from_slice(&[1.0, 2.0]),
            Err(ShapeError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
        let v = Vector::<3>::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn assign() {
        let mut v = vec4(1.0, 2.0, 3.0, 4.0);
        v.assign([2.0, 3.0, 4.0, 5.0]);
        assert_eq!(v[0], 2.0);
        assert_eq!(v[1], 3.0);
        assert_eq!(v[2], 4.0);
        assert_eq!(v[3], 5.0);
    }

    #[test]
    fn access() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v.get(2), Some(&3));
        assert_eq!(v.get(3), None);
        *v.get_mut(0).unwrap() = 7;
        v[1] = 8;
        assert_eq!(v, vec3(7, 8, 3));
        unsafe {
            assert_eq!(*v.get_unchecked(1), 8);
            *v.get_unchecked_mut(2) = 9;
        }
        assert_eq!(v.as_slice(), &[7, 8, 9]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = vec3(1, 2, 3);
        let i = v.size();
        let _elem = v[i];
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "index 3 out of range for tuple of size 3")]
    fn unchecked_access_is_checked_in_debug() {
        let v = vec3(1, 2, 3);
        let _ = unsafe { v.get_unchecked(3) };
    }

    #[test]
    fn iteration() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
        // a fresh traversal starts over
        assert_eq!(v.iter().next(), Some(&1));

        for elem in &mut v {
            *elem += 1;
        }
        let mut sum = 0;
        for elem in &v {
            sum += elem;
        }
        assert_eq!(sum, 14);
        assert_eq!(v.into_iter().rev().collect::<Vec<_>>(), [5, 4, 3, 2]);
    }

    #[test]
    fn zip_and_map() {
        let v: Vec3<i32> = vec3(1, 2, 3).map_elems(|e| e * e);
        assert_eq!(v, vec3(1, 4, 9));
        let v = v.zip_with(vec3(1, 1, 1), |a, b| a - b);
        assert_eq!(v, vec3(0, 3, 8));
    }
}
