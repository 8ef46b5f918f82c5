//! The [`impl_tuple!`] macro, which implements [`Tuple`][crate::Tuple] and the `std::ops` family.

/// Implements [`Tuple`][crate::Tuple] and the tuple operators for a concrete tuple struct.
///
/// The struct must be a tuple struct of the shape `Name<const N: usize, T>([T; N])`. The macro
/// generates:
///
/// - the [`Tuple`][crate::Tuple] impl,
/// - [`Index`]/[`IndexMut`] for positional access,
/// - epsilon-tolerant [`PartialEq`] against itself and against `[T; N]`, and
///   [`ApproxEq`][crate::ApproxEq],
/// - element-wise `+`, `+=`, `-`, `-=` between two values of the same type,
/// - scalar `*`, `*=`, `/`, `/=` with `T`, and unary `-`,
/// - [`Default`] (all zeroes), [`From`] conversions to and from `[T; N]`, and [`TryFrom<&[T]>`],
/// - [`IntoIterator`] for the value, shared reference, and mutable reference,
/// - [`Debug`][std::fmt::Debug] and [`Display`][std::fmt::Display], both formatting as `(a, b, c)`.
///
/// Every operator takes and returns the concrete struct, so a type built this way never hands out
/// some other tuple type. Operands of different dimension or element type don't typecheck.
///
/// # Examples
///
/// A point type that shares all of its arithmetic with [`Vector`][crate::Vector], but is a
/// distinct type:
///
/// ```
/// use fixvec::*;
///
/// #[derive(Clone, Copy)]
/// struct Point<const N: usize, T = f32>([T; N]);
///
/// fixvec::impl_tuple!(Point);
///
/// let p = Point::from_array([1.0, 2.0]) + Point::splat(1.0);
/// assert_eq!(p, Point([2.0, 3.0]));
/// assert_eq!(-p * 2.0, [-4.0, -6.0]);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[macro_export]
macro_rules! impl_tuple {
    ($ty:ident) => {
        impl<const N: usize, T> $crate::Tuple<N, T> for $ty<N, T> {
            #[inline]
            fn from_array(elems: [T; N]) -> Self {
                #[allow(clippy::let_unit_value)]
                let () = <Self as $crate::Tuple<N, T>>::NON_EMPTY;
                Self(elems)
            }

            #[inline]
            fn as_array(&self) -> &[T; N] {
                &self.0
            }

            #[inline]
            fn as_mut_array(&mut self) -> &mut [T; N] {
                &mut self.0
            }

            #[inline]
            fn into_array(self) -> [T; N] {
                self.0
            }
        }

        impl<const N: usize, T> ::core::ops::Index<usize> for $ty<N, T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &<Self as $crate::Tuple<N, T>>::as_array(self)[index]
            }
        }

        impl<const N: usize, T> ::core::ops::IndexMut<usize> for $ty<N, T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut <Self as $crate::Tuple<N, T>>::as_mut_array(self)[index]
            }
        }

        /// Epsilon-tolerant equality.
        impl<const N: usize, T> ::core::cmp::PartialEq for $ty<N, T>
        where
            T: $crate::ApproxEq,
        {
            fn eq(&self, other: &Self) -> bool {
                $crate::approx_eq(
                    <Self as $crate::Tuple<N, T>>::as_array(self),
                    <Self as $crate::Tuple<N, T>>::as_array(other),
                )
            }
        }

        /// Epsilon-tolerant equality.
        impl<const N: usize, T> ::core::cmp::PartialEq<[T; N]> for $ty<N, T>
        where
            T: $crate::ApproxEq,
        {
            fn eq(&self, other: &[T; N]) -> bool {
                $crate::approx_eq(<Self as $crate::Tuple<N, T>>::as_array(self), other)
            }
        }

        /// Epsilon-tolerant equality.
        impl<const N: usize, T> ::core::cmp::PartialEq<$ty<N, T>> for [T; N]
        where
            T: $crate::ApproxEq,
        {
            fn eq(&self, other: &$ty<N, T>) -> bool {
                $crate::approx_eq(self, <$ty<N, T> as $crate::Tuple<N, T>>::as_array(other))
            }
        }

        impl<const N: usize, T> $crate::ApproxEq for $ty<N, T>
        where
            T: $crate::ApproxEq,
        {
            type Tolerance = T::Tolerance;

            fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
                <Self as $crate::Tuple<N, T>>::approx_eq_with(self, other, abs_tolerance)
            }
        }

        /// Element-wise negation.
        impl<const N: usize, T> ::core::ops::Neg for $ty<N, T>
        where
            T: ::core::ops::Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                <Self as $crate::Tuple<N, T>>::map_elems(self, |elem| -elem)
            }
        }

        /// Element-wise addition.
        impl<const N: usize, T> ::core::ops::Add for $ty<N, T>
        where
            T: ::core::ops::Add<Output = T> + Copy,
        {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                <Self as $crate::Tuple<N, T>>::zip_with(self, rhs, |l, r| l + r)
            }
        }

        /// Element-wise addition.
        impl<const N: usize, T> ::core::ops::AddAssign for $ty<N, T>
        where
            T: ::core::ops::AddAssign,
        {
            fn add_assign(&mut self, rhs: Self) {
                <Self as $crate::Tuple<N, T>>::as_mut_array(self)
                    .iter_mut()
                    .zip(<Self as $crate::Tuple<N, T>>::into_array(rhs))
                    .for_each(|(lhs, rhs)| *lhs += rhs);
            }
        }

        /// Element-wise subtraction.
        impl<const N: usize, T> ::core::ops::Sub for $ty<N, T>
        where
            T: ::core::ops::Sub<Output = T> + Copy,
        {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                <Self as $crate::Tuple<N, T>>::zip_with(self, rhs, |l, r| l - r)
            }
        }

        /// Element-wise subtraction.
        impl<const N: usize, T> ::core::ops::SubAssign for $ty<N, T>
        where
            T: ::core::ops::SubAssign,
        {
            fn sub_assign(&mut self, rhs: Self) {
                <Self as $crate::Tuple<N, T>>::as_mut_array(self)
                    .iter_mut()
                    .zip(<Self as $crate::Tuple<N, T>>::into_array(rhs))
                    .for_each(|(lhs, rhs)| *lhs -= rhs);
            }
        }

        /// Scalar multiplication (scaling).
        impl<const N: usize, T> ::core::ops::Mul<T> for $ty<N, T>
        where
            T: ::core::ops::Mul<Output = T> + Copy,
        {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                <Self as $crate::Tuple<N, T>>::map_elems(self, |elem| elem * rhs)
            }
        }

        /// Scalar multiplication (scaling).
        impl<const N: usize, T> ::core::ops::MulAssign<T> for $ty<N, T>
        where
            T: ::core::ops::MulAssign + Copy,
        {
            fn mul_assign(&mut self, rhs: T) {
                <Self as $crate::Tuple<N, T>>::as_mut_array(self)
                    .iter_mut()
                    .for_each(|lhs| *lhs *= rhs);
            }
        }

        /// Scalar division (scaling).
        impl<const N: usize, T> ::core::ops::Div<T> for $ty<N, T>
        where
            T: ::core::ops::Div<Output = T> + Copy,
        {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                <Self as $crate::Tuple<N, T>>::map_elems(self, |elem| elem / rhs)
            }
        }

        /// Scalar division (scaling).
        impl<const N: usize, T> ::core::ops::DivAssign<T> for $ty<N, T>
        where
            T: ::core::ops::DivAssign + Copy,
        {
            fn div_assign(&mut self, rhs: T) {
                <Self as $crate::Tuple<N, T>>::as_mut_array(self)
                    .iter_mut()
                    .for_each(|lhs| *lhs /= rhs);
            }
        }

        impl<const N: usize, T> ::core::default::Default for $ty<N, T>
        where
            T: $crate::Zero,
        {
            #[inline]
            fn default() -> Self {
                <Self as $crate::Tuple<N, T>>::zero()
            }
        }

        impl<const N: usize, T> ::core::convert::From<[T; N]> for $ty<N, T> {
            #[inline]
            fn from(value: [T; N]) -> Self {
                <Self as $crate::Tuple<N, T>>::from_array(value)
            }
        }

        impl<const N: usize, T> ::core::convert::From<$ty<N, T>> for [T; N] {
            #[inline]
            fn from(value: $ty<N, T>) -> Self {
                <$ty<N, T> as $crate::Tuple<N, T>>::into_array(value)
            }
        }

        impl<'a, const N: usize, T> ::core::convert::TryFrom<&'a [T]> for $ty<N, T>
        where
            T: Copy,
        {
            type Error = $crate::ShapeError;

            fn try_from(value: &'a [T]) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::Tuple<N, T>>::try_from_slice(value)
            }
        }

        impl<const N: usize, T> ::core::iter::IntoIterator for $ty<N, T> {
            type Item = T;
            type IntoIter = ::core::array::IntoIter<T, N>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                <Self as $crate::Tuple<N, T>>::into_array(self).into_iter()
            }
        }

        impl<'a, const N: usize, T> ::core::iter::IntoIterator for &'a $ty<N, T> {
            type Item = &'a T;
            type IntoIter = ::core::slice::Iter<'a, T>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                <$ty<N, T> as $crate::Tuple<N, T>>::iter(self)
            }
        }

        impl<'a, const N: usize, T> ::core::iter::IntoIterator for &'a mut $ty<N, T> {
            type Item = &'a mut T;
            type IntoIter = ::core::slice::IterMut<'a, T>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                <$ty<N, T> as $crate::Tuple<N, T>>::iter_mut(self)
            }
        }

        impl<const N: usize, T> ::core::fmt::Debug for $ty<N, T>
        where
            T: ::core::fmt::Debug,
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let mut tup = f.debug_tuple("");
                for elem in <Self as $crate::Tuple<N, T>>::iter(self) {
                    tup.field(elem);
                }
                tup.finish()
            }
        }

        impl<const N: usize, T> ::core::fmt::Display for $ty<N, T>
        where
            T: ::core::fmt::Display,
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str("(")?;
                for (i, elem) in <Self as $crate::Tuple<N, T>>::iter(self).enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    ::core::fmt::Display::fmt(elem, f)?;
                }
                f.write_str(")")
            }
        }
    };
}

// NB: operations are deliberately not as generic as they could be (eg. using `T: Add<U>`). Both
// operands always have the same element type, and the result is always the operand type.

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec4, Tuple, Vec4f, Vector};

    #[test]
    fn add() {
        let v1 = vec4(1.0, 2.0, 3.0, 4.0);
        let v2 = vec4(1.0, 2.0, 3.0, 4.0);
        let v3 = vec4(2.0, 4.0, 6.0, 8.0);
        assert_eq!(v1 + v2, v3);

        let mut v = v1;
        v += v2;
        assert_eq!(v, v3);
    }

    #[test]
    fn sub() {
        let v1 = vec4(1.0, 2.0, 3.0, 4.0);
        let v2 = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v1 - v2, Vec4f::ZERO);

        let mut v = v1;
        v -= v2;
        assert_eq!(v, [0.0; 4]);
    }

    #[test]
    fn mul() {
        let v1 = vec4(1.0, 2.0, 3.0, 4.0);
        let v2 = vec4(2.0, 4.0, 6.0, 8.0);
        assert_eq!(v1 * 2.0, v2);

        let mut v = v1;
        v *= 2.0;
        assert_eq!(v, v2);
    }

    #[test]
    fn div() {
        let v1 = vec4(1.0, 2.0, 3.0, 4.0);
        let v2 = vec4(2.0, 4.0, 6.0, 8.0);
        assert_eq!(v2 / 2.0, v1);

        let mut v = v2;
        v /= 2.0;
        assert_eq!(v, v1);
    }

    #[test]
    fn neg() {
        let v1 = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(-v1, vec4(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(-vec4(1, -2, 3, -4), vec4(-1, 2, -3, 4));
    }

    #[test]
    fn integer_ops() {
        let v = vec4(1u32, 2, 3, 4);
        assert_eq!(v + v, vec4(2, 4, 6, 8));
        assert_eq!(v * 3, vec4(3, 6, 9, 12));
        assert_eq!(v / 2, vec4(0, 1, 1, 2));
    }

    #[test]
    fn epsilon_equality() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.000001));
        assert_ne!(v, vec4(1.0, 2.0, 3.0, 4.0001));
        assert_ne!(v, vec4(2.0, 3.0, 4.0, 5.0));
        assert_eq!([1.0, 2.0, 3.0, 4.0], v);

        // Equality is tolerant, not exact, so it is not transitive.
        let a = Vector::<1>::splat(0.0);
        let b = Vector::<1>::splat(0.000008);
        let c = Vector::<1>::splat(0.000016);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn approx() {
        assert_approx_eq!(vec4(1.0, 2.0, 3.0, 4.0), vec4(1.1, 2.0, 3.0, 3.9)).abs(0.2);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::X), "(1, 0, 0, 0)");
        assert_eq!(format!("{:?}", Vec4f::X), "(1.0, 0.0, 0.0, 0.0)");
        assert_eq!(format!("{:.2}", vec4(0.5, 1.0, 1.5, 2.0)), "(0.50, 1.00, 1.50, 2.00)");
    }
}
