//! Epsilon-tolerant equality.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their elements are.
///
/// For more information on the subtleties of approximate floating-point number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance of a comparison.
    ///
    /// For floats this is the float type itself. Integers use their unsigned counterpart, since
    /// the difference between two integers is always non-negative.
    type Tolerance: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// Values that are exactly equal always compare equal. Otherwise, the values are considered
    /// equal if their absolute difference is strictly less than `abs_tolerance`.
    ///
    /// Non-finite floats only compare equal to themselves: `inf` equals `inf`, `-inf` equals
    /// `-inf`, and `NaN` equals nothing.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;
}

/// Trait implemented for the `Tolerance` value of [`ApproxEq`] implementations.
///
/// This supplies the epsilon used by `==` on tuples, by [`approx_eq`], and by
/// [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = 1e-5;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = 1e-5;
}

macro_rules! exact_tolerance {
    ($($types:ty),+) => {
        $(
            impl DefaultTolerances for $types {
                const DEFAULT_ABS_TOLERANCE: Self = 0;
            }
        )+
    };
}
exact_tolerance!(u8, u16, u32, u64, u128, usize);

/// Compares `a` and `b` using the default tolerance of their type.
///
/// This is the comparison `==` applies to each pair of tuple elements.
///
/// # Examples
///
/// ```
/// # use fixvec::*;
/// assert!(approx_eq(&3.1f32, &3.1));
/// assert!(approx_eq(&3.1f32, &3.10000001));
/// assert!(!approx_eq(&3.1f32, &4.1));
/// ```
pub fn approx_eq<T>(a: &T, b: &T) -> bool
where
    T: ApproxEq + ?Sized,
{
    a.abs_diff_eq(b, T::Tolerance::DEFAULT_ABS_TOLERANCE)
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// This type will check the assertion when dropped. By default, the values are compared with
/// [`ApproxEq::abs_diff_eq`] using [`DEFAULT_ABS_TOLERANCE`]. Call [`Asserter::abs`] to use a
/// different tolerance.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    ///
    /// Values whose absolute difference is strictly less than `abs` are considered equal.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // FIXME: `#[track_caller]` does not work correctly on destructors (the location of
    // `ptr::drop_in_place` is blamed instead of the user code dropping the value)
    fn drop(&mut self) {
        let abs = self
            .abs
            .take()
            .unwrap_or(T::Tolerance::DEFAULT_ABS_TOLERANCE);

        let equal = T::abs_diff_eq(self.left, self.right, abs);
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        // `#[track_caller]` doesn't work on `drop`, so the location of the assertion is printed
        // manually.
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it uses the [`ApproxEq`]
/// trait to perform an approximate comparison, and returns an [`Asserter`] that can be used to
/// configure the tolerance.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// Default tolerance:
///
/// ```
/// # use fixvec::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// ```
///
/// Custom tolerance:
///
/// ```
/// # use fixvec::*;
/// assert_approx_eq!(100.0, 99.0).abs(1.5);
/// assert_approx_eq!(vec3(1.0, 2.0, 3.0), vec3(1.01, 2.0, 2.99)).abs(0.1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_ne!`], except in that it uses the [`ApproxEq`]
/// trait to perform an approximate comparison, and returns an [`Asserter`] that can be used to
/// configure the tolerance.
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use fixvec::*;
/// assert_approx_ne!(100.0, 99.0);
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+))
        )
    };
}
