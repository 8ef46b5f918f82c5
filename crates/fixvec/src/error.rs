/// Error returned when a runtime-sized sequence does not fit a tuple of a given dimension.
///
/// Only the fallible constructors produce this ([`Tuple::try_from_slice`],
/// [`Tuple::try_from_prefix`], and the [`TryFrom`] impls). Shape mismatches between tuples are
/// rejected at compile time instead.
///
/// [`Tuple::try_from_slice`]: crate::Tuple::try_from_slice
/// [`Tuple::try_from_prefix`]: crate::Tuple::try_from_prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// The source had a different number of elements than the tuple.
    #[error("expected exactly {expected} elements, got {found}")]
    LengthMismatch { expected: usize, found: usize },
    /// The source ran out of elements before the tuple was filled.
    #[error("expected at least {expected} elements, got {found}")]
    TooFewElements { expected: usize, found: usize },
}
