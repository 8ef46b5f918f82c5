//! Small, fixed-size vector math.
//!
//! # Motivation
//!
//! Graphics and simulation code frequently needs a handful of 2, 3 or 4 element vectors and
//! nothing else. Full linear algebra packages cover that, but at the price of large APIs, long
//! compile times, and public dependencies that churn. This library covers just the vector part.
//!
//! # Structure
//!
//! - [`Tuple`] is the dimension-agnostic base. It holds construction, element access, iteration,
//!   and equality logic once, for every dimension `N` and element type `T`.
//! - [`impl_tuple!`] stamps the operator family (`+`, `-`, `*`, `/`, their assigning forms, and
//!   negation) onto a concrete tuple struct, so that every operator returns that concrete type.
//! - [`Vector`] is the geometric specialization. It adds named `x`/`y`/`z` accessors for 2 and 3
//!   dimensions as well as [`length`], [`normalize`], [`dot`] and [`cross`].
//!
//! Everything is resolved statically. There is no dynamic dispatch, and mismatched dimensions or
//! element types are compile errors:
//!
//! ```compile_fail
//! # use fixvec::*;
//! let a: Vector<3> = Vector::ZERO;
//! let b: Vector<4> = Vector::ZERO;
//! let _ = a + b;
//! ```
//!
//! # Equality
//!
//! `==` on tuples is *epsilon-tolerant*: two tuples are equal if every pair of elements differs
//! by less than [`DefaultTolerances::DEFAULT_ABS_TOLERANCE`] (`1e-5` for floats). That relation is
//! not transitive; values near the threshold can form chains where `a == b` and `b == c`, but
//! `a != c`. This is inherent to comparing floats and is the reason [`Eq`] and [`Hash`] are not
//! implemented.
//!
//! # Goals & Non-Goals
//!
//! - Only const-generic, fixed-size vectors. Dynamically-sized vectors are out of scope.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - No matrices, quaternions, SIMD, or serialization.
//!
//! [`Hash`]: std::hash::Hash

pub mod approx;
mod error;
mod traits;
mod tuple;
mod vector;

pub use approx::{approx_eq, ApproxEq, DefaultTolerances};
pub use error::*;
pub use traits::*;
pub use tuple::*;
pub use vector::*;
