use crate::{
    traits::{Number, Sqrt},
    One, Tuple, Zero,
};

mod view;

pub use view::{XY, XYZ};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<2, T>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<3, T>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<4, T>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T` (by default, [`f32`]).
///
/// All of the dimension-agnostic behavior comes from the [`Tuple`] trait and the operators
/// generated by [`impl_tuple!`][crate::impl_tuple]. [`Vector`] adds the geometric parts.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::new`], [`Tuple::from_array`], and the [`From`] impl create a vector from an array.
/// - [`Tuple::from_elems`] converts each value of an array into `T`.
/// - [`Tuple::splat`] creates a vector by copying the given value into each element.
/// - [`Tuple::from_prefix`] takes the first `N` elements of an iterator.
/// - [`Tuple::try_from_prefix`], [`Tuple::try_from_slice`], and the [`TryFrom`] impl do the same for
///   sources whose length is only known at runtime, and report a [`ShapeError`] instead of
///   panicking.
/// - The [`Default`] implementation and [`Vector::ZERO`] yield a vector containing all-zeroes.
/// - For vectors with 2 to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   are unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - For 2- and 3-dimensional vectors, elements can be accessed as fields `x`, `y` and `z`, or
///   through the `x()`/`x_mut()` family of methods. These alias the same storage as positional
///   access.
/// - [`Tuple::iter`] and [`Tuple::iter_mut`] traverse the elements in either direction.
/// - With the `bytemuck` feature (enabled by default), [`bytemuck::Zeroable`] and
///   [`bytemuck::Pod`] are implemented to allow safe transmutation when the element type `T`
///   also allows this.
///
/// # Geometry
///
/// [`length`], [`normalize`] and [`dot`] work for any dimension; [`cross`] only exists for
/// 3-dimensional vectors. Each of them is also available as a method.
///
/// ```compile_fail
/// # use fixvec::*;
/// let _ = cross(vec4(1.0, 0.0, 0.0, 0.0), vec4(0.0, 1.0, 0.0, 0.0));
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`ShapeError`]: crate::ShapeError
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<const N: usize, T = f32>([T; N]);

crate::impl_tuple!(Vector);

#[cfg(feature = "bytemuck")]
unsafe impl<const N: usize, T: bytemuck::Zeroable> bytemuck::Zeroable for Vector<N, T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<const N: usize, T: bytemuck::Pod> bytemuck::Pod for Vector<N, T> {}

impl<const N: usize, T: Zero> Vector<N, T> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<2, T> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<3, T> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<4, T> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<const N: usize, T> Vector<N, T> {
    /// Creates a vector from an array of its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v: Vector<4> = Vector::new([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(v[3], 4.0);
    /// ```
    #[inline]
    pub fn new(elems: [T; N]) -> Self {
        Self::from_array(elems)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length (Euclidean norm) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A zero-length vector yields non-finite elements (infinities or NaN), following IEEE 754
    /// division. Check [`Vector::length`] first if that is a possibility.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        if cfg!(debug_assertions) && length == T::ZERO {
            log::debug!("normalizing a zero-length vector; the result will not be finite");
        }
        self / length
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T> Vector<2, T> {
    /// Returns the X coordinate (element 0).
    #[inline]
    pub fn x(&self) -> T
    where
        T: Copy,
    {
        self.x
    }

    /// Returns the Y coordinate (element 1).
    #[inline]
    pub fn y(&self) -> T
    where
        T: Copy,
    {
        self.y
    }

    /// Returns a mutable reference to the X coordinate (element 0).
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// Returns a mutable reference to the Y coordinate (element 1).
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }
}

impl<T> Vector<3, T> {
    /// Returns the X coordinate (element 0).
    #[inline]
    pub fn x(&self) -> T
    where
        T: Copy,
    {
        self.x
    }

    /// Returns the Y coordinate (element 1).
    #[inline]
    pub fn y(&self) -> T
    where
        T: Copy,
    {
        self.y
    }

    /// Returns the Z coordinate (element 2).
    #[inline]
    pub fn z(&self) -> T
    where
        T: Copy,
    {
        self.z
    }

    /// Returns a mutable reference to the X coordinate (element 0).
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// Returns a mutable reference to the Y coordinate (element 1).
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// Returns a mutable reference to the Z coordinate (element 2).
    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

/// Returns the Euclidean norm of `v`: the square root of the sum of its squared elements.
///
/// # Examples
///
/// ```
/// # use fixvec::*;
/// assert_approx_eq!(length(vec4(1.0, 2.0, 3.0, 4.0)), 30f32.sqrt());
/// assert_eq!(length(Vec3f::ZERO), 0.0);
/// ```
pub fn length<const N: usize, T>(v: Vector<N, T>) -> T
where
    T: Number + Sqrt,
{
    v.length()
}

/// Returns `v` divided by its length.
///
/// See [`Vector::normalize`] for the behavior on zero-length input.
///
/// # Examples
///
/// ```
/// # use fixvec::*;
/// let v = vec4(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(normalize(v), v / 30f32.sqrt());
/// ```
pub fn normalize<const N: usize, T>(v: Vector<N, T>) -> Vector<N, T>
where
    T: Number + Sqrt,
{
    v.normalize()
}

/// Returns the dot product of `a` and `b`: the sum of their element-wise products.
///
/// # Examples
///
/// ```
/// # use fixvec::*;
/// assert_eq!(dot(vec4(1.0, 2.0, 3.0, 4.0), vec4(2.0, 3.0, 4.0, 5.0)), 40.0);
/// ```
pub fn dot<const N: usize, T>(a: Vector<N, T>, b: Vector<N, T>) -> T
where
    T: Number,
{
    a.dot(b)
}

/// Returns the cross product of two 3-dimensional vectors.
///
/// # Examples
///
/// ```
/// # use fixvec::*;
/// assert_eq!(cross(vec3(1.0, 2.0, 3.0), vec3(2.0, 3.0, 4.0)), vec3(-1.0, 2.0, -1.0));
/// ```
pub fn cross<T>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T>
where
    T: Number,
{
    a.cross(b)
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
