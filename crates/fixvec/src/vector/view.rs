//! Named-field views over the storage of 2- and 3-dimensional vectors.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

/// Field view of a [`Vec2`][crate::Vec2], reached through its [`Deref`] impl.
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

/// Field view of a [`Vec3`][crate::Vec3], reached through its [`Deref`] impl.
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

// `Vector` is `repr(transparent)` over `[T; N]`, and a `repr(C)` struct of `N` fields of type `T`
// plus a ZST has the same layout, so the views alias the vector's elements in index order.

impl<T> Deref for Vector<2, T> {
    type Target = XY<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Vector<2, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Vector<3, T> {
    type Target = XYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Vector<3, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{align_of, size_of};

    use crate::{vec2, vec3, Tuple, Vector, XY, XYZ};

    #[test]
    fn layout() {
        assert_eq!(size_of::<XY<f32>>(), size_of::<Vector<2>>());
        assert_eq!(align_of::<XY<f64>>(), align_of::<Vector<2, f64>>());
        assert_eq!(size_of::<XYZ<u8>>(), size_of::<Vector<3, u8>>());
        assert_eq!(size_of::<XYZ<f64>>(), size_of::<Vector<3, f64>>());
    }

    #[test]
    fn aliasing() {
        let mut v = vec3(1, 2, 3);
        v.z = 30;
        v[0] = 10;
        assert_eq!((v.x, v.y, v.z), (10, 2, 30));
        assert_eq!(v.into_array(), [10, 2, 30]);

        let mut v = vec2(1.0, 2.0);
        v.x += 0.5;
        assert_eq!(v[0], 1.5);
    }
}
