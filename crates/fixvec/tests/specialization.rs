//! A tuple type defined outside the crate gets the full operator family from `impl_tuple!`.

use fixvec::{assert_approx_eq, impl_tuple, ApproxEq, ShapeError, Tuple};

/// Homogeneous RGB(A) color, kept distinct from `Vector` so the two can't be mixed up.
#[derive(Clone, Copy)]
struct Color<const N: usize, T = f32>([T; N]);

impl_tuple!(Color);

impl<T: Copy> Color<3, T> {
    fn r(&self) -> T {
        self[0]
    }

    fn b_mut(&mut self) -> &mut T {
        &mut self[2]
    }
}

#[test]
fn operators_return_the_concrete_type() {
    let a = Color::from_array([0.25, 0.5, 0.75]);
    let b = Color::splat(0.25);

    let sum: Color<3> = a + b;
    assert_eq!(sum, [0.5, 0.75, 1.0]);
    let diff: Color<3> = a - b;
    assert_eq!(diff, [0.0, 0.25, 0.5]);
    let scaled: Color<3> = a * 2.0;
    assert_eq!(scaled, [0.5, 1.0, 1.5]);
    let halved: Color<3> = a / 2.0;
    assert_eq!(halved, [0.125, 0.25, 0.375]);
    let negated: Color<3> = -a;
    assert_eq!(negated, [-0.25, -0.5, -0.75]);

    let mut c = a;
    c += b;
    c -= b;
    c *= 4.0;
    c /= 2.0;
    assert_eq!(c, a * 2.0);
}

#[test]
fn dimension_specific_accessors() {
    let mut c: Color<3> = Color::from_array([0.1, 0.2, 0.3]);
    assert_eq!(c.r(), 0.1);
    *c.b_mut() = 0.9;
    assert_eq!(c[2], 0.9);
    assert_eq!(c.size(), 3);
}

#[test]
fn construction_and_conversion() {
    let c: Color<4, u8> = Color::default();
    assert_eq!(c.into_array(), [0; 4]);

    let c: Color<4, u8> = [1, 2, 3, 4].into();
    let arr: [u8; 4] = c.into();
    assert_eq!(arr, [1, 2, 3, 4]);

    let c = Color::<3, u8>::try_from(&[9, 8, 7][..]).unwrap();
    assert_eq!(c, [9, 8, 7]);
    assert_eq!(
        Color::<3, u8>::try_from(&[9, 8][..]).unwrap_err(),
        ShapeError::LengthMismatch {
            expected: 3,
            found: 2
        }
    );

    assert_eq!(format!("{c}"), "(9, 8, 7)");
    assert_eq!(format!("{c:?}"), "(9, 8, 7)");
}

#[test]
fn tolerance() {
    let a: Color<3> = Color::splat(0.5);
    let b: Color<3> = Color::splat(0.5001);
    assert_ne!(a, b);
    assert!(a.abs_diff_eq(&b, 0.001));
    assert!(a.approx_eq_with(&b, 0.001));
    assert_approx_eq!(a, b).abs(0.001);
}

#[test]
fn iteration() {
    let mut c: Color<3> = Color::from_array([1.0, 2.0, 3.0]);
    for elem in &mut c {
        *elem *= 0.5;
    }
    let collected: Vec<f32> = c.into_iter().collect();
    assert_eq!(collected, [0.5, 1.0, 1.5]);
    assert_eq!(c.iter().rev().next(), Some(&1.5));
}
