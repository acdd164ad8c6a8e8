//! Motors: rigid motions as elements of the even subalgebra.
//!
//! A motor packs a scalar, the three Euclidean bivectors, the pseudoscalar,
//! and the three ideal bivectors into lanes L1 and L2, eight floats in all.
//! Rotations, translations, and general screw motions are all motors, and
//! composing two motions is the geometric product of their motors. A motor
//! `m` moves a point `p` by the sandwich `m * p * !m`.

use crate::entity::Entity;
use crate::simd::F32x4;

/// An even-subalgebra element stored in lanes L1 and L2.
pub type Motor = Entity<0b0110>;

/// Build a motor from its eight stored coefficients, in lane order:
/// `a + b*e12 + c*e31 + d*e23 + e*e0123 + f*e01 + g*e02 + h*e03`.
///
/// A rotation by `theta` about the z axis through the origin is
/// `motor(cos(theta/2), sin(theta/2), 0, 0, 0, 0, 0, 0)`; a translation by
/// `d` along z is `motor(1, 0, 0, 0, 0, 0, 0, -d/2)`.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn motor(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32) -> Motor {
    Motor::from_lanes([
        F32x4::zero(),
        F32x4::new(a, b, c, d),
        F32x4::new(e, f, g, h),
        F32x4::zero(),
    ])
}
