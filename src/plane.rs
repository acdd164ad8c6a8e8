//! Planes: the grade-1 entities of the algebra.
//!
//! In projective geometric algebra planes are the fundamental element;
//! every other entity arises from them. A line is the meet (product) of two
//! planes, a point the meet of three.

use crate::entity::Entity;
use crate::simd::F32x4;

/// A plane `a*e1 + b*e2 + c*e3 + d*e0`, stored in lane L0.
pub type Plane = Entity<0b0001>;

/// Build the plane `ax + by + cz + d = 0`.
///
/// The constructor performs the slot rearrangement so callers can pass the
/// familiar normal-and-offset form.
#[inline]
pub fn plane(a: f32, b: f32, c: f32, d: f32) -> Plane {
    // L0 slots are (e3, e2, e1, e0) = (c, b, a, d).
    Plane::from_lanes([
        F32x4::new(c, b, a, d),
        F32x4::zero(),
        F32x4::zero(),
        F32x4::zero(),
    ])
}
