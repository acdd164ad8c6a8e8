//! Points and directions: the grade-3 entities.
//!
//! A point `x*e032 + y*e013 + z*e021 + e123` lives in lane L3 with its
//! homogeneous weight (the e123 coefficient) in slot 0. A direction is an
//! ideal point, the same shape with weight zero.

use crate::entity::Entity;
use crate::simd::{swizzle, F32x4};

/// A projective point, stored in lane L3 with weight at slot 0.
pub type Point = Entity<0b1000>;

/// An ideal point: a point whose weight is zero.
pub type Direction = Entity<0b1000>;

/// Build the point `(x, y, z)` with unit weight.
#[inline]
pub fn point(x: f32, y: f32, z: f32) -> Point {
    Point::from_lanes([
        F32x4::zero(),
        F32x4::zero(),
        F32x4::zero(),
        F32x4::new(1.0, z, y, x),
    ])
}

/// Build the ideal point `(x, y, z)`: weight zero.
#[inline]
pub fn direction(x: f32, y: f32, z: f32) -> Direction {
    Direction::from_lanes([
        F32x4::zero(),
        F32x4::zero(),
        F32x4::zero(),
        F32x4::new(0.0, z, y, x),
    ])
}

/// Reinterpret a general trivector as a direction.
///
/// Debug builds assert the weight is within 1e-7 of zero; release builds
/// perform no check.
#[inline]
pub fn direction_from(e: Entity<0b1000>) -> Direction {
    debug_assert!(
        e.e123().abs() < 1e-7,
        "cannot initialize direction from non-ideal point (weight {})",
        e.e123()
    );
    e
}

impl Entity<0b1000> {
    /// X coordinate (the e032 coefficient).
    #[inline]
    pub fn x(&self) -> f32 {
        self.part(3).extract(3)
    }

    /// Y coordinate (the e013 coefficient).
    #[inline]
    pub fn y(&self) -> f32 {
        self.part(3).extract(2)
    }

    /// Z coordinate (the e021 coefficient).
    #[inline]
    pub fn z(&self) -> f32 {
        self.part(3).extract(1)
    }

    /// Divide the lane through by the homogeneous weight.
    ///
    /// Uses the fast approximate reciprocal (relative error at most
    /// 1.5 * 2^-12) rather than a true divide. A weight of zero gives an
    /// unspecified result; no check is made.
    #[inline]
    pub fn normalize(&mut self) {
        let w = swizzle!(self.part(3), 0, 0, 0, 0);
        let scaled = self.part(3) * w.rcp();
        *self.part_mut(3) = scaled;
    }
}
