//! Lines and bivectors.
//!
//! A line in P(R(3,0,1)) splits into a Euclidean part (the grade-2 blades
//! e12, e31, e23 in lane L1) and an ideal part "at infinity" (e01, e02, e03
//! in lane L2). The general bivector carries both.
//!
//! Slot 0 of L1 is the scalar and slot 0 of L2 the pseudoscalar; for a pure
//! line those slots must be zero, and every constructor here establishes
//! that.

use crate::entity::Entity;
use crate::simd::F32x4;

/// A Euclidean line `d*e12 + e*e31 + f*e23`, stored in lane L1 with the
/// scalar slot held at zero.
pub type Line = Entity<0b0010>;

/// An ideal line `a*e01 + b*e02 + c*e03`, stored in lane L2 with the
/// pseudoscalar slot held at zero.
pub type IdealLine = Entity<0b0100>;

/// A general bivector: the sum of a Euclidean and an ideal line.
pub type Bivector = Entity<0b0110>;

/// Build the Euclidean line `d*e12 + e*e31 + f*e23`.
#[inline]
pub fn line(d: f32, e: f32, f: f32) -> Line {
    Line::from_lanes([
        F32x4::zero(),
        F32x4::new(0.0, d, e, f),
        F32x4::zero(),
        F32x4::zero(),
    ])
}

/// Build the ideal line `a*e01 + b*e02 + c*e03`.
#[inline]
pub fn ideal_line(a: f32, b: f32, c: f32) -> IdealLine {
    IdealLine::from_lanes([
        F32x4::zero(),
        F32x4::zero(),
        F32x4::new(0.0, a, b, c),
        F32x4::zero(),
    ])
}

/// Build the bivector `a*e01 + b*e02 + c*e03 + d*e12 + e*e31 + f*e23`.
#[inline]
pub fn bivector(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Bivector {
    Bivector::from_lanes([
        F32x4::zero(),
        F32x4::new(0.0, d, e, f),
        F32x4::new(0.0, a, b, c),
        F32x4::zero(),
    ])
}
