//! Portable lane implementation for non-x86_64 targets, on `wide::f32x4`.
//!
//! `wide` compiles to the native 128-bit vector unit where one exists (NEON,
//! simd128) and to scalar code otherwise; either way the type is 16-byte
//! aligned, which the entity layout relies on.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use wide::f32x4;

/// Four packed single-precision floats in one 16-byte lane.
///
/// Slot 0 is the lowest-address element.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4(pub(crate) f32x4);

/// Permute the slots of a lane with compile-time indices.
macro_rules! swizzle {
    ($v:expr, $s0:literal, $s1:literal, $s2:literal, $s3:literal) => {{
        let a = ($v).to_array();
        $crate::simd::F32x4::from_array([a[$s0], a[$s1], a[$s2], a[$s3]])
    }};
}
pub(crate) use swizzle;

impl F32x4 {
    /// Pack four floats, slot 0 first.
    #[inline(always)]
    pub fn new(s0: f32, s1: f32, s2: f32, s3: f32) -> Self {
        Self(f32x4::from([s0, s1, s2, s3]))
    }

    /// Broadcast one float to all four slots.
    #[inline(always)]
    pub fn splat(v: f32) -> Self {
        Self(f32x4::splat(v))
    }

    /// The all-zero lane.
    #[inline(always)]
    pub fn zero() -> Self {
        Self(f32x4::ZERO)
    }

    #[inline(always)]
    pub fn from_array(a: [f32; 4]) -> Self {
        Self(f32x4::from(a))
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    /// Read a single slot.
    #[inline(always)]
    pub fn extract(self, slot: usize) -> f32 {
        self.to_array()[slot]
    }

    /// Per-slot reciprocal. Exact division here, which is well inside the
    /// 1.5 * 2^-12 tolerance the SSE backend's `rcpps` is allowed.
    #[inline(always)]
    pub fn rcp(self) -> Self {
        Self(f32x4::splat(1.0) / self.0)
    }
}

impl Add for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for F32x4 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for F32x4 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

// Bit-for-bit equality through the array view.
impl PartialEq for F32x4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "F32x4({:?})", self.to_array())
    }
}
