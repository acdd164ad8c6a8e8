//! SSE lane implementation for x86_64.
//!
//! SSE is part of the x86_64 baseline, so no runtime feature detection is
//! needed; every operation here maps to a single instruction or a short
//! fixed sequence.

use std::arch::x86_64::*;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Four packed single-precision floats in one 16-byte register.
///
/// Slot 0 is the lowest-address element.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4(pub(crate) __m128);

/// Permute the slots of a lane with compile-time indices.
///
/// `swizzle!(v, 3, 2, 1, 0)` reverses the lane; `swizzle!(v, 0, 0, 0, 0)`
/// broadcasts slot 0.
macro_rules! swizzle {
    ($v:expr, $s0:literal, $s1:literal, $s2:literal, $s3:literal) => {
        $crate::simd::F32x4(unsafe {
            std::arch::x86_64::_mm_shuffle_ps::<{ ($s3 << 6) | ($s2 << 4) | ($s1 << 2) | $s0 }>(
                ($v).0,
                ($v).0,
            )
        })
    };
}
pub(crate) use swizzle;

impl F32x4 {
    /// Pack four floats, slot 0 first.
    #[inline(always)]
    pub fn new(s0: f32, s1: f32, s2: f32, s3: f32) -> Self {
        Self(unsafe { _mm_set_ps(s3, s2, s1, s0) })
    }

    /// Broadcast one float to all four slots.
    #[inline(always)]
    pub fn splat(v: f32) -> Self {
        Self(unsafe { _mm_set1_ps(v) })
    }

    /// The all-zero lane.
    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { _mm_setzero_ps() })
    }

    #[inline(always)]
    pub fn from_array(a: [f32; 4]) -> Self {
        Self(unsafe { _mm_loadu_ps(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.0) };
        out
    }

    /// Read a single slot.
    #[inline(always)]
    pub fn extract(self, slot: usize) -> f32 {
        self.to_array()[slot]
    }

    /// Approximate per-slot reciprocal (`rcpps`); relative error is at most
    /// 1.5 * 2^-12.
    #[inline(always)]
    pub fn rcp(self) -> Self {
        Self(unsafe { _mm_rcp_ps(self.0) })
    }
}

impl Add for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_ps(self.0, rhs.0) })
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
        Self(unsafe { _mm_sub_ps(self.0, rhs.0) })
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
        Self(unsafe { _mm_mul_ps(self.0, rhs.0) })
    }
}

impl Neg for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        // Flip the sign bit of every slot.
        Self(unsafe { _mm_xor_ps(self.0, _mm_set1_ps(-0.0)) })
    }
}

// Bit-for-bit equality through the array view; two lanes compare equal
// exactly when every slot does.
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
