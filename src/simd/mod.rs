//! 4-wide single-precision lane arithmetic.
//!
//! Every entity in the algebra is stored as one to four 16-byte lanes, and
//! all products are straight-line sequences of lane swizzles, sign-flipping
//! multiplies, and adds. This module provides the lane type those sequences
//! are written against:
//!
//! ```text
//! simd/
//! ├── mod.rs       - backend selection
//! ├── sse.rs       - x86_64 implementation (SSE is baseline on x86_64)
//! └── portable.rs  - every other target, built on `wide::f32x4`
//! ```
//!
//! Both backends expose the same `F32x4` API and the same `swizzle!` macro,
//! so the kernel layer is written once.

#[cfg(target_arch = "x86_64")]
mod sse;
#[cfg(target_arch = "x86_64")]
pub use sse::F32x4;
#[cfg(target_arch = "x86_64")]
pub(crate) use sse::swizzle;

#[cfg(not(target_arch = "x86_64"))]
mod portable;
#[cfg(not(target_arch = "x86_64"))]
pub use portable::F32x4;
#[cfg(not(target_arch = "x86_64"))]
pub(crate) use portable::swizzle;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_roundtrip() {
        let v = F32x4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.extract(0), 1.0);
        assert_eq!(v.extract(3), 4.0);
    }

    #[test]
    fn lane_arithmetic() {
        let a = F32x4::new(1.0, -2.0, 3.0, -4.0);
        let b = F32x4::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!((a + b).to_array(), [1.5, -1.5, 3.5, -3.5]);
        assert_eq!((a - b).to_array(), [0.5, -2.5, 2.5, -4.5]);
        assert_eq!((a * b).to_array(), [0.5, -1.0, 1.5, -2.0]);
        assert_eq!((-a).to_array(), [-1.0, 2.0, -3.0, 4.0]);
    }

    #[test]
    fn swizzle_permutes_slots() {
        let v = F32x4::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(swizzle!(v, 0, 0, 0, 0).to_array(), [10.0; 4]);
        assert_eq!(swizzle!(v, 3, 2, 1, 0).to_array(), [40.0, 30.0, 20.0, 10.0]);
        assert_eq!(swizzle!(v, 1, 1, 3, 2).to_array(), [20.0, 20.0, 40.0, 30.0]);
    }

    #[test]
    fn approximate_reciprocal() {
        let v = F32x4::new(2.0, 4.0, 8.0, 0.5);
        let r = v.rcp().to_array();
        let want = [0.5, 0.25, 0.125, 2.0];
        for (got, want) in r.iter().zip(want.iter()) {
            let rel = (got - want).abs() / want.abs();
            assert!(rel <= 1.5 / 4096.0, "rcp error {rel} too large");
        }
    }
}
