//! Lane-pair kernels of the geometric product.
//!
//! The product of two multivectors decomposes into products between their
//! stored lanes. `gp_ij` computes the contribution of lane `Li` of the left
//! operand times lane `Lj` of the right operand, returning the output
//! lane(s) fixed by the pair:
//!
//! ```text
//! (0,0) (0,3) (3,0) (3,3)                          -> L1, L2
//! (0,1) (0,2) (1,0) (2,0) (1,3) (3,1) (2,3) (3,2)  -> L0, L3
//! (1,1)                                            -> L1
//! (1,2) (2,1)                                      -> L2
//! (2,2)                                            -> zero (no kernel)
//! ```
//!
//! Each kernel is a fixed straight-line sequence: slot swizzles of both
//! operands, multiplies by constant sign vectors (entries in {-1, 0, +1}),
//! and adds. The swizzle/sign patterns come from expanding the sixteen
//! blade-pair products of each lane pair over the basis ordering
//!
//! ```text
//! L0: (e3, e2, e1, e0)    L1: (1, e12, e31, e23)
//! L2: (e0123, e01, e02, e03)    L3: (e123, e021, e013, e032)
//! ```
//!
//! with e0^2 = 0 and e1^2 = e2^2 = e3^2 = 1. A zero entry in a sign vector
//! both drops a term that does not exist for that slot and squashes whatever
//! the paired swizzle put there. The L2xL2 pair has no kernel: the
//! pseudoscalar and the ideal bivectors all carry e0, so every one of their
//! products vanishes.
//!
//! Kernels touch nothing but their arguments: no branches, no memory beyond
//! the two input lanes. NaN and infinity propagate as IEEE arithmetic
//! dictates.

use crate::simd::{swizzle, F32x4};

/// L0 ⊗ L0 → (L1, L2).
#[inline(always)]
pub fn gp00(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let mut p1 = swizzle!(a, 0, 1, 0, 0)
        * swizzle!(b, 0, 2, 2, 1)
        * F32x4::new(1.0, -1.0, 1.0, -1.0);
    p1 += swizzle!(a, 1, 2, 2, 1) * swizzle!(b, 1, 1, 0, 0) * F32x4::new(1.0, 1.0, -1.0, 1.0);
    p1 += swizzle!(a, 2, 0, 0, 0) * swizzle!(b, 2, 0, 0, 0) * F32x4::new(1.0, 0.0, 0.0, 0.0);
    let mut p2 = swizzle!(a, 0, 2, 1, 0)
        * swizzle!(b, 0, 3, 3, 3)
        * F32x4::new(0.0, -1.0, -1.0, -1.0);
    p2 += swizzle!(a, 0, 3, 3, 3) * swizzle!(b, 0, 2, 1, 0) * F32x4::new(0.0, 1.0, 1.0, 1.0);
    (p1, p2)
}

/// L0 ⊗ L1 → (L0, L3).
#[inline(always)]
pub fn gp01(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let mut p0 = swizzle!(a, 0, 0, 0, 3)
        * swizzle!(b, 0, 3, 2, 0)
        * F32x4::new(1.0, -1.0, 1.0, 1.0);
    p0 += swizzle!(a, 1, 1, 1, 0) * swizzle!(b, 3, 0, 1, 0) * F32x4::new(1.0, 1.0, -1.0, 0.0);
    p0 += swizzle!(a, 2, 2, 2, 0) * swizzle!(b, 2, 1, 0, 0) * F32x4::new(-1.0, 1.0, 1.0, 0.0);
    let mut p3 = swizzle!(a, 0, 3, 3, 3)
        * swizzle!(b, 1, 1, 2, 3)
        * F32x4::new(1.0, -1.0, -1.0, -1.0);
    p3 += swizzle!(a, 1, 0, 0, 0) * swizzle!(b, 2, 0, 0, 0) * F32x4::new(1.0, 0.0, 0.0, 0.0);
    p3 += swizzle!(a, 2, 0, 0, 0) * swizzle!(b, 3, 0, 0, 0) * F32x4::new(1.0, 0.0, 0.0, 0.0);
    (p0, p3)
}

/// L0 ⊗ L2 → (L0, L3). Everything here carries e0, so the L0 part is a
/// single e0 slot and the L3 part has no weight component.
#[inline(always)]
pub fn gp02(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let mut p0 = swizzle!(a, 0, 0, 0, 0)
        * swizzle!(b, 0, 0, 0, 3)
        * F32x4::new(0.0, 0.0, 0.0, -1.0);
    p0 += swizzle!(a, 0, 0, 0, 1) * swizzle!(b, 0, 0, 0, 2) * F32x4::new(0.0, 0.0, 0.0, -1.0);
    p0 += swizzle!(a, 0, 0, 0, 2) * swizzle!(b, 0, 0, 0, 1) * F32x4::new(0.0, 0.0, 0.0, -1.0);
    let mut p3 = swizzle!(a, 0, 0, 0, 0)
        * swizzle!(b, 0, 0, 1, 2)
        * F32x4::new(0.0, 1.0, 1.0, -1.0);
    p3 += swizzle!(a, 0, 1, 1, 1) * swizzle!(b, 0, 1, 0, 3) * F32x4::new(0.0, -1.0, 1.0, 1.0);
    p3 += swizzle!(a, 0, 2, 2, 2) * swizzle!(b, 0, 2, 3, 0) * F32x4::new(0.0, 1.0, -1.0, 1.0);
    (p0, p3)
}

/// L0 ⊗ L3 → (L1, L2).
#[inline(always)]
pub fn gp03(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let p1 = swizzle!(a, 0, 0, 1, 2) * swizzle!(b, 0, 0, 0, 0) * F32x4::new(0.0, 1.0, 1.0, 1.0);
    let mut p2 = swizzle!(a, 0, 0, 0, 1)
        * swizzle!(b, 1, 2, 3, 3)
        * F32x4::new(1.0, 1.0, -1.0, 1.0);
    p2 += swizzle!(a, 1, 1, 2, 2) * swizzle!(b, 2, 1, 1, 2) * F32x4::new(1.0, -1.0, 1.0, -1.0);
    p2 += swizzle!(a, 2, 0, 0, 0) * swizzle!(b, 3, 0, 0, 0) * F32x4::new(1.0, 0.0, 0.0, 0.0);
    p2 += swizzle!(a, 3, 0, 0, 0) * swizzle!(b, 0, 0, 0, 0) * F32x4::new(1.0, 0.0, 0.0, 0.0);
    (p1, p2)
}

/// L1 ⊗ L0 → (L0, L3).
#[inline(always)]
pub fn gp10(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let mut p0 = swizzle!(a, 0, 0, 0, 0) * b;
    p0 += swizzle!(a, 2, 1, 1, 0) * swizzle!(b, 2, 2, 1, 0) * F32x4::new(1.0, -1.0, 1.0, 0.0);
    p0 += swizzle!(a, 3, 3, 2, 0) * swizzle!(b, 1, 0, 0, 0) * F32x4::new(-1.0, 1.0, -1.0, 0.0);
    let mut p3 = swizzle!(a, 1, 1, 2, 3)
        * swizzle!(b, 0, 3, 3, 3)
        * F32x4::new(1.0, -1.0, -1.0, -1.0);
    p3 += swizzle!(a, 2, 0, 0, 0) * swizzle!(b, 1, 0, 0, 0) * F32x4::new(1.0, 0.0, 0.0, 0.0);
    p3 += swizzle!(a, 3, 0, 0, 0) * swizzle!(b, 2, 0, 0, 0) * F32x4::new(1.0, 0.0, 0.0, 0.0);
    (p0, p3)
}

/// L1 ⊗ L1 → L1. The even-subalgebra rotor product.
#[inline(always)]
pub fn gp11(a: F32x4, b: F32x4) -> F32x4 {
    let mut p1 = swizzle!(a, 0, 0, 0, 0) * b;
    p1 += swizzle!(a, 1, 1, 1, 1) * swizzle!(b, 1, 0, 3, 2) * F32x4::new(-1.0, 1.0, -1.0, 1.0);
    p1 += swizzle!(a, 2, 2, 2, 2) * swizzle!(b, 2, 3, 0, 1) * F32x4::new(-1.0, 1.0, 1.0, -1.0);
    p1 += swizzle!(a, 3, 3, 3, 3) * swizzle!(b, 3, 2, 1, 0) * F32x4::new(-1.0, -1.0, 1.0, 1.0);
    p1
}

/// L1 ⊗ L2 → L2.
#[inline(always)]
pub fn gp12(a: F32x4, b: F32x4) -> F32x4 {
    let mut p2 = swizzle!(a, 0, 0, 0, 0) * b;
    p2 += swizzle!(a, 1, 1, 1, 1) * swizzle!(b, 3, 2, 1, 0) * F32x4::new(1.0, 1.0, -1.0, -1.0);
    p2 += swizzle!(a, 2, 2, 2, 2) * swizzle!(b, 2, 3, 0, 1) * F32x4::new(1.0, -1.0, -1.0, 1.0);
    p2 += swizzle!(a, 3, 3, 3, 3) * swizzle!(b, 1, 0, 3, 2) * F32x4::new(1.0, -1.0, 1.0, -1.0);
    p2
}

/// L1 ⊗ L3 → (L0, L3).
#[inline(always)]
pub fn gp13(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let mut p0 = swizzle!(a, 1, 2, 3, 1)
        * swizzle!(b, 0, 0, 0, 1)
        * F32x4::new(-1.0, -1.0, -1.0, 1.0);
    p0 += swizzle!(a, 0, 0, 0, 2) * swizzle!(b, 0, 0, 0, 2) * F32x4::new(0.0, 0.0, 0.0, 1.0);
    p0 += swizzle!(a, 0, 0, 0, 3) * swizzle!(b, 0, 0, 0, 3) * F32x4::new(0.0, 0.0, 0.0, 1.0);
    let mut p3 = swizzle!(a, 0, 0, 0, 0) * b;
    p3 += swizzle!(a, 0, 2, 1, 1) * swizzle!(b, 0, 3, 3, 2) * F32x4::new(0.0, 1.0, -1.0, 1.0);
    p3 += swizzle!(a, 0, 3, 3, 2) * swizzle!(b, 0, 2, 1, 1) * F32x4::new(0.0, -1.0, 1.0, -1.0);
    (p0, p3)
}

/// L2 ⊗ L0 → (L0, L3).
#[inline(always)]
pub fn gp20(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let mut p0 = swizzle!(a, 0, 0, 0, 1)
        * swizzle!(b, 0, 0, 0, 2)
        * F32x4::new(0.0, 0.0, 0.0, 1.0);
    p0 += swizzle!(a, 0, 0, 0, 2) * swizzle!(b, 0, 0, 0, 1) * F32x4::new(0.0, 0.0, 0.0, 1.0);
    p0 += swizzle!(a, 0, 0, 0, 3) * swizzle!(b, 0, 0, 0, 0) * F32x4::new(0.0, 0.0, 0.0, 1.0);
    let mut p3 = swizzle!(a, 0, 0, 0, 0)
        * swizzle!(b, 0, 0, 1, 2)
        * F32x4::new(0.0, -1.0, -1.0, -1.0);
    p3 += swizzle!(a, 0, 1, 1, 2) * swizzle!(b, 0, 1, 0, 0) * F32x4::new(0.0, -1.0, 1.0, -1.0);
    p3 += swizzle!(a, 0, 2, 3, 3) * swizzle!(b, 0, 2, 2, 1) * F32x4::new(0.0, 1.0, -1.0, 1.0);
    (p0, p3)
}

/// L2 ⊗ L1 → L2.
#[inline(always)]
pub fn gp21(a: F32x4, b: F32x4) -> F32x4 {
    let mut p2 = swizzle!(a, 0, 0, 0, 0)
        * swizzle!(b, 0, 3, 2, 1)
        * F32x4::new(1.0, -1.0, -1.0, -1.0);
    p2 += swizzle!(a, 1, 1, 1, 1) * swizzle!(b, 3, 0, 1, 2) * F32x4::new(1.0, 1.0, 1.0, -1.0);
    p2 += swizzle!(a, 2, 2, 2, 2) * swizzle!(b, 2, 1, 0, 3) * F32x4::new(1.0, -1.0, 1.0, 1.0);
    p2 += swizzle!(a, 3, 3, 3, 3) * swizzle!(b, 1, 2, 3, 0) * F32x4::new(1.0, 1.0, -1.0, 1.0);
    p2
}

/// L2 ⊗ L3 → (L0, L3). Only the pseudoscalar slot of L2 survives against a
/// trivector; the ideal slots all annihilate on e0.
#[inline(always)]
pub fn gp23(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let p0 = swizzle!(a, 0, 0, 0, 0)
        * swizzle!(b, 0, 0, 0, 0)
        * F32x4::new(0.0, 0.0, 0.0, -1.0);
    let p3 = swizzle!(a, 0, 3, 2, 1)
        * swizzle!(b, 0, 0, 0, 0)
        * F32x4::new(0.0, -1.0, -1.0, -1.0);
    (p0, p3)
}

/// L3 ⊗ L0 → (L1, L2).
#[inline(always)]
pub fn gp30(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let p1 = swizzle!(a, 0, 0, 0, 0) * swizzle!(b, 0, 0, 1, 2) * F32x4::new(0.0, 1.0, 1.0, 1.0);
    let mut p2 = swizzle!(a, 0, 1, 1, 2)
        * swizzle!(b, 3, 1, 2, 2)
        * F32x4::new(-1.0, -1.0, 1.0, -1.0);
    p2 += swizzle!(a, 1, 2, 3, 3) * swizzle!(b, 0, 0, 0, 1) * F32x4::new(-1.0, 1.0, -1.0, 1.0);
    p2 += swizzle!(a, 2, 0, 0, 0) * swizzle!(b, 1, 0, 0, 0) * F32x4::new(-1.0, 0.0, 0.0, 0.0);
    p2 += swizzle!(a, 3, 0, 0, 0) * swizzle!(b, 2, 0, 0, 0) * F32x4::new(-1.0, 0.0, 0.0, 0.0);
    (p1, p2)
}

/// L3 ⊗ L1 → (L0, L3).
#[inline(always)]
pub fn gp31(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let mut p0 = swizzle!(a, 0, 0, 0, 1)
        * swizzle!(b, 1, 2, 3, 1)
        * F32x4::new(-1.0, -1.0, -1.0, 1.0);
    p0 += swizzle!(a, 0, 0, 0, 2) * swizzle!(b, 0, 0, 0, 2) * F32x4::new(0.0, 0.0, 0.0, 1.0);
    p0 += swizzle!(a, 0, 0, 0, 3) * swizzle!(b, 0, 0, 0, 3) * F32x4::new(0.0, 0.0, 0.0, 1.0);
    let mut p3 = swizzle!(a, 0, 1, 1, 1)
        * swizzle!(b, 0, 0, 3, 2)
        * F32x4::new(1.0, 1.0, -1.0, 1.0);
    p3 += swizzle!(a, 0, 2, 2, 2) * swizzle!(b, 0, 3, 0, 1) * F32x4::new(0.0, 1.0, 1.0, -1.0);
    p3 += swizzle!(a, 0, 3, 3, 3) * swizzle!(b, 0, 2, 1, 0) * F32x4::new(0.0, -1.0, 1.0, 1.0);
    (p0, p3)
}

/// L3 ⊗ L2 → (L0, L3). Mirror of [`gp23`] with the opposite orientation.
#[inline(always)]
pub fn gp32(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let p0 = swizzle!(a, 0, 0, 0, 0)
        * swizzle!(b, 0, 0, 0, 0)
        * F32x4::new(0.0, 0.0, 0.0, 1.0);
    let p3 = swizzle!(a, 0, 0, 0, 0)
        * swizzle!(b, 0, 3, 2, 1)
        * F32x4::new(0.0, 1.0, 1.0, 1.0);
    (p0, p3)
}

/// L3 ⊗ L3 → (L1, L2). The weight slots multiply to -1 (e123 squares to
/// -1); the ideal slots commute against the weight only.
#[inline(always)]
pub fn gp33(a: F32x4, b: F32x4) -> (F32x4, F32x4) {
    let p1 = swizzle!(a, 0, 0, 0, 0)
        * swizzle!(b, 0, 0, 0, 0)
        * F32x4::new(-1.0, 0.0, 0.0, 0.0);
    let mut p2 = swizzle!(a, 0, 0, 0, 0)
        * swizzle!(b, 0, 3, 2, 1)
        * F32x4::new(0.0, -1.0, -1.0, -1.0);
    p2 += swizzle!(a, 0, 3, 2, 1) * swizzle!(b, 0, 0, 0, 0) * F32x4::new(0.0, 1.0, 1.0, 1.0);
    (p1, p2)
}
