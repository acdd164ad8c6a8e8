//! Operators between entities: sum, difference, reverse, scaling, and the
//! geometric product dispatcher.
//!
//! Every binary operator between two mask shapes needs its own `impl` so
//! that the output mask can be a concrete type. The impls are generated by
//! the `impl_*` macros at the bottom of this file from explicit
//! `(left, right) => output` tables covering all 256 mask pairs; the shared
//! generic bodies above them do the actual lane work. Mask tests inside
//! those bodies are on const parameters and fold away per instantiation, so
//! an instantiated operator touches only the lanes and kernels its masks
//! require.
//!
//! The product table is the closed form of [`product_mask`]; the sum table
//! is the bitwise OR of the operand masks. Both are checked against their
//! closed forms by debug assertions and by the crate's tests.

use std::ops::{Add, AddAssign, Mul, Neg, Not, Sub, SubAssign};

use crate::entity::{Entity, Mask, Partitions};
use crate::gp;
use crate::simd::F32x4;

// ---------------------------------------------------------------------------
// Same-shape unary operators.
// ---------------------------------------------------------------------------

/// Reverse: flips the sign of every grade-2 and grade-3 blade.
///
/// In lane terms that is slots 1..3 of L1 and L2 (slot 0 holds the scalar
/// and the pseudoscalar, grades 0 and 4) and all of L3. The same sign
/// constant serves L1 and L2 because both keep their even-grade exception
/// in slot 0.
impl<const PM: u8> Not for Entity<PM>
where
    Mask<PM>: Partitions,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        let mut out = self;
        let flip = F32x4::new(1.0, -1.0, -1.0, -1.0);
        if PM & 0b0010 != 0 {
            let p1 = out.part(1) * flip;
            *out.part_mut(1) = p1;
        }
        if PM & 0b0100 != 0 {
            let p2 = out.part(2) * flip;
            *out.part_mut(2) = p2;
        }
        if PM & 0b1000 != 0 {
            let p3 = -out.part(3);
            *out.part_mut(3) = p3;
        }
        out
    }
}

impl<const PM: u8> Neg for Entity<PM>
where
    Mask<PM>: Partitions,
{
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        for lane in self.as_lanes_mut() {
            *lane = -*lane;
        }
        self
    }
}

/// Uniform scaling of every stored blade.
impl<const PM: u8> Mul<f32> for Entity<PM>
where
    Mask<PM>: Partitions,
{
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: f32) -> Self {
        let s = F32x4::splat(rhs);
        for lane in self.as_lanes_mut() {
            *lane = *lane * s;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Shared bodies.
// ---------------------------------------------------------------------------

/// Presence mask of the geometric product of entities with masks `m1` and
/// `m2`: a lane is present in the output exactly when some stored lane pair
/// has a kernel writing to it.
pub const fn product_mask(m1: u8, m2: u8) -> u8 {
    let (a0, a1) = (m1 & 0b0001 != 0, m1 & 0b0010 != 0);
    let (a2, a3) = (m1 & 0b0100 != 0, m1 & 0b1000 != 0);
    let (b0, b1) = (m2 & 0b0001 != 0, m2 & 0b0010 != 0);
    let (b2, b3) = (m2 & 0b0100 != 0, m2 & 0b1000 != 0);

    // L0 and L3 are written by the same set of pairs.
    let l0 = (a0 && (b1 || b2))
        || ((a1 || a2) && b0)
        || (a1 && b3)
        || (a3 && b1)
        || (a2 && b3)
        || (a3 && b2);
    let l1 = (a0 && b0) || (a1 && b1) || (a3 && b3) || (a0 && b3) || (a3 && b0);
    let l2 = (a0 && b0)
        || (a3 && b3)
        || (a1 && b2)
        || (a2 && b1)
        || (a0 && b3)
        || (a3 && b0);

    (l0 as u8) | ((l1 as u8) << 1) | ((l2 as u8) << 2) | ((l0 as u8) << 3)
}

/// Lane-wise sum or difference. `M3` must be `M1 | M2`: lanes stored on both
/// sides combine, lanes stored on one side copy across (sign-flipped for a
/// right-only lane under subtraction).
#[inline(always)]
fn add_sub<const M1: u8, const M2: u8, const M3: u8, const SUB: bool>(
    lhs: &Entity<M1>,
    rhs: &Entity<M2>,
) -> Entity<M3>
where
    Mask<M1>: Partitions,
    Mask<M2>: Partitions,
    Mask<M3>: Partitions,
{
    debug_assert!(M3 == M1 | M2);
    let mut full = [F32x4::zero(); 4];
    for lane in 0..4 {
        let bit = 1u8 << lane;
        full[lane] = match (M1 & bit != 0, M2 & bit != 0) {
            (true, true) => {
                if SUB {
                    lhs.part(lane) - rhs.part(lane)
                } else {
                    lhs.part(lane) + rhs.part(lane)
                }
            }
            (true, false) => lhs.part(lane),
            (false, true) => {
                if SUB {
                    -rhs.part(lane)
                } else {
                    rhs.part(lane)
                }
            }
            (false, false) => continue,
        };
    }
    Entity::from_lanes(full)
}

/// In-place sum or difference for `M2 ⊆ M1`: the left operand's shape
/// already covers the right's, so its lanes update without reshaping.
#[inline(always)]
fn add_sub_assign<const M1: u8, const M2: u8, const SUB: bool>(
    lhs: &mut Entity<M1>,
    rhs: &Entity<M2>,
) where
    Mask<M1>: Partitions,
    Mask<M2>: Partitions,
{
    debug_assert!(M1 | M2 == M1);
    for lane in 0..4 {
        if M2 & (1u8 << lane) != 0 {
            if SUB {
                *lhs.part_mut(lane) -= rhs.part(lane);
            } else {
                *lhs.part_mut(lane) += rhs.part(lane);
            }
        }
    }
}

/// Geometric product dispatcher: one kernel call per stored lane pair,
/// accumulated into the output lanes each kernel targets. Pair (2,2) has no
/// kernel; every product of two L2 blades vanishes on the degenerate
/// generator.
#[inline(always)]
fn gp_entity<const M1: u8, const M2: u8, const M3: u8>(
    lhs: &Entity<M1>,
    rhs: &Entity<M2>,
) -> Entity<M3>
where
    Mask<M1>: Partitions,
    Mask<M2>: Partitions,
    Mask<M3>: Partitions,
{
    debug_assert!(M3 == product_mask(M1, M2));
    let mut acc = [F32x4::zero(); 4];

    if M1 & 0b0001 != 0 {
        if M2 & 0b0001 != 0 {
            let (p1, p2) = gp::gp00(lhs.part(0), rhs.part(0));
            acc[1] += p1;
            acc[2] += p2;
        }
        if M2 & 0b0010 != 0 {
            let (p0, p3) = gp::gp01(lhs.part(0), rhs.part(1));
            acc[0] += p0;
            acc[3] += p3;
        }
        if M2 & 0b0100 != 0 {
            let (p0, p3) = gp::gp02(lhs.part(0), rhs.part(2));
            acc[0] += p0;
            acc[3] += p3;
        }
        if M2 & 0b1000 != 0 {
            let (p1, p2) = gp::gp03(lhs.part(0), rhs.part(3));
            acc[1] += p1;
            acc[2] += p2;
        }
    }

    if M1 & 0b0010 != 0 {
        if M2 & 0b0001 != 0 {
            let (p0, p3) = gp::gp10(lhs.part(1), rhs.part(0));
            acc[0] += p0;
            acc[3] += p3;
        }
        if M2 & 0b0010 != 0 {
            acc[1] += gp::gp11(lhs.part(1), rhs.part(1));
        }
        if M2 & 0b0100 != 0 {
            acc[2] += gp::gp12(lhs.part(1), rhs.part(2));
        }
        if M2 & 0b1000 != 0 {
            let (p0, p3) = gp::gp13(lhs.part(1), rhs.part(3));
            acc[0] += p0;
            acc[3] += p3;
        }
    }

    if M1 & 0b0100 != 0 {
        if M2 & 0b0001 != 0 {
            let (p0, p3) = gp::gp20(lhs.part(2), rhs.part(0));
            acc[0] += p0;
            acc[3] += p3;
        }
        if M2 & 0b0010 != 0 {
            acc[2] += gp::gp21(lhs.part(2), rhs.part(1));
        }
        if M2 & 0b1000 != 0 {
            let (p0, p3) = gp::gp23(lhs.part(2), rhs.part(3));
            acc[0] += p0;
            acc[3] += p3;
        }
    }

    if M1 & 0b1000 != 0 {
        if M2 & 0b0001 != 0 {
            let (p1, p2) = gp::gp30(lhs.part(3), rhs.part(0));
            acc[1] += p1;
            acc[2] += p2;
        }
        if M2 & 0b0010 != 0 {
            let (p0, p3) = gp::gp31(lhs.part(3), rhs.part(1));
            acc[0] += p0;
            acc[3] += p3;
        }
        if M2 & 0b0100 != 0 {
            let (p0, p3) = gp::gp32(lhs.part(3), rhs.part(2));
            acc[0] += p0;
            acc[3] += p3;
        }
        if M2 & 0b1000 != 0 {
            let (p1, p2) = gp::gp33(lhs.part(3), rhs.part(3));
            acc[1] += p1;
            acc[2] += p2;
        }
    }

    Entity::from_lanes(acc)
}

// ---------------------------------------------------------------------------
// Per-mask-pair operator impls.
// ---------------------------------------------------------------------------

macro_rules! impl_add_sub {
    ($(($m1:literal, $m2:literal) => $m3:literal),+ $(,)?) => {$(
        impl Add<Entity<$m2>> for Entity<$m1> {
            type Output = Entity<$m3>;
            #[inline]
            fn add(self, rhs: Entity<$m2>) -> Entity<$m3> {
                add_sub::<$m1, $m2, $m3, false>(&self, &rhs)
            }
        }

        impl Sub<Entity<$m2>> for Entity<$m1> {
            type Output = Entity<$m3>;
            #[inline]
            fn sub(self, rhs: Entity<$m2>) -> Entity<$m3> {
                add_sub::<$m1, $m2, $m3, true>(&self, &rhs)
            }
        }
    )+}
}

macro_rules! impl_add_sub_assign {
    ($(($m1:literal, $m2:literal)),+ $(,)?) => {$(
        impl AddAssign<Entity<$m2>> for Entity<$m1> {
            #[inline]
            fn add_assign(&mut self, rhs: Entity<$m2>) {
                add_sub_assign::<$m1, $m2, false>(self, &rhs)
            }
        }

        impl SubAssign<Entity<$m2>> for Entity<$m1> {
            #[inline]
            fn sub_assign(&mut self, rhs: Entity<$m2>) {
                add_sub_assign::<$m1, $m2, true>(self, &rhs)
            }
        }
    )+}
}

macro_rules! impl_gp {
    ($(($m1:literal, $m2:literal) => $m3:literal),+ $(,)?) => {$(
        impl Mul<Entity<$m2>> for Entity<$m1> {
            type Output = Entity<$m3>;
            #[inline]
            fn mul(self, rhs: Entity<$m2>) -> Entity<$m3> {
                gp_entity::<$m1, $m2, $m3>(&self, &rhs)
            }
        }
    )+}
}

impl_add_sub! {
    (0b0000, 0b0000) => 0b0000, (0b0000, 0b0001) => 0b0001, (0b0000, 0b0010) => 0b0010, (0b0000, 0b0011) => 0b0011,
    (0b0000, 0b0100) => 0b0100, (0b0000, 0b0101) => 0b0101, (0b0000, 0b0110) => 0b0110, (0b0000, 0b0111) => 0b0111,
    (0b0000, 0b1000) => 0b1000, (0b0000, 0b1001) => 0b1001, (0b0000, 0b1010) => 0b1010, (0b0000, 0b1011) => 0b1011,
    (0b0000, 0b1100) => 0b1100, (0b0000, 0b1101) => 0b1101, (0b0000, 0b1110) => 0b1110, (0b0000, 0b1111) => 0b1111,
    (0b0001, 0b0000) => 0b0001, (0b0001, 0b0001) => 0b0001, (0b0001, 0b0010) => 0b0011, (0b0001, 0b0011) => 0b0011,
    (0b0001, 0b0100) => 0b0101, (0b0001, 0b0101) => 0b0101, (0b0001, 0b0110) => 0b0111, (0b0001, 0b0111) => 0b0111,
    (0b0001, 0b1000) => 0b1001, (0b0001, 0b1001) => 0b1001, (0b0001, 0b1010) => 0b1011, (0b0001, 0b1011) => 0b1011,
    (0b0001, 0b1100) => 0b1101, (0b0001, 0b1101) => 0b1101, (0b0001, 0b1110) => 0b1111, (0b0001, 0b1111) => 0b1111,
    (0b0010, 0b0000) => 0b0010, (0b0010, 0b0001) => 0b0011, (0b0010, 0b0010) => 0b0010, (0b0010, 0b0011) => 0b0011,
    (0b0010, 0b0100) => 0b0110, (0b0010, 0b0101) => 0b0111, (0b0010, 0b0110) => 0b0110, (0b0010, 0b0111) => 0b0111,
    (0b0010, 0b1000) => 0b1010, (0b0010, 0b1001) => 0b1011, (0b0010, 0b1010) => 0b1010, (0b0010, 0b1011) => 0b1011,
    (0b0010, 0b1100) => 0b1110, (0b0010, 0b1101) => 0b1111, (0b0010, 0b1110) => 0b1110, (0b0010, 0b1111) => 0b1111,
    (0b0011, 0b0000) => 0b0011, (0b0011, 0b0001) => 0b0011, (0b0011, 0b0010) => 0b0011, (0b0011, 0b0011) => 0b0011,
    (0b0011, 0b0100) => 0b0111, (0b0011, 0b0101) => 0b0111, (0b0011, 0b0110) => 0b0111, (0b0011, 0b0111) => 0b0111,
    (0b0011, 0b1000) => 0b1011, (0b0011, 0b1001) => 0b1011, (0b0011, 0b1010) => 0b1011, (0b0011, 0b1011) => 0b1011,
    (0b0011, 0b1100) => 0b1111, (0b0011, 0b1101) => 0b1111, (0b0011, 0b1110) => 0b1111, (0b0011, 0b1111) => 0b1111,
    (0b0100, 0b0000) => 0b0100, (0b0100, 0b0001) => 0b0101, (0b0100, 0b0010) => 0b0110, (0b0100, 0b0011) => 0b0111,
    (0b0100, 0b0100) => 0b0100, (0b0100, 0b0101) => 0b0101, (0b0100, 0b0110) => 0b0110, (0b0100, 0b0111) => 0b0111,
    (0b0100, 0b1000) => 0b1100, (0b0100, 0b1001) => 0b1101, (0b0100, 0b1010) => 0b1110, (0b0100, 0b1011) => 0b1111,
    (0b0100, 0b1100) => 0b1100, (0b0100, 0b1101) => 0b1101, (0b0100, 0b1110) => 0b1110, (0b0100, 0b1111) => 0b1111,
    (0b0101, 0b0000) => 0b0101, (0b0101, 0b0001) => 0b0101, (0b0101, 0b0010) => 0b0111, (0b0101, 0b0011) => 0b0111,
    (0b0101, 0b0100) => 0b0101, (0b0101, 0b0101) => 0b0101, (0b0101, 0b0110) => 0b0111, (0b0101, 0b0111) => 0b0111,
    (0b0101, 0b1000) => 0b1101, (0b0101, 0b1001) => 0b1101, (0b0101, 0b1010) => 0b1111, (0b0101, 0b1011) => 0b1111,
    (0b0101, 0b1100) => 0b1101, (0b0101, 0b1101) => 0b1101, (0b0101, 0b1110) => 0b1111, (0b0101, 0b1111) => 0b1111,
    (0b0110, 0b0000) => 0b0110, (0b0110, 0b0001) => 0b0111, (0b0110, 0b0010) => 0b0110, (0b0110, 0b0011) => 0b0111,
    (0b0110, 0b0100) => 0b0110, (0b0110, 0b0101) => 0b0111, (0b0110, 0b0110) => 0b0110, (0b0110, 0b0111) => 0b0111,
    (0b0110, 0b1000) => 0b1110, (0b0110, 0b1001) => 0b1111, (0b0110, 0b1010) => 0b1110, (0b0110, 0b1011) => 0b1111,
    (0b0110, 0b1100) => 0b1110, (0b0110, 0b1101) => 0b1111, (0b0110, 0b1110) => 0b1110, (0b0110, 0b1111) => 0b1111,
    (0b0111, 0b0000) => 0b0111, (0b0111, 0b0001) => 0b0111, (0b0111, 0b0010) => 0b0111, (0b0111, 0b0011) => 0b0111,
    (0b0111, 0b0100) => 0b0111, (0b0111, 0b0101) => 0b0111, (0b0111, 0b0110) => 0b0111, (0b0111, 0b0111) => 0b0111,
    (0b0111, 0b1000) => 0b1111, (0b0111, 0b1001) => 0b1111, (0b0111, 0b1010) => 0b1111, (0b0111, 0b1011) => 0b1111,
    (0b0111, 0b1100) => 0b1111, (0b0111, 0b1101) => 0b1111, (0b0111, 0b1110) => 0b1111, (0b0111, 0b1111) => 0b1111,
    (0b1000, 0b0000) => 0b1000, (0b1000, 0b0001) => 0b1001, (0b1000, 0b0010) => 0b1010, (0b1000, 0b0011) => 0b1011,
    (0b1000, 0b0100) => 0b1100, (0b1000, 0b0101) => 0b1101, (0b1000, 0b0110) => 0b1110, (0b1000, 0b0111) => 0b1111,
    (0b1000, 0b1000) => 0b1000, (0b1000, 0b1001) => 0b1001, (0b1000, 0b1010) => 0b1010, (0b1000, 0b1011) => 0b1011,
    (0b1000, 0b1100) => 0b1100, (0b1000, 0b1101) => 0b1101, (0b1000, 0b1110) => 0b1110, (0b1000, 0b1111) => 0b1111,
    (0b1001, 0b0000) => 0b1001, (0b1001, 0b0001) => 0b1001, (0b1001, 0b0010) => 0b1011, (0b1001, 0b0011) => 0b1011,
    (0b1001, 0b0100) => 0b1101, (0b1001, 0b0101) => 0b1101, (0b1001, 0b0110) => 0b1111, (0b1001, 0b0111) => 0b1111,
    (0b1001, 0b1000) => 0b1001, (0b1001, 0b1001) => 0b1001, (0b1001, 0b1010) => 0b1011, (0b1001, 0b1011) => 0b1011,
    (0b1001, 0b1100) => 0b1101, (0b1001, 0b1101) => 0b1101, (0b1001, 0b1110) => 0b1111, (0b1001, 0b1111) => 0b1111,
    (0b1010, 0b0000) => 0b1010, (0b1010, 0b0001) => 0b1011, (0b1010, 0b0010) => 0b1010, (0b1010, 0b0011) => 0b1011,
    (0b1010, 0b0100) => 0b1110, (0b1010, 0b0101) => 0b1111, (0b1010, 0b0110) => 0b1110, (0b1010, 0b0111) => 0b1111,
    (0b1010, 0b1000) => 0b1010, (0b1010, 0b1001) => 0b1011, (0b1010, 0b1010) => 0b1010, (0b1010, 0b1011) => 0b1011,
    (0b1010, 0b1100) => 0b1110, (0b1010, 0b1101) => 0b1111, (0b1010, 0b1110) => 0b1110, (0b1010, 0b1111) => 0b1111,
    (0b1011, 0b0000) => 0b1011, (0b1011, 0b0001) => 0b1011, (0b1011, 0b0010) => 0b1011, (0b1011, 0b0011) => 0b1011,
    (0b1011, 0b0100) => 0b1111, (0b1011, 0b0101) => 0b1111, (0b1011, 0b0110) => 0b1111, (0b1011, 0b0111) => 0b1111,
    (0b1011, 0b1000) => 0b1011, (0b1011, 0b1001) => 0b1011, (0b1011, 0b1010) => 0b1011, (0b1011, 0b1011) => 0b1011,
    (0b1011, 0b1100) => 0b1111, (0b1011, 0b1101) => 0b1111, (0b1011, 0b1110) => 0b1111, (0b1011, 0b1111) => 0b1111,
    (0b1100, 0b0000) => 0b1100, (0b1100, 0b0001) => 0b1101, (0b1100, 0b0010) => 0b1110, (0b1100, 0b0011) => 0b1111,
    (0b1100, 0b0100) => 0b1100, (0b1100, 0b0101) => 0b1101, (0b1100, 0b0110) => 0b1110, (0b1100, 0b0111) => 0b1111,
    (0b1100, 0b1000) => 0b1100, (0b1100, 0b1001) => 0b1101, (0b1100, 0b1010) => 0b1110, (0b1100, 0b1011) => 0b1111,
    (0b1100, 0b1100) => 0b1100, (0b1100, 0b1101) => 0b1101, (0b1100, 0b1110) => 0b1110, (0b1100, 0b1111) => 0b1111,
    (0b1101, 0b0000) => 0b1101, (0b1101, 0b0001) => 0b1101, (0b1101, 0b0010) => 0b1111, (0b1101, 0b0011) => 0b1111,
    (0b1101, 0b0100) => 0b1101, (0b1101, 0b0101) => 0b1101, (0b1101, 0b0110) => 0b1111, (0b1101, 0b0111) => 0b1111,
    (0b1101, 0b1000) => 0b1101, (0b1101, 0b1001) => 0b1101, (0b1101, 0b1010) => 0b1111, (0b1101, 0b1011) => 0b1111,
    (0b1101, 0b1100) => 0b1101, (0b1101, 0b1101) => 0b1101, (0b1101, 0b1110) => 0b1111, (0b1101, 0b1111) => 0b1111,
    (0b1110, 0b0000) => 0b1110, (0b1110, 0b0001) => 0b1111, (0b1110, 0b0010) => 0b1110, (0b1110, 0b0011) => 0b1111,
    (0b1110, 0b0100) => 0b1110, (0b1110, 0b0101) => 0b1111, (0b1110, 0b0110) => 0b1110, (0b1110, 0b0111) => 0b1111,
    (0b1110, 0b1000) => 0b1110, (0b1110, 0b1001) => 0b1111, (0b1110, 0b1010) => 0b1110, (0b1110, 0b1011) => 0b1111,
    (0b1110, 0b1100) => 0b1110, (0b1110, 0b1101) => 0b1111, (0b1110, 0b1110) => 0b1110, (0b1110, 0b1111) => 0b1111,
    (0b1111, 0b0000) => 0b1111, (0b1111, 0b0001) => 0b1111, (0b1111, 0b0010) => 0b1111, (0b1111, 0b0011) => 0b1111,
    (0b1111, 0b0100) => 0b1111, (0b1111, 0b0101) => 0b1111, (0b1111, 0b0110) => 0b1111, (0b1111, 0b0111) => 0b1111,
    (0b1111, 0b1000) => 0b1111, (0b1111, 0b1001) => 0b1111, (0b1111, 0b1010) => 0b1111, (0b1111, 0b1011) => 0b1111,
    (0b1111, 0b1100) => 0b1111, (0b1111, 0b1101) => 0b1111, (0b1111, 0b1110) => 0b1111, (0b1111, 0b1111) => 0b1111,
}

impl_add_sub_assign! {
    (0b0000, 0b0000), (0b0001, 0b0000), (0b0001, 0b0001), (0b0010, 0b0000),
    (0b0010, 0b0010), (0b0011, 0b0000), (0b0011, 0b0001), (0b0011, 0b0010),
    (0b0011, 0b0011), (0b0100, 0b0000), (0b0100, 0b0100), (0b0101, 0b0000),
    (0b0101, 0b0001), (0b0101, 0b0100), (0b0101, 0b0101), (0b0110, 0b0000),
    (0b0110, 0b0010), (0b0110, 0b0100), (0b0110, 0b0110), (0b0111, 0b0000),
    (0b0111, 0b0001), (0b0111, 0b0010), (0b0111, 0b0011), (0b0111, 0b0100),
    (0b0111, 0b0101), (0b0111, 0b0110), (0b0111, 0b0111), (0b1000, 0b0000),
    (0b1000, 0b1000), (0b1001, 0b0000), (0b1001, 0b0001), (0b1001, 0b1000),
    (0b1001, 0b1001), (0b1010, 0b0000), (0b1010, 0b0010), (0b1010, 0b1000),
    (0b1010, 0b1010), (0b1011, 0b0000), (0b1011, 0b0001), (0b1011, 0b0010),
    (0b1011, 0b0011), (0b1011, 0b1000), (0b1011, 0b1001), (0b1011, 0b1010),
    (0b1011, 0b1011), (0b1100, 0b0000), (0b1100, 0b0100), (0b1100, 0b1000),
    (0b1100, 0b1100), (0b1101, 0b0000), (0b1101, 0b0001), (0b1101, 0b0100),
    (0b1101, 0b0101), (0b1101, 0b1000), (0b1101, 0b1001), (0b1101, 0b1100),
    (0b1101, 0b1101), (0b1110, 0b0000), (0b1110, 0b0010), (0b1110, 0b0100),
    (0b1110, 0b0110), (0b1110, 0b1000), (0b1110, 0b1010), (0b1110, 0b1100),
    (0b1110, 0b1110), (0b1111, 0b0000), (0b1111, 0b0001), (0b1111, 0b0010),
    (0b1111, 0b0011), (0b1111, 0b0100), (0b1111, 0b0101), (0b1111, 0b0110),
    (0b1111, 0b0111), (0b1111, 0b1000), (0b1111, 0b1001), (0b1111, 0b1010),
    (0b1111, 0b1011), (0b1111, 0b1100), (0b1111, 0b1101), (0b1111, 0b1110),
    (0b1111, 0b1111),
}

impl_gp! {
    (0b0000, 0b0000) => 0b0000, (0b0000, 0b0001) => 0b0000, (0b0000, 0b0010) => 0b0000, (0b0000, 0b0011) => 0b0000,
    (0b0000, 0b0100) => 0b0000, (0b0000, 0b0101) => 0b0000, (0b0000, 0b0110) => 0b0000, (0b0000, 0b0111) => 0b0000,
    (0b0000, 0b1000) => 0b0000, (0b0000, 0b1001) => 0b0000, (0b0000, 0b1010) => 0b0000, (0b0000, 0b1011) => 0b0000,
    (0b0000, 0b1100) => 0b0000, (0b0000, 0b1101) => 0b0000, (0b0000, 0b1110) => 0b0000, (0b0000, 0b1111) => 0b0000,
    (0b0001, 0b0000) => 0b0000, (0b0001, 0b0001) => 0b0110, (0b0001, 0b0010) => 0b1001, (0b0001, 0b0011) => 0b1111,
    (0b0001, 0b0100) => 0b1001, (0b0001, 0b0101) => 0b1111, (0b0001, 0b0110) => 0b1001, (0b0001, 0b0111) => 0b1111,
    (0b0001, 0b1000) => 0b0110, (0b0001, 0b1001) => 0b0110, (0b0001, 0b1010) => 0b1111, (0b0001, 0b1011) => 0b1111,
    (0b0001, 0b1100) => 0b1111, (0b0001, 0b1101) => 0b1111, (0b0001, 0b1110) => 0b1111, (0b0001, 0b1111) => 0b1111,
    (0b0010, 0b0000) => 0b0000, (0b0010, 0b0001) => 0b1001, (0b0010, 0b0010) => 0b0010, (0b0010, 0b0011) => 0b1011,
    (0b0010, 0b0100) => 0b0100, (0b0010, 0b0101) => 0b1101, (0b0010, 0b0110) => 0b0110, (0b0010, 0b0111) => 0b1111,
    (0b0010, 0b1000) => 0b1001, (0b0010, 0b1001) => 0b1001, (0b0010, 0b1010) => 0b1011, (0b0010, 0b1011) => 0b1011,
    (0b0010, 0b1100) => 0b1101, (0b0010, 0b1101) => 0b1101, (0b0010, 0b1110) => 0b1111, (0b0010, 0b1111) => 0b1111,
    (0b0011, 0b0000) => 0b0000, (0b0011, 0b0001) => 0b1111, (0b0011, 0b0010) => 0b1011, (0b0011, 0b0011) => 0b1111,
    (0b0011, 0b0100) => 0b1101, (0b0011, 0b0101) => 0b1111, (0b0011, 0b0110) => 0b1111, (0b0011, 0b0111) => 0b1111,
    (0b0011, 0b1000) => 0b1111, (0b0011, 0b1001) => 0b1111, (0b0011, 0b1010) => 0b1111, (0b0011, 0b1011) => 0b1111,
    (0b0011, 0b1100) => 0b1111, (0b0011, 0b1101) => 0b1111, (0b0011, 0b1110) => 0b1111, (0b0011, 0b1111) => 0b1111,
    (0b0100, 0b0000) => 0b0000, (0b0100, 0b0001) => 0b1001, (0b0100, 0b0010) => 0b0100, (0b0100, 0b0011) => 0b1101,
    (0b0100, 0b0100) => 0b0000, (0b0100, 0b0101) => 0b1001, (0b0100, 0b0110) => 0b0100, (0b0100, 0b0111) => 0b1101,
    (0b0100, 0b1000) => 0b1001, (0b0100, 0b1001) => 0b1001, (0b0100, 0b1010) => 0b1101, (0b0100, 0b1011) => 0b1101,
    (0b0100, 0b1100) => 0b1001, (0b0100, 0b1101) => 0b1001, (0b0100, 0b1110) => 0b1101, (0b0100, 0b1111) => 0b1101,
    (0b0101, 0b0000) => 0b0000, (0b0101, 0b0001) => 0b1111, (0b0101, 0b0010) => 0b1101, (0b0101, 0b0011) => 0b1111,
    (0b0101, 0b0100) => 0b1001, (0b0101, 0b0101) => 0b1111, (0b0101, 0b0110) => 0b1101, (0b0101, 0b0111) => 0b1111,
    (0b0101, 0b1000) => 0b1111, (0b0101, 0b1001) => 0b1111, (0b0101, 0b1010) => 0b1111, (0b0101, 0b1011) => 0b1111,
    (0b0101, 0b1100) => 0b1111, (0b0101, 0b1101) => 0b1111, (0b0101, 0b1110) => 0b1111, (0b0101, 0b1111) => 0b1111,
    (0b0110, 0b0000) => 0b0000, (0b0110, 0b0001) => 0b1001, (0b0110, 0b0010) => 0b0110, (0b0110, 0b0011) => 0b1111,
    (0b0110, 0b0100) => 0b0100, (0b0110, 0b0101) => 0b1101, (0b0110, 0b0110) => 0b0110, (0b0110, 0b0111) => 0b1111,
    (0b0110, 0b1000) => 0b1001, (0b0110, 0b1001) => 0b1001, (0b0110, 0b1010) => 0b1111, (0b0110, 0b1011) => 0b1111,
    (0b0110, 0b1100) => 0b1101, (0b0110, 0b1101) => 0b1101, (0b0110, 0b1110) => 0b1111, (0b0110, 0b1111) => 0b1111,
    (0b0111, 0b0000) => 0b0000, (0b0111, 0b0001) => 0b1111, (0b0111, 0b0010) => 0b1111, (0b0111, 0b0011) => 0b1111,
    (0b0111, 0b0100) => 0b1101, (0b0111, 0b0101) => 0b1111, (0b0111, 0b0110) => 0b1111, (0b0111, 0b0111) => 0b1111,
    (0b0111, 0b1000) => 0b1111, (0b0111, 0b1001) => 0b1111, (0b0111, 0b1010) => 0b1111, (0b0111, 0b1011) => 0b1111,
    (0b0111, 0b1100) => 0b1111, (0b0111, 0b1101) => 0b1111, (0b0111, 0b1110) => 0b1111, (0b0111, 0b1111) => 0b1111,
    (0b1000, 0b0000) => 0b0000, (0b1000, 0b0001) => 0b0110, (0b1000, 0b0010) => 0b1001, (0b1000, 0b0011) => 0b1111,
    (0b1000, 0b0100) => 0b1001, (0b1000, 0b0101) => 0b1111, (0b1000, 0b0110) => 0b1001, (0b1000, 0b0111) => 0b1111,
    (0b1000, 0b1000) => 0b0110, (0b1000, 0b1001) => 0b0110, (0b1000, 0b1010) => 0b1111, (0b1000, 0b1011) => 0b1111,
    (0b1000, 0b1100) => 0b1111, (0b1000, 0b1101) => 0b1111, (0b1000, 0b1110) => 0b1111, (0b1000, 0b1111) => 0b1111,
    (0b1001, 0b0000) => 0b0000, (0b1001, 0b0001) => 0b0110, (0b1001, 0b0010) => 0b1001, (0b1001, 0b0011) => 0b1111,
    (0b1001, 0b0100) => 0b1001, (0b1001, 0b0101) => 0b1111, (0b1001, 0b0110) => 0b1001, (0b1001, 0b0111) => 0b1111,
    (0b1001, 0b1000) => 0b0110, (0b1001, 0b1001) => 0b0110, (0b1001, 0b1010) => 0b1111, (0b1001, 0b1011) => 0b1111,
    (0b1001, 0b1100) => 0b1111, (0b1001, 0b1101) => 0b1111, (0b1001, 0b1110) => 0b1111, (0b1001, 0b1111) => 0b1111,
    (0b1010, 0b0000) => 0b0000, (0b1010, 0b0001) => 0b1111, (0b1010, 0b0010) => 0b1011, (0b1010, 0b0011) => 0b1111,
    (0b1010, 0b0100) => 0b1101, (0b1010, 0b0101) => 0b1111, (0b1010, 0b0110) => 0b1111, (0b1010, 0b0111) => 0b1111,
    (0b1010, 0b1000) => 0b1111, (0b1010, 0b1001) => 0b1111, (0b1010, 0b1010) => 0b1111, (0b1010, 0b1011) => 0b1111,
    (0b1010, 0b1100) => 0b1111, (0b1010, 0b1101) => 0b1111, (0b1010, 0b1110) => 0b1111, (0b1010, 0b1111) => 0b1111,
    (0b1011, 0b0000) => 0b0000, (0b1011, 0b0001) => 0b1111, (0b1011, 0b0010) => 0b1011, (0b1011, 0b0011) => 0b1111,
    (0b1011, 0b0100) => 0b1101, (0b1011, 0b0101) => 0b1111, (0b1011, 0b0110) => 0b1111, (0b1011, 0b0111) => 0b1111,
    (0b1011, 0b1000) => 0b1111, (0b1011, 0b1001) => 0b1111, (0b1011, 0b1010) => 0b1111, (0b1011, 0b1011) => 0b1111,
    (0b1011, 0b1100) => 0b1111, (0b1011, 0b1101) => 0b1111, (0b1011, 0b1110) => 0b1111, (0b1011, 0b1111) => 0b1111,
    (0b1100, 0b0000) => 0b0000, (0b1100, 0b0001) => 0b1111, (0b1100, 0b0010) => 0b1101, (0b1100, 0b0011) => 0b1111,
    (0b1100, 0b0100) => 0b1001, (0b1100, 0b0101) => 0b1111, (0b1100, 0b0110) => 0b1101, (0b1100, 0b0111) => 0b1111,
    (0b1100, 0b1000) => 0b1111, (0b1100, 0b1001) => 0b1111, (0b1100, 0b1010) => 0b1111, (0b1100, 0b1011) => 0b1111,
    (0b1100, 0b1100) => 0b1111, (0b1100, 0b1101) => 0b1111, (0b1100, 0b1110) => 0b1111, (0b1100, 0b1111) => 0b1111,
    (0b1101, 0b0000) => 0b0000, (0b1101, 0b0001) => 0b1111, (0b1101, 0b0010) => 0b1101, (0b1101, 0b0011) => 0b1111,
    (0b1101, 0b0100) => 0b1001, (0b1101, 0b0101) => 0b1111, (0b1101, 0b0110) => 0b1101, (0b1101, 0b0111) => 0b1111,
    (0b1101, 0b1000) => 0b1111, (0b1101, 0b1001) => 0b1111, (0b1101, 0b1010) => 0b1111, (0b1101, 0b1011) => 0b1111,
    (0b1101, 0b1100) => 0b1111, (0b1101, 0b1101) => 0b1111, (0b1101, 0b1110) => 0b1111, (0b1101, 0b1111) => 0b1111,
    (0b1110, 0b0000) => 0b0000, (0b1110, 0b0001) => 0b1111, (0b1110, 0b0010) => 0b1111, (0b1110, 0b0011) => 0b1111,
    (0b1110, 0b0100) => 0b1101, (0b1110, 0b0101) => 0b1111, (0b1110, 0b0110) => 0b1111, (0b1110, 0b0111) => 0b1111,
    (0b1110, 0b1000) => 0b1111, (0b1110, 0b1001) => 0b1111, (0b1110, 0b1010) => 0b1111, (0b1110, 0b1011) => 0b1111,
    (0b1110, 0b1100) => 0b1111, (0b1110, 0b1101) => 0b1111, (0b1110, 0b1110) => 0b1111, (0b1110, 0b1111) => 0b1111,
    (0b1111, 0b0000) => 0b0000, (0b1111, 0b0001) => 0b1111, (0b1111, 0b0010) => 0b1111, (0b1111, 0b0011) => 0b1111,
    (0b1111, 0b0100) => 0b1101, (0b1111, 0b0101) => 0b1111, (0b1111, 0b0110) => 0b1111, (0b1111, 0b0111) => 0b1111,
    (0b1111, 0b1000) => 0b1111, (0b1111, 0b1001) => 0b1111, (0b1111, 0b1010) => 0b1111, (0b1111, 0b1011) => 0b1111,
    (0b1111, 0b1100) => 0b1111, (0b1111, 0b1101) => 0b1111, (0b1111, 0b1110) => 0b1111, (0b1111, 0b1111) => 0b1111,
}
