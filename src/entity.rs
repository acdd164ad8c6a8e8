//! Mask-partitioned multivector storage.
//!
//! A general element of P(R(3,0,1)) needs 16 floats, but almost every
//! geometric entity occupies a small graded slice of the algebra. The 16
//! basis blades are grouped into four 4-wide lanes,
//!
//! ```text
//!      slot 0 → slot 3
//! L0: (e3, e2, e1, e0)
//! L1: (1, e12, e31, e23)
//! L2: (e0123, e01, e02, e03)
//! L3: (e123, e021, e013, e032)
//! ```
//!
//! and an [`Entity`] stores only the lanes named by a 4-bit presence mask
//! that is part of its type: bit `i` of `PM` set means lane `Li` is stored.
//! A plane is `Entity<0b0001>`, a motor `Entity<0b0110>`, a point
//! `Entity<0b1000>`. Because the mask is a type parameter, products between
//! entities compile down to exactly the lane-pair kernels the two masks
//! require.
//!
//! Within a lane, mixed-grade or mixed-degeneracy slots are deliberate: the
//! scalar sits in L1 slot 0 next to the Euclidean bivectors, the
//! pseudoscalar in L2 slot 0 next to the ideal bivectors, and e0 occupies
//! the top slot of L0. Housing each lane's exception in the same place lets
//! one sign pattern serve several lanes at once: the reverse operator flips
//! slots 1..3 of L1 and L2 with the same constant.
//!
//! Blades whose conventional name reverses the stored orientation
//! (`e13 = -e31`, `e21 = -e12`, `e32 = -e23`, `e10`/`e20`/`e30`) get
//! negating accessors rather than storage of their own.

use std::fmt;

use crate::simd::F32x4;

/// Type-level handle for a 4-bit presence mask.
///
/// [`Partitions`] is implemented on `Mask<PM>` for each of the 16 mask
/// values; the implementation carries the storage array type and the
/// lane-offset table for that mask.
pub struct Mask<const PM: u8>;

/// Storage selection for one presence mask.
///
/// `OFFSETS[i]` is the number of mask bits below bit `i`, i.e. the index of
/// lane `Li` within the packed array when bit `i` is set. The offset of an
/// absent lane is never used.
pub trait Partitions {
    /// Number of stored lanes: `popcount(PM)`.
    const COUNT: usize;
    /// Packed index of each lane.
    const OFFSETS: [usize; 4];
    /// `[F32x4; COUNT]`: exactly the present lanes, 16-byte aligned.
    type Array: Copy + Clone + fmt::Debug + PartialEq + AsRef<[F32x4]> + AsMut<[F32x4]>;

    fn zeroed() -> Self::Array;
    /// Select the present lanes out of a full four-lane block.
    fn pack(full: &[F32x4; 4]) -> Self::Array;
}

macro_rules! impl_partitions {
    ($($mask:literal => $count:literal, [$($off:literal),+], [$($lane:literal),*];)+) => {$(
        impl Partitions for Mask<$mask> {
            const COUNT: usize = $count;
            const OFFSETS: [usize; 4] = [$($off),+];
            type Array = [F32x4; $count];

            #[inline(always)]
            fn zeroed() -> Self::Array {
                [F32x4::zero(); $count]
            }

            #[inline(always)]
            fn pack(_full: &[F32x4; 4]) -> Self::Array {
                [$(_full[$lane]),*]
            }
        }
    )+}
}

impl_partitions! {
    0b0000 => 0, [0, 0, 0, 0], [];
    0b0001 => 1, [0, 1, 1, 1], [0];
    0b0010 => 1, [0, 0, 1, 1], [1];
    0b0011 => 2, [0, 1, 2, 2], [0, 1];
    0b0100 => 1, [0, 0, 0, 1], [2];
    0b0101 => 2, [0, 1, 1, 2], [0, 2];
    0b0110 => 2, [0, 0, 1, 2], [1, 2];
    0b0111 => 3, [0, 1, 2, 3], [0, 1, 2];
    0b1000 => 1, [0, 0, 0, 0], [3];
    0b1001 => 2, [0, 1, 1, 1], [0, 3];
    0b1010 => 2, [0, 0, 1, 1], [1, 3];
    0b1011 => 3, [0, 1, 2, 2], [0, 1, 3];
    0b1100 => 2, [0, 0, 0, 1], [2, 3];
    0b1101 => 3, [0, 1, 1, 2], [0, 2, 3];
    0b1110 => 3, [0, 0, 1, 2], [1, 2, 3];
    0b1111 => 4, [0, 1, 2, 3], [0, 1, 2, 3];
}

/// A multivector storing only the lanes selected by the presence mask `PM`.
///
/// Entities are plain values: copying is a lane-wise copy, there is no heap
/// storage, and every operation is a pure function of its operands. The
/// mask is fixed at the type level and cannot change after construction;
/// operations that produce a different shape (sums, products) return an
/// entity of a different mask type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entity<const PM: u8>
where
    Mask<PM>: Partitions,
{
    parts: <Mask<PM> as Partitions>::Array,
}

impl<const PM: u8> Entity<PM>
where
    Mask<PM>: Partitions,
{
    /// The presence mask, as a value.
    pub const MASK: u8 = PM;

    /// Number of stored lanes.
    pub const LANES: usize = <Mask<PM> as Partitions>::COUNT;

    /// The zero element of this shape.
    #[inline]
    pub fn zero() -> Self {
        Self {
            parts: <Mask<PM> as Partitions>::zeroed(),
        }
    }

    /// Build an entity from a full four-lane block, keeping the lanes this
    /// mask stores and ignoring the rest.
    #[inline]
    pub fn from_lanes(full: [F32x4; 4]) -> Self {
        Self {
            parts: <Mask<PM> as Partitions>::pack(&full),
        }
    }

    /// The presence mask of this entity.
    #[inline]
    pub const fn mask(&self) -> u8 {
        PM
    }

    /// Stored lane for bit `lane` of the mask. Callers guard with a mask
    /// test that the compiler folds per instantiation; the offset of an
    /// absent lane is meaningless and must not be reached.
    #[inline(always)]
    pub(crate) fn part(&self, lane: usize) -> F32x4 {
        self.parts.as_ref()[<Mask<PM> as Partitions>::OFFSETS[lane]]
    }

    #[inline(always)]
    pub(crate) fn part_mut(&mut self, lane: usize) -> &mut F32x4 {
        &mut self.parts.as_mut()[<Mask<PM> as Partitions>::OFFSETS[lane]]
    }

    /// The stored lanes in packed order, lowest mask bit first.
    #[inline]
    pub fn as_lanes(&self) -> &[F32x4] {
        self.parts.as_ref()
    }

    #[inline(always)]
    pub(crate) fn as_lanes_mut(&mut self) -> &mut [F32x4] {
        self.parts.as_mut()
    }
}

impl<const PM: u8> Default for Entity<PM>
where
    Mask<PM>: Partitions,
{
    fn default() -> Self {
        Self::zero()
    }
}

// ---------------------------------------------------------------------------
// Typed lane access.
//
// `lane0()` through `lane3()` exist only on entities whose mask stores the
// lane, so reading an absent lane is a compile error rather than a zero.
// ---------------------------------------------------------------------------

/// Read access to stored lane L0.
pub trait Lane0 {
    fn lane0(&self) -> F32x4;
}

/// Read access to stored lane L1.
pub trait Lane1 {
    fn lane1(&self) -> F32x4;
}

/// Read access to stored lane L2.
pub trait Lane2 {
    fn lane2(&self) -> F32x4;
}

/// Read access to stored lane L3.
pub trait Lane3 {
    fn lane3(&self) -> F32x4;
}

macro_rules! impl_lane_access {
    ($trait:ident, $method:ident, $lane:literal => [$($mask:literal),+]) => {$(
        impl $trait for Entity<$mask> {
            #[inline(always)]
            fn $method(&self) -> F32x4 {
                self.part($lane)
            }
        }
    )+}
}

impl_lane_access!(Lane0, lane0, 0 => [0b0001, 0b0011, 0b0101, 0b0111, 0b1001, 0b1011, 0b1101, 0b1111]);
impl_lane_access!(Lane1, lane1, 1 => [0b0010, 0b0011, 0b0110, 0b0111, 0b1010, 0b1011, 0b1110, 0b1111]);
impl_lane_access!(Lane2, lane2, 2 => [0b0100, 0b0101, 0b0110, 0b0111, 0b1100, 0b1101, 0b1110, 0b1111]);
impl_lane_access!(Lane3, lane3, 3 => [0b1000, 0b1001, 0b1010, 0b1011, 0b1100, 0b1101, 0b1110, 0b1111]);

// ---------------------------------------------------------------------------
// Blade accessors.
//
// One per basis blade, valid on every mask: blades in an absent lane read
// as +0.0. The mask tests below are on the const parameter and fold away
// per instantiation. Not meant for hot loops; pulling single floats out of
// vector registers defeats the layout; they exist for construction checks,
// debugging, and tests.
// ---------------------------------------------------------------------------

impl<const PM: u8> Entity<PM>
where
    Mask<PM>: Partitions,
{
    /// Grade-0 part.
    #[inline]
    pub fn scalar(&self) -> f32 {
        if PM & 0b0010 != 0 {
            self.part(1).extract(0)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e0(&self) -> f32 {
        if PM & 0b0001 != 0 {
            self.part(0).extract(3)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e1(&self) -> f32 {
        if PM & 0b0001 != 0 {
            self.part(0).extract(2)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e2(&self) -> f32 {
        if PM & 0b0001 != 0 {
            self.part(0).extract(1)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e3(&self) -> f32 {
        if PM & 0b0001 != 0 {
            self.part(0).extract(0)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e12(&self) -> f32 {
        if PM & 0b0010 != 0 {
            self.part(1).extract(1)
        } else {
            0.0
        }
    }

    /// `e21 = -e12`.
    #[inline]
    pub fn e21(&self) -> f32 {
        if PM & 0b0010 != 0 {
            -self.part(1).extract(1)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e31(&self) -> f32 {
        if PM & 0b0010 != 0 {
            self.part(1).extract(2)
        } else {
            0.0
        }
    }

    /// `e13 = -e31`.
    #[inline]
    pub fn e13(&self) -> f32 {
        if PM & 0b0010 != 0 {
            -self.part(1).extract(2)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e23(&self) -> f32 {
        if PM & 0b0010 != 0 {
            self.part(1).extract(3)
        } else {
            0.0
        }
    }

    /// `e32 = -e23`.
    #[inline]
    pub fn e32(&self) -> f32 {
        if PM & 0b0010 != 0 {
            -self.part(1).extract(3)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e01(&self) -> f32 {
        if PM & 0b0100 != 0 {
            self.part(2).extract(1)
        } else {
            0.0
        }
    }

    /// `e10 = -e01`.
    #[inline]
    pub fn e10(&self) -> f32 {
        if PM & 0b0100 != 0 {
            -self.part(2).extract(1)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e02(&self) -> f32 {
        if PM & 0b0100 != 0 {
            self.part(2).extract(2)
        } else {
            0.0
        }
    }

    /// `e20 = -e02`.
    #[inline]
    pub fn e20(&self) -> f32 {
        if PM & 0b0100 != 0 {
            -self.part(2).extract(2)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e03(&self) -> f32 {
        if PM & 0b0100 != 0 {
            self.part(2).extract(3)
        } else {
            0.0
        }
    }

    /// `e30 = -e03`.
    #[inline]
    pub fn e30(&self) -> f32 {
        if PM & 0b0100 != 0 {
            -self.part(2).extract(3)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e123(&self) -> f32 {
        if PM & 0b1000 != 0 {
            self.part(3).extract(0)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e021(&self) -> f32 {
        if PM & 0b1000 != 0 {
            self.part(3).extract(1)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e013(&self) -> f32 {
        if PM & 0b1000 != 0 {
            self.part(3).extract(2)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn e032(&self) -> f32 {
        if PM & 0b1000 != 0 {
            self.part(3).extract(3)
        } else {
            0.0
        }
    }

    /// Grade-4 (pseudoscalar) part.
    #[inline]
    pub fn e0123(&self) -> f32 {
        if PM & 0b0100 != 0 {
            self.part(2).extract(0)
        } else {
            0.0
        }
    }
}

impl<const PM: u8> fmt::Display for Entity<PM>
where
    Mask<PM>: Partitions,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let blades: [(f32, &str); 16] = [
            (self.scalar(), "1"),
            (self.e0(), "e0"),
            (self.e1(), "e1"),
            (self.e2(), "e2"),
            (self.e3(), "e3"),
            (self.e01(), "e01"),
            (self.e02(), "e02"),
            (self.e03(), "e03"),
            (self.e12(), "e12"),
            (self.e31(), "e31"),
            (self.e23(), "e23"),
            (self.e021(), "e021"),
            (self.e013(), "e013"),
            (self.e032(), "e032"),
            (self.e123(), "e123"),
            (self.e0123(), "e0123"),
        ];
        let mut wrote = false;
        for (v, name) in blades {
            if v == 0.0 {
                continue;
            }
            if wrote {
                write!(f, " {} ", if v < 0.0 { "-" } else { "+" })?;
                write!(f, "{}", v.abs())?;
            } else {
                write!(f, "{v}")?;
                wrote = true;
            }
            if name != "1" {
                write!(f, "{name}")?;
            }
        }
        if !wrote {
            write!(f, "0")?;
        }
        Ok(())
    }
}
