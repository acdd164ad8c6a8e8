//! Symbolic basis-blade generators.
//!
//! One zero-sized marker per basis blade, convertible into the unit entity
//! of that blade. They make expression-style construction read like the
//! algebra on paper:
//!
//! ```
//! use pga_engine::entity::Entity;
//! use pga_engine::generator::{E12, E23};
//! use pga_engine::line::Line;
//!
//! let l: Line = Entity::from(E12) * 3.0 + Entity::from(E23);
//! assert_eq!(l.e12(), 3.0);
//! assert_eq!(l.e23(), 1.0);
//! ```

use crate::entity::Entity;
use crate::simd::F32x4;

/// Marker for one basis blade; `BLADE` enumerates the 16 blades in lane
/// order (lane * 4 + slot).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Generator<const BLADE: u8>;

macro_rules! generators {
    ($($(#[$doc:meta])* $name:ident: $blade:literal => $mask:literal, $lane:literal, $slot:literal;)+) => {$(
        $(#[$doc])*
        pub const $name: Generator<$blade> = Generator;

        impl From<Generator<$blade>> for Entity<$mask> {
            #[inline]
            fn from(_: Generator<$blade>) -> Self {
                let mut slots = [0.0f32; 4];
                slots[$slot] = 1.0;
                let mut full = [F32x4::zero(); 4];
                full[$lane] = F32x4::from_array(slots);
                Entity::from_lanes(full)
            }
        }
    )+}
}

generators! {
    /// The degenerate generator; squares to 0.
    E0: 3 => 0b0001, 0, 3;
    E1: 2 => 0b0001, 0, 2;
    E2: 1 => 0b0001, 0, 1;
    E3: 0 => 0b0001, 0, 0;
    E12: 5 => 0b0010, 1, 1;
    E31: 6 => 0b0010, 1, 2;
    E23: 7 => 0b0010, 1, 3;
    E01: 9 => 0b0100, 2, 1;
    E02: 10 => 0b0100, 2, 2;
    E03: 11 => 0b0100, 2, 3;
    E123: 12 => 0b1000, 3, 0;
    E021: 13 => 0b1000, 3, 1;
    E013: 14 => 0b1000, 3, 2;
    E032: 15 => 0b1000, 3, 3;
    /// The pseudoscalar e0123; squares to 0.
    I: 8 => 0b0100, 2, 0;
}
