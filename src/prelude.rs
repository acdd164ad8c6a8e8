//! The "everything" import for pga_engine.
//!
//! Brings the entity types, named constructors, and generators in with one
//! glob:
//! ```rust
//! use pga_engine::prelude::*;
//! ```

pub use crate::entity::{Entity, Lane0, Lane1, Lane2, Lane3, Mask, Partitions};
pub use crate::generator::{
    Generator, E0, E01, E013, E02, E021, E03, E032, E1, E12, E123, E2, E23, E3, E31, I,
};
pub use crate::line::{bivector, ideal_line, line, Bivector, IdealLine, Line};
pub use crate::motor::{motor, Motor};
pub use crate::multivector::Multivector;
pub use crate::ops::product_mask;
pub use crate::plane::{plane, Plane};
pub use crate::point::{direction, direction_from, point, Direction, Point};
pub use crate::simd::F32x4;
