//! The general multivector.
//!
//! An entity storing all four lanes: any element of P(R(3,0,1)). There is
//! nothing special to implement: every operation on `Entity` already covers
//! the full-mask case, so this is only the name.

use crate::entity::Entity;

/// A general element of the algebra, all 16 blades stored.
pub type Multivector = Entity<0b1111>;
