//! Helpers shared between the unit tests of different modules.

pub mod drop;
pub mod hash;
pub mod panic;
