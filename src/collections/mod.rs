//! Various general-purpose collection types.
//!
//! At the moment, the only collection is the hash-based [`Set`](hash::Set). It deliberately
//! leaves out set algebra (unions, intersections and so on) and only offers the operations needed
//! to track membership.

#[cfg(feature = "hash")]
pub mod hash;
