//! A small crate providing [`Set`](collections::hash::Set), an unordered collection of unique
//! values built on top of [`std`]'s `HashMap`.
//!
//! # Purpose
//! Plenty of code needs nothing more from a set than "have I seen this before?". This crate keeps
//! the surface to exactly that: insertion, removal, membership, counting and iteration, with no
//! set algebra and no ordering guarantees.
//!
//! # Method
//! Hashing, probing and growth are all delegated to `HashMap<T, ()>`, so the interesting parts of
//! this crate are the API and its contract rather than the table itself. The core operations are
//! total: inserting a present item or removing an absent one is a no-op, not an error.
//!
//! # Error Handling
//! The only fallible operation is [`Set::try_reserve`](collections::hash::Set::try_reserve),
//! which returns a strongly typed [`ReserveError`](collections::hash::set::ReserveError). Methods
//! that can panic say so under a `# Panics` heading.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error type, because it removes the need for some
//! very repetitive programming.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(test)]
pub(crate) mod util;
