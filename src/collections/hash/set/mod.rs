//! A module containing [`Set`] and associated types.
//!
//! The other types here provide owned and borrowed iteration over a set's items, and the error
//! returned by fallible capacity reservation.
//!
//! As a note, there is no mutable iterator over the items of a set because mutating them in place
//! could change their hashes, which would cause a logic error.
//!
//! [`Set`] is also re-exported under the parent module.

mod error;
mod iter;
mod macros;
mod set;

pub use error::*;
pub use iter::*;
pub use set::*;
