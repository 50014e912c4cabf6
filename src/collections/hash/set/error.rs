use std::collections::TryReserveError;

use derive_more::{Display, Error, From};

/// An error indicating that a [`Set`](super::Set) was unable to reserve the requested capacity,
/// either because it would overflow `usize` or because the allocator failed.
///
/// See [`Set::try_reserve`](super::Set::try_reserve).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
#[display("Unable to reserve capacity for Set: {_0}")]
pub struct ReserveError(#[error(source)] TryReserveError);
