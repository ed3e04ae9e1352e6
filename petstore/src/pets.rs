use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status of a pet in the store.
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum PetStatus {
  #[default]
  Available,
  Pending,
  Sold,
}
impl PetStatus {
  /// Returns the human-readable name of this status.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Available => "Available",
      Self::Pending => "Pending",
      Self::Sold => "Sold",
    }
  }
}
impl Display for PetStatus {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}


/// A pet in the store.
#[derive(Default, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Pet {
  pub id: u32,
  pub name: String,
  pub status: PetStatus,
}
impl Pet {
  #[inline]
  pub fn new(id: u32, name: impl Into<String>, status: PetStatus) -> Self {
    Self { id, name: name.into(), status }
  }
}
impl Display for Pet {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "Pet(id: {}, name: {}, status: {})", self.id, self.name, self.status)
  }
}


/// Reason a store operation did not produce a pet.
///
/// Lookup and purchase report absence as an empty [`Optional`](optional_core::Optional); this
/// code is the separate side channel for callers that need to know why.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Serialize, Deserialize, Error)]
pub enum PetError {
  #[error("Pet not found")]
  NotFound,
  #[error("Pet not available")]
  NotAvailable,
  #[error("Pet already sold")]
  AlreadySold,
}
