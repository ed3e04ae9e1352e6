use std::io;

use serde::{Deserialize, Serialize};
use tracing::debug;

use optional_core::Optional;

use crate::pets::{Pet, PetStatus};

/// An in-memory catalog of pets.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct PetStore {
  pets: Vec<Pet>,
}

impl Default for PetStore {
  /// Creates a store with the built-in three-pet catalog.
  fn default() -> Self {
    Self::new(vec![
      Pet::new(0, "Rocky", PetStatus::Available),
      Pet::new(1, "Garfield", PetStatus::Pending),
      Pet::new(2, "Rantanplan", PetStatus::Sold),
    ])
  }
}

impl PetStore {
  #[inline]
  pub fn new(pets: Vec<Pet>) -> Self {
    Self { pets }
  }

  /// Reads a catalog from a JSON array of pets.
  pub fn from_json(reader: impl io::Read) -> Result<Self, io::Error> {
    let pets = serde_json::from_reader(io::BufReader::new(reader))?;
    Ok(Self::new(pets))
  }

  #[inline]
  pub fn len(&self) -> usize { self.pets.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.pets.is_empty() }

  #[inline]
  pub fn iter(&self) -> impl Iterator<Item=&Pet> { self.pets.iter() }

  /// Looks up a pet by id. A miss is an empty Optional, never an error.
  pub fn find_pet(&self, pet_id: u32) -> Optional<Pet> {
    debug!(pet_id, "looking up pet");
    for pet in &self.pets {
      if pet.id == pet_id {
        return Optional::present(pet.clone());
      }
    }
    Optional::empty()
  }
}


/// Buys `pet`: produces a copy with status [`Sold`](PetStatus::Sold) if the pet is
/// [`Available`](PetStatus::Available), or an empty Optional otherwise. The input pet is not
/// changed.
pub fn buy_pet(pet: Pet) -> Optional<Pet> {
  if pet.status != PetStatus::Available {
    debug!(pet_id = pet.id, status = %pet.status, "pet cannot be bought");
    return Optional::empty();
  }
  Optional::present(Pet { status: PetStatus::Sold, ..pet })
}
