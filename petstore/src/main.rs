use std::env;
use std::fs::File;
use std::io;
use std::process::ExitCode;

use tracing::debug;

use optional_petstore::pets::{Pet, PetError};
use optional_petstore::start;
use optional_petstore::store::{buy_pet, PetStore};

fn print_pet(pet: &Pet) {
  println!(">>> {}", pet);
}

fn print_error(error: PetError) {
  println!(">>> Error: {}", error);
}

/// Loads the catalog from the file named by `PET_STORE_CATALOG`, or the built-in one.
fn load_store() -> Result<PetStore, io::Error> {
  match env::var_os("PET_STORE_CATALOG") {
    Some(path) => {
      debug!(?path, "loading catalog from file");
      PetStore::from_json(File::open(path)?)
    }
    None => Ok(PetStore::default()),
  }
}

fn main() -> ExitCode {
  start::init();

  let store = match load_store() {
    Ok(store) => store,
    Err(cause) => {
      eprintln!("Error: failed to load the pet catalog: {}", cause);
      return ExitCode::FAILURE;
    }
  };

  let mut arguments = env::args().skip(1);
  let (Some(argument), None) = (arguments.next(), arguments.next()) else {
    eprintln!("Error: Please provide one argument (pet ID)");
    return ExitCode::FAILURE;
  };
  let Ok(pet_id) = argument.parse::<u32>() else {
    eprintln!("Error: Illegal pet ID provided: {}", argument);
    return ExitCode::FAILURE;
  };

  println!("Finding pet {}...", pet_id);
  let optional = store.find_pet(pet_id);
  optional.as_ref().if_present_or_else(print_pet, || print_error(PetError::NotFound));

  println!("Buying pet...");
  let optional = optional.flat_map(buy_pet);
  optional.as_ref().if_present_or_else(print_pet, || print_error(PetError::NotAvailable));

  if optional.is_empty() {
    println!("Sorry!");
    return ExitCode::FAILURE;
  }
  println!("Thank you!");
  ExitCode::SUCCESS
}
