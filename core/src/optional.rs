use crate::falsy::Falsy;
use crate::nullable::Nullable;

/// A value of type `T`, or nothing.
///
/// Instances are plain values: every combinator consumes its input and produces a new instance,
/// nothing is mutated in place. Absence propagates silently through chains of [`map`](Self::map),
/// [`filter`](Self::filter) and [`flat_map`](Self::flat_map); the final emptiness carries no
/// reason. Callers that need to know *why* a value is absent must pair the optional with a
/// separate error code.
///
/// A contained reference or pointer is a transparent payload: the referenced resource's lifetime
/// is managed entirely by the caller.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Optional<T> {
  /// No value.
  #[default]
  Empty,
  /// A value of type `T`.
  Present(T),
}


impl<T> Optional<T> {
  /// Creates an Optional containing `value`.
  #[inline]
  pub const fn present(value: T) -> Self {
    Self::Present(value)
  }

  /// Creates an Optional containing nothing.
  #[inline]
  pub const fn empty() -> Self {
    Self::Empty
  }

  /// Creates an Optional containing `pointer`, or an empty one if `pointer` is null.
  #[inline]
  pub fn of_nullable(pointer: T) -> Self where T: Nullable {
    if pointer.is_null() { Self::Empty } else { Self::Present(pointer) }
  }

  /// Creates an Optional containing `value`, or an empty one if `value` converts to `false`.
  #[inline]
  pub fn of_possibly_falsy(value: T) -> Self where T: Falsy {
    if value.is_falsy() { Self::Empty } else { Self::Present(value) }
  }


  /// Returns `true` if a value is present.
  #[inline]
  pub const fn is_present(&self) -> bool {
    matches!(self, Self::Present(_))
  }

  /// Returns `true` if no value is present.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    !self.is_present()
  }


  /// Returns the contained value.
  ///
  /// Calling this on an empty Optional is a programming defect: check with
  /// [`is_present`](Self::is_present) first, or use [`get_value`](Self::get_value) or
  /// [`or_else`](Self::or_else) instead.
  ///
  /// # Panics
  ///
  /// Panics if no value is present.
  #[inline]
  pub fn use_value(self) -> T {
    match self {
      Self::Present(value) => value,
      Self::Empty => panic!("use_value called on an empty Optional"),
    }
  }

  /// Returns a borrow of the contained value, or `None` if no value is present.
  #[inline]
  pub const fn get_value(&self) -> Option<&T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Empty => None,
    }
  }

  /// Returns the contained value, or the result of evaluating `default`.
  ///
  /// `default` is evaluated only when no value is present.
  #[inline]
  pub fn or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Empty => default(),
    }
  }


  /// Performs `action` with the contained value; does nothing if no value is present.
  #[inline]
  pub fn if_present(self, action: impl FnOnce(T)) {
    if let Self::Present(value) = self {
      action(value);
    }
  }

  /// Performs `present_action` with the contained value, or `empty_action` if no value is
  /// present. Exactly one of the two runs.
  #[inline]
  pub fn if_present_or_else(self, present_action: impl FnOnce(T), empty_action: impl FnOnce()) {
    match self {
      Self::Present(value) => present_action(value),
      Self::Empty => empty_action(),
    }
  }


  /// Returns this Optional, demoted to empty if `is_acceptable` rejects the contained value.
  ///
  /// `is_acceptable` runs at most once, and never on an empty Optional.
  #[inline]
  pub fn filter(self, is_acceptable: impl FnOnce(&T) -> bool) -> Self {
    if let Self::Present(value) = self {
      if is_acceptable(&value) {
        return Self::Present(value);
      }
    }
    Self::Empty
  }

  /// Returns this Optional, demoted to empty if the contained value converts to `false`.
  #[inline]
  pub fn filter_falsy(self) -> Self where T: Falsy {
    self.filter(|value| !value.is_falsy())
  }

  /// Returns this Optional, demoted to empty if the contained value is a null pointer.
  #[inline]
  pub fn filter_null(self) -> Self where T: Nullable {
    self.filter(|pointer| !pointer.is_null())
  }

  /// Transforms the contained value with `mapper`; an empty Optional maps to an empty one of the
  /// target type.
  ///
  /// `mapper` runs at most once, and never on an empty Optional.
  #[inline]
  pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Optional<U> {
    match self {
      Self::Present(value) => Optional::Present(mapper(value)),
      Self::Empty => Optional::Empty,
    }
  }

  /// Transforms the contained value with an Optional-producing `mapper`, returning its result
  /// directly instead of nesting; an empty Optional maps to an empty one of the target type.
  ///
  /// `mapper` runs at most once, and never on an empty Optional.
  #[inline]
  pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self {
      Self::Present(value) => mapper(value),
      Self::Empty => Optional::Empty,
    }
  }

  /// Returns this Optional if a value is present, or the result of evaluating `alternative`.
  ///
  /// `alternative` is evaluated only when no value is present.
  #[inline]
  pub fn or(self, alternative: impl FnOnce() -> Optional<T>) -> Optional<T> {
    match self {
      present @ Self::Present(_) => present,
      Self::Empty => alternative(),
    }
  }


  /// Converts from `&Optional<T>` to `Optional<&T>`.
  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Empty => Optional::Empty,
    }
  }

  /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
  #[inline]
  pub fn as_mut(&mut self) -> Optional<&mut T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Empty => Optional::Empty,
    }
  }

  /// Converts into a standard library [`Option`].
  #[inline]
  pub fn into_option(self) -> Option<T> {
    self.into()
  }
}


#[cfg(test)]
mod tests {
  use super::Optional;

  #[test]
  fn present_and_empty_are_mutually_exclusive() {
    let present = Optional::present(512);
    assert!(present.is_present());
    assert!(!present.is_empty());

    let empty = Optional::<i32>::empty();
    assert!(empty.is_empty());
    assert!(!empty.is_present());
  }

  #[test]
  fn default_is_empty() {
    assert_eq!(Optional::<i32>::default(), Optional::empty());
  }

  #[test]
  fn empty_sorts_before_present() {
    assert!(Optional::empty() < Optional::present(i32::MIN));
  }
}
