use crate::optional::Optional;

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Optional::Present(value),
      None => Optional::Empty,
    }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self {
    match optional {
      Optional::Present(value) => Some(value),
      Optional::Empty => None,
    }
  }
}


/// Extension methods for standard library options.
pub trait OptionExt<T> {
  /// Converts into an [`Optional`].
  fn into_optional(self) -> Optional<T>;
}

impl<T> OptionExt<T> for Option<T> {
  #[inline]
  fn into_optional(self) -> Optional<T> {
    self.into()
  }
}


#[cfg(test)]
mod tests {
  use super::OptionExt;
  use crate::optional::Optional;

  #[test]
  fn converts_losslessly_to_and_from_std_options() {
    assert_eq!(Optional::from(Some(7)), Optional::present(7));
    assert_eq!(Optional::from(None::<i32>), Optional::empty());
    assert_eq!(Option::from(Optional::present(7)), Some(7));
    assert_eq!(Optional::present(7).into_option(), Some(7));
    assert_eq!(Some(7).into_optional(), Optional::present(7));
    assert_eq!(None::<i32>.into_optional(), Optional::empty());
  }
}
