#![cfg(feature = "serde")]

use optional_core::Optional;

#[test]
fn serializes_present_as_an_externally_tagged_variant() {
  let optional = Optional::present(512);
  let json = serde_json::to_string(&optional).unwrap();
  assert_eq!(json, r#"{"Present":512}"#);
  let deserialized: Optional<i32> = serde_json::from_str(&json).unwrap();
  assert_eq!(deserialized, optional);
}

#[test]
fn serializes_empty_as_a_unit_variant() {
  let optional = Optional::<i32>::empty();
  let json = serde_json::to_string(&optional).unwrap();
  assert_eq!(json, r#""Empty""#);
  let deserialized: Optional<i32> = serde_json::from_str(&json).unwrap();
  assert_eq!(deserialized, optional);
}
