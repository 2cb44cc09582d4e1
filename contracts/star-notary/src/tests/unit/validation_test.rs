use crate::validation::*;
use crate::*;

#[test]
fn star_name_rules() {
    assert!(validate_star_name("Awesome Star!").is_ok());
    assert!(validate_star_name(&"a".repeat(MAX_STAR_NAME_LEN)).is_ok());
    assert!(validate_star_name("").is_err());
    assert!(validate_star_name(" \t").is_err());
    assert!(validate_star_name(&"a".repeat(MAX_STAR_NAME_LEN + 1)).is_err());
}

#[test]
fn price_must_be_positive() {
    assert!(validate_price(U128(1)).is_ok());
    assert!(matches!(
        validate_price(U128(0)).unwrap_err(),
        StarNotaryError::InvalidInput(_)
    ));
}

#[test]
fn metadata_field_rules() {
    assert!(validate_metadata_field("name", "BeardedStarToken").is_ok());
    assert!(validate_metadata_field("symbol", "").is_err());
    assert!(validate_metadata_field("spec", &"s".repeat(MAX_METADATA_FIELD_LEN + 1)).is_err());
}

#[test]
fn page_bounds_defaults_and_caps() {
    assert_eq!(page_bounds(None, None), (0, DEFAULT_PAGE_LIMIT as usize));
    assert_eq!(page_bounds(Some(U128(5)), Some(10)), (5, 10));
    assert_eq!(page_bounds(None, Some(1_000)), (0, MAX_PAGE_LIMIT as usize));
}

#[test]
fn page_bounds_saturates_oversized_from_index() {
    let (start, _) = page_bounds(Some(U128(1u128 << 64)), None);
    assert_eq!(start, usize::MAX);
}
