use crate::tests::test_utils::*;
use crate::*;

#[test]
fn lookup_star_info_returns_exact_name() {
    let mut contract = new_contract();
    let name = "Some bearded star :ok_hand:";
    create_star_as(&mut contract, &user1(), name, 999);

    assert_eq!(contract.lookup_star_info(999).unwrap(), name);
}

#[test]
fn lookup_star_info_missing_fails() {
    let contract = new_contract();
    let err = contract.lookup_star_info(404).unwrap_err();
    assert!(matches!(err, StarNotaryError::NotFound(_)));
}

#[test]
fn owner_of_missing_fails() {
    let contract = new_contract();
    let err = contract.owner_of(404).unwrap_err();
    assert!(matches!(err, StarNotaryError::NotFound(_)));
}

#[test]
fn star_info_joins_sale_price() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &user1(), "listed", 2);
    list_star_as(&mut contract, &user1(), 2, STAR_PRICE);

    let view = contract.star_info(2).unwrap();
    assert_eq!(view.token_id, 2);
    assert_eq!(view.name, "listed");
    assert_eq!(view.owner_id, user1());
    assert_eq!(view.creator_id, user1());
    assert_eq!(view.created_at, 1_700_000_000_000_000_000);
    assert_eq!(view.sale_price.map(|p| p.0), Some(STAR_PRICE));
}

#[test]
fn star_info_missing_is_none() {
    let contract = new_contract();
    assert!(contract.star_info(1).is_none());
}
