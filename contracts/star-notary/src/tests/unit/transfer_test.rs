use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- transfer_star ---

#[test]
fn transfer_star_changes_owner() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &user1(), "MY STAR", 420);

    testing_env!(context_with_deposit(user1(), 1).build());
    contract.transfer_star(user2(), 420, None).unwrap();

    assert_eq!(contract.owner_of(420).unwrap(), user2());
    assert!(!contract.stars_per_owner.contains_key(&user1()));
    assert!(contract.stars_per_owner.get(&user2()).unwrap().contains(&420));
    // Creator is immutable across transfers.
    assert_eq!(contract.stars.get(&420).unwrap().creator_id, user1());
}

#[test]
fn transfer_star_not_owner_fails() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &user1(), "MY STAR", 420);

    testing_env!(context_with_deposit(user2(), 1).build());
    let err = contract.transfer_star(user2(), 420, None).unwrap_err();
    assert!(matches!(err, StarNotaryError::NotOwner(_)));
    assert_eq!(contract.owner_of(420).unwrap(), user1());
}

#[test]
fn transfer_star_missing_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(user1(), 1).build());

    let err = contract.transfer_star(user2(), 1, None).unwrap_err();
    assert!(matches!(err, StarNotaryError::NotFound(_)));
}

#[test]
fn transfer_star_requires_one_yocto() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &user1(), "MY STAR", 420);

    testing_env!(context(user1()).build());
    let err = contract.transfer_star(user2(), 420, None).unwrap_err();
    assert!(matches!(err, StarNotaryError::InsufficientDeposit(_)));

    testing_env!(context_with_deposit(user1(), 2).build());
    let err = contract.transfer_star(user2(), 420, None).unwrap_err();
    assert!(matches!(err, StarNotaryError::InsufficientDeposit(_)));
}

#[test]
fn transfer_star_drops_listing() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &user1(), "listed", 5);
    list_star_as(&mut contract, &user1(), 5, STAR_PRICE);

    testing_env!(context_with_deposit(user1(), 1).build());
    contract
        .transfer_star(user2(), 5, Some("gift".into()))
        .unwrap();

    assert!(contract.star_sale_price(5).is_none());
    assert_eq!(contract.get_supply_by_owner_id(user1()), 0);

    // The new owner cannot be sold out from under by the stale listing.
    testing_env!(context_with_deposit(owner(), BUYER_PAYMENT).build());
    let err = contract.buy_star(5).unwrap_err();
    assert!(matches!(err, StarNotaryError::NotForSale(_)));
}

#[test]
fn previous_owner_cannot_transfer_again() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &user1(), "once", 6);

    testing_env!(context_with_deposit(user1(), 1).build());
    contract.transfer_star(user2(), 6, None).unwrap();

    let err = contract.transfer_star(owner(), 6, None).unwrap_err();
    assert!(matches!(err, StarNotaryError::NotOwner(_)));
}
