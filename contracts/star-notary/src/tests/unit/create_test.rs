use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- create_star ---

#[test]
fn create_star_records_name_and_owner() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &owner(), "Awesome Star!", 1);

    assert_eq!(contract.lookup_star_info(1).unwrap(), "Awesome Star!");
    let star = contract.stars.get(&1).unwrap();
    assert_eq!(star.owner_id, owner());
    assert_eq!(star.creator_id, owner());
    assert!(contract.star_sale_price(1).is_none());
}

#[test]
fn create_star_tracks_owner_index() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &user1(), "a", 10);
    create_star_as(&mut contract, &user1(), "b", 11);

    let owned = contract.stars_per_owner.get(&user1()).unwrap();
    assert!(owned.contains(&10));
    assert!(owned.contains(&11));
    assert_eq!(contract.balance_of(user1()), 2);
    assert_eq!(contract.balance_of(user2()), 0);
}

#[test]
fn create_star_duplicate_id_fails() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &user1(), "first", 7);

    testing_env!(context_with_deposit(user2(), STORAGE_DEPOSIT).build());
    let err = contract.create_star("second".into(), 7).unwrap_err();
    assert!(matches!(err, StarNotaryError::DuplicateId(_)));

    // Original record is untouched.
    assert_eq!(contract.lookup_star_info(7).unwrap(), "first");
    assert_eq!(contract.owner_of(7).unwrap(), user1());
    assert_eq!(contract.balance_of(user2()), 0);
}

#[test]
fn create_star_empty_name_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(user1(), STORAGE_DEPOSIT).build());

    let err = contract.create_star("   ".into(), 1).unwrap_err();
    assert!(matches!(err, StarNotaryError::InvalidInput(_)));
    assert!(contract.stars.get(&1).is_none());
}

#[test]
fn create_star_name_too_long_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(user1(), STORAGE_DEPOSIT).build());

    let err = contract
        .create_star("x".repeat(MAX_STAR_NAME_LEN + 1), 1)
        .unwrap_err();
    assert!(matches!(err, StarNotaryError::InvalidInput(_)));
}

#[test]
fn create_star_without_storage_rolls_back() {
    let mut contract = new_contract();
    testing_env!(context(user1()).build());

    let err = contract.create_star("broke".into(), 5).unwrap_err();
    assert!(matches!(err, StarNotaryError::InsufficientStorage(_)));

    assert!(contract.stars.get(&5).is_none());
    assert_eq!(contract.balance_of(user1()), 0);
    assert_eq!(contract.storage_usage_of(user1()), 0);
}

#[test]
fn create_star_underfunded_deposit_is_not_kept() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(user1(), 1).build());

    let err = contract.create_star("tiny".into(), 5).unwrap_err();
    assert!(matches!(err, StarNotaryError::InsufficientStorage(_)));
    assert_eq!(contract.storage_balance_of(user1()).0, 0);
}

#[test]
fn create_star_charges_creator_storage() {
    let mut contract = new_contract();
    create_star_as(&mut contract, &user1(), "paid", 3);

    let used = contract.storage_usage_of(user1());
    assert!(used > 0);
    assert_eq!(contract.storage_balance_of(user1()).0, STORAGE_DEPOSIT);
}

#[test]
fn create_star_uses_prepaid_balance() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(user1(), STORAGE_DEPOSIT).build());
    contract.storage_deposit(None).unwrap();

    testing_env!(context(user1()).build());
    contract.create_star("prepaid".into(), 4).unwrap();
    assert_eq!(contract.owner_of(4).unwrap(), user1());
}
