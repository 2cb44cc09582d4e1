use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::STAR;
use super::builder::EventBuilder;

pub fn emit_star_created(creator_id: &AccountId, token_id: u64, name: &str) {
    EventBuilder::new(STAR, "star_created", creator_id)
        .field("token_id", token_id)
        .field("name", name)
        .emit();
    super::emit_mint(creator_id.as_str(), &[token_id.to_string()], None);
}

pub fn emit_star_listed(owner_id: &AccountId, token_id: u64, price: U128, old_price: Option<U128>) {
    EventBuilder::new(STAR, "star_listed", owner_id)
        .field("token_id", token_id)
        .field("price", price)
        .field_opt("old_price", old_price)
        .emit();
}

pub fn emit_star_delisted(owner_id: &AccountId, token_id: u64, reason: &str) {
    EventBuilder::new(STAR, "star_delisted", owner_id)
        .field("token_id", token_id)
        .field("reason", reason)
        .emit();
}

pub fn emit_star_purchased(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    token_id: u64,
    price: U128,
    refund: U128,
) {
    EventBuilder::new(STAR, "star_purchased", buyer_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("token_id", token_id)
        .field("price", price)
        .field("refund", refund)
        .emit();
}

pub fn emit_star_transfer(
    sender_id: &AccountId,
    old_owner_id: &AccountId,
    new_owner_id: &AccountId,
    token_id: u64,
    memo: Option<&str>,
) {
    EventBuilder::new(STAR, "star_transferred", sender_id)
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("token_id", token_id)
        .field_opt("memo", memo)
        .emit();
    let authorized_id = (sender_id != old_owner_id).then_some(sender_id.as_str());
    super::emit_transfer(
        old_owner_id.as_str(),
        new_owner_id.as_str(),
        &[token_id.to_string()],
        authorized_id,
        memo,
    );
}

pub fn emit_stars_exchanged(
    actor_id: &AccountId,
    token_id_a: u64,
    owner_a: &AccountId,
    token_id_b: u64,
    owner_b: &AccountId,
) {
    EventBuilder::new(STAR, "stars_exchanged", actor_id)
        .field("token_id_a", token_id_a)
        .field("new_owner_a", owner_a)
        .field("token_id_b", token_id_b)
        .field("new_owner_b", owner_b)
        .emit();
}
