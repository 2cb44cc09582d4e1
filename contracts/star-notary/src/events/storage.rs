use near_sdk::AccountId;

use super::STORAGE;
use super::builder::EventBuilder;

pub fn emit_storage_deposit(account_id: &AccountId, deposit: u128, new_balance: u128) {
    EventBuilder::new(STORAGE, "storage_deposit", account_id)
        .field("account_id", account_id)
        .field("deposit", deposit)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_storage_withdraw(account_id: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(STORAGE, "storage_withdraw", account_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_storage_charged(account_id: &AccountId, bytes: u64, used_bytes: u64) {
    EventBuilder::new(STORAGE, "storage_charged", account_id)
        .field("bytes", bytes)
        .field("used_bytes", used_bytes)
        .emit();
}

pub fn emit_storage_released(account_id: &AccountId, bytes: u64, used_bytes: u64) {
    EventBuilder::new(STORAGE, "storage_released", account_id)
        .field("bytes", bytes)
        .field("used_bytes", used_bytes)
        .emit();
}
