use near_sdk::BorshStorageKey;
use near_sdk::near;

#[inline]
fn storage_byte_cost() -> u128 {
    near_sdk::env::storage_byte_cost().as_yoctonear()
}

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Stars,
    StarsPerOwner,
    StarsPerOwnerInner { account_id_hash: Vec<u8> },
    Sales,
    SalesByOwner,
    SalesByOwnerInner { account_id_hash: Vec<u8> },
    UserStorage,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default)]
pub struct UserStorageBalance {
    pub balance: u128,
    pub used_bytes: u64,
}

impl UserStorageBalance {
    pub(crate) fn reserved(&self) -> u128 {
        (self.used_bytes as u128) * storage_byte_cost()
    }

    pub(crate) fn available(&self) -> u128 {
        self.balance.saturating_sub(self.reserved())
    }
}
