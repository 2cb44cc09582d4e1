use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

use crate::StarId;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Sale {
    pub owner_id: AccountId,
    pub price: U128,
    pub listed_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct SaleView {
    pub token_id: StarId,
    pub owner_id: AccountId,
    pub price: U128,
    pub listed_at: u64,
}

impl SaleView {
    pub(crate) fn new(token_id: StarId, sale: &Sale) -> Self {
        Self {
            token_id,
            owner_id: sale.owner_id.clone(),
            price: sale.price,
            listed_at: sale.listed_at,
        }
    }
}

/// Settlement receipt returned by `buy_star`.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct StarPurchase {
    pub token_id: StarId,
    pub seller_id: AccountId,
    pub buyer_id: AccountId,
    pub price: U128,
    pub refund: U128,
}
