use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

pub type StarId = u64;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Star {
    pub name: String,
    pub owner_id: AccountId,
    pub creator_id: AccountId,
    pub created_at: u64,
}

/// Star record joined with its active listing, if any.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct StarView {
    pub token_id: StarId,
    pub name: String,
    pub owner_id: AccountId,
    pub creator_id: AccountId,
    pub created_at: u64,
    pub sale_price: Option<U128>,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct TokenMetadata {
    pub title: Option<String>,
    pub issued_at: Option<u64>,
}

/// NEP-171 token shape; `token_id` is the decimal form of the star id.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct JsonToken {
    pub token_id: String,
    pub owner_id: AccountId,
    pub metadata: Option<TokenMetadata>,
}

impl JsonToken {
    pub(crate) fn from_star(token_id: StarId, star: &Star) -> Self {
        Self {
            token_id: token_id.to_string(),
            owner_id: star.owner_id.clone(),
            metadata: Some(TokenMetadata {
                title: Some(star.name.clone()),
                issued_at: Some(star.created_at),
            }),
        }
    }
}
