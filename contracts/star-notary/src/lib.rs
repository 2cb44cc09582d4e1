use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod metadata;

mod sale;
mod star;
mod storage;

mod admin;
mod upgrade;


pub use constants::*;
pub use errors::StarNotaryError;
pub use metadata::StarContractMetadata;
pub use sale::{Sale, SaleView, StarPurchase};
pub use star::{JsonToken, Star, StarId, StarView, TokenMetadata};
pub use storage::{StorageKey, UserStorageBalance};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,

    pub stars: IterableMap<StarId, Star>,
    pub(crate) stars_per_owner: LookupMap<AccountId, IterableSet<StarId>>,

    // Listing invariant: a sale exists only while its owner_id matches the star owner.
    pub sales: IterableMap<StarId, Sale>,
    pub(crate) sales_by_owner: LookupMap<AccountId, IterableSet<StarId>>,

    pub user_storage: LookupMap<AccountId, UserStorageBalance>,

    pub contract_metadata: StarContractMetadata,
}
