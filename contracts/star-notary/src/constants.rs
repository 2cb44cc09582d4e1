use near_sdk::{Gas, NearToken};

pub const DEFAULT_CONTRACT_NAME: &str = "BeardedStarToken";
pub const DEFAULT_CONTRACT_SYMBOL: &str = "BST";
pub const NFT_METADATA_SPEC: &str = "nft-2.0.0";

pub const MAX_STAR_NAME_LEN: usize = 256;
pub const MAX_METADATA_FIELD_LEN: usize = 1_024;

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

/// Gas handed to `migrate` after the new code is deployed.
pub const MIGRATE_CALL_GAS: Gas = Gas::from_tgas(100);
