use crate::validation::page_bounds;
use crate::*;

#[near]
impl Contract {
    pub fn nft_token(&self, token_id: String) -> Option<JsonToken> {
        let id: StarId = token_id.parse().ok()?;
        self.stars
            .get(&id)
            .map(|star| JsonToken::from_star(id, star))
    }

    pub fn nft_total_supply(&self) -> U128 {
        U128(self.stars.len() as u128)
    }

    pub fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<JsonToken> {
        let (start, limit) = page_bounds(from_index, limit);

        self.stars
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, star)| JsonToken::from_star(*token_id, star))
            .collect()
    }

    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        U128(self.balance_of(account_id) as u128)
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<JsonToken> {
        let Some(owner_stars) = self.stars_per_owner.get(&account_id) else {
            return vec![];
        };
        let (start, limit) = page_bounds(from_index, limit);

        owner_stars
            .iter()
            .skip(start)
            .filter_map(|token_id| {
                self.stars
                    .get(token_id)
                    .map(|star| JsonToken::from_star(*token_id, star))
            })
            .take(limit)
            .collect()
    }
}
