use crate::*;

#[near]
impl Contract {
    /// Name of the star, or `NotFound` when the id was never created.
    #[handle_result]
    pub fn lookup_star_info(&self, token_id: StarId) -> Result<String, StarNotaryError> {
        self.stars
            .get(&token_id)
            .map(|star| star.name.clone())
            .ok_or_else(|| StarNotaryError::star_not_found(token_id))
    }

    pub fn star_info(&self, token_id: StarId) -> Option<StarView> {
        self.stars.get(&token_id).map(|star| StarView {
            token_id,
            name: star.name.clone(),
            owner_id: star.owner_id.clone(),
            creator_id: star.creator_id.clone(),
            created_at: star.created_at,
            sale_price: self.sales.get(&token_id).map(|sale| sale.price),
        })
    }

    #[handle_result]
    pub fn owner_of(&self, token_id: StarId) -> Result<AccountId, StarNotaryError> {
        self.stars
            .get(&token_id)
            .map(|star| star.owner_id.clone())
            .ok_or_else(|| StarNotaryError::star_not_found(token_id))
    }

    pub fn balance_of(&self, account_id: AccountId) -> u64 {
        self.stars_per_owner
            .get(&account_id)
            .map(|stars| stars.len() as u64)
            .unwrap_or(0)
    }
}
