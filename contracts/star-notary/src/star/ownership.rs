use crate::*;

impl Contract {
    pub(crate) fn add_star_to_owner(&mut self, owner_id: &AccountId, token_id: StarId) {
        if !self.stars_per_owner.contains_key(owner_id) {
            self.stars_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::StarsPerOwnerInner {
                    account_id_hash: crate::guards::hash_account_id(owner_id),
                }),
            );
        }
        if let Some(owner_stars) = self.stars_per_owner.get_mut(owner_id) {
            owner_stars.insert(token_id);
            owner_stars.flush();
        }
    }

    pub(crate) fn remove_star_from_owner(&mut self, owner_id: &AccountId, token_id: StarId) {
        if let Some(owner_stars) = self.stars_per_owner.get_mut(owner_id) {
            owner_stars.remove(&token_id);
            owner_stars.flush();
            if owner_stars.is_empty() {
                self.stars_per_owner.remove(owner_id);
            }
        }
    }

    /// Moves `token_id` to `new_owner_id` and drops any listing held by the previous owner.
    pub(crate) fn set_star_owner(
        &mut self,
        token_id: StarId,
        new_owner_id: &AccountId,
    ) -> Result<AccountId, StarNotaryError> {
        let star = self
            .stars
            .get_mut(&token_id)
            .ok_or_else(|| StarNotaryError::star_not_found(token_id))?;
        let old_owner_id = std::mem::replace(&mut star.owner_id, new_owner_id.clone());

        self.remove_star_from_owner(&old_owner_id, token_id);
        self.add_star_to_owner(new_owner_id, token_id);
        self.clear_listing(token_id, &old_owner_id, "owner_changed");

        Ok(old_owner_id)
    }
}
