use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), StarNotaryError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(StarNotaryError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_at_least_one_yocto() -> Result<(), StarNotaryError> {
    if env::attached_deposit().as_yoctonear() < ONE_YOCTO.as_yoctonear() {
        return Err(StarNotaryError::InsufficientDeposit(
            "Requires attached deposit of at least 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), StarNotaryError> {
        if actor_id != &self.owner_id {
            return Err(StarNotaryError::only_owner("contract owner"));
        }
        Ok(())
    }

    /// Returns the star if `actor_id` currently owns it.
    pub(crate) fn check_star_owner(
        &self,
        actor_id: &AccountId,
        token_id: StarId,
    ) -> Result<&Star, StarNotaryError> {
        let star = self
            .stars
            .get(&token_id)
            .ok_or_else(|| StarNotaryError::star_not_found(token_id))?;
        if &star.owner_id != actor_id {
            return Err(StarNotaryError::not_star_owner(token_id));
        }
        Ok(star)
    }
}
