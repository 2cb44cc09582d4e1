use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn transfer_star(
        &mut self,
        receiver_id: AccountId,
        token_id: StarId,
        memo: Option<String>,
    ) -> Result<(), StarNotaryError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();
        self.internal_transfer_star(&sender_id, &receiver_id, token_id, memo.as_deref())
    }

    /// Swaps the owners of two stars. The caller must own at least one of them.
    #[payable]
    #[handle_result]
    pub fn exchange_stars(
        &mut self,
        token_id_a: StarId,
        token_id_b: StarId,
    ) -> Result<(), StarNotaryError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.internal_exchange_stars(&actor_id, token_id_a, token_id_b)
    }
}

impl Contract {
    pub(crate) fn internal_transfer_star(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: StarId,
        memo: Option<&str>,
    ) -> Result<(), StarNotaryError> {
        self.check_star_owner(sender_id, token_id)?;
        let old_owner_id = self.set_star_owner(token_id, receiver_id)?;
        events::emit_star_transfer(sender_id, &old_owner_id, receiver_id, token_id, memo);
        Ok(())
    }

    pub(crate) fn internal_exchange_stars(
        &mut self,
        actor_id: &AccountId,
        token_id_a: StarId,
        token_id_b: StarId,
    ) -> Result<(), StarNotaryError> {
        let owner_a = self
            .stars
            .get(&token_id_a)
            .ok_or_else(|| StarNotaryError::star_not_found(token_id_a))?
            .owner_id
            .clone();
        let owner_b = self
            .stars
            .get(&token_id_b)
            .ok_or_else(|| StarNotaryError::star_not_found(token_id_b))?
            .owner_id
            .clone();

        if actor_id != &owner_a && actor_id != &owner_b {
            return Err(StarNotaryError::NotOwner(format!(
                "Caller owns neither star {} nor star {}",
                token_id_a, token_id_b
            )));
        }
        // Same owner on both sides (or the same star twice): the swap changes nothing.
        if owner_a == owner_b {
            return Ok(());
        }

        // Both ids were checked above; neither call can fail past this point.
        self.set_star_owner(token_id_a, &owner_b)?;
        self.set_star_owner(token_id_b, &owner_a)?;

        let memo = Some("exchange");
        events::emit_star_transfer(actor_id, &owner_a, &owner_b, token_id_a, memo);
        events::emit_star_transfer(actor_id, &owner_b, &owner_a, token_id_b, memo);
        events::emit_stars_exchanged(actor_id, token_id_a, &owner_b, token_id_b, &owner_a);
        Ok(())
    }
}
