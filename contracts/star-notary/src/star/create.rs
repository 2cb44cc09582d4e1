use crate::validation::validate_star_name;
use crate::*;

#[near]
impl Contract {
    /// Registers a new star owned by the caller. Any attached deposit is credited to the
    /// caller's storage balance before the new record is charged against it.
    #[payable]
    #[handle_result]
    pub fn create_star(&mut self, name: String, token_id: StarId) -> Result<(), StarNotaryError> {
        let creator_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_create_star(&creator_id, name, token_id, deposit)
    }
}

impl Contract {
    pub(crate) fn internal_create_star(
        &mut self,
        creator_id: &AccountId,
        name: String,
        token_id: StarId,
        deposit: u128,
    ) -> Result<(), StarNotaryError> {
        validate_star_name(&name)?;
        if self.stars.contains_key(&token_id) {
            return Err(StarNotaryError::star_exists(token_id));
        }

        self.credit_storage(creator_id, deposit);

        let before = self.storage_usage_flushed();
        let star = Star {
            name,
            owner_id: creator_id.clone(),
            creator_id: creator_id.clone(),
            created_at: env::block_timestamp(),
        };
        let name_for_event = star.name.clone();
        self.stars.insert(token_id, star);
        self.add_star_to_owner(creator_id, token_id);
        let bytes_used = self.storage_usage_flushed().saturating_sub(before);

        // Undo the insert when the balance cannot cover it.
        if let Err(e) = self.charge_storage(creator_id, bytes_used) {
            self.remove_star_from_owner(creator_id, token_id);
            self.stars.remove(&token_id);
            self.debit_storage(creator_id, deposit);
            return Err(e);
        }

        events::emit_star_created(creator_id, token_id, &name_for_event);
        Ok(())
    }
}
