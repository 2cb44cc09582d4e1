use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, contract_metadata: Option<StarContractMetadata>) -> Self {
        let contract_metadata = contract_metadata.unwrap_or_default();
        if let Err(e) = contract_metadata.validate() {
            env::panic_str(&e.to_string());
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            stars: IterableMap::new(StorageKey::Stars),
            stars_per_owner: LookupMap::new(StorageKey::StarsPerOwner),
            sales: IterableMap::new(StorageKey::Sales),
            sales_by_owner: LookupMap::new(StorageKey::SalesByOwner),
            user_storage: LookupMap::new(StorageKey::UserStorage),
            contract_metadata,
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), StarNotaryError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(StarNotaryError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
