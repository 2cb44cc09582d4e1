use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn storage_deposit(
        &mut self,
        account_id: Option<AccountId>,
    ) -> Result<UserStorageBalance, StarNotaryError> {
        let account_id = account_id.unwrap_or_else(env::predecessor_account_id);
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit == 0 {
            return Err(StarNotaryError::InsufficientDeposit(
                "Requires attached deposit of at least 1 yoctoNEAR".to_string(),
            ));
        }
        self.credit_storage(&account_id, deposit);
        Ok(self.user_storage.get(&account_id).cloned().unwrap_or_default())
    }

    #[payable]
    #[handle_result]
    pub fn storage_withdraw(&mut self) -> Result<U128, StarNotaryError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        let user = self
            .user_storage
            .get(&actor_id)
            .cloned()
            .unwrap_or_default();

        let available = user.available();
        if available == 0 {
            return Err(StarNotaryError::InvalidInput(
                "No storage available to withdraw".to_string(),
            ));
        }

        let new_balance = user.reserved();
        if user.used_bytes == 0 {
            self.user_storage.remove(&actor_id);
        } else {
            let mut updated = user;
            updated.balance = new_balance;
            self.user_storage.insert(actor_id.clone(), updated);
        }

        let _ = Promise::new(actor_id.clone()).transfer(NearToken::from_yoctonear(available));
        events::emit_storage_withdraw(&actor_id, available, new_balance);
        Ok(U128(available))
    }

    pub fn storage_balance_of(&self, account_id: AccountId) -> U128 {
        U128(
            self.user_storage
                .get(&account_id)
                .map(|u| u.balance)
                .unwrap_or(0),
        )
    }

    pub fn storage_usage_of(&self, account_id: AccountId) -> u64 {
        self.user_storage
            .get(&account_id)
            .map(|u| u.used_bytes)
            .unwrap_or(0)
    }
}

impl Contract {
    pub(crate) fn credit_storage(&mut self, account_id: &AccountId, deposit: u128) {
        if deposit == 0 {
            return;
        }
        let mut user = self
            .user_storage
            .get(account_id)
            .cloned()
            .unwrap_or_default();
        user.balance += deposit;
        let new_balance = user.balance;
        self.user_storage.insert(account_id.clone(), user);

        events::emit_storage_deposit(account_id, deposit, new_balance);
    }

    /// Reverses `credit_storage` for a failed call. Callers pass the exact amount credited.
    pub(crate) fn debit_storage(&mut self, account_id: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        if let Some(user) = self.user_storage.get_mut(account_id) {
            user.balance = user.balance.saturating_sub(amount);
        }
    }

    pub(crate) fn charge_storage(
        &mut self,
        account_id: &AccountId,
        bytes: u64,
    ) -> Result<(), StarNotaryError> {
        if bytes == 0 {
            return Ok(());
        }
        let mut user = self
            .user_storage
            .get(account_id)
            .cloned()
            .unwrap_or_default();
        user.used_bytes += bytes;

        let required = user.reserved();
        if user.balance < required {
            return Err(StarNotaryError::InsufficientStorage(format!(
                "Storage requires {} yoctoNEAR, balance is {}",
                required, user.balance
            )));
        }

        let used_bytes = user.used_bytes;
        self.user_storage.insert(account_id.clone(), user);
        events::emit_storage_charged(account_id, bytes, used_bytes);
        Ok(())
    }

    pub(crate) fn release_storage(&mut self, account_id: &AccountId, bytes: u64) {
        if bytes == 0 {
            return;
        }
        if let Some(user) = self.user_storage.get_mut(account_id) {
            user.used_bytes = user.used_bytes.saturating_sub(bytes);
            let used_bytes = user.used_bytes;
            events::emit_storage_released(account_id, bytes, used_bytes);
        }
    }
}
