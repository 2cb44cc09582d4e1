use crate::guards::{check_at_least_one_yocto, check_one_yocto};
use crate::validation::validate_price;
use crate::*;

#[near]
impl Contract {
    /// Lists a star at `price` yoctoNEAR, or reprices an existing listing.
    #[payable]
    #[handle_result]
    pub fn put_star_up_for_sale(
        &mut self,
        token_id: StarId,
        price: U128,
    ) -> Result<(), StarNotaryError> {
        check_at_least_one_yocto()?;
        let owner_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_list_star(&owner_id, token_id, price, deposit)
    }

    #[payable]
    #[handle_result]
    pub fn remove_star_from_sale(&mut self, token_id: StarId) -> Result<(), StarNotaryError> {
        check_one_yocto()?;
        let owner_id = env::predecessor_account_id();
        self.internal_delist_star(&owner_id, token_id)
    }
}

impl Contract {
    pub(crate) fn internal_list_star(
        &mut self,
        owner_id: &AccountId,
        token_id: StarId,
        price: U128,
        deposit: u128,
    ) -> Result<(), StarNotaryError> {
        validate_price(price)?;
        self.check_star_owner(owner_id, token_id)?;

        self.credit_storage(owner_id, deposit);

        if let Some(sale) = self.sales.get_mut(&token_id) {
            let old_price = std::mem::replace(&mut sale.price, price);
            sale.listed_at = env::block_timestamp();
            events::emit_star_listed(owner_id, token_id, price, Some(old_price));
            return Ok(());
        }

        let sale = Sale {
            owner_id: owner_id.clone(),
            price,
            listed_at: env::block_timestamp(),
        };

        let before = self.storage_usage_flushed();
        self.add_sale(token_id, sale);
        let bytes_used = self.storage_usage_flushed().saturating_sub(before);

        // Undo the listing when the balance cannot cover it.
        if let Err(e) = self.charge_storage(owner_id, bytes_used) {
            self.remove_sale(token_id);
            self.debit_storage(owner_id, deposit);
            return Err(e);
        }

        events::emit_star_listed(owner_id, token_id, price, None);
        Ok(())
    }

    pub(crate) fn internal_delist_star(
        &mut self,
        owner_id: &AccountId,
        token_id: StarId,
    ) -> Result<(), StarNotaryError> {
        self.check_star_owner(owner_id, token_id)?;
        self.clear_listing(token_id, owner_id, "delisted")
            .map(|_| ())
            .ok_or_else(|| StarNotaryError::not_listed(token_id))
    }
}
