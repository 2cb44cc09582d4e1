use crate::*;

impl Contract {
    pub(crate) fn add_sale(&mut self, token_id: StarId, sale: Sale) {
        let owner_id = sale.owner_id.clone();
        self.sales.insert(token_id, sale);

        if !self.sales_by_owner.contains_key(&owner_id) {
            self.sales_by_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::SalesByOwnerInner {
                    account_id_hash: crate::guards::hash_account_id(&owner_id),
                }),
            );
        }
        if let Some(owner_sales) = self.sales_by_owner.get_mut(&owner_id) {
            owner_sales.insert(token_id);
            owner_sales.flush();
        }
    }

    pub(crate) fn remove_sale(&mut self, token_id: StarId) -> Option<Sale> {
        let sale = self.sales.remove(&token_id)?;

        if let Some(owner_sales) = self.sales_by_owner.get_mut(&sale.owner_id) {
            owner_sales.remove(&token_id);
            owner_sales.flush();
            if owner_sales.is_empty() {
                self.sales_by_owner.remove(&sale.owner_id);
            }
        }

        Some(sale)
    }

    /// Drops the listing of `token_id` held by `seller_id` and returns its storage to them.
    pub(crate) fn clear_listing(
        &mut self,
        token_id: StarId,
        seller_id: &AccountId,
        reason: &str,
    ) -> Option<Sale> {
        if self
            .sales
            .get(&token_id)
            .is_none_or(|sale| &sale.owner_id != seller_id)
        {
            return None;
        }

        let before = self.storage_usage_flushed();
        let sale = self.remove_sale(token_id)?;
        let bytes_freed = before.saturating_sub(self.storage_usage_flushed());
        self.release_storage(seller_id, bytes_freed);

        events::emit_star_delisted(seller_id, token_id, reason);
        Some(sale)
    }
}
