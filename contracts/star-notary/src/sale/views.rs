use crate::validation::page_bounds;
use crate::*;

use super::SaleView;

#[near]
impl Contract {
    /// Active sale price of a star; `None` when the star is not listed.
    pub fn star_sale_price(&self, token_id: StarId) -> Option<U128> {
        self.sales.get(&token_id).map(|sale| sale.price)
    }

    pub fn get_sale(&self, token_id: StarId) -> Option<SaleView> {
        self.sales
            .get(&token_id)
            .map(|sale| SaleView::new(token_id, sale))
    }

    pub fn get_supply_sales(&self) -> u64 {
        self.sales.len() as u64
    }

    pub fn get_supply_by_owner_id(&self, account_id: AccountId) -> u64 {
        self.sales_by_owner
            .get(&account_id)
            .map(|sales| sales.len() as u64)
            .unwrap_or(0)
    }

    pub fn get_sales(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<SaleView> {
        let (start, limit) = page_bounds(from_index, limit);
        self.sales
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, sale)| SaleView::new(*token_id, sale))
            .collect()
    }

    pub fn get_sales_by_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<SaleView> {
        let Some(owner_sales) = self.sales_by_owner.get(&account_id) else {
            return vec![];
        };
        let (start, limit) = page_bounds(from_index, limit);

        owner_sales
            .iter()
            .skip(start)
            .filter_map(|token_id| {
                self.sales
                    .get(token_id)
                    .map(|sale| SaleView::new(*token_id, sale))
            })
            .take(limit)
            .collect()
    }
}
