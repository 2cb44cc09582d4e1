use crate::*;

#[near]
impl Contract {
    /// Buys a listed star. The attached deposit is the payment; anything above the
    /// price is refunded to the buyer.
    #[payable]
    #[handle_result]
    pub fn buy_star(&mut self, token_id: StarId) -> Result<StarPurchase, StarNotaryError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_buy_star(&buyer_id, token_id, deposit)
    }
}

impl Contract {
    pub(crate) fn internal_buy_star(
        &mut self,
        buyer_id: &AccountId,
        token_id: StarId,
        deposit: u128,
    ) -> Result<StarPurchase, StarNotaryError> {
        if !self.stars.contains_key(&token_id) {
            return Err(StarNotaryError::star_not_found(token_id));
        }
        let sale = self
            .sales
            .get(&token_id)
            .ok_or_else(|| StarNotaryError::not_listed(token_id))?;
        let seller_id = sale.owner_id.clone();

        let price = sale.price.0;
        if deposit < price {
            return Err(StarNotaryError::InsufficientPayment(format!(
                "Required {}, got {}",
                price, deposit
            )));
        }

        self.clear_listing(token_id, &seller_id, "sold");
        self.set_star_owner(token_id, buyer_id)?;

        let _ = Promise::new(seller_id.clone()).transfer(NearToken::from_yoctonear(price));
        let refund = refund_excess(buyer_id, deposit, price);

        events::emit_star_transfer(
            &seller_id,
            &seller_id,
            buyer_id,
            token_id,
            Some("Purchased on Star Notary"),
        );
        events::emit_star_purchased(buyer_id, &seller_id, token_id, U128(price), U128(refund));

        Ok(StarPurchase {
            token_id,
            seller_id,
            buyer_id: buyer_id.clone(),
            price: U128(price),
            refund: U128(refund),
        })
    }
}

pub(crate) fn refund_excess(buyer: &AccountId, deposit: u128, price: u128) -> u128 {
    let refund = deposit.saturating_sub(price);
    if refund > 0 {
        let _ = Promise::new(buyer.clone()).transfer(NearToken::from_yoctonear(refund));
    }
    refund
}
