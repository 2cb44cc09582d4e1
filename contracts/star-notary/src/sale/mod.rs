mod index;
mod listing;
mod purchase;
mod types;
mod views;

pub use types::{Sale, SaleView, StarPurchase};
