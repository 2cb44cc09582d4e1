mod create;
mod enumeration;
mod ownership;
mod transfer;
mod types;
mod views;

pub use types::{JsonToken, Star, StarId, StarView, TokenMetadata};
