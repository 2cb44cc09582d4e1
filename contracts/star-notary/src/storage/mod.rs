mod deposit;
mod flush;
mod types;

pub use types::{StorageKey, UserStorageBalance};
