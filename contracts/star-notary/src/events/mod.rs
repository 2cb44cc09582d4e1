mod builder;
mod types;

mod contract;
mod nep171;
mod star;
mod storage;

pub use contract::*;
pub use nep171::*;
pub use star::*;
pub use storage::*;

pub(crate) const STANDARD: &str = "starnotary";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const STAR: &str = "STAR_UPDATE";
pub(crate) const STORAGE: &str = "STORAGE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
