use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum StarNotaryError {
    DuplicateId(String),
    NotFound(String),
    NotOwner(String),
    NotForSale(String),
    InsufficientPayment(String),
    InvalidInput(String),
    InsufficientDeposit(String),
    InsufficientStorage(String),
    Unauthorized(String),
}

impl std::fmt::Display for StarNotaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(msg) => write!(f, "Duplicate id: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::NotOwner(msg) => write!(f, "Not owner: {}", msg),
            Self::NotForSale(msg) => write!(f, "Not for sale: {}", msg),
            Self::InsufficientPayment(msg) => write!(f, "Insufficient payment: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InsufficientStorage(msg) => write!(f, "Insufficient storage: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
        }
    }
}

impl StarNotaryError {
    pub fn star_not_found(token_id: u64) -> Self {
        Self::NotFound(format!("Star {} does not exist", token_id))
    }
    pub fn star_exists(token_id: u64) -> Self {
        Self::DuplicateId(format!("Star {} already exists", token_id))
    }
    pub fn not_star_owner(token_id: u64) -> Self {
        Self::NotOwner(format!("Caller does not own star {}", token_id))
    }
    pub fn not_listed(token_id: u64) -> Self {
        Self::NotForSale(format!("Star {} is not up for sale", token_id))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
