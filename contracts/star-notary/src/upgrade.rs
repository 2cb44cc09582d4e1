use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Deploys the raw call input as the new contract code, then runs `migrate` on it.
    #[handle_result]
    pub fn update_contract(&self) -> Result<Promise, StarNotaryError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| StarNotaryError::InvalidInput("Missing contract code".into()))?;

        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_yoctonear(0),
                MIGRATE_CALL_GAS,
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut registry: Self = env::state_read()
            .unwrap_or_else(|| env::panic_str("Star registry state is missing"));
        let previous = std::mem::replace(&mut registry.version, env!("CARGO_PKG_VERSION").to_string());

        events::emit_contract_upgraded(&env::current_account_id(), &previous, &registry.version);
        registry
    }
}
