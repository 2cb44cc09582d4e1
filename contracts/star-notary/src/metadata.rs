use crate::validation::validate_metadata_field;
use crate::*;
use near_sdk::json_types::Base64VecU8;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct StarContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<Base64VecU8>,
}

impl Default for StarContractMetadata {
    fn default() -> Self {
        Self {
            spec: NFT_METADATA_SPEC.to_string(),
            name: DEFAULT_CONTRACT_NAME.to_string(),
            symbol: DEFAULT_CONTRACT_SYMBOL.to_string(),
            icon: None,
            base_uri: None,
            reference: None,
            reference_hash: None,
        }
    }
}

impl StarContractMetadata {
    pub(crate) fn validate(&self) -> Result<(), StarNotaryError> {
        validate_metadata_field("spec", &self.spec)?;
        validate_metadata_field("name", &self.name)?;
        validate_metadata_field("symbol", &self.symbol)?;
        Ok(())
    }
}

#[near]
impl Contract {
    pub fn name(&self) -> String {
        self.contract_metadata.name.clone()
    }

    pub fn symbol(&self) -> String {
        self.contract_metadata.symbol.clone()
    }

    pub fn nft_metadata(&self) -> StarContractMetadata {
        self.contract_metadata.clone()
    }

    #[payable]
    #[handle_result]
    pub fn set_contract_metadata(
        &mut self,
        contract_metadata: StarContractMetadata,
    ) -> Result<(), StarNotaryError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        contract_metadata.validate()?;

        events::emit_contract_metadata_updated(
            &self.owner_id,
            &contract_metadata.name,
            &contract_metadata.symbol,
        );
        self.contract_metadata = contract_metadata;
        Ok(())
    }
}
