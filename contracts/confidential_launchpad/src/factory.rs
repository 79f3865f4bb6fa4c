use crate::error::FactoryError;
use crate::events;
use crate::storage::{self, DataKey};
use crate::token::ConfidentialTokenClient;
use crate::types::{FactoryConfig, MintPolicy, TokenConfig, TokenRecord};
use soroban_sdk::deploy::DeployerWithAddress;
use soroban_sdk::{Address, BytesN, Env, String, Vec, contract, contractimpl, log};

#[contract]
pub struct ConfidentialTokenFactory;

#[contractimpl]
impl ConfidentialTokenFactory {
    pub fn initialize(
        env: Env,
        admin: Address,
        token_wasm_hash: BytesN<32>,
        confidential_ledger: Address,
    ) -> Result<(), FactoryError> {
        if env.storage().instance().has(&DataKey::FactoryConfig) {
            return Err(FactoryError::AlreadyInitialized);
        }
        admin.require_auth();

        let config = FactoryConfig {
            admin,
            token_wasm_hash,
            confidential_ledger,
        };
        env.storage().instance().set(&DataKey::FactoryConfig, &config);
        env.storage().instance().set(&DataKey::TokenCount, &0u32);
        storage::extend_instance(&env);
        Ok(())
    }

    /// Deploys a new capped confidential token owned by `creator` and
    /// appends its record to the registry.
    pub fn create_token(
        env: Env,
        creator: Address,
        name: String,
        symbol: String,
        max_supply: u64,
        initial_price: u128,
    ) -> Result<Address, FactoryError> {
        creator.require_auth();

        let config = load_config(&env)?;
        let token_config = TokenConfig {
            name,
            symbol,
            max_supply,
            initial_price,
            mint_policy: MintPolicy::Open,
        };
        if !token_config.is_valid() {
            return Err(FactoryError::InvalidArgument);
        }

        let index = load_count(&env);
        let token = token_deployer(&env, index).deploy_v2(config.token_wasm_hash, ());

        ConfidentialTokenClient::new(&env, &token).init(
            &creator,
            &token_config,
            &config.confidential_ledger,
        );

        record_token(&env, &creator, &token, &token_config);

        Ok(token)
    }

    /// Every record in creation order, each carrying the live minted supply
    /// of its instance. Supplies are read one instance at a time, so they
    /// need not describe a single point in time.
    pub fn list_tokens(env: Env) -> Result<Vec<TokenRecord>, FactoryError> {
        let count = load_count(&env);
        load_live_range(&env, 0, count)
    }

    pub fn list_tokens_page(
        env: Env,
        start: u32,
        limit: u32,
    ) -> Result<Vec<TokenRecord>, FactoryError> {
        let count = load_count(&env);
        let end = start.saturating_add(limit).min(count);
        load_live_range(&env, start, end)
    }

    pub fn get_token(env: Env, index: u32) -> Result<TokenRecord, FactoryError> {
        let record = load_record(&env, index)?;
        with_live_supply(&env, record)
    }

    pub fn get_token_address(env: Env, index: u32) -> Result<Address, FactoryError> {
        Ok(load_record(&env, index)?.token)
    }

    /// Address the token at `index` is (or will be) deployed to.
    pub fn predict_token_address(env: Env, index: u32) -> Address {
        token_deployer(&env, index).deployed_address()
    }

    pub fn token_count(env: Env) -> u32 {
        load_count(&env)
    }

    pub fn get_config(env: Env) -> Result<FactoryConfig, FactoryError> {
        load_config(&env)
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), FactoryError> {
        let mut config = load_config(&env)?;
        config.admin.require_auth();
        config.admin = new_admin;
        env.storage().instance().set(&DataKey::FactoryConfig, &config);
        storage::extend_instance(&env);
        Ok(())
    }

    /// Changes the wasm future tokens are deployed from. Existing tokens keep
    /// their code.
    pub fn set_token_wasm(env: Env, token_wasm_hash: BytesN<32>) -> Result<(), FactoryError> {
        let mut config = load_config(&env)?;
        config.admin.require_auth();
        config.token_wasm_hash = token_wasm_hash;
        env.storage().instance().set(&DataKey::FactoryConfig, &config);
        storage::extend_instance(&env);
        Ok(())
    }
}

/// Appends the record for an already initialised token and announces it.
/// Returns the record's index.
pub(crate) fn record_token(
    env: &Env,
    creator: &Address,
    token: &Address,
    config: &TokenConfig,
) -> u32 {
    let index = load_count(env);
    let record = TokenRecord {
        token: token.clone(),
        creator: creator.clone(),
        name: config.name.clone(),
        symbol: config.symbol.clone(),
        max_supply: config.max_supply,
        minted_supply: 0,
        initial_price: config.initial_price,
        created_at: env.ledger().timestamp(),
    };

    env.storage()
        .persistent()
        .set(&DataKey::TokenRecord(index), &record);
    env.storage()
        .instance()
        .set(&DataKey::TokenCount, &(index + 1));
    storage::extend_record(env, index);
    storage::extend_instance(env);

    log!(env, "token {} created at index {}", token.clone(), index);
    events::emit_token_created(
        env,
        record.token,
        record.creator,
        record.name,
        record.symbol,
        record.max_supply,
        record.initial_price,
    );

    index
}

fn load_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TokenCount)
        .unwrap_or(0)
}

fn load_config(env: &Env) -> Result<FactoryConfig, FactoryError> {
    env.storage()
        .instance()
        .get(&DataKey::FactoryConfig)
        .ok_or(FactoryError::NotInitialized)
}

fn load_record(env: &Env, index: u32) -> Result<TokenRecord, FactoryError> {
    if index >= load_count(env) {
        return Err(FactoryError::IndexOutOfRange);
    }
    let record = env
        .storage()
        .persistent()
        .get(&DataKey::TokenRecord(index))
        .ok_or(FactoryError::IndexOutOfRange)?;
    storage::extend_record(env, index);
    Ok(record)
}

fn load_live_range(env: &Env, start: u32, end: u32) -> Result<Vec<TokenRecord>, FactoryError> {
    let mut records = Vec::new(env);
    for index in start..end {
        let record = load_record(env, index)?;
        records.push_back(with_live_supply(env, record)?);
    }
    Ok(records)
}

/// Replaces the stored supply snapshot with the instance's current counter.
/// An instance that cannot answer fails the whole read.
fn with_live_supply(env: &Env, mut record: TokenRecord) -> Result<TokenRecord, FactoryError> {
    let client = ConfidentialTokenClient::new(env, &record.token);
    record.minted_supply = match client.try_minted_supply() {
        Ok(Ok(supply)) => supply,
        _ => return Err(FactoryError::InstanceUnavailable),
    };
    Ok(record)
}

fn token_deployer(env: &Env, index: u32) -> DeployerWithAddress {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&index.to_be_bytes());
    env.deployer().with_current_contract(BytesN::from_array(env, &salt))
}
