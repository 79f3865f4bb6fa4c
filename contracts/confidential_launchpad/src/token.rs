use crate::confidential::ConfidentialLedgerClient;
use crate::error::TokenError;
use crate::events;
use crate::storage::{self, DataKey};
use crate::types::{MintPolicy, TokenConfig, TokenDetails};
use soroban_sdk::{Address, Env, String, contract, contractimpl, log};

#[contract]
pub struct ConfidentialToken;

#[contractimpl]
impl ConfidentialToken {
    pub fn init(
        env: Env,
        creator: Address,
        config: TokenConfig,
        confidential_ledger: Address,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::TokenConfig) {
            return Err(TokenError::AlreadyInitialized);
        }
        if !config.is_valid() {
            return Err(TokenError::InvalidArgument);
        }

        env.storage().instance().set(&DataKey::TokenConfig, &config);
        env.storage().instance().set(&DataKey::Creator, &creator);
        env.storage().instance().set(&DataKey::MintedSupply, &0u64);
        env.storage()
            .instance()
            .set(&DataKey::ConfidentialLedger, &confidential_ledger);
        storage::extend_instance(&env);

        Ok(())
    }

    /// Mints `amount` to `recipient`'s encrypted balance.
    ///
    /// Minting is free and open: `caller` only has to prove its identity,
    /// it does not have to be the creator. The plaintext supply is written
    /// before the ledger is credited; a failing ledger call aborts the
    /// invocation and the host discards the supply write with it.
    pub fn mint(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: u64,
    ) -> Result<(), TokenError> {
        caller.require_auth();

        let config = Self::config(&env)?;
        match config.mint_policy {
            MintPolicy::Open => {}
        }

        if amount == 0 {
            return Err(TokenError::InvalidArgument);
        }

        let minted = Self::load_minted(&env);
        // Widen before adding so values near u64::MAX cannot wrap past the cap.
        let next = minted as u128 + amount as u128;
        if next > config.max_supply as u128 {
            log!(
                &env,
                "mint rejected: minted {}, amount {}, cap {}",
                minted,
                amount,
                config.max_supply
            );
            return Err(TokenError::SupplyExceeded);
        }

        env.storage()
            .instance()
            .set(&DataKey::MintedSupply, &(next as u64));
        storage::extend_instance(&env);

        let ledger = Self::ledger(&env)?;
        let ledger_client = ConfidentialLedgerClient::new(&env, &ledger);
        let value = ledger_client.encode(&amount);
        ledger_client.credit(&env.current_contract_address(), &recipient, &value);

        log!(&env, "minted {} to {}", amount, recipient);
        events::emit_confidential_mint(&env, caller, recipient, amount);

        Ok(())
    }

    pub fn details(env: Env) -> Result<TokenDetails, TokenError> {
        let config = Self::config(&env)?;
        Ok(TokenDetails {
            name: config.name,
            symbol: config.symbol,
            max_supply: config.max_supply,
            minted_supply: Self::load_minted(&env),
            initial_price: config.initial_price,
            creator: Self::load_creator(&env)?,
        })
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(Self::config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(Self::config(&env)?.symbol)
    }

    pub fn max_supply(env: Env) -> Result<u64, TokenError> {
        Ok(Self::config(&env)?.max_supply)
    }

    pub fn minted_supply(env: Env) -> Result<u64, TokenError> {
        Self::config(&env)?;
        Ok(Self::load_minted(&env))
    }

    pub fn remaining_supply(env: Env) -> Result<u64, TokenError> {
        let config = Self::config(&env)?;
        Ok(config.max_supply - Self::load_minted(&env))
    }

    pub fn initial_price(env: Env) -> Result<u128, TokenError> {
        Ok(Self::config(&env)?.initial_price)
    }

    pub fn mint_policy(env: Env) -> Result<MintPolicy, TokenError> {
        Ok(Self::config(&env)?.mint_policy)
    }

    pub fn creator(env: Env) -> Result<Address, TokenError> {
        Self::load_creator(&env)
    }

    pub fn confidential_ledger(env: Env) -> Result<Address, TokenError> {
        Self::ledger(&env)
    }

    fn load_creator(env: &Env) -> Result<Address, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Creator)
            .ok_or(TokenError::NotInitialized)
    }

    fn config(env: &Env) -> Result<TokenConfig, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::TokenConfig)
            .ok_or(TokenError::NotInitialized)
    }

    fn ledger(env: &Env) -> Result<Address, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::ConfidentialLedger)
            .ok_or(TokenError::NotInitialized)
    }

    fn load_minted(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::MintedSupply)
            .unwrap_or(0)
    }
}
