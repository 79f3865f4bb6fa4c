use soroban_sdk::{Address, BytesN, String, contracttype};

/// Who may call `mint` on a token instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum MintPolicy {
    /// Any authenticated caller may mint to any recipient, bounded only by the cap.
    Open,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    pub initial_price: u128, // wei, display only
    pub mint_policy: MintPolicy,
}

impl TokenConfig {
    pub fn is_valid(&self) -> bool {
        self.name.len() > 0 && self.symbol.len() > 0 && self.max_supply > 0
    }
}

/// Registry entry. `minted_supply` is the value seen at creation; reads
/// through the factory replace it with the instance's live counter.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenRecord {
    pub token: Address,
    pub creator: Address,
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    pub minted_supply: u64,
    pub initial_price: u128,
    pub created_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenDetails {
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    pub minted_supply: u64,
    pub initial_price: u128,
    pub creator: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FactoryConfig {
    pub admin: Address,
    pub token_wasm_hash: BytesN<32>,
    pub confidential_ledger: Address,
}
