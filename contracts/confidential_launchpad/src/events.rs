use soroban_sdk::{Address, Env, String, contractevent};

#[contractevent]
#[derive(Clone, Debug)]
pub struct TokenCreated {
    pub token: Address,
    pub creator: Address,
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    pub initial_price: u128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ConfidentialMint {
    pub caller: Address,
    pub recipient: Address,
    pub amount: u64,
}

pub fn emit_token_created(
    env: &Env,
    token: Address,
    creator: Address,
    name: String,
    symbol: String,
    max_supply: u64,
    initial_price: u128,
) {
    TokenCreated {
        token,
        creator,
        name,
        symbol,
        max_supply,
        initial_price,
    }
    .publish(env);
}

pub fn emit_confidential_mint(env: &Env, caller: Address, recipient: Address, amount: u64) {
    ConfidentialMint {
        caller,
        recipient,
        amount,
    }
    .publish(env);
}
