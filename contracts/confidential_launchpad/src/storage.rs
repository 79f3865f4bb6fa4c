use soroban_sdk::{Env, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // Factory Keys
    FactoryConfig,
    TokenCount,
    TokenRecord(u32),

    // Token Keys
    TokenConfig,
    Creator,
    MintedSupply,
    ConfidentialLedger,
}

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Registry records outlive any single session, keep them around longer.
pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn extend_record(env: &Env, index: u32) {
    env.storage().persistent().extend_ttl(
        &DataKey::TokenRecord(index),
        RECORD_LIFETIME_THRESHOLD,
        RECORD_BUMP_AMOUNT,
    );
}
