//! Interface of the confidential-computation contract that holds encrypted
//! balances. Token instances only ever write to it.

use soroban_sdk::{Address, BytesN, Env, contractclient};

#[contractclient(name = "ConfidentialLedgerClient")]
pub trait ConfidentialLedger {
    /// Encrypts a plaintext amount and returns the ciphertext handle.
    fn encode(env: Env, amount: u64) -> BytesN<32>;

    /// Homomorphically adds `value` to `recipient`'s encrypted balance in the
    /// ledger identified by `ledger`.
    fn credit(env: Env, ledger: Address, recipient: Address, value: BytesN<32>);
}
