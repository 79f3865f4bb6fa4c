#![no_std]
pub mod confidential;
pub mod error;
pub mod events;
pub mod factory;
pub mod storage;
pub mod token;
pub mod types;

pub use crate::factory::ConfidentialTokenFactory;
pub use crate::token::ConfidentialToken;
