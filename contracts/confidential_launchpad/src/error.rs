use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    InvalidArgument = 1,
    IndexOutOfRange = 2,
    AlreadyInitialized = 3,
    NotInitialized = 4,
    /// A registered token did not answer its live supply read.
    InstanceUnavailable = 5,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    InvalidArgument = 1,
    SupplyExceeded = 2,
    AlreadyInitialized = 3,
    NotInitialized = 4,
}
