use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    Expired = 300,
    AlreadyInitialized = 301,
    NotInitialized = 302,
    PairNotFound = 304,
    IdenticalTokens = 305,
    ZeroAmount = 306,
    InsufficientLiquidity = 307,
    InsufficientAAmount = 308,
    InsufficientBAmount = 309,
    Overflow = 310,
}
