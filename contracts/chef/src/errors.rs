use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ChefError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    PoolNotFound = 402,
    PoolExists = 403,
    InsufficientStake = 404,
    InvalidAmount = 405,
    Overflow = 406,
}
