use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    AlreadyInitialized = 500,
    NotInitialized = 501,
    Unauthorized = 502,
    InsufficientBalance = 503,
    InsufficientAllowance = 504,
    /// The router, pair or chef refused the call.
    CollaboratorRejected = 505,
    InvalidAmount = 506,
    IdenticalTokens = 507,
    /// The chef pool does not stake the pair's share token.
    PoolMismatch = 508,
}
