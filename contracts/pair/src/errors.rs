use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    InsufficientLiquidity = 102,
    Overflow = 110,
    InsufficientLiquidityMinted = 112,
    InsufficientLiquidityBurned = 113,
}
