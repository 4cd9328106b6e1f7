#![no_std]

//! Collaborator interfaces consumed by the liquidity-mining wallet.
//!
//! The wallet only ever talks to the router, the pair and the chef through
//! these clients, so any contract exposing the same functions can stand in
//! for them (tests swap in rejecting routers this way).

use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Per-pool accounting kept by the chef.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub lp_token: Address,
    pub alloc_point: u32,
    pub last_reward_ledger: u32,
    /// Accumulated reward per staked share, scaled by `ACC_REWARD_PRECISION`.
    pub acc_reward_per_share: i128,
    pub total_staked: i128,
}

/// A depositor's position in one chef pool.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserInfo {
    pub amount: i128,
    pub reward_debt: i128,
}

/// Scale applied to `acc_reward_per_share`.
pub const ACC_REWARD_PRECISION: i128 = 1_000_000_000_000;

/// Liquidity router: pulls both tokens from `to` and mints pool shares to it.
#[contractclient(name = "LiquidityRouterClient")]
pub trait LiquidityRouter {
    fn add_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128);

    fn pair_for(env: Env, token_a: Address, token_b: Address) -> Address;
}

#[contractclient(name = "LiquidityPairClient")]
pub trait LiquidityPair {
    fn lp_token(env: Env) -> Address;
}

/// Staking ledger ("chef"). Deposits pull the pool-share token from `from`
/// through an allowance granted to the chef and return the reward harvested
/// on the way in.
#[contractclient(name = "FarmClient")]
pub trait Farm {
    fn deposit(env: Env, from: Address, pool_id: u32, amount: i128) -> i128;
    fn pool_info(env: Env, pool_id: u32) -> PoolInfo;
    fn user_info(env: Env, pool_id: u32, user: Address) -> UserInfo;
    fn pending(env: Env, pool_id: u32, user: Address) -> i128;
    fn reward_token(env: Env) -> Address;
}
