#![no_std]

use coralfarm_farm_interface::LiquidityRouter;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockRouterError {
    Rejected = 900,
    NotInitialized = 901,
}

#[contracttype]
pub enum DataKey {
    Pair,
}

/// Router stand-in that resolves a fixed pair but refuses every deposit.
#[contract]
pub struct MockRouter;

#[contractimpl]
impl MockRouter {
    pub fn initialize(env: Env, pair: Address) {
        env.storage().instance().set(&DataKey::Pair, &pair);
    }
}

#[contractimpl]
impl LiquidityRouter for MockRouter {
    fn add_liquidity(
        env: Env,
        _token_a: Address,
        _token_b: Address,
        _amount_a_desired: i128,
        _amount_b_desired: i128,
        _amount_a_min: i128,
        _amount_b_min: i128,
        _to: Address,
        _deadline: u64,
    ) -> (i128, i128, i128) {
        panic_with_error!(&env, MockRouterError::Rejected)
    }

    fn pair_for(env: Env, _token_a: Address, _token_b: Address) -> Address {
        match env.storage().instance().get(&DataKey::Pair) {
            Some(pair) => pair,
            None => panic_with_error!(&env, MockRouterError::NotInitialized),
        }
    }
}
