#![no_std]

mod errors;
mod events;
mod math;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; pair is no_std so we must opt-in explicitly.


pub use errors::PairError;
use events::PairEvents;
use math::MINIMUM_LIQUIDITY;
use soroban_sdk::{contract, contractclient, contractimpl, token::TokenClient, Address, Env};
use storage::{get_pair_state, has_pair_state, set_pair_state, PairStorage};

/// The pair only needs the minting surface of its share token on top of SEP-41.
#[contractclient(name = "ShareTokenClient")]
pub trait ShareTokenInterface {
    fn mint(env: Env, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
    fn balance(env: Env, id: Address) -> i128;
    fn total_supply(env: Env) -> i128;
}

#[contract]
pub struct Pair;

#[contractimpl]
impl Pair {
    /// Binds the pair to its (sorted) tokens and share token. Called by the
    /// factory that registers the pair.
    pub fn initialize(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
        lp_token: Address,
    ) -> Result<(), PairError> {
        if has_pair_state(&env) {
            return Err(PairError::AlreadyInitialized);
        }
        factory.require_auth();

        set_pair_state(
            &env,
            &PairStorage {
                factory,
                token_a,
                token_b,
                lp_token,
                reserve_a: 0,
                reserve_b: 0,
                block_timestamp_last: env.ledger().timestamp(),
                k_last: 0,
            },
        );
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Mints shares to `to` for whatever was transferred in since the last
    /// reserve update.
    pub fn mint(env: Env, to: Address) -> Result<i128, PairError> {
        let mut state = get_pair_state(&env).ok_or(PairError::NotInitialized)?;
        storage::extend_instance_ttl(&env);

        let contract = env.current_contract_address();
        let balance_a = TokenClient::new(&env, &state.token_a).balance(&contract);
        let balance_b = TokenClient::new(&env, &state.token_b).balance(&contract);
        let amount_a = balance_a - state.reserve_a;
        let amount_b = balance_b - state.reserve_b;

        let share = ShareTokenClient::new(&env, &state.lp_token);
        let total_supply = share.total_supply();
        let liquidity = math::liquidity_for(
            amount_a,
            amount_b,
            state.reserve_a,
            state.reserve_b,
            total_supply,
        )?;
        if liquidity <= 0 {
            return Err(PairError::InsufficientLiquidityMinted);
        }

        if total_supply == 0 {
            share.mint(&contract, &MINIMUM_LIQUIDITY);
        }
        share.mint(&to, &liquidity);

        update(&env, &mut state, balance_a, balance_b)?;
        PairEvents::mint(&env, &to, amount_a, amount_b, liquidity);
        Ok(liquidity)
    }

    /// Burns the shares sent to the pair (minus the locked minimum) and pays
    /// out the proportional reserves to `to`.
    pub fn burn(env: Env, to: Address) -> Result<(i128, i128), PairError> {
        let mut state = get_pair_state(&env).ok_or(PairError::NotInitialized)?;
        storage::extend_instance_ttl(&env);

        let contract = env.current_contract_address();
        let token_a = TokenClient::new(&env, &state.token_a);
        let token_b = TokenClient::new(&env, &state.token_b);
        let share = ShareTokenClient::new(&env, &state.lp_token);

        let total_supply = share.total_supply();
        let liquidity = share.balance(&contract) - MINIMUM_LIQUIDITY;
        if liquidity <= 0 {
            return Err(PairError::InsufficientLiquidityBurned);
        }

        let amount_a = math::mul_div(liquidity, token_a.balance(&contract), total_supply)?;
        let amount_b = math::mul_div(liquidity, token_b.balance(&contract), total_supply)?;
        if amount_a <= 0 || amount_b <= 0 {
            return Err(PairError::InsufficientLiquidityBurned);
        }

        share.burn(&contract, &liquidity);
        token_a.transfer(&contract, &to, &amount_a);
        token_b.transfer(&contract, &to, &amount_b);

        let balance_a = token_a.balance(&contract);
        let balance_b = token_b.balance(&contract);
        update(&env, &mut state, balance_a, balance_b)?;
        PairEvents::burn(&env, &to, amount_a, amount_b, liquidity);
        Ok((amount_a, amount_b))
    }

    /// Forces reserves to match the pair's actual token balances.
    pub fn sync(env: Env) -> Result<(), PairError> {
        let mut state = get_pair_state(&env).ok_or(PairError::NotInitialized)?;
        let contract = env.current_contract_address();
        let balance_a = TokenClient::new(&env, &state.token_a).balance(&contract);
        let balance_b = TokenClient::new(&env, &state.token_b).balance(&contract);
        update(&env, &mut state, balance_a, balance_b)
    }

    pub fn get_reserves(env: Env) -> Result<(i128, i128, u64), PairError> {
        let state = get_pair_state(&env).ok_or(PairError::NotInitialized)?;
        Ok((state.reserve_a, state.reserve_b, state.block_timestamp_last))
    }

    pub fn lp_token(env: Env) -> Result<Address, PairError> {
        get_pair_state(&env).map(|s| s.lp_token).ok_or(PairError::NotInitialized)
    }

    pub fn tokens(env: Env) -> Result<(Address, Address), PairError> {
        get_pair_state(&env).map(|s| (s.token_a, s.token_b)).ok_or(PairError::NotInitialized)
    }
}

fn update(
    env: &Env,
    state: &mut PairStorage,
    balance_a: i128,
    balance_b: i128,
) -> Result<(), PairError> {
    state.reserve_a = balance_a;
    state.reserve_b = balance_b;
    state.block_timestamp_last = env.ledger().timestamp();
    state.k_last = balance_a.checked_mul(balance_b).ok_or(PairError::Overflow)?;
    set_pair_state(env, state);
    PairEvents::sync(env, balance_a, balance_b);
    Ok(())
}
