#![no_std]

mod errors;
mod helpers;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

pub use errors::RouterError;
use helpers::{get_pair_address, get_reserves, optimal_amounts, PairClient};
use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};
use storage::{get_factory, has_factory, set_factory};

fn check_deadline(env: &Env, deadline: u64) -> Result<(), RouterError> {
    if env.ledger().timestamp() > deadline {
        return Err(RouterError::Expired);
    }
    Ok(())
}

/// Liquidity router. Tokens are pulled from `to` with `transfer_from`, so
/// callers approve the router for both tokens (or the share token on removal)
/// beforehand. This lets contracts such as the mining wallet route their own
/// balances without nested authorization.
#[contract]
pub struct Router;

#[contractimpl]
impl Router {
    pub fn initialize(env: Env, factory: Address) -> Result<(), RouterError> {
        if has_factory(&env) {
            return Err(RouterError::AlreadyInitialized);
        }
        set_factory(&env, &factory);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn add_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128, i128), RouterError> {
        check_deadline(&env, deadline)?;

        if amount_a_desired <= 0 || amount_b_desired <= 0 {
            return Err(RouterError::ZeroAmount);
        }

        to.require_auth();
        storage::extend_instance_ttl(&env);

        let factory = get_factory(&env).ok_or(RouterError::NotInitialized)?;
        let pair_address = get_pair_address(&env, &factory, &token_a, &token_b)?;
        let (reserve_a, reserve_b) = get_reserves(&env, &pair_address, &token_a, &token_b)?;

        let (amount_a, amount_b) = optimal_amounts(
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            reserve_a,
            reserve_b,
        )?;

        let router = env.current_contract_address();
        TokenClient::new(&env, &token_a).transfer_from(&router, &to, &pair_address, &amount_a);
        TokenClient::new(&env, &token_b).transfer_from(&router, &to, &pair_address, &amount_b);

        let liquidity = PairClient::new(&env, &pair_address).mint(&to);

        Ok((amount_a, amount_b, liquidity))
    }

    pub fn remove_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        liquidity: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> Result<(i128, i128), RouterError> {
        check_deadline(&env, deadline)?;

        if liquidity <= 0 {
            return Err(RouterError::ZeroAmount);
        }

        to.require_auth();
        storage::extend_instance_ttl(&env);

        let factory = get_factory(&env).ok_or(RouterError::NotInitialized)?;
        let pair_address = get_pair_address(&env, &factory, &token_a, &token_b)?;
        let pair_client = PairClient::new(&env, &pair_address);

        // Move the shares into the pair, then let the pair burn them.
        let lp_token_client = TokenClient::new(&env, &pair_client.lp_token());
        lp_token_client.transfer_from(
            &env.current_contract_address(),
            &to,
            &pair_address,
            &liquidity,
        );

        // Pair amounts come back in sorted token order.
        let (amount_0, amount_1) = pair_client.burn(&to);
        let (amount_a, amount_b) = if token_a < token_b {
            (amount_0, amount_1)
        } else {
            (amount_1, amount_0)
        };

        if amount_a < amount_a_min {
            return Err(RouterError::InsufficientAAmount);
        }
        if amount_b < amount_b_min {
            return Err(RouterError::InsufficientBAmount);
        }

        Ok((amount_a, amount_b))
    }

    pub fn quote(
        _env: Env,
        amount_a: i128,
        reserve_a: i128,
        reserve_b: i128,
    ) -> Result<i128, RouterError> {
        helpers::quote(amount_a, reserve_a, reserve_b)
    }

    pub fn pair_for(env: Env, token_a: Address, token_b: Address) -> Result<Address, RouterError> {
        let factory = get_factory(&env).ok_or(RouterError::NotInitialized)?;
        get_pair_address(&env, &factory, &token_a, &token_b)
    }

    pub fn factory(env: Env) -> Result<Address, RouterError> {
        get_factory(&env).ok_or(RouterError::NotInitialized)
    }
}
