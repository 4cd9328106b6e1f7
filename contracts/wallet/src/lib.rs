#![no_std]

mod errors;
mod events;
mod storage;

#[cfg(test)]
extern crate std;


use coralfarm_farm_interface::{FarmClient, LiquidityPairClient, LiquidityRouterClient};
pub use errors::WalletError;
use events::WalletEvents;
use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env};
pub use storage::WalletConfig;

/// Seconds the router has to execute the liquidity deposit.
pub const DEADLINE_WINDOW: u64 = 300;

/// Per-owner liquidity-mining wallet.
///
/// `deposit` pulls both assets from the owner, adds them to the
/// `(token, weth)` pool through the router and stakes the resulting pool
/// shares in the chef, all inside one invocation. Any failure returns an
/// error, and the host reverts every transfer made along the way.
///
/// Between calls the wallet holds nothing: leftovers from the router and
/// rewards harvested by the chef go straight back to the owner.
#[contract]
pub struct Wallet;

#[contractimpl]
impl Wallet {
    pub fn initialize(
        env: Env,
        owner: Address,
        router: Address,
        chef: Address,
        weth: Address,
        token: Address,
        pool_id: u32,
    ) -> Result<(), WalletError> {
        if storage::has_config(&env) {
            return Err(WalletError::AlreadyInitialized);
        }
        owner.require_auth();

        if token == weth {
            return Err(WalletError::IdenticalTokens);
        }

        let pair = match LiquidityRouterClient::new(&env, &router).try_pair_for(&token, &weth) {
            Ok(Ok(pair)) => pair,
            _ => {
                log!(&env, "router has no pair for", token, weth);
                return Err(WalletError::CollaboratorRejected);
            }
        };
        let lp_token = match LiquidityPairClient::new(&env, &pair).try_lp_token() {
            Ok(Ok(lp_token)) => lp_token,
            _ => return Err(WalletError::CollaboratorRejected),
        };
        let pool = match FarmClient::new(&env, &chef).try_pool_info(&pool_id) {
            Ok(Ok(pool)) => pool,
            _ => {
                log!(&env, "chef has no pool", pool_id);
                return Err(WalletError::CollaboratorRejected);
            }
        };
        if pool.lp_token != lp_token {
            return Err(WalletError::PoolMismatch);
        }

        storage::set_config(
            &env,
            &WalletConfig {
                owner,
                router,
                chef,
                weth,
                token,
                lp_token,
                pool_id,
            },
        );
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Moves `amount_a` of `token` and `amount_b` of `weth` from the owner
    /// into the pool and stakes the minted shares.
    ///
    /// The owner must have approved the wallet for both amounts. Returns the
    /// amounts the pool actually took and the shares staked.
    pub fn deposit(
        env: Env,
        caller: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> Result<(i128, i128, i128), WalletError> {
        let config = storage::get_config(&env)?;
        caller.require_auth();
        if caller != config.owner {
            log!(&env, "deposit rejected: not the owner", caller);
            return Err(WalletError::Unauthorized);
        }
        if amount_a <= 0 || amount_b <= 0 {
            return Err(WalletError::InvalidAmount);
        }
        storage::extend_instance_ttl(&env);

        let wallet = env.current_contract_address();
        let token_a = TokenClient::new(&env, &config.token);
        let token_b = TokenClient::new(&env, &config.weth);

        if token_a.balance(&caller) < amount_a || token_b.balance(&caller) < amount_b {
            log!(&env, "deposit rejected: insufficient balance", amount_a, amount_b);
            return Err(WalletError::InsufficientBalance);
        }
        if token_a.allowance(&caller, &wallet) < amount_a
            || token_b.allowance(&caller, &wallet) < amount_b
        {
            log!(&env, "deposit rejected: insufficient allowance", amount_a, amount_b);
            return Err(WalletError::InsufficientAllowance);
        }

        token_a.transfer_from(&wallet, &caller, &wallet, &amount_a);
        token_b.transfer_from(&wallet, &caller, &wallet, &amount_b);

        // Allowances granted here expire with the current ledger.
        let expiration = env.ledger().sequence();
        token_a.approve(&wallet, &config.router, &amount_a, &expiration);
        token_b.approve(&wallet, &config.router, &amount_b, &expiration);

        let deadline = env.ledger().timestamp() + DEADLINE_WINDOW;
        let (used_a, used_b, liquidity) =
            match LiquidityRouterClient::new(&env, &config.router).try_add_liquidity(
                &config.token,
                &config.weth,
                &amount_a,
                &amount_b,
                &0,
                &0,
                &wallet,
                &deadline,
            ) {
                Ok(Ok(amounts)) => amounts,
                _ => {
                    log!(&env, "deposit rejected: router refused liquidity");
                    return Err(WalletError::CollaboratorRejected);
                }
            };

        refund(&token_a, &wallet, &caller, amount_a - used_a);
        refund(&token_b, &wallet, &caller, amount_b - used_b);

        TokenClient::new(&env, &config.lp_token).approve(
            &wallet,
            &config.chef,
            &liquidity,
            &expiration,
        );
        let chef = FarmClient::new(&env, &config.chef);
        let harvested = match chef.try_deposit(&wallet, &config.pool_id, &liquidity) {
            Ok(Ok(harvested)) => harvested,
            _ => {
                log!(&env, "deposit rejected: chef refused stake", config.pool_id);
                return Err(WalletError::CollaboratorRejected);
            }
        };

        if harvested > 0 {
            let reward_token = match chef.try_reward_token() {
                Ok(Ok(reward_token)) => reward_token,
                _ => return Err(WalletError::CollaboratorRejected),
            };
            TokenClient::new(&env, &reward_token).transfer(&wallet, &caller, &harvested);
        }

        WalletEvents::deposit(&env, &caller, used_a, used_b, liquidity, harvested);
        Ok((used_a, used_b, liquidity))
    }

    /// Pool shares the chef holds on this wallet's behalf.
    pub fn staked(env: Env, pool_id: u32) -> Result<i128, WalletError> {
        let config = storage::get_config(&env)?;
        let wallet = env.current_contract_address();
        match FarmClient::new(&env, &config.chef).try_user_info(&pool_id, &wallet) {
            Ok(Ok(info)) => Ok(info.amount),
            _ => Err(WalletError::CollaboratorRejected),
        }
    }

    /// Reward the wallet could harvest from `pool_id` right now.
    pub fn pending(env: Env, pool_id: u32) -> Result<i128, WalletError> {
        let config = storage::get_config(&env)?;
        let wallet = env.current_contract_address();
        match FarmClient::new(&env, &config.chef).try_pending(&pool_id, &wallet) {
            Ok(Ok(pending)) => Ok(pending),
            _ => Err(WalletError::CollaboratorRejected),
        }
    }

    pub fn owner(env: Env) -> Result<Address, WalletError> {
        storage::get_config(&env).map(|c| c.owner)
    }

    pub fn router(env: Env) -> Result<Address, WalletError> {
        storage::get_config(&env).map(|c| c.router)
    }

    pub fn chef(env: Env) -> Result<Address, WalletError> {
        storage::get_config(&env).map(|c| c.chef)
    }

    pub fn weth(env: Env) -> Result<Address, WalletError> {
        storage::get_config(&env).map(|c| c.weth)
    }

    pub fn token(env: Env) -> Result<Address, WalletError> {
        storage::get_config(&env).map(|c| c.token)
    }

    pub fn lp_token(env: Env) -> Result<Address, WalletError> {
        storage::get_config(&env).map(|c| c.lp_token)
    }

    pub fn pool_id(env: Env) -> Result<u32, WalletError> {
        storage::get_config(&env).map(|c| c.pool_id)
    }
}

fn refund(token: &TokenClient, wallet: &Address, owner: &Address, amount: i128) {
    if amount > 0 {
        token.transfer(wallet, owner, &amount);
    }
}
