#![no_std]

mod errors;
mod events;
mod rewards;
mod storage;

#[cfg(test)]
extern crate std;


use coralfarm_farm_interface::{PoolInfo, UserInfo};
pub use errors::ChefError;
use events::ChefEvents;
use soroban_sdk::{
    contract, contractimpl,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};
use storage::ChefConfig;

/// Staking ledger for pool-share tokens. Each registered pool earns a slice
/// of the per-ledger emission proportional to its allocation points; stakers
/// earn from their pool in proportion to their stake.
///
/// The chef must be the admin of `reward_token` so it can mint emissions.
#[contract]
pub struct Chef;

#[contractimpl]
impl Chef {
    pub fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        dev: Address,
        reward_per_ledger: i128,
        start_ledger: u32,
        bonus_end_ledger: u32,
    ) -> Result<(), ChefError> {
        if storage::has_config(&env) {
            return Err(ChefError::AlreadyInitialized);
        }
        if reward_per_ledger <= 0 {
            return Err(ChefError::InvalidAmount);
        }

        storage::set_config(
            &env,
            &ChefConfig {
                admin,
                reward_token,
                dev,
                reward_per_ledger,
                start_ledger,
                bonus_end_ledger,
            },
        );
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Registers a new pool for `lp_token`. Returns its pool id.
    pub fn add(
        env: Env,
        alloc_point: u32,
        lp_token: Address,
        with_update: bool,
    ) -> Result<u32, ChefError> {
        let config = storage::get_config(&env)?;
        config.admin.require_auth();
        storage::extend_instance_ttl(&env);

        if storage::is_registered(&env, &lp_token) {
            return Err(ChefError::PoolExists);
        }
        if with_update {
            mass_update(&env, &config)?;
        }

        let total = storage::get_total_alloc_point(&env)
            .checked_add(alloc_point)
            .ok_or(ChefError::Overflow)?;
        storage::set_total_alloc_point(&env, total);

        let pool_id = storage::get_pool_count(&env);
        let pool = PoolInfo {
            lp_token: lp_token.clone(),
            alloc_point,
            last_reward_ledger: env.ledger().sequence().max(config.start_ledger),
            acc_reward_per_share: 0,
            total_staked: 0,
        };
        storage::set_pool(&env, pool_id, &pool);
        storage::set_pool_count(&env, pool_id + 1);
        storage::set_registered(&env, &lp_token);

        ChefEvents::add_pool(&env, &lp_token, pool_id, alloc_point);
        Ok(pool_id)
    }

    /// Changes a pool's allocation points.
    pub fn set(env: Env, pool_id: u32, alloc_point: u32, with_update: bool) -> Result<(), ChefError> {
        let config = storage::get_config(&env)?;
        config.admin.require_auth();
        storage::extend_instance_ttl(&env);

        if with_update {
            mass_update(&env, &config)?;
        }

        let mut pool = storage::get_pool(&env, pool_id)?;
        let total = storage::get_total_alloc_point(&env)
            .checked_sub(pool.alloc_point)
            .and_then(|rest| rest.checked_add(alloc_point))
            .ok_or(ChefError::Overflow)?;
        storage::set_total_alloc_point(&env, total);
        pool.alloc_point = alloc_point;
        storage::set_pool(&env, pool_id, &pool);
        Ok(())
    }

    pub fn update_pool(env: Env, pool_id: u32) -> Result<PoolInfo, ChefError> {
        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);
        update(&env, &config, pool_id)
    }

    pub fn mass_update_pools(env: Env) -> Result<(), ChefError> {
        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);
        mass_update(&env, &config)
    }

    /// Stakes `amount` of the pool's share token from `from`, paying out any
    /// pending reward first. The chef pulls the tokens with `transfer_from`,
    /// so `from` must have approved the chef. Returns the harvested reward.
    pub fn deposit(env: Env, from: Address, pool_id: u32, amount: i128) -> Result<i128, ChefError> {
        from.require_auth();
        if amount < 0 {
            return Err(ChefError::InvalidAmount);
        }
        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);

        let mut pool = update(&env, &config, pool_id)?;
        let mut user = storage::get_user(&env, pool_id, &from);

        let harvested = if user.amount > 0 {
            let pending = rewards::pending_for(&user, pool.acc_reward_per_share)?;
            safe_reward_transfer(&env, &config, &from, pending)
        } else {
            0
        };

        if amount > 0 {
            let chef = env.current_contract_address();
            TokenClient::new(&env, &pool.lp_token).transfer_from(&chef, &from, &chef, &amount);
            user.amount = user.amount.checked_add(amount).ok_or(ChefError::Overflow)?;
            pool.total_staked = pool.total_staked.checked_add(amount).ok_or(ChefError::Overflow)?;
        }
        user.reward_debt = rewards::reward_debt(user.amount, pool.acc_reward_per_share)?;

        storage::set_pool(&env, pool_id, &pool);
        storage::set_user(&env, pool_id, &from, &user);
        ChefEvents::deposit(&env, &from, pool_id, amount, harvested);
        Ok(harvested)
    }

    /// Unstakes `amount` back to `from`, paying out pending reward.
    pub fn withdraw(env: Env, from: Address, pool_id: u32, amount: i128) -> Result<i128, ChefError> {
        from.require_auth();
        if amount < 0 {
            return Err(ChefError::InvalidAmount);
        }
        let config = storage::get_config(&env)?;
        storage::extend_instance_ttl(&env);

        let mut pool = update(&env, &config, pool_id)?;
        let mut user = storage::get_user(&env, pool_id, &from);
        if user.amount < amount {
            return Err(ChefError::InsufficientStake);
        }

        let pending = rewards::pending_for(&user, pool.acc_reward_per_share)?;
        let harvested = safe_reward_transfer(&env, &config, &from, pending);

        if amount > 0 {
            user.amount -= amount;
            pool.total_staked -= amount;
            TokenClient::new(&env, &pool.lp_token).transfer(
                &env.current_contract_address(),
                &from,
                &amount,
            );
        }
        user.reward_debt = rewards::reward_debt(user.amount, pool.acc_reward_per_share)?;

        storage::set_pool(&env, pool_id, &pool);
        storage::set_user(&env, pool_id, &from, &user);
        ChefEvents::withdraw(&env, &from, pool_id, amount, harvested);
        Ok(harvested)
    }

    /// Returns the whole stake without rewards.
    pub fn emergency_withdraw(env: Env, from: Address, pool_id: u32) -> Result<i128, ChefError> {
        from.require_auth();
        storage::extend_instance_ttl(&env);

        let mut pool = storage::get_pool(&env, pool_id)?;
        let user = storage::get_user(&env, pool_id, &from);
        let amount = user.amount;

        if amount > 0 {
            pool.total_staked -= amount;
            TokenClient::new(&env, &pool.lp_token).transfer(
                &env.current_contract_address(),
                &from,
                &amount,
            );
        }

        storage::set_pool(&env, pool_id, &pool);
        storage::set_user(&env, pool_id, &from, &UserInfo::default());
        ChefEvents::emergency_withdraw(&env, &from, pool_id, amount);
        Ok(amount)
    }

    /// Reward `user` would harvest from `pool_id` at the current ledger.
    pub fn pending(env: Env, pool_id: u32, user: Address) -> Result<i128, ChefError> {
        let config = storage::get_config(&env)?;
        let pool = storage::get_pool(&env, pool_id)?;
        let info = storage::get_user(&env, pool_id, &user);

        let mut acc = pool.acc_reward_per_share;
        let current = env.ledger().sequence();
        if current > pool.last_reward_ledger && pool.total_staked != 0 {
            let multiplier =
                rewards::get_multiplier(pool.last_reward_ledger, current, config.bonus_end_ledger);
            let reward = rewards::pool_reward(
                multiplier,
                config.reward_per_ledger,
                pool.alloc_point,
                storage::get_total_alloc_point(&env),
            )?;
            acc = rewards::accrue(&pool, reward)?;
        }
        rewards::pending_for(&info, acc)
    }

    pub fn pool_info(env: Env, pool_id: u32) -> Result<PoolInfo, ChefError> {
        storage::get_pool(&env, pool_id)
    }

    pub fn user_info(env: Env, pool_id: u32, user: Address) -> Result<UserInfo, ChefError> {
        storage::get_pool(&env, pool_id)?;
        Ok(storage::get_user(&env, pool_id, &user))
    }

    pub fn pool_length(env: Env) -> u32 {
        storage::get_pool_count(&env)
    }

    pub fn total_alloc_point(env: Env) -> u32 {
        storage::get_total_alloc_point(&env)
    }

    pub fn reward_token(env: Env) -> Result<Address, ChefError> {
        storage::get_config(&env).map(|c| c.reward_token)
    }

    pub fn get_multiplier(env: Env, from: u32, to: u32) -> Result<i128, ChefError> {
        let config = storage::get_config(&env)?;
        Ok(rewards::get_multiplier(from, to, config.bonus_end_ledger))
    }
}

fn mass_update(env: &Env, config: &ChefConfig) -> Result<(), ChefError> {
    for pool_id in 0..storage::get_pool_count(env) {
        update(env, config, pool_id)?;
    }
    Ok(())
}

/// Brings a pool's accumulator up to the current ledger, minting the
/// emission for the elapsed ledgers into the chef.
fn update(env: &Env, config: &ChefConfig, pool_id: u32) -> Result<PoolInfo, ChefError> {
    let mut pool = storage::get_pool(env, pool_id)?;
    let current = env.ledger().sequence();
    if current <= pool.last_reward_ledger {
        return Ok(pool);
    }

    if pool.total_staked == 0 {
        pool.last_reward_ledger = current;
        storage::set_pool(env, pool_id, &pool);
        return Ok(pool);
    }

    let multiplier =
        rewards::get_multiplier(pool.last_reward_ledger, current, config.bonus_end_ledger);
    let reward = rewards::pool_reward(
        multiplier,
        config.reward_per_ledger,
        pool.alloc_point,
        storage::get_total_alloc_point(env),
    )?;

    if reward > 0 {
        let minter = StellarAssetClient::new(env, &config.reward_token);
        let dev_reward = reward / rewards::DEV_SHARE_DIVISOR;
        if dev_reward > 0 {
            minter.mint(&config.dev, &dev_reward);
        }
        minter.mint(&env.current_contract_address(), &reward);
        pool.acc_reward_per_share = rewards::accrue(&pool, reward)?;
    }

    pool.last_reward_ledger = current;
    storage::set_pool(env, pool_id, &pool);
    Ok(pool)
}

/// Pays out up to `amount` of reward, capped by what the chef holds.
fn safe_reward_transfer(env: &Env, config: &ChefConfig, to: &Address, amount: i128) -> i128 {
    if amount <= 0 {
        return 0;
    }
    let token = TokenClient::new(env, &config.reward_token);
    let chef = env.current_contract_address();
    let payout = amount.min(token.balance(&chef));
    if payout > 0 {
        token.transfer(&chef, to, &payout);
    }
    payout
}
