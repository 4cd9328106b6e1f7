use coralfarm_farm_interface::{PoolInfo, UserInfo};
use soroban_sdk::{contracttype, Address, Env};

use crate::errors::ChefError;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const POSITION_LIFETIME_THRESHOLD: u32 = 17280;
const POSITION_BUMP_AMOUNT: u32 = 518400;

#[contracttype]
#[derive(Clone, Debug)]
pub struct ChefConfig {
    pub admin: Address,
    pub reward_token: Address,
    /// Receives an extra tenth of every emission.
    pub dev: Address,
    pub reward_per_ledger: i128,
    pub start_ledger: u32,
    pub bonus_end_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    PoolCount,
    TotalAllocPoint,
    Pool(u32),
    User(u32, Address),
    Registered(Address),
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<ChefConfig, ChefError> {
    env.storage().instance().get(&DataKey::Config).ok_or(ChefError::NotInitialized)
}

pub fn set_config(env: &Env, config: &ChefConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_pool_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::PoolCount).unwrap_or(0)
}

pub fn set_pool_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::PoolCount, &count);
}

pub fn get_total_alloc_point(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::TotalAllocPoint).unwrap_or(0)
}

pub fn set_total_alloc_point(env: &Env, total: u32) {
    env.storage().instance().set(&DataKey::TotalAllocPoint, &total);
}

pub fn is_registered(env: &Env, lp_token: &Address) -> bool {
    env.storage().instance().has(&DataKey::Registered(lp_token.clone()))
}

pub fn set_registered(env: &Env, lp_token: &Address) {
    env.storage().instance().set(&DataKey::Registered(lp_token.clone()), &true);
}

pub fn get_pool(env: &Env, pool_id: u32) -> Result<PoolInfo, ChefError> {
    let key = DataKey::Pool(pool_id);
    let pool = env.storage().persistent().get(&key).ok_or(ChefError::PoolNotFound)?;
    env.storage().persistent().extend_ttl(&key, POSITION_LIFETIME_THRESHOLD, POSITION_BUMP_AMOUNT);
    Ok(pool)
}

pub fn set_pool(env: &Env, pool_id: u32, pool: &PoolInfo) {
    let key = DataKey::Pool(pool_id);
    env.storage().persistent().set(&key, pool);
    env.storage().persistent().extend_ttl(&key, POSITION_LIFETIME_THRESHOLD, POSITION_BUMP_AMOUNT);
}

pub fn get_user(env: &Env, pool_id: u32, user: &Address) -> UserInfo {
    let key = DataKey::User(pool_id, user.clone());
    match env.storage().persistent().get::<_, UserInfo>(&key) {
        Some(info) => {
            env.storage().persistent().extend_ttl(
                &key,
                POSITION_LIFETIME_THRESHOLD,
                POSITION_BUMP_AMOUNT,
            );
            info
        }
        None => UserInfo::default(),
    }
}

pub fn set_user(env: &Env, pool_id: u32, user: &Address, info: &UserInfo) {
    let key = DataKey::User(pool_id, user.clone());
    env.storage().persistent().set(&key, info);
    env.storage().persistent().extend_ttl(&key, POSITION_LIFETIME_THRESHOLD, POSITION_BUMP_AMOUNT);
}
