use soroban_sdk::{contracttype, Address, Env};

use crate::errors::WalletError;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletConfig {
    pub owner: Address,
    pub router: Address,
    pub chef: Address,
    pub weth: Address,
    pub token: Address,
    pub lp_token: Address,
    pub pool_id: u32,
}

#[contracttype]
pub enum DataKey {
    Config,
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<WalletConfig, WalletError> {
    env.storage().instance().get(&DataKey::Config).ok_or(WalletError::NotInitialized)
}

pub fn set_config(env: &Env, config: &WalletConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
