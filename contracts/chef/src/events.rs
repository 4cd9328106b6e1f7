use soroban_sdk::{symbol_short, Address, Env};

pub struct ChefEvents;

impl ChefEvents {
    /// Topics: `("add", lp_token)`
    /// Data:   `(pool_id, alloc_point)`
    pub fn add_pool(env: &Env, lp_token: &Address, pool_id: u32, alloc_point: u32) {
        env.events().publish((symbol_short!("add"), lp_token), (pool_id, alloc_point));
    }

    /// Topics: `("deposit", user)`
    /// Data:   `(pool_id, amount, harvested)`
    pub fn deposit(env: &Env, user: &Address, pool_id: u32, amount: i128, harvested: i128) {
        env.events().publish((symbol_short!("deposit"), user), (pool_id, amount, harvested));
    }

    pub fn withdraw(env: &Env, user: &Address, pool_id: u32, amount: i128, harvested: i128) {
        env.events().publish((symbol_short!("withdraw"), user), (pool_id, amount, harvested));
    }

    pub fn emergency_withdraw(env: &Env, user: &Address, pool_id: u32, amount: i128) {
        env.events().publish((symbol_short!("emergency"), user), (pool_id, amount));
    }
}
