use soroban_sdk::{symbol_short, Address, Env};

pub struct PairEvents;

impl PairEvents {
    /// Topics: `("mint", to)`
    /// Data:   `(amount_a, amount_b, liquidity)`
    pub fn mint(env: &Env, to: &Address, amount_a: i128, amount_b: i128, liquidity: i128) {
        env.events().publish((symbol_short!("mint"), to), (amount_a, amount_b, liquidity));
    }

    /// Topics: `("burn", to)`
    /// Data:   `(amount_a, amount_b, liquidity)`
    pub fn burn(env: &Env, to: &Address, amount_a: i128, amount_b: i128, liquidity: i128) {
        env.events().publish((symbol_short!("burn"), to), (amount_a, amount_b, liquidity));
    }

    pub fn sync(env: &Env, reserve_a: i128, reserve_b: i128) {
        env.events().publish((symbol_short!("sync"),), (reserve_a, reserve_b));
    }
}
