use soroban_sdk::{Address, Env, Symbol};

pub struct FactoryEvents;

impl FactoryEvents {
    /// Topics: `("pair_created", token_a, token_b)`
    /// Data:   `(pair, pair_index)`
    pub fn pair_created(
        env: &Env,
        token_a: &Address,
        token_b: &Address,
        pair: &Address,
        pair_index: u32,
    ) {
        env.events().publish(
            (Symbol::new(env, "pair_created"), token_a.clone(), token_b.clone()),
            (pair.clone(), pair_index),
        );
    }
}
