use soroban_sdk::{symbol_short, Address, Env};

pub struct WalletEvents;

impl WalletEvents {
    /// Topics: `("deposit", owner)`
    /// Data:   `(amount_a, amount_b, liquidity, harvested)`
    pub fn deposit(
        env: &Env,
        owner: &Address,
        amount_a: i128,
        amount_b: i128,
        liquidity: i128,
        harvested: i128,
    ) {
        env.events().publish(
            (symbol_short!("deposit"), owner.clone()),
            (amount_a, amount_b, liquidity, harvested),
        );
    }
}
