#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod storage;


pub use errors::FactoryError;
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};
use storage::FactoryStorage;

#[contractclient(name = "PairClient")]
pub trait PairInterface {
    fn initialize(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
        lp_token: Address,
    );
}

/// Registry of liquidity pairs. Pairs and their share tokens are deployed
/// ahead of time; `create_pair` binds them to a token pair and initializes them.
#[contract]
pub struct Factory;

#[contractimpl]
impl Factory {
    pub fn initialize(env: Env, admin: Address) -> Result<(), FactoryError> {
        if storage::has_factory_storage(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        storage::set_factory_storage(&env, &FactoryStorage { admin, pair_count: 0 });
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn create_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
        pair: Address,
        lp_token: Address,
    ) -> Result<Address, FactoryError> {
        if token_a == token_b {
            return Err(FactoryError::IdenticalTokens);
        }

        let mut factory_storage =
            storage::get_factory_storage(&env).ok_or(FactoryError::NotInitialized)?;
        factory_storage.admin.require_auth();

        let (token_0, token_1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        if storage::get_pair(&env, token_0.clone(), token_1.clone()).is_some() {
            return Err(FactoryError::PairExists);
        }

        PairClient::new(&env, &pair).initialize(
            &env.current_contract_address(),
            &token_0,
            &token_1,
            &lp_token,
        );

        storage::set_pair(&env, token_0.clone(), token_1.clone(), &pair);
        storage::set_pair(&env, token_1.clone(), token_0.clone(), &pair);

        let pair_index = factory_storage.pair_count;
        factory_storage.pair_count += 1;
        storage::set_factory_storage(&env, &factory_storage);
        storage::extend_instance_ttl(&env);

        events::FactoryEvents::pair_created(&env, &token_0, &token_1, &pair, pair_index);

        Ok(pair)
    }

    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        storage::get_pair(&env, token_a, token_b)
    }

    pub fn all_pairs_length(env: Env) -> u32 {
        storage::get_factory_storage(&env).map(|s| s.pair_count).unwrap_or(0)
    }

    pub fn admin(env: Env) -> Result<Address, FactoryError> {
        storage::get_factory_storage(&env).map(|s| s.admin).ok_or(FactoryError::NotInitialized)
    }
}
