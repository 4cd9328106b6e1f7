use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const PAIR_LIFETIME_THRESHOLD: u32 = 17280;
const PAIR_BUMP_AMOUNT: u32 = 518400;

#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryStorage {
    pub admin: Address,
    pub pair_count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Factory,
    Pair(Address, Address),
}

pub fn get_factory_storage(env: &Env) -> Option<FactoryStorage> {
    env.storage().instance().get(&DataKey::Factory)
}

pub fn set_factory_storage(env: &Env, storage: &FactoryStorage) {
    env.storage().instance().set(&DataKey::Factory, storage);
}

pub fn has_factory_storage(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Factory)
}

pub fn get_pair(env: &Env, token_a: Address, token_b: Address) -> Option<Address> {
    let key = DataKey::Pair(token_a, token_b);
    let pair = env.storage().persistent().get(&key);
    if pair.is_some() {
        env.storage().persistent().extend_ttl(&key, PAIR_LIFETIME_THRESHOLD, PAIR_BUMP_AMOUNT);
    }
    pair
}

pub fn set_pair(env: &Env, token_a: Address, token_b: Address, pair: &Address) {
    let key = DataKey::Pair(token_a, token_b);
    env.storage().persistent().set(&key, pair);
    env.storage().persistent().extend_ttl(&key, PAIR_LIFETIME_THRESHOLD, PAIR_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
