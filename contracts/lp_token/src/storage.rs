use soroban_sdk::{contracttype, Address, Env};

use crate::errors::LpTokenError;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const BALANCE_LIFETIME_THRESHOLD: u32 = 17280;
const BALANCE_BUMP_AMOUNT: u32 = 518400;

#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct AllowanceEntry {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
pub enum LpTokenKey {
    Balance(Address),
    Allowance(Address, Address),
    TotalSupply,
    Admin,
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&LpTokenKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&LpTokenKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&LpTokenKey::Admin, admin);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&LpTokenKey::TotalSupply).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&LpTokenKey::TotalSupply, &supply);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = LpTokenKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = LpTokenKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), LpTokenError> {
    let balance = read_balance(env, id).checked_add(amount).ok_or(LpTokenError::Overflow)?;
    write_balance(env, id, balance);
    Ok(())
}

pub fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), LpTokenError> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(LpTokenError::InsufficientBalance);
    }
    write_balance(env, id, balance - amount);
    Ok(())
}

/// Returns the live allowance; an entry past its expiration ledger reads as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceEntry {
    let key = LpTokenKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<_, AllowanceEntry>(&key) {
        Some(entry) if entry.expiration_ledger >= env.ledger().sequence() => entry,
        Some(entry) => AllowanceEntry { amount: 0, expiration_ledger: entry.expiration_ledger },
        None => AllowanceEntry::default(),
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), LpTokenError> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(LpTokenError::InvalidExpiration);
    }

    let key = LpTokenKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(&key, &AllowanceEntry { amount, expiration_ledger });

    if amount > 0 {
        let live_for = expiration_ledger - env.ledger().sequence();
        if live_for > 0 {
            env.storage().temporary().extend_ttl(&key, live_for, live_for);
        }
    }
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), LpTokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(LpTokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
