#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod storage;

#[cfg(test)]
mod test;

pub use errors::LpTokenError;
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

fn check_nonnegative_amount(amount: i128) -> Result<(), LpTokenError> {
    if amount < 0 {
        return Err(LpTokenError::NegativeAmount);
    }
    Ok(())
}

/// SEP-41 pool-share token. The admin is the pair contract, the only
/// account allowed to mint.
#[contract]
pub struct LpToken;

#[contractimpl]
impl LpToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), LpTokenError> {
        if storage::has_admin(&env) {
            return Err(LpTokenError::AlreadyInitialized);
        }
        storage::set_admin(&env, &admin);
        storage::set_total_supply(&env, 0);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: decimals,
            name,
            symbol,
        });
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), LpTokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance_ttl(&env);

        storage::write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        TokenUtils::new(&env).events().approve(from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LpTokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance_ttl(&env);

        storage::spend_balance(&env, &from, amount)?;
        storage::receive_balance(&env, &to, amount)?;
        TokenUtils::new(&env).events().transfer(from, to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LpTokenError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance_ttl(&env);

        storage::spend_allowance(&env, &from, &spender, amount)?;
        storage::spend_balance(&env, &from, amount)?;
        storage::receive_balance(&env, &to, amount)?;
        TokenUtils::new(&env).events().transfer(from, to, amount);
        Ok(())
    }

    /// Mints new shares. Only the admin (the pair) may call this.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), LpTokenError> {
        check_nonnegative_amount(amount)?;
        let admin = storage::get_admin(&env).ok_or(LpTokenError::NotInitialized)?;
        admin.require_auth();
        storage::extend_instance_ttl(&env);

        let supply = storage::get_total_supply(&env)
            .checked_add(amount)
            .ok_or(LpTokenError::Overflow)?;
        storage::receive_balance(&env, &to, amount)?;
        storage::set_total_supply(&env, supply);
        TokenUtils::new(&env).events().mint(admin, to, amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), LpTokenError> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance_ttl(&env);

        storage::spend_balance(&env, &from, amount)?;
        storage::set_total_supply(&env, storage::get_total_supply(&env) - amount);
        TokenUtils::new(&env).events().burn(from, amount);
        Ok(())
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), LpTokenError> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance_ttl(&env);

        storage::spend_allowance(&env, &from, &spender, amount)?;
        storage::spend_balance(&env, &from, amount)?;
        storage::set_total_supply(&env, storage::get_total_supply(&env) - amount);
        TokenUtils::new(&env).events().burn(from, amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    pub fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    pub fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }
}
