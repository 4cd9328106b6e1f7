use crate::errors::RouterError;
use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "FactoryClient")]
pub trait FactoryInterface {
    fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address>;
}

#[contractclient(name = "PairClient")]
pub trait PairInterface {
    fn mint(env: Env, to: Address) -> i128;
    fn burn(env: Env, to: Address) -> (i128, i128);
    fn lp_token(env: Env) -> Address;
    fn get_reserves(env: Env) -> (i128, i128, u64);
}

/// Given some amount of an asset and pair reserves, returns the equivalent
/// amount of the other asset at the current ratio.
///
/// Formula: amount_b = amount_a * reserve_b / reserve_a
pub fn quote(amount_a: i128, reserve_a: i128, reserve_b: i128) -> Result<i128, RouterError> {
    if amount_a <= 0 {
        return Err(RouterError::ZeroAmount);
    }
    if reserve_a <= 0 || reserve_b <= 0 {
        return Err(RouterError::InsufficientLiquidity);
    }
    let numerator = amount_a.checked_mul(reserve_b).ok_or(RouterError::Overflow)?;
    Ok(numerator / reserve_a)
}

/// Sorts token addresses into canonical order (lexicographically).
///
/// Returns tokens in the order (token_a, token_b) where token_a < token_b.
/// This matches the ordering used by the Factory when registering pairs.
pub fn sort_tokens(
    token_a: &Address,
    token_b: &Address,
) -> Result<(Address, Address), RouterError> {
    if token_a == token_b {
        return Err(RouterError::IdenticalTokens);
    }
    if token_a < token_b {
        Ok((token_a.clone(), token_b.clone()))
    } else {
        Ok((token_b.clone(), token_a.clone()))
    }
}

/// Get the pair address from the factory contract
pub fn get_pair_address(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<Address, RouterError> {
    sort_tokens(token_a, token_b)?;
    let factory_client = FactoryClient::new(env, factory);
    factory_client.get_pair(token_a, token_b).ok_or(RouterError::PairNotFound)
}

/// Reserves of `pair` reordered to match `(token_a, token_b)`.
pub fn get_reserves(
    env: &Env,
    pair: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<(i128, i128), RouterError> {
    let (token_0, _) = sort_tokens(token_a, token_b)?;
    let (reserve_0, reserve_1, _) = PairClient::new(env, pair).get_reserves();
    if *token_a == token_0 {
        Ok((reserve_0, reserve_1))
    } else {
        Ok((reserve_1, reserve_0))
    }
}

/// Picks the deposit amounts that keep the pool ratio, never exceeding the
/// desired amounts and never going below the minimums.
pub fn optimal_amounts(
    amount_a_desired: i128,
    amount_b_desired: i128,
    amount_a_min: i128,
    amount_b_min: i128,
    reserve_a: i128,
    reserve_b: i128,
) -> Result<(i128, i128), RouterError> {
    if reserve_a == 0 && reserve_b == 0 {
        return Ok((amount_a_desired, amount_b_desired));
    }

    let amount_b_optimal = quote(amount_a_desired, reserve_a, reserve_b)?;
    if amount_b_optimal <= amount_b_desired {
        if amount_b_optimal < amount_b_min {
            return Err(RouterError::InsufficientBAmount);
        }
        return Ok((amount_a_desired, amount_b_optimal));
    }

    let amount_a_optimal = quote(amount_b_desired, reserve_b, reserve_a)?;
    if amount_a_optimal > amount_a_desired {
        return Err(RouterError::InsufficientLiquidity);
    }
    if amount_a_optimal < amount_a_min {
        return Err(RouterError::InsufficientAAmount);
    }
    Ok((amount_a_optimal, amount_b_desired))
}
