//! Integer helpers for share accounting.

use crate::errors::PairError;

/// Shares minted on the first deposit and locked in the pair forever, so the
/// share supply can never return to zero once the pool is seeded.
pub const MINIMUM_LIQUIDITY: i128 = 1_000;

/// `a * b / denominator` with overflow reported instead of wrapping.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> Result<i128, PairError> {
    if denominator == 0 {
        return Err(PairError::InsufficientLiquidity);
    }
    a.checked_mul(b).map(|v| v / denominator).ok_or(PairError::Overflow)
}

/// Integer square root using Newton's method.
pub fn sqrt(value: i128) -> i128 {
    if value <= 0 {
        return 0;
    }
    let mut x = value;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

/// Shares for a deposit of `(amount_a, amount_b)` into reserves backed by
/// `total_supply` shares.
pub fn liquidity_for(
    amount_a: i128,
    amount_b: i128,
    reserve_a: i128,
    reserve_b: i128,
    total_supply: i128,
) -> Result<i128, PairError> {
    if total_supply == 0 {
        let product = amount_a.checked_mul(amount_b).ok_or(PairError::Overflow)?;
        return Ok(sqrt(product) - MINIMUM_LIQUIDITY);
    }
    let by_a = mul_div(amount_a, total_supply, reserve_a)?;
    let by_b = mul_div(amount_b, total_supply, reserve_b)?;
    Ok(by_a.min(by_b))
}
