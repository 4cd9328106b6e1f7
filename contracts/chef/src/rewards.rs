//! Reward accrual math. Emission is measured in ledger sequence numbers:
//! every closed ledger is one reward-bearing tick.

use coralfarm_farm_interface::{PoolInfo, UserInfo, ACC_REWARD_PRECISION};

use crate::errors::ChefError;

/// Emission multiplier applied to every ledger before `bonus_end_ledger`.
pub const BONUS_MULTIPLIER: i128 = 10;

/// Share of each emission minted to the dev address on top (1 / DEV_SHARE_DIVISOR).
pub const DEV_SHARE_DIVISOR: i128 = 10;

/// Reward multiplier over the ledger range `[from, to)`.
pub fn get_multiplier(from: u32, to: u32, bonus_end_ledger: u32) -> i128 {
    if to <= from {
        return 0;
    }
    let (from, to, bonus_end) = (from as i128, to as i128, bonus_end_ledger as i128);
    if to <= bonus_end {
        (to - from) * BONUS_MULTIPLIER
    } else if from >= bonus_end {
        to - from
    } else {
        (bonus_end - from) * BONUS_MULTIPLIER + (to - bonus_end)
    }
}

/// Reward emitted to one pool over a multiplier span, split by allocation.
pub fn pool_reward(
    multiplier: i128,
    reward_per_ledger: i128,
    alloc_point: u32,
    total_alloc_point: u32,
) -> Result<i128, ChefError> {
    if total_alloc_point == 0 {
        return Ok(0);
    }
    multiplier
        .checked_mul(reward_per_ledger)
        .and_then(|v| v.checked_mul(alloc_point as i128))
        .map(|v| v / total_alloc_point as i128)
        .ok_or(ChefError::Overflow)
}

/// Accumulator after distributing `reward` over the pool's stake.
pub fn accrue(pool: &PoolInfo, reward: i128) -> Result<i128, ChefError> {
    if pool.total_staked == 0 {
        return Ok(pool.acc_reward_per_share);
    }
    let per_share = reward
        .checked_mul(ACC_REWARD_PRECISION)
        .map(|v| v / pool.total_staked)
        .ok_or(ChefError::Overflow)?;
    pool.acc_reward_per_share.checked_add(per_share).ok_or(ChefError::Overflow)
}

/// Reward debt for a stake of `amount` at accumulator `acc`.
pub fn reward_debt(amount: i128, acc: i128) -> Result<i128, ChefError> {
    amount.checked_mul(acc).map(|v| v / ACC_REWARD_PRECISION).ok_or(ChefError::Overflow)
}

pub fn pending_for(user: &UserInfo, acc: i128) -> Result<i128, ChefError> {
    Ok(reward_debt(user.amount, acc)? - user.reward_debt)
}
