use anchor_lang::prelude::*;

use crate::constants::{FEE_DENOMINATOR, MAX_FEE_PERCENT};
use crate::error::SideBetError;

/// How a resolved pool is split between the owner and the winners.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolSplit {
    pub owner_cut: u64,
    pub total_reward: u64,
}

/// `floor(pool * fee_percent / 100)`.
pub fn owner_cut(pool: u64, fee_percent: u8) -> Result<u64> {
    require!(fee_percent <= MAX_FEE_PERCENT, SideBetError::InvalidFeePercent);

    let cut = (pool as u128)
        .checked_mul(fee_percent as u128)
        .ok_or(SideBetError::ArithmeticOverflow)?
        .checked_div(FEE_DENOMINATOR as u128)
        .ok_or(SideBetError::ArithmeticOverflow)?;

    u64::try_from(cut).map_err(|_| SideBetError::ArithmeticOverflow.into())
}

pub fn split_pool(pool: u64, fee_percent: u8) -> Result<PoolSplit> {
    let owner_cut = owner_cut(pool, fee_percent)?;
    let total_reward = pool
        .checked_sub(owner_cut)
        .ok_or(SideBetError::ArithmeticOverflow)?;

    Ok(PoolSplit {
        owner_cut,
        total_reward,
    })
}

/// Every winner receives the same amount regardless of stake size.
pub fn equal_share(total_reward: u64, winners: u32) -> Result<u64> {
    require!(winners > 0, SideBetError::NoWinningStake);
    Ok(total_reward / winners as u64)
}

/// How stake-weighted rewards are rounded to whole token units.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Halves round up. Winners may be owed up to half a unit more than
    /// their exact share, which comes out of the owner cut.
    #[default]
    Nearest,
    Down,
}

/// Nearest rounding overshoots the reward by at most `winners / 2` units in
/// total, so it is only used when the owner cut covers that.
pub fn stake_weighted_rounding(owner_cut: u64, winners: u32) -> Rounding {
    if (owner_cut as u128) * 2 >= winners as u128 {
        Rounding::Nearest
    } else {
        Rounding::Down
    }
}

/// `stake * total_reward / winning_total` rounded per `rounding`. Either way
/// the result is within one unit of the nearest-rounded share.
pub fn stake_weighted_reward(
    stake: u64,
    total_reward: u64,
    winning_total: u64,
    rounding: Rounding,
) -> Result<u64> {
    require!(winning_total > 0, SideBetError::NoWinningStake);
    if stake == 0 {
        return Ok(0);
    }

    let scaled = (stake as u128)
        .checked_mul(total_reward as u128)
        .ok_or(SideBetError::ArithmeticOverflow)?;
    let reward = match rounding {
        Rounding::Down => scaled / winning_total as u128,
        Rounding::Nearest => {
            let numerator = scaled
                .checked_mul(2)
                .and_then(|v| v.checked_add(winning_total as u128))
                .ok_or(SideBetError::ArithmeticOverflow)?;
            numerator / (winning_total as u128 * 2)
        }
    };

    u64::try_from(reward).map_err(|_| SideBetError::ArithmeticOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_cut_floors() {
        assert_eq!(owner_cut(70_000, 5).unwrap(), 3_500);
        assert_eq!(owner_cut(1_999, 5).unwrap(), 99);
        assert_eq!(owner_cut(99, 1).unwrap(), 0);
        assert_eq!(owner_cut(12_345, 0).unwrap(), 0);
        assert_eq!(owner_cut(12_345, 100).unwrap(), 12_345);
    }

    #[test]
    fn owner_cut_handles_full_u64_range() {
        assert_eq!(owner_cut(u64::MAX, 100).unwrap(), u64::MAX);
        assert_eq!(owner_cut(u64::MAX, 50).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn owner_cut_rejects_fee_over_100() {
        assert!(owner_cut(100, 101).is_err());
    }

    #[test]
    fn split_is_exact_for_every_fee() {
        for pool in [0u64, 1, 7, 99, 100, 1_001, 70_000, 123_456_789] {
            for fee in 0..=100u8 {
                let split = split_pool(pool, fee).unwrap();
                assert_eq!(split.owner_cut, pool * fee as u64 / 100);
                assert_eq!(split.owner_cut + split.total_reward, pool);
            }
        }
    }

    #[test]
    fn equal_share_for_four_winners() {
        let split = split_pool(70_000, 5).unwrap();
        assert_eq!(split.total_reward, 66_500);
        assert_eq!(equal_share(split.total_reward, 4).unwrap(), 16_625);
    }

    #[test]
    fn equal_share_leaves_less_than_one_unit_per_winner() {
        for winners in 1..=13u32 {
            let share = equal_share(10_007, winners).unwrap();
            let leftover = 10_007 - share * winners as u64;
            assert!(leftover < winners as u64);
        }
    }

    #[test]
    fn equal_share_without_winners_fails() {
        assert!(equal_share(100, 0).is_err());
    }

    #[test]
    fn stake_weighted_rewards_round_to_nearest() {
        let split = split_pool(1_000, 5).unwrap();
        assert_eq!(split.total_reward, 950);

        let rewards: Vec<u64> = [100u64, 250, 400]
            .iter()
            .map(|stake| stake_weighted_reward(*stake, split.total_reward, 750, Rounding::Nearest).unwrap())
            .collect();

        // 126.67, 316.67, 506.67
        assert_eq!(rewards, vec![127, 317, 507]);
        let sum: u64 = rewards.iter().sum();
        assert!(sum.abs_diff(950) <= 1);
    }

    #[test]
    fn stake_weighted_half_rounds_up() {
        // 1 * 5 / 2 = 2.5
        assert_eq!(stake_weighted_reward(1, 5, 2, Rounding::Nearest).unwrap(), 3);
        // 1 * 4 / 3 = 1.33
        assert_eq!(stake_weighted_reward(1, 4, 3, Rounding::Nearest).unwrap(), 1);
    }

    #[test]
    fn stake_weighted_single_winner_takes_everything() {
        assert_eq!(stake_weighted_reward(640, 9_500, 640, Rounding::Nearest).unwrap(), 9_500);
    }

    #[test]
    fn stake_weighted_zero_stake_earns_nothing() {
        assert_eq!(stake_weighted_reward(0, 9_500, 640, Rounding::Down).unwrap(), 0);
    }

    #[test]
    fn stake_weighted_aggregate_drift_is_bounded() {
        let stakes = [3u64, 7, 11, 13, 17, 19, 23];
        let winning_total: u64 = stakes.iter().sum();
        for total_reward in [1u64, 10, 97, 1_000, 65_537] {
            let reward = |s: &u64, rounding| {
                stake_weighted_reward(*s, total_reward, winning_total, rounding).unwrap()
            };
            let nearest: u64 = stakes.iter().map(|s| reward(s, Rounding::Nearest)).sum();
            let down: u64 = stakes.iter().map(|s| reward(s, Rounding::Down)).sum();
            assert!(nearest <= total_reward + stakes.len() as u64 / 2);
            assert!(down <= total_reward);
            assert!(total_reward - down < stakes.len() as u64);
        }
    }

    #[test]
    fn rounding_down_stays_within_one_unit_of_nearest() {
        // 16 shared by ten stakes of 1: each exact share is 1.6.
        let nearest = stake_weighted_reward(1, 16, 10, Rounding::Nearest).unwrap();
        let down = stake_weighted_reward(1, 16, 10, Rounding::Down).unwrap();
        assert_eq!(nearest, 2);
        assert_eq!(down, 1);

        for (stake, total_reward, winning_total) in [(3u64, 100u64, 7u64), (5, 9, 11), (1, 1, 3)] {
            let nearest =
                stake_weighted_reward(stake, total_reward, winning_total, Rounding::Nearest)
                    .unwrap();
            let down =
                stake_weighted_reward(stake, total_reward, winning_total, Rounding::Down).unwrap();
            assert!(nearest.abs_diff(down) <= 1);
        }
    }

    #[test]
    fn nearest_rounding_needs_an_owner_cut_to_absorb_overshoot() {
        assert_eq!(stake_weighted_rounding(50, 3), Rounding::Nearest);
        assert_eq!(stake_weighted_rounding(5, 10), Rounding::Nearest);
        assert_eq!(stake_weighted_rounding(4, 10), Rounding::Down);
        assert_eq!(stake_weighted_rounding(0, 1), Rounding::Down);
        assert_eq!(stake_weighted_rounding(0, 0), Rounding::Nearest);
    }
}
