use anchor_lang::prelude::*;
use solana_program::sysvar::clock::Clock;
use crate::{
    state::*,
    constants::*,
    error::SideBetError,
    utils::PoolSplit,
};

#[derive(Accounts)]
pub struct ReadSideBet<'info> {
    #[account(
        seeds = [SIDE_BET_SEED, side_bet.event_code.as_bytes()],
        bump = side_bet.bump
    )]
    pub side_bet: Account<'info, SideBet>,
    // remaining_accounts: user_deposit accounts, for the participant listings
}

#[derive(Accounts)]
pub struct ReadUserDeposit<'info> {
    #[account(
        seeds = [SIDE_BET_SEED, side_bet.event_code.as_bytes()],
        bump = side_bet.bump
    )]
    pub side_bet: Account<'info, SideBet>,

    #[account(
        seeds = [USER_DEPOSIT_SEED, side_bet.key().as_ref(), user_deposit.user.as_ref()],
        bump = user_deposit.bump
    )]
    pub user_deposit: Account<'info, UserDeposit>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventSides {
    pub side_a: String,
    pub side_b: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SaleStatus {
    pub sale_start: i64,
    pub sale_end: i64,
    pub is_on: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct WinningSide {
    pub index: u8,
    pub name: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParticipantDeposit {
    pub user: Pubkey,
    pub amounts: [u64; 2],
    pub withdrawn: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserReward {
    pub user: Pubkey,
    pub reward: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SideBetData {
    pub event_code: String,
    pub team_names: [String; 2],
    pub token_mint: Pubkey,
    pub owner_fee_percent: u8,
    pub policy: SettlementPolicy,
    pub status: BetStatus,
    pub cancelled: bool,
    pub sale_start: i64,
    pub sale_end: i64,
    pub total_tokens_deposited: [u64; 2],
    pub participant_count: u32,
    pub participants: Vec<ParticipantDeposit>,
}

fn read_deposits<'info>(
    accounts: &'info [AccountInfo<'info>],
    side_bet: Pubkey,
) -> Result<Vec<Account<'info, UserDeposit>>> {
    accounts
        .iter()
        .map(|info| {
            let user_deposit: Account<'info, UserDeposit> = Account::try_from(info)?;
            require_keys_eq!(
                user_deposit.side_bet,
                side_bet,
                SideBetError::ParticipantMismatch
            );
            Ok(user_deposit)
        })
        .collect()
}

pub fn get_event_sides_handler(ctx: Context<ReadSideBet>) -> Result<EventSides> {
    let [side_a, side_b] = ctx.accounts.side_bet.side_names.clone();
    Ok(EventSides { side_a, side_b })
}

pub fn is_sale_on_handler(ctx: Context<ReadSideBet>) -> Result<SaleStatus> {
    let now = Clock::get()?.unix_timestamp;
    let side_bet = &ctx.accounts.side_bet;
    Ok(SaleStatus {
        sale_start: side_bet.sale_start,
        sale_end: side_bet.sale_end,
        is_on: side_bet.is_sale_on(now),
    })
}

pub fn get_event_deposit_data_handler(ctx: Context<ReadSideBet>) -> Result<[u64; 2]> {
    Ok(ctx.accounts.side_bet.total_deposited)
}

pub fn get_user_deposit_data_handler(ctx: Context<ReadUserDeposit>) -> Result<[u64; 2]> {
    Ok(ctx.accounts.user_deposit.amounts)
}

pub fn get_winning_side_handler(ctx: Context<ReadSideBet>) -> Result<WinningSide> {
    let side_bet = &ctx.accounts.side_bet;
    Ok(WinningSide {
        index: side_bet.winning_side()?,
        name: side_bet.winning_side_name()?.to_string(),
    })
}

pub fn get_side_bet_data_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, ReadSideBet<'info>>,
) -> Result<SideBetData> {
    let side_bet = &ctx.accounts.side_bet;
    let participants = read_deposits(ctx.remaining_accounts, side_bet.key())?
        .iter()
        .map(|deposit| ParticipantDeposit {
            user: deposit.user,
            amounts: deposit.amounts,
            withdrawn: deposit.withdrawn,
        })
        .collect();

    Ok(SideBetData {
        event_code: side_bet.event_code.clone(),
        team_names: side_bet.side_names.clone(),
        token_mint: side_bet.token_mint,
        owner_fee_percent: side_bet.owner_fee_percent,
        policy: side_bet.policy,
        status: side_bet.status,
        cancelled: side_bet.status == BetStatus::Cancelled,
        sale_start: side_bet.sale_start,
        sale_end: side_bet.sale_end,
        total_tokens_deposited: side_bet.total_deposited,
        participant_count: side_bet.participant_count,
        participants,
    })
}

/// Rewards as computed from stake alone, before any payout clamping.
pub fn get_winning_users_and_user_rewards_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, ReadSideBet<'info>>,
) -> Result<Vec<UserReward>> {
    let side_bet = &ctx.accounts.side_bet;
    let mut rewards = Vec::new();
    for deposit in read_deposits(ctx.remaining_accounts, side_bet.key())? {
        let reward = side_bet.reward_for(&deposit)?;
        if reward > 0 {
            rewards.push(UserReward {
                user: deposit.user,
                reward,
            });
        }
    }
    Ok(rewards)
}

pub fn calculate_total_reward_and_owner_cut_handler(ctx: Context<ReadSideBet>) -> Result<PoolSplit> {
    ctx.accounts.side_bet.split()
}
