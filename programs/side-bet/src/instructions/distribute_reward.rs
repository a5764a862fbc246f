use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{
    state::*,
    constants::*,
    error::SideBetError,
    events::{OwnerFeeCollected, RewardDistributed},
    utils::{debit, load_participant, transfer_from_vault},
};

/// Push settlement of a stake-weighted side bet.
#[derive(Accounts)]
pub struct DistributeReward<'info> {
    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        has_one = owner @ SideBetError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        mut,
        seeds = [SIDE_BET_SEED, side_bet.event_code.as_bytes()],
        bump = side_bet.bump
    )]
    pub side_bet: Account<'info, SideBet>,

    #[account(
        mut,
        seeds = [VAULT_SEED, side_bet.key().as_ref()],
        bump,
        token::mint = side_bet.token_mint,
        token::authority = side_bet
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = side_bet.token_mint,
        token::authority = owner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,
    pub token_program: Program<'info, Token>,
    // remaining_accounts: (user_deposit, user_token_account) pairs, writable
}

/// Pays the listed winners. Losers and winners paid by an earlier call are
/// skipped, so a large field can be settled over several calls. The call
/// that pays the last winner also pays the owner and closes the distribution.
pub fn distribute_reward_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeReward<'info>>,
) -> Result<()> {
    ctx.accounts.side_bet.check_distribution()?;

    let token_program = ctx.accounts.token_program.to_account_info();
    let vault = ctx.accounts.vault.to_account_info();
    let side_bet_info = ctx.accounts.side_bet.to_account_info();
    let side_bet_key = ctx.accounts.side_bet.key();
    let mut available = ctx.accounts.vault.amount;

    let side_bet = &mut ctx.accounts.side_bet;
    let event_code = side_bet.event_code.clone();
    let bump = side_bet.bump;
    let token_mint = side_bet.token_mint;

    let mut winners: u32 = 0;
    let mut paid_out: u64 = 0;
    for pair in ctx.remaining_accounts.chunks(2) {
        let (mut user_deposit, user_token_account) =
            load_participant(pair, side_bet_key, token_mint)?;

        let reward = match side_bet.settle_push(&mut user_deposit)? {
            PushSettlement::Paid(reward) => reward,
            PushSettlement::Loser | PushSettlement::AlreadySettled => continue,
        };
        user_deposit.exit(&crate::ID)?;

        available = debit(available, reward)?;
        transfer_from_vault(
            token_program.clone(),
            vault.clone(),
            user_token_account,
            side_bet_info.clone(),
            &event_code,
            bump,
            reward,
        )?;

        msg!("Paid {} to {}", reward, user_deposit.user);
        winners += 1;
        paid_out = paid_out
            .checked_add(reward)
            .ok_or(SideBetError::ArithmeticOverflow)?;
    }

    let owner_payment = side_bet.finish_distribution()?;
    emit!(RewardDistributed {
        event_code: event_code.clone(),
        winners,
        paid_out,
        settled_count: side_bet.settled_count,
        complete: owner_payment.is_some(),
    });

    if let Some(amount) = owner_payment {
        debit(available, amount)?;
        transfer_from_vault(
            token_program,
            vault,
            ctx.accounts.owner_token_account.to_account_info(),
            side_bet_info,
            &event_code,
            bump,
            amount,
        )?;

        emit!(OwnerFeeCollected {
            event_code,
            owner: ctx.accounts.owner.key(),
            amount,
        });
    }

    Ok(())
}
