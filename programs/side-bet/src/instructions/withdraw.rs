use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{
    state::*,
    constants::*,
    error::SideBetError,
    events::{OwnerFeeCollected, Withdrawn},
    utils::{debit, transfer_from_vault},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [PROGRAM_STATE_SEED], bump = program_state.bump)]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        mut,
        seeds = [SIDE_BET_SEED, side_bet.event_code.as_bytes()],
        bump = side_bet.bump
    )]
    pub side_bet: Account<'info, SideBet>,

    #[account(
        mut,
        seeds = [USER_DEPOSIT_SEED, side_bet.key().as_ref(), user.key().as_ref()],
        bump = user_deposit.bump,
        has_one = user @ SideBetError::ParticipantMismatch
    )]
    pub user_deposit: Account<'info, UserDeposit>,

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
        token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Receives the owner cut on the first winning withdrawal.
    #[account(
        mut,
        token::mint = side_bet.token_mint,
        token::authority = program_state.owner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub user: Signer<'info>,
    pub token_program: Program<'info, Token>,
}

pub fn withdraw_handler(ctx: Context<Withdraw>) -> Result<()> {
    let side_bet_info = ctx.accounts.side_bet.to_account_info();
    let side_bet = &mut ctx.accounts.side_bet;

    let payout = side_bet.settle_withdrawal(&mut ctx.accounts.user_deposit)?;
    let refund = side_bet.status == BetStatus::Cancelled;
    let event_code = side_bet.event_code.clone();
    let bump = side_bet.bump;

    let needed = payout
        .amount
        .checked_add(payout.owner_fee)
        .ok_or(SideBetError::ArithmeticOverflow)?;
    debit(ctx.accounts.vault.amount, needed)?;

    transfer_from_vault(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.user_token_account.to_account_info(),
        side_bet_info.clone(),
        &event_code,
        bump,
        payout.amount,
    )?;

    if payout.owner_fee > 0 {
        transfer_from_vault(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            side_bet_info,
            &event_code,
            bump,
            payout.owner_fee,
        )?;

        emit!(OwnerFeeCollected {
            event_code: event_code.clone(),
            owner: ctx.accounts.program_state.owner,
            amount: payout.owner_fee,
        });
    }

    msg!("Withdrawn {} tokens from {}", payout.amount, event_code);
    emit!(Withdrawn {
        event_code,
        user: ctx.accounts.user.key(),
        amount: payout.amount,
        refund,
    });

    Ok(())
}
