use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{
    state::*,
    constants::*,
    error::SideBetError,
    events::{SideBetCancelled, TokensRefunded},
    utils::{debit, load_participant, transfer_from_vault},
};

#[derive(Accounts)]
pub struct RefundSideBet<'info> {
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

    pub owner: Signer<'info>,
    pub token_program: Program<'info, Token>,
    // remaining_accounts: (user_deposit, user_token_account) pairs, writable
}

/// Cancels a stake-weighted side bet and repays the listed participants their
/// full deposit on both sides. No fee is taken. The first call cancels; later
/// calls continue the refund until every participant has been repaid.
pub fn cancel_bet_and_refund_tokens_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, RefundSideBet<'info>>,
) -> Result<()> {
    let token_program = ctx.accounts.token_program.to_account_info();
    let vault = ctx.accounts.vault.to_account_info();
    let side_bet_info = ctx.accounts.side_bet.to_account_info();
    let side_bet_key = ctx.accounts.side_bet.key();
    let mut available = ctx.accounts.vault.amount;

    let side_bet = &mut ctx.accounts.side_bet;
    let event_code = side_bet.event_code.clone();
    let bump = side_bet.bump;
    let token_mint = side_bet.token_mint;

    if side_bet.begin_refund()? {
        emit!(SideBetCancelled {
            event_code: event_code.clone(),
            pool: side_bet.pool()?,
        });
    }

    let mut participants: u32 = 0;
    let mut refunded: u64 = 0;
    for pair in ctx.remaining_accounts.chunks(2) {
        let (mut user_deposit, user_token_account) =
            load_participant(pair, side_bet_key, token_mint)?;

        let refund = match side_bet.settle_push(&mut user_deposit)? {
            PushSettlement::Paid(refund) => refund,
            PushSettlement::Loser | PushSettlement::AlreadySettled => continue,
        };
        user_deposit.exit(&crate::ID)?;

        available = debit(available, refund)?;
        transfer_from_vault(
            token_program.clone(),
            vault.clone(),
            user_token_account,
            side_bet_info.clone(),
            &event_code,
            bump,
            refund,
        )?;

        participants += 1;
        refunded = refunded
            .checked_add(refund)
            .ok_or(SideBetError::ArithmeticOverflow)?;
    }

    let complete = side_bet.finish_refund()?;
    emit!(TokensRefunded {
        event_code,
        participants,
        refunded,
        settled_count: side_bet.settled_count,
        complete,
    });

    Ok(())
}
