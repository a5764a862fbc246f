use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use solana_program::sysvar::clock::Clock;
use crate::{state::*, constants::*, error::SideBetError, events::SideBetInitialized};

#[derive(Accounts)]
#[instruction(event_code: String)]
pub struct InitializeSideBet<'info> {
    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        has_one = owner @ SideBetError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + SideBet::LEN,
        seeds = [SIDE_BET_SEED, event_code.as_bytes()],
        bump
    )]
    pub side_bet: Account<'info, SideBet>,

    #[account(
        init_if_needed,
        payer = owner,
        seeds = [VAULT_SEED, side_bet.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = side_bet
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

#[allow(clippy::too_many_arguments)]
pub fn initialize_side_bet_handler(
    ctx: Context<InitializeSideBet>,
    event_code: String,
    side_a: String,
    side_b: String,
    owner_fee_percent: u8,
    sale_start: i64,
    sale_end: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let token_mint = ctx.accounts.token_mint.key();

    let side_bet = &mut ctx.accounts.side_bet;
    if side_bet.is_new() {
        side_bet.open(&event_code, ctx.bumps.side_bet, &ctx.accounts.program_state)?;
    }

    side_bet.initialize(
        side_a,
        side_b,
        token_mint,
        owner_fee_percent,
        sale_start,
        sale_end,
        now,
    )?;

    emit!(SideBetInitialized {
        event_code,
        token_mint,
        owner_fee_percent,
        sale_start: side_bet.sale_start,
        sale_end: side_bet.sale_end,
    });

    Ok(())
}
