use anchor_lang::prelude::*;
use solana_program::sysvar::clock::Clock;
use crate::{state::*, constants::*, error::SideBetError, events::SaleEnded};

/// Owner-only access to an existing side bet.
#[derive(Accounts)]
pub struct AdminSideBet<'info> {
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

    pub owner: Signer<'info>,
}

pub fn end_sale_now_handler(ctx: Context<AdminSideBet>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let side_bet = &mut ctx.accounts.side_bet;
    side_bet.end_sale_now(now);

    emit!(SaleEnded {
        event_code: side_bet.event_code.clone(),
        sale_end: side_bet.sale_end,
    });

    Ok(())
}
