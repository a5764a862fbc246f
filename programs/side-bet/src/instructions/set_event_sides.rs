use anchor_lang::prelude::*;
use crate::{state::*, constants::*, error::SideBetError, events::SideNamesSet};

/// Owner-side configuration of a side bet. The record is created on first use.
#[derive(Accounts)]
#[instruction(event_code: String)]
pub struct ConfigureSideBet<'info> {
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

    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn set_event_sides_handler(
    ctx: Context<ConfigureSideBet>,
    event_code: String,
    side_a: String,
    side_b: String,
) -> Result<()> {
    let side_bet = &mut ctx.accounts.side_bet;
    if side_bet.is_new() {
        side_bet.open(&event_code, ctx.bumps.side_bet, &ctx.accounts.program_state)?;
    }

    side_bet.set_side_names(side_a, side_b)?;

    emit!(SideNamesSet {
        event_code,
        side_a: side_bet.side_names[0].clone(),
        side_b: side_bet.side_names[1].clone(),
    });

    Ok(())
}
