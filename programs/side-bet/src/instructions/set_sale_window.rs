use anchor_lang::prelude::*;
use solana_program::sysvar::clock::Clock;
use crate::{events::SaleWindowSet, instructions::set_event_sides::ConfigureSideBet};

/// Sets or resets the sale window. Allowed at any stage, including while a
/// sale is running or after it elapsed.
pub fn set_sale_start_end_handler(
    ctx: Context<ConfigureSideBet>,
    event_code: String,
    sale_start: i64,
    sale_end: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let side_bet = &mut ctx.accounts.side_bet;
    if side_bet.is_new() {
        side_bet.open(&event_code, ctx.bumps.side_bet, &ctx.accounts.program_state)?;
    }

    side_bet.set_sale_window(sale_start, sale_end, now)?;

    emit!(SaleWindowSet {
        event_code,
        sale_start: side_bet.sale_start,
        sale_end: side_bet.sale_end,
    });

    Ok(())
}
