use anchor_lang::prelude::*;
use solana_program::sysvar::clock::Clock;
use crate::{events::WinningSideSelected, instructions::end_sale_now::AdminSideBet};

pub fn select_winning_side_handler(ctx: Context<AdminSideBet>, winning_side: u8) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let side_bet = &mut ctx.accounts.side_bet;

    let split = side_bet.resolve(winning_side, now)?;

    emit!(WinningSideSelected {
        event_code: side_bet.event_code.clone(),
        winning_side,
        pool: side_bet.pool()?,
        owner_cut: split.owner_cut,
        total_reward: split.total_reward,
    });

    Ok(())
}
