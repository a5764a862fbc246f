use anchor_lang::prelude::*;
use crate::{
    state::SettlementPolicy,
    error::SideBetError,
    events::SideBetCancelled,
    instructions::end_sale_now::AdminSideBet,
};

/// Cancels an equal-split side bet. Participants pull their refunds with
/// `withdraw`; no fee is taken.
pub fn cancel_event_handler(ctx: Context<AdminSideBet>) -> Result<()> {
    let side_bet = &mut ctx.accounts.side_bet;
    require!(
        side_bet.policy == SettlementPolicy::EqualSplit,
        SideBetError::WrongSettlementPolicy
    );

    side_bet.cancel()?;

    emit!(SideBetCancelled {
        event_code: side_bet.event_code.clone(),
        pool: side_bet.pool()?,
    });

    Ok(())
}
