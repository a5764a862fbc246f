use anchor_lang::prelude::*;
use crate::{
    state::ProgramState,
    error::SideBetError,
    constants::*,
    events::{FeePercentageUpdated, OwnerUpdated},
};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        has_one = owner @ SideBetError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    pub owner: Signer<'info>,
}

pub fn update_owner_handler(ctx: Context<UpdateConfig>, new_owner: Pubkey) -> Result<()> {
    let program_state = &mut ctx.accounts.program_state;
    let previous_owner = program_state.owner;
    program_state.owner = new_owner;

    emit!(OwnerUpdated {
        previous_owner,
        new_owner,
    });

    Ok(())
}

/// Only events created after the change pick up the new fee; a side bet's fee
/// is fixed when it is created.
pub fn update_fee_percentage_handler(
    ctx: Context<UpdateConfig>,
    new_fee_percent: u8,
) -> Result<()> {
    require!(
        new_fee_percent <= MAX_FEE_PERCENT,
        SideBetError::InvalidFeePercent
    );
    ctx.accounts.program_state.owner_fee_percent = new_fee_percent;

    emit!(FeePercentageUpdated {
        owner_fee_percent: new_fee_percent,
    });

    Ok(())
}
