use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::{state::*, constants::*, error::SideBetError, events::ProgramInitialized};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + ProgramState::LEN,
        seeds = [PROGRAM_STATE_SEED],
        bump
    )]
    pub program_state: Account<'info, ProgramState>,

    /// Global custodial token. Required for equal-split deployments, where
    /// every event settles in the same token.
    pub token_mint: Option<Account<'info, Mint>>,

    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(
    ctx: Context<Initialize>,
    policy: SettlementPolicy,
    owner_fee_percent: u8,
) -> Result<()> {
    require!(
        owner_fee_percent <= MAX_FEE_PERCENT,
        SideBetError::InvalidFeePercent
    );

    let token_mint = ctx.accounts.token_mint.as_ref().map(|mint| mint.key());
    if policy == SettlementPolicy::EqualSplit {
        require!(token_mint.is_some(), SideBetError::InvalidTokenMint);
    }

    ctx.accounts.program_state.set_inner(ProgramState {
        owner: ctx.accounts.owner.key(),
        policy,
        token_mint,
        owner_fee_percent,
        bump: ctx.bumps.program_state,
    });

    emit!(ProgramInitialized {
        owner: ctx.accounts.owner.key(),
        policy,
        token_mint,
        owner_fee_percent,
    });

    Ok(())
}
