use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use solana_program::sysvar::clock::Clock;
use crate::{state::*, constants::*, error::SideBetError, events::DepositMade, utils::debit};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [SIDE_BET_SEED, side_bet.event_code.as_bytes()],
        bump = side_bet.bump
    )]
    pub side_bet: Account<'info, SideBet>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserDeposit::LEN,
        seeds = [USER_DEPOSIT_SEED, side_bet.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_deposit: Account<'info, UserDeposit>,

    #[account(
        init_if_needed,
        payer = user,
        seeds = [VAULT_SEED, side_bet.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = side_bet
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(address = side_bet.token_mint @ SideBetError::InvalidTokenMint)]
    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub user: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn deposit_handler(ctx: Context<Deposit>, side: u8, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.side_bet.check_deposit(side, amount, now)?;
    debit(ctx.accounts.user_token_account.amount, amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
    )?;

    let side_bet_key = ctx.accounts.side_bet.key();
    let user_deposit = &mut ctx.accounts.user_deposit;
    // Fields are zeroed when init_if_needed just created the account.
    if user_deposit.user == Pubkey::default() {
        user_deposit.side_bet = side_bet_key;
        user_deposit.user = ctx.accounts.user.key();
        user_deposit.bump = ctx.bumps.user_deposit;
    }

    let side_bet = &mut ctx.accounts.side_bet;
    side_bet.record_deposit(user_deposit, side, amount, now)?;

    emit!(DepositMade {
        event_code: side_bet.event_code.clone(),
        user: ctx.accounts.user.key(),
        side,
        amount,
        total_deposited: side_bet.total_deposited,
    });

    Ok(())
}
