use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::SettlementPolicy;
use utils::PoolSplit;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod side_bet {
    use super::*;

    // Program configuration (owner-only after initialize)
    pub fn initialize(
        ctx: Context<Initialize>,
        policy: SettlementPolicy,
        owner_fee_percent: u8,
    ) -> Result<()> {
        initialize_handler(ctx, policy, owner_fee_percent)
    }

    pub fn update_owner(ctx: Context<UpdateConfig>, new_owner: Pubkey) -> Result<()> {
        update_owner_handler(ctx, new_owner)
    }

    pub fn update_fee_percentage(ctx: Context<UpdateConfig>, new_fee_percent: u8) -> Result<()> {
        update_fee_percentage_handler(ctx, new_fee_percent)
    }

    // Event setup
    pub fn set_event_sides(
        ctx: Context<ConfigureSideBet>,
        event_code: String,
        side_a: String,
        side_b: String,
    ) -> Result<()> {
        set_event_sides_handler(ctx, event_code, side_a, side_b)
    }

    pub fn set_sale_start_end(
        ctx: Context<ConfigureSideBet>,
        event_code: String,
        sale_start: i64,
        sale_end: i64,
    ) -> Result<()> {
        set_sale_start_end_handler(ctx, event_code, sale_start, sale_end)
    }

    pub fn initialize_side_bet(
        ctx: Context<InitializeSideBet>,
        event_code: String,
        side_a: String,
        side_b: String,
        owner_fee_percent: u8,
        sale_start: i64,
        sale_end: i64,
    ) -> Result<()> {
        initialize_side_bet_handler(
            ctx,
            event_code,
            side_a,
            side_b,
            owner_fee_percent,
            sale_start,
            sale_end,
        )
    }

    pub fn end_sale_now(ctx: Context<AdminSideBet>) -> Result<()> {
        end_sale_now_handler(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, side: u8, amount: u64) -> Result<()> {
        deposit_handler(ctx, side, amount)
    }

    // Settlement
    pub fn select_winning_side(ctx: Context<AdminSideBet>, winning_side: u8) -> Result<()> {
        select_winning_side_handler(ctx, winning_side)
    }

    pub fn cancel_event(ctx: Context<AdminSideBet>) -> Result<()> {
        cancel_event_handler(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        withdraw_handler(ctx)
    }

    pub fn distribute_reward<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeReward<'info>>,
    ) -> Result<()> {
        distribute_reward_handler(ctx)
    }

    pub fn cancel_bet_and_refund_tokens<'info>(
        ctx: Context<'_, '_, 'info, 'info, RefundSideBet<'info>>,
    ) -> Result<()> {
        cancel_bet_and_refund_tokens_handler(ctx)
    }

    // Read-only views, returned through return data
    pub fn get_event_sides(ctx: Context<ReadSideBet>) -> Result<EventSides> {
        get_event_sides_handler(ctx)
    }

    pub fn is_sale_on(ctx: Context<ReadSideBet>) -> Result<SaleStatus> {
        is_sale_on_handler(ctx)
    }

    pub fn get_side_bet_data<'info>(
        ctx: Context<'_, '_, 'info, 'info, ReadSideBet<'info>>,
    ) -> Result<SideBetData> {
        get_side_bet_data_handler(ctx)
    }

    pub fn get_event_deposit_data(ctx: Context<ReadSideBet>) -> Result<[u64; 2]> {
        get_event_deposit_data_handler(ctx)
    }

    pub fn get_user_deposit_data(ctx: Context<ReadUserDeposit>) -> Result<[u64; 2]> {
        get_user_deposit_data_handler(ctx)
    }

    pub fn get_winning_side(ctx: Context<ReadSideBet>) -> Result<WinningSide> {
        get_winning_side_handler(ctx)
    }

    pub fn get_winning_users_and_user_rewards<'info>(
        ctx: Context<'_, '_, 'info, 'info, ReadSideBet<'info>>,
    ) -> Result<Vec<UserReward>> {
        get_winning_users_and_user_rewards_handler(ctx)
    }

    pub fn calculate_total_reward_and_owner_cut(ctx: Context<ReadSideBet>) -> Result<PoolSplit> {
        calculate_total_reward_and_owner_cut_handler(ctx)
    }
}
