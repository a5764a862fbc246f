use anchor_lang::prelude::*;

use crate::state::SettlementPolicy;

#[event]
pub struct ProgramInitialized {
    pub owner: Pubkey,
    pub policy: SettlementPolicy,
    pub token_mint: Option<Pubkey>,
    pub owner_fee_percent: u8,
}

#[event]
pub struct OwnerUpdated {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct FeePercentageUpdated {
    pub owner_fee_percent: u8,
}

#[event]
pub struct SideNamesSet {
    pub event_code: String,
    pub side_a: String,
    pub side_b: String,
}

#[event]
pub struct SaleWindowSet {
    pub event_code: String,
    pub sale_start: i64,
    pub sale_end: i64,
}

#[event]
pub struct SideBetInitialized {
    pub event_code: String,
    pub token_mint: Pubkey,
    pub owner_fee_percent: u8,
    pub sale_start: i64,
    pub sale_end: i64,
}

#[event]
pub struct DepositMade {
    pub event_code: String,
    pub user: Pubkey,
    pub side: u8,
    pub amount: u64,
    pub total_deposited: [u64; 2],
}

#[event]
pub struct SaleEnded {
    pub event_code: String,
    pub sale_end: i64,
}

#[event]
pub struct WinningSideSelected {
    pub event_code: String,
    pub winning_side: u8,
    pub pool: u64,
    pub owner_cut: u64,
    pub total_reward: u64,
}

#[event]
pub struct SideBetCancelled {
    pub event_code: String,
    pub pool: u64,
}

#[event]
pub struct Withdrawn {
    pub event_code: String,
    pub user: Pubkey,
    pub amount: u64,
    pub refund: bool,
}

#[event]
pub struct OwnerFeeCollected {
    pub event_code: String,
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardDistributed {
    pub event_code: String,
    pub winners: u32,
    pub paid_out: u64,
    pub settled_count: u32,
    pub complete: bool,
}

#[event]
pub struct TokensRefunded {
    pub event_code: String,
    pub participants: u32,
    pub refunded: u64,
    pub settled_count: u32,
    pub complete: bool,
}
