use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::SideBetError;
use crate::utils::reward_math::{self, PoolSplit, Rounding};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettlementPolicy {
    /// Every winner gets the same share and withdraws it themselves.
    #[default]
    EqualSplit,
    /// Winners are paid pro rata to their stake by the owner in a single pass.
    StakeWeighted,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BetStatus {
    #[default]
    Uninitialized,
    Active,
    Resolved { winning_side: u8 },
    Cancelled,
}

/// Lifecycle stage of a side bet at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPhase {
    Uninitialized,
    Open,
    AwaitingResolution,
    Resolved(u8),
    Cancelled,
}

/// Result of settling one participant in a push pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushSettlement {
    Paid(u64),
    /// Only backed the losing side.
    Loser,
    /// Settled by an earlier pass, or listed twice.
    AlreadySettled,
}

/// What a settlement step has to move out of the vault.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Payout {
    pub amount: u64,
    pub owner_fee: u64,
}

// ── ProgramState PDA ── seeds: ["program_state"]
#[account]
pub struct ProgramState {
    pub owner: Pubkey,
    pub policy: SettlementPolicy,
    /// Custodial token of single-token deployments.
    pub token_mint: Option<Pubkey>,
    /// Fee stamped on events created implicitly by the owner.
    pub owner_fee_percent: u8,
    pub bump: u8,
}

impl ProgramState {
    pub const LEN: usize = 32 + 1 + (1 + 32) + 1 + 1;
}

// ── SideBet PDA ── seeds: ["side_bet", event_code]
#[account]
#[derive(Default, Debug)]
pub struct SideBet {
    pub event_code: String,
    pub side_names: [String; 2],
    pub sale_start: i64,
    pub sale_end: i64,
    pub token_mint: Pubkey,
    pub owner_fee_percent: u8,
    pub policy: SettlementPolicy,
    pub status: BetStatus,
    pub total_deposited: [u64; 2],
    /// Distinct participants with a nonzero stake on each side.
    pub backers: [u32; 2],
    pub participant_count: u32,
    pub owner_cut: u64,
    pub total_reward: u64,
    pub reward_per_winner: u64,
    pub rounding: Rounding,
    pub paid_out: u64,
    pub settled_count: u32,
    pub fee_collected: bool,
    pub distributed: bool,
    pub bump: u8,
}

impl SideBet {
    pub const LEN: usize = (4 + MAX_EVENT_CODE_LEN)
        + 2 * (4 + MAX_SIDE_NAME_LEN)
        + 8 // sale_start
        + 8 // sale_end
        + 32 // token_mint
        + 1 // owner_fee_percent
        + 1 // policy
        + 2 // status
        + 2 * 8 // total_deposited
        + 2 * 4 // backers
        + 4 // participant_count
        + 4 * 8 // owner_cut, total_reward, reward_per_winner, paid_out
        + 1 // rounding
        + 4 // settled_count
        + 1 // fee_collected
        + 1 // distributed
        + 1; // bump

    /// True until the first owner call has filled the record in.
    pub fn is_new(&self) -> bool {
        self.event_code.is_empty()
    }

    /// Fills a freshly allocated record. Single-token deployments bind the
    /// global mint and fee straight away; per-event deployments leave the
    /// record uninitialized until `initialize_side_bet`.
    pub fn open(&mut self, event_code: &str, bump: u8, config: &ProgramState) -> Result<()> {
        validate_event_code(event_code)?;

        self.event_code = event_code.to_string();
        self.side_names = DEFAULT_SIDE_NAMES.map(String::from);
        self.policy = config.policy;
        self.bump = bump;

        if config.policy == SettlementPolicy::EqualSplit {
            self.token_mint = config.token_mint.ok_or(SideBetError::InvalidTokenMint)?;
            self.owner_fee_percent = config.owner_fee_percent;
            self.status = BetStatus::Active;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        side_a: String,
        side_b: String,
        token_mint: Pubkey,
        owner_fee_percent: u8,
        sale_start: i64,
        sale_end: i64,
        now: i64,
    ) -> Result<()> {
        require!(
            self.policy == SettlementPolicy::StakeWeighted,
            SideBetError::WrongSettlementPolicy
        );
        require!(
            self.status == BetStatus::Uninitialized,
            SideBetError::AlreadyInitialized
        );
        require!(
            owner_fee_percent <= MAX_FEE_PERCENT,
            SideBetError::InvalidFeePercent
        );

        self.set_side_names(side_a, side_b)?;
        self.set_sale_window(sale_start, sale_end, now)?;
        self.token_mint = token_mint;
        self.owner_fee_percent = owner_fee_percent;
        self.status = BetStatus::Active;
        Ok(())
    }

    pub fn set_side_names(&mut self, side_a: String, side_b: String) -> Result<()> {
        require!(
            side_a.len() <= MAX_SIDE_NAME_LEN && side_b.len() <= MAX_SIDE_NAME_LEN,
            SideBetError::SideNameTooLong
        );
        self.side_names = [side_a, side_b];
        Ok(())
    }

    /// A start of 0 opens the sale immediately. Deposits already taken are
    /// unaffected by moving the window.
    pub fn set_sale_window(&mut self, sale_start: i64, sale_end: i64, now: i64) -> Result<()> {
        let sale_start = if sale_start == 0 { now } else { sale_start };
        require!(sale_end > sale_start, SideBetError::InvalidSaleWindow);

        self.sale_start = sale_start;
        self.sale_end = sale_end;
        Ok(())
    }

    pub fn end_sale_now(&mut self, now: i64) {
        self.sale_end = now;
        if self.sale_start > now {
            self.sale_start = now;
        }
    }

    /// `now` lies in `[sale_start, sale_end)`.
    pub fn is_sale_on(&self, now: i64) -> bool {
        self.sale_start <= now && now < self.sale_end
    }

    pub fn phase(&self, now: i64) -> EventPhase {
        match self.status {
            BetStatus::Uninitialized => EventPhase::Uninitialized,
            BetStatus::Active if now >= self.sale_end => EventPhase::AwaitingResolution,
            BetStatus::Active => EventPhase::Open,
            BetStatus::Resolved { winning_side } => EventPhase::Resolved(winning_side),
            BetStatus::Cancelled => EventPhase::Cancelled,
        }
    }

    pub fn pool(&self) -> Result<u64> {
        self.total_deposited[0]
            .checked_add(self.total_deposited[1])
            .ok_or(SideBetError::ArithmeticOverflow.into())
    }

    /// Owner cut and reward for the pool as it currently stands.
    pub fn split(&self) -> Result<PoolSplit> {
        reward_math::split_pool(self.pool()?, self.owner_fee_percent)
    }

    pub fn check_deposit(&self, side: u8, amount: u64, now: i64) -> Result<()> {
        match self.status {
            BetStatus::Uninitialized => return err!(SideBetError::NotInitialized),
            BetStatus::Cancelled => return err!(SideBetError::EventCancelled),
            BetStatus::Resolved { .. } => return err!(SideBetError::AlreadyResolved),
            BetStatus::Active => {}
        }
        require!(self.is_sale_on(now), SideBetError::SaleNotActive);
        require!(amount > 0, SideBetError::ZeroDeposit);
        side_index(side)?;
        Ok(())
    }

    /// Books a deposit whose tokens are already in the vault.
    pub fn record_deposit(
        &mut self,
        deposit: &mut UserDeposit,
        side: u8,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        self.check_deposit(side, amount, now)?;
        let side = side_index(side)?;

        let side_total = self.total_deposited[side]
            .checked_add(amount)
            .ok_or(SideBetError::ArithmeticOverflow)?;
        let user_amount = deposit.amounts[side]
            .checked_add(amount)
            .ok_or(SideBetError::ArithmeticOverflow)?;
        let participant_count = if deposit.total()? == 0 {
            self.participant_count
                .checked_add(1)
                .ok_or(SideBetError::ArithmeticOverflow)?
        } else {
            self.participant_count
        };
        let backers = if deposit.amounts[side] == 0 {
            self.backers[side]
                .checked_add(1)
                .ok_or(SideBetError::ArithmeticOverflow)?
        } else {
            self.backers[side]
        };

        self.total_deposited[side] = side_total;
        self.participant_count = participant_count;
        self.backers[side] = backers;
        deposit.amounts[side] = user_amount;
        Ok(())
    }

    fn ensure_unsettled(&self) -> Result<()> {
        match self.status {
            BetStatus::Uninitialized => err!(SideBetError::NotInitialized),
            BetStatus::Resolved { .. } => err!(SideBetError::AlreadyResolved),
            BetStatus::Cancelled => err!(SideBetError::EventCancelled),
            BetStatus::Active => Ok(()),
        }
    }

    /// Declares the winner once the sale is over and caches the reward math
    /// so later claims do not have to derive it again.
    pub fn resolve(&mut self, winning_side: u8, now: i64) -> Result<PoolSplit> {
        self.ensure_unsettled()?;
        let side = side_index(winning_side)?;
        require!(now >= self.sale_end, SideBetError::NotYetResolvable);
        require!(self.total_deposited[side] > 0, SideBetError::NoWinningStake);

        let split = self.split()?;
        self.owner_cut = split.owner_cut;
        self.total_reward = split.total_reward;
        match self.policy {
            SettlementPolicy::EqualSplit => {
                self.reward_per_winner =
                    reward_math::equal_share(split.total_reward, self.backers[side])?;
            }
            SettlementPolicy::StakeWeighted => {
                self.rounding =
                    reward_math::stake_weighted_rounding(split.owner_cut, self.backers[side]);
            }
        }
        self.status = BetStatus::Resolved { winning_side };
        Ok(split)
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.ensure_unsettled()?;
        self.status = BetStatus::Cancelled;
        Ok(())
    }

    pub fn winning_side(&self) -> Result<u8> {
        match self.status {
            BetStatus::Resolved { winning_side } => Ok(winning_side),
            BetStatus::Cancelled => err!(SideBetError::EventCancelled),
            _ => err!(SideBetError::NotResolved),
        }
    }

    pub fn winning_side_name(&self) -> Result<&str> {
        let side = self.winning_side()?;
        Ok(&self.side_names[side as usize])
    }

    /// Reward owed to a participant under this bet's policy. Zero for anyone
    /// without stake on the winning side.
    pub fn reward_for(&self, deposit: &UserDeposit) -> Result<u64> {
        let side = self.winning_side()? as usize;
        let stake = deposit.amounts[side];
        if stake == 0 {
            return Ok(0);
        }

        match self.policy {
            SettlementPolicy::EqualSplit => Ok(self.reward_per_winner),
            SettlementPolicy::StakeWeighted => reward_math::stake_weighted_reward(
                stake,
                self.total_reward,
                self.total_deposited[side],
                self.rounding,
            ),
        }
    }

    fn mark_settled(&mut self, deposit: &mut UserDeposit, amount: u64) -> Result<()> {
        self.paid_out = self
            .paid_out
            .checked_add(amount)
            .ok_or(SideBetError::ArithmeticOverflow)?;
        self.settled_count = self
            .settled_count
            .checked_add(1)
            .ok_or(SideBetError::ArithmeticOverflow)?;
        deposit.withdrawn = true;
        Ok(())
    }

    /// Pull settlement: the participant's reward or refund, plus the owner
    /// fee the first time a winner withdraws.
    pub fn settle_withdrawal(&mut self, deposit: &mut UserDeposit) -> Result<Payout> {
        require!(
            self.policy == SettlementPolicy::EqualSplit,
            SideBetError::WrongSettlementPolicy
        );
        require!(!deposit.withdrawn, SideBetError::AlreadyWithdrawn);

        let payout = match self.status {
            BetStatus::Uninitialized => return err!(SideBetError::NotInitialized),
            BetStatus::Active => return err!(SideBetError::NotResolved),
            BetStatus::Cancelled => {
                let refund = deposit.total()?;
                require!(refund > 0, SideBetError::NothingToRefund);
                Payout {
                    amount: refund,
                    owner_fee: 0,
                }
            }
            BetStatus::Resolved { .. } => {
                let reward = self.reward_for(deposit)?;
                require!(reward > 0, SideBetError::NoWinningsToClaim);
                let owner_fee = if self.fee_collected { 0 } else { self.owner_cut };
                self.fee_collected = true;
                Payout {
                    amount: reward,
                    owner_fee,
                }
            }
        };

        self.mark_settled(deposit, payout.amount)?;
        Ok(payout)
    }

    /// Checks that a push distribution may start and returns the winning side.
    pub fn check_distribution(&self) -> Result<u8> {
        require!(
            self.policy == SettlementPolicy::StakeWeighted,
            SideBetError::WrongSettlementPolicy
        );
        require!(!self.distributed, SideBetError::AlreadyDistributed);
        self.winning_side()
    }

    /// Push settlement of a single participant. Passes may be split across
    /// any number of calls; participants already settled are reported and
    /// left alone.
    pub fn settle_push(&mut self, deposit: &mut UserDeposit) -> Result<PushSettlement> {
        require!(
            self.policy == SettlementPolicy::StakeWeighted,
            SideBetError::WrongSettlementPolicy
        );
        require!(!self.distributed, SideBetError::AlreadyDistributed);
        if deposit.withdrawn {
            return Ok(PushSettlement::AlreadySettled);
        }

        let amount = match self.status {
            BetStatus::Cancelled => deposit.total()?,
            BetStatus::Resolved { winning_side } => {
                if deposit.amounts[winning_side as usize] == 0 {
                    return Ok(PushSettlement::Loser);
                }
                self.reward_for(deposit)?
            }
            BetStatus::Uninitialized => return err!(SideBetError::NotInitialized),
            BetStatus::Active => return err!(SideBetError::NotResolved),
        };

        self.mark_settled(deposit, amount)?;
        Ok(PushSettlement::Paid(amount))
    }

    /// Closes the distribution once every winner has been paid and returns
    /// what the owner receives: the owner cut, less any rounding overshoot
    /// the winners took. `None` while winners remain unpaid.
    pub fn finish_distribution(&mut self) -> Result<Option<u64>> {
        let side = self.check_distribution()? as usize;
        if self.settled_count < self.backers[side] {
            return Ok(None);
        }

        let remaining = self
            .pool()?
            .checked_sub(self.paid_out)
            .ok_or(SideBetError::ArithmeticOverflow)?;
        self.distributed = true;
        self.fee_collected = true;
        Ok(Some(self.owner_cut.min(remaining)))
    }

    /// Cancels the bet on the first refund pass; later passes continue the
    /// refund. Returns whether this call did the cancelling.
    pub fn begin_refund(&mut self) -> Result<bool> {
        require!(
            self.policy == SettlementPolicy::StakeWeighted,
            SideBetError::WrongSettlementPolicy
        );
        require!(!self.distributed, SideBetError::AlreadyDistributed);
        if self.status == BetStatus::Cancelled {
            return Ok(false);
        }
        self.cancel()?;
        Ok(true)
    }

    /// Marks the refund done once every participant has been repaid.
    pub fn finish_refund(&mut self) -> Result<bool> {
        require!(
            self.status == BetStatus::Cancelled,
            SideBetError::NotResolved
        );
        if self.settled_count < self.participant_count {
            return Ok(false);
        }
        self.distributed = true;
        Ok(true)
    }
}

// ── UserDeposit PDA ── seeds: ["user_deposit", side_bet, user]
#[account]
#[derive(Default, Debug)]
pub struct UserDeposit {
    pub side_bet: Pubkey,
    pub user: Pubkey,
    pub amounts: [u64; 2],
    pub withdrawn: bool,
    pub bump: u8,
}

impl UserDeposit {
    pub const LEN: usize = 32 + 32 + 2 * 8 + 1 + 1;

    pub fn total(&self) -> Result<u64> {
        self.amounts[0]
            .checked_add(self.amounts[1])
            .ok_or(SideBetError::ArithmeticOverflow.into())
    }
}

pub fn side_index(side: u8) -> Result<usize> {
    let side = side as usize;
    require!(side < SIDE_COUNT, SideBetError::InvalidSide);
    Ok(side)
}

pub fn validate_event_code(event_code: &str) -> Result<()> {
    require!(
        !event_code.is_empty() && event_code.len() <= MAX_EVENT_CODE_LEN,
        SideBetError::InvalidEventCode
    );
    Ok(())
}
