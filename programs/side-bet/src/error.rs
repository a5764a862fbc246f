use anchor_lang::prelude::*;

#[error_code]
pub enum SideBetError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Function can only be called during sale")]
    SaleNotActive,
    #[msg("Side bet has been cancelled")]
    EventCancelled,
    #[msg("Must deposit at least 1 token")]
    ZeroDeposit,
    #[msg("Winning side already selected")]
    AlreadyResolved,
    #[msg("Sale has not ended yet")]
    NotYetResolvable,
    #[msg("Winning side not selected yet")]
    NotResolved,
    #[msg("Deposit already withdrawn")]
    AlreadyWithdrawn,
    #[msg("Rewards already distributed")]
    AlreadyDistributed,
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Side bet not initialized")]
    NotInitialized,
    #[msg("Side bet already initialized")]
    AlreadyInitialized,
    #[msg("Side index must be 0 or 1")]
    InvalidSide,
    #[msg("Fee percentage must be between 0 and 100")]
    InvalidFeePercent,
    #[msg("Sale end must be after sale start")]
    InvalidSaleWindow,
    #[msg("Event code must be 1 to 32 bytes")]
    InvalidEventCode,
    #[msg("Side name longer than 32 bytes")]
    SideNameTooLong,
    #[msg("Nobody deposited on this side")]
    NoWinningStake,
    #[msg("No winnings to claim")]
    NoWinningsToClaim,
    #[msg("Nothing to refund")]
    NothingToRefund,
    #[msg("Deposit account belongs to another side bet or user")]
    ParticipantMismatch,
    #[msg("Token mint does not match the side bet")]
    InvalidTokenMint,
    #[msg("Operation not available for this settlement policy")]
    WrongSettlementPolicy,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
