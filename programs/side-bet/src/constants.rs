// Seeds
pub const PROGRAM_STATE_SEED: &[u8] = b"program_state";
pub const SIDE_BET_SEED: &[u8] = b"side_bet";
pub const USER_DEPOSIT_SEED: &[u8] = b"user_deposit";
pub const VAULT_SEED: &[u8] = b"vault";

/// Event codes are used verbatim as a PDA seed, which caps them at 32 bytes.
pub const MAX_EVENT_CODE_LEN: usize = 32;
pub const MAX_SIDE_NAME_LEN: usize = 32;

pub const DEFAULT_SIDE_NAMES: [&str; 2] = ["sideA", "sideB"];

pub const FEE_DENOMINATOR: u64 = 100;
pub const MAX_FEE_PERCENT: u8 = 100;

pub const SIDE_COUNT: usize = 2;
