use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::SIDE_BET_SEED;
use crate::error::SideBetError;

/// Balance left after taking `amount` out of `balance`. Fails with
/// `TransferFailed` before any token CPI is attempted.
pub fn debit(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_sub(amount)
        .ok_or(SideBetError::TransferFailed.into())
}

/// Moves `amount` out of an event vault. The side bet PDA owns the vault and
/// signs the transfer.
pub fn transfer_from_vault<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    side_bet: AccountInfo<'info>,
    event_code: &str,
    side_bet_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let seeds = &[SIDE_BET_SEED, event_code.as_bytes(), &[side_bet_bump]];
    let signer = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from: vault,
                to,
                authority: side_bet,
            },
            signer,
        ),
        amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    #[test]
    fn debit_takes_exact_balance() {
        assert_eq!(debit(100, 40).unwrap(), 60);
        assert_eq!(debit(100, 100).unwrap(), 0);
        assert_eq!(debit(0, 0).unwrap(), 0);
    }

    #[test]
    fn debit_over_balance_is_a_failed_transfer() {
        match debit(99, 100) {
            Err(Error::AnchorError(e)) => assert_eq!(
                e.error_code_number,
                SideBetError::TransferFailed as u32 + ERROR_CODE_OFFSET
            ),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
