use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::SideBetError;
use crate::state::UserDeposit;

/// Reads one `(user_deposit, user_token_account)` pair passed through
/// remaining accounts for a push settlement.
///
/// Pairs are loaded one at a time and written back before the next is read,
/// so a participant listed twice is seen as already settled.
pub fn load_participant<'info>(
    pair: &'info [AccountInfo<'info>],
    side_bet: Pubkey,
    token_mint: Pubkey,
) -> Result<(Account<'info, UserDeposit>, AccountInfo<'info>)> {
    let [deposit_info, token_info] = pair else {
        return err!(anchor_lang::error::ErrorCode::AccountNotEnoughKeys);
    };
    require!(
        deposit_info.is_writable && token_info.is_writable,
        anchor_lang::error::ErrorCode::ConstraintMut
    );

    let user_deposit: Account<'info, UserDeposit> = Account::try_from(deposit_info)?;

    let user_token_account: Account<'info, TokenAccount> = Account::try_from(token_info)?;
    check_participant(
        &user_deposit,
        user_token_account.owner,
        user_token_account.mint,
        side_bet,
        token_mint,
    )?;

    Ok((user_deposit, token_info.clone()))
}

/// The deposit belongs to `side_bet` and the token account is the depositor's,
/// in the bet's mint.
pub fn check_participant(
    deposit: &UserDeposit,
    token_owner: Pubkey,
    token_account_mint: Pubkey,
    side_bet: Pubkey,
    token_mint: Pubkey,
) -> Result<()> {
    require_keys_eq!(deposit.side_bet, side_bet, SideBetError::ParticipantMismatch);
    require_keys_eq!(token_owner, deposit.user, SideBetError::ParticipantMismatch);
    require_keys_eq!(token_account_mint, token_mint, SideBetError::InvalidTokenMint);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    fn assert_err(result: Result<()>, expected: SideBetError) {
        match result {
            Err(Error::AnchorError(e)) => {
                assert_eq!(e.error_code_number, expected as u32 + ERROR_CODE_OFFSET)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    fn deposit_for(side_bet: Pubkey) -> UserDeposit {
        UserDeposit {
            side_bet,
            user: Pubkey::new_unique(),
            amounts: [10, 0],
            ..UserDeposit::default()
        }
    }

    #[test]
    fn accepts_the_depositors_own_account() {
        let side_bet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let deposit = deposit_for(side_bet);
        check_participant(&deposit, deposit.user, mint, side_bet, mint).unwrap();
    }

    #[test]
    fn rejects_deposit_of_another_bet() {
        let side_bet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let deposit = deposit_for(Pubkey::new_unique());
        assert_err(
            check_participant(&deposit, deposit.user, mint, side_bet, mint),
            SideBetError::ParticipantMismatch,
        );
    }

    #[test]
    fn rejects_someone_elses_token_account() {
        let side_bet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let deposit = deposit_for(side_bet);
        assert_err(
            check_participant(&deposit, Pubkey::new_unique(), mint, side_bet, mint),
            SideBetError::ParticipantMismatch,
        );
    }

    #[test]
    fn rejects_token_account_in_another_mint() {
        let side_bet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let deposit = deposit_for(side_bet);
        assert_err(
            check_participant(&deposit, deposit.user, Pubkey::new_unique(), side_bet, mint),
            SideBetError::InvalidTokenMint,
        );
    }
}
