use anchor_lang::prelude::*;
use crate::errors::LotteryErrorCode;

/// Moves lamports out of a signer's wallet through the system program.
/// A zero amount is a no-op.
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    anchor_lang::system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            anchor_lang::system_program::Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Pays `amount` out of a program-owned account by moving lamports directly.
pub fn pay_out_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let from_balance = from.lamports();
    require!(from_balance >= amount, LotteryErrorCode::InsufficientPot);

    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(LotteryErrorCode::MathOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance - amount;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}

/// Lamports held by `account` above its rent-exempt minimum.
pub fn pot_lamports(account: &AccountInfo, rent: &Rent) -> u64 {
    account
        .lamports()
        .saturating_sub(rent.minimum_balance(account.data_len()))
}
