use anchor_lang::prelude::*;
use crate::errors::LotteryErrorCode;

/// Handles any invocation that names no instruction. Lamports only enter the
/// lottery through `buy_ticket`.
pub fn reject_direct_payment_handler<'info>(
    _program_id: &Pubkey,
    accounts: &'info [AccountInfo<'info>],
    data: &[u8],
) -> Result<()> {
    msg!(
        "Rejected direct call: accounts={} data_len={}",
        accounts.len(),
        data.len()
    );
    err!(LotteryErrorCode::DirectPaymentNotAllowed)
}
