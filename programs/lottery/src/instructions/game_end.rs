use anchor_lang::prelude::*;
use crate::errors::LotteryErrorCode;
use crate::events::GameEnded;
use crate::state::*;
use crate::utils::transfers::{pay_out_lamports, pot_lamports};

#[derive(Accounts)]
pub struct EndGame<'info> {
    #[account(
        mut,
        seeds = [GameState::SEED],
        bump = lottery.bump,
        has_one = admin @ LotteryErrorCode::Unauthorized
    )]
    pub lottery: Account<'info, GameState>,

    /// CHECK: Must be the owner of the winning ticket; compared against the
    /// roster in the handler. Only receives lamports.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}

/// ---------------------------------------------------------------------------
/// end_game_handler
///
/// Draws ticket `random_number % max_tickets`, sends the whole pot to its
/// owner and opens the next round.
///
/// The draw is only as fair as `random_number`; sourcing it is the admin's job.
/// ---------------------------------------------------------------------------
pub fn end_game_handler(ctx: Context<EndGame>, random_number: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let winner = &ctx.accounts.winner;

    let (winning_ticket, winner_key) = lottery.draw_winner(ctx.accounts.admin.key(), random_number)?;
    require_keys_eq!(winner.key(), winner_key, LotteryErrorCode::WinnerAccountMismatch);

    msg!(
        "Draw: random={} max_tickets={} winning_ticket={} winner={}",
        random_number,
        lottery.max_tickets,
        winning_ticket,
        winner_key
    );

    // ─────────────────────────────
    // Pay out everything above rent
    // ─────────────────────────────
    let lottery_info = lottery.to_account_info();
    let prize = pot_lamports(&lottery_info, &Rent::get()?);
    pay_out_lamports(&lottery_info, &winner.to_account_info(), prize)?;

    let finished_round = lottery.round;
    lottery.reset_round()?;

    msg!("Paid {} lamports, round {} finished", prize, finished_round);
    emit!(GameEnded {
        round: finished_round,
        random_number,
        winning_ticket,
        winner: winner_key,
        prize_lamports: prize,
    });

    Ok(())
}
