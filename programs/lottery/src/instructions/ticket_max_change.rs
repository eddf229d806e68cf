use anchor_lang::prelude::*;
use crate::events::MaxTicketsChanged;
use crate::state::*;

#[derive(Accounts)]
pub struct ChangeMaxTicket<'info> {
    #[account(
        mut,
        seeds = [GameState::SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, GameState>,

    pub caller: Signer<'info>,
}

/// Resizes the round inventory. `tickets_available` follows the new size so
/// the next round starts consistent.
pub fn change_max_ticket_handler(ctx: Context<ChangeMaxTicket>, new_max: u32) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;

    let old_max = lottery.set_max_tickets(new_max)?;

    msg!("Max tickets changed: {} -> {}", old_max, new_max);
    emit!(MaxTicketsChanged {
        old_max,
        new_max,
        updated_by: ctx.accounts.caller.key(),
    });

    Ok(())
}
