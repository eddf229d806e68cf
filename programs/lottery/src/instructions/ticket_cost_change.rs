use anchor_lang::prelude::*;
use crate::events::TicketCostChanged;
use crate::state::*;

/// Open to any signer, matching the original deployment. Only the
/// between-rounds lock applies.
#[derive(Accounts)]
pub struct ChangeTicketCost<'info> {
    #[account(
        mut,
        seeds = [GameState::SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, GameState>,

    pub caller: Signer<'info>,
}

pub fn change_ticket_cost_handler(ctx: Context<ChangeTicketCost>, new_cost: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;

    let old_cost = lottery.set_ticket_cost(new_cost)?;

    msg!("Ticket cost changed: {} -> {}", old_cost, new_cost);
    emit!(TicketCostChanged {
        old_cost,
        new_cost,
        updated_by: ctx.accounts.caller.key(),
    });

    Ok(())
}
