use anchor_lang::prelude::*;
use crate::events::TicketsPurchased;
use crate::state::*;
use crate::utils::transfers::{pay_out_lamports, transfer_lamports};

#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [GameState::SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, GameState>,

    pub system_program: Program<'info, System>,
}

/// Sells `quantity` tickets to the buyer.
///
/// The full `payment` is moved into the lottery, then anything above
/// `quantity * ticket_cost` is refunded in the same instruction.
pub fn buy_ticket_handler(ctx: Context<BuyTicket>, quantity: u32, payment: u64) -> Result<()> {
    let buyer = &ctx.accounts.buyer;
    let lottery = &mut ctx.accounts.lottery;

    // ─────────────────────────────
    // Validate + record tickets
    // ─────────────────────────────
    let sale = lottery.sell_tickets(buyer.key(), quantity, payment)?;

    // ─────────────────────────────
    // Payment in, change out
    // ─────────────────────────────
    transfer_lamports(
        &buyer.to_account_info(),
        &lottery.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        payment,
    )?;

    if sale.change > 0 {
        pay_out_lamports(
            &lottery.to_account_info(),
            &buyer.to_account_info(),
            sale.change,
        )?;
    }

    msg!(
        "Tickets sold: buyer={} tickets={}..{} cost={} change={} available={}",
        buyer.key(),
        sale.first_ticket,
        sale.first_ticket + quantity,
        sale.total_cost,
        sale.change,
        lottery.tickets_available
    );

    emit!(TicketsPurchased {
        buyer: buyer.key(),
        first_ticket: sale.first_ticket,
        quantity,
        total_cost: sale.total_cost,
        change: sale.change,
        tickets_available: lottery.tickets_available,
    });

    Ok(())
}
