use anchor_lang::prelude::*;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("3ADURo3D9itj19jWXhRJP3RqHPExg3UhNmwTjHbWzLf7");


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod state;
pub mod instructions;
pub mod utils;
pub mod errors;
pub mod events;
pub mod constants;

use instructions::*;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod lottery {
    use super::*;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
        initialize_handler(ctx, admin)
    }

    // -------------------------------------------------------------------------
    // buy_ticket
    // -------------------------------------------------------------------------
    pub fn buy_ticket(ctx: Context<BuyTicket>, quantity: u32, payment: u64) -> Result<()> {
        buy_ticket_handler(ctx, quantity, payment)
    }

    // -------------------------------------------------------------------------
    // change_ticket_cost / change_max_ticket (between rounds only)
    // -------------------------------------------------------------------------
    pub fn change_ticket_cost(ctx: Context<ChangeTicketCost>, new_cost: u64) -> Result<()> {
        change_ticket_cost_handler(ctx, new_cost)
    }

    pub fn change_max_ticket(ctx: Context<ChangeMaxTicket>, new_max: u32) -> Result<()> {
        change_max_ticket_handler(ctx, new_max)
    }

    // -------------------------------------------------------------------------
    // end_game
    // -------------------------------------------------------------------------
    pub fn end_game(ctx: Context<EndGame>, random_number: u64) -> Result<()> {
        end_game_handler(ctx, random_number)
    }

    // Anything that does not name an instruction above.
    pub fn fallback<'info>(
        program_id: &Pubkey,
        accounts: &'info [AccountInfo<'info>],
        data: &[u8],
    ) -> Result<()> {
        reject_direct_payment_handler(program_id, accounts, data)
    }
}
