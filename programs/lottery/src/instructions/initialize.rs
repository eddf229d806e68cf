use anchor_lang::prelude::*;
use crate::errors::LotteryErrorCode;
use crate::events::LotteryInitialized;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Lottery PDA. Holds the round state and the pot.
    #[account(
        init,
        payer = payer,
        space = 8 + GameState::SIZE,
        seeds = [GameState::SEED],
        bump
    )]
    pub lottery: Account<'info, GameState>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
    require!(admin != Pubkey::default(), LotteryErrorCode::InvalidAdmin);
    require!(admin != system_program::ID, LotteryErrorCode::InvalidAdmin);
    require!(admin != *ctx.program_id, LotteryErrorCode::InvalidAdmin);

    let lottery_key = ctx.accounts.lottery.key();
    let lottery = &mut ctx.accounts.lottery;
    require!(admin != lottery_key, LotteryErrorCode::InvalidAdmin);

    lottery.init_new(admin, ctx.bumps.lottery);
    lottery.assert_invariant()?;

    msg!(
        "Lottery initialized: admin={} ticket_cost={} max_tickets={}",
        admin,
        lottery.ticket_cost,
        lottery.max_tickets
    );

    emit!(LotteryInitialized {
        lottery: lottery_key,
        admin,
        ticket_cost: lottery.ticket_cost,
        max_tickets: lottery.max_tickets,
    });

    Ok(())
}
