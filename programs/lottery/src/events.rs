use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub lottery: Pubkey,
    pub admin: Pubkey,
    pub ticket_cost: u64,
    pub max_tickets: u32,
}

#[event]
pub struct TicketsPurchased {
    pub buyer: Pubkey,
    /// Index of the first ticket in this purchase.
    pub first_ticket: u32,
    pub quantity: u32,
    /// Lamports kept by the lottery (`quantity * ticket_cost`).
    pub total_cost: u64,
    /// Lamports refunded to the buyer.
    pub change: u64,
    pub tickets_available: u32,
}

#[event]
pub struct TicketCostChanged {
    pub old_cost: u64,
    pub new_cost: u64,
    pub updated_by: Pubkey,
}

#[event]
pub struct MaxTicketsChanged {
    pub old_max: u32,
    pub new_max: u32,
    pub updated_by: Pubkey,
}

#[event]
pub struct GameEnded {
    /// Round number that just finished (0-based).
    pub round: u64,
    pub random_number: u64,
    pub winning_ticket: u32,
    pub winner: Pubkey,
    pub prize_lamports: u64,
}
