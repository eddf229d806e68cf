use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryErrorCode {
    // ─────────────────────────────
    // Setup and configuration
    // ─────────────────────────────
    #[msg("Invalid admin")]
    InvalidAdmin,

    #[msg("Max tickets out of range")]
    InvalidMaxTickets,

    #[msg("Cannot change configuration mid-round")]
    RoundInProgress,

    // ─────────────────────────────
    // Access control
    // ─────────────────────────────
    #[msg("Unauthorized")]
    Unauthorized,

    // ─────────────────────────────
    // Ticket sales
    // ─────────────────────────────
    #[msg("No tickets available")]
    SoldOut,

    #[msg("Invalid ticket quantity")]
    InvalidQuantity,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Direct payments are not allowed")]
    DirectPaymentNotAllowed,

    // ─────────────────────────────
    // Draw
    // ─────────────────────────────
    #[msg("Round has unsold tickets")]
    RoundNotFinished,

    #[msg("No ticket at winning index")]
    NoSuchTicket,

    WinnerAccountMismatch,
    InsufficientPot,

    // ─────────────────────────────
    // Corrupted round state
    // ─────────────────────────────
    #[msg("Round state invariant violated")]
    InvariantViolation,

    #[msg("Math overflow")]
    MathOverflow,
}
