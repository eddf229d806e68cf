use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST, LOTTERY_VERSION, MAX_TICKETS_CAP};
use crate::errors::LotteryErrorCode;

/// ---------------------------------------------------------------------------
/// GameState
/// ---------------------------------------------------------------------------
///
/// Program-owned PDA holding the lottery round and the pot itself.
/// Every lamport above the rent-exempt minimum belongs to the next winner.
///
/// Invariants (enforced by `assert_invariant`):
///   - `tickets_available + tickets_sold == max_tickets`
///   - `players.len() == tickets_sold`, ticket `i` is owned by `players[i]`
///   - `1 <= max_tickets <= MAX_TICKETS_CAP`
#[account]
pub struct GameState {
    /// Ticket holders for the current round, indexed by ticket number.
    pub players: Vec<Pubkey>,

    /// Price of one ticket in lamports.
    pub ticket_cost: u64,

    /// Tickets left to sell this round.
    pub tickets_available: u32,

    /// Tickets sold this round.
    pub tickets_sold: u32,

    /// Inventory per round. Also the modulus used to pick the winner.
    pub max_tickets: u32,

    /// Only identity allowed to trigger a draw. Never changes.
    pub admin: Pubkey,

    /// Number of completed draws.
    pub round: u64,

    /// PDA bump.
    pub bump: u8,

    pub version: u8,

    pub _reserved: [u8; 16],
}

/// Outcome of a successful ticket sale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketSale {
    pub first_ticket: u32,
    pub total_cost: u64,
    pub change: u64,
}

impl GameState {
    pub const SEED: &'static [u8] = b"lottery";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        4 + (32 * MAX_TICKETS_CAP as usize) // players
            + 8  // ticket_cost
            + 4  // tickets_available
            + 4  // tickets_sold
            + 4  // max_tickets
            + 32 // admin
            + 8  // round
            + 1  // bump
            + 1  // version
            + 16; // reserved

    pub fn init_new(&mut self, admin: Pubkey, bump: u8) {
        self.players = Vec::new();
        self.ticket_cost = DEFAULT_TICKET_COST;
        self.tickets_available = DEFAULT_MAX_TICKETS;
        self.tickets_sold = 0;
        self.max_tickets = DEFAULT_MAX_TICKETS;
        self.admin = admin;
        self.round = 0;
        self.bump = bump;
        self.version = LOTTERY_VERSION;
        self._reserved = [0u8; 16];
    }

    /// True once the first ticket of the round has been sold.
    #[inline]
    pub fn is_round_in_progress(&self) -> bool {
        self.tickets_sold != 0
    }

    /// Lamports owed for `quantity` tickets at the current price.
    pub fn cost_of(&self, quantity: u32) -> Result<u64> {
        let total = self
            .ticket_cost
            .checked_mul(quantity as u64)
            .ok_or(LotteryErrorCode::MathOverflow)?;
        Ok(total)
    }

    /// Validates a purchase and records `quantity` tickets for `buyer`.
    ///
    /// Nothing is mutated unless every check passes. Moving lamports is left
    /// to the caller: `payment` comes in, `change` goes back out.
    pub fn sell_tickets(&mut self, buyer: Pubkey, quantity: u32, payment: u64) -> Result<TicketSale> {
        require!(self.tickets_available > 0, LotteryErrorCode::SoldOut);

        // Bounded by what is left, not only by the round size, so inventory
        // can never go below zero.
        require!(
            quantity > 0 && quantity <= self.max_tickets && quantity <= self.tickets_available,
            LotteryErrorCode::InvalidQuantity
        );

        let total_cost = self.cost_of(quantity)?;
        require!(payment >= total_cost, LotteryErrorCode::InsufficientFunds);

        let tickets_available = self
            .tickets_available
            .checked_sub(quantity)
            .ok_or(LotteryErrorCode::InvariantViolation)?;
        let tickets_sold = self
            .tickets_sold
            .checked_add(quantity)
            .ok_or(LotteryErrorCode::MathOverflow)?;

        let first_ticket = self.players.len() as u32;
        self.players
            .extend(std::iter::repeat(buyer).take(quantity as usize));
        self.tickets_available = tickets_available;
        self.tickets_sold = tickets_sold;

        self.assert_invariant()?;

        Ok(TicketSale {
            first_ticket,
            total_cost,
            change: payment - total_cost,
        })
    }

    /// Replaces the ticket price. Returns the previous price.
    pub fn set_ticket_cost(&mut self, new_cost: u64) -> Result<u64> {
        require!(!self.is_round_in_progress(), LotteryErrorCode::RoundInProgress);

        let old_cost = self.ticket_cost;
        self.ticket_cost = new_cost;
        Ok(old_cost)
    }

    /// Resizes the round inventory and refills it. Returns the previous size.
    pub fn set_max_tickets(&mut self, new_max: u32) -> Result<u32> {
        require!(!self.is_round_in_progress(), LotteryErrorCode::RoundInProgress);
        require!(
            new_max > 0 && new_max <= MAX_TICKETS_CAP,
            LotteryErrorCode::InvalidMaxTickets
        );

        let old_max = self.max_tickets;
        self.max_tickets = new_max;
        self.tickets_available = new_max;

        self.assert_invariant()?;
        Ok(old_max)
    }

    /// Picks the winning ticket for a finished round.
    ///
    /// Read-only: the caller pays out and then calls `reset_round`.
    pub fn draw_winner(&self, caller: Pubkey, random_number: u64) -> Result<(u32, Pubkey)> {
        require_keys_eq!(caller, self.admin, LotteryErrorCode::Unauthorized);
        require!(self.tickets_available == 0, LotteryErrorCode::RoundNotFinished);
        require!(self.max_tickets > 0, LotteryErrorCode::InvariantViolation);

        let winning_ticket = (random_number % self.max_tickets as u64) as u32;
        let winner = self
            .players
            .get(winning_ticket as usize)
            .copied()
            .ok_or(LotteryErrorCode::NoSuchTicket)?;

        Ok((winning_ticket, winner))
    }

    /// Empties the roster and refills inventory for the next round.
    pub fn reset_round(&mut self) -> Result<()> {
        self.players.clear();
        self.tickets_available = self.max_tickets;
        self.tickets_sold = 0;
        self.round = self
            .round
            .checked_add(1)
            .ok_or(LotteryErrorCode::MathOverflow)?;

        self.assert_invariant()
    }

    pub fn assert_invariant(&self) -> Result<()> {
        let accounted = self
            .tickets_available
            .checked_add(self.tickets_sold)
            .ok_or(LotteryErrorCode::InvariantViolation)?;

        require!(
            accounted == self.max_tickets
                && self.players.len() == self.tickets_sold as usize
                && self.max_tickets <= MAX_TICKETS_CAP,
            LotteryErrorCode::InvariantViolation
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn new_game(admin: Pubkey) -> GameState {
        let mut game = GameState {
            players: Vec::new(),
            ticket_cost: 0,
            tickets_available: 0,
            tickets_sold: 0,
            max_tickets: 0,
            admin: Pubkey::default(),
            round: 0,
            bump: 0,
            version: 0,
            _reserved: [0u8; 16],
        };
        game.init_new(admin, 255);
        game
    }

    fn snapshot(game: &GameState) -> Vec<u8> {
        let mut bytes = Vec::new();
        game.serialize(&mut bytes).unwrap();
        bytes
    }

    fn assert_fails_with<T: std::fmt::Debug>(result: Result<T>, expected: LotteryErrorCode) {
        match result {
            Err(Error::AnchorError(e)) => assert_eq!(e.error_name, format!("{:?}", expected)),
            other => panic!("expected {:?}, got {:?}", expected, other),
        }
    }

    #[test]
    fn game_state_size_matches_serialization_at_capacity() {
        let mut game = new_game(Pubkey::new_unique());
        game.players = vec![Pubkey::new_unique(); MAX_TICKETS_CAP as usize];

        assert_eq!(snapshot(&game).len(), GameState::SIZE);
    }

    #[test]
    fn init_new_uses_defaults() {
        let admin = Pubkey::new_unique();
        let game = new_game(admin);

        assert_eq!(game.admin, admin);
        assert_eq!(game.ticket_cost, DEFAULT_TICKET_COST);
        assert_eq!(game.max_tickets, 5);
        assert_eq!(game.tickets_available, 5);
        assert_eq!(game.tickets_sold, 0);
        assert!(game.players.is_empty());
        assert_eq!(game.version, LOTTERY_VERSION);
        game.assert_invariant().unwrap();
    }

    #[test]
    fn full_round_pays_ticket_at_random_index_and_resets() {
        let admin = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut game = new_game(admin);
        game.set_ticket_cost(1).unwrap();

        let sale = game.sell_tickets(alice, 3, 10).unwrap();
        assert_eq!(
            sale,
            TicketSale { first_ticket: 0, total_cost: 3, change: 7 }
        );
        assert_eq!(game.players, vec![alice, alice, alice]);
        assert_eq!(game.tickets_available, 2);

        let sale = game.sell_tickets(bob, 2, 6).unwrap();
        assert_eq!(
            sale,
            TicketSale { first_ticket: 3, total_cost: 2, change: 4 }
        );
        assert_eq!(game.tickets_available, 0);
        assert_eq!(game.tickets_sold, 5);
        assert_eq!(game.players, vec![alice, alice, alice, bob, bob]);

        // 21 % 5 == 1
        assert_eq!(game.draw_winner(admin, 21).unwrap(), (1, alice));
        assert_eq!(game.draw_winner(admin, 24).unwrap(), (4, bob));

        game.reset_round().unwrap();
        assert!(game.players.is_empty());
        assert_eq!(game.tickets_available, 5);
        assert_eq!(game.tickets_sold, 0);
        assert_eq!(game.round, 1);
    }

    #[test]
    fn buyer_net_outflow_is_exactly_the_ticket_price() {
        let mut game = new_game(Pubkey::new_unique());
        game.set_ticket_cost(250).unwrap();

        for (quantity, payment) in [(1u32, 250u64), (2, 1_000)] {
            let sale = game.sell_tickets(Pubkey::new_unique(), quantity, payment).unwrap();
            assert_eq!(payment - sale.change, quantity as u64 * 250);
            assert_eq!(sale.total_cost, quantity as u64 * 250);
        }
    }

    #[test]
    fn sold_out_is_checked_first() {
        let mut game = new_game(Pubkey::new_unique());
        game.sell_tickets(Pubkey::new_unique(), 5, 5 * DEFAULT_TICKET_COST).unwrap();

        // Would also fail the quantity and payment checks.
        assert_fails_with(
            game.sell_tickets(Pubkey::new_unique(), 50, 0),
            LotteryErrorCode::SoldOut,
        );
    }

    #[test]
    fn quantity_must_fit_remaining_inventory() {
        let mut game = new_game(Pubkey::new_unique());
        game.set_ticket_cost(1).unwrap();
        game.sell_tickets(Pubkey::new_unique(), 3, 3).unwrap();

        let before = snapshot(&game);
        assert_fails_with(
            game.sell_tickets(Pubkey::new_unique(), 3, 3),
            LotteryErrorCode::InvalidQuantity,
        );
        assert_fails_with(
            game.sell_tickets(Pubkey::new_unique(), 6, 6),
            LotteryErrorCode::InvalidQuantity,
        );
        assert_fails_with(
            game.sell_tickets(Pubkey::new_unique(), 0, 6),
            LotteryErrorCode::InvalidQuantity,
        );
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn underpayment_is_rejected_without_state_change() {
        let mut game = new_game(Pubkey::new_unique());
        game.set_ticket_cost(3).unwrap();

        let before = snapshot(&game);
        assert_fails_with(
            game.sell_tickets(Pubkey::new_unique(), 2, 5),
            LotteryErrorCode::InsufficientFunds,
        );
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn price_overflow_is_not_a_sale() {
        let mut game = new_game(Pubkey::new_unique());
        game.set_ticket_cost(u64::MAX).unwrap();

        assert_fails_with(
            game.sell_tickets(Pubkey::new_unique(), 2, u64::MAX),
            LotteryErrorCode::MathOverflow,
        );
        assert_eq!(game.tickets_sold, 0);
    }

    #[test]
    fn free_tickets_are_allowed() {
        let mut game = new_game(Pubkey::new_unique());
        game.set_ticket_cost(0).unwrap();

        let sale = game.sell_tickets(Pubkey::new_unique(), 1, 0).unwrap();
        assert_eq!(sale.total_cost, 0);
        assert_eq!(sale.change, 0);
    }

    #[test]
    fn configuration_is_locked_mid_round() {
        let mut game = new_game(Pubkey::new_unique());
        game.sell_tickets(Pubkey::new_unique(), 1, DEFAULT_TICKET_COST).unwrap();

        let before = snapshot(&game);
        assert_fails_with(game.set_ticket_cost(2), LotteryErrorCode::RoundInProgress);
        assert_fails_with(game.set_max_tickets(10), LotteryErrorCode::RoundInProgress);
        assert_eq!(snapshot(&game), before);
        assert_eq!(game.ticket_cost, DEFAULT_TICKET_COST);
    }

    #[test]
    fn changing_max_tickets_refills_inventory() {
        let admin = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut game = new_game(admin);

        assert_eq!(game.set_max_tickets(10).unwrap(), 5);
        assert_eq!(game.set_max_tickets(3).unwrap(), 10);
        assert_eq!(game.tickets_available, 3);
        game.assert_invariant().unwrap();

        game.set_ticket_cost(3).unwrap();
        game.sell_tickets(alice, 2, 10).unwrap();
        assert_fails_with(
            game.sell_tickets(bob, 2, 6),
            LotteryErrorCode::InvalidQuantity,
        );
        game.sell_tickets(bob, 1, 3).unwrap();

        // 21 % 3 == 0
        assert_eq!(game.draw_winner(admin, 21).unwrap(), (0, alice));
    }

    #[test]
    fn max_tickets_must_be_in_range() {
        let mut game = new_game(Pubkey::new_unique());

        assert_fails_with(game.set_max_tickets(0), LotteryErrorCode::InvalidMaxTickets);
        assert_fails_with(
            game.set_max_tickets(MAX_TICKETS_CAP + 1),
            LotteryErrorCode::InvalidMaxTickets,
        );
        assert_eq!(game.set_max_tickets(MAX_TICKETS_CAP).unwrap(), 5);
    }

    #[test]
    fn only_admin_can_draw() {
        let admin = Pubkey::new_unique();
        let mut game = new_game(admin);
        game.sell_tickets(Pubkey::new_unique(), 5, 5 * DEFAULT_TICKET_COST).unwrap();

        let before = snapshot(&game);
        assert_fails_with(
            game.draw_winner(Pubkey::new_unique(), 7),
            LotteryErrorCode::Unauthorized,
        );
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn draw_requires_sold_out_round() {
        let admin = Pubkey::new_unique();
        let mut game = new_game(admin);

        assert_fails_with(game.draw_winner(admin, 0), LotteryErrorCode::RoundNotFinished);

        game.sell_tickets(Pubkey::new_unique(), 4, 4 * DEFAULT_TICKET_COST).unwrap();
        assert_fails_with(game.draw_winner(admin, 0), LotteryErrorCode::RoundNotFinished);
    }

    #[test]
    fn draw_on_corrupted_roster_reports_missing_ticket() {
        let admin = Pubkey::new_unique();
        let mut game = new_game(admin);
        game.sell_tickets(Pubkey::new_unique(), 5, 5 * DEFAULT_TICKET_COST).unwrap();

        game.players.truncate(2);
        assert_fails_with(game.draw_winner(admin, 4), LotteryErrorCode::NoSuchTicket);
        assert_fails_with(game.assert_invariant(), LotteryErrorCode::InvariantViolation);
    }

    #[test]
    fn invariants_hold_across_many_rounds() {
        let admin = Pubkey::new_unique();
        let mut game = new_game(admin);
        game.set_ticket_cost(10).unwrap();

        for round in 0..4u64 {
            while game.tickets_available > 0 {
                let quantity = game.tickets_available.min(2);
                game.sell_tickets(Pubkey::new_unique(), quantity, 100).unwrap();
                game.assert_invariant().unwrap();
                assert_eq!(game.players.len(), game.tickets_sold as usize);
            }

            let (ticket, winner) = game.draw_winner(admin, round * 7 + 3).unwrap();
            assert_eq!(game.players[ticket as usize], winner);

            game.reset_round().unwrap();
            assert_eq!(game.round, round + 1);
        }
    }
}
