pub const LOTTERY_VERSION: u8 = 1;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Ticket price a freshly initialized lottery starts with.
pub const DEFAULT_TICKET_COST: u64 = LAMPORTS_PER_SOL; // 1 SOL

/// Inventory size a freshly initialized lottery starts with.
pub const DEFAULT_MAX_TICKETS: u32 = 5;

// Upper bound on tickets per round. The account is allocated for this many
// player slots up front, so raising it requires a realloc.
pub const MAX_TICKETS_CAP: u32 = 100;
