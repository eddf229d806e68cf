pub mod initialize;
pub mod ticket_buy;
pub mod ticket_cost_change;
pub mod ticket_max_change;
pub mod game_end;
pub mod payment_reject;

pub use initialize::*;
pub use ticket_buy::*;
pub use ticket_cost_change::*;
pub use ticket_max_change::*;
pub use game_end::*;
pub use payment_reject::*;
