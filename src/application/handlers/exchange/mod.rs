//! Exchange command and query handlers.

mod attempt_exchange;
mod open_exchange;

pub use attempt_exchange::{AttemptExchangeCommand, AttemptExchangeHandler};
pub use open_exchange::{OpenExchangeHandler, OpenExchangeQuery};
