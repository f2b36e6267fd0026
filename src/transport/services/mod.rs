//! Services connecting transports to the command router.

mod runner;

pub use runner::BotRunner;
