//! Telegram Bot API transport.

mod api;
mod transport;


pub use transport::TelegramTransport;
