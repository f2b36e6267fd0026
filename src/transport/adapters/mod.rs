//! Adapter implementations for chat transports.

pub mod memory;
pub mod telegram;
