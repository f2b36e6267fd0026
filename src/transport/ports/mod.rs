//! Port contract for chat transports.

pub mod chat;

pub use chat::{ChatTransport, TransportError, TransportResult};
