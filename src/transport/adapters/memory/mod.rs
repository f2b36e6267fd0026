//! In-memory chat transport.

mod transport;

pub use transport::InMemoryTransport;
