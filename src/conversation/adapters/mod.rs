//! Adapter implementations for draft storage.

pub mod memory;
