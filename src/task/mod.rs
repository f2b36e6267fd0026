//! Owner-scoped task storage.
//!
//! A task is created with a description and an optional deadline, listed in
//! creation order, and completed with a one-way mark-done transition. Every
//! read and update is filtered by the owning user. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
