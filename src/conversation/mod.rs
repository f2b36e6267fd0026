//! Guided task creation.
//!
//! A user who starts a new task is walked through a short linear form
//! (description, then an optional deadline). The in-progress answers live in
//! a per-owner draft that is promoted into a stored task at the last step.
//! Drafts are transient and are never persisted.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
