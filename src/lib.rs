//! Taskbot: a conversational task tracker.
//!
//! Users create, list and complete tasks by sending chat commands. Tasks
//! persist in `PostgreSQL`; a short guided form collects a description and an
//! optional deadline before a task is stored.
//!
//! # Architecture
//!
//! Each feature module follows hexagonal architecture:
//!
//! - **Domain**: validated types with no infrastructure dependencies
//! - **Ports**: async trait interfaces for storage and messaging
//! - **Adapters**: in-memory, `PostgreSQL` and Telegram implementations
//! - **Services**: orchestration over ports
//!
//! # Modules
//!
//! - [`task`]: owner-scoped task storage
//! - [`conversation`]: per-owner drafts for the guided task form
//! - [`router`]: command parsing, dispatch and reply rendering
//! - [`transport`]: chat transports and the polling loop
//! - [`config`]: layered configuration
//! - [`telemetry`]: logging setup

pub mod config;
pub mod conversation;
pub mod router;
pub mod task;
pub mod telemetry;
pub mod transport;
