//! Step definitions for guided task creation scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
