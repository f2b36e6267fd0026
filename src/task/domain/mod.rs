//! Domain model for owner-scoped task records.
//!
//! Tasks are created with a validated description and an optional deadline,
//! and only ever move from pending to done. Infrastructure concerns stay
//! outside of this boundary.

mod deadline;
mod error;
mod ids;
mod task;

pub use deadline::Deadline;
pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::{OwnerId, TaskId};
pub use task::{NewTask, PersistedTaskData, Task, TaskDescription};
