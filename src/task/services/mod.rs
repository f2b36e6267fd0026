//! Application services for owner-scoped task storage.

mod store;

pub use store::{CreateTaskRequest, TaskStoreError, TaskStoreResult, TaskStoreService};
