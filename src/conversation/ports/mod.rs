//! Port contracts for draft storage.

pub mod draft_store;

pub use draft_store::{DraftStore, DraftStoreError, DraftStoreResult};
