//! In-memory adapters for draft storage.

mod draft_store;

pub use draft_store::InMemoryDraftStore;
