//! Domain model for per-owner task drafts.

mod draft;
mod error;

pub use draft::{CompletedDraft, ConversationDraft, DeadlineAnswer, DraftStage};
pub use error::DraftError;
