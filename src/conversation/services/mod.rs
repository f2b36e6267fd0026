//! Application services for guided task creation.

mod flow;

pub use flow::{
    ConversationError, ConversationResult, ConversationService, DraftInput, FlowOutcome,
};
