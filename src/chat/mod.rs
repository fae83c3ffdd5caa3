pub mod engine;
pub mod message;
pub mod rules;

pub use engine::{ChatSession, DialogState, PendingReply, Selection};
pub use message::{ChatMessage, OptionValue, Sender};
