//! Background work
//!
//! - Delayed canned replies for the chat page
//! - The chat simulator that owns them

pub mod chat;
pub mod reply_scheduler;

pub use chat::ChatSimulator;
pub use reply_scheduler::ReplyScheduler;
