//! Scripted chat assistant
//!
//! No model and no network: every user message gets exactly one canned
//! answer after a fixed delay.

use crate::model::{ChatLog, ChatMessage, ChatRole};
use crate::services::ReplyScheduler;
use std::time::Duration;

pub struct ChatSimulator {
    log: ChatLog,
    scheduler: ReplyScheduler,
}

impl ChatSimulator {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            log: ChatLog::with_greeting(),
            scheduler: ReplyScheduler::new(reply_delay),
        }
    }

    /// Append the user's message and schedule the reply
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send(&mut self, text: &str) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.log.push(ChatRole::User, text);
        self.scheduler.schedule();
        Some(id)
    }

    /// Apply replies that finished their delay; returns how many were added
    ///
    /// Ids are assigned on arrival, so they keep increasing even when
    /// several sends were in flight at once.
    pub fn poll(&mut self) -> usize {
        let replies = self.scheduler.poll();
        for reply in &replies {
            self.log.push(ChatRole::Assistant, reply.content.as_str());
        }
        replies.len()
    }

    /// Whether at least one reply is still pending
    pub fn is_thinking(&self) -> bool {
        self.scheduler.pending() > 0
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.log.messages()
    }
}
