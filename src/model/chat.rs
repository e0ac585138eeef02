//! Chat transcript for the AI Insights page

use chrono::{DateTime, Local};

pub const GREETING: &str = "Hello! I'm your AI investment assistant. I can help you analyze \
startup metrics, funding trends, and provide investment recommendations. What would you like to know?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Append-only message list with strictly increasing ids
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// A log that opens with the assistant's greeting
    pub fn with_greeting() -> Self {
        let mut log = Self::new();
        log.push(ChatRole::Assistant, GREETING);
        log
    }

    /// Append a message, returning its id
    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content: content.into(),
            timestamp: Local::now(),
        });
        id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
