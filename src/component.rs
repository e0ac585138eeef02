//! Component trait - interface shared by pages and overlays
//!
//! A component owns its local state (scroll position, form input, chat log)
//! and nothing else. Root state reaches it read-only through `ViewContext`,
//! and requests to change root state leave it as an `Action`.

use crate::action::Action;
use crate::model::{PageId, Session};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Read-only snapshot of root state handed to every component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext {
    pub page: PageId,
    pub session: Session,
}

pub trait Component {
    /// Called once after the component is mounted
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Translate a key press into an optional Action
    fn handle_key_event(&mut self, key: KeyEvent, ctx: &ViewContext) -> Result<Option<Action>> {
        let _ = (key, ctx);
        Ok(None)
    }

    /// React to an Action the root forwards (currently only `Tick`)
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Whether the component is consuming raw keystrokes (e.g. a focused form)
    ///
    /// While true, the root skips its global shortcuts and sends every key here.
    fn captures_input(&self) -> bool {
        false
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) -> Result<()>;
}
