//! Modal stack for overlays
//!
//! Only the top modal receives input; all of them are drawn above the page.

/// Overlay drawn on top of the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// "Quit Investyc?" confirmation
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
    /// List of every page
    PagePicker,
    /// Free-text page identifier prompt
    CommandPrompt { input: String },
}

/// Open overlays, oldest first
///
/// Input goes to the last element; drawing walks the stack in order.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Empty stack, no overlay open
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Open `modal` above everything else
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Close the topmost overlay and return it
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// The overlay currently receiving input
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Mutable access to the topmost overlay, for in-place edits
    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    /// True when keys should go to the page
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
