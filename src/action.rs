//! Action enum - everything the app can be asked to do
//!
//! Components never mutate root state directly. They return an Action,
//! and `App::update` applies it. Navigation requests from pages travel the
//! same way: a page returns `Navigate` or `ChangePage`.

use crate::model::{PageId, Role};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for timers and background polling
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Leave the splash screen
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Show a known page
    Navigate(PageId),
    /// Show a page by its string identifier; unknown ids land on home
    ChangePage(String),
    /// Move to the next navbar entry
    NextNavItem,
    /// Move to the previous navbar entry
    PrevNavItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────
    /// Start a mock session with the given role
    Login(Role),
    /// End the mock session
    Logout,
    /// Login when signed out, logout when signed in
    ToggleSession,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Open the list of every page
    OpenPagePicker,
    /// Open the "type a page id" prompt
    OpenCommandPrompt,
    CloseModal,
    ConfirmModal,

    /// Show a one-line message in the status bar
    SetStatus(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::Navigate(page) => write!(f, "Navigate({})", page),
            Action::ChangePage(id) => write!(f, "ChangePage({})", id),
            Action::NextNavItem => write!(f, "NextNavItem"),
            Action::PrevNavItem => write!(f, "PrevNavItem"),
            Action::Login(role) => write!(f, "Login({})", role),
            Action::Logout => write!(f, "Logout"),
            Action::ToggleSession => write!(f, "ToggleSession"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenPagePicker => write!(f, "OpenPagePicker"),
            Action::OpenCommandPrompt => write!(f, "OpenCommandPrompt"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::SetStatus(msg) => write!(f, "SetStatus({})", msg),
        }
    }
}
