//! UI Components
//!
//! Each component owns its local state, event handling and rendering.
//! Components communicate through Actions rather than direct state mutation.

pub mod content;
pub mod form;
pub mod form_page;
pub mod help_dialog;
pub mod layout;
pub mod navbar;
pub mod page_picker;
pub mod pages;
pub mod quit_dialog;
pub mod splash;
pub mod static_page;

pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use page_picker::PagePicker;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
pub use static_page::StaticPage;
