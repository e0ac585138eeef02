//! Model layer - root state and the small amount of data with behavior
//!
//! - `AppState` - current page plus mock session, owned by `App`
//! - `ChatLog` - transcript local to the AI Insights page
//! - `ModalStack` - overlay management

pub mod chat;
pub mod modal;
pub mod page;
pub mod session;
pub mod state;
pub mod ui;

pub use chat::{ChatLog, ChatMessage, ChatRole};
pub use page::PageId;
pub use session::{Role, Session};
pub use state::AppState;
pub use ui::AppMode;
