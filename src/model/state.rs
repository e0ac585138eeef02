//! Root application state
//!
//! The current page and the mock session live here and nowhere else.
//! `App` owns the single instance; views only ever see a `ViewContext` copy.

use super::page::PageId;
use super::session::{Role, Session};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    page: PageId,
    session: Session,
}

impl AppState {
    pub fn new(start_page: PageId) -> Self {
        Self {
            page: start_page,
            session: Session::default(),
        }
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// Switch pages by string identifier
    ///
    /// Unknown identifiers resolve to home. Returns the page now current.
    pub fn change_page(&mut self, id: &str) -> PageId {
        let page = PageId::parse(id);
        if page.as_str() != id {
            debug!(requested = id, "unknown page id, falling back to home");
        }
        self.navigate(page)
    }

    pub fn navigate(&mut self, page: PageId) -> PageId {
        debug!(from = %self.page, to = %page, "navigate");
        self.page = page;
        page
    }

    /// Start a mock session and land on the dashboard
    pub fn login(&mut self, role: Role) -> PageId {
        info!(%role, "mock login");
        self.session.sign_in(role);
        self.navigate(PageId::Dashboard)
    }

    /// End the mock session and land on home
    pub fn logout(&mut self) -> PageId {
        info!("mock logout");
        self.session.sign_out();
        self.navigate(PageId::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.page(), PageId::Home);
        assert!(!state.session().is_authenticated());
        assert_eq!(state.session().role(), None);
    }

    #[test]
    fn test_change_page_to_every_known_page() {
        let mut state = AppState::default();
        for page in PageId::ALL {
            assert_eq!(state.change_page(page.as_str()), page);
            assert_eq!(state.page(), page);
        }
    }

    #[test]
    fn test_unknown_page_falls_back_to_home() {
        let mut state = AppState::default();
        state.change_page("startups");
        assert_eq!(state.page(), PageId::Startups);
        state.change_page("nonexistent-page");
        assert_eq!(state.page(), PageId::Home);
        // idempotent
        state.change_page("nonexistent-page");
        assert_eq!(state.page(), PageId::Home);
    }

    #[test]
    fn test_login_sets_role_and_lands_on_dashboard() {
        for role in Role::ALL {
            let mut state = AppState::default();
            assert_eq!(state.login(role), PageId::Dashboard);
            assert!(state.session().is_authenticated());
            assert_eq!(state.session().role(), Some(role));
        }
    }

    #[test]
    fn test_logout_after_login() {
        let mut state = AppState::default();
        state.login(Role::Startup);
        state.change_page("education");

        assert_eq!(state.logout(), PageId::Home);
        assert!(!state.session().is_authenticated());
        assert_eq!(state.session().role(), None);
    }

    #[test]
    fn test_last_navigation_wins() {
        let mut state = AppState::default();
        state.navigate(PageId::Terms);
        state.navigate(PageId::Privacy);
        state.change_page("kyc-policy");
        assert_eq!(state.page(), PageId::KycPolicy);
    }
}
