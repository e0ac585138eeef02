//! Application root - owns state and routes events between components
//!
//! The app follows a component-based architecture:
//! - Root state (current page, mock session) lives in `AppState`
//! - The current page is a boxed `Component` rebuilt only when the page changes
//! - Overlays (quit, help, page picker, id prompt) sit on a `ModalStack`
//! - Everything that changes root state goes through `update(Action)`

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::components::{
    calculate_main_layout, navbar, pages, HelpDialog, PagePicker, QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{AppMode, AppState, PageId};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tracing::debug;

pub struct App {
    /// Splash screen or pages
    pub mode: AppMode,
    pub state: AppState,
    pub modals: ModalStack,
    pub should_quit: bool,
    /// One-line message shown above the help bar until the next navigation
    pub status_message: Option<String>,
    config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    page: Box<dyn Component>,
    /// Page the boxed component was built for
    mounted: PageId,
    pub splash: SplashComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub page_picker: PagePicker,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: Config) -> App {
        let start = config.start_page();
        App {
            mode: AppMode::Splash,
            state: AppState::new(start),
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            page: pages::build(start, &config),
            mounted: start,
            splash: SplashComponent::new(config.splash_duration()),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            page_picker: PagePicker::new(),
            config,
        }
    }

    pub fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        self.page.init()
    }

    pub fn current_page(&self) -> PageId {
        self.state.page()
    }

    fn context(&self) -> ViewContext {
        ViewContext {
            page: self.state.page(),
            session: self.state.session(),
        }
    }

    /// Rebuild the page component if root state moved to another page
    ///
    /// Navigating to the page already shown keeps its local state.
    fn mount(&mut self) -> Result<()> {
        let page = self.state.page();
        if page != self.mounted {
            debug!(from = %self.mounted, to = %page, "mounting page");
            self.page = pages::build(page, &self.config);
            self.page.init()?;
            self.mounted = page;
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        let ctx = self.context();
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key, &ctx),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key, &ctx)
                } else if self.page.captures_input() {
                    self.page.handle_key_event(key, &ctx)
                } else {
                    self.handle_global_key_event(key, &ctx)
                }
            }
        }
    }

    pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                return match self.mode {
                    AppMode::Splash => self.splash.update(Action::Tick),
                    AppMode::Running => self.page.update(Action::Tick),
                };
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(page) => {
                self.state.navigate(page);
                self.status_message = None;
                self.mount()?;
            }
            Action::ChangePage(id) => {
                self.state.change_page(&id);
                self.status_message = None;
                self.mount()?;
            }
            Action::NextNavItem | Action::PrevNavItem => {
                let forward = action == Action::NextNavItem;
                let next = navbar::step(&self.state.session(), self.state.page(), forward);
                return Ok(Some(Action::Navigate(next)));
            }

            // ─────────────────────────────────────────────────────────────────
            // Session
            // ─────────────────────────────────────────────────────────────────
            Action::Login(role) => {
                self.state.login(role);
                self.mount()?;
                self.status_message = Some(format!("Signed in as {}", role.label()));
            }
            Action::Logout => {
                self.state.logout();
                self.mount()?;
                self.status_message = Some("Signed out".to_string());
            }
            Action::ToggleSession => {
                return Ok(Some(if self.state.session().is_authenticated() {
                    Action::Logout
                } else {
                    Action::Navigate(PageId::Login)
                }));
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::OpenPagePicker => {
                self.page_picker.open_at(self.state.page());
                self.modals.push(Modal::PagePicker);
            }
            Action::OpenCommandPrompt => self.modals.push(Modal::CommandPrompt {
                input: String::new(),
            }),
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                return Ok(match self.modals.pop() {
                    Some(Modal::PagePicker) => Some(Action::Navigate(self.page_picker.selected_page())),
                    Some(Modal::CommandPrompt { input }) => {
                        Some(Action::ChangePage(input.trim().to_string()))
                    }
                    _ => None,
                });
            }

            Action::SetStatus(message) => {
                self.status_message = Some(message);
            }
        }

        Ok(None)
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = self.context();
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area, &ctx)?,
            AppMode::Running => {
                let layout = calculate_main_layout(area, self.status_message.is_some());

                navbar::draw_navbar(frame, layout.navbar, &ctx);
                self.page.draw(frame, layout.content, &ctx)?;
                if let (Some(status_area), Some(message)) = (layout.status, &self.status_message) {
                    navbar::draw_status_bar(frame, status_area, message);
                }
                navbar::draw_help_bar(frame, layout.help, self.page.captures_input());

                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal, &ctx)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Shell shortcuts first, everything else goes to the page
    fn handle_global_key_event(&mut self, key: KeyEvent, ctx: &ViewContext) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('g') => Some(Action::OpenPagePicker),
            KeyCode::Char(':') => Some(Action::OpenCommandPrompt),
            KeyCode::Tab => Some(Action::NextNavItem),
            KeyCode::BackTab => Some(Action::PrevNavItem),
            KeyCode::Char('L') => Some(Action::ToggleSession),
            KeyCode::Char('S') => Some(Action::Navigate(PageId::Signup)),
            _ => return self.page.handle_key_event(key, ctx),
        };
        Ok(action)
    }

    fn handle_modal_key_event(
        &mut self,
        modal: &Modal,
        key: KeyEvent,
        ctx: &ViewContext,
    ) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key, ctx),
            Modal::Help => self.help_dialog.handle_key_event(key, ctx),
            Modal::PagePicker => self.page_picker.handle_key_event(key, ctx),
            Modal::CommandPrompt { .. } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::ConfirmModal),
                    KeyCode::Backspace => {
                        if let Some(Modal::CommandPrompt { input }) = self.modals.top_mut() {
                            input.pop();
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::CommandPrompt { input }) = self.modals.top_mut() {
                            input.push(c);
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal, ctx: &ViewContext) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area, ctx)?,
            Modal::Help => self.help_dialog.draw(frame, area, ctx)?,
            Modal::PagePicker => self.page_picker.draw(frame, area, ctx)?,
            Modal::CommandPrompt { input } => draw_command_prompt(frame, area, input),
        }
        Ok(())
    }
}

fn draw_command_prompt(frame: &mut Frame, area: Rect, input: &str) {
    use crate::components::centered_popup;
    use ratatui::layout::Alignment;
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph};

    let popup_area = centered_popup(area, 50, 9);
    frame.render_widget(Clear, popup_area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Page id (e.g. trustspv, kyc-policy):",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("> {}_", input), Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw("Open  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Open Page ")
                .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use ratatui::{backend::TestBackend, Terminal};

    fn running_app() -> App {
        let config = Config {
            splash_duration_ms: 0,
            chat_reply_delay_ms: 10,
            ..Config::default()
        };
        let mut app = App::new(config);
        app.init().unwrap();
        app.update(Action::SplashComplete).unwrap();
        app
    }

    /// Apply an action and every follow-up it produces
    fn dispatch(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        if let Some(action) = app.handle_key_event(KeyEvent::new(code, modifiers)).unwrap() {
            dispatch(app, action);
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| app.draw(f, f.area()).unwrap()).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text only the given page draws
    fn marker(page: PageId) -> &'static str {
        match page {
            PageId::Home => "Fueling Startups",
            PageId::Startups => "For Startups",
            PageId::StartupProfile => "EcoTech Solutions",
            PageId::Investors => "For Investors",
            PageId::TrustSpv => "Diversified Trust Funds",
            PageId::AiInsights => "AI Investment Assistant",
            PageId::Education => "Education Hub",
            PageId::HowItWorks => "How It Works",
            PageId::About => "About Investyc",
            PageId::Contact => "Contact Us",
            PageId::Terms => "Terms of Service",
            PageId::Privacy => "Privacy Policy",
            PageId::KycPolicy => "KYC / AML Policy",
            PageId::Login => "Welcome Back",
            PageId::Signup => "Join Investyc",
            PageId::Dashboard => "Sign in to see your dashboard",
            PageId::Register => "Register with Investyc",
        }
    }

    #[test]
    fn test_splash_then_running() {
        let mut app = App::new(Config {
            splash_duration_ms: 0,
            ..Config::default()
        });
        app.init().unwrap();
        assert_eq!(app.mode, AppMode::Splash);
        dispatch(&mut app, Action::Tick);
        assert_eq!(app.mode, AppMode::Running);
    }

    #[test]
    fn test_any_key_skips_splash() {
        let mut app = App::new(Config::default());
        app.init().unwrap();
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, AppMode::Running);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_every_page_renders_after_change_page() {
        let mut app = running_app();
        for page in PageId::ALL {
            dispatch(&mut app, Action::ChangePage(page.as_str().to_string()));
            assert_eq!(app.current_page(), page);
            let screen = render(&mut app);
            assert!(screen.contains(marker(page)), "{} did not render", page);
        }
    }

    #[test]
    fn test_unknown_id_renders_home() {
        let mut app = running_app();
        dispatch(&mut app, Action::ChangePage("startups".to_string()));
        assert_eq!(app.current_page(), PageId::Startups);
        dispatch(&mut app, Action::ChangePage("nonexistent-page".to_string()));
        assert_eq!(app.current_page(), PageId::Home);
        assert!(render(&mut app).contains(marker(PageId::Home)));
    }

    #[test]
    fn test_login_investor_shows_only_investor_stats() {
        let mut app = running_app();
        assert!(!app.state.session().is_authenticated());

        dispatch(&mut app, Action::Login(Role::Investor));
        assert_eq!(app.current_page(), PageId::Dashboard);
        assert_eq!(app.state.session().role(), Some(Role::Investor));

        let screen = render(&mut app);
        assert!(screen.contains("Total Invested"));
        assert!(screen.contains("Portfolio Value"));
        assert!(!screen.contains("Funds Raised"));
        assert!(!screen.contains("Courses Completed"));
    }

    #[test]
    fn test_each_role_gets_its_dashboard() {
        for (role, stat) in [
            (Role::Student, "Learning Hours"),
            (Role::Startup, "Funding Goal"),
            (Role::Investor, "Total Invested"),
        ] {
            let mut app = running_app();
            dispatch(&mut app, Action::Login(role));
            assert!(render(&mut app).contains(stat), "{} dashboard", role);
        }
    }

    #[test]
    fn test_logout_returns_home() {
        let mut app = running_app();
        dispatch(&mut app, Action::Login(Role::Startup));
        assert!(render(&mut app).contains("Dashboard"));

        press(&mut app, KeyCode::Char('L'));
        assert_eq!(app.current_page(), PageId::Home);
        assert!(!app.state.session().is_authenticated());
        // navbar entry is gone with the session
        assert!(!render(&mut app).contains("Dashboard"));
    }

    #[test]
    fn test_login_form_end_to_end() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('L'));
        assert_eq!(app.current_page(), PageId::Login);

        press(&mut app, KeyCode::Enter);
        // 'q' and 'g' go to the form, not the shell
        type_text(&mut app, "greg@quant.io");
        assert!(app.modals.is_empty());
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_page(), PageId::Dashboard);
        assert_eq!(app.state.session().role(), Some(Role::Investor));
    }

    #[test]
    fn test_forgot_password_falls_back_home() {
        let mut app = running_app();
        dispatch(&mut app, Action::Navigate(PageId::Login));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.current_page(), PageId::Home);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_even_while_typing() {
        let mut app = running_app();
        dispatch(&mut app, Action::Navigate(PageId::Contact));
        press(&mut app, KeyCode::Enter);
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_command_prompt_opens_page_by_id() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "kyc-policy");
        assert!(render(&mut app).contains("> kyc-policy_"));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_page(), PageId::KycPolicy);
        assert!(app.modals.is_empty());

        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "forgot-password");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_page(), PageId::Home);
    }

    #[test]
    fn test_page_picker_reaches_pages_outside_navbar() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.modals.top(), Some(&Modal::PagePicker));
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_page(), PageId::Register);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_tab_walks_the_navbar() {
        let mut app = running_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page(), PageId::AiInsights);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_page(), PageId::Contact);
    }

    #[test]
    fn test_same_page_navigation_keeps_local_state() {
        let mut app = running_app();
        dispatch(&mut app, Action::Navigate(PageId::AiInsights));
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "hello there");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        dispatch(&mut app, Action::Navigate(PageId::AiInsights));
        assert!(render(&mut app).contains("hello there"));

        dispatch(&mut app, Action::Navigate(PageId::Home));
        dispatch(&mut app, Action::Navigate(PageId::AiInsights));
        assert!(!render(&mut app).contains("hello there"));
    }

    #[test]
    fn test_contact_form_acknowledges() {
        let mut app = running_app();
        dispatch(&mut app, Action::Navigate(PageId::Contact));
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Lovelace");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@engine.org");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Hi");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.status_message.as_deref(),
            Some(pages::contact::ACKNOWLEDGEMENT)
        );
        assert_eq!(app.current_page(), PageId::Contact);
    }

    #[test]
    fn test_signup_acknowledges_without_signing_in() {
        let mut app = running_app();
        dispatch(&mut app, Action::ChangePage("signup".to_string()));
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "Grace");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Hopper");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "grace@navy.mil");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "cobol");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.status_message.as_deref(),
            Some(pages::register::ACKNOWLEDGEMENT)
        );
        assert_eq!(app.current_page(), PageId::Signup);
        assert!(!app.state.session().is_authenticated());
    }
}
