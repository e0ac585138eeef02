//! Page with copy plus one or more tabbed forms
//!
//! Login, signup, register and contact all share this shape. What a
//! successful submit does is the only thing that differs between them.

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::components::content::{body_area, draw_page, handle_page_key, wrapped_rows, PageContent};
use crate::components::form::{Form, FormEvent, TabbedForm};
use crate::model::Role;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use tracing::debug;

/// What a valid submission does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnSubmit {
    /// Show a static acknowledgement and clear the form
    Acknowledge(&'static str),
    /// Sign in with the role picked in the named choice field
    LoginWithChoice(&'static str),
}

pub struct FormPage {
    content: PageContent,
    forms: TabbedForm,
    footer: Option<PageContent>,
    on_submit: OnSubmit,
    acknowledgement: Option<&'static str>,
    scroll: usize,
    /// Scroll the form into view on the next draw, once the width is known
    reveal_form: bool,
}

fn role_from_label(label: &str) -> Option<Role> {
    Role::ALL.into_iter().find(|r| r.label() == label)
}

impl FormPage {
    pub fn new(content: PageContent, forms: TabbedForm, on_submit: OnSubmit) -> Self {
        Self {
            content,
            forms,
            footer: None,
            on_submit,
            acknowledgement: None,
            scroll: 0,
            reveal_form: false,
        }
    }

    /// Single form without a tab strip
    pub fn single(content: PageContent, form: Form, on_submit: OnSubmit) -> Self {
        Self::new(content, TabbedForm::new(vec![("", form)]), on_submit)
    }

    /// Copy rendered below the form
    pub fn with_footer(mut self, footer: PageContent) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn acknowledgement(&self) -> Option<&'static str> {
        self.acknowledgement
    }

    pub fn forms(&self) -> &TabbedForm {
        &self.forms
    }

    fn submitted(&mut self) -> Option<Action> {
        match self.on_submit {
            OnSubmit::Acknowledge(message) => {
                debug!(form = self.forms.active_label(), "form acknowledged");
                self.acknowledgement = Some(message);
                if let Some(form) = self.forms.form_mut() {
                    form.reset();
                }
                Some(Action::SetStatus(message.to_string()))
            }
            OnSubmit::LoginWithChoice(field) => {
                let label = self.forms.form().and_then(|f| f.value(field))?;
                role_from_label(label).map(Action::Login)
            }
        }
    }

    fn has_tabs(&self) -> bool {
        !self.forms.active_label().is_empty()
    }

    fn body(&self) -> Vec<Line<'static>> {
        let mut lines = self.content.body_lines();
        lines.push(Line::from(""));
        if self.has_tabs() {
            lines.push(self.forms.tab_line());
            lines.push(Line::from(""));
        }
        if let Some(form) = self.forms.form() {
            lines.extend(form.lines());
        }
        if let Some(ack) = self.acknowledgement {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  ✓ {}", ack),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(ref footer) = self.footer {
            lines.push(Line::from(""));
            lines.extend(footer.body_lines());
        }
        lines
    }
}

impl Component for FormPage {
    fn handle_key_event(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Result<Option<Action>> {
        if self.forms.is_editing() {
            let event = self.forms.form_mut().and_then(|f| f.handle_key(&key));
            return Ok(match event {
                Some(FormEvent::Submitted) => self.submitted(),
                None => None,
            });
        }

        let action = match key.code {
            KeyCode::Enter | KeyCode::Char('i') => {
                self.acknowledgement = None;
                self.reveal_form = true;
                if let Some(form) = self.forms.form_mut() {
                    form.start_editing();
                }
                None
            }
            KeyCode::Left => {
                self.forms.select(false);
                None
            }
            KeyCode::Right => {
                self.forms.select(true);
                None
            }
            _ => handle_page_key(&key, &self.content, &mut self.scroll),
        };
        Ok(action)
    }

    fn captures_input(&self) -> bool {
        self.forms.is_editing()
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _ctx: &ViewContext) -> Result<()> {
        if self.reveal_form {
            let width = body_area(area, &self.content).width;
            self.scroll = wrapped_rows(&self.content.body_lines(), width);
            self.reveal_form = false;
        }
        let body = self.body();
        draw_page(frame, area, &self.content, body, &mut self.scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form::Field;
    use crate::model::{PageId, Session};
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    const ROLES: &[&str] = &["Student", "Startup", "Investor"];

    fn ctx() -> ViewContext {
        ViewContext {
            page: PageId::Login,
            session: Session::default(),
        }
    }

    fn press(page: &mut FormPage, code: KeyCode) -> Option<Action> {
        page.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), &ctx())
            .unwrap()
    }

    fn type_text(page: &mut FormPage, text: &str) {
        for c in text.chars() {
            press(page, KeyCode::Char(c));
        }
    }

    fn login_page() -> FormPage {
        FormPage::single(
            PageContent::new("Login", "Welcome back"),
            Form::new(vec![Field::email("Email"), Field::choice("Account type", ROLES)]),
            OnSubmit::LoginWithChoice("Account type"),
        )
    }

    #[test]
    fn test_editing_captures_input() {
        let mut page = login_page();
        assert!(!page.captures_input());
        press(&mut page, KeyCode::Char('i'));
        assert!(page.captures_input());
        press(&mut page, KeyCode::Esc);
        assert!(!page.captures_input());
    }

    #[test]
    fn test_login_with_chosen_role() {
        let mut page = login_page();
        press(&mut page, KeyCode::Enter);
        type_text(&mut page, "ann@fund.io");
        press(&mut page, KeyCode::Tab);
        press(&mut page, KeyCode::Left);
        assert_eq!(press(&mut page, KeyCode::Enter), Some(Action::Login(Role::Investor)));
    }

    #[test]
    fn test_invalid_submit_stays_in_form() {
        let mut page = login_page();
        press(&mut page, KeyCode::Enter);
        type_text(&mut page, "not-an-email");
        assert_eq!(press(&mut page, KeyCode::Enter), None);
        assert!(page.captures_input());
    }

    #[test]
    fn test_acknowledge_resets_form() {
        let mut page = FormPage::single(
            PageContent::new("Contact", "Say hi"),
            Form::new(vec![Field::text("Name")]),
            OnSubmit::Acknowledge("Thanks!"),
        );
        press(&mut page, KeyCode::Enter);
        type_text(&mut page, "Sam");
        assert_eq!(
            press(&mut page, KeyCode::Enter),
            Some(Action::SetStatus("Thanks!".to_string()))
        );
        assert_eq!(page.acknowledgement(), Some("Thanks!"));
        assert_eq!(page.forms().form().and_then(|f| f.value("Name")), Some(""));
    }

    #[test]
    fn test_digit_links_work_when_not_editing() {
        let mut page = FormPage::single(
            PageContent::new("Login", "Welcome back").link("Sign up", PageId::Signup),
            Form::new(vec![Field::text("Name")]),
            OnSubmit::Acknowledge("ok"),
        );
        assert_eq!(press(&mut page, KeyCode::Char('1')), Some(Action::Navigate(PageId::Signup)));

        press(&mut page, KeyCode::Enter);
        assert_eq!(press(&mut page, KeyCode::Char('1')), None);
    }

    #[test]
    fn test_editing_scrolls_form_into_view_on_narrow_screen() {
        let intro = "Investyc connects founders with investors through a transparent, \
                     compliance-first process that keeps every party informed. \
                     Tell us a little about yourself and we will follow up shortly \
                     with next steps tailored to your role on the platform. \
                     Our team reviews every enquiry by hand, so please include \
                     enough detail for us to route it to the right person.";
        let mut page = FormPage::single(
            PageContent::new("Contact", "Say hi").text(intro),
            Form::new(vec![Field::text("Company")]),
            OnSubmit::Acknowledge("ok"),
        );
        press(&mut page, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(30, 14)).unwrap();
        terminal
            .draw(|f| page.draw(f, f.area(), &ctx()).unwrap())
            .unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Company"));
    }
}
