//! Minimal form widget
//!
//! Validation stops at what a browser enforces on its own: required fields
//! must be filled in and e-mail fields must look like an address. Nothing is
//! ever sent anywhere.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    /// Free text shown on its own line below the label
    Message,
    /// Fixed option list, cycled with ←/→
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    value: String,
    selected: usize,
}

impl Field {
    fn new(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            kind,
            required: true,
            value: String::new(),
            selected: 0,
        }
    }

    pub fn text(label: &'static str) -> Self {
        Self::new(label, FieldKind::Text)
    }

    pub fn email(label: &'static str) -> Self {
        Self::new(label, FieldKind::Email)
    }

    pub fn password(label: &'static str) -> Self {
        Self::new(label, FieldKind::Password)
    }

    pub fn message(label: &'static str) -> Self {
        Self::new(label, FieldKind::Message)
    }

    pub fn choice(label: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(label, FieldKind::Choice(options))
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Current value; for choices, the selected option
    pub fn value(&self) -> &str {
        match self.kind {
            FieldKind::Choice(options) => options.get(self.selected).copied().unwrap_or(""),
            _ => &self.value,
        }
    }

    fn display(&self, focused: bool) -> String {
        match self.kind {
            FieldKind::Choice(options) => {
                let current = options.get(self.selected).copied().unwrap_or("");
                format!("‹ {} ›", current)
            }
            FieldKind::Password => {
                let masked = "•".repeat(self.value.chars().count());
                if focused { format!("{}_", masked) } else { masked }
            }
            FieldKind::Text | FieldKind::Email | FieldKind::Message => {
                if focused { format!("{}_", self.value) } else { self.value.clone() }
            }
        }
    }

    fn cycle(&mut self, forward: bool) {
        if let FieldKind::Choice(options) = self.kind {
            if options.is_empty() {
                return;
            }
            self.selected = if forward {
                (self.selected + 1) % options.len()
            } else {
                (self.selected + options.len() - 1) % options.len()
            };
        }
    }

    /// Why this field would block submission, if it would
    fn problem(&self) -> Option<String> {
        if matches!(self.kind, FieldKind::Choice(_)) {
            return None;
        }
        let value = self.value.trim();
        if self.required && value.is_empty() {
            return Some(format!("{} is required", self.label));
        }
        if self.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
            return Some("Please enter a valid email address".to_string());
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submitted,
}

#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    focus: usize,
    editing: bool,
    error: Option<String>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            focus: 0,
            editing: false,
            error: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn focused_label(&self) -> Option<&'static str> {
        self.fields.get(self.focus).map(|f| f.label)
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.label == label).map(|f| f.value())
    }

    /// Clear every input and leave editing mode
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.selected = 0;
        }
        self.focus = 0;
        self.editing = false;
        self.error = None;
    }

    /// Check every field, focusing the first one that fails
    pub fn validate(&mut self) -> bool {
        for (i, field) in self.fields.iter().enumerate() {
            if let Some(problem) = field.problem() {
                self.focus = i;
                self.error = Some(problem);
                return false;
            }
        }
        self.error = None;
        true
    }

    /// Handle a key while editing
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<FormEvent> {
        if !self.editing || self.fields.is_empty() {
            return None;
        }

        let len = self.fields.len();
        match key.code {
            KeyCode::Esc => self.editing = false,
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % len,
            KeyCode::BackTab | KeyCode::Up => self.focus = (self.focus + len - 1) % len,
            KeyCode::Left => self.fields[self.focus].cycle(false),
            KeyCode::Right => self.fields[self.focus].cycle(true),
            KeyCode::Enter => {
                if self.validate() {
                    self.editing = false;
                    return Some(FormEvent::Submitted);
                }
            }
            KeyCode::Backspace => {
                self.fields[self.focus].value.pop();
                self.error = None;
            }
            KeyCode::Char(c) => {
                let field = &mut self.fields[self.focus];
                match field.kind {
                    FieldKind::Choice(_) if c == ' ' => field.cycle(true),
                    FieldKind::Choice(_) => {}
                    _ => field.value.push(c),
                }
                self.error = None;
            }
            _ => {}
        }
        None
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, field) in self.fields.iter().enumerate() {
            let focused = self.editing && i == self.focus;
            let marker = if focused { "› " } else { "  " };
            let required = if field.required && !matches!(field.kind, FieldKind::Choice(_)) {
                "*"
            } else {
                " "
            };
            let value_style = if focused {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label = Span::styled(
                format!("{:<20}", format!("{}{}", field.label, required)),
                Style::default().fg(Color::Cyan),
            );
            let marker = Span::styled(marker, Style::default().fg(Color::Cyan));
            if field.kind == FieldKind::Message {
                lines.push(Line::from(vec![marker, label]));
                lines.push(Line::from(Span::styled(
                    format!("    {}", field.display(focused)),
                    value_style,
                )));
            } else {
                lines.push(Line::from(vec![
                    marker,
                    label,
                    Span::styled(field.display(focused), value_style),
                ]));
            }
        }

        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
        }

        lines.push(Line::from(""));
        let hint = if self.editing {
            "  Tab/↑↓ move  ←/→ change option  Enter submit  Esc leave form"
        } else {
            "  Press Enter or i to fill in the form"
        };
        lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));
        lines
    }
}

/// Several forms behind a tab strip (e.g. one per account type)
#[derive(Debug, Clone)]
pub struct TabbedForm {
    tabs: Vec<(&'static str, Form)>,
    active: usize,
}

impl TabbedForm {
    pub fn new(tabs: Vec<(&'static str, Form)>) -> Self {
        Self { tabs, active: 0 }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_label(&self) -> &'static str {
        self.tabs.get(self.active).map(|(label, _)| *label).unwrap_or("")
    }

    pub fn form(&self) -> Option<&Form> {
        self.tabs.get(self.active).map(|(_, form)| form)
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        self.tabs.get_mut(self.active).map(|(_, form)| form)
    }

    pub fn is_editing(&self) -> bool {
        self.form().is_some_and(Form::is_editing)
    }

    /// Switch tabs; ignored while a form is being edited
    pub fn select(&mut self, forward: bool) {
        if self.tabs.is_empty() || self.is_editing() {
            return;
        }
        let len = self.tabs.len();
        self.active = if forward {
            (self.active + 1) % len
        } else {
            (self.active + len - 1) % len
        };
    }

    pub fn tab_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw("  ")];
        for (i, (label, _)) in self.tabs.iter().enumerate() {
            let style = if i == self.active {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", label), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("  ←/→ switch", Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(form: &mut Form, code: KeyCode) -> Option<FormEvent> {
        form.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(form: &mut Form, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    fn contact_form() -> Form {
        Form::new(vec![
            Field::text("Name"),
            Field::email("Email"),
            Field::text("Company").optional(),
            Field::message("Message").optional(),
        ])
    }

    #[test]
    fn test_email_regex() {
        assert!(is_valid_email("sarah@investyc.com"));
        assert!(is_valid_email(" a@b.io "));
        assert!(!is_valid_email("sarah@investyc"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two words@x.com"));
    }

    #[test]
    fn test_keys_ignored_until_editing() {
        let mut form = contact_form();
        type_text(&mut form, "abc");
        assert_eq!(form.value("Name"), Some(""));
    }

    #[test]
    fn test_missing_required_field_blocks_submit() {
        let mut form = contact_form();
        form.start_editing();
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "sarah@investyc.com");

        assert_eq!(press(&mut form, KeyCode::Enter), None);
        assert_eq!(form.error(), Some("Name is required"));
        assert_eq!(form.focused_label(), Some("Name"));
        assert!(form.is_editing());
    }

    #[test]
    fn test_malformed_email_blocks_submit() {
        let mut form = contact_form();
        form.start_editing();
        type_text(&mut form, "Sarah");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "sarah-at-home");

        assert_eq!(press(&mut form, KeyCode::Enter), None);
        assert_eq!(form.error(), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_valid_form_submits_and_leaves_editing() {
        let mut form = contact_form();
        form.start_editing();
        type_text(&mut form, "Sarah");
        press(&mut form, KeyCode::Down);
        type_text(&mut form, "sarah@investyc.com");

        assert_eq!(press(&mut form, KeyCode::Enter), Some(FormEvent::Submitted));
        assert!(!form.is_editing());
        assert_eq!(form.value("Email"), Some("sarah@investyc.com"));
    }

    #[test]
    fn test_message_field_renders_below_label() {
        let form = Form::new(vec![Field::message("Message")]);
        let lines = form.lines();
        // label, value, blank, hint
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_backspace_and_reset() {
        let mut form = contact_form();
        form.start_editing();
        type_text(&mut form, "Sarahh");
        press(&mut form, KeyCode::Backspace);
        assert_eq!(form.value("Name"), Some("Sarah"));

        form.reset();
        assert_eq!(form.value("Name"), Some(""));
        assert!(!form.is_editing());
    }

    #[test]
    fn test_choice_cycles_both_ways() {
        const ROLES: &[&str] = &["Student", "Startup", "Investor"];
        let mut form = Form::new(vec![Field::choice("Account type", ROLES)]);
        form.start_editing();
        press(&mut form, KeyCode::Left);
        assert_eq!(form.value("Account type"), Some("Investor"));
        press(&mut form, KeyCode::Right);
        press(&mut form, KeyCode::Char(' '));
        assert_eq!(form.value("Account type"), Some("Startup"));
    }

    #[test]
    fn test_tabbed_form_switches_only_when_idle() {
        let mut tabs = TabbedForm::new(vec![
            ("Investor", contact_form()),
            ("Startup", contact_form()),
        ]);
        tabs.select(true);
        assert_eq!(tabs.active_label(), "Startup");
        tabs.select(true);
        assert_eq!(tabs.active_index(), 0);

        tabs.form_mut().unwrap().start_editing();
        tabs.select(false);
        assert_eq!(tabs.active_index(), 0);
    }
}
