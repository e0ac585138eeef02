//! Mock session
//!
//! There are no credentials. A session is just the role picked at login.

use std::fmt;

/// The mocked user category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Startup,
    Investor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Startup, Role::Investor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Startup => "startup",
            Role::Investor => "investor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Startup => "Startup",
            Role::Investor => "Investor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated iff a role is present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    role: Option<Role>,
}

impl Session {
    #[cfg(test)]
    pub fn signed_in(role: Role) -> Self {
        Self { role: Some(role) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub(crate) fn sign_in(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub(crate) fn sign_out(&mut self) {
        self.role = None;
    }
}
