//! Login status, role, and the current user record.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Account role, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Parent,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
            Role::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "parent" => Ok(Role::Parent),
            "student" => Ok(Role::Student),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

/// Unknown role tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

/// Authenticated user as returned by the auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            phone: None,
            role,
            profile_picture: None,
        }
    }
}

/// Session state. Empty on a fresh install, filled after authentication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSlice {
    #[serde(default)]
    is_logged_in: bool,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    user: Option<User>,
}

impl SessionSlice {
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.is_logged_in = logged_in;
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Record a successful authentication.
    pub fn login(&mut self, user: User) {
        self.is_logged_in = true;
        self.role = Some(user.role);
        self.user = Some(user);
    }

    /// Clear login flag, role, and user.
    pub fn logout(&mut self) {
        self.set_logged_in(false);
        self.set_role(None);
        self.set_user(None);
    }
}
