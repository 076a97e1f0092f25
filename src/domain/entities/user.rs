//! Account entities.

use std::fmt;

/// Profile of the signed-in user (`GET /auth/me`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

/// Login input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Registration input.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// E-mail change input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailChange {
    pub current_email: String,
    pub new_email: String,
}

/// Password change input.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

// Secrets stay out of logs and panic messages.

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current_password", &"***")
            .field("new_password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}
