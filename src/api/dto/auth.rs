//! DTOs for the account endpoints (`/auth/*`).

use crate::domain::entities::{Credentials, EmailChange, PasswordChange, Registration, UserProfile};
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub remember_me: bool,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
            remember_me: credentials.remember_me,
        }
    }
}

/// Body of `POST /auth/register`.
#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> From<&'a Registration> for RegisterRequest<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            username: &registration.username,
            email: &registration.email,
            password: &registration.password,
            confirm_password: &registration.confirm_password,
        }
    }
}

/// Response of `GET /auth/me`.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
}

impl From<UserResponse> for UserProfile {
    fn from(dto: UserResponse) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
        }
    }
}

/// Body of `PATCH /auth/me/username`.
#[derive(Debug, Serialize)]
pub struct UpdateUsernameRequest<'a> {
    pub username: &'a str,
}

/// Body of `PATCH /auth/me/email`.
#[derive(Debug, Serialize)]
pub struct UpdateEmailRequest<'a> {
    pub current_email: &'a str,
    pub new_email: &'a str,
}

impl<'a> From<&'a EmailChange> for UpdateEmailRequest<'a> {
    fn from(change: &'a EmailChange) -> Self {
        Self {
            current_email: &change.current_email,
            new_email: &change.new_email,
        }
    }
}

/// Body of `PATCH /auth/me/password`.
#[derive(Serialize)]
pub struct UpdatePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> From<&'a PasswordChange> for UpdatePasswordRequest<'a> {
    fn from(change: &'a PasswordChange) -> Self {
        Self {
            current_password: &change.current_password,
            new_password: &change.new_password,
            confirm_password: &change.confirm_password,
        }
    }
}
