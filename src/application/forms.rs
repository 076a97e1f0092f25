//! Form models validated before any request is sent.
//!
//! Field rules come from [`crate::utils::validators`] through
//! `#[validate(custom)]`; cross-field checks (confirmations, expiry in the
//! future) are appended to the same [`ValidationErrors`] so every inline
//! error is reported at once.

use crate::domain::entities::{Credentials, EmailChange, NewLink, PasswordChange, Registration};
use crate::utils::validators::{
    check_email, check_password, check_required, check_slug, check_url, check_username,
    validate_confirm_email, validate_confirm_password, validate_expiration,
};
use chrono::{DateTime, Utc};
use validator::{Validate, ValidationErrors};

/// Trims the value and drops it when blank.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

fn finish(
    derived: Result<(), ValidationErrors>,
    extra: impl FnOnce(&mut ValidationErrors),
) -> Result<(), ValidationErrors> {
    let mut errors = derived.err().unwrap_or_else(ValidationErrors::new);
    extra(&mut errors);
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "check_username"))]
    pub username: String,
    #[validate(custom(function = "check_email"))]
    pub email: String,
    #[validate(custom(function = "check_password"))]
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Trims username and e-mail; passwords are kept as typed.
    pub fn normalized(self) -> Self {
        Self {
            username: trimmed(&self.username),
            email: trimmed(&self.email),
            ..self
        }
    }

    pub fn check(&self) -> Result<(), ValidationErrors> {
        let form = self.clone().normalized();
        finish(form.validate(), |errors| {
            if let Err(e) = validate_confirm_password(&form.confirm_password, &form.password) {
                errors.add("confirm_password", e.into());
            }
        })
    }

    pub fn into_registration(self) -> Registration {
        let form = self.normalized();
        Registration {
            username: form.username,
            email: form.email,
            password: form.password,
            confirm_password: form.confirm_password,
        }
    }
}

/// Login only checks the e-mail shape; the password is judged by the API.
#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "check_email"))]
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn normalized(self) -> Self {
        Self {
            email: trimmed(&self.email),
            ..self
        }
    }

    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.clone().normalized().validate()
    }

    pub fn into_credentials(self) -> Credentials {
        let form = self.normalized();
        Credentials {
            email: form.email,
            password: form.password,
            remember_me: form.remember_me,
        }
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ShortenForm {
    #[validate(custom(function = "check_url"))]
    pub original_url: String,
    #[validate(custom(function = "check_slug"))]
    pub custom_slug: Option<String>,
    #[validate(custom(function = "check_required"))]
    pub password: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortenForm {
    /// Builds a form, treating blank optional fields as absent.
    pub fn new(
        original_url: impl Into<String>,
        custom_slug: Option<String>,
        password: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            original_url: original_url.into().trim().to_string(),
            custom_slug: non_empty(custom_slug),
            password: password.filter(|p| !p.is_empty()),
            expires_at,
        }
    }

    /// Validates the form; the expiry must be after `now`.
    pub fn check(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        finish(self.validate(), |errors| {
            if let Some(expires_at) = self.expires_at
                && let Err(e) = validate_expiration(expires_at, now)
            {
                errors.add("expires_at", e.into());
            }
        })
    }

    pub fn into_new_link(self) -> NewLink {
        NewLink {
            original_url: self.original_url,
            custom_slug: self.custom_slug,
            password: self.password,
            expires_at: self.expires_at,
        }
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UsernameForm {
    #[validate(custom(function = "check_username"))]
    pub username: String,
}

impl UsernameForm {
    pub fn new(username: &str) -> Self {
        Self {
            username: trimmed(username),
        }
    }

    pub fn check(&self) -> Result<(), ValidationErrors> {
        Self::new(&self.username).validate()
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct EmailChangeForm {
    #[validate(custom(function = "check_email"))]
    pub current_email: String,
    #[validate(custom(function = "check_email"))]
    pub new_email: String,
    pub confirm_email: String,
}

impl EmailChangeForm {
    pub fn normalized(self) -> Self {
        Self {
            current_email: trimmed(&self.current_email),
            new_email: trimmed(&self.new_email),
            confirm_email: trimmed(&self.confirm_email),
        }
    }

    pub fn check(&self) -> Result<(), ValidationErrors> {
        let form = self.clone().normalized();
        finish(form.validate(), |errors| {
            if let Err(e) = validate_confirm_email(&form.confirm_email, &form.new_email) {
                errors.add("confirm_email", e.into());
            }
        })
    }

    pub fn into_change(self) -> EmailChange {
        let form = self.normalized();
        EmailChange {
            current_email: form.current_email,
            new_email: form.new_email,
        }
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct PasswordChangeForm {
    #[validate(custom(function = "check_required"))]
    pub current_password: String,
    #[validate(custom(function = "check_password"))]
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        finish(self.validate(), |errors| {
            if let Err(e) = validate_confirm_password(&self.confirm_password, &self.new_password) {
                errors.add("confirm_password", e.into());
            }
        })
    }

    pub fn into_change(self) -> PasswordChange {
        PasswordChange {
            current_password: self.current_password,
            new_password: self.new_password,
            confirm_password: self.confirm_password,
        }
    }
}
