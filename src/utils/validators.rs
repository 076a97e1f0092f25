//! Client-side input validators.
//!
//! Every form is checked here before a request is sent, so malformed input
//! is reported inline instead of round-tripping through the API. The rules
//! mirror the ones the API enforces on its side.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;
use validator::ValidationError;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{3,16}$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{3,16}$").unwrap());

/// Maximum length of an e-mail address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Minimum password length accepted for accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Slugs that collide with the web client's own routes.
pub const RESERVED_SLUGS: &[&str] = &["links", "auth", "perfil", "profile", "api", "admin", "stats"];

/// A single rejected form field.
///
/// The `Display` text is the English message; localized copy is looked up
/// through [`crate::ui::messages::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("username must be between 3 and 16 characters")]
    UsernameLength,
    #[error("username may only contain letters, digits, underscores (_) or hyphens (-)")]
    UsernameCharset,
    #[error("e-mail is required")]
    EmailRequired,
    #[error("e-mail is not valid")]
    EmailInvalid,
    #[error("e-mail contains invalid characters")]
    EmailConsecutiveDots,
    #[error("e-mail addresses do not match")]
    EmailMismatch,
    #[error("password must be at least 8 characters")]
    PasswordTooShort,
    #[error("password must contain at least one letter")]
    PasswordNoLetter,
    #[error("password must contain at least one digit")]
    PasswordNoDigit,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("short link must be between 3 and 16 characters")]
    SlugLength,
    #[error("short link may only contain letters, digits, underscores or hyphens")]
    SlugCharset,
    #[error("short link is reserved")]
    SlugReserved,
    #[error("URL is not valid")]
    UrlInvalid,
    #[error("only http and https URLs can be shortened")]
    UrlScheme,
    #[error("expiration must be in the future")]
    ExpirationInPast,
    #[error("expiration must look like YYYY-MM-DD HH:MM")]
    ExpirationFormat,
    #[error("this field is required")]
    Required,
}

impl FieldError {
    /// Stable identifier carried in [`ValidationError::code`].
    pub fn code(self) -> &'static str {
        match self {
            Self::UsernameLength => "username_length",
            Self::UsernameCharset => "username_charset",
            Self::EmailRequired => "email_required",
            Self::EmailInvalid => "email_invalid",
            Self::EmailConsecutiveDots => "email_consecutive_dots",
            Self::EmailMismatch => "email_mismatch",
            Self::PasswordTooShort => "password_too_short",
            Self::PasswordNoLetter => "password_no_letter",
            Self::PasswordNoDigit => "password_no_digit",
            Self::PasswordMismatch => "password_mismatch",
            Self::SlugLength => "slug_length",
            Self::SlugCharset => "slug_charset",
            Self::SlugReserved => "slug_reserved",
            Self::UrlInvalid => "url_invalid",
            Self::UrlScheme => "url_scheme",
            Self::ExpirationInPast => "expiration_in_past",
            Self::ExpirationFormat => "expiration_format",
            Self::Required => "required",
        }
    }

    /// Inverse of [`FieldError::code`].
    pub fn from_code(code: &str) -> Option<Self> {
        const ALL: [FieldError; 18] = [
            FieldError::UsernameLength,
            FieldError::UsernameCharset,
            FieldError::EmailRequired,
            FieldError::EmailInvalid,
            FieldError::EmailConsecutiveDots,
            FieldError::EmailMismatch,
            FieldError::PasswordTooShort,
            FieldError::PasswordNoLetter,
            FieldError::PasswordNoDigit,
            FieldError::PasswordMismatch,
            FieldError::SlugLength,
            FieldError::SlugCharset,
            FieldError::SlugReserved,
            FieldError::UrlInvalid,
            FieldError::UrlScheme,
            FieldError::ExpirationInPast,
            FieldError::ExpirationFormat,
            FieldError::Required,
        ];
        ALL.into_iter().find(|e| e.code() == code)
    }
}

impl From<FieldError> for ValidationError {
    fn from(err: FieldError) -> Self {
        ValidationError::new(err.code()).with_message(Cow::Owned(err.to_string()))
    }
}

/// Lengths are counted in UTF-16 code units, the way the web forms and the
/// API count them.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Checks a username: 3 to 16 characters from `[a-zA-Z0-9_-]`.
///
/// # Examples
///
/// ```
/// use shortener_client::utils::validators::{validate_username, FieldError};
///
/// assert_eq!(validate_username("ab"), Err(FieldError::UsernameLength));
/// assert!(validate_username("john_doe-1").is_ok());
/// ```
pub fn validate_username(value: &str) -> Result<(), FieldError> {
    let len = utf16_len(value);
    if !(3..=16).contains(&len) {
        return Err(FieldError::UsernameLength);
    }
    if !USERNAME_REGEX.is_match(value) {
        return Err(FieldError::UsernameCharset);
    }
    Ok(())
}

/// Checks an e-mail address shape (`local@domain.tld`), its length and
/// rejects consecutive dots.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_REGEX.is_match(value) || utf16_len(value) > MAX_EMAIL_LENGTH {
        return Err(FieldError::EmailInvalid);
    }
    if value.contains("..") {
        return Err(FieldError::EmailConsecutiveDots);
    }
    Ok(())
}

/// Checks password strength: at least 8 characters, one letter and one digit.
///
/// # Examples
///
/// ```
/// use shortener_client::utils::validators::{validate_password, FieldError};
///
/// assert!(validate_password("abcdefg1").is_ok());
/// assert_eq!(validate_password("abcdefgh"), Err(FieldError::PasswordNoDigit));
/// ```
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if utf16_len(value) < MIN_PASSWORD_LENGTH {
        return Err(FieldError::PasswordTooShort);
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(FieldError::PasswordNoLetter);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldError::PasswordNoDigit);
    }
    Ok(())
}

/// Fails iff the confirmation differs from the password.
pub fn validate_confirm_password(confirmation: &str, password: &str) -> Result<(), FieldError> {
    if confirmation != password {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

/// Fails iff the confirmation differs from the new e-mail.
pub fn validate_confirm_email(confirmation: &str, email: &str) -> Result<(), FieldError> {
    if confirmation != email {
        return Err(FieldError::EmailMismatch);
    }
    Ok(())
}

/// Checks a custom short link.
///
/// Same character rules as usernames, and none of [`RESERVED_SLUGS`].
pub fn validate_slug(value: &str) -> Result<(), FieldError> {
    let len = utf16_len(value);
    if !(3..=16).contains(&len) {
        return Err(FieldError::SlugLength);
    }
    if !SLUG_REGEX.is_match(value) {
        return Err(FieldError::SlugCharset);
    }
    if RESERVED_SLUGS.contains(&value) {
        return Err(FieldError::SlugReserved);
    }
    Ok(())
}

/// Checks that a destination URL parses and uses `http` or `https`.
///
/// Rejects `javascript:`, `data:`, `file:` and friends.
pub fn validate_url(value: &str) -> Result<(), FieldError> {
    let url = Url::parse(value.trim()).map_err(|_| FieldError::UrlInvalid)?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(()),
        "http" | "https" => Err(FieldError::UrlInvalid),
        _ => Err(FieldError::UrlScheme),
    }
}

/// Expiration timestamps must lie strictly after `now`.
pub fn validate_expiration(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), FieldError> {
    if expires_at <= now {
        return Err(FieldError::ExpirationInPast);
    }
    Ok(())
}

/// Rejects empty or whitespace-only input.
pub fn validate_required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

// Adapters for `#[validate(custom(function = ...))]`.

pub(crate) fn check_username(value: &str) -> Result<(), ValidationError> {
    validate_username(value).map_err(Into::into)
}

pub(crate) fn check_email(value: &str) -> Result<(), ValidationError> {
    validate_email(value).map_err(Into::into)
}

pub(crate) fn check_password(value: &str) -> Result<(), ValidationError> {
    validate_password(value).map_err(Into::into)
}

pub(crate) fn check_slug(value: &str) -> Result<(), ValidationError> {
    validate_slug(value).map_err(Into::into)
}

pub(crate) fn check_url(value: &str) -> Result<(), ValidationError> {
    validate_url(value).map_err(Into::into)
}

pub(crate) fn check_required(value: &str) -> Result<(), ValidationError> {
    validate_required(value).map_err(Into::into)
}
