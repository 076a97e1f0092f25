//! Interactive form fields.
//!
//! Each prompt runs the same validator the services use, so invalid input
//! is rejected while typing instead of after the request.

use chrono::{DateTime, Duration, Local, Utc};
use dialoguer::{Confirm, Input, Password};

use crate::error::AppError;
use crate::ui::messages::{Locale, Text, field_error_text};
use crate::utils::datetime::{local_input_to_utc, utc_to_local_input};
use crate::utils::validators::{FieldError, validate_expiration};

/// Asks for a required value checked by `check`.
pub fn input(
    prompt: Text,
    locale: Locale,
    check: impl Fn(&str) -> Result<(), FieldError>,
) -> dialoguer::Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt.get(locale))
        .validate_with(|value: &String| check(value.trim()).map_err(|e| field_error_text(e, locale)))
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Asks for an optional value; blank input means `None`.
pub fn optional_input(
    prompt: Text,
    locale: Locale,
    check: impl Fn(&str) -> Result<(), FieldError>,
) -> dialoguer::Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt.get(locale))
        .allow_empty(true)
        .validate_with(|value: &String| {
            let value = value.trim();
            if value.is_empty() {
                return Ok(());
            }
            check(value).map_err(|e| field_error_text(e, locale))
        })
        .interact_text()?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

/// Asks for a hidden value checked by `check`.
pub fn password(
    prompt: Text,
    locale: Locale,
    check: impl Fn(&str) -> Result<(), FieldError>,
) -> dialoguer::Result<String> {
    Password::new()
        .with_prompt(prompt.get(locale))
        .validate_with(|value: &String| check(value).map_err(|e| field_error_text(e, locale)))
        .interact()
}

/// Asks for a hidden value with a confirmation prompt.
pub fn new_password(
    prompt: Text,
    locale: Locale,
    check: impl Fn(&str) -> Result<(), FieldError>,
) -> dialoguer::Result<String> {
    Password::new()
        .with_prompt(prompt.get(locale))
        .with_confirmation(
            Text::ConfirmPasswordPrompt.get(locale),
            Text::PasswordMismatch.get(locale),
        )
        .validate_with(|value: &String| check(value).map_err(|e| field_error_text(e, locale)))
        .interact()
}

/// Asks a yes/no question; `assume_yes` skips the prompt.
pub fn confirm(prompt: Text, locale: Locale, assume_yes: bool) -> dialoguer::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt.get(locale))
        .default(false)
        .interact()
}

/// Parses an expiration typed in local time and checks it is in the future.
pub fn parse_expiration(input: &str) -> Result<DateTime<Utc>, FieldError> {
    let expires_at =
        local_input_to_utc(input.trim(), &Local).map_err(|_| FieldError::ExpirationFormat)?;
    validate_expiration(expires_at, Utc::now())?;
    Ok(expires_at)
}

/// Asks for an expiration in local time and returns the raw input.
///
/// Callers parse it again with [`expiration_arg`], since `now` has moved on
/// by the time the prompt returns.
pub fn expiration(locale: Locale) -> dialoguer::Result<String> {
    let tomorrow = utc_to_local_input(Utc::now() + Duration::days(1), &Local);
    let value: String = Input::new()
        .with_prompt(Text::ExpirationPrompt.get(locale))
        .with_initial_text(tomorrow)
        .validate_with(|value: &String| {
            parse_expiration(value)
                .map(|_| ())
                .map_err(|e| field_error_text(e, locale))
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Field-tagged wrapper around [`parse_expiration`] for command arguments.
pub fn expiration_arg(input: &str) -> Result<DateTime<Utc>, AppError> {
    parse_expiration(input).map_err(|e| AppError::field("expires_at", e))
}
