//! `auth` commands: register, login, logout, whoami.

use colored::Colorize;

use super::notify;
use crate::application::forms::{LoginForm, RegisterForm};
use crate::application::services::AuthService;
use crate::cli::args::AuthAction;
use crate::cli::{CliError, Context, During, prompts};
use crate::domain::entities::UserProfile;
use crate::ui::{Operation, Popup, Text};
use crate::utils::validators::{validate_email, validate_password, validate_required, validate_username};

pub async fn handle(ctx: &Context, action: AuthAction) -> Result<(), CliError> {
    match action {
        AuthAction::Register { username, email } => register(ctx, username, email).await,
        AuthAction::Login { email, remember_me } => login(ctx, email, remember_me).await,
        AuthAction::Logout => logout(ctx).await,
        AuthAction::Whoami => whoami(ctx),
    }
}

async fn register(
    ctx: &Context,
    username: Option<String>,
    email: Option<String>,
) -> Result<(), CliError> {
    let locale = ctx.locale();
    let username = match username {
        Some(username) => username,
        None => prompts::input(Text::UsernamePrompt, locale, validate_username)?,
    };
    let email = match email {
        Some(email) => email,
        None => prompts::input(Text::EmailPrompt, locale, validate_email)?,
    };
    let password = prompts::new_password(Text::PasswordPrompt, locale, validate_password)?;

    let form = RegisterForm {
        username,
        email,
        confirm_password: password.clone(),
        password,
    };
    let profile = AuthService::new(ctx.gateway.clone())
        .register(form)
        .await
        .during(Operation::Register)?;

    signed_in(ctx, &profile, Text::RegisteredTitle)
}

async fn login(ctx: &Context, email: Option<String>, remember_me: bool) -> Result<(), CliError> {
    let locale = ctx.locale();
    let email = match email {
        Some(email) => email,
        None => prompts::input(Text::EmailPrompt, locale, validate_email)?,
    };
    let password = prompts::password(Text::PasswordPrompt, locale, validate_required)?;

    let form = LoginForm {
        email,
        password,
        remember_me,
    };
    let profile = AuthService::new(ctx.gateway.clone())
        .login(form)
        .await
        .during(Operation::Login)?;

    signed_in(ctx, &profile, Text::LoggedInTitle)
}

fn signed_in(ctx: &Context, profile: &UserProfile, title: Text) -> Result<(), CliError> {
    let locale = ctx.locale();
    ctx.persist_session(&profile.username)
        .during(Operation::Login)?;
    notify(Popup::success(
        title.get(locale),
        Some(format!("{} {}", Text::SignedInAs.get(locale), profile.username)),
    ));
    Ok(())
}

async fn logout(ctx: &Context) -> Result<(), CliError> {
    let result = AuthService::new(ctx.gateway.clone()).logout().await;
    // The local session goes away even if the server call failed.
    ctx.forget_session();
    result.during(Operation::Logout)?;

    notify(Popup::success(Text::LoggedOutTitle.get(ctx.locale()), None));
    Ok(())
}

fn whoami(ctx: &Context) -> Result<(), CliError> {
    let locale = ctx.locale();
    let session = ctx.saved_session().during(Operation::LoadProfile)?;

    match session.and_then(|s| s.username) {
        Some(username) => println!("{} {}", Text::SignedInAs.get(locale), username.cyan().bold()),
        None => println!("{}", Text::NotSignedIn.get(locale).yellow()),
    }
    Ok(())
}
