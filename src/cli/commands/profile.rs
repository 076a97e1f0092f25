//! `profile` commands.

use chrono::{Local, Utc};

use super::notify;
use crate::application::forms::{EmailChangeForm, PasswordChangeForm, UsernameForm};
use crate::application::services::ProfileService;
use crate::cli::args::ProfileAction;
use crate::cli::{CliError, Context, During, prompts};
use crate::infrastructure::http::HttpGateway;
use crate::ui::render::{links_table, profile_card};
use crate::ui::{Operation, Popup, Text};
use crate::utils::validators::{validate_email, validate_password, validate_required, validate_username};

pub async fn handle(ctx: &Context, action: ProfileAction) -> Result<(), CliError> {
    let locale = ctx.locale();
    let profiles: ProfileService<HttpGateway> = ProfileService::new(ctx.gateway.clone());

    let updated = match action {
        ProfileAction::Show => {
            let dashboard = profiles.dashboard().await.during(Operation::LoadProfile)?;
            println!("{}", profile_card(&dashboard.profile, locale));
            println!();
            println!(
                "{}",
                links_table(&dashboard.links, ctx.base_url(), &Local, locale, Utc::now())
            );
            return Ok(());
        }
        ProfileAction::Username { username } => {
            let username = match username {
                Some(username) => username,
                None => prompts::input(Text::UsernamePrompt, locale, validate_username)?,
            };
            let form = UsernameForm::new(&username);
            let profile = profiles
                .change_username(form)
                .await
                .during(Operation::UpdateProfile)?;
            // Keep `whoami` in step with the new name.
            ctx.persist_session(&profile.username)
                .during(Operation::UpdateProfile)?;
            profile
        }
        ProfileAction::Email { current, new } => {
            let current_email = match current {
                Some(current) => current,
                None => prompts::input(Text::CurrentEmailPrompt, locale, validate_email)?,
            };
            let (new_email, confirm_email) = match new {
                Some(new) => (new.clone(), new),
                None => {
                    let new = prompts::input(Text::NewEmailPrompt, locale, validate_email)?;
                    let confirm = prompts::input(Text::ConfirmEmailPrompt, locale, validate_required)?;
                    (new, confirm)
                }
            };
            let form = EmailChangeForm {
                current_email,
                new_email,
                confirm_email,
            };
            profiles
                .change_email(form)
                .await
                .during(Operation::UpdateProfile)?
        }
        ProfileAction::Password => {
            let current_password =
                prompts::password(Text::CurrentPasswordPrompt, locale, validate_required)?;
            let new_password =
                prompts::new_password(Text::NewPasswordPrompt, locale, validate_password)?;
            let form = PasswordChangeForm {
                current_password,
                confirm_password: new_password.clone(),
                new_password,
            };
            profiles
                .change_password(form)
                .await
                .during(Operation::UpdateProfile)?
        }
    };

    notify(Popup::success(Text::ChangesSavedTitle.get(locale), None));
    println!("{}", profile_card(&updated, locale));
    Ok(())
}
