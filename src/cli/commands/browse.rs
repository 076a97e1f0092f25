//! Public pages: the redirect confirmation and link statistics.

use chrono::Local;
use colored::Colorize;

use crate::application::services::{RedirectService, Resolution, StatsService};
use crate::cli::{CliError, Context, During, prompts};
use crate::error::AppError;
use crate::ui::render::{resolved_card, stats_card};
use crate::ui::{Operation, Popup, Text};
use crate::utils::slug::extract_slug;
use crate::utils::validators::{FieldError, validate_required};

/// Shows where a short link points, asks for confirmation and follows it.
///
/// The destination URL is written to stdout so it can be piped to a browser.
pub async fn open(ctx: &Context, link: &str, ask_password: bool, yes: bool) -> Result<(), CliError> {
    let locale = ctx.locale();
    let redirect = RedirectService::new(ctx.gateway.clone());
    let op = Operation::Resolve;

    let password = if ask_password {
        Some(prompts::password(Text::LinkPasswordPrompt, locale, validate_required)?)
    } else {
        None
    };

    let resolved = match redirect.resolve(link, password).await.during(op)? {
        Resolution::Ready(resolved) => resolved,
        Resolution::PasswordRequired { slug } => {
            eprintln!(
                "{}",
                Popup::error(
                    Text::PasswordRequiredTitle.get(locale),
                    Some(Text::PasswordRequiredDescription.get(locale).to_string()),
                )
                .render()
            );
            let password = prompts::password(Text::LinkPasswordPrompt, locale, validate_required)?;
            match redirect.resolve(&slug, Some(password)).await.during(op)? {
                Resolution::Ready(resolved) => resolved,
                // Only reachable without a password.
                Resolution::PasswordRequired { .. } => {
                    return Err(CliError::Failed {
                        operation: op,
                        source: AppError::field("password", FieldError::Required),
                    });
                }
            }
        }
    };

    eprintln!(
        "{}",
        resolved_card(&resolved, ctx.base_url(), &Local, locale)
    );
    eprintln!();

    if !prompts::confirm(Text::ProceedPrompt, locale, yes)? {
        eprintln!("{}", Text::Cancelled.get(locale).yellow());
        return Ok(());
    }

    let destination = redirect.follow(&resolved).await;
    println!("{destination}");
    Ok(())
}

/// Public statistics page.
pub async fn stats(ctx: &Context, link: Option<String>) -> Result<(), CliError> {
    let locale = ctx.locale();
    let link = match link {
        Some(link) => link,
        None => prompts::input(Text::ShortLinkLabel, locale, |value| {
            extract_slug(value).map(|_| ()).ok_or(FieldError::Required)
        })?,
    };

    let stats = StatsService::new(ctx.gateway.clone())
        .stats(&link)
        .await
        .during(Operation::Stats)?;

    println!("{}", stats_card(&stats, ctx.base_url(), &Local, locale));
    Ok(())
}
