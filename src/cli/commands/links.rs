//! `shorten` and `links` commands.

use chrono::{Local, Utc};
use colored::Colorize;

use super::notify;
use crate::application::forms::ShortenForm;
use crate::application::services::LinkService;
use crate::cli::args::{LinksAction, ShortenArgs};
use crate::cli::{CliError, Context, During, prompts};
use crate::domain::entities::{Link, LinkId};
use crate::infrastructure::http::HttpGateway;
use crate::ui::render::{created_line, links_table};
use crate::ui::{Operation, Popup, Text};
use crate::utils::slug::short_link_url;
use crate::utils::validators::{validate_required, validate_slug, validate_url};

fn service(ctx: &Context) -> LinkService<HttpGateway> {
    LinkService::new(ctx.gateway.clone())
}

fn print_links(ctx: &Context, links: &[Link]) {
    println!(
        "{}",
        links_table(links, ctx.base_url(), &Local, ctx.locale(), Utc::now())
    );
}

fn cancelled(ctx: &Context) {
    eprintln!("{}", Text::Cancelled.get(ctx.locale()).yellow());
}

/// Home page form: shortens a URL, prompting for whatever is missing.
pub async fn shorten(ctx: &Context, args: ShortenArgs) -> Result<(), CliError> {
    let locale = ctx.locale();
    let interactive = args.url.is_none();

    let url = match args.url {
        Some(url) => url,
        None => prompts::input(Text::OriginalUrlPrompt, locale, validate_url)?,
    };
    let slug = match args.slug {
        Some(slug) => Some(slug),
        None if interactive => {
            prompts::optional_input(Text::CustomSlugPrompt, locale, validate_slug)?
        }
        None => None,
    };
    let password = if args.password {
        Some(prompts::password(
            Text::LinkPasswordPrompt,
            locale,
            validate_required,
        )?)
    } else {
        None
    };
    let expires_at = args
        .expires
        .as_deref()
        .map(prompts::expiration_arg)
        .transpose()
        .during(Operation::Shorten)?;

    let form = ShortenForm::new(url, slug, password, expires_at);
    let created = service(ctx).shorten(form).await.during(Operation::Shorten)?;

    notify(Popup::success(Text::LinkCreatedTitle.get(locale), None));
    eprintln!("{}", created_line(&created, ctx.base_url()));
    // Full link on stdout, ready to copy or pipe.
    println!("{}", short_link_url(ctx.base_url(), &created.slug));
    Ok(())
}

pub async fn handle(ctx: &Context, action: LinksAction) -> Result<(), CliError> {
    let locale = ctx.locale();
    let links = service(ctx);
    let op = Operation::ManageLinks;

    let updated = match action {
        LinksAction::List => links.list().await.during(op)?,
        LinksAction::Rename { id, slug } => {
            let slug = match slug {
                Some(slug) => slug,
                None => prompts::input(Text::NewSlugPrompt, locale, validate_slug)?,
            };
            let updated = links.rename(id, &slug).await.during(op)?;
            notify(Popup::success(Text::ChangesSavedTitle.get(locale), None));
            updated
        }
        LinksAction::Password { id, remove, yes } => {
            let password = if remove {
                if !prompts::confirm(Text::ConfirmRemovePasswordPrompt, locale, yes)? {
                    cancelled(ctx);
                    return Ok(());
                }
                None
            } else {
                Some(prompts::new_password(
                    Text::LinkPasswordPrompt,
                    locale,
                    validate_required,
                )?)
            };
            let updated = links.set_password(id, password).await.during(op)?;
            notify(Popup::success(Text::ChangesSavedTitle.get(locale), None));
            updated
        }
        LinksAction::Expire { id, at, clear, yes } => {
            let expires_at = if clear {
                if !prompts::confirm(Text::ConfirmClearExpirationPrompt, locale, yes)? {
                    cancelled(ctx);
                    return Ok(());
                }
                None
            } else {
                let raw = match at {
                    Some(at) => at,
                    None => prompts::expiration(locale)?,
                };
                Some(prompts::expiration_arg(&raw).during(op)?)
            };
            let updated = links.set_expiration(id, expires_at).await.during(op)?;
            notify(Popup::success(Text::ChangesSavedTitle.get(locale), None));
            updated
        }
        LinksAction::Delete { id, yes } => match delete(ctx, &links, id, yes).await? {
            Some(updated) => updated,
            None => return Ok(()),
        },
    };

    print_links(ctx, &updated);
    Ok(())
}

async fn delete(
    ctx: &Context,
    links: &LinkService<HttpGateway>,
    id: LinkId,
    yes: bool,
) -> Result<Option<Vec<Link>>, CliError> {
    let locale = ctx.locale();
    if !prompts::confirm(Text::ConfirmDeletePrompt, locale, yes)? {
        cancelled(ctx);
        return Ok(None);
    }
    let updated = links.delete(id).await.during(Operation::ManageLinks)?;
    notify(Popup::success(Text::LinkDeletedTitle.get(locale), None));
    Ok(Some(updated))
}
