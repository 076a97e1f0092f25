//! Text rendering of pages: link table, profile, stats, field errors.

use chrono::{DateTime, TimeZone, Utc};
use colored::Colorize;
use std::fmt::Display;
use validator::ValidationErrors;

use crate::domain::entities::{CreatedLink, Link, LinkStats, ResolvedLink, UserProfile};
use crate::ui::messages::{Locale, Text, field_error_text};
use crate::utils::datetime::format_display;
use crate::utils::slug::short_link_display;
use crate::utils::validators::FieldError;

const ORIGINAL_URL_WIDTH: usize = 40;

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let head: String = value.chars().take(max.saturating_sub(1)).collect();
    format!("{head}…")
}

/// Renders the "my links" table.
///
/// ```text
///   ID   Short link             Clicks  Password  Expires           Original link
///   ───────────────────────────────────────────────────────────────────────────────
///   12   encurtar.link/promo    235     yes       31/12/2025 23:59  https://example.com/...
/// ```
pub fn links_table<Tz>(
    links: &[Link],
    base_url: &str,
    tz: &Tz,
    locale: Locale,
    now: DateTime<Utc>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = vec![
        format!("🔗 {}", Text::LinksHeading.get(locale))
            .bright_blue()
            .bold()
            .to_string(),
        String::new(),
    ];

    if links.is_empty() {
        out.push(format!("  {}", Text::NoLinks.get(locale).yellow()));
        return out.join("\n");
    }

    out.push(format!(
        "  {:<5} {:<28} {:<7} {:<8} {:<17} {}",
        "ID".bright_white().bold(),
        Text::ShortLinkLabel.get(locale).bright_white().bold(),
        Text::ClicksLabel.get(locale).bright_white().bold(),
        Text::ProtectedLabel.get(locale).bright_white().bold(),
        Text::ExpiresAtLabel.get(locale).bright_white().bold(),
        Text::OriginalLinkLabel.get(locale).bright_white().bold(),
    ));
    out.push(format!("  {}", "─".repeat(110).bright_black()));

    for link in links {
        let protected = if link.password_protected {
            Text::Yes.get(locale).green()
        } else {
            Text::No.get(locale).bright_black()
        };
        let expires = match link.expires_at {
            Some(_) if link.is_expired_at(now) => Text::Expired.get(locale).red(),
            Some(at) => format_display(at, tz).normal(),
            None => Text::Never.get(locale).bright_black(),
        };

        out.push(format!(
            "  {:<5} {:<28} {:<7} {:<8} {:<17} {}",
            link.id.to_string().bright_black(),
            short_link_display(base_url, &link.slug).cyan(),
            link.clicks.to_string().bright_green(),
            protected,
            expires,
            truncate(&link.original_url, ORIGINAL_URL_WIDTH),
        ));
    }

    out.push(String::new());
    out.push(format!(
        "  {}: {}",
        Text::Total.get(locale),
        links.len().to_string().bright_white().bold()
    ));
    out.join("\n")
}

pub fn profile_card(profile: &UserProfile, locale: Locale) -> String {
    [
        format!("👤 {}", Text::ProfileHeading.get(locale)).bright_blue().bold().to_string(),
        String::new(),
        format!("  {:<16} {}", Text::UsernameLabel.get(locale), profile.username.cyan()),
        format!("  {:<16} {}", Text::EmailLabel.get(locale), profile.email.cyan()),
    ]
    .join("\n")
}

pub fn stats_card<Tz>(stats: &LinkStats, base_url: &str, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    [
        format!("📊 {}", Text::StatsHeading.get(locale)).bright_blue().bold().to_string(),
        String::new(),
        format!("  {:<16} {}", Text::OriginalLinkLabel.get(locale), stats.original_url),
        format!(
            "  {:<16} {}",
            Text::ShortLinkLabel.get(locale),
            short_link_display(base_url, &stats.slug).cyan()
        ),
        format!(
            "  {:<16} {}",
            Text::ClicksLabel.get(locale),
            stats.clicks.to_string().bright_green().bold()
        ),
        format!(
            "  {:<16} {}",
            Text::CreatedAtLabel.get(locale),
            format_display(stats.created_at, tz)
        ),
    ]
    .join("\n")
}

/// Confirmation screen shown before following a short link.
pub fn resolved_card<Tz>(link: &ResolvedLink, base_url: &str, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = vec![
        Text::RedirectHeading.get(locale).bright_white().bold().to_string(),
        format!("  {}", link.original_url.bright_yellow()),
        String::new(),
        format!(
            "  {:<16} {}",
            Text::ShortLinkLabel.get(locale),
            short_link_display(base_url, &link.slug).cyan()
        ),
    ];
    if let Some(created_at) = link.created_at {
        out.push(format!(
            "  {:<16} {}",
            Text::CreatedAtLabel.get(locale),
            format_display(created_at, tz)
        ));
    }
    out.join("\n")
}

/// One line per created link, as printed after `shorten`.
pub fn created_line(link: &CreatedLink, base_url: &str) -> String {
    format!(
        "{}  →  {}",
        short_link_display(base_url, &link.slug).bright_yellow().bold(),
        link.original_url
    )
}

/// Localized `field: message` lines, sorted by field name.
pub fn field_errors(errors: &ValidationErrors, locale: Locale) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, list)| {
            list.iter().map(move |error| {
                let message = FieldError::from_code(&error.code)
                    .map(|e| field_error_text(e, locale).to_string())
                    .or_else(|| error.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| error.code.to_string());
                format!("  {} {}: {}", "✗".red(), field, message)
            })
        })
        .collect()
}
