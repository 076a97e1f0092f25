//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

use crate::domain::entities::LinkId;
use crate::ui::Locale;

/// Terminal client for the URL shortener.
#[derive(Debug, Parser)]
#[command(name = "shortener")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for values normally taken from the environment.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Shortener API base URL (overrides API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Public short link domain (overrides BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output language: en or pt-BR (overrides LOCALE)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

/// Top-level commands, one per page of the web client.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Shorten a URL
    Shorten(ShortenArgs),

    /// Show where a short link points and follow it
    Open {
        /// Slug or short link, e.g. "promo" or "encurtar.link/promo"
        link: String,

        /// Prompt for the link password up front
        #[arg(short, long)]
        password: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show public statistics of a short link
    Stats {
        /// Slug or short link (prompted if omitted)
        link: Option<String>,
    },

    /// Register, log in and out
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// View and edit your account
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage your short links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Args)]
pub struct ShortenArgs {
    /// URL to shorten (prompted if omitted)
    pub url: Option<String>,

    /// Custom slug, 3 to 16 characters
    #[arg(short, long)]
    pub slug: Option<String>,

    /// Protect the link with a password (prompted)
    #[arg(short, long)]
    pub password: bool,

    /// Expiration in local time, e.g. "2025-12-31 23:59"
    #[arg(short, long)]
    pub expires: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Create an account and log in
    Register {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        email: Option<String>,
    },

    /// Log in with e-mail and password
    Login {
        #[arg(short, long)]
        email: Option<String>,

        /// Ask the API for a long-lived session
        #[arg(short, long)]
        remember_me: bool,
    },

    /// End the session and forget the saved cookie
    Logout,

    /// Show who the saved session belongs to
    Whoami,
}

#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// Show your profile and links
    Show,

    /// Change your username
    Username {
        /// New username (prompted if omitted)
        username: Option<String>,
    },

    /// Change your e-mail
    Email {
        #[arg(long)]
        current: Option<String>,

        #[arg(long)]
        new: Option<String>,
    },

    /// Change your password (prompted)
    Password,
}

#[derive(Debug, Subcommand)]
pub enum LinksAction {
    /// List your links
    List,

    /// Change the slug of a link
    Rename {
        id: LinkId,

        /// New slug (prompted if omitted)
        slug: Option<String>,
    },

    /// Set or remove the password of a link
    Password {
        id: LinkId,

        /// Remove the password instead of setting one
        #[arg(long)]
        remove: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Set or clear the expiration of a link
    Expire {
        id: LinkId,

        /// New expiration in local time (prompted if omitted)
        at: Option<String>,

        /// Clear the expiration instead of setting one
        #[arg(long, conflicts_with = "at")]
        clear: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete a link
    Delete {
        id: LinkId,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_shorten() {
        let cli = Cli::try_parse_from([
            "shortener",
            "--locale",
            "pt-BR",
            "shorten",
            "https://example.com",
            "-s",
            "promo",
            "--expires",
            "2030-01-01 10:00",
        ])
        .unwrap();

        assert_eq!(cli.global.locale, Some(Locale::PtBr));
        let Commands::Shorten(args) = cli.command else {
            panic!("expected shorten");
        };
        assert_eq!(args.url.as_deref(), Some("https://example.com"));
        assert_eq!(args.slug.as_deref(), Some("promo"));
        assert!(!args.password);
    }

    #[test]
    fn test_parse_links_expire_clear() {
        let cli = Cli::try_parse_from(["shortener", "links", "expire", "7", "--clear", "-y"]).unwrap();
        match cli.command {
            Commands::Links {
                action: LinksAction::Expire { id, at, clear, yes },
            } => {
                assert_eq!(id, 7);
                assert_eq!(at, None);
                assert!(clear && yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_expire_at_conflicts_with_clear() {
        assert!(
            Cli::try_parse_from(["shortener", "links", "expire", "7", "2030-01-01", "--clear"])
                .is_err()
        );
    }

    #[test]
    fn test_invalid_locale_rejected() {
        assert!(Cli::try_parse_from(["shortener", "--locale", "fr", "config"]).is_err());
    }
}
