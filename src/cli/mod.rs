//! `shortener` command-line interface.
//!
//! Each subcommand maps to one page of the web client and talks to the API
//! through the application services. Failures carry the [`Operation`] they
//! happened in so the binary can pick the right popup.

pub mod args;
pub mod commands;
pub mod context;
pub mod prompts;

pub use args::Cli;
pub use context::Context;

use crate::error::AppError;
use crate::ui::Operation;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{source}")]
    Failed {
        operation: Operation,
        #[source]
        source: AppError,
    },

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl CliError {
    /// The operation and error to build a popup from, if any.
    pub fn popup_source(&self) -> Option<(Operation, &AppError)> {
        match self {
            Self::Failed { operation, source } => Some((*operation, source)),
            Self::Prompt(_) => None,
        }
    }
}

/// Tags an [`AppError`] with the operation it interrupted.
pub trait During<T> {
    fn during(self, operation: Operation) -> Result<T, CliError>;
}

impl<T> During<T> for Result<T, AppError> {
    fn during(self, operation: Operation) -> Result<T, CliError> {
        self.map_err(|source| CliError::Failed { operation, source })
    }
}

/// Runs one parsed command.
pub async fn run(command: args::Commands, ctx: &Context) -> Result<(), CliError> {
    use args::Commands;

    let result = match command {
        Commands::Shorten(args) => commands::links::shorten(ctx, args).await,
        Commands::Open {
            link,
            password,
            yes,
        } => commands::browse::open(ctx, &link, password, yes).await,
        Commands::Stats { link } => commands::browse::stats(ctx, link).await,
        Commands::Auth { action } => commands::auth::handle(ctx, action).await,
        Commands::Profile { action } => commands::profile::handle(ctx, action).await,
        Commands::Links { action } => commands::links::handle(ctx, action).await,
        Commands::Config => {
            commands::show_config(ctx);
            Ok(())
        }
    };

    // A rejected session cookie is useless from now on.
    if let Err(CliError::Failed {
        source: AppError::Unauthenticated,
        ..
    }) = &result
    {
        ctx.forget_session();
    }

    result
}
