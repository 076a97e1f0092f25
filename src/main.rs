use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;

use shortener_client::cli::{self, Cli, CliError, Context};
use shortener_client::ui::{Locale, Operation, Popup};
use shortener_client::ui::render::field_errors;
use shortener_client::{AppError, config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env(cli.global.api_url, cli.global.base_url, cli.global.locale)
        .context("Failed to load configuration")?;

    logging::init(&config)?;
    config.print_summary();

    let locale = config.locale;
    let ctx = match Context::new(config) {
        Ok(ctx) => ctx,
        // Session and config errors carry their own popup titles.
        Err(source) => fail(
            &CliError::Failed {
                operation: Operation::LoadProfile,
                source,
            },
            locale,
        ),
    };

    if let Err(e) = cli::run(cli.command, &ctx).await {
        fail(&e, locale);
    }

    Ok(())
}

/// Prints the popup for `err` and exits with status 1.
fn fail(err: &CliError, locale: Locale) -> ! {
    tracing::debug!(error = ?err, "Command failed");

    match err.popup_source() {
        Some((operation, source)) => {
            if let AppError::Validation(errors) = source {
                for line in field_errors(errors, locale) {
                    eprintln!("  {} {}", "✗".red(), line);
                }
                eprintln!();
            }
            eprintln!("{}", Popup::for_error(operation, source, locale).render());
        }
        None => eprintln!("{} {}", "Error:".red().bold(), err),
    }

    std::process::exit(1)
}
