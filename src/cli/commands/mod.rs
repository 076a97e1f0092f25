//! Command handlers.

pub mod auth;
pub mod browse;
pub mod links;
pub mod profile;

use colored::Colorize;

use crate::cli::Context;
use crate::ui::Popup;

/// Prints a success popup to stderr.
pub(crate) fn notify(popup: Popup) {
    eprintln!("{}", popup.render());
}

/// Prints the effective configuration.
pub fn show_config(ctx: &Context) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    for (key, value) in ctx.config.summary() {
        println!("  {:<14} {}", key.bright_white(), value.cyan());
    }
    println!();
}
