//! Subcommand implementations.

pub mod clear;
pub mod create;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;

use std::io::{self, Write};

use anyhow::Result;

use crate::cli::Commands;
use crate::config::Config;

pub async fn handle(cmd: Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::List(args) => list::run(args, config).await,
        Commands::Show(args) => show::run(args, config).await,
        Commands::Create(args) => create::run(args, config).await,
        Commands::Edit(args) => edit::run(args, config).await,
        Commands::Remove(args) => remove::run(args, config).await,
        Commands::Clear(args) => clear::run(args, config).await,
    }
}

/// Ask a yes/no question on stderr; anything but `y` is no.
pub(crate) fn confirm(question: &str) -> Result<bool> {
    eprint!("{} [y/N] ", question);
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
