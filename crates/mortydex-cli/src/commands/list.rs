//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use mortydex_core::CharacterFilter;

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only characters whose name contains this text
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by status (Alive, Dead, unknown); remote catalog only
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by species; remote catalog only
    #[arg(long)]
    pub species: Option<String>,

    /// Number of remote pages to load
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    /// Print characters as JSON lines
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn filter(&self) -> Option<CharacterFilter> {
        if self.name.is_none() && self.status.is_none() && self.species.is_none() {
            return None;
        }
        Some(CharacterFilter {
            name: self.name.clone(),
            status: self.status.clone(),
            species: self.species.clone(),
            ..CharacterFilter::default()
        })
    }
}

pub async fn run(args: ListArgs, config: &Config) -> Result<()> {
    let list = config.list();

    list.search(args.filter())
        .await
        .context("Failed to fetch characters")?;

    // Each extra page stands in for scrolling to the end of the list.
    for _ in 1..args.pages {
        if list.is_busy() {
            break;
        }
        let loaded = list
            .load_more()
            .await
            .context("Failed to fetch more characters")?;
        if !loaded {
            break;
        }
    }

    let visible = list.visible();
    if visible.is_empty() {
        eprintln!("{}", "No characters found.".dimmed());
        return Ok(());
    }

    for character in &visible {
        if args.json {
            output::json(character)?;
        } else {
            output::character_row(character);
        }
    }

    output::cursor(&list.cursor(), visible.len());

    Ok(())
}
