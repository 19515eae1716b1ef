//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use mortydex_core::{Character, Cursor, Notice, Notifier};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one character as a list row.
pub fn character_row(character: &Character) {
    let origin = if character.is_remote_sourced() {
        "remote".dimmed()
    } else {
        "local".cyan()
    };
    println!(
        "{:>8}  {}  [{}, {}, {}]  {}",
        character.id,
        character.name.bold(),
        character.status,
        character.species,
        character.gender,
        origin
    );
}

/// Print every field of a character.
pub fn character_detail(character: &Character) {
    field("ID", &character.id.to_string());
    field("Name", &character.name);
    field("Status", character.status.as_str());
    field("Species", &character.species);
    field("Type", &character.kind);
    field("Gender", character.gender.as_str());
    field("Origin", &character.origin.name);
    field("Location", &character.location.name);
    field("Image", &character.image);
    field("Episodes", &character.episode.len().to_string());
    if !character.created.is_empty() {
        field("Created", &character.created);
    }
}

/// Print the pagination summary.
pub fn cursor(cursor: &Cursor, shown: usize) {
    eprintln!(
        "{}",
        format!(
            "Showing {} of {} characters (page {} of {})",
            shown, cursor.total_characters, cursor.page, cursor.total_pages
        )
        .dimmed()
    );
}

/// Prints aggregator notices on the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliNotifier;

impl Notifier for CliNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            error(notice.message());
        } else {
            success(notice.message());
        }
    }
}
