//! History commands: list, favorites, favorite, unfavorite, delete, clear.

use clap::Subcommand;
use uuid::Uuid;

use crate::model::HistoryEntry;
use crate::storage::Storage;

use super::format::format_entry;

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List all recorded scans, newest first.
    List {
        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List favorite scans only, newest first.
    Favorites {
        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Mark an entry as a favorite.
    Favorite {
        /// Entry ID: full UUID or unambiguous prefix (e.g. `a3b`).
        id: String,
    },

    /// Remove an entry's favorite mark.
    Unfavorite {
        /// Entry ID: full UUID or unambiguous prefix.
        id: String,
    },

    /// Delete a single entry.
    Delete {
        /// Entry ID: full UUID or unambiguous prefix.
        id: String,
    },

    /// Delete all history entries.
    Clear,
}

pub(super) fn run(storage: &Storage, command: &HistoryCommand) -> Result<(), String> {
    match command {
        HistoryCommand::List { json } => {
            let entries = storage
                .list()
                .map_err(|e| format!("failed to list history: {e}"))?;
            print_entries(&entries, *json, "No scans recorded")
        }
        HistoryCommand::Favorites { json } => {
            let entries = storage
                .favorites()
                .map_err(|e| format!("failed to list favorites: {e}"))?;
            print_entries(&entries, *json, "No favorites")
        }
        HistoryCommand::Favorite { id } => set_favorite(storage, id, true),
        HistoryCommand::Unfavorite { id } => set_favorite(storage, id, false),
        HistoryCommand::Delete { id } => {
            let entry = resolve_entry(storage, id)?;
            storage
                .delete(entry.id)
                .map_err(|e| format!("failed to delete entry: {e}"))?;
            eprintln!("Deleted {}", &entry.id.to_string()[..8]);
            Ok(())
        }
        HistoryCommand::Clear => {
            let removed = storage
                .clear()
                .map_err(|e| format!("failed to clear history: {e}"))?;
            eprintln!("Cleared {removed} entries");
            Ok(())
        }
    }
}

fn print_entries(entries: &[HistoryEntry], json: bool, empty_message: &str) -> Result<(), String> {
    if json {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| format!("failed to serialize history: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    if entries.is_empty() {
        println!("{empty_message}");
        return Ok(());
    }

    for entry in entries {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

fn set_favorite(storage: &Storage, reference: &str, favorite: bool) -> Result<(), String> {
    let entry = resolve_entry(storage, reference)?;
    storage
        .set_favorite(entry.id, favorite)
        .map_err(|e| format!("failed to update entry: {e}"))?;

    let short_id = &entry.id.to_string()[..8];
    if favorite {
        eprintln!("Favorited {short_id}");
    } else {
        eprintln!("Unfavorited {short_id}");
    }
    Ok(())
}

/// Resolve an entry reference (full UUID or unambiguous prefix) to an entry.
fn resolve_entry(storage: &Storage, reference: &str) -> Result<HistoryEntry, String> {
    // Try full UUID first.
    if let Ok(id) = reference.parse::<Uuid>() {
        return storage
            .load(id)
            .map_err(|e| format!("entry not found: {e}"));
    }

    // Try as a prefix match against all entries.
    let entries = storage
        .list()
        .map_err(|e| format!("failed to list history: {e}"))?;

    let matches: Vec<&HistoryEntry> = entries
        .iter()
        .filter(|entry| entry.id.to_string().starts_with(reference))
        .collect();

    match matches.len() {
        0 => Err(format!("no history entry matching '{reference}'")),
        1 => Ok(matches[0].clone()),
        n => {
            let ids: Vec<String> = matches
                .iter()
                .map(|entry| entry.id.to_string()[..8].to_string())
                .collect();
            Err(format!(
                "'{reference}' is ambiguous — matches {n} entries: {}",
                ids.join(", ")
            ))
        }
    }
}
