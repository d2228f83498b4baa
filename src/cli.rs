//! CLI interface for Glyph.
//!
//! Designed for scripts and humans alike: each subcommand is
//! non-interactive, arguments in, structured output out.
//!
//! Commands split into two groups:
//!
//! - `glyph encode|classify` — pure codec operations, no storage touched.
//! - `glyph scan` and `glyph history ...` — operate on the local scan
//!   history database.
//!
//! History entry IDs are accepted as full UUIDs or unambiguous prefixes.

mod encode;
mod format;
mod history;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use jiff::Timestamp;
use uuid::Uuid;

use crate::codec;
use crate::config::Config;
use crate::model::{HistoryEntry, ScanResult};
use crate::storage::Storage;

use encode::EncodeTarget;
use history::HistoryCommand;

/// Glyph — encode, classify, and keep track of QR payloads.
#[derive(Debug, Parser)]
#[command(name = "glyph", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: from a scan to a favorite
  1. glyph scan "https://example.com/menu"
     → prints an entry ID (e.g. a3b0fc12) and the classified kind
  2. glyph history list
  3. glyph history favorite a3b
  4. glyph history favorites

Encode:
  glyph encode url https://example.com
  glyph encode wifi HomeNet --password secret123
  glyph encode contact "Jane Doe" --phone 555-1212 --out jane.txt
  glyph encode event "Standup" --start 2024-06-15T09:30:00Z --end 2024-06-15T09:45:00Z"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a typed payload into its canonical QR/barcode string.
    ///
    /// The string is written to `--out` (if given) or stdout.
    /// Validation failures are reported without writing anything.
    Encode {
        #[command(subcommand)]
        target: EncodeTarget,

        /// Write the encoded payload to this file instead of stdout.
        #[arg(long, global = true)]
        out: Option<PathBuf>,
    },

    /// Classify a scanned string. Pure read, nothing recorded.
    Classify {
        /// The raw decoded string, as reported by the scanner.
        raw: String,

        /// Physical symbology reported by the scanner (passed through).
        #[arg(long, default_value = "qr")]
        symbology: String,

        /// Print the full scan result as JSON instead of just the kind.
        #[arg(long)]
        json: bool,
    },

    /// Classify a scanned string and record it to history.
    /// Prints the new entry ID.
    Scan {
        /// The raw decoded string, as reported by the scanner.
        raw: String,

        /// Physical symbology reported by the scanner (stored as-is).
        #[arg(long, default_value = "qr")]
        symbology: String,
    },

    /// Browse and curate recorded scans.
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { target, out } => cmd_encode(config, &target, out.as_deref()),
        Command::Classify {
            raw,
            symbology,
            json,
        } => cmd_classify(&raw, symbology, json),
        Command::Scan { raw, symbology } => cmd_scan(storage, &raw, symbology),
        Command::History { command } => history::run(storage, &command),
    }
}

fn cmd_encode(config: &Config, target: &EncodeTarget, out: Option<&Path>) -> Result<(), String> {
    let payload = target.to_payload(config);
    let encoded = codec::encode(&payload).map_err(|e| e.to_string())?;

    match out {
        Some(path) => {
            fs::write(path, &encoded)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Encoded {} → {}", target.describe(), path.display());
        }
        None => println!("{encoded}"),
    }
    Ok(())
}

fn cmd_classify(raw: &str, symbology: String, json: bool) -> Result<(), String> {
    let result = ScanResult {
        raw_value: raw.to_string(),
        symbology,
        classified_kind: codec::classify(raw),
    };

    if json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("failed to serialize scan result: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", result.classified_kind.label());
    }
    Ok(())
}

fn cmd_scan(storage: &Storage, raw: &str, symbology: String) -> Result<(), String> {
    let entry = HistoryEntry {
        id: Uuid::new_v4(),
        value: raw.to_string(),
        kind: codec::classify(raw),
        symbology,
        scanned_at: Timestamp::now(),
        favorite: false,
    };

    storage
        .record(&entry)
        .map_err(|e| format!("failed to record scan: {e}"))?;

    let short_id = &entry.id.to_string()[..8];
    println!("{short_id}  [{}]", entry.kind.label());
    Ok(())
}
