//! `plister` CLI — inspect plist files and edit single keys from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print the whole document as JSON
//! plister show Info.plist
//!
//! # Print one value (colon paths reach nested entries)
//! plister get Info.plist CFBundleShortVersionString
//! plister get Sample.plist dictionary_key:inner_dictionary_string
//!
//! # Change an existing key through PlistBuddy
//! plister set Info.plist CFBundleShortVersionString 2.0.0
//! plister set Sample.plist boolean_key false --type bool --save
//!
//! # Use a different editing tool
//! PLISTER_TOOL=/opt/bin/plistbuddy plister save Info.plist
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use plister::{PlistEditor, PlistValue};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "plister",
    version,
    about = "Read property-list files and edit single keys in place"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Editing tool used by `set` and `save`
    #[arg(long, global = true, env = "PLISTER_TOOL", default_value = plister::DEFAULT_TOOL)]
    tool: PathBuf,

    /// Log tool invocations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the whole document as pretty JSON
    Show {
        /// Plist file (XML or binary)
        file: PathBuf,
    },
    /// Print the value at a key path as JSON
    Get {
        /// Plist file (XML or binary)
        file: PathBuf,
        /// Key, or colon-separated path such as `outer:inner` or `list:0`
        key: String,
    },
    /// Set an existing key to a new value
    Set {
        /// Plist file to edit in place
        file: PathBuf,
        /// Existing key, or colon-separated path
        key: String,
        /// New value, interpreted according to --type
        value: String,
        /// How to interpret VALUE
        #[arg(long = "type", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
        /// Run `Save` after `Set`
        #[arg(long)]
        save: bool,
    },
    /// Ask the editing tool to save the file
    Save {
        /// Plist file to save
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ValueKind {
    String,
    Bool,
    Number,
    Date,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let editor = PlistEditor::new().with_tool(&cli.tool);

    match cli.command {
        Commands::Show { file } => {
            let document = load(&file)?;
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Commands::Get { file, key } => {
            let document = load(&file)?;
            let value = plister::lookup(&document, &key).with_context(|| {
                format!("Key not found: '{}' in {}", key, file.display())
            })?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Commands::Set {
            file,
            key,
            value,
            kind,
            save,
        } => {
            let value = parse_value(&value, kind)?;
            let result = if save {
                editor.set_value_and_save(value, &key, &file)
            } else {
                editor.set_value(value, &key, &file)
            };
            result.with_context(|| format!("Failed to set '{}' in {}", key, file.display()))?;
        }
        Commands::Save { file } => {
            editor
                .save(&file)
                .with_context(|| format!("Failed to save {}", file.display()))?;
        }
    }

    Ok(())
}

fn load(file: &Path) -> Result<plister::PlistDocument> {
    plister::load(file).with_context(|| format!("Failed to load {}", file.display()))
}

/// Turn the raw command-line text into a typed value.
///
/// - `string` passes the text through untouched
/// - `bool` accepts `true`/`false`
/// - `number` accepts anything `f64` parses
/// - `date` accepts RFC 3339 (`2019-07-07T12:30:00Z`)
fn parse_value(raw: &str, kind: ValueKind) -> Result<PlistValue> {
    let value = match kind {
        ValueKind::String => PlistValue::from(raw),
        ValueKind::Bool => PlistValue::from(
            raw.parse::<bool>()
                .with_context(|| format!("Invalid boolean: '{}' (expected true or false)", raw))?,
        ),
        ValueKind::Number => PlistValue::from(
            raw.parse::<f64>()
                .with_context(|| format!("Invalid number: '{}'", raw))?,
        ),
        ValueKind::Date => PlistValue::from(
            DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid RFC 3339 date: '{}'", raw))?
                .with_timezone(&Utc),
        ),
    };
    Ok(value)
}
