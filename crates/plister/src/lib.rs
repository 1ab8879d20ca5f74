//! # plister
//!
//! Load property-list files into typed maps and edit single keys in place
//! through PlistBuddy.
//!
//! Loading reads the file and decodes it with the `plist` crate (XML or
//! binary). Editing never touches the bytes directly: it runs the external
//! tool's `Set` and `Save` subcommands against the file, so reload to see
//! the change.
//!
//! ## Quick start
//!
//! ```no_run
//! use plister::{load, PlistEditor};
//!
//! let doc = load("Info.plist")?;
//! let version = doc.get("CFBundleShortVersionString").and_then(|v| v.as_str());
//! println!("version: {version:?}");
//!
//! PlistEditor::new().set_value("2.0.0", "CFBundleShortVersionString", "Info.plist")?;
//! let reloaded = load("Info.plist")?;
//! assert_eq!(
//!     reloaded["CFBundleShortVersionString"].as_str(),
//!     Some("2.0.0")
//! );
//! # Ok::<(), plister::PlistError>(())
//! ```
//!
//! ## Modules
//!
//! - [`loader`] — plist file → [`PlistDocument`]
//! - [`mutator`] — [`PlistEditor`], `Set`/`Save` through the editing tool
//! - [`command`] — [`CommandRunner`] seam for running the tool
//! - [`types`] — [`PlistValue`] and key-path lookup
//! - [`error`] — error types

pub mod command;
pub mod error;
pub mod loader;
pub mod mutator;
pub mod types;

pub use command::{CommandOutput, CommandRunner, SystemRunner, ToolCommand};
pub use error::{PlistError, Result};
pub use loader::{load, load_from_bytes};
pub use mutator::{render_value, PlistEditor, DEFAULT_TOOL};
pub use types::{lookup, PlistDocument, PlistValue};
