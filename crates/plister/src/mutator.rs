//! Plist mutator: edits a single existing key through PlistBuddy.
//!
//! Each edit is one synchronous tool invocation of the form
//! `<tool> -c "Set :<key> <value>" <file>`. The tool writes the file itself,
//! so nothing is held in memory here; reload with [`crate::load`] to see the
//! result.

use std::path::{Path, PathBuf};

use chrono::SecondsFormat;
use tracing::{debug, warn};

use crate::command::{CommandRunner, SystemRunner, ToolCommand};
use crate::error::{PlistError, Result};
use crate::types::PlistValue;

/// Where macOS ships PlistBuddy.
pub const DEFAULT_TOOL: &str = "/usr/libexec/PlistBuddy";

/// Render a value the way the `Set` subcommand expects it.
///
/// Strings go in verbatim, booleans as `true`/`false`, numbers through the
/// default `f64` display (`1234.56`, `5`), dates as RFC 3339. Containers,
/// raw data and non-finite numbers have no textual form and return `None`.
pub fn render_value(value: &PlistValue) -> Option<String> {
    match value {
        PlistValue::String(s) => Some(s.clone()),
        PlistValue::Boolean(b) => Some(b.to_string()),
        PlistValue::Number(n) if n.is_finite() => Some(n.to_string()),
        PlistValue::Date(d) => Some(d.to_rfc3339_opts(SecondsFormat::Secs, true)),
        PlistValue::Number(_)
        | PlistValue::Data(_)
        | PlistValue::Array(_)
        | PlistValue::Dictionary(_) => None,
    }
}

/// Edits plist files by shelling out to an external editing tool.
///
/// The runner is injected so tests can stand in for the real process.
#[derive(Debug, Clone)]
pub struct PlistEditor<R = SystemRunner> {
    tool: PathBuf,
    runner: R,
}

impl PlistEditor<SystemRunner> {
    /// Editor that runs PlistBuddy from its default location.
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for PlistEditor<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> PlistEditor<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            tool: PathBuf::from(DEFAULT_TOOL),
            runner,
        }
    }

    /// Use a different editing tool binary.
    pub fn with_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Set an existing key to `value`.
    ///
    /// The key must already exist in the file; the tool rejects unknown keys
    /// and that rejection comes back as [`PlistError::ExternalCommandFailed`].
    /// Nested entries are addressed with colon paths (`outer:inner`).
    pub fn set_value(
        &self,
        value: impl Into<PlistValue>,
        key: &str,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let value = value.into();
        if key.is_empty() {
            return Err(PlistError::EmptyKey);
        }
        let rendered = render_value(&value).ok_or_else(|| PlistError::UnsettableValue {
            key: key.to_string(),
            kind: value.kind(),
        })?;
        self.run_tool(format!("Set :{key} {rendered}"), path.as_ref())
    }

    /// Ask the tool to write the file out.
    ///
    /// `set_value` already persists its edit; this exists for callers that
    /// want an explicit save step.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.run_tool("Save".to_string(), path.as_ref())
    }

    /// `set_value` followed by `save`. Stops at the first failure.
    pub fn set_value_and_save(
        &self,
        value: impl Into<PlistValue>,
        key: &str,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        self.set_value(value, key, path)?;
        self.save(path)
    }

    fn run_tool(&self, subcommand: String, path: &Path) -> Result<()> {
        let command = ToolCommand::new(&self.tool)
            .arg("-c")
            .arg(subcommand)
            .arg(path.as_os_str());
        debug!(command = %command, "running plist tool");

        let output = self
            .runner
            .run(&command)
            .map_err(|err| PlistError::ExternalCommandFailed {
                command: command.to_string(),
                status: None,
                diagnostics: err.to_string(),
            })?;

        if output.success() {
            debug!(command = %command, "plist tool finished");
            return Ok(());
        }

        // PlistBuddy reports most errors on stdout, so fall back to it.
        let diagnostics = if output.stderr.trim().is_empty() {
            output.stdout.trim().to_string()
        } else {
            output.stderr.trim().to_string()
        };
        warn!(command = %command, status = ?output.status, %diagnostics, "plist tool failed");
        Err(PlistError::ExternalCommandFailed {
            command: command.to_string(),
            status: output.status,
            diagnostics,
        })
    }
}
