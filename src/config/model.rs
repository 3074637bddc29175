use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assembler::Cleaner;
use crate::output::OutputFormat;

/// A user-supplied offense rule, keyed by type in the `[offenses]` table.
///
/// An absent or empty `pattern` makes the rule a pure reference to the
/// pre-defined rule of the same type: useful to re-scope a built-in rule to
/// other extensions, or (with `override`) to suppress it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserRuleSpec {
    /// `[rawPattern, ...modifierTokens]`. Recognized tokens: `global`/`g`,
    /// `case-insensitive`/`i`. No tokens at all enables both.
    pub pattern: Vec<String>,

    /// Message attached to each match of this rule.
    pub message: Option<String>,

    /// Extensions this rule applies to; empty means all extensions.
    pub extensions: Vec<String>,
}

/// Scan configuration, merged from the config file and CLI overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Also render to a destination file.
    pub save: bool,

    /// Formatter for console output.
    pub stout: OutputFormat,

    /// Formatter for file output (only used when `save` is on).
    pub output: OutputFormat,

    /// Run pre-defined rules alongside user rules.
    pub force: bool,

    /// A user rule of the same type suppresses the pre-defined one.
    #[serde(rename = "override")]
    pub override_builtin: bool,

    /// Spaces per leading tab when normalizing indentation.
    pub tabwidth: usize,

    /// Whitespace cleaning applied to stored offending-line text.
    pub cleaner: Cleaner,

    /// Extensions to include when walking directories; empty means all files.
    pub extensions: Vec<String>,

    /// Glob patterns excluded from directory walks.
    pub exclude: Vec<String>,

    /// Destination path for `save`.
    pub dest: Option<PathBuf>,

    /// User rule overlay, keyed by offense type. Iteration order is the
    /// declaration order in the config file.
    pub offenses: IndexMap<String, UserRuleSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save: false,
            stout: OutputFormat::PlainText,
            output: OutputFormat::PlainText,
            force: true,
            override_builtin: false,
            tabwidth: 4,
            cleaner: Cleaner::None,
            extensions: Vec::new(),
            exclude: Vec::new(),
            dest: None,
            offenses: IndexMap::new(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
