//! Compilation of user-supplied `[pattern, ...modifiers]` tuples.

use regex::Regex;

use crate::error::{NotifyOffensesError, Result};

/// A compiled user pattern together with its match-all flag.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    global: bool,
}

impl CompiledPattern {
    /// Zero-based start offsets of the matches on `line`.
    ///
    /// A global pattern yields every non-overlapping match, each successive
    /// search resuming after the previous match's end. A non-global pattern
    /// yields at most the first match.
    #[must_use]
    pub fn match_starts(&self, line: &str) -> Vec<usize> {
        if self.global {
            self.regex.find_iter(line).map(|m| m.start()).collect()
        } else {
            self.regex.find(line).map(|m| m.start()).into_iter().collect()
        }
    }
}

/// Map modifier tokens to the (global, case-insensitive) flag pair.
///
/// `global`/`g` and `case-insensitive`/`i` are recognized; duplicates collapse
/// and unknown tokens are ignored. An empty token list enables both flags.
fn normalize_modifiers(modifiers: &[String]) -> (bool, bool) {
    if modifiers.is_empty() {
        return (true, true);
    }
    let global = modifiers.iter().any(|m| m == "global" || m == "g");
    let case_insensitive = modifiers
        .iter()
        .any(|m| m == "case-insensitive" || m == "i");
    (global, case_insensitive)
}

/// Backslash-escape every single and double quote in the raw pattern.
///
/// This guards against quoting artifacts from the configuration syntax the
/// rule was written in, not against the regex engine itself.
fn escape_quotes(raw: &str) -> String {
    raw.replace('\'', "\\'").replace('"', "\\\"")
}

/// Compile a user pattern tuple into a matcher.
///
/// # Errors
/// Returns `InvalidPattern` when the pattern is not a valid regex. Callers
/// report this per rule and continue the scan.
pub fn compile(raw: &str, modifiers: &[String]) -> Result<CompiledPattern> {
    let (global, case_insensitive) = normalize_modifiers(modifiers);
    let escaped = escape_quotes(raw);
    let source = if case_insensitive {
        format!("(?i){escaped}")
    } else {
        escaped
    };
    let regex = Regex::new(&source).map_err(|e| NotifyOffensesError::InvalidPattern {
        pattern: raw.to_string(),
        source: e,
    })?;
    Ok(CompiledPattern { regex, global })
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
