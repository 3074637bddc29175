//! Pre-defined offense rules.
//!
//! The built-in table is read-only after construction. User-supplied rules are
//! layered on top per scan invocation and never written back here.

pub mod pattern;

pub use pattern::{CompiledPattern, compile};

use regex::Regex;

/// A single pre-defined detection rule.
#[derive(Debug)]
pub struct Rule {
    /// Case-insensitive type identifier, e.g. `STYLE` or `CONSOLE LOG`.
    pub offense_type: &'static str,
    /// Compiled pattern; all built-in patterns match case-insensitively and
    /// are scanned globally (every non-overlapping match yields a column).
    pub pattern: Regex,
    /// Explanation attached to every match of this rule.
    pub message: &'static str,
    /// Lowercase file extensions this rule applies to.
    pub extensions: &'static [&'static str],
}

impl Rule {
    /// Whether this rule applies to the given lowercase file extension.
    #[must_use]
    pub fn applies_to(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| *e == extension)
    }
}

const ATTRIBUTE_VALUE: &str = r#"[\s\ta-z0-9\-:;{}\\/()+=&%#@!,.$_"']*"#;

/// The immutable table of built-in rules.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the table of pre-defined rules.
    ///
    /// # Panics
    /// Panics if a built-in pattern fails to compile, which would be a bug in
    /// this crate rather than a runtime condition.
    #[must_use]
    pub fn builtin() -> Self {
        let attr = ATTRIBUTE_VALUE;
        let rules = vec![
            Rule {
                offense_type: "STYLE",
                pattern: Regex::new(&format!(
                    r#"(?i)style[\s\t]*=[\s\t]*("|'){attr}("|'){attr}>"#
                ))
                .expect("Invalid built-in pattern"),
                message: "Style attributes should belong in a .css or .less file.",
                extensions: &["html", "cfm"],
            },
            Rule {
                offense_type: "ALIGN",
                pattern: Regex::new(&format!(
                    r#"(?i)align[\s\t]*=[\s\t]*("|'){attr}("|'){attr}>"#
                ))
                .expect("Invalid built-in pattern"),
                message: "Align attributes should belong in a .css or .less file.",
                extensions: &["html", "cfm"],
            },
            Rule {
                offense_type: "JAVASCRIPT",
                pattern: Regex::new(&format!(
                    r#"(?i)on[a-z]*[\s\t]*=[\s\t]*("|'){attr}[)|;}}]("|'){attr}>"#
                ))
                .expect("Invalid built-in pattern"),
                message: "Inline Javascript should belong in a .js file.",
                extensions: &["html", "cfm"],
            },
            Rule {
                offense_type: "CONSOLE LOG",
                pattern: Regex::new(r"(?i)console.log\(").expect("Invalid built-in pattern"),
                message: "Console Log declaration detected. Please remove once finished testing.",
                extensions: &["js"],
            },
        ];
        Self { rules }
    }

    /// Look up a rule by type, matched case-insensitively.
    #[must_use]
    pub fn position(&self, offense_type: &str) -> Option<usize> {
        self.rules
            .iter()
            .position(|r| r.offense_type.eq_ignore_ascii_case(offense_type))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> &Rule {
        &self.rules[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
