//! Per-line offense detection.
//!
//! The finder merges the user rule overlay with the built-in table, honoring
//! the force, override, and extension-filter semantics, and deduplicates
//! columns when both layers run.

use indexmap::IndexMap;

use crate::config::UserRuleSpec;
use crate::model::OffendingColumn;
use crate::rules::{CompiledPattern, RuleSet, compile};

/// User rules compiled once per scan invocation.
///
/// Pattern compilation is pure, so preparing the overlay up front avoids
/// recompiling per line. Compilation failures degrade to inert rules and are
/// surfaced through `warnings`.
#[derive(Debug, Default)]
pub struct PreparedOffenses {
    entries: Vec<PreparedRule>,
    pub warnings: Vec<String>,
}

#[derive(Debug)]
struct PreparedRule {
    /// Upper-cased type, as emitted on columns.
    display_type: String,
    /// Lowercased extension filter; empty applies to all extensions.
    extensions: Vec<String>,
    matcher: Matcher,
    message: String,
    /// Whether this rule suppresses the built-in rule of the same type for
    /// files it applies to.
    marks_override: bool,
}

impl PreparedRule {
    fn applies_to(&self, extension: &str) -> bool {
        self.extensions.is_empty() || self.extensions.iter().any(|e| e == extension)
    }
}

#[derive(Debug)]
enum Matcher {
    /// A literal user pattern.
    User(CompiledPattern),
    /// Reference to the built-in rule at this index.
    Builtin(usize),
    /// Unknown type with no pattern, or a pattern that failed to compile.
    /// Contributes no columns.
    Inert,
}

pub struct OffenseFinder {
    rules: RuleSet,
    force: bool,
    override_builtin: bool,
}

impl OffenseFinder {
    #[must_use]
    pub const fn new(rules: RuleSet, force: bool, override_builtin: bool) -> Self {
        Self {
            rules,
            force,
            override_builtin,
        }
    }

    /// Compile the user rule overlay for a scan invocation.
    ///
    /// A user pattern is honored only when its type has no built-in
    /// counterpart or `override` is on; otherwise the built-in pattern and
    /// message of that type are used. An unknown type with no pattern is a
    /// configuration no-op.
    #[must_use]
    pub fn prepare(&self, offenses: &IndexMap<String, UserRuleSpec>) -> PreparedOffenses {
        let mut prepared = PreparedOffenses::default();
        for (type_name, spec) in offenses {
            let builtin = self.rules.position(type_name);
            let use_user_pattern =
                !spec.pattern.is_empty() && (builtin.is_none() || self.override_builtin);

            let (matcher, message, marks_override) = if use_user_pattern {
                match compile(&spec.pattern[0], &spec.pattern[1..]) {
                    Ok(pattern) => (
                        Matcher::User(pattern),
                        spec.message.clone().unwrap_or_else(|| " ".to_string()),
                        self.override_builtin,
                    ),
                    Err(e) => {
                        prepared
                            .warnings
                            .push(format!("offense type \"{type_name}\" skipped: {e}"));
                        (Matcher::Inert, String::new(), false)
                    }
                }
            } else if let Some(index) = builtin {
                let rule = self.rules.get(index);
                (Matcher::Builtin(index), rule.message.to_string(), false)
            } else {
                (Matcher::Inert, String::new(), false)
            };

            prepared.entries.push(PreparedRule {
                display_type: type_name.to_uppercase(),
                extensions: spec.extensions.iter().map(|e| e.to_lowercase()).collect(),
                matcher,
                message,
                marks_override,
            });
        }
        prepared
    }

    /// Find every offense on a line.
    ///
    /// Columns are 1-based match offsets against the given (tab-normalized)
    /// line. The overridden-type set is local to this call, so concurrent
    /// scans of different files share only the read-only rule table.
    #[must_use]
    pub fn find(
        &self,
        extension: &str,
        line: &str,
        offenses: Option<&PreparedOffenses>,
    ) -> Vec<OffendingColumn> {
        let extension = extension.to_lowercase();
        let mut columns = Vec::new();
        let mut overridden: Vec<&str> = Vec::new();

        if let Some(prepared) = offenses {
            for rule in &prepared.entries {
                if !rule.applies_to(&extension) {
                    continue;
                }
                if rule.marks_override && !overridden.contains(&rule.display_type.as_str()) {
                    overridden.push(&rule.display_type);
                }
                match &rule.matcher {
                    Matcher::User(pattern) => {
                        columns.extend(pattern.match_starts(line).into_iter().map(|start| {
                            OffendingColumn::new(
                                rule.display_type.clone(),
                                start + 1,
                                rule.message.clone(),
                            )
                        }));
                    }
                    Matcher::Builtin(index) => {
                        let builtin = self.rules.get(*index);
                        columns.extend(builtin.pattern.find_iter(line).map(|m| {
                            OffendingColumn::new(
                                rule.display_type.clone(),
                                m.start() + 1,
                                rule.message.clone(),
                            )
                        }));
                    }
                    Matcher::Inert => {}
                }
            }
        }

        if offenses.is_none() || self.force {
            for rule in self.rules.iter() {
                let display_type = rule.offense_type.to_uppercase();
                if overridden.contains(&display_type.as_str()) {
                    continue;
                }
                if !rule.applies_to(&extension) {
                    continue;
                }
                columns.extend(rule.pattern.find_iter(line).map(|m| {
                    OffendingColumn::new(display_type.clone(), m.start() + 1, rule.message)
                }));
            }
        }

        if offenses.is_some() && self.force {
            remove_duplicates(columns)
        } else {
            columns
        }
    }
}

/// Collapse columns sharing a `(type, column)` pair.
///
/// The surviving message is the last one written; the pair keeps its
/// first-seen position in the output.
fn remove_duplicates(columns: Vec<OffendingColumn>) -> Vec<OffendingColumn> {
    let mut unique: IndexMap<(String, usize), String> = IndexMap::new();
    for column in columns {
        unique.insert((column.offense_type, column.column), column.message);
    }
    unique
        .into_iter()
        .map(|((offense_type, column), message)| OffendingColumn::new(offense_type, column, message))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
