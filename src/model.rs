//! Result model for a scan: File -> Line -> Column containment hierarchy.
//!
//! Built once per scan invocation and consumed by a formatter; never mutated
//! after assembly. An `OffendingFile` exclusively owns its lines, each line
//! exclusively owns its columns.

/// A single rule match on a line.
///
/// The column is 1-based and computed against the tab-normalized line, so
/// reported positions line up with a fixed indentation width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffendingColumn {
    /// Offense type identifier, always upper-cased.
    pub offense_type: String,
    /// 1-based column where the match starts.
    pub column: usize,
    /// Human-readable explanation of the offense.
    pub message: String,
}

impl OffendingColumn {
    #[must_use]
    pub fn new(offense_type: impl Into<String>, column: usize, message: impl Into<String>) -> Self {
        Self {
            offense_type: offense_type.into(),
            column,
            message: message.into(),
        }
    }
}

/// A line that produced at least one match.
///
/// Lines with zero matches are never materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffendingLine {
    /// Line text after tab normalization and the configured cleaning policy.
    pub text: String,
    /// 1-based line number in the source file.
    pub line_number: usize,
    /// Matches on this line, in detection order. Never empty.
    pub columns: Vec<OffendingColumn>,
}

impl OffendingLine {
    #[must_use]
    pub fn new(text: impl Into<String>, line_number: usize, columns: Vec<OffendingColumn>) -> Self {
        Self {
            text: text.into(),
            line_number,
            columns,
        }
    }
}

/// Scan result for one file.
///
/// Files appear in the result set even with zero offending lines, so the
/// formatter can still report "no offenses" for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffendingFile {
    pub path: String,
    pub lines: Vec<OffendingLine>,
}

impl OffendingFile {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: OffendingLine) {
        self.lines.push(line);
    }

    /// Total number of matches across all lines of this file.
    #[must_use]
    pub fn total_offenses(&self) -> usize {
        self.lines.iter().map(|l| l.columns.len()).sum()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
