use std::fmt::Write;

use crate::error::Result;

use super::OffenseFormatter;

pub(super) const HR: &str = "______________________________________________________";

/// Plain-text rendering: one block per file, a ruled section per offending
/// line, `L<n>`/`C<n>` location notation.
pub struct PlainTextFormatter {
    out: String,
}

impl PlainTextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { out: String::new() }
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OffenseFormatter for PlainTextFormatter {
    fn start(&mut self) {}

    fn header(&mut self, path: &str) {
        writeln!(self.out, "[Checking for offenses in file: {path}]").ok();
    }

    fn start_line(&mut self, line_number: usize) {
        writeln!(self.out, "{HR}").ok();
        writeln!(self.out, "Offenses located at line number: L{line_number}").ok();
        writeln!(self.out, "{HR}").ok();
    }

    fn location(&mut self, offense_type: &str, column: usize, message: &str) {
        writeln!(
            self.out,
            "    -> {offense_type} offense located at column: C{column}."
        )
        .ok();
        writeln!(self.out, "      {message}").ok();
    }

    fn source(&mut self, text: &str) {
        writeln!(self.out, "Offending line: {text}").ok();
    }

    fn end_line(&mut self) {
        writeln!(self.out, "{HR}").ok();
        writeln!(self.out).ok();
    }

    fn footer(&mut self, total_offenses: usize) {
        writeln!(self.out, "Number of Offenses: {total_offenses}").ok();
        writeln!(self.out).ok();
    }

    fn end(&mut self) -> Result<String> {
        Ok(std::mem::take(&mut self.out))
    }
}

#[cfg(test)]
#[path = "plain_tests.rs"]
mod tests;
