use std::fmt::Write;

use crate::error::Result;

use super::OffenseFormatter;
use super::plain::HR;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// The colorized twin of the plain-text format: identical field sequence,
/// ANSI decoration on headers and labels.
pub struct DecoratedPlainTextFormatter {
    out: String,
    use_colors: bool,
}

impl DecoratedPlainTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            out: String::new(),
            use_colors: should_use_colors(mode),
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }
}

fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable
            if std::env::var("NO_COLOR").is_ok() {
                return false;
            }
            std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    }
}

impl OffenseFormatter for DecoratedPlainTextFormatter {
    fn start(&mut self) {}

    fn header(&mut self, path: &str) {
        let header = self.paint(&format!("[Checking for offenses in file: {path}]"), ansi::CYAN);
        writeln!(self.out, "{header}").ok();
    }

    fn start_line(&mut self, line_number: usize) {
        let label = self.paint(&format!("L{line_number}"), ansi::YELLOW);
        writeln!(self.out, "{HR}").ok();
        writeln!(self.out, "Offenses located at line number: {label}").ok();
        writeln!(self.out, "{HR}").ok();
    }

    fn location(&mut self, offense_type: &str, column: usize, message: &str) {
        let offense = self.paint(offense_type, ansi::RED);
        let label = self.paint(&format!("C{column}"), ansi::YELLOW);
        writeln!(
            self.out,
            "    -> {offense} offense located at column: {label}."
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
        let total = self.paint(&total_offenses.to_string(), ansi::GREEN);
        writeln!(self.out, "Number of Offenses: {total}").ok();
        writeln!(self.out).ok();
    }

    fn end(&mut self) -> Result<String> {
        Ok(std::mem::take(&mut self.out))
    }
}

#[cfg(test)]
#[path = "decorated_tests.rs"]
mod tests;
