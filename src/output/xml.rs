use std::fmt::Write;

use crate::error::Result;

use super::OffenseFormatter;

/// Minimal XML document: `<offenses>` wrapping one `<offensiveFile>` per
/// scanned file.
pub struct MinimalXmlFormatter {
    out: String,
}

impl MinimalXmlFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { out: String::new() }
    }
}

impl Default for MinimalXmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl OffenseFormatter for MinimalXmlFormatter {
    fn start(&mut self) {
        writeln!(self.out, "<offenses>").ok();
    }

    fn header(&mut self, path: &str) {
        writeln!(self.out, "  <offensiveFile>").ok();
        writeln!(self.out, "    <filepath>{}</filepath>", escape(path)).ok();
    }

    fn start_line(&mut self, line_number: usize) {
        writeln!(self.out, "    <offensiveLine>").ok();
        writeln!(self.out, "      <lineNumber>{line_number}</lineNumber>").ok();
    }

    fn location(&mut self, offense_type: &str, column: usize, message: &str) {
        writeln!(self.out, "      <offensiveColumn>").ok();
        writeln!(self.out, "        <type>{}</type>", escape(offense_type)).ok();
        writeln!(self.out, "        <column>{column}</column>").ok();
        writeln!(self.out, "        <message>{}</message>", escape(message)).ok();
        writeln!(self.out, "      </offensiveColumn>").ok();
    }

    fn source(&mut self, text: &str) {
        writeln!(self.out, "      <line>{}</line>", escape(text)).ok();
    }

    fn end_line(&mut self) {
        writeln!(self.out, "    </offensiveLine>").ok();
    }

    fn footer(&mut self, total_offenses: usize) {
        writeln!(
            self.out,
            "    <totalOffenses>{total_offenses}</totalOffenses>"
        )
        .ok();
        writeln!(self.out, "  </offensiveFile>").ok();
    }

    fn end(&mut self) -> Result<String> {
        writeln!(self.out, "</offenses>").ok();
        Ok(std::mem::take(&mut self.out))
    }
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
