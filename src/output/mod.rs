//! Rendering of assembled offense data.
//!
//! Formatters implement a fixed sequential callback contract, driven once per
//! file in this exact order:
//!
//! `start -> header -> [start_line -> location* -> source -> end_line]* ->
//! footer -> end`
//!
//! `footer` immediately follows `header` for a file with no offending lines.

mod decorated;
mod json;
mod plain;
mod xml;

pub use decorated::{ColorMode, DecoratedPlainTextFormatter};
pub use json::JsonFormatter;
pub use plain::PlainTextFormatter;
pub use xml::MinimalXmlFormatter;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Result;
use crate::model::OffendingFile;

/// Sequential formatter contract consumed by [`render`].
pub trait OffenseFormatter {
    fn start(&mut self);
    fn header(&mut self, path: &str);
    fn start_line(&mut self, line_number: usize);
    fn location(&mut self, offense_type: &str, column: usize, message: &str);
    fn source(&mut self, text: &str);
    fn end_line(&mut self);
    fn footer(&mut self, total_offenses: usize);

    /// Finish and take the rendered output.
    ///
    /// # Errors
    /// Returns an error if final serialization fails.
    fn end(&mut self) -> Result<String>;
}

/// Drive a formatter over the assembled files in contract order.
///
/// # Errors
/// Propagates a formatter serialization failure.
pub fn render(files: &[OffendingFile], formatter: &mut dyn OffenseFormatter) -> Result<String> {
    formatter.start();
    for file in files {
        formatter.header(&file.path);
        for line in &file.lines {
            formatter.start_line(line.line_number);
            for column in &line.columns {
                formatter.location(&column.offense_type, column.column, &column.message);
            }
            formatter.source(&line.text);
            formatter.end_line();
        }
        formatter.footer(file.total_offenses());
    }
    formatter.end()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    PlainText,
    DecoratedPlainText,
    MinimalXml,
    Json,
}

impl OutputFormat {
    /// Map a format tag to a variant, case-insensitively. An unrecognized tag
    /// falls back to plain text rather than failing the run.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "decoratedplaintext" => Self::DecoratedPlainText,
            "minimalxml" => Self::MinimalXml,
            "json" => Self::Json,
            _ => Self::PlainText,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::PlainText => "plaintext",
            Self::DecoratedPlainText => "decoratedplaintext",
            Self::MinimalXml => "minimalxml",
            Self::Json => "json",
        }
    }

    /// Construct the formatter for this format.
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn OffenseFormatter> {
        match self {
            Self::PlainText => Box::new(PlainTextFormatter::new()),
            Self::DecoratedPlainText => Box::new(DecoratedPlainTextFormatter::new(color)),
            Self::MinimalXml => Box::new(MinimalXmlFormatter::new()),
            Self::Json => Box::new(JsonFormatter::new()),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl Serialize for OutputFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
