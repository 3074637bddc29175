use serde::Serialize;

use crate::error::Result;

use super::OffenseFormatter;

/// JSON rendering: `{"offenses":{"offensive-files":[...]}}` with the original
/// hyphenated field names. The document is accumulated through the sequential
/// contract and serialized once at `end`.
pub struct JsonFormatter {
    files: Vec<JsonFile>,
}

#[derive(Serialize)]
struct JsonOutput {
    offenses: OffenseSet,
}

#[derive(Serialize)]
struct OffenseSet {
    #[serde(rename = "offensive-files")]
    offensive_files: Vec<JsonFile>,
}

#[derive(Serialize)]
struct JsonFile {
    filepath: String,
    #[serde(rename = "offensive-line")]
    offensive_lines: Vec<JsonLine>,
    #[serde(rename = "total-offenses")]
    total_offenses: usize,
}

#[derive(Serialize)]
struct JsonLine {
    #[serde(rename = "line-number")]
    line_number: usize,
    #[serde(rename = "offensive-column")]
    offensive_columns: Vec<JsonColumn>,
    line: String,
}

#[derive(Serialize)]
struct JsonColumn {
    #[serde(rename = "type")]
    offense_type: String,
    column: usize,
    message: String,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    fn current_file(&mut self) -> &mut JsonFile {
        self.files.last_mut().expect("header precedes line data")
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OffenseFormatter for JsonFormatter {
    fn start(&mut self) {}

    fn header(&mut self, path: &str) {
        self.files.push(JsonFile {
            filepath: path.to_string(),
            offensive_lines: Vec::new(),
            total_offenses: 0,
        });
    }

    fn start_line(&mut self, line_number: usize) {
        self.current_file().offensive_lines.push(JsonLine {
            line_number,
            offensive_columns: Vec::new(),
            line: String::new(),
        });
    }

    fn location(&mut self, offense_type: &str, column: usize, message: &str) {
        let line = self
            .current_file()
            .offensive_lines
            .last_mut()
            .expect("start_line precedes location");
        line.offensive_columns.push(JsonColumn {
            offense_type: offense_type.to_string(),
            column,
            message: message.to_string(),
        });
    }

    fn source(&mut self, text: &str) {
        let line = self
            .current_file()
            .offensive_lines
            .last_mut()
            .expect("start_line precedes source");
        line.line = text.to_string();
    }

    fn end_line(&mut self) {}

    fn footer(&mut self, total_offenses: usize) {
        self.current_file().total_offenses = total_offenses;
    }

    fn end(&mut self) -> Result<String> {
        let output = JsonOutput {
            offenses: OffenseSet {
                offensive_files: std::mem::take(&mut self.files),
            },
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
