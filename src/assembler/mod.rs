//! Per-file assembly: line splitting, leading-tab normalization, cleaning,
//! and packaging of matches into the result model.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

use crate::finder::{OffenseFinder, PreparedOffenses};
use crate::model::{OffendingFile, OffendingLine};

/// Whitespace cleaning applied to stored offending-line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cleaner {
    #[default]
    None,
    /// Trim leading and trailing whitespace.
    Trailing,
    /// Strip all whitespace and tabs.
    All,
    /// Strip tab characters only.
    AllTabs,
    /// Strip the whitespace class, which covers tabs as well; observably the
    /// same as `All`.
    AllSpaces,
}

impl Cleaner {
    /// Map a config tag to a policy. Unknown tags fall back to `none`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "trailing" => Self::Trailing,
            "all" => Self::All,
            "all-tabs" => Self::AllTabs,
            "all-spaces" => Self::AllSpaces,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Trailing => "trailing",
            Self::All => "all",
            Self::AllTabs => "all-tabs",
            Self::AllSpaces => "all-spaces",
        }
    }

    #[must_use]
    pub fn apply(self, line: &str) -> String {
        match self {
            Self::None => line.to_string(),
            Self::Trailing => line.trim().to_string(),
            Self::All | Self::AllSpaces => line.chars().filter(|c| !c.is_whitespace()).collect(),
            Self::AllTabs => line.chars().filter(|c| *c != '\t').collect(),
        }
    }
}

impl std::str::FromStr for Cleaner {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl Serialize for Cleaner {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Cleaner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Assembles one `OffendingFile` from raw file contents.
pub struct LineAssembler {
    tabwidth: usize,
    cleaner: Cleaner,
}

impl LineAssembler {
    #[must_use]
    pub const fn new(tabwidth: usize, cleaner: Cleaner) -> Self {
        Self { tabwidth, cleaner }
    }

    /// Scan `data` line by line and collect every offending line.
    ///
    /// Lines that are empty after trimming are skipped outright; lines with
    /// zero matches are never materialized. The file itself always appears in
    /// the result, even with no offending lines.
    #[must_use]
    pub fn assemble(
        &self,
        path: &str,
        data: &str,
        finder: &OffenseFinder,
        offenses: Option<&PreparedOffenses>,
    ) -> OffendingFile {
        let extension = file_extension(path);
        let mut file = OffendingFile::new(path);

        for (index, raw_line) in data.lines().enumerate() {
            let normalized = self.expand_leading_tabs(raw_line);
            if normalized.trim().is_empty() {
                continue;
            }
            let columns = finder.find(&extension, &normalized, offenses);
            if columns.is_empty() {
                continue;
            }
            file.push(OffendingLine::new(
                self.cleaner.apply(&normalized),
                index + 1,
                columns,
            ));
        }
        file
    }

    /// Replace each tab in the leading whitespace run with `tabwidth` spaces.
    ///
    /// Only the leading run is touched: a tab later in the line may itself be
    /// part of an offending pattern and must be left as is.
    fn expand_leading_tabs(&self, line: &str) -> String {
        let lead_end = line
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map_or(line.len(), |(i, _)| i);
        let (lead, rest) = line.split_at(lead_end);
        if !lead.contains('\t') {
            return line.to_string();
        }
        let spaces = " ".repeat(self.tabwidth);
        format!("{}{rest}", lead.replace('\t', &spaces))
    }
}

/// Lowercased last dot-separated segment of the path; the whole path when no
/// dot is present.
#[must_use]
pub fn file_extension(path: &str) -> String {
    path.rsplit('.').next().unwrap_or(path).to_lowercase()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
