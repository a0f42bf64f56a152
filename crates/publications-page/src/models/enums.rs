//! Enumeration types for sections and build options.

use serde::{Deserialize, Serialize};

/// Display category an entry is grouped under.
///
/// Variant order is the page's section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Published journal articles.
    Journal,
    /// Working papers and preprints.
    Working,
    /// Conference proceedings.
    Conference,
    /// Everything else.
    Other,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Self; 4] = [Self::Journal, Self::Working, Self::Conference, Self::Other];

    /// Normalize a raw `section` cell by prefix.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace;
    /// anything unrecognized, including an empty cell, is [`Section::Other`].
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let s = raw.trim().to_lowercase();
        if s.starts_with("jour") {
            Self::Journal
        } else if s.starts_with("work") {
            Self::Working
        } else if s.starts_with("conf") {
            Self::Conference
        } else {
            Self::Other
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Working => "working",
            Self::Conference => "conference",
            Self::Other => "other",
        }
    }

    /// Section heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Journal => "Journal Papers",
            Self::Working => "Working Papers",
            Self::Conference => "Conference Proceedings",
            Self::Other => "Other Articles",
        }
    }

    /// Element id of the section heading, used as the subnav anchor.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        self.as_str()
    }

    /// Element id of the section's card list.
    #[must_use]
    pub const fn list_id(self) -> &'static str {
        match self {
            Self::Journal => "journal-papers",
            Self::Working => "working-papers",
            Self::Conference => "conf-papers",
            Self::Other => "other-articles",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handling of rows that cannot become entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Fail the whole build.
    #[default]
    Abort,
    /// Drop the row and log a warning.
    Skip,
}

impl RowPolicy {
    /// Check if malformed rows are dropped.
    #[must_use]
    pub const fn is_skip(self) -> bool {
        matches!(self, Self::Skip)
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Static HTML page.
    #[default]
    Html,
    /// Grouped catalog as JSON.
    Json,
}

impl OutputFormat {
    /// Get the file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}
