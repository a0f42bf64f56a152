//! Publication entry model built from one CSV row.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{RawRow, Section};
use crate::config::columns;
use crate::error::{BuildError, BuildResult};

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("valid regex"));

/// Year used for ordering entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortYear {
    /// A four-digit year found in the `year` cell.
    Year(u16),
    /// No four-digit year present; orders after every known year.
    Unknown,
}

impl SortYear {
    /// Extract the first run of exactly four ASCII digits.
    ///
    /// Longer digit runs do not count: `"12345"` has no year.
    #[must_use]
    pub fn extract(raw: &str) -> Self {
        DIGIT_RUN
            .find_iter(raw)
            .find(|m| m.len() == 4)
            .and_then(|m| m.as_str().parse().ok())
            .map_or(Self::Unknown, Self::Year)
    }

    /// The year, if known.
    #[must_use]
    pub const fn value(self) -> Option<u16> {
        match self {
            Self::Year(year) => Some(year),
            Self::Unknown => None,
        }
    }

    /// Check if a year was found.
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Year(_))
    }

    /// Newest first, unknown last.
    #[must_use]
    pub fn cmp_newest_first(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Year(a), Self::Year(b)) => b.cmp(&a),
            (Self::Year(_), Self::Unknown) => Ordering::Less,
            (Self::Unknown, Self::Year(_)) => Ordering::Greater,
            (Self::Unknown, Self::Unknown) => Ordering::Equal,
        }
    }
}

impl Serialize for SortYear {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// One media-coverage link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    /// Outlet name.
    pub label: String,

    /// Article URL, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MediaItem {
    /// Create a media item; an empty URL is stored as `None`.
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        Self { label: label.into(), url: (!url.is_empty()).then_some(url) }
    }
}

/// Parse a `media` cell of the form `Label|url; Label; Label|url`.
///
/// Pieces are split on `;` and then on the first `|`. Empty pieces and pieces
/// without a label are dropped; order is preserved.
#[must_use]
pub fn parse_media(raw: &str) -> Vec<MediaItem> {
    raw.split(';')
        .filter_map(|piece| {
            let piece = piece.trim();
            let (label, url) = piece.split_once('|').unwrap_or((piece, ""));
            let label = label.trim();
            (!label.is_empty()).then(|| MediaItem::new(label, url.trim()))
        })
        .collect()
}

/// A publication entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Normalized section.
    pub section: Section,

    /// Paper title.
    pub title: String,

    /// Publication status ("Published", "R&R", ...).
    pub status: String,

    /// Year cell as written.
    pub year: String,

    /// Year used for ordering.
    pub sort_year: SortYear,

    /// Co-author text as written.
    pub authors: String,

    /// Journal, conference or outlet.
    pub venue: String,

    /// Link to the paper.
    pub paper_url: String,

    /// Link to the slides.
    pub slides_url: String,

    /// Link to the DOI resolver.
    pub doi_url: String,

    /// Abstract, possibly containing `$...$` math.
    pub r#abstract: String,

    /// Raw BibTeX record.
    pub bibtex: String,

    /// Media coverage links.
    pub media: Vec<MediaItem>,

    /// Free-text note shown under the authors.
    pub comment: String,

    /// Label for the paper button.
    pub paper_label: String,

    /// Columns outside the known schema, kept verbatim.
    pub extra: BTreeMap<String, String>,

    /// Line number of the source record.
    pub line: u64,
}

impl Entry {
    /// Build an entry from a raw row.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingTitle`] if the title cell is empty.
    pub fn from_row(row: &RawRow) -> BuildResult<Self> {
        let title = row.get(columns::TITLE).trim();
        if title.is_empty() {
            return Err(BuildError::MissingTitle { line: row.line() });
        }

        let year = row.get(columns::YEAR).trim().to_string();
        let sort_year = SortYear::extract(&year);
        if !year.is_empty() && !sort_year.is_known() {
            tracing::warn!(line = row.line(), year = %year, "No four-digit year; sorting last");
        }

        let extra = row
            .fields()
            .filter(|(name, _)| !columns::is_known(name))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        let cell = |name: &str| row.get(name).trim().to_string();

        Ok(Self {
            section: Section::from_raw(row.get(columns::SECTION)),
            title: title.to_string(),
            status: cell(columns::STATUS),
            year,
            sort_year,
            authors: cell(columns::AUTHORS),
            venue: cell(columns::VENUE),
            paper_url: cell(columns::PAPER_URL),
            slides_url: cell(columns::SLIDES_URL),
            doi_url: cell(columns::DOI_URL),
            r#abstract: row.get(columns::ABSTRACT).replace("\r\n", "\n").trim().to_string(),
            bibtex: cell(columns::BIBTEX),
            media: parse_media(row.get(columns::MEDIA)),
            comment: cell(columns::COMMENT),
            paper_label: cell(columns::PAPER_LABEL),
            extra,
            line: row.line(),
        })
    }

    /// Authors line: `"solo"` for a sole-authored paper, otherwise `"with ..."`.
    ///
    /// Only the exact lowercase word `solo` is special. Returns `None` when
    /// the authors cell is empty.
    #[must_use]
    pub fn authors_line(&self) -> Option<String> {
        match self.authors.trim() {
            "" => None,
            "solo" => Some("solo".to_string()),
            authors => Some(format!("with {authors}")),
        }
    }

    /// Get the paper button label, falling back to "Paper".
    #[must_use]
    pub fn paper_label_or_default(&self) -> &str {
        if self.paper_label.is_empty() { "Paper" } else { self.paper_label.as_str() }
    }

    /// Number of media links.
    #[must_use]
    pub fn media_count(&self) -> usize {
        self.media.len()
    }

    /// Check if the entry has any link, citation or media control.
    #[must_use]
    pub fn has_links(&self) -> bool {
        !(self.paper_url.is_empty()
            && self.slides_url.is_empty()
            && self.doi_url.is_empty()
            && self.bibtex.is_empty()
            && self.media.is_empty())
    }

    /// Order within a section: newest year first, then title.
    ///
    /// Titles compare case-insensitively with a case-sensitive tiebreak, so
    /// the order is total for distinct titles.
    #[must_use]
    pub fn cmp_display(&self, other: &Self) -> Ordering {
        self.sort_year
            .cmp_newest_first(other.sort_year)
            .then_with(|| self.title.to_lowercase().cmp(&other.title.to_lowercase()))
            .then_with(|| self.title.cmp(&other.title))
    }
}
