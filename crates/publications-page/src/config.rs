//! Configuration for the publications page builder.

use std::path::{Path, PathBuf};

use crate::models::{OutputFormat, RowPolicy};

/// Build defaults.
pub mod defaults {
    /// Input file name, looked up in the working directory.
    pub const INPUT_FILE: &str = "publications.csv";

    /// Output file stem; the extension follows the output format.
    pub const OUTPUT_STEM: &str = "publications";

    /// Directory searched when none is configured.
    pub const DIR: &str = ".";

    /// Page heading.
    pub const PAGE_TITLE: &str = "Publications";

    /// Line under the page heading.
    pub const PAGE_SUBTITLE: &str =
        "Browse my research: journal papers, conference proceedings, and working papers.";

    /// MathJax bundle loaded by the page.
    pub const MATHJAX_URL: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-chtml.js";

    /// Avatar image shown in the masthead.
    pub const AVATAR_URL: &str = "./assets/me.jpg";
}

/// CSV column names.
pub mod columns {
    pub const SECTION: &str = "section";
    pub const TITLE: &str = "title";
    pub const STATUS: &str = "status";
    pub const YEAR: &str = "year";
    pub const AUTHORS: &str = "authors";
    pub const VENUE: &str = "venue";
    pub const PAPER_URL: &str = "paper_url";
    pub const SLIDES_URL: &str = "slides_url";
    pub const DOI_URL: &str = "doi_url";
    pub const ABSTRACT: &str = "abstract";
    pub const BIBTEX: &str = "bibtex";
    pub const MEDIA: &str = "media";
    pub const COMMENT: &str = "comment";
    pub const PAPER_LABEL: &str = "paper_label";

    /// Columns the header must contain.
    pub const REQUIRED: &[&str] = &[SECTION, TITLE];

    /// The documented column schema.
    pub const RECOGNIZED: &[&str] = &[
        SECTION, TITLE, STATUS, YEAR, AUTHORS, VENUE, PAPER_URL, SLIDES_URL, DOI_URL, ABSTRACT,
        BIBTEX, MEDIA,
    ];

    /// Optional presentation columns understood on top of the schema.
    pub const EXTENDED: &[&str] = &[COMMENT, PAPER_LABEL];

    /// Whether a column is consumed by the entry model rather than passed through.
    #[must_use]
    pub fn is_known(name: &str) -> bool {
        RECOGNIZED.contains(&name) || EXTENDED.contains(&name)
    }
}

/// Text placed around the publication list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Site owner shown in the header and the document title.
    pub owner: String,

    /// Page heading.
    pub title: String,

    /// Line under the page heading.
    pub subtitle: String,

    /// Masthead avatar image URL.
    pub avatar_url: String,

    /// MathJax script URL.
    pub mathjax_url: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            owner: String::new(),
            title: defaults::PAGE_TITLE.to_string(),
            subtitle: defaults::PAGE_SUBTITLE.to_string(),
            avatar_url: defaults::AVATAR_URL.to_string(),
            mathjax_url: defaults::MATHJAX_URL.to_string(),
        }
    }
}

/// Builder configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file to read.
    pub input: PathBuf,

    /// File to write.
    pub output: PathBuf,

    /// Output format.
    pub format: OutputFormat,

    /// What to do with rows that cannot become entries.
    pub row_policy: RowPolicy,

    /// Page text.
    pub page: PageOptions,
}

impl Config {
    /// Create a configuration reading and writing inside `dir`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let format = OutputFormat::default();
        Self {
            input: dir.join(defaults::INPUT_FILE),
            output: dir.join(defaults::OUTPUT_STEM).with_extension(format.extension()),
            format,
            row_policy: RowPolicy::default(),
            page: PageOptions::default(),
        }
    }

    /// Create a test configuration with a fixed owner so rendered pages are stable.
    #[must_use]
    pub fn for_testing(dir: impl AsRef<Path>) -> Self {
        let mut config = Self::new(dir);
        config.page.owner = "Test Author".to_string();
        config
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `PUBLICATIONS_DIR` and `PUBLICATIONS_OWNER`.
    pub fn from_env() -> anyhow::Result<Self> {
        let dir = std::env::var("PUBLICATIONS_DIR").unwrap_or_else(|_| defaults::DIR.to_string());
        let mut config = Self::new(dir);
        if let Ok(owner) = std::env::var("PUBLICATIONS_OWNER") {
            config.page.owner = owner;
        }
        Ok(config)
    }

    /// Switch the output format, keeping the output file's extension in step.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output = self.output.with_extension(format.extension());
        self.format = format;
        self
    }

    /// Set the row policy.
    #[must_use]
    pub const fn with_row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input, Path::new(".").join("publications.csv"));
        assert_eq!(config.output, Path::new(".").join("publications.html"));
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.row_policy, RowPolicy::Abort);
    }

    #[test]
    fn test_config_with_format() {
        let config = Config::new("site").with_format(OutputFormat::Json);
        assert_eq!(config.output, Path::new("site").join("publications.json"));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_columns() {
        assert!(columns::REQUIRED.iter().all(|c| columns::RECOGNIZED.contains(c)));
        assert!(columns::is_known("media"));
        assert!(columns::is_known("comment"));
        assert!(!columns::is_known("notes"));
    }
}
