//! Error types for the publications page builder.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;

/// Errors raised while building the publications page.
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    /// The input CSV does not exist.
    #[error("Input file not found: {}", path.display())]
    MissingInput {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The header row lacks one or more required columns.
    #[error("Missing required column(s): {}", missing.join(", "))]
    MissingColumns {
        /// Names of the absent columns
        missing: Vec<String>,
    },

    /// A record's field count differs from the header's.
    #[error("Malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        /// 1-based line number of the record
        line: u64,
        /// Number of header columns
        expected: usize,
        /// Number of fields in the record
        found: usize,
    },

    /// A record has an empty `title`.
    #[error("Row at line {line} has no title")]
    MissingTitle {
        /// 1-based line number of the record
        line: u64,
    },

    /// CSV syntax or encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuildError {
    /// Create a missing input error.
    #[must_use]
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    /// Create a missing columns error.
    #[must_use]
    pub fn missing_columns<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingColumns { missing: missing.into_iter().map(Into::into).collect() }
    }

    /// Create a malformed row error.
    #[must_use]
    pub const fn malformed_row(line: u64, expected: usize, found: usize) -> Self {
        Self::MalformedRow { line, expected, found }
    }

    /// Returns true if this is a record-level error the skip policy may drop.
    #[must_use]
    pub const fn is_row_level(&self) -> bool {
        matches!(self, Self::MalformedRow { .. } | Self::MissingTitle { .. })
    }

    /// Line number of the offending record, for row-level errors.
    #[must_use]
    pub const fn line(&self) -> Option<u64> {
        match self {
            Self::MalformedRow { line, .. } | Self::MissingTitle { line } => Some(*line),
            _ => None,
        }
    }

    /// Convert to an operator-facing message with a hint on how to fix it.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::MissingInput { path } => {
                format!(
                    "{} not found. Create the CSV (header: section,title,status,year,...) and run again.",
                    path.display()
                )
            }
            Self::MissingColumns { missing } => {
                format!("The CSV header must include: {}", missing.join(", "))
            }
            Self::MalformedRow { line, .. } | Self::MissingTitle { line } => {
                format!("{self}. Fix line {line} or rerun with --skip-malformed.")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for build operations.
pub type BuildResult<T> = Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_level_errors() {
        assert!(BuildError::malformed_row(3, 12, 11).is_row_level());
        assert!(BuildError::MissingTitle { line: 4 }.is_row_level());

        assert!(!BuildError::missing_input("publications.csv").is_row_level());
        assert!(!BuildError::missing_columns(["title"]).is_row_level());
    }

    #[test]
    fn test_error_line() {
        assert_eq!(BuildError::malformed_row(7, 12, 3).line(), Some(7));
        assert_eq!(BuildError::MissingTitle { line: 2 }.line(), Some(2));
        assert_eq!(BuildError::missing_input("x.csv").line(), None);
    }

    #[test]
    fn test_display_messages() {
        let err = BuildError::missing_columns(["section", "title"]);
        assert_eq!(err.to_string(), "Missing required column(s): section, title");

        let err = BuildError::malformed_row(5, 12, 10);
        assert_eq!(err.to_string(), "Malformed row at line 5: expected 12 fields, found 10");
    }

    #[test]
    fn test_user_message_hints() {
        let err = BuildError::missing_input("data/publications.csv");
        assert!(err.to_user_message().contains("data/publications.csv"));
        assert!(err.to_user_message().contains("run again"));

        let err = BuildError::MissingTitle { line: 9 };
        assert!(err.to_user_message().contains("line 9"));
        assert!(err.to_user_message().contains("--skip-malformed"));
    }
}
