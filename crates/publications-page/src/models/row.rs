//! Raw CSV records before classification.

use std::collections::BTreeMap;

/// One CSV record as a column-name → value map.
///
/// Lookups are default-absent: a missing column and an empty cell both read as `""`,
/// so columns added to the CSV later are inert until something asks for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    line: u64,
    fields: BTreeMap<String, String>,
}

impl RawRow {
    /// Create a row from its 1-based line number and its cells.
    #[must_use]
    pub fn new(line: u64, fields: BTreeMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// Create a row from `(column, value)` pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(line: u64, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(line, pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Line number of the record in the CSV file.
    #[must_use]
    pub const fn line(&self) -> u64 {
        self.line
    }

    /// Value of a column, or `""` when the column is absent.
    #[must_use]
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map_or("", String::as_str)
    }

    /// All cells, ordered by column name.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A record as read from the CSV, before the row policy is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecord {
    /// Record with one field per header column.
    Row(RawRow),

    /// Record whose field count differs from the header's.
    Malformed {
        /// 1-based line number of the record
        line: u64,
        /// Number of header columns
        expected: usize,
        /// Number of fields found
        found: usize,
    },
}

impl RawRecord {
    /// Line number of the record in the CSV file.
    #[must_use]
    pub const fn line(&self) -> u64 {
        match self {
            Self::Row(row) => row.line(),
            Self::Malformed { line, .. } => *line,
        }
    }
}

impl From<RawRow> for RawRecord {
    fn from(row: RawRow) -> Self {
        Self::Row(row)
    }
}
