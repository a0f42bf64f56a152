//! Classification, grouping and ordering of publication entries.
//!
//! This is the pure core of the builder: raw records in, grouped and sorted
//! entries out. Nothing here touches the filesystem.

use std::collections::BTreeMap;

use crate::error::{BuildError, BuildResult};
use crate::models::{Entry, RawRecord, RowPolicy, Section};

/// Entries of one section, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup {
    /// The section.
    pub section: Section,

    /// Entries, newest first.
    pub entries: Vec<Entry>,
}

/// Publication entries grouped by section.
///
/// Only non-empty sections are present, in the fixed order
/// journal, working, conference, other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<SectionGroup>,
    skipped: usize,
}

impl Catalog {
    /// Classify raw records into a catalog.
    ///
    /// Rows that are malformed or lack a title are handled by `policy`:
    /// [`RowPolicy::Abort`] returns the first such error, [`RowPolicy::Skip`]
    /// drops the row with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MalformedRow`] or [`BuildError::MissingTitle`]
    /// under [`RowPolicy::Abort`].
    pub fn build<I>(records: I, policy: RowPolicy) -> BuildResult<Self>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut entries = Vec::new();
        let mut skipped = 0;

        for record in records {
            let result = match record {
                RawRecord::Row(row) => Entry::from_row(&row),
                RawRecord::Malformed { line, expected, found } => {
                    Err(BuildError::malformed_row(line, expected, found))
                }
            };

            match result {
                Ok(entry) => entries.push(entry),
                Err(e) if e.is_row_level() && policy.is_skip() => {
                    tracing::warn!(line = ?e.line(), error = %e, "Skipping row");
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let mut catalog = Self::from_entries(entries);
        catalog.skipped = skipped;
        Ok(catalog)
    }

    /// Group entries by section and sort each group.
    ///
    /// Within a section entries are ordered newest year first (unknown years
    /// last), then by title; entries that compare equal keep their input order.
    #[must_use]
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut buckets: BTreeMap<Section, Vec<Entry>> = BTreeMap::new();
        for entry in entries {
            buckets.entry(entry.section).or_default().push(entry);
        }

        let groups = buckets
            .into_iter()
            .map(|(section, mut entries)| {
                entries.sort_by(Entry::cmp_display);
                SectionGroup { section, entries }
            })
            .collect();

        Self { groups, skipped: 0 }
    }

    /// Non-empty sections in display order.
    #[must_use]
    pub fn groups(&self) -> &[SectionGroup] {
        &self.groups
    }

    /// Entries of one section; empty if the section has none.
    #[must_use]
    pub fn section(&self, section: Section) -> &[Entry] {
        self.groups
            .iter()
            .find(|g| g.section == section)
            .map(|g| g.entries.as_slice())
            .unwrap_or_default()
    }

    /// Total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Check if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of rows dropped under [`RowPolicy::Skip`].
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRow;

    fn record(line: u64, section: &str, title: &str, year: &str) -> RawRecord {
        RawRow::from_pairs(line, [("section", section), ("title", title), ("year", year)]).into()
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_sort_year_then_title() {
        let records = vec![
            record(2, "journal", "B", "2020"),
            record(3, "journal", "A", "2023"),
            record(4, "journal", "Z", "TBD"),
            record(5, "journal", "A", "2023"),
        ];

        let catalog = Catalog::build(records, RowPolicy::Abort).unwrap();
        let journal = catalog.section(Section::Journal);

        assert_eq!(titles(journal), vec!["A", "A", "B", "Z"]);
        assert_eq!(journal[0].line, 3, "equal entries keep CSV order");
        assert_eq!(journal[1].line, 5);
    }

    #[test]
    fn test_groups_in_fixed_order_without_empty_sections() {
        let records = vec![
            record(2, "misc", "Op-ed", "2019"),
            record(3, "Conference", "Talk", "2021"),
            record(4, "Journal", "Article", "2018"),
        ];

        let catalog = Catalog::build(records, RowPolicy::Abort).unwrap();
        let order: Vec<Section> = catalog.groups().iter().map(|g| g.section).collect();

        assert_eq!(order, vec![Section::Journal, Section::Conference, Section::Other]);
        assert!(catalog.section(Section::Working).is_empty());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_abort_on_malformed_row() {
        let records = vec![
            record(2, "journal", "A", "2020"),
            RawRecord::Malformed { line: 3, expected: 12, found: 4 },
        ];

        let err = Catalog::build(records, RowPolicy::Abort).unwrap_err();
        assert!(matches!(err, BuildError::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn test_skip_malformed_and_untitled_rows() {
        let records = vec![
            record(2, "journal", "A", "2020"),
            RawRecord::Malformed { line: 3, expected: 12, found: 4 },
            record(4, "journal", "", "2021"),
        ];

        let catalog = Catalog::build(records, RowPolicy::Skip).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::build(Vec::new(), RowPolicy::Abort).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.groups().is_empty());
    }
}
