//! Classification and ordering tests over whole CSV inputs.

use publications_page::models::{RowPolicy, Section, SortYear};
use publications_page::{BuildError, Catalog, reader};

const FIXTURE: &str = include_str!("fixtures/publications.csv");

fn catalog_from(csv: &str, policy: RowPolicy) -> Result<Catalog, BuildError> {
    let records = reader::read_rows(csv.as_bytes())?;
    Catalog::build(records, policy)
}

fn titles(catalog: &Catalog, section: Section) -> Vec<String> {
    catalog.section(section).iter().map(|e| e.title.clone()).collect()
}

// =============================================================================
// Fixture
// =============================================================================

#[test]
fn test_fixture_sections() {
    let catalog = catalog_from(FIXTURE, RowPolicy::Abort).unwrap();

    let order: Vec<Section> = catalog.groups().iter().map(|g| g.section).collect();
    assert_eq!(order, Section::ALL.to_vec());

    assert_eq!(titles(&catalog, Section::Journal), vec!["Tariffs and Welfare", "Gains from Trade Revisited"]);
    assert_eq!(titles(&catalog, Section::Working), vec!["Networks of Suppliers"]);
    assert_eq!(titles(&catalog, Section::Conference), vec!["A Conference Talk"]);
    assert_eq!(titles(&catalog, Section::Other), vec!["An Op-ed"]);
    assert_eq!(catalog.len(), 5);
}

#[test]
fn test_fixture_years() {
    let catalog = catalog_from(FIXTURE, RowPolicy::Abort).unwrap();

    assert_eq!(catalog.section(Section::Working)[0].sort_year, SortYear::Year(2022));
    assert_eq!(catalog.section(Section::Other)[0].sort_year, SortYear::Unknown);
}

#[test]
fn test_fixture_authors_and_media() {
    let catalog = catalog_from(FIXTURE, RowPolicy::Abort).unwrap();
    let journal = catalog.section(Section::Journal);

    assert_eq!(journal[0].authors_line().as_deref(), Some("solo"));
    assert_eq!(journal[1].authors_line().as_deref(), Some("with Ada Lovelace; Alan Turing"));
    assert_eq!(journal[1].media_count(), 2);
    assert_eq!(journal[1].extra.get("jel_codes").map(String::as_str), Some("F10; F14"));
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_year_desc_then_title() {
    let csv = "section,title,year\n\
               journal,B,2020\n\
               journal,A,2023\n\
               journal,Z,\n\
               journal,Z,2023\n\
               journal,A,2023\n";
    let catalog = catalog_from(csv, RowPolicy::Abort).unwrap();
    let journal = catalog.section(Section::Journal);

    let order: Vec<(&str, Option<u16>)> =
        journal.iter().map(|e| (e.title.as_str(), e.sort_year.value())).collect();
    assert_eq!(
        order,
        vec![
            ("A", Some(2023)),
            ("A", Some(2023)),
            ("Z", Some(2023)),
            ("B", Some(2020)),
            ("Z", None),
        ]
    );
}

#[test]
fn test_no_year_sorts_last_even_with_early_title() {
    let csv = "section,title,year\nworking,Aardvark,n.d.\nworking,Zebra,1901\n";
    let catalog = catalog_from(csv, RowPolicy::Abort).unwrap();

    assert_eq!(titles(&catalog, Section::Working), vec!["Zebra", "Aardvark"]);
}

#[test]
fn test_title_order_is_case_insensitive() {
    let csv = "section,title,year\nconf,beta,2020\nconf,Alpha,2020\nconf,alpha,2020\n";
    let catalog = catalog_from(csv, RowPolicy::Abort).unwrap();

    assert_eq!(titles(&catalog, Section::Conference), vec!["Alpha", "alpha", "beta"]);
}

// =============================================================================
// Row Policy
// =============================================================================

#[test]
fn test_missing_title_aborts_by_default() {
    let csv = "section,title,year\njournal,A,2020\njournal,,2021\n";
    let err = catalog_from(csv, RowPolicy::Abort).unwrap_err();

    assert!(matches!(err, BuildError::MissingTitle { line: 3 }));
}

#[test]
fn test_skip_policy_keeps_good_rows() {
    let csv = "section,title,year\njournal,A,2020\njournal,,2021\nworking,B\nworking,C,2019\n";
    let catalog = catalog_from(csv, RowPolicy::Skip).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.skipped(), 2);
    assert_eq!(titles(&catalog, Section::Working), vec!["C"]);
}

#[test]
fn test_unparseable_year_is_not_an_error() {
    let csv = "section,title,year\njournal,A,sometime\n";
    let catalog = catalog_from(csv, RowPolicy::Abort).unwrap();

    assert_eq!(catalog.section(Section::Journal)[0].sort_year, SortYear::Unknown);
    assert_eq!(catalog.skipped(), 0);
}

#[test]
fn test_header_only_is_empty() {
    let catalog = catalog_from("section,title\n", RowPolicy::Abort).unwrap();
    assert!(catalog.is_empty());
}
