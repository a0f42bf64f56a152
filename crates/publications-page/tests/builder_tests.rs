//! End-to-end build tests against a temporary directory.

use std::fs;
use std::path::Path;

use publications_page::config::Config;
use publications_page::models::{OutputFormat, RowPolicy, Section};
use publications_page::{BuildError, builder};

const FIXTURE: &str = include_str!("fixtures/publications.csv");

fn write_csv(dir: &Path, contents: &str) {
    fs::write(dir.join("publications.csv"), contents).unwrap();
}

#[test]
fn test_build_writes_html() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), FIXTURE);

    let config = Config::for_testing(dir.path());
    let summary = builder::build(&config).unwrap();

    assert_eq!(summary.output, dir.path().join("publications.html"));
    assert_eq!(summary.entries, 5);
    assert_eq!(summary.skipped, 0);
    assert_eq!(
        summary.sections,
        vec![(Section::Journal, 2), (Section::Working, 1), (Section::Conference, 1), (Section::Other, 1)]
    );

    let html = fs::read_to_string(&summary.output).unwrap();
    assert!(html.contains("Test Author"));
    assert!(html.contains("Gains from Trade Revisited"));
}

#[test]
fn test_build_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), FIXTURE);
    let config = Config::for_testing(dir.path());

    builder::build(&config).unwrap();
    let first = fs::read(&config.output).unwrap();
    builder::build(&config).unwrap();
    let second = fs::read(&config.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_header_only_csv_renders_no_sections() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "section,title,status,year,authors,venue,paper_url,slides_url,doi_url,abstract,bibtex,media\n");

    let summary = builder::build(&Config::for_testing(dir.path())).unwrap();
    assert_eq!(summary.entries, 0);
    assert!(summary.sections.is_empty());

    let html = fs::read_to_string(&summary.output).unwrap();
    assert_eq!(html.matches("<h2").count(), 0);
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::for_testing(dir.path());

    let err = builder::build(&config).unwrap_err();
    assert!(matches!(err, BuildError::MissingInput { .. }));
    assert!(!config.output.exists());
}

#[test]
fn test_failed_build_leaves_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), FIXTURE);
    let config = Config::for_testing(dir.path());
    builder::build(&config).unwrap();
    let before = fs::read(&config.output).unwrap();

    write_csv(dir.path(), "section,title,year\njournal,A\n");
    let err = builder::build(&config).unwrap_err();

    assert!(matches!(err, BuildError::MalformedRow { line: 2, expected: 3, found: 2 }));
    assert_eq!(fs::read(&config.output).unwrap(), before);
}

#[test]
fn test_skip_policy_build() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "section,title,year\njournal,A\njournal,B,2020\n");

    let config = Config::for_testing(dir.path()).with_row_policy(RowPolicy::Skip);
    let summary = builder::build(&config).unwrap();

    assert_eq!(summary.entries, 1);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn test_build_json() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), FIXTURE);

    let config = Config::for_testing(dir.path()).with_format(OutputFormat::Json);
    let summary = builder::build(&config).unwrap();
    assert_eq!(summary.output, dir.path().join("publications.json"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary.output).unwrap()).unwrap();
    assert_eq!(value["total"], 5);
    assert_eq!(value["sections"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_render_document_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), FIXTURE);
    let config = Config::for_testing(dir.path());

    let (catalog, document) = builder::render_document(&config).unwrap();
    assert_eq!(catalog.len(), 5);
    assert!(document.contains("<!DOCTYPE html>"));
    assert!(!config.output.exists());
}
