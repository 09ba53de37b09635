//! Tests for the e/E character counter

use std::fs;
use std::sync::Arc;

use orgchart::application::services::CharCountService;
use orgchart::application::ApplicationError;
use orgchart::domain::CharCount;
use orgchart::infrastructure::traits::RealFileSystem;
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[case("", 0, 0)]
#[case("eEe", 3, 3)]
#[case("The quick brown fox\n", 1, 20)]
#[case("no match here? yes: every", 5, 25)]
fn given_text_when_tally_then_counts(
    #[case] text: &str,
    #[case] num_e: usize,
    #[case] total: usize,
) {
    assert_eq!(CharCount::tally(text), CharCount { num_e, total });
}

#[test]
fn given_file_when_counting_then_reports_exact_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input1.txt");
    fs::write(&path, "Eleven elephants\n").unwrap();
    let service = CharCountService::new(Arc::new(RealFileSystem));

    let count = service.count(&path).unwrap();

    assert_eq!(count.to_string(), "Number of e/E's: 5 out of 17");
}

#[test]
fn given_missing_file_when_counting_then_not_found() {
    let dir = TempDir::new().unwrap();
    let service = CharCountService::new(Arc::new(RealFileSystem));

    let result = service.count(&dir.path().join("input1.txt"));

    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}
