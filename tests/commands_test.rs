//! End-to-end command dispatch against rosters in temp directories

use std::fs;
use std::path::Path;

use clap::Parser;
use orgchart::cli::commands::execute_command;
use orgchart::cli::{Cli, CliError};
use orgchart::config::Settings;
use orgchart::exitcode;
use orgchart::infrastructure::di::ServiceContainer;
use orgchart::util::testing;
use rstest::rstest;
use tempfile::TempDir;

const ROSTER: &str = r#"
[[staff]]
id = 1
name = "Boss"
email = "boss@example.com"
job_title = "CEO"
salary = 10
role = "manager"

[[staff]]
id = 2
name = "Lead"
email = "lead@example.com"
job_title = "Lead"
salary = 5
role = "manager"
manager = 1

[[staff]]
id = 3
name = "Dev"
email = "dev@example.com"
job_title = "Developer"
salary = 3
manager = 1
"#;

fn setup() -> (TempDir, ServiceContainer) {
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("roster.toml"), ROSTER).unwrap();
    (dir, ServiceContainer::new(Settings::default()))
}

fn run(dir: &Path, container: &ServiceContainer, args: &[&str]) -> Result<(), CliError> {
    let roster = dir.join("roster.toml");
    let mut argv = vec!["orgchart", "--roster", roster.to_str().unwrap()];
    argv.extend_from_slice(args);
    execute_command(&Cli::try_parse_from(argv).unwrap(), container)
}

#[rstest]
#[case(&["tree"])]
#[case(&["list"])]
#[case(&["list", "--from", "2"])]
#[case(&["reports", "1"])]
#[case(&["reassign", "3", "2"])]
#[case(&["release", "3", "1"])]
fn given_valid_roster_when_running_command_then_succeeds(#[case] args: &[&str]) {
    let (dir, container) = setup();
    run(dir.path(), &container, args).unwrap();
}

#[test]
fn given_reassign_with_write_when_running_then_roster_updated() {
    let (dir, container) = setup();

    run(dir.path(), &container, &["reassign", "3", "2", "--write"]).unwrap();

    let hierarchy = container
        .rosters
        .load(&dir.path().join("roster.toml"))
        .unwrap();
    let lead = hierarchy.find_by_id(2).unwrap();
    let dev = hierarchy.find_by_id(3).unwrap();
    assert_eq!(hierarchy.reports(lead).unwrap(), &[dev][..]);
}

#[test]
fn given_reassign_without_write_when_running_then_roster_untouched() {
    let (dir, container) = setup();

    run(dir.path(), &container, &["reassign", "3", "2"]).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("roster.toml")).unwrap(),
        ROSTER
    );
}

#[rstest]
#[case(&["reports", "42"], exitcode::USAGE)]
#[case(&["reports", "3"], exitcode::DATAERR)]
#[case(&["reassign", "1", "3"], exitcode::DATAERR)]
#[case(&["reassign", "1", "2"], exitcode::DATAERR)]
fn given_invalid_request_when_running_then_exit_code(
    #[case] args: &[&str],
    #[case] expected: i32,
) {
    let (dir, container) = setup();

    let err = run(dir.path(), &container, args).unwrap_err();

    assert_eq!(err.exit_code(), expected, "{}", err);
}

#[test]
fn given_no_roster_anywhere_when_running_then_usage_error() {
    testing::init_test_setup();
    let container = ServiceContainer::new(Settings::default());
    let cli = Cli::try_parse_from(["orgchart", "tree"]).unwrap();

    let err = execute_command(&cli, &container).unwrap_err();

    assert!(matches!(err, CliError::Usage(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_count_command_when_running_then_reads_file() {
    let (dir, container) = setup();
    let input = dir.path().join("input1.txt");
    fs::write(&input, "eEe").unwrap();

    run(dir.path(), &container, &["count", input.to_str().unwrap()]).unwrap();
}

// ============================================================
// Rosters with a standalone employee
// ============================================================

const LONE_EMPLOYEE: &str = r#"
[[staff]]
id = 7
name = "Contractor"
email = "contractor@example.com"
job_title = "Consultant"
salary = 4
"#;

#[test]
fn given_employee_root_when_listing_all_then_listed_on_its_own() {
    let (dir, container) = setup();
    fs::write(
        dir.path().join("roster.toml"),
        format!("{}{}", ROSTER, LONE_EMPLOYEE),
    )
    .unwrap();

    run(dir.path(), &container, &["list"]).unwrap();
}

#[test]
fn given_employee_root_when_listing_from_it_then_data_error() {
    let (dir, container) = setup();
    fs::write(
        dir.path().join("roster.toml"),
        format!("{}{}", ROSTER, LONE_EMPLOYEE),
    )
    .unwrap();

    let err = run(dir.path(), &container, &["list", "--from", "7"]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR, "{}", err);
}

#[test]
fn given_employee_root_when_releasing_with_write_then_roster_keeps_it() {
    let (dir, container) = setup();
    let path = dir.path().join("roster.toml");
    fs::write(&path, format!("{}{}", ROSTER, LONE_EMPLOYEE)).unwrap();

    run(dir.path(), &container, &["release", "3", "1", "--write"]).unwrap();

    let hierarchy = container.rosters.load(&path).unwrap();
    let contractor = hierarchy.find_by_id(7).unwrap();
    let dev = hierarchy.find_by_id(3).unwrap();
    assert_eq!(hierarchy.manager_of(contractor).unwrap(), None);
    assert_eq!(hierarchy.manager_of(dev).unwrap(), None);
    assert_eq!(hierarchy.len(), 4);
}
