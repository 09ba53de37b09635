//! Environment layer of Settings loading.
//!
//! Kept in its own test binary with a single test: it sets process-wide
//! ORGCHART_* variables that would leak into the file-layer tests.

use std::env;
use std::fs;
use std::path::PathBuf;

use orgchart::config::Settings;
use tempfile::TempDir;

#[test]
fn given_orgchart_env_vars_when_load_then_they_override_global_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("orgchart.toml");
    fs::write(&config_path, "roster = \"/srv/hr/roster.toml\"\ncolor = true\n").unwrap();
    env::set_var("ORGCHART_ROSTER", "/env/roster.toml");
    env::set_var("ORGCHART_COLOR", "false");

    let from_file = Settings::load_from(Some(&config_path));
    let env_only = Settings::load_from(None);

    env::remove_var("ORGCHART_ROSTER");
    env::remove_var("ORGCHART_COLOR");

    let from_file = from_file.unwrap();
    assert_eq!(from_file.roster, Some(PathBuf::from("/env/roster.toml")));
    assert!(!from_file.color);

    let env_only = env_only.unwrap();
    assert_eq!(env_only.roster, Some(PathBuf::from("/env/roster.toml")));
    assert!(!env_only.color);
    assert_eq!(env_only.count_input, PathBuf::from("input1.txt"));
}
