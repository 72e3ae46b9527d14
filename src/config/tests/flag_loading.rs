//! Tests for CLI flag and configuration file loading.

use ortho_config::OrthoConfig;
use rstest::rstest;

use crate::MorselConfig;

/// Loads a [`MorselConfig`] from the given CLI arguments with file
/// discovery pointed at an empty temporary home.
///
/// Note: `ortho_config` does not support loading boolean values from
/// environment variables, so only CLI flags and config files are
/// tested for real loading.
fn load_with_cli_args(cli_args: &[&str]) -> MorselConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let mut args: Vec<std::ffi::OsString> = vec![std::ffi::OsString::from("morsel")];
    args.extend(cli_args.iter().map(std::ffi::OsString::from));

    MorselConfig::load_from_iter(args).expect("config should load")
}

#[rstest]
fn all_flags_default_to_false() {
    let config = load_with_cli_args(&[]);

    assert!(!config.list_catalog, "list_catalog should default to false");
    assert!(!config.no_clipboard, "no_clipboard should default to false");
    assert!(!config.telemetry, "telemetry should default to false");
}

#[rstest]
#[case::long_flag(&["--list-catalog"])]
#[case::short_flag(&["-l"])]
fn list_catalog_loads_from_cli(#[case] args: &[&str]) {
    let config = load_with_cli_args(args);

    assert!(config.list_catalog, "expected {args:?} to set list_catalog");
}

#[rstest]
fn no_clipboard_loads_from_cli_flag() {
    let config = load_with_cli_args(&["--no-clipboard"]);

    assert!(config.no_clipboard, "expected --no-clipboard to set flag");
}

#[rstest]
fn telemetry_loads_from_cli_flag() {
    let config = load_with_cli_args(&["--telemetry"]);

    assert!(config.telemetry, "expected --telemetry to set flag");
}

#[rstest]
fn flags_combine_independently() {
    let config = load_with_cli_args(&["--no-clipboard", "--telemetry"]);

    assert!(!config.list_catalog);
    assert!(config.no_clipboard);
    assert!(config.telemetry);
}
