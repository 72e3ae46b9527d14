//! Tests for configuration layer precedence.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{apply_layer, build_config_from_layers};
use crate::MorselConfig;

#[rstest]
#[case::file_overrides_defaults(
    vec![
        ("defaults", json!({"no_clipboard": false})),
        ("file", json!({"no_clipboard": true}))
    ],
    "no_clipboard",
    true,
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![
        ("file", json!({"telemetry": true})),
        ("environment", json!({"telemetry": false}))
    ],
    "telemetry",
    false,
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![
        ("environment", json!({"list_catalog": false})),
        ("cli", json!({"list_catalog": true}))
    ],
    "list_catalog",
    true,
    "CLI should override environment"
)]
#[case::cli_wins_full_chain(
    vec![
        ("defaults", json!({"no_clipboard": false})),
        ("file", json!({"no_clipboard": true})),
        ("environment", json!({"no_clipboard": false})),
        ("cli", json!({"no_clipboard": true}))
    ],
    "no_clipboard",
    true,
    "CLI should win for no_clipboard"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: bool,
    #[case] message: &str,
) {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }

    let config = MorselConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    let actual = match field {
        "list_catalog" => config.list_catalog,
        "no_clipboard" => config.no_clipboard,
        "telemetry" => config.telemetry,
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, expected, "{message}");
}

#[rstest]
fn defaults_are_false_when_no_sources_provided() {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({
        "list_catalog": false,
        "no_clipboard": false,
        "telemetry": false
    }));

    let config = MorselConfig::merge_from_layers(composer.layers())
        .expect("merge should succeed with empty defaults");

    assert!(!config.list_catalog, "list_catalog should default to false");
    assert!(!config.no_clipboard, "no_clipboard should default to false");
    assert!(!config.telemetry, "telemetry should default to false");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = build_config_from_layers(&[
        ("file", json!({"no_clipboard": true, "telemetry": true})),
        ("cli", json!({"telemetry": false})),
    ]);

    assert!(
        config.no_clipboard,
        "file value should be preserved without a CLI override"
    );
    assert!(!config.telemetry, "CLI should override telemetry");
}
