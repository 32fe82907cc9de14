//! End-to-end generation tests.
//!
//! Full artifacts are compared against insta snapshots; the remaining tests
//! check the properties a consumer of the generated files relies on.

use design_tokens::{Artifacts, ImportOptions, TokenDocument, FALLBACK_FONT_STACK};
use insta::assert_snapshot;
use std::path::PathBuf;

const MINIMAL: &str = r##"{"colors": {"brand": {"500": "#ff0000"}, "accent": {}}, "typography": {}}"##;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/design-tokens.json")
}

fn fixture() -> TokenDocument {
    TokenDocument::from_file(fixture_path()).unwrap()
}

#[test]
fn test_snapshot_full_fixture() {
    let artifacts = Artifacts::generate(&fixture()).unwrap();
    assert_snapshot!("full_theme", artifacts.theme);
    assert_snapshot!("full_css", artifacts.css);
}

#[test]
fn test_snapshot_minimal_document() {
    let artifacts = Artifacts::generate(&TokenDocument::from_json(MINIMAL).unwrap()).unwrap();
    assert_snapshot!("minimal_theme", artifacts.theme);
    assert_snapshot!("minimal_css", artifacts.css);
}

#[test]
fn test_minimal_document_details() {
    let artifacts = Artifacts::generate(&TokenDocument::from_json(MINIMAL).unwrap()).unwrap();

    assert!(artifacts
        .theme
        .contains("    brand: {\n      500: '#ff0000',\n    },\n    accent: {\n    },\n"));
    assert_eq!(artifacts.theme.matches(FALLBACK_FONT_STACK).count(), 2);

    assert_eq!(artifacts.css.matches("--color-").count(), 1);
    assert!(artifacts.css.contains("  --color-brand-500: #ff0000;\n"));
    for absent in ["--color-accent-", "Scenario", "Site Creation", "PRISM"] {
        assert!(!artifacts.css.contains(absent), "unexpected {absent}");
    }
}

#[test]
fn test_theme_skips_out_of_scale_shades() {
    let artifacts = Artifacts::generate(&fixture()).unwrap();
    assert!(!artifacts.theme.contains("950"));
    assert!(artifacts.css.contains("--color-brand-950: #000a1a;"));
}

#[test]
fn test_empty_values_dropped_from_palettes() {
    let artifacts = Artifacts::generate(&fixture()).unwrap();
    assert!(!artifacts.theme.contains("900: ''"));
    assert!(!artifacts.css.contains("--color-accent-900"));
}

#[test]
fn test_generation_is_idempotent_from_file() {
    let options = ImportOptions {
        input: fixture_path(),
        ..ImportOptions::default()
    };
    let first = Artifacts::generate(&options.load().unwrap()).unwrap();
    let second = Artifacts::generate(&options.load().unwrap()).unwrap();
    assert_eq!(first.theme.as_bytes(), second.theme.as_bytes());
    assert_eq!(first.css.as_bytes(), second.css.as_bytes());
}
