use fleetdoc::{EnvironmentSetting, PipelineError, Settings};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn file_values_override_defaults() {
    let file = toml_file(
        r#"
[renderer]
environment = "hosted"
hosted_chromium_path = "/opt/chromium/chromium"
grace_delay_ms = 250
margin_mm = 12.5
extra_args = ["--lang=nb-NO"]

[fallback]
max_lines = 40
"#,
    );

    let settings = Settings::load_from(Some(file.path())).unwrap();
    assert_eq!(settings.renderer.environment, EnvironmentSetting::Hosted);
    assert_eq!(
        settings.renderer.hosted_chromium_path,
        Some(PathBuf::from("/opt/chromium/chromium"))
    );
    assert_eq!(settings.renderer.grace_delay_ms, 250);
    assert_eq!(settings.renderer.margin_mm, 12.5);
    assert_eq!(settings.renderer.extra_args, vec!["--lang=nb-NO".to_string()]);
    assert_eq!(settings.fallback.max_lines, 40);
    assert_eq!(settings.fallback.max_chars_per_line, 90);
}

#[test]
fn empty_file_gives_defaults() {
    let file = toml_file("");
    let settings = Settings::load_from(Some(file.path())).unwrap();
    assert_eq!(settings.renderer.environment, EnvironmentSetting::Auto);
    assert_eq!(settings.fallback.max_chars_per_line, 90);
    assert_eq!(settings.renderer.grace_delay_ms, 500);
}

#[test]
fn zero_line_budget_is_rejected() {
    let file = toml_file("[fallback]\nmax_lines = 0\n");
    let result = Settings::load_from(Some(file.path()));
    assert!(matches!(result, Err(PipelineError::Config(_))), "{result:?}");
}

#[test]
fn unknown_environment_is_rejected() {
    let file = toml_file("[renderer]\nenvironment = \"cloud\"\n");
    let result = Settings::load_from(Some(file.path()));
    assert!(matches!(result, Err(PipelineError::Settings(_))), "{result:?}");
}

#[test]
fn environment_variables_override_file() {
    let file = toml_file("[renderer]\nnavigation_timeout_ms = 5000\n");

    // Keys touched here are not asserted by any other test in this file.
    unsafe {
        std::env::set_var("FLEETDOC__RENDERER__NAVIGATION_TIMEOUT_MS", "1234");
        std::env::set_var("FLEETDOC__FALLBACK__MAX_EXTRACTED_CHARS", "777");
    }
    let settings = Settings::load_from(Some(file.path()));
    unsafe {
        std::env::remove_var("FLEETDOC__RENDERER__NAVIGATION_TIMEOUT_MS");
        std::env::remove_var("FLEETDOC__FALLBACK__MAX_EXTRACTED_CHARS");
    }

    let settings = settings.unwrap();
    assert_eq!(settings.renderer.navigation_timeout_ms, 1234);
    assert_eq!(settings.fallback.max_extracted_chars, 777);
}
