//! Runs the `exemplars-generate` binary end to end

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use locale_exemplars::writer::{GZIP_FILE, MINIFIED_FILE, PRETTY_FILE};
use locale_exemplars::ExemplarsConfig;

fn manifest_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Config with absolute paths, saved into `dir`
fn write_config(dir: &Path, schema: PathBuf) -> PathBuf {
    let mut config = ExemplarsConfig::default();
    config.output.dir = dir.join("docs");
    config.schema.path = schema;
    config.provider.supplement = manifest_path("data/cldr-supplement.json");

    let path = dir.join("exemplars-test.toml");
    config.save(&path).unwrap();
    path
}

fn generate(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_exemplars-generate"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_generate_writes_three_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), manifest_path("schema.json"));

    let output = generate(dir.path(), &["--config", config.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(output.status.code(), Some(0));

    let version_dir = dir.path().join("docs").join("v1");
    for file in [PRETTY_FILE, MINIFIED_FILE, GZIP_FILE] {
        assert!(version_dir.join(file).is_file(), "missing {file}");
    }
}

#[test]
fn test_missing_schema_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), dir.path().join("no-such-schema.json"));

    let output = generate(dir.path(), &["--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    assert!(!dir.path().join("docs").exists(), "nothing may be written");
}

#[test]
fn test_schema_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), manifest_path("schema.json"));
    let missing = dir.path().join("missing.json");

    let output = generate(
        dir.path(),
        &["--config", config.to_str().unwrap(), "--schema", missing.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_write_config_saves_effective_settings() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("written.toml");

    let output = generate(
        dir.path(),
        &["--output", "public", "--write-config", target.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(0));

    let saved = ExemplarsConfig::load_from(Some(target.to_str().unwrap())).unwrap();
    assert_eq!(saved.output.dir, PathBuf::from("public"));
    assert_eq!(saved.output.api_version, "v1");
    assert!(!dir.path().join("public").exists());
}
