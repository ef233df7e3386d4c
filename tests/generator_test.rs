// tests/generator_test.rs
use release_note::config::Config;
use release_note::host::MockHost;
use release_note::note::{write_note, ReleaseNoteGenerator};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn config_with_output(output_path: PathBuf) -> Config {
    Config {
        owner: "octocat".to_string(),
        repo: "hello-world".to_string(),
        base: "main".to_string(),
        head: "abc123".to_string(),
        output_path,
        token: None,
        api_url: "https://api.github.com".to_string(),
    }
}

#[test]
fn test_generate_and_write_note() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("RELEASE_NOTE.txt");
    let config = config_with_output(output.clone());

    let host = MockHost::with_messages(&[
        "feat: add login",
        "chore: cleanup",
        "fixed: null pointer",
        "perf: reduce allocations",
    ]);

    let note = ReleaseNoteGenerator::new(&config, &host).generate().unwrap();
    write_note(&config.output_path, &note).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "[Feature] add login\n[Fix] null pointer\n[Performance] reduce allocations\n"
    );
    // File content and in-memory note are the same string
    assert_eq!(written, note);
}

#[test]
fn test_second_run_overwrites_instead_of_appending() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("RELEASE_NOTE.txt");
    let config = config_with_output(output.clone());

    let host = MockHost::with_messages(&["feat: add login", "fixed: null pointer"]);
    let generator = ReleaseNoteGenerator::new(&config, &host);

    let first = generator.generate().unwrap();
    write_note(&config.output_path, &first).unwrap();
    let size_after_first = fs::metadata(&output).unwrap().len();

    let second = generator.generate().unwrap();
    write_note(&config.output_path, &second).unwrap();
    let size_after_second = fs::metadata(&output).unwrap().len();

    assert_eq!(first, second);
    assert_eq!(size_after_first, size_after_second);
    assert_eq!(fs::read_to_string(&output).unwrap(), second);
}

#[test]
fn test_overwrite_replaces_longer_previous_content() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("RELEASE_NOTE.txt");
    let config = config_with_output(output.clone());

    fs::write(&output, "stale note from a previous run, much longer than the new one\n").unwrap();

    let host = MockHost::with_messages(&["feat: tiny"]);
    let note = ReleaseNoteGenerator::new(&config, &host).generate().unwrap();
    write_note(&config.output_path, &note).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "[Feature] tiny\n");
}

#[test]
fn test_empty_range_writes_empty_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("RELEASE_NOTE.txt");
    let config = config_with_output(output.clone());

    let host = MockHost::new();
    let note = ReleaseNoteGenerator::new(&config, &host).generate().unwrap();
    write_note(&config.output_path, &note).unwrap();

    assert_eq!(note, "");
    assert_eq!(fs::metadata(&output).unwrap().len(), 0);
}

#[test]
fn test_fetch_failure_leaves_no_file_behind() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("RELEASE_NOTE.txt");
    let config = config_with_output(output.clone());

    let mut host = MockHost::new();
    host.fail_with("Not Found");
    let result = ReleaseNoteGenerator::new(&config, &host).generate();

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Not Found"));
    // The write step never ran, so no partial file exists
    assert!(!output.exists());
}

#[test]
fn test_write_failure_is_an_io_error() {
    let dir = tempdir().unwrap();
    let missing_dir = dir.path().join("does-not-exist").join("RELEASE_NOTE.txt");

    let err = write_note(&missing_dir, "note\n").unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}
