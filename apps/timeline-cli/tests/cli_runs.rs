//! File-level tests for the CLI library

use clap::Parser;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use timeline_cli::{error_json, output_path, read_document, render, run, RunOptions};

fn document(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_document_is_an_error_object() {
    let options = RunOptions {
        document: "definitely/not/here.txt".into(),
        ..Default::default()
    };
    let err = run(&options).unwrap_err();
    let value: serde_json::Value = serde_json::from_str(&error_json(&err, false)).unwrap();

    assert_eq!(value["success"], false);
    assert!(value["error"]
        .as_str()
        .unwrap()
        .starts_with("Document not found"));
}

#[test]
fn test_missing_arguments_are_an_error_object() {
    let err = RunOptions::try_parse_from(["timeline-cli"]).unwrap_err();
    let json = error_json(&anyhow::Error::new(err), false);
    assert_eq!(json.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["events"], serde_json::json!([]));
    assert!(value["error"].as_str().unwrap().contains("--document"));
}

#[test]
fn test_arguments_parse_into_options() {
    let options =
        RunOptions::try_parse_from(["timeline-cli", "--document", "case.txt", "--pretty"]).unwrap();
    assert_eq!(options.document, std::path::PathBuf::from("case.txt"));
    assert!(options.pretty);
    assert!(options.output.is_none());
}

#[test]
fn test_non_utf8_document_is_read_lossily() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\xA9 Decided On: 04.11.2020\nAppellants: Rajnesh").unwrap();

    let text = read_document(file.path()).unwrap();
    assert!(text.starts_with('\u{FFFD}'));

    let options = RunOptions {
        document: file.path().to_path_buf(),
        ..Default::default()
    };
    let result = run(&options).unwrap();
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].id, "2020-11-04_1");
}

#[test]
fn test_directory_is_not_a_document() {
    let dir = TempDir::new().unwrap();
    let err = read_document(dir.path()).unwrap_err();
    assert!(format!("{:#}", err).starts_with("Document not found"));

    let file = document("Decided On: 04.11.2020");
    assert_eq!(read_document(file.path()).unwrap(), "Decided On: 04.11.2020");
}

#[test]
fn test_pages_split_on_form_feed() {
    let file = document("Decided On: 04.11.2020\u{c}The appeal was filed on 2021-01-15.");
    let options = RunOptions {
        document: file.path().to_path_buf(),
        ..Default::default()
    };
    let result = run(&options).unwrap();

    let ids: Vec<&str> = result.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["2020-11-04_1", "2021-01-15_1"]);

    let json = render(&result, false).unwrap();
    assert_eq!(json.lines().count(), 1);
}

#[test]
fn test_output_file_written_when_events_found() {
    let file = document("The petition was filed on 2019-05-06.");
    let out = TempDir::new().unwrap();
    let options = RunOptions {
        document: file.path().to_path_buf(),
        output: Some(out.path().to_path_buf()),
        pretty: true,
        ..Default::default()
    };
    let result = run(&options).unwrap();

    let written = fs::read_to_string(output_path(out.path(), file.path())).unwrap();
    let parsed: shared_types::TimelineResult = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed.events.len(), result.events.len());
    assert_eq!(parsed.events[0].id, "2019-05-06_1");
}

#[test]
fn test_no_output_file_without_events() {
    let file = document("Nothing dated here.");
    let out = TempDir::new().unwrap();
    let options = RunOptions {
        document: file.path().to_path_buf(),
        output: Some(out.path().to_path_buf()),
        ..Default::default()
    };
    let result = run(&options).unwrap();

    assert!(result.success);
    assert!(result.events.is_empty());
    assert!(!output_path(out.path(), file.path()).exists());
}

#[test]
fn test_bad_config_is_reported() {
    let file = document("The petition was filed on 2019-05-06.");
    let config = document("[scan]\ncontext_window = \"wide\"\n");
    let options = RunOptions {
        document: file.path().to_path_buf(),
        config: Some(config.path().to_path_buf()),
        ..Default::default()
    };
    let err = run(&options).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load config"));
}
