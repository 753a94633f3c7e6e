//! Tests for the export-config command

use crate::common::create_test_services;
use cvsearch::cli::commands::export::{execute, ExportArgs};
use cvsearch::cli::OutputFormat;
use tempfile::TempDir;

#[test]
fn test_export_to_file() {
    let services = create_test_services();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("search-ui.json");

    let args = ExportArgs {
        output: Some(path.clone()),
    };
    execute(args, &services, OutputFormat::Human).expect("export should succeed");

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["connector"]["index"], "cv-transcriptions");
    assert_eq!(value["searchQuery"]["facets"]["gender"]["type"], "value");
    assert_eq!(value["searchQuery"]["result_fields"]["duration"]["raw"], serde_json::json!({}));
    assert_eq!(value["layout"]["header"][0]["widget"], "SearchBox");
    assert_eq!(value["layout"]["sideContent"].as_array().unwrap().len(), 4);
}

#[test]
fn test_export_to_stdout() {
    let services = create_test_services();
    let result = execute(ExportArgs { output: None }, &services, OutputFormat::Json);
    assert!(result.is_ok());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let services = create_test_services();
    let args = ExportArgs {
        output: Some("/nonexistent/dir/search-ui.json".into()),
    };
    assert!(execute(args, &services, OutputFormat::Human).is_err());
}
