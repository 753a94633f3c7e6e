//! Tests for CLI output formatting helpers

use cvsearch::cli::output::{format_field_list, format_weight, write_or_print};
use tempfile::TempDir;

#[test]
fn test_format_weight_values() {
    assert_eq!(format_weight(1.0), "1");
    assert_eq!(format_weight(0.5), "0.5");
    assert_eq!(format_weight(0.125), "0.125");
    assert_eq!(format_weight(10.0), "10");
    assert_eq!(format_weight(100.0), "100");
}

#[test]
fn test_format_weight_rounds_to_three_places() {
    assert_eq!(format_weight(0.3333), "0.333");
    assert_eq!(format_weight(1.0004), "1");
}

#[test]
fn test_format_weight_keeps_tiny_positive_weights() {
    assert_eq!(format_weight(0.0001), "0.0001");
    assert_eq!(format_weight(0.00025), "0.00025");
}

#[test]
fn test_format_field_list_values() {
    assert_eq!(format_field_list(&["generated_text"]), "generated_text");
    assert_eq!(
        format_field_list(&["age".to_string(), "gender".to_string()]),
        "age, gender"
    );
}

#[test]
fn test_write_or_print_to_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.json");
    write_or_print("{}", Some(&path)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
}
