//! Integration tests for the read → divide → render pipeline.
//!
//! These tests exercise the library functions that back the CLI,
//! using the public API from the classdivider crate.

use std::path::Path;

use pretty_assertions::assert_eq;

use classdivider::config::Config;
use classdivider::divider::{GroupPartitioner, divide, is_dividable};
use classdivider::env::Env;
use classdivider::models::{NameIndex, Student};
use classdivider::output::OutputFormat;
use classdivider::roster::{self, RosterError};

fn class_of_ten() -> Vec<Student> {
    roster::read_students(Path::new("tests/fixtures/class_of_ten.csv")).unwrap()
}

// ---------------------------------------------------------------------------
// roster
// ---------------------------------------------------------------------------

#[test]
fn fixture_roster_loads_in_file_order() {
    let students = class_of_ten();
    assert_eq!(students.len(), 10);
    assert_eq!(students[0], Student::new("Anna", "Bakker").with_id("s001"));
    assert_eq!(students[9].first_name, "Hanna");
}

#[test]
fn roster_with_bad_row_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "first_name,last_name\nAnna,Bakker\n,Smit\n").unwrap();

    let err = roster::read_students(&path).unwrap_err();
    assert!(matches!(err, RosterError::MissingFirstName { line: 3 }), "got: {err}");
}

// ---------------------------------------------------------------------------
// divide
// ---------------------------------------------------------------------------

#[test]
fn class_of_ten_into_fives() {
    let partition = divide(&class_of_ten(), 5, 0);
    assert_eq!(partition.sizes(), vec![5, 5]);
}

#[test]
fn class_of_ten_into_threes_with_deviation() {
    let partition = divide(&class_of_ten(), 3, 1);
    assert_eq!(partition.sizes(), vec![4, 3, 3]);
}

#[test]
fn class_of_ten_into_fours_without_deviation() {
    let students = class_of_ten();
    assert!(!is_dividable(students.len(), 4, 0));
    assert!(divide(&students, 4, 0).is_empty());
}

#[test]
fn empty_class_is_not_dividable() {
    let students: Vec<Student> = Vec::new();
    assert!(divide(&students, 3, 1).is_empty());
}

#[test]
fn every_student_lands_in_exactly_one_group() {
    let students = class_of_ten();
    let partition = GroupPartitioner::new(3, 1).divide(&students);
    let mut ids: Vec<_> = partition
        .iter()
        .flat_map(|g| g.iter())
        .filter_map(|s| s.id.clone())
        .collect();
    ids.sort();
    let mut expected: Vec<_> = students.iter().filter_map(|s| s.id.clone()).collect();
    expected.sort();
    assert_eq!(ids, expected);
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn snapshot_terminal_output() {
    colored::control::set_override(false);
    let students = class_of_ten();
    let partition = divide(&students, 3, 1);
    let names = NameIndex::from_students(&students);

    let output = OutputFormat::Terminal.render(&partition, &names);
    let expected =
        std::fs::read_to_string("tests/fixtures/expected_terminal_output.txt").unwrap();

    assert_eq!(output, expected);
}

#[test]
fn json_output_matches_partition() {
    let students = class_of_ten();
    let partition = divide(&students, 5, 0);
    let names = NameIndex::from_students(&students);

    let output = OutputFormat::Json.render(&partition, &names);
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["groups"], 2);
    assert_eq!(parsed["summary"]["students"], 10);
    assert_eq!(parsed["groups"][0]["members"][0]["name"], "Anna B");
    assert_eq!(parsed["groups"][1]["members"][4]["id"], "s010");
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn local_config_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".classdivider.toml"),
        "[divide]\ndeviation = 0\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let env = Env::mock(Vec::<(&str, &str)>::new());
    let config = Config::load_from(None, Some(dir.path()), &env).unwrap();
    assert_eq!(config.divide.deviation, 0);
    assert_eq!(config.output.format, OutputFormat::Json);

    let partition = divide(&class_of_ten(), 5, config.divide.deviation);
    assert_eq!(partition.sizes(), vec![5, 5]);
}
