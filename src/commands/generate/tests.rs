//! Tests for receipt generation.

use super::*;
use crate::error::ReceiptError;
use crate::exit_codes;
use crate::test_support::{DirGuard, create_work_dir, list_files};
use serial_test::serial;
use std::fs;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
}

fn daycare_inputs() -> RawInputs {
    RawInputs {
        provider: "Jane Doe Daycare".to_string(),
        address: "123 Main St".to_string(),
        taxid: "12-3456789".to_string(),
        child: "Sam".to_string(),
        date: Some("2024-06-01".to_string()),
        amount: "450".to_string(),
        output: None,
    }
}

const DAYCARE_RECEIPT: &str = "**Provider Name:**
Jane Doe Daycare

**Provider Address:**
123 Main St

**Tax ID Number:**
12-3456789

**Care For:**
Sam

**Date(s):**
2024-06-01

**Amount:**
$450
";

#[test]
#[serial]
fn generate_end_to_end_with_derived_filename() {
    let work_dir = create_work_dir();
    let _guard = DirGuard::new(work_dir.path());

    let written = cmd_generate(daycare_inputs(), today()).unwrap();

    assert_eq!(written, PathBuf::from("2024-06-01_receipt.md"));
    let content = fs::read_to_string(work_dir.path().join("2024-06-01_receipt.md")).unwrap();
    assert_eq!(content, DAYCARE_RECEIPT);
    assert_eq!(list_files(work_dir.path()), vec!["2024-06-01_receipt.md"]);
}

#[test]
#[serial]
fn generate_without_date_uses_today() {
    let work_dir = create_work_dir();
    let _guard = DirGuard::new(work_dir.path());

    let inputs = RawInputs {
        date: None,
        ..daycare_inputs()
    };
    let written = cmd_generate(inputs, today()).unwrap();

    assert_eq!(written, PathBuf::from("2025-02-14_receipt.md"));
    let content = fs::read_to_string(work_dir.path().join(&written)).unwrap();
    assert!(content.contains("**Date(s):**\n2025-02-14\n"));
}

#[test]
#[serial]
fn generate_with_descriptive_date_uses_prefix_for_filename() {
    let work_dir = create_work_dir();
    let _guard = DirGuard::new(work_dir.path());

    let inputs = RawInputs {
        date: Some("2024-03-15 (two visits)".to_string()),
        ..daycare_inputs()
    };
    let written = cmd_generate(inputs, today()).unwrap();

    assert_eq!(written, PathBuf::from("2024-03-15_receipt.md"));
    let content = fs::read_to_string(work_dir.path().join(&written)).unwrap();
    assert!(content.contains("**Date(s):**\n2024-03-15 (two visits)\n"));
}

#[test]
#[serial]
fn generate_with_unparsable_date_falls_back_to_today() {
    let work_dir = create_work_dir();
    let _guard = DirGuard::new(work_dir.path());

    let inputs = RawInputs {
        date: Some("not-a-date".to_string()),
        ..daycare_inputs()
    };
    let written = cmd_generate(inputs, today()).unwrap();

    assert_eq!(written, PathBuf::from("2025-02-14_receipt.md"));
    assert!(work_dir.path().join("2025-02-14_receipt.md").exists());
}

#[test]
#[serial]
fn generate_twice_is_byte_identical() {
    let work_dir = create_work_dir();
    let _guard = DirGuard::new(work_dir.path());

    let path = cmd_generate(daycare_inputs(), today()).unwrap();
    let first = fs::read(work_dir.path().join(&path)).unwrap();
    cmd_generate(daycare_inputs(), today()).unwrap();
    let second = fs::read(work_dir.path().join(&path)).unwrap();

    assert_eq!(first, second);
    assert_eq!(list_files(work_dir.path()), vec!["2024-06-01_receipt.md"]);
}

#[test]
#[serial]
fn generate_with_missing_fields_writes_nothing() {
    let work_dir = create_work_dir();
    let _guard = DirGuard::new(work_dir.path());

    let cases = [
        RawInputs {
            provider: String::new(),
            ..daycare_inputs()
        },
        RawInputs {
            address: String::new(),
            ..daycare_inputs()
        },
        RawInputs {
            child: String::new(),
            ..daycare_inputs()
        },
        RawInputs {
            amount: String::new(),
            ..daycare_inputs()
        },
        RawInputs {
            provider: String::new(),
            child: String::new(),
            ..daycare_inputs()
        },
        RawInputs::default(),
    ];

    for inputs in cases {
        let err = cmd_generate(inputs, today()).unwrap_err();
        assert!(matches!(err, ReceiptError::MissingRequiredField(_)));
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    assert!(list_files(work_dir.path()).is_empty());
}

#[test]
fn generate_to_explicit_output_path() {
    let work_dir = create_work_dir();
    let output = work_dir.path().join("custom.md");

    let inputs = RawInputs {
        output: Some(output.clone()),
        ..daycare_inputs()
    };
    let written = cmd_generate(inputs, today()).unwrap();

    assert_eq!(written, output);
    assert_eq!(fs::read_to_string(&output).unwrap(), DAYCARE_RECEIPT);
}

#[test]
fn generate_overwrites_existing_output() {
    let work_dir = create_work_dir();
    let output = work_dir.path().join("receipt.md");
    fs::write(&output, "stale receipt\n").unwrap();

    let inputs = RawInputs {
        output: Some(output.clone()),
        ..daycare_inputs()
    };
    cmd_generate(inputs, today()).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), DAYCARE_RECEIPT);
}

#[test]
fn generate_to_unwritable_path_reports_output_error() {
    let work_dir = create_work_dir();
    let output = work_dir.path().join("missing_dir").join("receipt.md");

    let inputs = RawInputs {
        output: Some(output.clone()),
        ..daycare_inputs()
    };
    let err = cmd_generate(inputs, today()).unwrap_err();

    match &err {
        ReceiptError::OutputWrite { path, .. } => assert_eq!(path, &output),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.exit_code(), exit_codes::FAILURE);
    assert!(list_files(work_dir.path()).is_empty());
}

#[test]
fn generate_keeps_existing_dollar_amount() {
    let work_dir = create_work_dir();
    let output = work_dir.path().join("receipt.md");

    let inputs = RawInputs {
        amount: "$1,200.50".to_string(),
        taxid: String::new(),
        output: Some(output.clone()),
        ..daycare_inputs()
    };
    cmd_generate(inputs, today()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.ends_with("**Amount:**\n$1,200.50\n"));
    assert!(content.contains("**Tax ID Number:**\n\n"));
}
