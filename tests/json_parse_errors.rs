//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by runtime parse diagnostics.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.

use sagemaker_json::json::parse::{self, ParseFailureCategory};
use sagemaker_json::model::algorithm::AlgorithmSummary;

#[test]
fn category_mapping_handles_syntax_and_eof() {
    let syntax_err = parse::from_str::<AlgorithmSummary>(r#"{"AlgorithmName":}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&syntax_err),
        ParseFailureCategory::Syntax
    );

    let eof_err = parse::from_str::<AlgorithmSummary>(r#"{"AlgorithmName":"a""#).unwrap_err();
    assert_eq!(parse::categorize_error(&eof_err), ParseFailureCategory::Eof);
}

#[test]
fn category_mapping_handles_type_mismatch() {
    let data_err =
        parse::from_str::<AlgorithmSummary>(r#"{"CreationTime":{"at":"now"}}"#).unwrap_err();
    assert_eq!(parse::categorize_error(&data_err), ParseFailureCategory::Data);
}

#[test]
fn hint_includes_category_position_and_context() {
    let err = parse::from_str::<AlgorithmSummary>("{\n  \"AlgorithmName\": ]").unwrap_err();
    let hint = parse::hint_for_error(&err, "ListAlgorithms");
    assert!(hint.starts_with("parse category: syntax; line 2 column"));
    assert!(hint.ends_with("context: ListAlgorithms"));
    assert!(!hint.contains("AlgorithmName"));
}

#[test]
fn labels_are_stable() {
    assert_eq!(ParseFailureCategory::Syntax.label(), "syntax");
    assert_eq!(ParseFailureCategory::Data.label(), "data");
    assert_eq!(ParseFailureCategory::Eof.label(), "eof");
    assert_eq!(ParseFailureCategory::Io.label(), "io");
}
