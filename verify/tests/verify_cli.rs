use std::fs;
use std::path::{Path, PathBuf};

use shnarf_kernel::engine::KeccakSnarkHasher;
use shnarf_kernel::fixtures::{sample_request, DigestCommitter};
use shnarf_kernel::types::Hash32;
use shnarf_kernel::{ShnarfCalculator, ShnarfResponse, ShnarfResult};
use tempfile::tempdir;

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, value: &T) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

fn calculated_pair(dir: &Path) -> (PathBuf, ShnarfResponse) {
    let calculator = ShnarfCalculator::new(DigestCommitter, KeccakSnarkHasher);
    let request = sample_request(5, 100, 120);
    let response: ShnarfResponse = calculator.calculate(&request).into();
    (write_json(dir, "request.json", &request), response)
}

#[test]
fn test_valid_response_passes() {
    let dir = tempdir().unwrap();
    let (request_path, response) = calculated_pair(dir.path());
    let response_path = write_json(dir.path(), "response.json", &response);

    let report = shnarf_verify::run(&request_path, &response_path, false).unwrap();
    assert!(report.is_valid());
    assert_eq!(report.checks.len(), 3);
}

#[test]
fn test_tampered_shnarf_fails() {
    let dir = tempdir().unwrap();
    let (request_path, mut response) = calculated_pair(dir.path());
    response.expected_shnarf = Hash32([0xab; 32]).to_hex();
    let response_path = write_json(dir.path(), "response.json", &response);

    let report = shnarf_verify::run(&request_path, &response_path, false).unwrap();
    assert!(!report.is_valid());
    let failed: Vec<_> = report.failures().map(|c| c.name).collect();
    assert_eq!(failed, vec!["expected_shnarf"]);
}

#[test]
fn test_failure_record_is_rejected() {
    let dir = tempdir().unwrap();
    let (request_path, _) = calculated_pair(dir.path());
    let response: ShnarfResponse = ShnarfResult::failure("invalid data length").into();
    let response_path = write_json(dir.path(), "response.json", &response);

    let err = shnarf_verify::run(&request_path, &response_path, false).unwrap_err();
    assert!(err.to_string().contains("failure record"));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let err = shnarf_verify::run(&missing, &missing, false).unwrap_err();
    assert!(err.to_string().contains("request"));
}
