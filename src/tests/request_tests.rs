// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::BYTES_PER_BLOB;
use crate::error::ShnarfError;
use crate::fixtures::{packed_data, sample_request};
use crate::types::Hash32;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

#[test]
fn test_parse_valid_request() {
    let request = sample_request(3, 100, 110);
    let submission = request.parse().unwrap();

    assert_eq!(submission.compressed_data, packed_data(3, 1024));
    assert_eq!(submission.parent_state_root_hash, Hash32([3; 32]));
    assert_eq!(submission.final_state_root_hash, Hash32([4; 32]));
    assert_eq!(submission.prev_shnarf, Hash32::ZERO);
    assert_eq!(submission.conflation_order.end_block_number(), Some(110));

    // Wire form survives a decode/encode cycle.
    assert_eq!(submission.to_request(), request);
}

#[test]
fn test_parse_accepts_uppercase_and_unprefixed_hex() {
    let mut request = sample_request(1, 1, 2);
    request.prev_shnarf = format!("0X{}", "AB".repeat(32));
    request.final_state_root_hash = "cd".repeat(32);

    let submission = request.parse().unwrap();
    assert_eq!(submission.prev_shnarf, Hash32([0xab; 32]));
    assert_eq!(submission.final_state_root_hash, Hash32([0xcd; 32]));
}

#[test]
fn test_parse_rejects_bad_fields() {
    let mut request = sample_request(1, 1, 2);
    request.prev_shnarf = "0x1234".to_string();
    assert_eq!(
        request.parse(),
        Err(ShnarfError::InvalidLength {
            field: "prevShnarf",
            expected: 32,
            found: 2
        })
    );

    let mut request = sample_request(1, 1, 2);
    request.parent_state_root_hash = "0xzz".to_string();
    assert!(matches!(
        request.parse(),
        Err(ShnarfError::InvalidHex { field: "parentStateRootHash", .. })
    ));

    let mut request = sample_request(1, 1, 2);
    request.compressed_data = "not base64!".to_string();
    assert!(matches!(request.parse(), Err(ShnarfError::InvalidBase64(_))));

    let mut request = sample_request(1, 5, 2);
    request.conflation_order.upper_boundaries = vec![4];
    assert!(matches!(request.parse(), Err(ShnarfError::InvalidConflationOrder(_))));
}

#[test]
fn test_parse_rejects_data_size() {
    let mut request = sample_request(1, 1, 2);
    request.compressed_data = String::new();
    assert_eq!(request.parse(), Err(ShnarfError::EmptyData));

    request.compressed_data = STANDARD.encode(vec![0u8; BYTES_PER_BLOB + 1]);
    assert_eq!(
        request.parse(),
        Err(ShnarfError::DataTooLarge {
            size: BYTES_PER_BLOB + 1,
            max: BYTES_PER_BLOB
        })
    );
}

#[test]
fn test_calldata_is_rejected() {
    let mut request = sample_request(1, 1, 2);
    request.eip4844_enabled = false;
    assert_eq!(request.parse(), Err(ShnarfError::CalldataUnsupported));
}

#[test]
fn test_eip4844_defaults_to_enabled() {
    let json = r#"{
        "compressedData": "AAEC",
        "parentStateRootHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "finalStateRootHash": "0x0000000000000000000000000000000000000000000000000000000000000001",
        "prevShnarf": "0x0000000000000000000000000000000000000000000000000000000000000002",
        "conflationOrder": { "startingBlockNumber": 1, "upperBoundaries": [3, 4] }
    }"#;
    let request: crate::ShnarfRequest = serde_json::from_str(json).unwrap();
    assert!(request.eip4844_enabled);
    assert_eq!(request.parse().unwrap().compressed_data, vec![0, 1, 2]);
}
