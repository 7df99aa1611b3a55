// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::calculator::ShnarfCalculator;
use crate::config::GENESIS_SHNARF;
use crate::engine::KeccakSnarkHasher;
use crate::error::ShnarfError;
use crate::fixtures::{sample_request, DigestCommitter};
use crate::request::NextBlobRequest;
use crate::rolling::RollingShnarfCalculator;
use crate::types::{ConflationOrder, Hash32};

fn rolling() -> RollingShnarfCalculator<DigestCommitter, KeccakSnarkHasher> {
    RollingShnarfCalculator::new(
        ShnarfCalculator::new(DigestCommitter, KeccakSnarkHasher),
        Hash32(GENESIS_SHNARF),
    )
}

fn next_request(seed: u8, start: u64, end: u64, parent_root: u8, final_root: u8) -> NextBlobRequest {
    let base = sample_request(seed, start, end);
    NextBlobRequest {
        compressed_data: base.compressed_data,
        parent_state_root_hash: Hash32([parent_root; 32]).to_hex(),
        final_state_root_hash: Hash32([final_root; 32]).to_hex(),
        conflation_order: ConflationOrder::new(start, vec![end]),
        eip4844_enabled: true,
    }
}

#[test]
fn test_first_blob_chains_from_genesis() {
    let mut calc = rolling();
    let request = next_request(1, 1, 5, 0, 1);

    let output = calc.calculate_next(&request).unwrap();
    let standalone = calc
        .calculator()
        .try_calculate(&request.with_prev_shnarf(&Hash32(GENESIS_SHNARF)).parse().unwrap())
        .unwrap();

    assert_eq!(output, standalone);
    assert_eq!(calc.head().shnarf, output.expected_shnarf);
    assert_eq!(calc.head().data_hash, Some(output.data_hash));
    assert_eq!(calc.head().end_block_number, Some(5));
    assert_eq!(calc.head().blob_count, 1);
}

#[test]
fn test_second_blob_uses_previous_shnarf() {
    let mut calc = rolling();
    let first = calc.calculate_next(&next_request(1, 1, 5, 0, 1)).unwrap();

    let request = next_request(2, 6, 9, 1, 2);
    let second = calc.calculate_next(&request).unwrap();

    let expected = calc
        .calculator()
        .try_calculate(&request.with_prev_shnarf(&first.expected_shnarf).parse().unwrap())
        .unwrap();
    assert_eq!(second.expected_shnarf, expected.expected_shnarf);
    assert_eq!(calc.head().blob_count, 2);
}

#[test]
fn test_gap_is_rejected_without_advancing() {
    let mut calc = rolling();
    calc.calculate_next(&next_request(1, 1, 5, 0, 1)).unwrap();
    let head = *calc.head();

    let err = calc.calculate_next(&next_request(2, 7, 9, 1, 2)).unwrap_err();
    assert_eq!(err, ShnarfError::NonContiguousBlocks { expected: 6, found: 7 });
    assert_eq!(*calc.head(), head);

    // The corrected blob is accepted against the same parent.
    assert!(calc.calculate_next(&next_request(2, 6, 9, 1, 2)).is_ok());
}

#[test]
fn test_state_root_mismatch_is_rejected() {
    let mut calc = rolling();
    calc.calculate_next(&next_request(1, 1, 5, 0, 1)).unwrap();

    let err = calc.calculate_next(&next_request(2, 6, 9, 7, 2)).unwrap_err();
    assert!(matches!(err, ShnarfError::StateRootMismatch { .. }));
    assert_eq!(calc.head().blob_count, 1);
}

#[test]
fn test_failure_as_data_keeps_head() {
    let mut calc = rolling();
    let mut request = next_request(1, 1, 5, 0, 1);
    request.compressed_data = String::new();

    let result = calc.next(&request);
    assert_eq!(result.error_message(), Some("compressed data is empty"));
    assert_eq!(calc.head().shnarf, Hash32(GENESIS_SHNARF));
    assert_eq!(calc.head().blob_count, 0);
}

#[test]
fn test_chain_ending_at_last_block_number() {
    let mut calc = rolling();
    calc.calculate_next(&next_request(1, u64::MAX - 1, u64::MAX, 0, 1))
        .unwrap();
    let head = *calc.head();
    assert_eq!(head.end_block_number, Some(u64::MAX));

    let err = calc.calculate_next(&next_request(2, 0, 3, 1, 2)).unwrap_err();
    assert_eq!(err, ShnarfError::BlockNumbersExhausted { last_end: u64::MAX });
    assert_eq!(*calc.head(), head);

    let result = calc.next(&next_request(2, 0, 3, 1, 2));
    assert!(result.error_message().unwrap().contains("exhausted"));
}
