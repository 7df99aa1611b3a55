// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShnarfError {
    #[error("invalid hex in {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },

    #[error("invalid length for {field}: expected {expected} bytes, found {found}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid base64 compressed data: {0}")]
    InvalidBase64(String),

    #[error("compressed data is empty")]
    EmptyData,

    #[error("compressed data is too large: {size} bytes, blob capacity is {max}")]
    DataTooLarge { size: usize, max: usize },

    #[error("blob field element {index} is not a canonical BLS12-381 scalar")]
    NonCanonicalElement { index: usize },

    #[error("invalid conflation order: {0}")]
    InvalidConflationOrder(String),

    #[error("calldata submissions are not supported, eip4844 must be enabled")]
    CalldataUnsupported,

    #[error("commitment engine failure: {0}")]
    Commitment(String),

    #[error("snark hash failure: {0}")]
    SnarkHash(String),

    #[error("blocks are not contiguous: expected start {expected}, found {found}")]
    NonContiguousBlocks { expected: u64, found: u64 },

    #[error("block numbers exhausted: previous blob ended at block {last_end}")]
    BlockNumbersExhausted { last_end: u64 },

    #[error("parent state root {found} does not match previous final state root {expected}")]
    StateRootMismatch { expected: String, found: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, ShnarfError>;
