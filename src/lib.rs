// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! shnarf-kernel: typed results and the hash chain of blob submissions.
//!
//! A shnarf calculation turns one compressed batch into the values the
//! rollup contract checks when the batch is submitted as an EIP-4844 blob:
//! a KZG commitment, two KZG proofs, the data and snark hashes, the
//! evaluation claim `(x, y)` and the next shnarf of the chain.

pub mod config;
pub mod error;
pub mod types;
pub mod blob;
pub mod shnarf;
pub mod request;
pub mod response;
pub mod engine;
pub mod calculator;
pub mod rolling;
pub mod verify;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

#[cfg(feature = "c-kzg")]
pub mod kzg;

pub use calculator::ShnarfCalculator;
pub use error::{Result, ShnarfError};
pub use request::{BlobSubmission, NextBlobRequest, ShnarfRequest};
pub use response::{ShnarfOutput, ShnarfResponse, ShnarfResult};
pub use rolling::{ChainHead, RollingShnarfCalculator};

#[cfg(test)]
pub mod tests;
