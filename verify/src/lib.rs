// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Offline verification of a shnarf response against the request that
//! produced it.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use shnarf_kernel::kzg::KzgCommitter;
use shnarf_kernel::verify::{verify_output, verify_with_committer, VerificationReport};
use shnarf_kernel::{ShnarfRequest, ShnarfResponse, ShnarfResult};

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {} file {}", what, path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("Failed to parse {} JSON", what))
}

pub fn load_request(path: &Path) -> Result<ShnarfRequest> {
    read_json(path, "request")
}

pub fn load_response(path: &Path) -> Result<ShnarfResponse> {
    read_json(path, "response")
}

/// Checks the hash chain values, and with `kzg` also the commitment and both
/// proofs against the mainnet trusted setup.
pub fn run(request_path: &Path, response_path: &Path, kzg: bool) -> Result<VerificationReport> {
    let request = load_request(request_path)?;
    let response = load_response(response_path)?;

    let submission = request.parse().context("Request is not a valid blob submission")?;
    let result = ShnarfResult::try_from(response).context("Response record is malformed")?;
    let output = match result {
        ShnarfResult::Success(output) => output,
        ShnarfResult::Failure { message } => {
            anyhow::bail!("Response is a failure record: {}", message)
        }
    };

    let report = if kzg {
        verify_with_committer(&KzgCommitter::mainnet(), &submission, &output)
    } else {
        verify_output(&submission, &output)
    };
    Ok(report)
}
