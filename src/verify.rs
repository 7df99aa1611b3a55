// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Consistency checks of a calculated output against its submission.
//!
//! The hash-only checks need nothing but the output itself. The KZG checks
//! need a [`BlobCommitter`] and are only run by [`verify_with_committer`].

use serde::Serialize;

use crate::blob::{reduce_to_scalar, Blob};
use crate::engine::BlobCommitter;
use crate::request::BlobSubmission;
use crate::response::ShnarfOutput;
use crate::shnarf::{evaluation_challenge, versioned_hash, Shnarf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub checks: Vec<CheckOutcome>,
}

impl VerificationReport {
    fn record(&mut self, name: &'static str, passed: bool, detail: Option<String>) {
        self.checks.push(CheckOutcome {
            name,
            passed,
            detail,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Recomputes the hash chain values from the output and the submission.
pub fn verify_output(submission: &BlobSubmission, output: &ShnarfOutput) -> VerificationReport {
    let mut report = VerificationReport::default();

    let data_hash = versioned_hash(&output.commitment);
    report.record(
        "data_hash",
        data_hash == output.data_hash,
        (data_hash != output.data_hash).then(|| format!("expected {}", data_hash)),
    );

    let x = evaluation_challenge(&output.snark_hash, &output.data_hash);
    report.record(
        "expected_x",
        x == output.expected_x,
        (x != output.expected_x).then(|| format!("expected {}", x)),
    );

    let shnarf = Shnarf {
        parent_shnarf: submission.prev_shnarf,
        snark_hash: output.snark_hash,
        final_state_root_hash: submission.final_state_root_hash,
        x: output.expected_x,
        y: output.expected_y,
    }
    .compute();
    report.record(
        "expected_shnarf",
        shnarf == output.expected_shnarf,
        (shnarf != output.expected_shnarf).then(|| format!("expected {}", shnarf)),
    );

    report
}

/// Hash chain checks plus the commitment and both proofs.
pub fn verify_with_committer<C: BlobCommitter>(
    committer: &C,
    submission: &BlobSubmission,
    output: &ShnarfOutput,
) -> VerificationReport {
    let mut report = verify_output(submission, output);

    let blob = match Blob::from_data(&submission.compressed_data) {
        Ok(blob) => blob,
        Err(e) => {
            report.record("blob", false, Some(e.to_string()));
            return report;
        }
    };

    match committer.commit(&blob) {
        Ok(commitment) => report.record(
            "commitment",
            commitment == output.commitment,
            (commitment != output.commitment).then(|| format!("expected {}", commitment)),
        ),
        Err(e) => report.record("commitment", false, Some(e.to_string())),
    }

    let z = reduce_to_scalar(&output.expected_x);
    match committer.verify_opening(&output.commitment, &z, &output.expected_y, &output.kzg_proof_contract) {
        Ok(passed) => report.record("kzg_proof_contract", passed, None),
        Err(e) => report.record("kzg_proof_contract", false, Some(e.to_string())),
    }

    match committer.verify_blob_proof(&blob, &output.commitment, &output.kzg_proof_sidecar) {
        Ok(passed) => report.record("kzg_proof_sidecar", passed, None),
        Err(e) => report.record("kzg_proof_sidecar", false, Some(e.to_string())),
    }

    if !report.is_valid() {
        tracing::warn!(
            "Verification failed: {:?}",
            report.failures().map(|c| c.name).collect::<Vec<_>>()
        );
    }

    report
}
