// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Shnarf calculator.
//!
//! For one blob submission:
//!
//! ```text
//! blob        = pad(compressed_data)
//! snark_hash  = H_snark(blob)
//! commitment  = KZG.commit(blob)
//! data_hash   = versioned_hash(commitment)
//! x           = keccak256(snark_hash ‖ data_hash)
//! (proof, y)  = KZG.open(blob, x mod r)
//! sidecar     = KZG.blob_proof(blob, commitment)
//! shnarf      = keccak256(prev_shnarf ‖ snark_hash ‖ final_state_root ‖ x ‖ y)
//! ```

use crate::blob::{reduce_to_scalar, Blob};
use crate::engine::{BlobCommitter, SnarkHasher};
use crate::error::Result;
use crate::request::{BlobSubmission, ShnarfRequest};
use crate::response::{ShnarfOutput, ShnarfResult};
use crate::shnarf::{evaluation_challenge, versioned_hash, Shnarf};

pub struct ShnarfCalculator<C, H> {
    committer: C,
    hasher: H,
}

impl<C: BlobCommitter, H: SnarkHasher> ShnarfCalculator<C, H> {
    pub fn new(committer: C, hasher: H) -> Self {
        Self { committer, hasher }
    }

    pub fn committer(&self) -> &C {
        &self.committer
    }

    pub fn try_calculate(&self, submission: &BlobSubmission) -> Result<ShnarfOutput> {
        let blob = Blob::from_data(&submission.compressed_data)?;

        let snark_hash = self.hasher.snark_hash(&blob)?;
        let commitment = self.committer.commit(&blob)?;
        let data_hash = versioned_hash(&commitment);

        let expected_x = evaluation_challenge(&snark_hash, &data_hash);
        let z = reduce_to_scalar(&expected_x);
        let (kzg_proof_contract, expected_y) = self.committer.open(&blob, &z)?;
        let kzg_proof_sidecar = self.committer.blob_proof(&blob, &commitment)?;

        let expected_shnarf = Shnarf {
            parent_shnarf: submission.prev_shnarf,
            snark_hash,
            final_state_root_hash: submission.final_state_root_hash,
            x: expected_x,
            y: expected_y,
        }
        .compute();

        tracing::debug!(
            data_len = blob.data_len(),
            %data_hash,
            %expected_shnarf,
            "Computed shnarf"
        );

        Ok(ShnarfOutput {
            commitment,
            kzg_proof_contract,
            kzg_proof_sidecar,
            data_hash,
            snark_hash,
            expected_x,
            expected_y,
            expected_shnarf,
        })
    }

    /// Parses and calculates, reporting every failure as data.
    pub fn calculate(&self, request: &ShnarfRequest) -> ShnarfResult {
        let result = request.parse().and_then(|s| self.try_calculate(&s));
        if let Err(e) = &result {
            tracing::warn!("Shnarf calculation failed: {}", e);
        }
        result.into()
    }
}

impl<C: std::fmt::Debug, H: std::fmt::Debug> std::fmt::Debug for ShnarfCalculator<C, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShnarfCalculator")
            .field("committer", &self.committer)
            .field("hasher", &self.hasher)
            .finish()
    }
}
