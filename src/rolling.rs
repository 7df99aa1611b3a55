// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Rolling calculation over a sequence of blobs.
//!
//! Each blob's parent shnarf is the previous blob's expected shnarf. The
//! head only advances on success, so a rejected blob can be corrected and
//! resubmitted against the same parent.

use serde::{Deserialize, Serialize};

use crate::calculator::ShnarfCalculator;
use crate::engine::{BlobCommitter, SnarkHasher};
use crate::error::{Result, ShnarfError};
use crate::request::NextBlobRequest;
use crate::response::{ShnarfOutput, ShnarfResult};
use crate::types::Hash32;

/// Last accepted position of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainHead {
    pub shnarf: Hash32,
    pub data_hash: Option<Hash32>,
    pub final_state_root_hash: Option<Hash32>,
    pub end_block_number: Option<u64>,
    pub blob_count: u64,
}

impl ChainHead {
    pub fn genesis(shnarf: Hash32) -> Self {
        Self {
            shnarf,
            data_hash: None,
            final_state_root_hash: None,
            end_block_number: None,
            blob_count: 0,
        }
    }
}

pub struct RollingShnarfCalculator<C, H> {
    calculator: ShnarfCalculator<C, H>,
    head: ChainHead,
}

impl<C: BlobCommitter, H: SnarkHasher> RollingShnarfCalculator<C, H> {
    pub fn new(calculator: ShnarfCalculator<C, H>, genesis_shnarf: Hash32) -> Self {
        Self {
            calculator,
            head: ChainHead::genesis(genesis_shnarf),
        }
    }

    pub fn head(&self) -> &ChainHead {
        &self.head
    }

    pub fn calculator(&self) -> &ShnarfCalculator<C, H> {
        &self.calculator
    }

    pub fn calculate_next(&mut self, request: &NextBlobRequest) -> Result<ShnarfOutput> {
        let submission = request.with_prev_shnarf(&self.head.shnarf).parse()?;

        if let Some(last_end) = self.head.end_block_number {
            let expected = last_end
                .checked_add(1)
                .ok_or(ShnarfError::BlockNumbersExhausted { last_end })?;
            let found = submission.conflation_order.starting_block_number;
            if found != expected {
                return Err(ShnarfError::NonContiguousBlocks { expected, found });
            }
        }

        if let Some(previous_root) = self.head.final_state_root_hash {
            if submission.parent_state_root_hash != previous_root {
                return Err(ShnarfError::StateRootMismatch {
                    expected: previous_root.to_hex(),
                    found: submission.parent_state_root_hash.to_hex(),
                });
            }
        }

        let output = self.calculator.try_calculate(&submission)?;

        self.head = ChainHead {
            shnarf: output.expected_shnarf,
            data_hash: Some(output.data_hash),
            final_state_root_hash: Some(submission.final_state_root_hash),
            end_block_number: submission.conflation_order.end_block_number(),
            blob_count: self.head.blob_count + 1,
        };
        tracing::info!(
            "Advanced shnarf chain to blob {} ending at block {:?}",
            self.head.blob_count,
            self.head.end_block_number
        );

        Ok(output)
    }

    /// Like [`Self::calculate_next`], reporting failures as data.
    pub fn next(&mut self, request: &NextBlobRequest) -> ShnarfResult {
        let result = self.calculate_next(request);
        if let Err(e) = &result {
            tracing::warn!("Rolling shnarf calculation rejected: {}", e);
        }
        result.into()
    }
}
