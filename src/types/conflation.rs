// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Block ranges packed into one blob.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShnarfError};

/// Order in which L2 block ranges (conflations) were packed into a blob.
///
/// `upper_boundaries[i]` is the last block of the i-th conflation; the first
/// conflation starts at `starting_block_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflationOrder {
    pub starting_block_number: u64,
    pub upper_boundaries: Vec<u64>,
}

impl ConflationOrder {
    pub fn new(starting_block_number: u64, upper_boundaries: Vec<u64>) -> Self {
        Self {
            starting_block_number,
            upper_boundaries,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let first = self.upper_boundaries.first().ok_or_else(|| {
            ShnarfError::InvalidConflationOrder("no upper boundaries".to_string())
        })?;

        if *first < self.starting_block_number {
            return Err(ShnarfError::InvalidConflationOrder(format!(
                "first boundary {} is before starting block {}",
                first, self.starting_block_number
            )));
        }

        for pair in self.upper_boundaries.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ShnarfError::InvalidConflationOrder(format!(
                    "boundaries not strictly increasing: {} then {}",
                    pair[0], pair[1]
                )));
            }
        }

        Ok(())
    }

    pub fn end_block_number(&self) -> Option<u64> {
        self.upper_boundaries.last().copied()
    }
}
