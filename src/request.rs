// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Blob submission requests.
//!
//! Requests arrive with every value as text. Decoding is deferred to
//! [`ShnarfRequest::parse`] so that a malformed field becomes a failure
//! result instead of a transport error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShnarfError};
use crate::types::{ConflationOrder, Hash32};

fn default_eip4844() -> bool {
    true
}

/// Wire form of a shnarf calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShnarfRequest {
    /// Base64 (standard alphabet) compressed batch data.
    pub compressed_data: String,
    pub parent_state_root_hash: String,
    pub final_state_root_hash: String,
    pub prev_shnarf: String,
    pub conflation_order: ConflationOrder,
    #[serde(default = "default_eip4844")]
    pub eip4844_enabled: bool,
}

impl ShnarfRequest {
    pub fn parse(&self) -> Result<BlobSubmission> {
        if !self.eip4844_enabled {
            return Err(ShnarfError::CalldataUnsupported);
        }

        let compressed_data = STANDARD
            .decode(self.compressed_data.as_bytes())
            .map_err(|e| ShnarfError::InvalidBase64(e.to_string()))?;

        let submission = BlobSubmission {
            compressed_data,
            parent_state_root_hash: Hash32::from_hex(
                "parentStateRootHash",
                &self.parent_state_root_hash,
            )?,
            final_state_root_hash: Hash32::from_hex(
                "finalStateRootHash",
                &self.final_state_root_hash,
            )?,
            prev_shnarf: Hash32::from_hex("prevShnarf", &self.prev_shnarf)?,
            conflation_order: self.conflation_order.clone(),
        };
        submission.validate()?;
        Ok(submission)
    }
}

/// A rolling request: the parent shnarf is supplied by the chain head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextBlobRequest {
    pub compressed_data: String,
    pub parent_state_root_hash: String,
    pub final_state_root_hash: String,
    pub conflation_order: ConflationOrder,
    #[serde(default = "default_eip4844")]
    pub eip4844_enabled: bool,
}

impl NextBlobRequest {
    pub fn with_prev_shnarf(&self, prev_shnarf: &Hash32) -> ShnarfRequest {
        ShnarfRequest {
            compressed_data: self.compressed_data.clone(),
            parent_state_root_hash: self.parent_state_root_hash.clone(),
            final_state_root_hash: self.final_state_root_hash.clone(),
            prev_shnarf: prev_shnarf.to_hex(),
            conflation_order: self.conflation_order.clone(),
            eip4844_enabled: self.eip4844_enabled,
        }
    }
}

/// A decoded and validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobSubmission {
    pub compressed_data: Vec<u8>,
    pub parent_state_root_hash: Hash32,
    pub final_state_root_hash: Hash32,
    pub prev_shnarf: Hash32,
    pub conflation_order: ConflationOrder,
}

impl BlobSubmission {
    pub fn validate(&self) -> Result<()> {
        if self.compressed_data.is_empty() {
            return Err(ShnarfError::EmptyData);
        }
        if self.compressed_data.len() > crate::config::BYTES_PER_BLOB {
            return Err(ShnarfError::DataTooLarge {
                size: self.compressed_data.len(),
                max: crate::config::BYTES_PER_BLOB,
            });
        }
        self.conflation_order.validate()
    }

    /// Re-encodes the submission in wire form.
    pub fn to_request(&self) -> ShnarfRequest {
        ShnarfRequest {
            compressed_data: STANDARD.encode(&self.compressed_data),
            parent_state_root_hash: self.parent_state_root_hash.to_hex(),
            final_state_root_hash: self.final_state_root_hash.to_hex(),
            prev_shnarf: self.prev_shnarf.to_hex(),
            conflation_order: self.conflation_order.clone(),
            eip4844_enabled: true,
        }
    }
}
