// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Shnarf calculation results.
//!
//! [`ShnarfResult`] is the typed outcome: either every output value or an
//! error message, never both. [`ShnarfResponse`] is the flat record used on
//! the wire and across the C boundary, where each field is a string and
//! absence is the empty string. Converting a response back into a result
//! rejects records that are neither a clean success nor a clean failure.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShnarfError};
use crate::types::{G1Bytes, Hash32};

const UNKNOWN_FAILURE: &str = "shnarf calculation failed";

/// Values produced for one blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShnarfOutput {
    pub commitment: G1Bytes,
    /// Opening proof at the evaluation point, checked by the rollup contract.
    pub kzg_proof_contract: G1Bytes,
    /// Blob proof carried in the transaction sidecar.
    pub kzg_proof_sidecar: G1Bytes,
    pub data_hash: Hash32,
    pub snark_hash: Hash32,
    pub expected_x: Hash32,
    pub expected_y: Hash32,
    pub expected_shnarf: Hash32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ShnarfResponse", try_from = "ShnarfResponse")]
pub enum ShnarfResult {
    Success(ShnarfOutput),
    Failure { message: String },
}

impl ShnarfResult {
    /// Builds a failure; an empty message is replaced so the failure stays visible.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            UNKNOWN_FAILURE.to_string()
        } else {
            message
        };
        ShnarfResult::Failure { message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ShnarfResult::Success(_))
    }

    pub fn output(&self) -> Option<&ShnarfOutput> {
        match self {
            ShnarfResult::Success(output) => Some(output),
            ShnarfResult::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ShnarfResult::Success(_) => None,
            ShnarfResult::Failure { message } => Some(message),
        }
    }
}

impl From<Result<ShnarfOutput>> for ShnarfResult {
    fn from(result: Result<ShnarfOutput>) -> Self {
        match result {
            Ok(output) => ShnarfResult::Success(output),
            Err(e) => ShnarfResult::failure(e.to_string()),
        }
    }
}

/// Flat wire record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShnarfResponse {
    pub commitment: String,
    pub kzg_proof_contract: String,
    pub kzg_proof_sidecar: String,
    pub data_hash: String,
    pub snark_hash: String,
    pub expected_x: String,
    pub expected_y: String,
    pub expected_shnarf: String,
    pub error_message: String,
}

impl ShnarfResponse {
    fn success_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("commitment", self.commitment.as_str()),
            ("kzgProofContract", self.kzg_proof_contract.as_str()),
            ("kzgProofSidecar", self.kzg_proof_sidecar.as_str()),
            ("dataHash", self.data_hash.as_str()),
            ("snarkHash", self.snark_hash.as_str()),
            ("expectedX", self.expected_x.as_str()),
            ("expectedY", self.expected_y.as_str()),
            ("expectedShnarf", self.expected_shnarf.as_str()),
        ]
    }

    pub fn is_failure(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Checks the result-or-error shape and decodes every success field.
    pub fn validate(&self) -> Result<()> {
        ShnarfResult::try_from(self.clone()).map(|_| ())
    }

    fn decode_output(&self) -> Result<ShnarfOutput> {
        Ok(ShnarfOutput {
            commitment: G1Bytes::from_hex("commitment", &self.commitment)?,
            kzg_proof_contract: G1Bytes::from_hex("kzgProofContract", &self.kzg_proof_contract)?,
            kzg_proof_sidecar: G1Bytes::from_hex("kzgProofSidecar", &self.kzg_proof_sidecar)?,
            data_hash: Hash32::from_hex("dataHash", &self.data_hash)?,
            snark_hash: Hash32::from_hex("snarkHash", &self.snark_hash)?,
            expected_x: Hash32::from_hex("expectedX", &self.expected_x)?,
            expected_y: Hash32::from_hex("expectedY", &self.expected_y)?,
            expected_shnarf: Hash32::from_hex("expectedShnarf", &self.expected_shnarf)?,
        })
    }
}

impl From<ShnarfOutput> for ShnarfResponse {
    fn from(output: ShnarfOutput) -> Self {
        Self {
            commitment: output.commitment.to_hex(),
            kzg_proof_contract: output.kzg_proof_contract.to_hex(),
            kzg_proof_sidecar: output.kzg_proof_sidecar.to_hex(),
            data_hash: output.data_hash.to_hex(),
            snark_hash: output.snark_hash.to_hex(),
            expected_x: output.expected_x.to_hex(),
            expected_y: output.expected_y.to_hex(),
            expected_shnarf: output.expected_shnarf.to_hex(),
            error_message: String::new(),
        }
    }
}

impl From<ShnarfResult> for ShnarfResponse {
    fn from(result: ShnarfResult) -> Self {
        match result {
            ShnarfResult::Success(output) => output.into(),
            // A failure always carries a message on the wire.
            ShnarfResult::Failure { message } if message.is_empty() => Self {
                error_message: UNKNOWN_FAILURE.to_string(),
                ..Self::default()
            },
            ShnarfResult::Failure { message } => Self {
                error_message: message,
                ..Self::default()
            },
        }
    }
}

impl TryFrom<ShnarfResponse> for ShnarfResult {
    type Error = ShnarfError;

    fn try_from(response: ShnarfResponse) -> Result<Self> {
        let populated: Vec<&str> = response
            .success_fields()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, _)| *name)
            .collect();

        if response.is_failure() {
            if let Some(name) = populated.first() {
                return Err(ShnarfError::InvalidResponse(format!(
                    "failure carries success field {}",
                    name
                )));
            }
            return Ok(ShnarfResult::Failure {
                message: response.error_message,
            });
        }

        if populated.is_empty() {
            return Err(ShnarfError::InvalidResponse(
                "neither success fields nor an error message are set".to_string(),
            ));
        }

        if let Some((name, _)) = response
            .success_fields()
            .iter()
            .find(|(_, value)| value.is_empty())
        {
            return Err(ShnarfError::InvalidResponse(format!(
                "success is missing field {}",
                name
            )));
        }

        response.decode_output().map(ShnarfResult::Success)
    }
}
