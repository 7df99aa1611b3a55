// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};
use shnarf_kernel::{ShnarfRequest, ShnarfResponse};

pub use shnarf_kernel::rolling::ChainHead;
pub use shnarf_kernel::verify::VerificationReport;
pub use shnarf_kernel::NextBlobRequest;

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub request: ShnarfRequest,
    pub response: ShnarfResponse,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
