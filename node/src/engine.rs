// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::{Arc, Mutex};
use std::time::Instant;

use shnarf_kernel::engine::{BlobCommitter, SnarkHasher};
use shnarf_kernel::rolling::ChainHead;
use shnarf_kernel::types::Hash32;
use shnarf_kernel::verify::{verify_with_committer, VerificationReport};
use shnarf_kernel::{
    NextBlobRequest, RollingShnarfCalculator, ShnarfCalculator, ShnarfRequest, ShnarfResponse,
    ShnarfResult,
};

use crate::errors::EngineError;

/// Host-side wrapper: one rolling chain plus stateless calculation.
///
/// Only the rolling chain is locked; stateless calculation and verification
/// share the committer without waiting on it.
pub struct Engine<C, H> {
    calculator: ShnarfCalculator<Arc<C>, Arc<H>>,
    rolling: Mutex<RollingShnarfCalculator<Arc<C>, Arc<H>>>,
}

impl<C: BlobCommitter, H: SnarkHasher> Engine<C, H> {
    pub fn new(committer: C, hasher: H, genesis_shnarf: Hash32) -> Self {
        let committer = Arc::new(committer);
        let hasher = Arc::new(hasher);
        Self {
            calculator: ShnarfCalculator::new(committer.clone(), hasher.clone()),
            rolling: Mutex::new(RollingShnarfCalculator::new(
                ShnarfCalculator::new(committer, hasher),
                genesis_shnarf,
            )),
        }
    }

    pub fn calculate(&self, request: &ShnarfRequest) -> ShnarfResult {
        let start = Instant::now();
        let result = self.calculator.calculate(request);
        record_outcome(&result, start);
        result
    }

    pub fn calculate_next(&self, request: &NextBlobRequest) -> Result<ShnarfResult, EngineError> {
        let mut rolling = self.rolling.lock().map_err(|_| EngineError::Internal)?;
        let start = Instant::now();
        let result = rolling.next(request);
        record_outcome(&result, start);
        if result.is_success() {
            metrics::gauge!("shnarf_chain_blob_count", rolling.head().blob_count as f64);
        }
        Ok(result)
    }

    pub fn head(&self) -> Result<ChainHead, EngineError> {
        let rolling = self.rolling.lock().map_err(|_| EngineError::Internal)?;
        Ok(*rolling.head())
    }

    pub fn verify(
        &self,
        request: &ShnarfRequest,
        response: &ShnarfResponse,
    ) -> Result<VerificationReport, EngineError> {
        let submission = request.parse()?;
        let result = ShnarfResult::try_from(response.clone())?;
        let output = result.output().ok_or_else(|| {
            shnarf_kernel::ShnarfError::InvalidResponse(
                "cannot verify a failure response".to_string(),
            )
        })?;

        let report = verify_with_committer(self.calculator.committer(), &submission, output);
        metrics::increment_counter!("shnarf_verifications_total");
        Ok(report)
    }
}

fn record_outcome(result: &ShnarfResult, start: Instant) {
    metrics::histogram!("shnarf_calculation_duration_seconds", start.elapsed().as_secs_f64());
    metrics::increment_counter!("shnarf_calculations_total");
    if let Some(message) = result.error_message() {
        metrics::increment_counter!("shnarf_calculation_failures_total");
        tracing::debug!("Calculation returned failure: {}", message);
    }
}
