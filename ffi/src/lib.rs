// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! C ABI for hosts that link the calculator directly.
//!
//! Every call returns an owned [`ShnarfCalculatorResponse`] which must be
//! released with [`shnarf_response_free`]. Invalid input never aborts the
//! host: it comes back as a response with only `error_message` set.

use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};

use shnarf_kernel::engine::KeccakSnarkHasher;
use shnarf_kernel::kzg::KzgCommitter;
use shnarf_kernel::types::ConflationOrder;
use shnarf_kernel::{ShnarfCalculator, ShnarfRequest, ShnarfResponse, ShnarfResult};

#[repr(C)]
pub struct ShnarfCalculatorResponse {
    pub commitment: *mut c_char,
    pub kzg_proof_contract: *mut c_char,
    pub kzg_proof_sidecar: *mut c_char,
    pub data_hash: *mut c_char,
    pub snark_hash: *mut c_char,
    pub expected_x: *mut c_char,
    pub expected_y: *mut c_char,
    pub expected_shnarf: *mut c_char,
    pub error_message: *mut c_char,
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s.replace('\0', ""))
        .unwrap_or_default()
        .into_raw()
}

impl From<ShnarfResponse> for ShnarfCalculatorResponse {
    fn from(r: ShnarfResponse) -> Self {
        Self {
            commitment: into_c_string(r.commitment),
            kzg_proof_contract: into_c_string(r.kzg_proof_contract),
            kzg_proof_sidecar: into_c_string(r.kzg_proof_sidecar),
            data_hash: into_c_string(r.data_hash),
            snark_hash: into_c_string(r.snark_hash),
            expected_x: into_c_string(r.expected_x),
            expected_y: into_c_string(r.expected_y),
            expected_shnarf: into_c_string(r.expected_shnarf),
            error_message: into_c_string(r.error_message),
        }
    }
}

/// # Safety
/// `ptr` must be null or a valid NUL-terminated string.
unsafe fn read_str(field: &str, ptr: *const c_char) -> Result<String, String> {
    if ptr.is_null() {
        return Err(format!("{} is null", field));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(str::to_owned)
        .map_err(|_| format!("{} is not valid UTF-8", field))
}

/// # Safety
/// `ptr` must be null or point to `len` readable `u64`s.
unsafe fn read_boundaries(ptr: *const u64, len: usize) -> Result<Vec<u64>, String> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err("conflation upper boundaries are null".to_string());
    }
    Ok(std::slice::from_raw_parts(ptr, len).to_vec())
}

#[allow(clippy::too_many_arguments)]
unsafe fn build_request(
    eip4844_enabled: bool,
    compressed_data: *const c_char,
    parent_state_root_hash: *const c_char,
    final_state_root_hash: *const c_char,
    prev_shnarf: *const c_char,
    conflation_order_starting_block_number: u64,
    conflation_order_upper_boundaries: *const u64,
    conflation_order_upper_boundaries_len: usize,
) -> Result<ShnarfRequest, String> {
    Ok(ShnarfRequest {
        compressed_data: read_str("compressedData", compressed_data)?,
        parent_state_root_hash: read_str("parentStateRootHash", parent_state_root_hash)?,
        final_state_root_hash: read_str("finalStateRootHash", final_state_root_hash)?,
        prev_shnarf: read_str("prevShnarf", prev_shnarf)?,
        conflation_order: ConflationOrder::new(
            conflation_order_starting_block_number,
            read_boundaries(
                conflation_order_upper_boundaries,
                conflation_order_upper_boundaries_len,
            )?,
        ),
        eip4844_enabled,
    })
}

/// Calculates the shnarf of one blob submission.
///
/// `compressed_data` is base64, the hashes are `0x`-prefixed hex.
///
/// # Safety
/// String arguments must be null or valid NUL-terminated strings.
/// `conflation_order_upper_boundaries` must point to
/// `conflation_order_upper_boundaries_len` values.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn shnarf_calculate(
    eip4844_enabled: bool,
    compressed_data: *const c_char,
    parent_state_root_hash: *const c_char,
    final_state_root_hash: *const c_char,
    prev_shnarf: *const c_char,
    conflation_order_starting_block_number: u64,
    conflation_order_upper_boundaries: *const u64,
    conflation_order_upper_boundaries_len: usize,
) -> *mut ShnarfCalculatorResponse {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let request = build_request(
            eip4844_enabled,
            compressed_data,
            parent_state_root_hash,
            final_state_root_hash,
            prev_shnarf,
            conflation_order_starting_block_number,
            conflation_order_upper_boundaries,
            conflation_order_upper_boundaries_len,
        );
        match request {
            Ok(request) => {
                ShnarfCalculator::new(KzgCommitter::mainnet(), KeccakSnarkHasher).calculate(&request)
            }
            Err(message) => ShnarfResult::failure(message),
        }
    }));

    let result = outcome.unwrap_or_else(|_| {
        tracing::error!("Shnarf calculation panicked");
        ShnarfResult::failure("internal error during shnarf calculation")
    });

    let response: ShnarfCalculatorResponse = ShnarfResponse::from(result).into();
    Box::into_raw(Box::new(response))
}

/// Releases a response returned by [`shnarf_calculate`].
///
/// # Safety
/// `response` must be null or a pointer returned by [`shnarf_calculate`]
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn shnarf_response_free(response: *mut ShnarfCalculatorResponse) {
    if response.is_null() {
        return;
    }
    let response = Box::from_raw(response);
    for field in [
        response.commitment,
        response.kzg_proof_contract,
        response.kzg_proof_sidecar,
        response.data_hash,
        response.snark_hash,
        response.expected_x,
        response.expected_y,
        response.expected_shnarf,
        response.error_message,
    ] {
        if !field.is_null() {
            drop(CString::from_raw(field));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shnarf_kernel::fixtures::sample_request;
    use std::ptr;

    unsafe fn field(ptr: *mut c_char) -> String {
        CStr::from_ptr(ptr).to_str().unwrap().to_owned()
    }

    struct CRequest {
        compressed_data: CString,
        parent: CString,
        final_root: CString,
        prev: CString,
        boundaries: Vec<u64>,
        start: u64,
    }

    impl CRequest {
        fn sample() -> Self {
            let r = sample_request(7, 10, 12);
            Self {
                compressed_data: CString::new(r.compressed_data).unwrap(),
                parent: CString::new(r.parent_state_root_hash).unwrap(),
                final_root: CString::new(r.final_state_root_hash).unwrap(),
                prev: CString::new(r.prev_shnarf).unwrap(),
                boundaries: r.conflation_order.upper_boundaries,
                start: r.conflation_order.starting_block_number,
            }
        }

        unsafe fn call(&self, eip4844_enabled: bool) -> *mut ShnarfCalculatorResponse {
            shnarf_calculate(
                eip4844_enabled,
                self.compressed_data.as_ptr(),
                self.parent.as_ptr(),
                self.final_root.as_ptr(),
                self.prev.as_ptr(),
                self.start,
                self.boundaries.as_ptr(),
                self.boundaries.len(),
            )
        }
    }

    #[test]
    fn test_calculate_success() {
        let req = CRequest::sample();
        unsafe {
            let resp = req.call(true);
            assert!(field((*resp).error_message).is_empty());
            assert_eq!(field((*resp).commitment).len(), 2 + 96);
            assert_eq!(field((*resp).expected_shnarf).len(), 2 + 64);
            shnarf_response_free(resp);
        }
    }

    #[test]
    fn test_calldata_is_failure() {
        let req = CRequest::sample();
        unsafe {
            let resp = req.call(false);
            assert!(field((*resp).error_message).contains("calldata"));
            assert!(field((*resp).commitment).is_empty());
            shnarf_response_free(resp);
        }
    }

    #[test]
    fn test_null_input_is_failure() {
        let req = CRequest::sample();
        unsafe {
            let resp = shnarf_calculate(
                true,
                ptr::null(),
                req.parent.as_ptr(),
                req.final_root.as_ptr(),
                req.prev.as_ptr(),
                req.start,
                req.boundaries.as_ptr(),
                req.boundaries.len(),
            );
            assert_eq!(field((*resp).error_message), "compressedData is null");
            shnarf_response_free(resp);
        }
    }

    #[test]
    fn test_invalid_utf8_is_failure() {
        let req = CRequest::sample();
        let bad = CString::new(vec![0xff, 0xfe]).unwrap();
        unsafe {
            let resp = shnarf_calculate(
                true,
                req.compressed_data.as_ptr(),
                req.parent.as_ptr(),
                bad.as_ptr(),
                req.prev.as_ptr(),
                req.start,
                req.boundaries.as_ptr(),
                req.boundaries.len(),
            );
            assert!(field((*resp).error_message).contains("finalStateRootHash"));
            shnarf_response_free(resp);
        }
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { shnarf_response_free(ptr::null_mut()) };
    }
}
