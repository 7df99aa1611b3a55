// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Deterministic fixtures for tests and local tooling.
//!
//! [`DigestCommitter`] derives every value from Keccak-256 digests. Its
//! outputs are self-consistent (openings verify, blob proofs verify) but
//! offer no binding or hiding. Never use it against a real chain.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::blob::{reduce_to_scalar, Blob};
use crate::engine::BlobCommitter;
use crate::error::Result;
use crate::request::ShnarfRequest;
use crate::shnarf::keccak256;
use crate::types::{ConflationOrder, G1Bytes, Hash32};

#[derive(Debug, Clone, Copy, Default)]
pub struct DigestCommitter;

fn widen(tag: u8, digest: Hash32) -> G1Bytes {
    let mut out = [0u8; 48];
    out[0] = tag;
    out[16..].copy_from_slice(digest.as_bytes());
    G1Bytes(out)
}

impl DigestCommitter {
    fn evaluation(commitment: &G1Bytes, z: &Hash32) -> Hash32 {
        reduce_to_scalar(&keccak256(&[&b"eval"[..], commitment.as_ref(), z.as_ref()]))
    }

    fn opening_proof(commitment: &G1Bytes, z: &Hash32, y: &Hash32) -> G1Bytes {
        widen(0xb0, keccak256(&[&b"open"[..], commitment.as_ref(), z.as_ref(), y.as_ref()]))
    }

    fn sidecar_proof(commitment: &G1Bytes) -> G1Bytes {
        widen(0xb1, keccak256(&[&b"blob"[..], commitment.as_ref()]))
    }
}

impl BlobCommitter for DigestCommitter {
    fn commit(&self, blob: &Blob) -> Result<G1Bytes> {
        Ok(widen(0xa0, keccak256(&[blob.as_bytes()])))
    }

    fn open(&self, blob: &Blob, z: &Hash32) -> Result<(G1Bytes, Hash32)> {
        let commitment = self.commit(blob)?;
        let y = Self::evaluation(&commitment, z);
        Ok((Self::opening_proof(&commitment, z, &y), y))
    }

    fn blob_proof(&self, _blob: &Blob, commitment: &G1Bytes) -> Result<G1Bytes> {
        Ok(Self::sidecar_proof(commitment))
    }

    fn verify_opening(
        &self,
        commitment: &G1Bytes,
        z: &Hash32,
        y: &Hash32,
        proof: &G1Bytes,
    ) -> Result<bool> {
        Ok(Self::evaluation(commitment, z) == *y && Self::opening_proof(commitment, z, y) == *proof)
    }

    fn verify_blob_proof(&self, blob: &Blob, commitment: &G1Bytes, proof: &G1Bytes) -> Result<bool> {
        Ok(self.commit(blob)? == *commitment && Self::sidecar_proof(commitment) == *proof)
    }
}

/// Compressed data whose 32-byte chunks are all canonical scalars.
///
/// The first byte of every chunk is cleared, matching how the compressor
/// packs 254-bit words.
pub fn packed_data(seed: u8, len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| {
            if i % 32 == 0 {
                0
            } else {
                seed.wrapping_add((i % 251) as u8).wrapping_mul(31)
            }
        })
        .collect()
}

/// A valid request over [`packed_data`].
pub fn sample_request(seed: u8, start_block: u64, end_block: u64) -> ShnarfRequest {
    ShnarfRequest {
        compressed_data: STANDARD.encode(packed_data(seed, 1024)),
        parent_state_root_hash: Hash32([seed; 32]).to_hex(),
        final_state_root_hash: Hash32([seed.wrapping_add(1); 32]).to_hex(),
        prev_shnarf: Hash32::ZERO.to_hex(),
        conflation_order: ConflationOrder::new(start_block, vec![end_block]),
        eip4844_enabled: true,
    }
}
