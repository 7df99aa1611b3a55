// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Seams to the cryptographic engine.
//!
//! The calculator never performs curve arithmetic itself. Commitments and
//! proofs come from a [`BlobCommitter`], the circuit-facing digest from a
//! [`SnarkHasher`].

use std::sync::Arc;

use crate::blob::Blob;
use crate::error::Result;
use crate::shnarf::keccak256;
use crate::types::{G1Bytes, Hash32};

/// Polynomial commitment operations over a blob.
pub trait BlobCommitter {
    fn commit(&self, blob: &Blob) -> Result<G1Bytes>;

    /// Opens the blob polynomial at the canonical scalar `z`.
    ///
    /// Returns the proof and the evaluation `y`.
    fn open(&self, blob: &Blob, z: &Hash32) -> Result<(G1Bytes, Hash32)>;

    fn blob_proof(&self, blob: &Blob, commitment: &G1Bytes) -> Result<G1Bytes>;

    fn verify_opening(
        &self,
        commitment: &G1Bytes,
        z: &Hash32,
        y: &Hash32,
        proof: &G1Bytes,
    ) -> Result<bool>;

    fn verify_blob_proof(&self, blob: &Blob, commitment: &G1Bytes, proof: &G1Bytes) -> Result<bool>;
}

/// Digest of the blob consumed by the decompression circuit.
pub trait SnarkHasher {
    fn snark_hash(&self, blob: &Blob) -> Result<Hash32>;
}

/// Keccak-256 over the padded blob.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeccakSnarkHasher;

impl SnarkHasher for KeccakSnarkHasher {
    fn snark_hash(&self, blob: &Blob) -> Result<Hash32> {
        Ok(keccak256(&[blob.as_bytes()]))
    }
}

/// Forwards both traits through a pointer type.
macro_rules! delegate_engine {
    ($($ptr:ty),*) => {$(
        impl<T: BlobCommitter + ?Sized> BlobCommitter for $ptr {
            fn commit(&self, blob: &Blob) -> Result<G1Bytes> {
                (**self).commit(blob)
            }

            fn open(&self, blob: &Blob, z: &Hash32) -> Result<(G1Bytes, Hash32)> {
                (**self).open(blob, z)
            }

            fn blob_proof(&self, blob: &Blob, commitment: &G1Bytes) -> Result<G1Bytes> {
                (**self).blob_proof(blob, commitment)
            }

            fn verify_opening(
                &self,
                commitment: &G1Bytes,
                z: &Hash32,
                y: &Hash32,
                proof: &G1Bytes,
            ) -> Result<bool> {
                (**self).verify_opening(commitment, z, y, proof)
            }

            fn verify_blob_proof(&self, blob: &Blob, commitment: &G1Bytes, proof: &G1Bytes) -> Result<bool> {
                (**self).verify_blob_proof(blob, commitment, proof)
            }
        }

        impl<T: SnarkHasher + ?Sized> SnarkHasher for $ptr {
            fn snark_hash(&self, blob: &Blob) -> Result<Hash32> {
                (**self).snark_hash(blob)
            }
        }
    )*};
}

delegate_engine!(&T, Arc<T>);
