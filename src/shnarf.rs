// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Shnarf hash chain.
//!
//! A shnarf accumulates every submitted blob: each new value hashes the
//! previous shnarf together with the values the rollup contract checks for
//! the blob. The byte layout matches the on-chain computation:
//!
//! ```text
//! keccak256(parent_shnarf ‖ snark_hash ‖ final_state_root_hash ‖ x ‖ y)
//! ```
//!
//! with every operand a 32-byte big-endian word.

use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::{Digest, Keccak256};

use crate::config::VERSIONED_HASH_VERSION_KZG;
use crate::types::{G1Bytes, Hash32};

/// The five words folded into one shnarf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shnarf {
    pub parent_shnarf: Hash32,
    pub snark_hash: Hash32,
    pub final_state_root_hash: Hash32,
    /// Unreduced evaluation point.
    pub x: Hash32,
    pub y: Hash32,
}

impl Shnarf {
    pub fn compute(&self) -> Hash32 {
        keccak256(&[
            self.parent_shnarf.as_ref(),
            self.snark_hash.as_ref(),
            self.final_state_root_hash.as_ref(),
            self.x.as_ref(),
            self.y.as_ref(),
        ])
    }
}

/// Keccak-256 over the concatenation of `parts`.
pub fn keccak256(parts: &[&[u8]]) -> Hash32 {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    Hash32(hasher.finalize().into())
}

/// Fiat-Shamir point at which the blob polynomial is opened.
pub fn evaluation_challenge(snark_hash: &Hash32, data_hash: &Hash32) -> Hash32 {
    keccak256(&[snark_hash.as_ref(), data_hash.as_ref()])
}

/// EIP-4844 versioned hash of a KZG commitment.
pub fn versioned_hash(commitment: &G1Bytes) -> Hash32 {
    let digest: [u8; 32] = Sha256::digest(commitment.as_bytes()).into();
    let mut out = digest;
    out[0] = VERSIONED_HASH_VERSION_KZG;
    Hash32(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_empty_vector() {
        let empty = keccak256(&[]);
        assert_eq!(
            empty.to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak_concatenation() {
        assert_eq!(keccak256(&[&b"ab"[..], &b"cd"[..]]), keccak256(&[&b"abcd"[..]]));
    }

    #[test]
    fn test_versioned_hash_layout() {
        let commitment = G1Bytes([7u8; 48]);
        let hash = versioned_hash(&commitment);
        let digest = Sha256::digest([7u8; 48]);

        assert_eq!(hash.0[0], 0x01);
        assert_eq!(&hash.0[1..], &digest[1..]);
    }
}
