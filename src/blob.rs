// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! EIP-4844 blob packing and BLS12-381 scalar helpers.

use ark_bls12_381::Fr;
use ark_ff::{BigInt, BigInteger, PrimeField};

use crate::config::{BYTES_PER_BLOB, BYTES_PER_FIELD_ELEMENT};
use crate::error::{Result, ShnarfError};
use crate::types::Hash32;

/// A full blob: compressed data zero-padded to `BYTES_PER_BLOB`.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    data_len: usize,
}

impl Blob {
    /// Packs compressed data into a blob.
    ///
    /// Every 32-byte chunk must already be a canonical scalar; the compressor
    /// upstream packs its output so that this holds.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(ShnarfError::EmptyData);
        }
        if data.len() > BYTES_PER_BLOB {
            return Err(ShnarfError::DataTooLarge {
                size: data.len(),
                max: BYTES_PER_BLOB,
            });
        }

        let mut bytes = vec![0u8; BYTES_PER_BLOB];
        bytes[..data.len()].copy_from_slice(data);

        let blob = Self {
            bytes,
            data_len: data.len(),
        };
        if let Some(index) = blob.first_non_canonical_element() {
            return Err(ShnarfError::NonCanonicalElement { index });
        }
        Ok(blob)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the compressed data before padding.
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    fn first_non_canonical_element(&self) -> Option<usize> {
        self.bytes
            .chunks_exact(BYTES_PER_FIELD_ELEMENT)
            // Only the data prefix can be non-zero.
            .take(self.data_len.div_ceil(BYTES_PER_FIELD_ELEMENT))
            .position(|chunk| {
                let mut element = [0u8; 32];
                element.copy_from_slice(chunk);
                !is_canonical_scalar(&element)
            })
    }
}

impl std::fmt::Debug for Blob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blob").field("data_len", &self.data_len).finish()
    }
}

/// True if the big-endian value is strictly below the scalar field order.
pub fn is_canonical_scalar(bytes: &[u8; 32]) -> bool {
    be_bytes_to_bigint(bytes) < Fr::MODULUS
}

/// Reduces a big-endian 32-byte value modulo the BLS12-381 scalar field order.
pub fn reduce_to_scalar(value: &Hash32) -> Hash32 {
    let reduced = Fr::from_be_bytes_mod_order(value.as_bytes()).into_bigint();
    let mut out = [0u8; 32];
    out.copy_from_slice(&reduced.to_bytes_be());
    Hash32(out)
}

fn be_bytes_to_bigint(bytes: &[u8; 32]) -> BigInt<4> {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let end = 32 - i * 8;
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[end - 8..end]);
        *limb = u64::from_be_bytes(word);
    }
    BigInt::new(limbs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULUS_HEX: &str = "0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

    #[test]
    fn test_blob_padding() {
        let blob = Blob::from_data(&[1, 2, 3]).unwrap();
        assert_eq!(blob.as_bytes().len(), BYTES_PER_BLOB);
        assert_eq!(&blob.as_bytes()[..3], &[1, 2, 3]);
        assert!(blob.as_bytes()[3..].iter().all(|b| *b == 0));
        assert_eq!(blob.data_len(), 3);
    }

    #[test]
    fn test_blob_bounds() {
        assert_eq!(Blob::from_data(&[]), Err(ShnarfError::EmptyData));
        assert!(Blob::from_data(&vec![0u8; BYTES_PER_BLOB]).is_ok());
        assert_eq!(
            Blob::from_data(&vec![0u8; BYTES_PER_BLOB + 1]),
            Err(ShnarfError::DataTooLarge {
                size: BYTES_PER_BLOB + 1,
                max: BYTES_PER_BLOB
            })
        );
    }

    #[test]
    fn test_blob_rejects_non_canonical_element() {
        let mut data = vec![0u8; 64];
        data[32..].fill(0xff);
        assert_eq!(
            Blob::from_data(&data),
            Err(ShnarfError::NonCanonicalElement { index: 1 })
        );
    }

    #[test]
    fn test_modulus_boundary() {
        let modulus = Hash32::from_hex("modulus", MODULUS_HEX).unwrap();
        assert!(!is_canonical_scalar(modulus.as_bytes()));

        let mut below = modulus;
        below.0[31] = 0x00;
        assert!(is_canonical_scalar(below.as_bytes()));

        assert_eq!(reduce_to_scalar(&modulus), Hash32::ZERO);
    }

    #[test]
    fn test_reduce_keeps_canonical_values() {
        let mut value = [0u8; 32];
        value[31] = 42;
        assert_eq!(reduce_to_scalar(&Hash32(value)), Hash32(value));

        let reduced = reduce_to_scalar(&Hash32([0xff; 32]));
        assert!(is_canonical_scalar(reduced.as_bytes()));
        assert_ne!(reduced, Hash32([0xff; 32]));
    }
}
