// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants.

/// Bytes in one EIP-4844 blob.
pub const BYTES_PER_BLOB: usize = 131_072;

/// Bytes per BLS12-381 scalar packed into a blob.
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// Field elements per blob.
pub const FIELD_ELEMENTS_PER_BLOB: usize = BYTES_PER_BLOB / BYTES_PER_FIELD_ELEMENT;

/// Version byte prepended to the truncated SHA-256 of a KZG commitment.
pub const VERSIONED_HASH_VERSION_KZG: u8 = 0x01;

/// Shnarf of the genesis state on mainnet, the default parent of the first blob.
pub const GENESIS_SHNARF: [u8; 32] = [
    0x4f, 0x64, 0xfe, 0x1c, 0xe6, 0x13, 0x54, 0x6d, 0x34, 0xd6, 0x66, 0xd8, 0x25, 0x8c, 0x13, 0xc6,
    0x29, 0x68, 0x20, 0xfd, 0x13, 0x11, 0x4d, 0x78, 0x42, 0x03, 0xfe, 0xb9, 0x12, 0x76, 0xe8, 0x38,
];
