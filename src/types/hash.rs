// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! 32-byte digests: data/snark hashes, state roots, shnarfs and evaluation values.

fixed_bytes!(
    /// A 32-byte value, big-endian when it encodes a field element.
    Hash32,
    32
);
