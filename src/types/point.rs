// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Compressed BLS12-381 G1 encodings.

fixed_bytes!(
    /// A compressed G1 point: a KZG commitment or a KZG proof.
    G1Bytes,
    48
);
