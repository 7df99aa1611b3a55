// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Typed byte values exchanged with the commitment engine.
//!
//! Every value crosses the wire as a `0x`-prefixed lowercase hex string.
//! Parsing accepts either case and an optional prefix, but the length is
//! always checked against the fixed width of the type.

use crate::error::{Result, ShnarfError};

/// Declares a fixed-width byte newtype with hex parsing, formatting and serde.
macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const LEN: usize = $len;
            pub const ZERO: Self = Self([0u8; $len]);

            /// Parses a hex string, tagging errors with `field`.
            pub fn from_hex(field: &'static str, s: &str) -> $crate::error::Result<Self> {
                let bytes = $crate::types::decode_hex(field, s)?;
                Self::from_slice(field, &bytes)
            }

            pub fn from_slice(field: &'static str, bytes: &[u8]) -> $crate::error::Result<Self> {
                let arr: [u8; $len] = bytes.try_into().map_err(|_| {
                    $crate::error::ShnarfError::InvalidLength {
                        field,
                        expected: $len,
                        found: bytes.len(),
                    }
                })?;
                Ok(Self(arr))
            }

            pub fn to_hex(&self) -> String {
                $crate::types::encode_hex(&self.0)
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ShnarfError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_hex(stringify!($name), s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_hex(stringify!($name), &s).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub mod conflation;
pub mod hash;
pub mod point;

pub use conflation::ConflationOrder;
pub use hash::Hash32;
pub use point::G1Bytes;

/// Decodes a hex string with an optional `0x` prefix.
pub fn decode_hex(field: &'static str, s: &str) -> Result<Vec<u8>> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits).map_err(|e| ShnarfError::InvalidHex {
        field,
        reason: e.to_string(),
    })
}

/// Encodes bytes as `0x`-prefixed lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
