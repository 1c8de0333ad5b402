//! Value types the API exchanges as hex: fixed-width addresses and hashes,
//! and variable-length byte strings.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::codec::parse_fixed;
use crate::UnmarshalError;

/// Size of an account address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Size of a block or transaction hash in bytes.
pub const HASH_LENGTH: usize = 32;

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Wrap raw bytes.
            pub const fn new(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }

            /// Build from a slice of exactly the right length.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, UnmarshalError> {
                let bytes: [u8; $len] = bytes.try_into().map_err(|_| {
                    UnmarshalError::InvalidLength { expected: $len, got: bytes.len() }
                })?;
                Ok($name(bytes))
            }

            /// Borrow the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// True for the all-zero value.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }
        }

        /// Lower-case `0x`-prefixed hex.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({self})", stringify!($name))
            }
        }

        /// Parse hex of exactly the right width; the `0x` prefix is optional.
        impl FromStr for $name {
            type Err = UnmarshalError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_fixed(s).map($name)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }
        }
    };
}

fixed_bytes!(
    /// A 20-byte account or contract address.
    Address,
    ADDRESS_LENGTH
);

fixed_bytes!(
    /// A 32-byte block hash, transaction hash or log topic.
    Hash,
    HASH_LENGTH
);

/// A variable-length byte string, hex-encoded on the wire.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    /// Unwrap the inner buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Bytes(bytes.to_vec())
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes({self})")
    }
}
