//! SHA-256 digest type and its hex encoding

use crate::{Error, Result};
use sha2::{Digest as _, Sha256};
use std::fmt;

/// Length of a raw digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Length of a hex-encoded digest in characters
pub const HEX_LEN: usize = 2 * DIGEST_LEN;

/// A 32-byte SHA-256 digest
///
/// The hex form matters beyond display: parent nodes in the tree hash the
/// concatenated *hex strings* of their children's digests, so [`to_hex`]
/// output is also hash input.
///
/// [`to_hex`]: Digest::to_hex
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Create a digest from raw bytes
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }

    /// Hash arbitrary data
    ///
    /// Total over all inputs, the empty slice included.
    pub fn digest(data: &[u8]) -> Self {
        Digest(Sha256::digest(data).into())
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to a 64-character lowercase hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != HEX_LEN {
            return Err(Error::InvalidDigest(format!(
                "expected {} hex characters, got {}",
                HEX_LEN,
                s.len()
            )));
        }
        let bytes =
            hex::decode(s).map_err(|e| Error::InvalidDigest(format!("{}: {:?}", e, s)))?;
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Digest(arr))
    }

    /// Get a short prefix for display (first 7 chars, like git)
    pub fn short(&self) -> String {
        self.to_hex()[..7].to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
