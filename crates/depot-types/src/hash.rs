use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// BLAKE3 digest of submitted content.
///
/// Identical content always produces the same `ContentHash`, which together
/// with the content length forms the [`ContentIdentity`] deduplication key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Compute the hash of the given content.
    pub fn of(content: &str) -> Self {
        Self(*blake3::hash(content.as_bytes()).as_bytes())
    }

    /// Create a `ContentHash` from a pre-computed digest.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.short_hex())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// The deduplication key for submitted content: byte length plus hash.
///
/// Two submissions are considered the same content when both fields match.
/// The stored payload is never re-compared; a hash collision between
/// different content of the same length is an accepted, unhandled risk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentIdentity {
    /// Content length in bytes.
    pub size: u64,
    /// BLAKE3 digest of the content.
    pub hash: ContentHash,
}

impl ContentIdentity {
    /// Compute the identity of the given content.
    pub fn of(content: &str) -> Self {
        Self {
            size: content.len() as u64,
            hash: ContentHash::of(content),
        }
    }
}

impl fmt::Display for ContentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}b:{}", self.size, self.hash.short_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hash_is_deterministic() {
        let h1 = ContentHash::of("hello world");
        let h2 = ContentHash::of("hello world");
        assert_eq!(h1, h2);
    }

    #[test]
    fn different_content_produces_different_hashes() {
        assert_ne!(ContentHash::of("hello"), ContentHash::of("world"));
    }

    #[test]
    fn hex_roundtrip() {
        let hash = ContentHash::of("test");
        let parsed = ContentHash::from_hex(&hash.to_hex()).unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn from_hex_rejects_bad_length() {
        let err = ContentHash::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(matches!(
            ContentHash::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn short_hex_is_8_chars() {
        assert_eq!(ContentHash::of("test").short_hex().len(), 8);
    }

    #[test]
    fn identity_of_empty_content() {
        let identity = ContentIdentity::of("");
        assert_eq!(identity.size, 0);
        assert_eq!(identity.hash, ContentHash::of(""));
    }

    #[test]
    fn identity_size_counts_bytes_not_chars() {
        // Multi-byte UTF-8: 5 characters, 6 bytes.
        let identity = ContentIdentity::of("héllo");
        assert_eq!(identity.size, 6);
    }

    #[test]
    fn serde_roundtrip() {
        let identity = ContentIdentity::of("serde test");
        let json = serde_json::to_string(&identity).unwrap();
        let parsed: ContentIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(identity, parsed);
    }

    proptest! {
        #[test]
        fn identity_equality_tracks_content_equality(a in ".*", b in ".*") {
            let ia = ContentIdentity::of(&a);
            let ib = ContentIdentity::of(&b);
            if a == b {
                prop_assert_eq!(ia, ib);
            } else {
                prop_assert_ne!(ia, ib);
            }
        }
    }
}
