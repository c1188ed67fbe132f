//! # Hash Provider: Named Digest Algorithms
//!
//! Resolves algorithm names from policy configs to concrete hash
//! functions. Names are matched case-insensitively; an unrecognized name
//! is [`NamingError::UnknownAlgorithm`].
//!
//! Every fixed-length algorithm of the `hashlib` naming scheme is covered:
//!
//! | Family | Names | Crate |
//! |---|---|---|
//! | MD5 | `md5` | `md-5` |
//! | SHA-1 | `sha1` | `sha1` |
//! | SHA-2 | `sha224`, `sha256`, `sha384`, `sha512`, `sha512_224`, `sha512_256` | `sha2` |
//! | SHA-3 | `sha3_224`, `sha3_256`, `sha3_384`, `sha3_512` | `sha3` |
//! | BLAKE2 | `blake2b` (512-bit), `blake2s` (256-bit) | `blake2` |
//! | BLAKE3 | `blake3` | `blake3` |
//!
//! MD5 and SHA-1 are accepted for compatibility with existing naming
//! configs. A filename tag is not a security boundary.

use std::str::FromStr;

use blake2::{Blake2b512, Blake2s256};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::canonical::CanonicalBytes;
use crate::error::NamingError;

/// A supported digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256, the default for metadata hashing.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// SHA-512 truncated to 224 bits.
    Sha512_224,
    /// SHA-512 truncated to 256 bits.
    Sha512_256,
    /// SHA3-224.
    Sha3_224,
    /// SHA3-256.
    Sha3_256,
    /// SHA3-384.
    Sha3_384,
    /// SHA3-512.
    Sha3_512,
    /// BLAKE2b with a 512-bit output.
    Blake2b,
    /// BLAKE2s with a 256-bit output.
    Blake2s,
    /// BLAKE3 with its default 256-bit output.
    Blake3,
}

impl HashAlgorithm {
    /// Every supported algorithm, in declaration order.
    pub const ALL: [HashAlgorithm; 15] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512_224,
        Self::Sha512_256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Blake2b,
        Self::Blake2s,
        Self::Blake3,
    ];

    /// Returns the canonical algorithm name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha512_224 => "sha512_224",
            Self::Sha512_256 => "sha512_256",
            Self::Sha3_224 => "sha3_224",
            Self::Sha3_256 => "sha3_256",
            Self::Sha3_384 => "sha3_384",
            Self::Sha3_512 => "sha3_512",
            Self::Blake2b => "blake2b",
            Self::Blake2s => "blake2s",
            Self::Blake3 => "blake3",
        }
    }

    /// Length of the raw digest in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha512_224 | Self::Sha3_224 => 28,
            Self::Sha256 | Self::Sha512_256 | Self::Sha3_256 | Self::Blake2s | Self::Blake3 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b => 64,
        }
    }

    /// Hash raw bytes.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => Md5::digest(data).to_vec(),
            Self::Sha1 => Sha1::digest(data).to_vec(),
            Self::Sha224 => Sha224::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
            Self::Sha512_224 => Sha512_224::digest(data).to_vec(),
            Self::Sha512_256 => Sha512_256::digest(data).to_vec(),
            Self::Sha3_224 => Sha3_224::digest(data).to_vec(),
            Self::Sha3_256 => Sha3_256::digest(data).to_vec(),
            Self::Sha3_384 => Sha3_384::digest(data).to_vec(),
            Self::Sha3_512 => Sha3_512::digest(data).to_vec(),
            Self::Blake2b => Blake2b512::digest(data).to_vec(),
            Self::Blake2s => Blake2s256::digest(data).to_vec(),
            Self::Blake3 => blake3::hash(data).as_bytes().to_vec(),
        }
    }

    /// Hash canonical bytes and render the digest as lowercase hex.
    pub fn hex_digest(&self, data: &CanonicalBytes) -> String {
        to_hex(&self.digest(data.as_bytes()))
    }
}

impl FromStr for HashAlgorithm {
    type Err = NamingError;

    /// Parse an algorithm name. `-` and `_` are interchangeable, so
    /// `sha512-256` and `sha512_256` name the same algorithm.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "sha512_224" => Ok(Self::Sha512_224),
            "sha512_256" => Ok(Self::Sha512_256),
            "sha3_224" => Ok(Self::Sha3_224),
            "sha3_256" => Ok(Self::Sha3_256),
            "sha3_384" => Ok(Self::Sha3_384),
            "sha3_512" => Ok(Self::Sha3_512),
            "blake2b" => Ok(Self::Blake2b),
            "blake2s" => Ok(Self::Blake2s),
            "blake3" => Ok(Self::Blake3),
            _ => Err(NamingError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render bytes as a lowercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
