//! # UUID Generation
//!
//! Wraps the `uuid` crate for the two versions naming policies support:
//!
//! - **Version 4**: random.
//! - **Version 1**: time and node based. The node id is a random 48-bit
//!   value with the multicast bit set (RFC 4122 §4.5), drawn once per
//!   process, so no hardware address is disclosed in filenames.

use std::sync::OnceLock;

use uuid::Uuid;

use crate::entropy::{OsRandom, SecureRandom};
use crate::error::NamingError;

/// A supported UUID version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UuidVersion {
    /// Time and node based.
    V1,
    /// Random.
    V4,
}

impl UuidVersion {
    /// The numeric version as written in configs.
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::V1 => 1,
            Self::V4 => 4,
        }
    }

    /// Generate a fresh identifier of this version.
    pub fn generate(&self) -> Uuid {
        match self {
            Self::V1 => Uuid::now_v1(node_id()),
            Self::V4 => Uuid::new_v4(),
        }
    }
}

impl TryFrom<i64> for UuidVersion {
    type Error = NamingError;

    fn try_from(version: i64) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(Self::V1),
            4 => Ok(Self::V4),
            other => Err(NamingError::UnsupportedVersion(other)),
        }
    }
}

fn node_id() -> &'static [u8; 6] {
    static NODE_ID: OnceLock<[u8; 6]> = OnceLock::new();
    NODE_ID.get_or_init(|| {
        let mut node = [0u8; 6];
        OsRandom.fill(&mut node);
        node[0] |= 0x01;
        node
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v4_has_version_4() {
        assert_eq!(UuidVersion::V4.generate().get_version_num(), 4);
    }

    #[test]
    fn v1_has_version_1() {
        assert_eq!(UuidVersion::V1.generate().get_version_num(), 1);
    }

    #[test]
    fn v1_node_has_multicast_bit() {
        assert_eq!(node_id()[0] & 0x01, 0x01);
    }

    #[test]
    fn fresh_each_call() {
        assert_ne!(UuidVersion::V4.generate(), UuidVersion::V4.generate());
        assert_ne!(UuidVersion::V1.generate(), UuidVersion::V1.generate());
    }

    #[test]
    fn try_from_numbers() {
        assert_eq!(UuidVersion::try_from(1).unwrap(), UuidVersion::V1);
        assert_eq!(UuidVersion::try_from(4).unwrap(), UuidVersion::V4);
        for bad in [0, 2, 3, 5, -4] {
            match UuidVersion::try_from(bad) {
                Err(NamingError::UnsupportedVersion(v)) => assert_eq!(v, bad),
                other => panic!("expected UnsupportedVersion, got {other:?}"),
            }
        }
    }

    #[test]
    fn canonical_text_form() {
        let s = UuidVersion::V4.generate().to_string();
        assert_eq!(s.len(), 36);
        assert!(s.chars().all(|c| c == '-' || (c.is_ascii_hexdigit() && !c.is_ascii_uppercase())));
    }
}
