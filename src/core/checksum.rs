//! Checksum verification for downloaded archives
//!
//! The Qt Creator repository publishes MD5 sums in an aggregate manifest;
//! the SDK repository publishes one SHA-1 sidecar per archive. Digests are
//! always computed over the exact bytes received from the network, before
//! anything is extracted.

use md5::Md5;
use sha1::{Digest, Sha1};

/// Checksum algorithms used by the Qt repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Md5,
    Sha1,
}

impl ChecksumAlgorithm {
    /// Algorithm name as used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
        }
    }
}

impl std::fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the hex digest of `data`
pub fn compute(algorithm: ChecksumAlgorithm, data: &[u8]) -> String {
    match algorithm {
        ChecksumAlgorithm::Md5 => {
            let mut hasher = Md5::new();
            hasher.update(data);
            hex::encode(hasher.finalize())
        }
        ChecksumAlgorithm::Sha1 => {
            let mut hasher = Sha1::new();
            hasher.update(data);
            hex::encode(hasher.finalize())
        }
    }
}

/// Check `data` against an expected hex digest, case-insensitively
pub fn verify(algorithm: ChecksumAlgorithm, data: &[u8], expected: &str) -> bool {
    compute(algorithm, data).eq_ignore_ascii_case(expected.trim())
}
