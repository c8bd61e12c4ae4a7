//! Error types for qtsdk
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Configuration file is not valid version configuration
    #[error("Invalid configuration in '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Platform mapping errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlatformError {
    /// Operating system has no mapping entry
    #[error("Unsupported operating system '{os}'")]
    UnsupportedOs { os: String },

    /// Machine architecture has no mapping entry
    #[error("Unsupported architecture '{arch}'")]
    UnsupportedArch { arch: String },

    /// No toolchain is offered for this OS/architecture combination
    #[error("No toolchain available for {os}_{arch}")]
    UnsupportedToolchain { os: String, arch: String },
}

/// Version resolution errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// Version string has an unexpected number of components
    #[error("Invalid version '{version}': expected {expected}")]
    InvalidFormat { version: String, expected: String },

    /// Development tag lacks the required marker substring
    #[error("Invalid development tag '{tag}'. Valid tags contain 'beta' or 'rc'.")]
    InvalidDevTag { tag: String },
}

/// Network fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request failed before a response was received
    #[error("Network error retrieving '{url}': {error}")]
    Network { url: String, error: String },

    /// Server answered with a non-success status
    #[error("Error retrieving '{url}': HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Catalog document errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog document is not well-formed XML
    #[error("Failed to parse package catalog: {error}")]
    Malformed { error: String },

    /// A retained package entry is missing a required element
    #[error("Package entry '{package}' is missing element '{element}'")]
    MissingElement { package: String, element: String },
}

/// Module resolution errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// None of the requested modules matched any archive
    #[error("No matches for modules {modules:?} found")]
    NoModulesResolved { modules: Vec<String> },

    /// Manifest has no checksum entry for an archive
    #[error("No checksum listed for '{archive}'")]
    MissingChecksum { archive: String },
}

/// Archive extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Archive is corrupt or not in the expected format
    #[error("Archive '{archive}' is corrupt: {error}")]
    Corrupted { archive: String, error: String },

    /// Filesystem write failure while extracting
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Top-level qtsdk error type
#[derive(Error, Debug)]
pub enum InstallError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Platform mapping error
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Version resolution error
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Network fetch error
    #[error("Download error: {0}")]
    Fetch(#[from] FetchError),

    /// Catalog parse error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Module resolution error
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Downloaded bytes fail the integrity check
    #[error("{archive} {algorithm} hash sum does not match")]
    ChecksumMismatch { archive: String, algorithm: String },

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// IO error
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}
