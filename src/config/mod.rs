//! Run configuration
//!
//! Loads the user-supplied `versions.yaml` and detects the host platform.
//! The configuration is immutable for the duration of a run.

pub mod urls;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Version and module selection, as read from `versions.yaml`
#[derive(Debug, Clone, Deserialize)]
pub struct Versions {
    /// Qt Creator version, 1-3 dot-separated components
    pub qtc_version: String,

    /// Pre-release qualifier; empty or absent selects the official channel
    #[serde(default)]
    pub qtc_dev_tag: String,

    /// Qt Creator modules to install, in order
    pub qtc_modules: Vec<String>,

    /// Qt SDK version, exactly two dot-separated components
    pub qt_version: String,

    /// Qt SDK modules to install, in order
    pub qt_modules: Vec<String>,
}

/// Complete configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw operating system identifier (e.g. `linux`, `windows`, `macos`)
    pub os: String,

    /// Raw machine architecture identifier (e.g. `x86_64`, `aarch64`)
    pub arch: String,

    /// Version and module selection
    pub versions: Versions,
}

impl Config {
    /// Build a configuration for the host platform
    pub fn for_host(versions: Versions) -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            versions,
        }
    }

    /// Build a configuration for an explicit platform
    pub fn for_platform(os: &str, arch: &str, versions: Versions) -> Self {
        Self {
            os: os.to_string(),
            arch: arch.to_string(),
            versions,
        }
    }
}

/// Load the version configuration from a YAML file
///
/// An unreadable file and a file that does not parse are distinct
/// failures; callers report them differently.
pub fn load_versions(path: &Path) -> Result<Versions, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Default destination root when no install path is given
///
/// Everything is placed under a `qtc-sdk` directory so a rerun can be
/// pointed at the same location or the whole tree removed in one go.
pub fn default_install_root() -> PathBuf {
    std::env::temp_dir()
}

/// Name of the directory created under the install root
pub const INSTALL_SUBDIR: &str = "qtc-sdk";

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_VERSIONS: &str = r"
qtc_version: '13.0.2'
qtc_modules:
  - qtcreator
  - qtcreator_dev
qt_version: '6.7'
qt_modules:
  - qtbase
  - qtdeclarative
";

    #[test]
    fn test_load_versions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("versions.yaml");
        std::fs::write(&path, SAMPLE_VERSIONS).unwrap();

        let versions = load_versions(&path).unwrap();
        assert_eq!(versions.qtc_version, "13.0.2");
        assert_eq!(versions.qtc_dev_tag, "");
        assert_eq!(versions.qtc_modules, vec!["qtcreator", "qtcreator_dev"]);
        assert_eq!(versions.qt_version, "6.7");
        assert_eq!(versions.qt_modules, vec!["qtbase", "qtdeclarative"]);
    }

    #[test]
    fn test_load_versions_with_dev_tag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("versions.yaml");
        std::fs::write(
            &path,
            "qtc_version: '14.0'\nqtc_dev_tag: 'beta2'\nqtc_modules: [qtcreator]\nqt_version: '6.8'\nqt_modules: [qtbase]\n",
        )
        .unwrap();

        let versions = load_versions(&path).unwrap();
        assert_eq!(versions.qtc_dev_tag, "beta2");
    }

    #[test]
    fn test_load_versions_missing_file() {
        let err = load_versions(Path::new("/nonexistent/versions.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }), "got: {err:?}");
    }

    #[test]
    fn test_load_versions_missing_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("versions.yaml");
        std::fs::write(&path, "qtc_version: '13.0'\n").unwrap();

        let err = load_versions(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "got: {err:?}");
    }

    #[test]
    fn test_load_versions_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("versions.yaml");
        std::fs::write(&path, "qtc_version: [unclosed\n").unwrap();

        let err = load_versions(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "got: {err:?}");
    }

    #[test]
    fn test_for_host_uses_process_platform() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("versions.yaml");
        std::fs::write(&path, SAMPLE_VERSIONS).unwrap();

        let config = Config::for_host(load_versions(&path).unwrap());
        assert_eq!(config.os, std::env::consts::OS);
        assert_eq!(config.arch, std::env::consts::ARCH);
    }
}
