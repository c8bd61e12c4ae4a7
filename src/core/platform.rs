//! Platform mapping
//!
//! Translates raw OS and machine-architecture identifiers into the naming
//! convention of the Qt download repositories, and the resolved pair into
//! the toolchain identifier used by the SDK repository. All lookups are
//! exact matches against static tables; unknown values are errors, never
//! defaults.

use crate::error::PlatformError;

/// Raw OS identifier -> repository OS token
const OS_MAP: &[(&str, &str)] = &[
    ("linux", "linux"),
    ("windows", "windows"),
    ("macos", "mac"),
];

/// Raw machine architecture -> repository arch token
///
/// The aliases cover the spellings reported by different detection sources
/// (uname, Windows environment, explicit CLI overrides).
const ARCH_MAP: &[(&str, &str)] = &[
    ("i386", "x86"),
    ("i686", "x86"),
    ("x86", "x86"),
    ("x86_64", "x64"),
    ("x64", "x64"),
    ("AMD64", "x64"),
    ("aarch64", "arm64"),
    ("arm64", "arm64"),
];

/// (OS token, arch token) -> SDK toolchain identifier
///
/// Only combinations the SDK repository actually offers are listed.
const TOOLCHAIN_MAP: &[(&str, &str, &str)] = &[
    ("linux", "x64", "linux_gcc_64"),
    ("linux", "arm64", "linux_gcc_arm64"),
    ("windows", "x64", "win64_msvc2022_64"),
    ("windows", "arm64", "win64_msvc2022_arm64"),
    ("mac", "x64", "clang_64"),
];

/// Resolved platform tokens for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// Repository OS token
    pub os: String,
    /// Repository arch token
    pub arch: String,
}

impl Platform {
    /// Resolve raw OS and architecture identifiers into repository tokens
    ///
    /// macOS distributes a universal binary under the `x64` directory, so
    /// its architecture is forced to that token before any lookup.
    pub fn resolve(raw_os: &str, raw_arch: &str) -> Result<Self, PlatformError> {
        let os = lookup_os(raw_os)?;

        let raw_arch = if os == "mac" { "x64" } else { raw_arch };
        let arch = lookup_arch(raw_arch)?;

        Ok(Self {
            os: os.to_string(),
            arch: arch.to_string(),
        })
    }

    /// The SDK toolchain identifier for this platform
    pub fn toolchain(&self) -> Result<&'static str, PlatformError> {
        TOOLCHAIN_MAP
            .iter()
            .find(|(os, arch, _)| *os == self.os && *arch == self.arch)
            .map(|(_, _, toolchain)| *toolchain)
            .ok_or_else(|| PlatformError::UnsupportedToolchain {
                os: self.os.clone(),
                arch: self.arch.clone(),
            })
    }

    /// Arch token used in SDK repository URLs
    ///
    /// The Windows repository stores 32- and 64-bit binaries under the same
    /// 32-bit directory.
    pub fn sdk_url_arch(&self) -> &str {
        if self.os == "windows" {
            "x86"
        } else {
            &self.arch
        }
    }
}

fn lookup_os(raw: &str) -> Result<&'static str, PlatformError> {
    OS_MAP
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, token)| *token)
        .ok_or_else(|| PlatformError::UnsupportedOs { os: raw.to_string() })
}

fn lookup_arch(raw: &str) -> Result<&'static str, PlatformError> {
    ARCH_MAP
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, token)| *token)
        .ok_or_else(|| PlatformError::UnsupportedArch {
            arch: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_platforms() {
        let cases = [
            ("linux", "x86_64", "linux", "x64", "linux_gcc_64"),
            ("linux", "aarch64", "linux", "arm64", "linux_gcc_arm64"),
            ("windows", "x86_64", "windows", "x64", "win64_msvc2022_64"),
            ("windows", "AMD64", "windows", "x64", "win64_msvc2022_64"),
            ("windows", "aarch64", "windows", "arm64", "win64_msvc2022_arm64"),
            ("macos", "x86_64", "mac", "x64", "clang_64"),
        ];

        for (raw_os, raw_arch, os, arch, toolchain) in cases {
            let platform = Platform::resolve(raw_os, raw_arch).unwrap();
            assert_eq!(platform.os, os, "os token for {raw_os}/{raw_arch}");
            assert_eq!(platform.arch, arch, "arch token for {raw_os}/{raw_arch}");
            assert_eq!(platform.toolchain().unwrap(), toolchain);
        }
    }

    #[test]
    fn test_mac_forces_universal_arch() {
        // The universal binary lives under x64 whatever the machine reports.
        let platform = Platform::resolve("macos", "aarch64").unwrap();
        assert_eq!(platform.arch, "x64");
        assert_eq!(platform.toolchain().unwrap(), "clang_64");
    }

    #[test]
    fn test_arch_aliases() {
        for raw in ["i386", "i686", "x86"] {
            assert_eq!(Platform::resolve("linux", raw).unwrap().arch, "x86");
        }
        for raw in ["x86_64", "x64", "AMD64"] {
            assert_eq!(Platform::resolve("linux", raw).unwrap().arch, "x64");
        }
    }

    #[test]
    fn test_unsupported_os() {
        let err = Platform::resolve("freebsd", "x86_64").unwrap_err();
        assert_eq!(
            err,
            PlatformError::UnsupportedOs {
                os: "freebsd".to_string()
            }
        );
    }

    #[test]
    fn test_unsupported_arch() {
        let err = Platform::resolve("linux", "riscv64").unwrap_err();
        assert_eq!(
            err,
            PlatformError::UnsupportedArch {
                arch: "riscv64".to_string()
            }
        );
    }

    #[test]
    fn test_toolchain_absence_is_an_error() {
        // 32-bit x86 resolves to valid tokens but no toolchain is offered.
        let platform = Platform::resolve("linux", "i686").unwrap();
        assert_eq!(
            platform.toolchain().unwrap_err(),
            PlatformError::UnsupportedToolchain {
                os: "linux".to_string(),
                arch: "x86".to_string()
            }
        );
    }

    #[test]
    fn test_sdk_url_arch_windows_quirk() {
        let windows = Platform::resolve("windows", "x86_64").unwrap();
        assert_eq!(windows.sdk_url_arch(), "x86");

        let linux = Platform::resolve("linux", "x86_64").unwrap();
        assert_eq!(linux.sdk_url_arch(), "x64");
    }
}
