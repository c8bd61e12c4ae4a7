//! Version resolution
//!
//! The two repositories encode versions differently. The Qt Creator
//! repository uses `major.minor` and `major.minor.patch[-devtag]` path
//! segments; the SDK repository uses a single concatenated `{maj}{min}0`
//! token. Neither scheme is semver, so parsing is done by hand against the
//! exact component counts the repositories accept.

use crate::error::VersionError;

/// Resolved Qt Creator version path segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QtcVersion {
    /// `{major}.{minor}` directory name
    pub major_minor: String,
    /// `{major}.{minor}.{patch}` directory name, with `-{dev_tag}` appended
    /// for pre-releases
    pub full: String,
    /// Release channel path segment: `official` or `development`
    pub release_channel: &'static str,
}

/// Resolve a Qt Creator version string and optional dev tag
///
/// The version has 1-3 dot-separated components; missing minor and patch
/// default to 0. A non-empty dev tag must contain `beta` or `rc` and
/// redirects resolution to the development channel.
pub fn resolve_qtc_version(version: &str, dev_tag: &str) -> Result<QtcVersion, VersionError> {
    let release = dev_tag.is_empty();

    if !release && !dev_tag.contains("beta") && !dev_tag.contains("rc") {
        return Err(VersionError::InvalidDevTag {
            tag: dev_tag.to_string(),
        });
    }

    let components: Vec<&str> = version.split('.').collect();
    if components.is_empty() || components.len() > 3 {
        return Err(VersionError::InvalidFormat {
            version: version.to_string(),
            expected: "1 to 3 dot-separated components".to_string(),
        });
    }

    let major = components[0];
    let minor = components.get(1).copied().unwrap_or("0");
    let patch = components.get(2).copied().unwrap_or("0");

    let major_minor = format!("{major}.{minor}");
    let mut full = format!("{major_minor}.{patch}");
    if !release {
        full = format!("{full}-{dev_tag}");
    }

    Ok(QtcVersion {
        major_minor,
        full,
        release_channel: if release { "official" } else { "development" },
    })
}

/// Resolved Qt SDK version tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkVersion {
    /// Major component, used in package names and URL segments
    pub major: String,
    /// Minor component
    pub minor: String,
    /// Concatenated `{major}{minor}0` repository token
    pub concat: String,
}

/// Resolve a Qt SDK version string
///
/// The SDK repository keys its directories on a strictly two-component
/// version; anything else is a configuration error.
pub fn resolve_sdk_version(version: &str) -> Result<SdkVersion, VersionError> {
    let components: Vec<&str> = version.split('.').collect();
    let [major, minor] = components[..] else {
        return Err(VersionError::InvalidFormat {
            version: version.to_string(),
            expected: "exactly 2 dot-separated components".to_string(),
        });
    };

    Ok(SdkVersion {
        major: major.to_string(),
        minor: minor.to_string(),
        concat: format!("{major}{minor}0"),
    })
}
