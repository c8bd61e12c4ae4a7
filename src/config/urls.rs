//! Repository URL layout
//!
//! Both Qt repositories live under one download server but are structured
//! independently. The builders take the server base as a parameter so tests
//! can point the pipeline at a mock server.

/// Qt download server
pub const DOWNLOAD_SERVER: &str = "https://download.qt.io";

/// Aggregate MD5 manifest name in the Qt Creator repository
pub const QTC_CHECKSUM_MANIFEST: &str = "md5sums.txt";

/// Catalog document name in the Qt SDK repository
pub const SDK_CATALOG_DOCUMENT: &str = "Updates.xml";

/// Base URL of a Qt Creator release directory
///
/// `release_channel` is `official` for releases and `development` for
/// beta/rc builds.
pub fn qtc_repository(
    server: &str,
    release_channel: &str,
    ver_major_minor: &str,
    ver_full: &str,
    os: &str,
    arch: &str,
) -> String {
    format!("{server}/{release_channel}_releases/qtcreator/{ver_major_minor}/{ver_full}/installer_source/{os}_{arch}")
}

/// Base URL of a Qt SDK repository directory
///
/// The version directory appears twice in the path; that is the actual
/// repository layout, not a typo.
pub fn sdk_repository(
    server: &str,
    os: &str,
    arch: &str,
    ver_major: &str,
    ver_concat: &str,
) -> String {
    format!("{server}/online/qtsdkrepository/{os}_{arch}/desktop/qt{ver_major}_{ver_concat}/qt{ver_major}_{ver_concat}")
}
