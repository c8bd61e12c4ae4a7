//! Install pipelines
//!
//! Two orchestrators, one per repository kind, share a single
//! fetch-verify-extract step and differ only in how they resolve archives:
//! the Qt Creator repository derives archive names directly from the module
//! list and checks them against an aggregate MD5 manifest, the SDK
//! repository goes through the published catalog, the module matcher and
//! per-archive SHA-1 sidecars.
//!
//! Execution is strictly sequential and fail-fast: each archive is fully
//! downloaded, verified and extracted before the next begins, and the first
//! failure aborts the run with no rollback.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::{urls, Config};
use crate::core::catalog::{addon_package_name, base_package_name, parse_catalog};
use crate::core::checksum::{self, ChecksumAlgorithm};
use crate::core::matcher::match_modules;
use crate::core::platform::Platform;
use crate::core::version::{resolve_qtc_version, resolve_sdk_version};
use crate::error::{InstallError, ResolveError};
use crate::infra::download::{HttpFetcher, ProgressCallback};
use crate::infra::extract::extract_archive;

/// Content type declared for repository archives
const ARCHIVE_CONTENT_TYPE: &str = "application/x-7z-compressed";

/// Content type declared for the MD5 manifest
const MANIFEST_CONTENT_TYPE: &str = "text/plain";

/// Content type declared for the SDK catalog
const CATALOG_CONTENT_TYPE: &str = "application/xml";

/// Creates a per-archive extraction progress observer
///
/// Called with the archive filename; the returned callback receives
/// (cumulative bytes written, total uncompressed bytes).
pub type ProgressFactory = Box<dyn Fn(&str) -> ProgressCallback + Send + Sync>;

/// Where the expected checksum of an archive comes from
#[derive(Debug, Clone)]
enum ChecksumSource {
    /// Digest taken from the aggregate manifest before any download
    Known(String),
    /// Digest published in a sidecar document next to the archive
    Sidecar(String),
}

/// One archive fully resolved to a URL and an integrity check
#[derive(Debug, Clone)]
struct ResolvedArchive {
    /// Archive filename, used in messages and progress labels
    archive: String,
    /// Fully qualified download URL
    url: String,
    /// Digest algorithm of this repository
    algorithm: ChecksumAlgorithm,
    /// Expected digest or where to fetch it
    checksum: ChecksumSource,
}

/// Shared state of one installation run
pub struct Installer {
    fetcher: HttpFetcher,
    server: String,
    dest: PathBuf,
    progress: Option<ProgressFactory>,
}

impl Installer {
    /// Create an installer targeting the official download server
    pub fn new(dest: PathBuf) -> Self {
        Self::with_server(urls::DOWNLOAD_SERVER, dest)
    }

    /// Create an installer targeting an explicit server base URL
    pub fn with_server(server: &str, dest: PathBuf) -> Self {
        Self {
            fetcher: HttpFetcher::new(),
            server: server.trim_end_matches('/').to_string(),
            dest,
            progress: None,
        }
    }

    /// Attach an extraction progress observer
    pub fn with_progress(mut self, progress: ProgressFactory) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Destination root archives are extracted under
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Install the configured Qt Creator modules
    ///
    /// Resolves the release directory from the version and dev tag, reads
    /// the aggregate MD5 manifest, then fetches, verifies and extracts one
    /// `{module}.7z` archive per configured module. Returns the prefix path
    /// a build should point at.
    pub async fn install_qtc(&self, config: &Config) -> Result<PathBuf, InstallError> {
        let platform = Platform::resolve(&config.os, &config.arch)?;
        let version =
            resolve_qtc_version(&config.versions.qtc_version, &config.versions.qtc_dev_tag)?;

        let base_url = urls::qtc_repository(
            &self.server,
            version.release_channel,
            &version.major_minor,
            &version.full,
            &platform.os,
            &platform.arch,
        );

        let manifest = self
            .fetcher
            .fetch_text(
                &format!("{base_url}/{}", urls::QTC_CHECKSUM_MANIFEST),
                MANIFEST_CONTENT_TYPE,
            )
            .await?;
        let md5sums = parse_checksum_manifest(&manifest);

        let extract_dest = self.dest.join("Tools").join("QtCreator");

        for module in &config.versions.qtc_modules {
            let archive = format!("{module}.7z");
            let expected = md5sums
                .iter()
                .find(|(_, filename)| *filename == archive)
                .map(|(hash, _)| hash.clone())
                .ok_or_else(|| ResolveError::MissingChecksum {
                    archive: archive.clone(),
                })?;

            let resolved = ResolvedArchive {
                url: format!("{base_url}/{archive}"),
                archive,
                algorithm: ChecksumAlgorithm::Md5,
                checksum: ChecksumSource::Known(expected),
            };

            self.fetch_verify_extract(&resolved, &extract_dest).await?;
        }

        // The macOS bundle keeps headers and CMake packages under Resources.
        let installed = if platform.os == "mac" {
            extract_dest
                .join("Qt Creator.app")
                .join("Contents")
                .join("Resources")
        } else {
            extract_dest
        };

        Ok(installed)
    }

    /// Install the configured Qt SDK modules
    ///
    /// Fetches the package catalog, matches the requested modules against
    /// the retained packages and runs the shared pipeline for each matched
    /// archive. Returns the discovered version/toolchain prefix path.
    pub async fn install_sdk(&self, config: &Config) -> Result<PathBuf, InstallError> {
        let platform = Platform::resolve(&config.os, &config.arch)?;
        let toolchain = platform.toolchain()?;
        let version = resolve_sdk_version(&config.versions.qt_version)?;

        let base_url = urls::sdk_repository(
            &self.server,
            &platform.os,
            platform.sdk_url_arch(),
            &version.major,
            &version.concat,
        );

        let xml = self
            .fetcher
            .fetch_text(
                &format!("{base_url}/{}", urls::SDK_CATALOG_DOCUMENT),
                CATALOG_CONTENT_TYPE,
            )
            .await?;

        let mut retain = vec![base_package_name(&version, toolchain)];
        for module in &config.versions.qt_modules {
            retain.push(addon_package_name(&version, module, toolchain));
        }

        let catalog = parse_catalog(&xml, &retain)?;
        let matches = match_modules(&config.versions.qt_modules, &catalog)?;

        for m in &matches {
            let resolved = ResolvedArchive {
                url: format!(
                    "{base_url}/{}/{}{}",
                    m.package_name, m.package_version, m.archive
                ),
                archive: m.archive.clone(),
                algorithm: ChecksumAlgorithm::Sha1,
                checksum: ChecksumSource::Sidecar(format!(
                    "{base_url}/{}/{}{}.sha1",
                    m.package_name, m.package_version, m.archive
                )),
            };

            self.fetch_verify_extract(&resolved, &self.dest).await?;
        }

        self.discover_sdk_prefix(&version.major, &version.minor)
    }

    /// Shared per-archive pipeline: download, verify, extract
    ///
    /// The digest is computed over exactly the received bytes, and
    /// extraction never runs on unverified bytes.
    async fn fetch_verify_extract(
        &self,
        resolved: &ResolvedArchive,
        dest: &Path,
    ) -> Result<(), InstallError> {
        let body = self
            .fetcher
            .fetch(&resolved.url, ARCHIVE_CONTENT_TYPE, None)
            .await?;

        let expected = match &resolved.checksum {
            ChecksumSource::Known(digest) => digest.clone(),
            ChecksumSource::Sidecar(url) => {
                self.fetcher.fetch_text(url, MANIFEST_CONTENT_TYPE).await?
            }
        };

        if !checksum::verify(resolved.algorithm, &body, &expected) {
            return Err(InstallError::ChecksumMismatch {
                archive: resolved.archive.clone(),
                algorithm: resolved.algorithm.name().to_string(),
            });
        }

        let observer = self.progress.as_ref().map(|f| f(&resolved.archive));
        extract_archive(&body, &resolved.archive, dest, observer.as_ref())?;

        Ok(())
    }

    /// Discover the `{maj}.{min}.0/{arch}` prefix the SDK archives created
    ///
    /// The toolchain directory name is chosen by the repository, so it is
    /// discovered rather than derived. More than one directory means a
    /// previous run targeted another toolchain; the first (sorted) entry is
    /// used and a warning logged.
    fn discover_sdk_prefix(&self, major: &str, minor: &str) -> Result<PathBuf, InstallError> {
        let version_dir = self.dest.join(format!("{major}.{minor}.0"));

        let read_err = |e: std::io::Error| InstallError::Io {
            path: version_dir.clone(),
            error: e.to_string(),
        };

        let mut entries: Vec<String> = std::fs::read_dir(&version_dir)
            .map_err(read_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_err)?
            .into_iter()
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();

        let Some(first) = entries.first() else {
            return Err(InstallError::Io {
                path: version_dir,
                error: "no architecture directory found".to_string(),
            });
        };

        if entries.len() > 1 {
            warn!(
                path = %version_dir.display(),
                using = %first,
                "more than one architecture found, will use first"
            );
        }

        Ok(version_dir.join(first))
    }
}

/// Parse the aggregate `md5sums.txt` manifest
///
/// One `hash filename` pair per line, space-separated; blank and short
/// lines are ignored.
fn parse_checksum_manifest(manifest: &str) -> Vec<(String, String)> {
    manifest
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let hash = fields.next()?;
            let filename = fields.next()?;
            Some((hash.to_string(), filename.to_string()))
        })
        .collect()
}
