//! SDK package catalog
//!
//! The SDK repository publishes an `Updates.xml` document enumerating every
//! package it carries. This module parses that document into a flat,
//! validated list of [`PackageUpdate`] records so downstream matching never
//! has to care about the markup shape. Only the base package for the target
//! toolchain and the requested addon-module packages are retained.

use tracing::debug;

use crate::core::version::SdkVersion;
use crate::error::CatalogError;

/// One retained catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUpdate {
    /// Fully qualified package name
    pub name: String,
    /// Package version prefix used in archive URLs
    pub version: String,
    /// Downloadable archive filenames, in document order
    pub archives: Vec<String>,
}

/// Base package name for a toolchain
pub fn base_package_name(version: &SdkVersion, toolchain: &str) -> String {
    format!("qt.qt{}.{}.{}", version.major, version.concat, toolchain)
}

/// Addon-module package name for a toolchain
pub fn addon_package_name(version: &SdkVersion, module: &str, toolchain: &str) -> String {
    format!(
        "qt.qt{}.{}.addons.{}.{}",
        version.major, version.concat, module, toolchain
    )
}

/// Parse a catalog document, retaining only the named packages
///
/// Entries are returned in document order. Malformed XML and retained
/// entries missing a required element are both fatal; packages outside the
/// retained set are skipped without further validation.
pub fn parse_catalog(xml: &str, retain: &[String]) -> Result<Vec<PackageUpdate>, CatalogError> {
    let document = roxmltree::Document::parse(xml).map_err(|e| CatalogError::Malformed {
        error: e.to_string(),
    })?;

    let mut packages = Vec::new();

    for node in document
        .descendants()
        .filter(|n| n.has_tag_name("PackageUpdate"))
    {
        let name = child_text(&node, "Name").ok_or_else(|| CatalogError::MissingElement {
            package: "<unnamed>".to_string(),
            element: "Name".to_string(),
        })?;

        if !retain.iter().any(|r| r == &name) {
            continue;
        }

        let version = child_text(&node, "Version").ok_or_else(|| CatalogError::MissingElement {
            package: name.clone(),
            element: "Version".to_string(),
        })?;

        let archives_text =
            child_text(&node, "DownloadableArchives").ok_or_else(|| CatalogError::MissingElement {
                package: name.clone(),
                element: "DownloadableArchives".to_string(),
            })?;

        let archives = split_archive_list(&archives_text);

        debug!(package = %name, version = %version, archives = archives.len(), "retained catalog entry");

        packages.push(PackageUpdate {
            name,
            version,
            archives,
        });
    }

    Ok(packages)
}

fn child_text(node: &roxmltree::Node<'_, '_>, tag: &str) -> Option<String> {
    node.children()
        .find(|c| c.has_tag_name(tag))
        .and_then(|c| c.text())
        .map(str::to_string)
}

/// Split the comma-separated `DownloadableArchives` text
///
/// The repository pads entries with whitespace after the separator.
fn split_archive_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
