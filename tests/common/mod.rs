//! Common test utilities and helpers
//!
//! Shared helpers for building mock repositories: in-memory archives,
//! checksum manifests and catalog documents.

use std::io::{Cursor, Write};

use qtsdk::core::checksum::{self, ChecksumAlgorithm};
use zip::write::SimpleFileOptions;

/// Build an in-memory archive from (path, content) pairs
pub fn build_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("Failed to start archive entry");
        writer.write_all(content).expect("Failed to write entry");
    }
    writer
        .finish()
        .expect("Failed to finish archive")
        .into_inner()
}

/// MD5 hex digest of `data`
pub fn md5_hex(data: &[u8]) -> String {
    checksum::compute(ChecksumAlgorithm::Md5, data)
}

/// SHA-1 hex digest of `data`
pub fn sha1_hex(data: &[u8]) -> String {
    checksum::compute(ChecksumAlgorithm::Sha1, data)
}

/// Render a `PackageUpdate` catalog document
pub fn catalog_xml(packages: &[(&str, &str, &[&str])]) -> String {
    let mut xml = String::from("<Updates>\n <ApplicationName>{AnyApplication}</ApplicationName>\n");
    for (name, version, archives) in packages {
        xml.push_str(" <PackageUpdate>\n");
        xml.push_str(&format!("  <Name>{name}</Name>\n"));
        xml.push_str(&format!("  <Version>{version}</Version>\n"));
        xml.push_str(&format!(
            "  <DownloadableArchives>{}</DownloadableArchives>\n",
            archives.join(", ")
        ));
        xml.push_str(" </PackageUpdate>\n");
    }
    xml.push_str("</Updates>\n");
    xml
}
