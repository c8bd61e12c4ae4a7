//! Archive extraction with progress reporting
//!
//! Extracts a downloaded archive from memory into the destination
//! directory. Progress is reported as cumulative uncompressed bytes written
//! against the pre-computed total of all entries; the observer is purely for
//! display and has no effect on extraction.

use std::io::Cursor;
use std::path::Path;

use zip::ZipArchive;

use crate::error::ExtractError;
use crate::infra::download::ProgressCallback;

/// Extract all entries of `bytes` into `dest`
///
/// Intermediate directories are created as needed. Entries resolving
/// outside the destination are rejected as corrupt. Verification has
/// already happened by the time this runs; a failure here is fatal and no
/// partial cleanup is attempted.
pub fn extract_archive(
    bytes: &[u8],
    archive_name: &str,
    dest: &Path,
    progress: Option<&ProgressCallback>,
) -> Result<(), ExtractError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Corrupted {
            archive: archive_name.to_string(),
            error: e.to_string(),
        })?;

    let total = total_uncompressed_size(&mut archive, archive_name)?;
    let mut written: u64 = 0;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| ExtractError::Corrupted {
            archive: archive_name.to_string(),
            error: e.to_string(),
        })?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(ExtractError::Corrupted {
                archive: archive_name.to_string(),
                error: format!("entry '{}' escapes the destination", entry.name()),
            });
        };
        let path = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&path).map_err(|e| ExtractError::Io {
                path: path.clone(),
                error: e.to_string(),
            })?;
            continue;
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ExtractError::Io {
                path: parent.to_path_buf(),
                error: e.to_string(),
            })?;
        }

        let mut file = std::fs::File::create(&path).map_err(|e| ExtractError::Io {
            path: path.clone(),
            error: e.to_string(),
        })?;

        let copied = std::io::copy(&mut entry, &mut file).map_err(|e| ExtractError::Io {
            path: path.clone(),
            error: e.to_string(),
        })?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode));
        }

        written += copied;
        if let Some(cb) = progress {
            cb(written, total);
        }
    }

    Ok(())
}

/// Sum the uncompressed sizes of all file entries
fn total_uncompressed_size(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    archive_name: &str,
) -> Result<u64, ExtractError> {
    let mut total = 0;
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(|e| ExtractError::Corrupted {
            archive: archive_name.to_string(),
            error: e.to_string(),
        })?;
        if !entry.is_dir() {
            total += entry.size();
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn build_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_creates_nested_layout() {
        let bytes = build_archive(&[
            ("Tools/QtCreator/bin/qtcreator", b"binary"),
            ("Tools/QtCreator/lib/libA.so", b"library"),
        ]);
        let dest = TempDir::new().unwrap();

        extract_archive(&bytes, "qtcreator.7z", dest.path(), None).unwrap();

        assert_eq!(
            std::fs::read(dest.path().join("Tools/QtCreator/bin/qtcreator")).unwrap(),
            b"binary"
        );
        assert_eq!(
            std::fs::read(dest.path().join("Tools/QtCreator/lib/libA.so")).unwrap(),
            b"library"
        );
    }

    #[test]
    fn test_extract_reports_cumulative_progress() {
        let bytes = build_archive(&[("a.txt", b"12345"), ("b.txt", b"678")]);
        let dest = TempDir::new().unwrap();

        let updates = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let updates_cb = updates.clone();
        let progress: ProgressCallback = Box::new(move |written, total| {
            updates_cb.lock().unwrap().push((written, total));
        });

        extract_archive(&bytes, "a.7z", dest.path(), Some(&progress)).unwrap();

        let updates = updates.lock().unwrap();
        assert_eq!(*updates, vec![(5, 8), (8, 8)]);
    }

    #[test]
    fn test_extract_corrupt_archive_fails() {
        let dest = TempDir::new().unwrap();
        let err = extract_archive(b"not an archive", "bad.7z", dest.path(), None).unwrap_err();
        match err {
            ExtractError::Corrupted { archive, .. } => assert_eq!(archive, "bad.7z"),
            e => panic!("Expected Corrupted, got: {e:?}"),
        }
    }

    #[test]
    fn test_extract_overwrites_existing_files() {
        // Reruns into the same destination are expected to overwrite.
        let bytes = build_archive(&[("file.txt", b"new")]);
        let dest = TempDir::new().unwrap();
        std::fs::write(dest.path().join("file.txt"), b"old").unwrap();

        extract_archive(&bytes, "a.7z", dest.path(), None).unwrap();

        assert_eq!(std::fs::read(dest.path().join("file.txt")).unwrap(), b"new");
    }
}
