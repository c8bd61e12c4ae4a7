//! Module-to-archive matching
//!
//! Requested module names are abstract (`qtbase`, `qtcharts`); repository
//! archive filenames embed platform and compiler qualifiers the caller does
//! not know. Matching is therefore a prefix test against every archive of
//! every retained package.

use tracing::warn;

use crate::core::catalog::PackageUpdate;
use crate::error::ResolveError;

/// One module resolved to a concrete archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatch {
    /// Requested module name
    pub module: String,
    /// Package carrying the archive
    pub package_name: String,
    /// Package version prefix used in the archive URL
    pub package_version: String,
    /// Archive filename inside the package
    pub archive: String,
}

/// Match requested modules against the catalog
///
/// For each module, packages are scanned in catalog order and the first
/// archive whose filename starts with the module name is selected; when
/// several packages match, the last one wins. That precedence is an
/// artifact of iteration order inherited from the repository tooling, not
/// a guarantee. A module without any match is skipped with a warning;
/// only an entirely empty result is an error.
pub fn match_modules(
    modules: &[String],
    catalog: &[PackageUpdate],
) -> Result<Vec<ModuleMatch>, ResolveError> {
    let mut matches = Vec::new();

    for module in modules {
        let mut found = None;

        for package in catalog {
            if let Some(archive) = package.archives.iter().find(|a| a.starts_with(module.as_str())) {
                found = Some(ModuleMatch {
                    module: module.clone(),
                    package_name: package.name.clone(),
                    package_version: package.version.clone(),
                    archive: archive.clone(),
                });
            }
        }

        match found {
            Some(m) => matches.push(m),
            None => warn!(module = %module, "no archive for module found"),
        }
    }

    if matches.is_empty() {
        return Err(ResolveError::NoModulesResolved {
            modules: modules.to_vec(),
        });
    }

    Ok(matches)
}
