//! Command-line interface module
//!
//! Argument parsing and the top-level run sequence. The decision logic
//! lives in [`crate::core`]; this layer only wires configuration, the two
//! install pipelines and the follow-on build hints together.

pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{self, Config};
use crate::core::install::Installer;

/// qtsdk - verified Qt build-dependency installer
///
/// Downloads Qt Creator and the Qt SDK modules listed in the version
/// configuration, verifies their checksums and unpacks them for a plugin
/// build.
#[derive(Parser, Debug)]
#[command(name = "qtsdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Destination root (defaults to the system temp directory)
    #[arg(long)]
    pub install_path: Option<PathBuf>,

    /// Version/module configuration file
    #[arg(long, default_value = "versions.yaml")]
    pub config: PathBuf,

    /// Write a shell-sourceable `env` file with QTC_PATH and QT_PATH
    #[arg(long)]
    pub export_variables: bool,

    /// Override the detected operating system
    #[arg(long)]
    pub os: Option<String>,

    /// Override the detected machine architecture
    #[arg(long)]
    pub arch: Option<String>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by the --quiet/--verbose flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Execute the installation run
    pub async fn run(self) -> Result<()> {
        let versions = config::load_versions(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;

        let cfg = match (&self.os, &self.arch) {
            (None, None) => Config::for_host(versions),
            (os, arch) => Config::for_platform(
                os.as_deref().unwrap_or(std::env::consts::OS),
                arch.as_deref().unwrap_or(std::env::consts::ARCH),
                versions,
            ),
        };

        let root = self
            .install_path
            .unwrap_or_else(config::default_install_root);
        let dest = root.join(config::INSTALL_SUBDIR);
        std::fs::create_dir_all(&dest)
            .with_context(|| format!("Failed to create {}", dest.display()))?;

        let mut installer = Installer::new(dest.clone());
        if !self.quiet {
            installer = installer.with_progress(Box::new(output::extract_progress));
        }

        let qtc_path = installer.install_qtc(&cfg).await?;
        let qt_path = installer.install_sdk(&cfg).await?;

        let prefix_paths = format!("{};{}", qtc_path.display(), qt_path.display());

        if !self.quiet {
            println!(
                "{} all dependencies have been extracted to {}",
                output::status::SUCCESS,
                dest.display()
            );
            println!("to build the plugin:");
            println!(
                "\tcmake -B build -GNinja -DCMAKE_BUILD_TYPE=Release -DCMAKE_PREFIX_PATH=\"{prefix_paths}\""
            );
            println!("\tcmake --build build --target package");
        }

        if self.export_variables {
            write_env_file(&qtc_path, &qt_path)?;
        }

        Ok(())
    }
}

/// Write the prefix paths as shell-exportable variables
fn write_env_file(qtc_path: &std::path::Path, qt_path: &std::path::Path) -> Result<()> {
    let content = format!(
        "QTC_PATH={}\nQT_PATH={}\n",
        qtc_path.display(),
        qt_path.display()
    );
    std::fs::write("env", content).context("Failed to write env file")?;
    Ok(())
}
