//! qtsdk - verified Qt build-dependency installer
//!
//! Resolves a version/module configuration into concrete archives on the
//! two Qt download repositories, verifies every archive against its
//! published checksum and extracts them into a deterministic layout, so a
//! plugin build can locate Qt Creator and the Qt SDK via fixed prefix
//! paths.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Resolution, matching, verification and orchestration
//! - [`infra`] - Infrastructure layer (network, archive extraction)
//! - [`config`] - Run configuration and repository URL layout
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
