//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest
//! to highest):
//!
//! 1. **Defaults** – Built-in application defaults (3×6 grid)
//! 2. **Configuration file** – `.culler.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `CULLER_DIRECTORY`, `CULLER_ROWS`,
//!    `CULLER_COLS`
//! 4. **Command-line arguments** – `--directory`/`-d`, `--rows`, `--cols`
//!
//! # Configuration File
//!
//! Place `.culler.toml` in the current directory, home directory, or XDG
//! config directory with:
//!
//! ```toml
//! directory = "/photos/shoot-2026-08"
//! rows = 3
//! cols = 6
//! ```

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::ledger::CullError;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive TUI review session (default).
    Review,
    /// Print ledger progress counts and exit without opening the TUI.
    Summary,
}

/// Default number of grid rows shown per batch.
const DEFAULT_GRID_ROWS: usize = 3;

/// Default number of grid columns shown per batch.
const DEFAULT_GRID_COLS: usize = 6;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `CULLER_DIRECTORY` or `--directory`: Directory of images to review
/// - `CULLER_ROWS` or `--rows`: Grid rows per batch
/// - `CULLER_COLS` or `--cols`: Grid columns per batch
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CULLER",
    discovery(
        dotfile_name = ".culler.toml",
        config_file_name = "culler.toml",
        app_name = "culler"
    )
)]
pub struct CullerConfig {
    /// Directory of image files to review.
    ///
    /// Can be provided via:
    /// - CLI: `--directory <PATH>` or `-d <PATH>`
    /// - Environment: `CULLER_DIRECTORY`
    /// - Config file: `directory = "..."`
    #[ortho_config(cli_short = 'd')]
    pub directory: Option<String>,

    /// Number of grid rows shown per batch. Must be a positive integer.
    ///
    /// Can be provided via:
    /// - CLI: `--rows <N>`
    /// - Environment: `CULLER_ROWS`
    /// - Config file: `rows = 3`
    #[ortho_config()]
    pub rows: usize,

    /// Number of grid columns shown per batch. Must be a positive integer.
    ///
    /// Can be provided via:
    /// - CLI: `--cols <N>`
    /// - Environment: `CULLER_COLS`
    /// - Config file: `cols = 6`
    #[ortho_config()]
    pub cols: usize,

    /// Prints a ledger progress summary and exits without opening the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` / `-S`
    /// - Config file: `summary = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so `CULLER_SUMMARY` is not supported.
    #[ortho_config(cli_short = 'S')]
    pub summary: bool,
}

impl Default for CullerConfig {
    fn default() -> Self {
        Self {
            directory: None,
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            summary: false,
        }
    }
}

impl CullerConfig {
    /// Returns the review directory or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`CullError::MissingDirectory`] when no directory is
    /// configured.
    pub fn require_directory(&self) -> Result<Utf8PathBuf, CullError> {
        self.directory
            .as_deref()
            .map(Utf8PathBuf::from)
            .ok_or(CullError::MissingDirectory)
    }

    /// Returns the validated `(rows, cols)` grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`CullError::Configuration`] when either dimension is zero.
    pub fn grid(&self) -> Result<(usize, usize), CullError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CullError::Configuration {
                message: format!(
                    "grid dimensions must be positive integers (got {}x{})",
                    self.rows, self.cols
                ),
            });
        }
        Ok((self.rows, self.cols))
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::Review
        }
    }
}
