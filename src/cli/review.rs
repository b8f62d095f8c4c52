//! TUI mode for reviewing a directory of images in batches.
//!
//! This module provides the entry point for the interactive terminal user
//! interface: it initialises (or resumes) the review ledger, seeds the
//! TUI bootstrap storage, and runs the bubbletea-rs program.

use std::io::{self, Write};

use bubbletea_rs::Program;

use culler::tui::{CullApp, set_initial_session, set_initial_terminal_size};
use culler::{CullError, CullerConfig, Ledger, SessionController};

/// Runs the interactive review session.
///
/// # Errors
///
/// Returns an error if:
/// - The directory is missing or the grid dimensions are invalid
/// - The ledger cannot be initialised (unreadable directory, malformed
///   `reviews.csv`)
/// - The TUI fails to initialise
pub async fn run(config: &CullerConfig) -> Result<(), CullError> {
    let directory = config.require_directory()?;
    let (rows, cols) = config.grid()?;

    let ledger = Ledger::initialise(&directory)?;
    let session = SessionController::start(ledger, directory, rows, cols);

    // Store the session in global state for Model::init() to retrieve.
    // If already set (e.g. re-running the TUI in the same process), this
    // is a no-op and the existing data remains.
    let _ = set_initial_session(session);

    // Seed the first frame with the real terminal size when available.
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    // Run the TUI program; the session persists its ledger on quit.
    run_tui().await.map_err(|error| CullError::Tui {
        message: error.to_string(),
    })?;

    Ok(())
}

/// Runs the bubbletea-rs program with the `CullApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // CullApp::init() will retrieve data from module-level storage.
    let program = Program::<CullApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cull_app_can_be_created_empty() {
        let app = CullApp::empty();
        assert!(app.session().batch().is_empty());
    }
}
