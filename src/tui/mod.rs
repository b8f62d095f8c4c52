//! Terminal User Interface for batch image review.
//!
//! This module provides an interactive TUI for paging through a review
//! ledger in fixed-size batches using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::CullApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`components`]: Reusable UI components (montage grid, progress bar)
//! - [`input`]: Key-to-message mapping for input handling
//! - [`storage`]: `OnceLock` bootstrap storage for initial data
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for initial data. Call
//! [`storage::set_initial_session`] before starting the program, and
//! `CullApp::init()` will automatically retrieve the session.
//!
//! The TUI never touches the ledger directly: every mutation goes through
//! the [`crate::session::SessionController`], so the whole review flow can
//! be exercised headless in tests.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod storage;

pub use app::CullApp;
pub use storage::{set_initial_session, set_initial_terminal_size, set_telemetry_sink};

#[cfg(test)]
mod tests;
