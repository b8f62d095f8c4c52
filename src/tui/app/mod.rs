//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for
//! the batch review TUI. It coordinates between the session controller
//! and components, manages the grid cursor, and handles lifecycle events.
//!
//! # Module Structure
//!
//! - `rendering`: View rendering methods for terminal output

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::session::{SessionController, SessionState};
use crate::tui::components::{MontageComponent, ProgressComponent};
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;
use crate::tui::storage;

mod rendering;

/// Main application model for the batch review TUI.
#[derive(Debug)]
pub struct CullApp {
    /// Review session driving all ledger mutations.
    session: SessionController,
    /// Index of the batch item under the cursor.
    cursor: usize,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    /// Transient status line shown below the grid.
    status: Option<String>,
    /// Montage grid component.
    montage: MontageComponent,
    /// Progress bar component.
    progress: ProgressComponent,
}

impl CullApp {
    /// Creates a new application over a review session.
    #[must_use]
    pub fn new(session: SessionController) -> Self {
        let (width, height) = storage::get_initial_terminal_size();
        Self {
            session,
            cursor: 0,
            width,
            height,
            show_help: false,
            status: None,
            montage: MontageComponent::new(),
            progress: ProgressComponent::new(),
        }
    }

    /// Creates an inert application over an empty ledger (for tests and
    /// the uninitialised-storage fallback).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(storage::get_initial_session())
    }

    /// Returns the session driven by this application.
    #[must_use]
    pub const fn session(&self) -> &SessionController {
        &self.session
    }

    /// Returns the current cursor position within the batch.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Returns the current status line, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the terminal dimensions the view is rendered for.
    #[must_use]
    pub const fn terminal_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands. It
    /// delegates to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_review_action() {
            return self.handle_review_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorLeft => self.move_cursor_left(),
            AppMsg::CursorRight => self.move_cursor_right(),
            AppMsg::CursorUp => self.move_cursor_up(),
            AppMsg::CursorDown => self.move_cursor_down(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
            }
        }
        None
    }

    /// Dispatches review action messages to their handlers.
    fn handle_review_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ToggleCurrent => self.handle_toggle_current(),
            AppMsg::NextBatch => self.handle_next_batch(),
            AppMsg::PreviousBatch => self.handle_previous_batch(),
            AppMsg::SaveRequested => self.handle_save(),
            _ => {
                debug_assert!(false, "non-review message routed to handle_review_msg");
            }
        }
        None
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(self.handle_quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::Initialized => None,
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    // Navigation handlers. The cursor walks the grid left to right, top
    // to bottom, and is clamped to the batch rather than the full grid so
    // it can never rest on a blank trailing cell.

    fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_right(&mut self) {
        let last = self.session.batch().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(last);
    }

    fn move_cursor_up(&mut self) {
        let cols = self.session.grid_cols().max(1);
        if self.cursor >= cols {
            self.cursor -= cols;
        }
    }

    fn move_cursor_down(&mut self) {
        let cols = self.session.grid_cols().max(1);
        let target = self.cursor.saturating_add(cols);
        if target < self.session.batch().len() {
            self.cursor = target;
        }
    }

    // Review action handlers

    fn handle_toggle_current(&mut self) {
        let Some(id) = self.session.batch().get(self.cursor).map(|item| item.id) else {
            return;
        };
        self.session.toggle_item(id);
        self.status = None;
    }

    fn handle_next_batch(&mut self) {
        let state = self.session.advance();
        self.cursor = 0;
        self.status = match state {
            SessionState::Done => {
                Some("All files reviewed. Press q to save and quit.".to_owned())
            }
            _ => None,
        };
    }

    fn handle_previous_batch(&mut self) {
        if let Err(error) = self.session.previous() {
            self.status = Some(error.to_string());
        }
    }

    fn handle_save(&mut self) {
        match self.session.save() {
            Ok(()) => {
                storage::record_ledger_persisted(self.session.ledger());
                self.status = Some("Progress saved to reviews.csv".to_owned());
            }
            Err(error) => {
                tracing::warn!(%error, "mid-session save failed");
                storage::record_persistence_failed(&error);
                self.status = Some(error.to_string());
            }
        }
    }

    // Lifecycle handlers

    /// Commits the current batch, persists the ledger, and quits.
    ///
    /// Persistence failure is reported but never blocks the quit: the
    /// decision to swallow write errors on exit is deliberate and the
    /// failure stays observable through logs and telemetry.
    fn handle_quit(&mut self) -> Cmd {
        match self.session.exit() {
            Ok(()) => storage::record_ledger_persisted(self.session.ledger()),
            Err(error) => {
                tracing::warn!(%error, "failed to persist ledger on exit");
                storage::record_persistence_failed(&error);
            }
        }
        bubbletea_rs::quit()
    }

    /// Emits an immediate startup message to trigger the first render
    /// cycle.
    fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}

impl Model for CullApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the initial session from module-level storage
        let model = Self::empty();
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push('\n');
        output.push_str(&self.render_montage());
        output.push('\n');
        output.push_str(&self.render_progress_line());
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }
}
