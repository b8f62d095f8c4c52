//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions and
//! system events.

/// Messages for the batch review TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation within the grid
    /// Move the cursor one cell left.
    CursorLeft,
    /// Move the cursor one cell right.
    CursorRight,
    /// Move the cursor one grid row up.
    CursorUp,
    /// Move the cursor one grid row down.
    CursorDown,

    // Review actions
    /// Toggle the flag state of the item under the cursor.
    ToggleCurrent,
    /// Commit the current batch and show the next one.
    NextBatch,
    /// Request the previous batch (unsupported; reports a status message).
    PreviousBatch,
    /// Persist the ledger without committing the current batch.
    SaveRequested,

    // Application lifecycle
    /// Emitted once at startup to trigger the first render cycle.
    Initialized,
    /// Commit, persist, and quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorLeft | Self::CursorRight | Self::CursorUp | Self::CursorDown
        )
    }

    /// Returns true for messages that act on the session.
    #[must_use]
    pub const fn is_review_action(&self) -> bool {
        matches!(
            self,
            Self::ToggleCurrent | Self::NextBatch | Self::PreviousBatch | Self::SaveRequested
        )
    }
}
