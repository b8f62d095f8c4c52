//! Review session controller: paging, toggling, and commit transitions.
//!
//! The controller owns the ledger for the duration of a session together
//! with the current on-screen batch (a snapshot of at most rows × cols
//! unreviewed ledger rows). It interprets per-item toggle events into
//! score mutations on that batch and drives the advance / save / exit
//! transitions. It has no dependency on any rendering technology, which
//! keeps the whole review flow testable without a terminal.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::ledger::{BatchItem, CullError, Ledger, RowId, Score};

/// Error returned when an unsupported navigation action is requested.
///
/// Returning to a previous batch is a documented gap rather than a hidden
/// bug: no prior-batch history is retained anywhere, so the controller
/// reports the condition and performs no state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("previous batch is not supported; no batch history is retained")]
pub struct UnsupportedAction;

/// Lifecycle state of a review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Unreviewed rows remain and a batch is on screen.
    Active,
    /// Every row has been committed; nothing is left to review.
    Done,
    /// The session has exited; no transition re-enters `Active`.
    Terminated,
}

/// Drives one review session over a ledger.
#[derive(Debug, Clone)]
pub struct SessionController {
    ledger: Ledger,
    directory: Utf8PathBuf,
    grid_rows: usize,
    grid_cols: usize,
    batch: Vec<BatchItem>,
    state: SessionState,
}

impl SessionController {
    /// Starts a session with a batch capacity of `rows * cols`.
    ///
    /// Takes ownership of the ledger: once a session is running, the
    /// controller is the only writer and the ledger is the single source
    /// of truth for committed decisions. A ledger with nothing left to
    /// review (for example a fully reviewed resumed session) starts in
    /// [`SessionState::Done`].
    #[must_use]
    pub fn start(ledger: Ledger, directory: Utf8PathBuf, rows: usize, cols: usize) -> Self {
        let capacity = rows.saturating_mul(cols);
        let batch = ledger.unreviewed_batch(capacity);
        let state = if batch.is_empty() {
            SessionState::Done
        } else {
            SessionState::Active
        };
        Self {
            ledger,
            directory,
            grid_rows: rows,
            grid_cols: cols,
            batch,
            state,
        }
    }

    /// Returns the session lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the current batch snapshot.
    #[must_use]
    pub fn batch(&self) -> &[BatchItem] {
        &self.batch
    }

    /// Returns the ledger backing this session.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the directory being reviewed.
    #[must_use]
    pub fn directory(&self) -> &Utf8PathBuf {
        &self.directory
    }

    /// Returns the grid row count the session was started with.
    #[must_use]
    pub const fn grid_rows(&self) -> usize {
        self.grid_rows
    }

    /// Returns the grid column count the session was started with.
    #[must_use]
    pub const fn grid_cols(&self) -> usize {
        self.grid_cols
    }

    /// Returns the batch capacity (`rows * cols`).
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.grid_rows.saturating_mul(self.grid_cols)
    }

    /// Toggles the flag state of one batch item.
    ///
    /// The first toggle of an untouched item marks it
    /// `reviewed = true, score = Flagged`; toggling a flagged item marks
    /// it `reviewed = true, score = Keep`, and so on in a two-cycle. This
    /// mutates the in-memory batch only; nothing is persisted here.
    ///
    /// Returns the item's new score, or `None` when the id is not part of
    /// the current batch (e.g. a stale id after an advance).
    pub fn toggle_item(&mut self, id: RowId) -> Option<Score> {
        let item = self.batch.iter_mut().find(|item| item.id == id)?;
        item.reviewed = true;
        item.score = item.score.toggled();
        tracing::debug!(id, score = ?item.score, "toggled batch item");
        Some(item.score)
    }

    /// Commits the current batch and replaces it with the next one.
    ///
    /// Untouched items are accepted by default at commit time. Transitions
    /// `Active → Active`, or `Active → Done` when no unreviewed rows
    /// remain. A no-op in `Done` and `Terminated`.
    pub fn advance(&mut self) -> SessionState {
        if self.state != SessionState::Active {
            return self.state;
        }
        self.ledger.commit_batch(&self.batch);
        self.batch = self.ledger.unreviewed_batch(self.capacity());
        if self.batch.is_empty() {
            self.state = SessionState::Done;
        }
        self.state
    }

    /// Persists the ledger mid-session without committing the current
    /// batch, mirroring an explicit "save progress" request.
    ///
    /// # Errors
    ///
    /// Returns [`CullError::Persistence`] on write failure; the in-memory
    /// ledger and batch are unaffected and the session continues.
    pub fn save(&self) -> Result<(), CullError> {
        self.ledger.persist(&self.directory)
    }

    /// Commits the current (possibly partially reviewed) batch and
    /// persists the ledger, then terminates the session.
    ///
    /// The session terminates even when persistence fails: committed
    /// decisions survive in memory and the error is surfaced for the
    /// caller to report.
    ///
    /// # Errors
    ///
    /// Returns [`CullError::Persistence`] on write failure.
    pub fn exit(&mut self) -> Result<(), CullError> {
        if self.state == SessionState::Terminated {
            return Ok(());
        }
        self.ledger.commit_batch(&self.batch);
        self.batch.clear();
        self.state = SessionState::Terminated;
        self.ledger.persist(&self.directory)
    }

    /// Requests the previous batch.
    ///
    /// # Errors
    ///
    /// Always returns [`UnsupportedAction`]; no state changes.
    pub const fn previous(&self) -> Result<(), UnsupportedAction> {
        Err(UnsupportedAction)
    }
}
