//! Review ledger: the authoritative per-file review record for a directory.
//!
//! The ledger owns the table of `(filename, reviewed, score)` rows for a
//! reviewed directory. It handles load/resume, batch retrieval of
//! unreviewed rows, commit of batch decisions, and CSV serialisation.
//!
//! # Resume semantics
//!
//! When `<directory>/reviews.csv` already exists, the ledger is loaded
//! verbatim from it and the directory is not re-scanned. Files added or
//! removed since the ledger was written are ignored; deleting the ledger
//! file starts the review from scratch. This matches the persisted file
//! being the single source of truth for an in-progress session.

mod error;
mod model;
mod scan;
mod store;

use camino::Utf8Path;

pub use error::CullError;
pub use model::{BatchItem, LedgerRow, RowId, Score};
pub use store::{LEDGER_FILE_NAME, ledger_path};

/// The authoritative table of review decisions for one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    rows: Vec<LedgerRow>,
}

impl Ledger {
    /// Initialises the ledger for a directory.
    ///
    /// Resumes from `<directory>/reviews.csv` when it exists; otherwise
    /// scans the directory and creates one unreviewed row per file.
    ///
    /// # Errors
    ///
    /// Returns [`CullError::Initialisation`] when the directory is missing
    /// or unreadable, or when an existing ledger file is malformed.
    pub fn initialise(directory: &Utf8Path) -> Result<Self, CullError> {
        let path = store::ledger_path(directory);
        if path.exists() {
            let rows = store::read_rows(&path)?;
            tracing::info!(ledger = %path, rows = rows.len(), "resumed review ledger");
            return Ok(Self { rows });
        }

        let files = scan::list_directory(directory)?;
        let rows: Vec<_> = files.into_iter().map(LedgerRow::new).collect();
        tracing::info!(directory = %directory, rows = rows.len(), "scanned fresh review ledger");
        Ok(Self { rows })
    }

    /// Creates a ledger directly from rows, bypassing the filesystem.
    #[must_use]
    pub fn from_rows(rows: Vec<LedgerRow>) -> Self {
        Self { rows }
    }

    /// Returns up to `limit` unreviewed rows as batch snapshots, in ledger
    /// order (first-N semantics, not sampling). Read-only: the ledger is
    /// not mutated until the batch is committed back.
    #[must_use]
    pub fn unreviewed_batch(&self, limit: usize) -> Vec<BatchItem> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.reviewed)
            .take(limit)
            .map(|(id, row)| BatchItem {
                id,
                filename: row.filename.clone(),
                reviewed: row.reviewed,
                score: row.score,
            })
            .collect()
    }

    /// Commits a batch of decisions back into the ledger.
    ///
    /// Items the user never toggled (`reviewed == false`) are accepted by
    /// default: they are written back as `reviewed = true, score = Keep`.
    /// Toggled items carry their decision unchanged. Items whose ids no
    /// longer resolve are ignored.
    pub fn commit_batch(&mut self, batch: &[BatchItem]) {
        for item in batch {
            let Some(row) = self.rows.get_mut(item.id) else {
                tracing::warn!(id = item.id, "batch item no longer resolves to a ledger row");
                continue;
            };
            row.reviewed = true;
            row.score = if item.reviewed { item.score } else { Score::Keep };
        }
    }

    /// Serialises the full ledger to `<directory>/reviews.csv`, overwriting
    /// any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`CullError::Persistence`] on write failure. The in-memory
    /// ledger is left intact; callers treat this as non-fatal.
    pub fn persist(&self, directory: &Utf8Path) -> Result<(), CullError> {
        let path = store::ledger_path(directory);
        store::write_rows(&path, &self.rows)?;
        tracing::info!(ledger = %path, rows = self.rows.len(), "persisted review ledger");
        Ok(())
    }

    /// Returns the row for an id, if it exists.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&LedgerRow> {
        self.rows.get(id)
    }

    /// Returns all rows in ledger order.
    #[must_use]
    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    /// Returns the total number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the ledger has no rows at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of committed rows.
    #[must_use]
    pub fn reviewed_count(&self) -> usize {
        self.rows.iter().filter(|row| row.reviewed).count()
    }

    /// Returns the number of rows still awaiting review.
    #[must_use]
    pub fn unreviewed_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.reviewed).count()
    }

    /// Returns the number of rows flagged for exclusion.
    #[must_use]
    pub fn flagged_count(&self) -> usize {
        self.rows.iter().filter(|row| row.score.is_flagged()).count()
    }

    /// Returns true when every row has been reviewed.
    #[must_use]
    pub fn is_fully_reviewed(&self) -> bool {
        self.rows.iter().all(|row| row.reviewed)
    }
}
