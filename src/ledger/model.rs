//! Data model for the review ledger.
//!
//! The ledger is an ordered table of [`LedgerRow`] values, one per file in
//! the reviewed directory, addressed by a [`RowId`] assigned at load time.
//! Row ids are stable for the lifetime of a session but not across reloads
//! if the directory contents change between runs.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Stable index of a row within the ledger, assigned at load time.
pub type RowId = usize;

/// Review decision recorded for a single file.
///
/// Serialised to CSV as the integers `0` (unset), `1` (keep), and `-1`
/// (flagged for exclusion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Score {
    /// No decision recorded yet.
    #[default]
    Unset,
    /// Keep the file. Also applied by the default-accept commit policy.
    Keep,
    /// Flag the file for exclusion.
    Flagged,
}

impl Score {
    /// Returns the score produced by one toggle interaction.
    ///
    /// The first toggle of an untouched item always flags it; toggling a
    /// flagged item reverts it to keep. Leaving an item untouched means
    /// "accept by default" at commit time, so `Unset` never reappears once
    /// an item has been interacted with.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Flagged => Self::Keep,
            Self::Unset | Self::Keep => Self::Flagged,
        }
    }

    /// Returns true when the file is flagged for exclusion.
    #[must_use]
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl From<Score> for i8 {
    fn from(score: Score) -> Self {
        match score {
            Score::Unset => 0,
            Score::Keep => 1,
            Score::Flagged => -1,
        }
    }
}

impl TryFrom<i8> for Score {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unset),
            1 => Ok(Self::Keep),
            -1 => Ok(Self::Flagged),
            other => Err(format!("score must be 0, 1, or -1 (got {other})")),
        }
    }
}

/// One ledger row: the review record for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Path of the reviewed file, as recorded at scan time.
    pub filename: Utf8PathBuf,
    /// Whether a decision has been committed for this file.
    pub reviewed: bool,
    /// The recorded decision. `reviewed == false` implies `Score::Unset`.
    pub score: Score,
}

impl LedgerRow {
    /// Creates an unreviewed row for a freshly scanned file.
    #[must_use]
    pub const fn new(filename: Utf8PathBuf) -> Self {
        Self {
            filename,
            reviewed: false,
            score: Score::Unset,
        }
    }

    /// Returns the final path component for display purposes.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.filename.file_name().unwrap_or(self.filename.as_str())
    }
}

/// Snapshot of one ledger row held in the current on-screen batch.
///
/// The session controller mutates batch items in memory as the user
/// toggles them; the ledger only learns about the decisions when the
/// batch is committed back via [`crate::ledger::Ledger::commit_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    /// Ledger row this item was snapshotted from.
    pub id: RowId,
    /// Path of the file, copied for display without ledger access.
    pub filename: Utf8PathBuf,
    /// Whether the user has interacted with this item.
    pub reviewed: bool,
    /// The in-progress decision for this item.
    pub score: Score,
}

impl BatchItem {
    /// Returns the final path component for display purposes.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.filename.file_name().unwrap_or(self.filename.as_str())
    }
}
