//! Progress indicator component for the review TUI.
//!
//! Renders a textual progress bar over the ledger's committed rows plus
//! `(reviewed of total)` and flagged counts. Counts reflect committed
//! decisions only: toggles in the current batch appear here after the
//! batch is committed, matching the ledger being the source of truth.

use super::text_fit::pad_or_truncate;

/// Glyph for the filled portion of the bar.
const BAR_FILLED: char = '█';

/// Glyph for the unfilled portion of the bar.
const BAR_EMPTY: char = '░';

/// Context for rendering the progress line.
#[derive(Debug, Clone, Copy)]
pub struct ProgressViewContext {
    /// Number of committed rows.
    pub reviewed: usize,
    /// Number of flagged rows.
    pub flagged: usize,
    /// Total number of ledger rows.
    pub total: usize,
    /// Maximum rendered width in terminal columns.
    pub max_width: usize,
}

/// Component for displaying review progress.
#[derive(Debug, Clone, Copy)]
pub struct ProgressComponent {
    bar_width: usize,
}

/// Default width of the bar portion in terminal columns.
const DEFAULT_BAR_WIDTH: usize = 24;

impl Default for ProgressComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressComponent {
    /// Creates a new progress component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Renders the progress line.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "bar cell count is a deliberate floor division"
    )]
    pub fn view(&self, ctx: &ProgressViewContext) -> String {
        let filled = if ctx.total == 0 {
            0
        } else {
            self.bar_width.saturating_mul(ctx.reviewed) / ctx.total
        };
        let empty = self.bar_width.saturating_sub(filled);

        let mut line = String::new();
        for _ in 0..filled {
            line.push(BAR_FILLED);
        }
        for _ in 0..empty {
            line.push(BAR_EMPTY);
        }
        line.push_str(&format!(
            " ({} of {}) {} flagged",
            ctx.reviewed, ctx.total, ctx.flagged
        ));

        pad_or_truncate(&line, ctx.max_width)
    }
}
