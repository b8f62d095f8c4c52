//! View rendering methods for the batch review TUI.

use crate::session::SessionState;
use crate::tui::components::{MontageViewContext, ProgressViewContext, pad_or_truncate};

use super::CullApp;

impl CullApp {
    /// Renders the header line with the reviewed directory.
    pub(super) fn render_header(&self) -> String {
        let title = format!("culler — {}", self.session.directory());
        let mut line = pad_or_truncate(&title, self.terminal_width());
        line.push('\n');
        line
    }

    /// Renders the montage grid for the current batch.
    pub(super) fn render_montage(&self) -> String {
        if self.session.state() == SessionState::Done {
            return "  All files in this directory have been reviewed.\n".to_owned();
        }
        let ctx = MontageViewContext {
            items: self.session.batch(),
            grid_rows: self.session.grid_rows(),
            grid_cols: self.session.grid_cols(),
            cursor: self.cursor_position(),
            max_width: self.terminal_width(),
        };
        self.montage.view(&ctx)
    }

    /// Renders the progress bar over committed ledger rows.
    pub(super) fn render_progress_line(&self) -> String {
        let ledger = self.session.ledger();
        let ctx = ProgressViewContext {
            reviewed: ledger.reviewed_count(),
            flagged: ledger.flagged_count(),
            total: ledger.len(),
            max_width: self.terminal_width(),
        };
        let mut line = self.progress.view(&ctx);
        line.push('\n');
        line
    }

    /// Renders the status bar: a transient status message when present,
    /// otherwise the key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let text = self.status().map_or_else(
            || {
                "space/enter toggle · arrows move · n next batch · s save · q quit · ? help"
                    .to_owned()
            },
            ToOwned::to_owned,
        );
        pad_or_truncate(&text, self.terminal_width())
    }

    /// Renders the help overlay shown on `?`.
    pub(super) fn render_help_overlay(&self) -> String {
        let lines = [
            "culler — batch image review",
            "",
            "  space / enter / x   toggle flag on the selected file",
            "  arrows / h j k l    move the selection",
            "  n / PageDown        commit this batch and show the next",
            "  p / PageUp          previous batch (not supported)",
            "  s                   save progress without committing",
            "  q / Esc             commit, save, and quit",
            "",
            "Files you never toggle are kept by default when a batch is",
            "committed. Flagged files are scored -1 in reviews.csv.",
            "",
            "Press any key to close this help.",
        ];
        let mut output = String::new();
        for line in lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }

    /// Returns the terminal width as a usize, never zero.
    pub(super) fn terminal_width(&self) -> usize {
        usize::from(self.width.max(1))
    }
}
