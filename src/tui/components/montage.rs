//! Montage grid component for displaying the current review batch.
//!
//! Renders the batch as a rows × cols grid of fixed-width cells, one per
//! file. A terminal cannot show thumbnails, so each cell shows the file
//! name with a decision marker; flagged cells get a red background and
//! explicitly kept cells a blue one, mirroring the toggle affordance.

use crate::ledger::{BatchItem, Score};

use super::text_fit::pad_or_truncate;

/// Marker shown for an item flagged for exclusion.
const MARKER_FLAGGED: char = '✗';

/// Marker shown for an item explicitly toggled back to keep.
const MARKER_KEPT: char = '✓';

/// Marker shown for an item not yet interacted with.
const MARKER_UNTOUCHED: char = '·';


/// ANSI style for flagged cells (red background, white foreground).
const STYLE_FLAGGED: &str = "\u{1b}[41;97m";

/// ANSI style for explicitly kept cells (blue background, white foreground).
const STYLE_KEPT: &str = "\u{1b}[44;97m";

/// ANSI reset sequence.
const STYLE_RESET: &str = "\u{1b}[0m";

/// Context for rendering the montage grid.
///
/// Bundles the data needed to render the current batch without requiring
/// per-frame allocations.
#[derive(Debug, Clone)]
pub struct MontageViewContext<'a> {
    /// Items of the current batch, in ledger order.
    pub items: &'a [BatchItem],
    /// Number of grid rows.
    pub grid_rows: usize,
    /// Number of grid columns.
    pub grid_cols: usize,
    /// Index of the cell under the cursor.
    pub cursor: usize,
    /// Maximum rendered width in terminal columns.
    pub max_width: usize,
}

/// Component for displaying the batch as a grid of cells.
#[derive(Debug, Clone, Copy)]
pub struct MontageComponent {
    min_cell_width: usize,
}

/// Minimum usable cell width; below this the grid degrades to markers only.
const MIN_CELL_WIDTH: usize = 6;

impl Default for MontageComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MontageComponent {
    /// Creates a new montage component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_cell_width: MIN_CELL_WIDTH,
        }
    }

    /// Renders the batch grid as a string, one line per grid row.
    ///
    /// Cells beyond the end of a short batch are left blank (the final
    /// batch of a ledger usually fills only part of the grid).
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "cell width is a deliberate floor division of the terminal width"
    )]
    pub fn view(&self, ctx: &MontageViewContext<'_>) -> String {
        if ctx.items.is_empty() {
            return "  Nothing left to review in this directory.\n".to_owned();
        }

        let cols = ctx.grid_cols.max(1);
        let cell_width = (ctx.max_width / cols).max(self.min_cell_width);
        // Markers, cursor brackets, and one separating space per cell.
        let name_width = cell_width.saturating_sub(5);

        let mut output = String::new();
        for row in 0..ctx.grid_rows {
            for col in 0..cols {
                let index = row.saturating_mul(cols).saturating_add(col);
                let Some(item) = ctx.items.get(index) else {
                    output.push_str(&" ".repeat(cell_width));
                    continue;
                };
                output.push_str(&Self::format_cell(
                    item,
                    index == ctx.cursor,
                    name_width,
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Formats a single grid cell with marker, cursor brackets, and style.
    fn format_cell(item: &BatchItem, selected: bool, name_width: usize) -> String {
        let marker = match (item.reviewed, item.score) {
            (true, Score::Flagged) => MARKER_FLAGGED,
            (true, _) => MARKER_KEPT,
            (false, _) => MARKER_UNTOUCHED,
        };
        let (open, close) = if selected { ('[', ']') } else { (' ', ' ') };
        let name = pad_or_truncate(item.display_name(), name_width);
        let body = format!("{open}{marker} {name}{close} ");

        match (item.reviewed, item.score) {
            (true, Score::Flagged) => format!("{STYLE_FLAGGED}{body}{STYLE_RESET}"),
            (true, _) => format!("{STYLE_KEPT}{body}{STYLE_RESET}"),
            (false, _) => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::*;

    fn item(id: usize, name: &str, reviewed: bool, score: Score) -> BatchItem {
        BatchItem {
            id,
            filename: Utf8PathBuf::from(name),
            reviewed,
            score,
        }
    }

    fn context<'a>(items: &'a [BatchItem]) -> MontageViewContext<'a> {
        MontageViewContext {
            items,
            grid_rows: 1,
            grid_cols: 2,
            cursor: 0,
            max_width: 40,
        }
    }

    #[test]
    fn empty_batch_renders_placeholder() {
        let montage = MontageComponent::new();
        let view = montage.view(&context(&[]));
        assert!(view.contains("Nothing left to review"));
    }

    #[test]
    fn flagged_items_are_marked_and_styled() {
        let items = vec![
            item(0, "a.png", true, Score::Flagged),
            item(1, "b.png", false, Score::Unset),
        ];
        let montage = MontageComponent::new();
        let view = montage.view(&context(&items));

        assert!(view.contains(MARKER_FLAGGED));
        assert!(view.contains(STYLE_FLAGGED));
        assert!(view.contains(MARKER_UNTOUCHED));
    }

    #[test]
    fn cursor_cell_is_bracketed() {
        let items = vec![
            item(0, "a.png", false, Score::Unset),
            item(1, "b.png", false, Score::Unset),
        ];
        let montage = MontageComponent::new();
        let view = montage.view(&context(&items));

        assert!(view.contains("[· a.png"));
    }

    #[test]
    fn short_batch_leaves_trailing_cells_blank() {
        let items = vec![item(0, "only.png", false, Score::Unset)];
        let montage = MontageComponent::new();
        let ctx = MontageViewContext {
            items: &items,
            grid_rows: 2,
            grid_cols: 2,
            cursor: 0,
            max_width: 40,
        };

        let view = montage.view(&ctx);
        assert_eq!(view.lines().count(), 2);
        assert!(view.contains("only.png"));
    }
}
