//! Summary mode: print ledger progress counts without opening the TUI.
//!
//! Useful for checking how far a review session has progressed, or for
//! scripting over a finished session's `reviews.csv`.

use std::io::{self, Write};

use culler::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use culler::{CullError, CullerConfig, Ledger, ledger};

/// Runs the summary mode.
///
/// # Errors
///
/// Returns an error when the directory is missing, the ledger cannot be
/// initialised, or the summary cannot be written to stdout.
pub fn run(config: &CullerConfig) -> Result<(), CullError> {
    let directory = config.require_directory()?;
    let resumed = ledger::ledger_path(&directory).exists();
    let reviews = Ledger::initialise(&directory)?;

    StderrJsonlTelemetrySink.record(TelemetryEvent::LedgerInitialised {
        row_count: reviews.len(),
        resumed,
    });

    write_summary(&reviews, &mut io::stdout().lock())
}

/// Writes the progress summary to the given writer.
fn write_summary<W: Write>(reviews: &Ledger, writer: &mut W) -> Result<(), CullError> {
    let write = |w: &mut W, line: String| -> Result<(), CullError> {
        writeln!(w, "{line}").map_err(|e| CullError::Io {
            message: e.to_string(),
        })
    };

    write(writer, format!("total:      {}", reviews.len()))?;
    write(writer, format!("reviewed:   {}", reviews.reviewed_count()))?;
    write(writer, format!("remaining:  {}", reviews.unreviewed_count()))?;
    write(writer, format!("flagged:    {}", reviews.flagged_count()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use culler::LedgerRow;

    use super::*;

    #[test]
    fn summary_lists_all_four_counts() {
        let reviews = Ledger::from_rows(vec![
            LedgerRow::new(Utf8PathBuf::from("a.png")),
            LedgerRow::new(Utf8PathBuf::from("b.png")),
        ]);
        let mut buffer = Vec::new();

        write_summary(&reviews, &mut buffer).expect("summary writes");
        let text = String::from_utf8(buffer).expect("valid UTF-8");

        assert!(text.contains("total:      2"));
        assert!(text.contains("remaining:  2"));
        assert!(text.contains("flagged:    0"));
    }
}
