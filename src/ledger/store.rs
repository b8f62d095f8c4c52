//! CSV persistence for the review ledger.
//!
//! The ledger is stored as `reviews.csv` in the reviewed directory itself,
//! with a header row and one record per file: `filename,reviewed,score`.
//! RFC 4180 quoting from the `csv` crate means filenames containing the
//! delimiter or whitespace round-trip unchanged. No implicit row-numbering
//! column is written.

use camino::{Utf8Path, Utf8PathBuf};

use super::error::CullError;
use super::model::LedgerRow;

/// Well-known ledger file name within the reviewed directory.
pub const LEDGER_FILE_NAME: &str = "reviews.csv";

/// Returns the ledger file path for a reviewed directory.
#[must_use]
pub fn ledger_path(directory: &Utf8Path) -> Utf8PathBuf {
    directory.join(LEDGER_FILE_NAME)
}

/// Reads all ledger rows from a persisted ledger file.
///
/// # Errors
///
/// Returns [`CullError::Initialisation`] when the file cannot be opened or
/// any record fails to parse. A malformed ledger aborts the resume rather
/// than silently dropping rows.
pub(crate) fn read_rows(path: &Utf8Path) -> Result<Vec<LedgerRow>, CullError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| CullError::initialisation(&format!("cannot open {path}: {e}")))?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<LedgerRow>() {
        let row = record
            .map_err(|e| CullError::initialisation(&format!("malformed ledger {path}: {e}")))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Writes all ledger rows to the ledger file, overwriting any existing one.
///
/// # Errors
///
/// Returns [`CullError::Persistence`] when the file cannot be created or a
/// record fails to serialise. The caller's in-memory rows are unaffected.
pub(crate) fn write_rows(path: &Utf8Path, rows: &[LedgerRow]) -> Result<(), CullError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| CullError::persistence(&format!("cannot create {path}: {e}")))?;

    for row in rows {
        writer.serialize(row).map_err(|e| CullError::persistence(&e))?;
    }
    writer.flush().map_err(|e| CullError::persistence(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::*;
    use crate::ledger::model::Score;

    fn utf8_temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("UTF-8 temp path");
        (dir, path)
    }

    fn sample_rows() -> Vec<LedgerRow> {
        vec![
            LedgerRow {
                filename: Utf8PathBuf::from("shoot/plain.png"),
                reviewed: true,
                score: Score::Keep,
            },
            LedgerRow {
                filename: Utf8PathBuf::from("shoot/name, with comma.png"),
                reviewed: true,
                score: Score::Flagged,
            },
            LedgerRow {
                filename: Utf8PathBuf::from("shoot/name with spaces.png"),
                reviewed: false,
                score: Score::Unset,
            },
        ]
    }

    #[test]
    fn rows_round_trip_through_csv() {
        let (_guard, dir) = utf8_temp_dir();
        let path = ledger_path(&dir);
        let rows = sample_rows();

        write_rows(&path, &rows).expect("write ledger");
        let loaded = read_rows(&path).expect("read ledger");

        assert_eq!(loaded, rows);
    }

    #[test]
    fn header_lists_ledger_columns_without_row_numbering() {
        let (_guard, dir) = utf8_temp_dir();
        let path = ledger_path(&dir);

        write_rows(&path, &sample_rows()).expect("write ledger");
        let text = std::fs::read_to_string(&path).expect("read raw csv");
        let header = text.lines().next().expect("header line");

        assert_eq!(header, "filename,reviewed,score");
    }

    #[test]
    fn scores_serialise_as_signed_integers() {
        let (_guard, dir) = utf8_temp_dir();
        let path = ledger_path(&dir);

        write_rows(&path, &sample_rows()).expect("write ledger");
        let text = std::fs::read_to_string(&path).expect("read raw csv");

        assert!(text.contains(",true,1"));
        assert!(text.contains(",true,-1"));
        assert!(text.contains(",false,0"));
    }

    #[test]
    fn malformed_score_is_an_initialisation_error() {
        let (_guard, dir) = utf8_temp_dir();
        let path = ledger_path(&dir);
        std::fs::write(&path, "filename,reviewed,score\na.png,false,7\n")
            .expect("write malformed ledger");

        let error = read_rows(&path).expect_err("read fails");
        assert!(matches!(error, CullError::Initialisation { .. }));
    }
}
