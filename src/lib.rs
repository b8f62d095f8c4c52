//! Culler library crate providing bulk image review triage.
//!
//! The library owns the review ledger (a CSV-backed table of per-file
//! keep/flag decisions), the session controller that pages through
//! unreviewed files in fixed-size batches, and the terminal user interface
//! that renders the current batch as a grid.
//!
//! The ledger and session layers are display-agnostic and can be driven
//! headless, which is how the behavioural tests exercise them.

pub mod config;
pub mod ledger;
pub mod session;
pub mod telemetry;
pub mod tui;

pub use config::{CullerConfig, OperationMode};
pub use ledger::{BatchItem, CullError, Ledger, LedgerRow, RowId, Score};
pub use session::{SessionController, SessionState, UnsupportedAction};
