//! Startup context storage and telemetry helpers for the review TUI.
//!
//! This module owns the global `OnceLock` values used during TUI
//! bootstrapping and provides the setter/getter functions consumed by CLI
//! wiring and app handlers.

use std::sync::{Arc, OnceLock};

use camino::Utf8PathBuf;
use crossterm::terminal;

use crate::ledger::{CullError, Ledger};
use crate::session::SessionController;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Global storage for the initial review session.
///
/// This is set before the TUI program starts and read by `CullApp::init()`.
static INITIAL_SESSION: OnceLock<SessionController> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts and read by `CullApp::new()`
/// so the first frame uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for telemetry sink.
///
/// This is set before the TUI program starts to enable persistence
/// telemetry. Without this, a no-op sink is used.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Sets the initial session for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The
/// session will be read by `CullApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the session was set, `false` if it was already set.
pub fn set_initial_session(session: SessionController) -> bool {
    INITIAL_SESSION.set(session).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// This should be called before starting the bubbletea-rs program so the
/// initial render can use the actual terminal size instead of fallbacks.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// This must be called before starting the bubbletea-rs program to record
/// persistence outcomes. Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the initial session from storage.
///
/// Called internally by `CullApp::init()`. Returns the stored session or
/// an inert session over an empty ledger if not set.
///
/// Note: This function clones the data because `OnceLock` does not support
/// consuming (taking) the value; the stored copy is never used again.
pub(crate) fn get_initial_session() -> SessionController {
    INITIAL_SESSION.get().cloned().unwrap_or_else(|| {
        SessionController::start(Ledger::default(), Utf8PathBuf::from("."), 1, 1)
    })
}

/// Gets the initial terminal dimensions from storage.
///
/// Called internally by `CullApp::new()`. Returns the stored dimensions or
/// fallback dimensions if none were set.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
///
/// Uses a static fallback sink to avoid allocating a new `Arc` on each
/// call when no sink has been configured.
fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Records telemetry for a successful ledger write.
///
/// Called internally by the app after a save or exit persists the ledger.
pub(crate) fn record_ledger_persisted(ledger: &Ledger) {
    get_telemetry_sink().record(TelemetryEvent::LedgerPersisted {
        row_count: ledger.len(),
        reviewed: ledger.reviewed_count(),
        flagged: ledger.flagged_count(),
    });
}

/// Records telemetry for a failed ledger write.
///
/// Persistence failures are non-fatal by design; this event makes the
/// otherwise swallowed error observable.
pub(crate) fn record_persistence_failed(error: &CullError) {
    get_telemetry_sink().record(TelemetryEvent::PersistenceFailed {
        message: error.to_string(),
    });
}
