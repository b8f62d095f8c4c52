//! Application telemetry events and sinks.
//!
//! Culler is a local-first tool, but it still benefits from lightweight
//! telemetry to support debugging and to capture operational signals such
//! as ledger persistence outcomes.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by culler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a ledger load, fresh scan or resume.
    LedgerInitialised {
        /// Number of rows in the loaded ledger.
        row_count: usize,
        /// Whether the ledger was resumed from a persisted file.
        resumed: bool,
    },
    /// Records a successful ledger write.
    LedgerPersisted {
        /// Number of rows written.
        row_count: usize,
        /// Number of committed rows at the time of the write.
        reviewed: usize,
        /// Number of flagged rows at the time of the write.
        flagged: usize,
    },
    /// Records a failed ledger write. The session continues; this event
    /// makes the swallowed error observable.
    PersistenceFailed {
        /// Error detail from the failed write.
        message: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Test helpers for asserting on recorded telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Telemetry sink that stores events for later inspection.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Drains and returns all recorded events.
        #[expect(clippy::expect_used, reason = "test support; a poisoned mutex should panic")]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        #[expect(clippy::expect_used, reason = "test support; a poisoned mutex should panic")]
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }
}
