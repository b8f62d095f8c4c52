//! Tests for TUI bootstrap storage and telemetry wiring.

use std::sync::Arc;

use crate::ledger::Ledger;
use crate::telemetry::test_support::RecordingTelemetrySink;
use crate::telemetry::{TelemetryEvent, TelemetrySink};
use crate::tui::storage::{record_ledger_persisted, set_telemetry_sink};

#[test]
fn set_telemetry_sink_wires_sink_for_persistence_events() {
    // OnceLock: only verify events if our sink was first to be set.
    let sink = Arc::new(RecordingTelemetrySink::default());
    let was_set = set_telemetry_sink(Arc::clone(&sink) as Arc<dyn TelemetrySink>);
    record_ledger_persisted(&Ledger::default());
    if was_set {
        let events = sink.take();
        assert!(events.iter().any(|event| matches!(
            event,
            TelemetryEvent::LedgerPersisted {
                row_count: 0,
                reviewed: 0,
                flagged: 0,
            }
        )));
    }
}
