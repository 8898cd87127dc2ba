//! The status monitor: latest-snapshot slot plus decode → diff → publish.

use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::sink::EventSink;
use flightdeck_status::{SemanticTransition, Status, decode, diff};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// What happened to a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was a status frame. Holds the transitions that were
    /// published for it, empty for the first frame.
    Decoded {
        transitions: Vec<SemanticTransition>,
    },
    /// Blank line or some other journal event.
    Ignored,
    /// Malformed frame that was skipped.
    Skipped { reason: String },
}

/// Running counters for a monitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonitorStats {
    pub lines: u64,
    pub decoded: u64,
    pub ignored: u64,
    pub skipped: u64,
    pub published: u64,
}

#[derive(Debug, Default)]
struct MonitorState {
    latest: Option<Arc<Status>>,
    stats: MonitorStats,
}

/// Owns the latest status snapshot for one telemetry stream.
///
/// Every line is decoded and compared with the previous snapshot, the
/// snapshot is replaced, and then the resulting transitions are published to
/// the sink. Concurrent callers are serialized, so transitions reach the sink
/// in call order. The state lock is released before publishing; a sink may
/// query [`StatusMonitor::latest_status`] or [`StatusMonitor::stats`].
pub struct StatusMonitor<S> {
    config: MonitorConfig,
    sink: S,
    /// Held for a whole line, publishing included.
    line_order: Mutex<()>,
    state: Mutex<MonitorState>,
}

impl<S: EventSink> StatusMonitor<S> {
    pub fn new(config: MonitorConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            line_order: Mutex::new(()),
            state: Mutex::new(MonitorState::default()),
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle one raw line.
    ///
    /// # Errors
    ///
    /// [`MonitorError::Decode`] for a malformed frame when
    /// `abort_on_malformed` is set. Otherwise malformed frames are logged and
    /// reported as [`LineOutcome::Skipped`].
    pub fn handle_line(&self, line: &str) -> Result<LineOutcome, MonitorError> {
        let _line_order = self.line_order.lock();
        let outcome = self.advance(line)?;

        if let LineOutcome::Decoded { transitions } = &outcome {
            for transition in transitions {
                trace!(monitor = %self.config.name, %transition, "Publishing transition");
                self.sink.publish(transition.clone());
            }
        }
        Ok(outcome)
    }

    /// Decode one line and swap in the new snapshot under the state lock.
    fn advance(&self, line: &str) -> Result<LineOutcome, MonitorError> {
        let mut state = self.state.lock();
        state.stats.lines = state.stats.lines.saturating_add(1);
        let line_number = state.stats.lines;

        if line.trim().is_empty() {
            state.stats.ignored = state.stats.ignored.saturating_add(1);
            return Ok(LineOutcome::Ignored);
        }

        let status = match decode(line) {
            Ok(status) => status,
            Err(err) if err.is_not_status_record() => {
                debug!(monitor = %self.config.name, line = line_number, %err, "Ignoring record");
                state.stats.ignored = state.stats.ignored.saturating_add(1);
                return Ok(LineOutcome::Ignored);
            }
            Err(err) if self.config.abort_on_malformed => {
                return Err(MonitorError::Decode {
                    line: line_number,
                    source: err,
                });
            }
            Err(err) => {
                warn!(monitor = %self.config.name, line = line_number, %err, "Skipping malformed status frame");
                state.stats.skipped = state.stats.skipped.saturating_add(1);
                return Ok(LineOutcome::Skipped {
                    reason: err.to_string(),
                });
            }
        };

        let transitions: Vec<SemanticTransition> = diff(state.latest.as_deref(), &status)
            .into_iter()
            .filter(|t| !self.config.is_ignored(t.field))
            .collect();

        state.latest = Some(Arc::new(status));
        state.stats.decoded = state.stats.decoded.saturating_add(1);
        state.stats.published = state
            .stats
            .published
            .saturating_add(u64::try_from(transitions.len()).unwrap_or(u64::MAX));

        Ok(LineOutcome::Decoded { transitions })
    }

    /// Feed a sequence of lines in order.
    ///
    /// Returns the monitor's counters after the last line.
    ///
    /// # Errors
    ///
    /// Stops at the first error from [`StatusMonitor::handle_line`].
    pub fn process_lines<I>(&self, lines: I) -> Result<MonitorStats, MonitorError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.handle_line(line.as_ref())?;
        }
        Ok(self.stats())
    }

    /// The most recently decoded snapshot.
    pub fn latest_status(&self) -> Option<Arc<Status>> {
        self.state.lock().latest.clone()
    }

    pub fn stats(&self) -> MonitorStats {
        self.state.lock().stats
    }

    /// Forget the latest snapshot; the next frame becomes a new baseline.
    /// Counters are kept.
    pub fn reset(&self) {
        self.state.lock().latest = None;
    }
}

impl<S> std::fmt::Debug for StatusMonitor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusMonitor")
            .field("config", &self.config)
            .field("stats", &self.state.lock().stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use flightdeck_status::StatusField;
    use std::sync::{OnceLock, Weak};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const DOCKED: &str =
        r#"{"timestamp":"2018-03-25T00:39:48Z","event":"Status","Flags":16842765}"#;
    const UNDOCKED: &str =
        r#"{"timestamp":"2018-03-25T00:39:52Z","event":"Status","Flags":16842764}"#;

    #[test]
    fn test_first_frame_is_baseline() -> TestResult {
        let monitor = StatusMonitor::new(MonitorConfig::default(), RecordingSink::new());
        let outcome = monitor.handle_line(DOCKED)?;
        assert_eq!(
            outcome,
            LineOutcome::Decoded {
                transitions: Vec::new()
            }
        );
        assert!(monitor.sink().is_empty());
        assert!(monitor.latest_status().is_some_and(|s| s.docked));
        Ok(())
    }

    #[test]
    fn test_second_frame_publishes() -> TestResult {
        let monitor = StatusMonitor::new(MonitorConfig::default(), RecordingSink::new());
        monitor.handle_line(DOCKED)?;
        monitor.handle_line(UNDOCKED)?;

        let published = monitor.sink().transitions();
        assert_eq!(published.len(), 1);
        assert_eq!(published.first().map(|t| t.field), Some(StatusField::Docked));
        assert_eq!(monitor.stats().published, 1);
        Ok(())
    }

    #[test]
    fn test_reset_starts_new_baseline() -> TestResult {
        let monitor = StatusMonitor::new(MonitorConfig::default(), RecordingSink::new());
        monitor.handle_line(DOCKED)?;
        monitor.reset();
        assert!(monitor.latest_status().is_none());

        monitor.handle_line(UNDOCKED)?;
        assert!(monitor.sink().is_empty());
        assert_eq!(monitor.stats().decoded, 2);
        Ok(())
    }

    /// Sink that reads the monitor it is attached to while publishing.
    #[derive(Default)]
    struct QueryingSink {
        monitor: OnceLock<Weak<StatusMonitor<QueryingSink>>>,
        seen: parking_lot::Mutex<Vec<(StatusField, Option<bool>, u64)>>,
    }

    impl EventSink for QueryingSink {
        fn publish(&self, transition: SemanticTransition) {
            let monitor = self.monitor.get().and_then(Weak::upgrade);
            let docked = monitor
                .as_ref()
                .and_then(|m| m.latest_status())
                .map(|s| s.docked);
            let published = monitor.as_ref().map_or(0, |m| m.stats().published);
            self.seen.lock().push((transition.field, docked, published));
        }
    }

    #[test]
    fn test_sink_can_query_monitor_while_publishing() -> TestResult {
        let monitor = Arc::new(StatusMonitor::new(
            MonitorConfig::default(),
            QueryingSink::default(),
        ));
        if monitor.sink().monitor.set(Arc::downgrade(&monitor)).is_err() {
            return Err("monitor already attached".into());
        }

        monitor.handle_line(DOCKED)?;
        monitor.handle_line(UNDOCKED)?;

        // the sink sees the new snapshot and the updated counters
        let seen = monitor.sink().seen.lock().clone();
        assert_eq!(seen, vec![(StatusField::Docked, Some(false), 1)]);
        Ok(())
    }

    #[test]
    fn test_blank_line_is_ignored() -> TestResult {
        let monitor = StatusMonitor::new(MonitorConfig::default(), RecordingSink::new());
        assert_eq!(monitor.handle_line("   ")?, LineOutcome::Ignored);
        assert_eq!(monitor.stats().ignored, 1);
        Ok(())
    }
}
