//! Status monitor for a stream of `Status.json` lines.
//!
//! [`StatusMonitor`] keeps the latest decoded [`Status`] for one telemetry
//! stream, compares every new frame against it and publishes the resulting
//! transitions to an [`EventSink`]. Non-status records are skipped quietly;
//! malformed frames are logged and skipped, or abort processing when
//! [`MonitorConfig::abort_on_malformed`] is set.
//!
//! Where the lines come from (file tailing, journal rotation) is up to the
//! caller.

#![deny(static_mut_refs)]

pub mod config;
pub mod error;
pub mod monitor;
pub mod sink;

pub use config::MonitorConfig;
pub use error::MonitorError;
pub use monitor::{LineOutcome, MonitorStats, StatusMonitor};
pub use sink::{ChannelSink, EventSink, RecordingSink};

pub use flightdeck_status::{SemanticTransition, Status, StatusField};
