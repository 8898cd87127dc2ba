//! Destinations for published transitions.

use flightdeck_status::SemanticTransition;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Receives transitions from a [`crate::StatusMonitor`].
///
/// Publishing is fire-and-forget: a sink must not block and has no way to
/// report failure back to the monitor. The monitor's state lock is not held
/// during `publish`, but its line lock is, so a sink must not feed lines back
/// into the same monitor.
pub trait EventSink: Send + Sync {
    fn publish(&self, transition: SemanticTransition);
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn publish(&self, transition: SemanticTransition) {
        (**self).publish(transition);
    }
}

/// Forwards transitions into an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<SemanticTransition>,
}

impl ChannelSink {
    /// Create a sink together with the receiving end of its channel.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SemanticTransition>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    #[must_use]
    pub fn from_sender(sender: mpsc::UnboundedSender<SemanticTransition>) -> Self {
        Self { sender }
    }
}

impl EventSink for ChannelSink {
    fn publish(&self, transition: SemanticTransition) {
        if let Err(mpsc::error::SendError(dropped)) = self.sender.send(transition) {
            debug!(field = %dropped.field, "Receiver closed, dropping transition");
        }
    }
}

/// Keeps every published transition in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    transitions: Mutex<Vec<SemanticTransition>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything published so far, in order.
    #[must_use]
    pub fn transitions(&self) -> Vec<SemanticTransition> {
        self.transitions.lock().clone()
    }

    /// Remove and return everything published so far.
    pub fn take(&self) -> Vec<SemanticTransition> {
        std::mem::take(&mut *self.transitions.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.lock().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn publish(&self, transition: SemanticTransition) {
        self.transitions.lock().push(transition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightdeck_status::{FieldValue, StatusField};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn transition(field: StatusField) -> SemanticTransition {
        SemanticTransition {
            field,
            old: FieldValue::Bool(false),
            new: FieldValue::Bool(true),
            timestamp: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.publish(transition(StatusField::Docked));
        sink.publish(transition(StatusField::Landed));

        let fields: Vec<_> = sink.transitions().iter().map(|t| t.field).collect();
        assert_eq!(fields, vec![StatusField::Docked, StatusField::Landed]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_channel_sink_delivers() -> TestResult {
        let (sink, mut receiver) = ChannelSink::new();
        sink.publish(transition(StatusField::Docked));

        let received = receiver.recv().await.ok_or("channel closed")?;
        assert_eq!(received.field, StatusField::Docked);
        Ok(())
    }

    #[test]
    fn test_channel_sink_from_existing_sender() -> TestResult {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let first = ChannelSink::from_sender(sender.clone());
        let second = ChannelSink::from_sender(sender);
        first.publish(transition(StatusField::Docked));
        second.publish(transition(StatusField::Landed));

        assert_eq!(receiver.try_recv()?.field, StatusField::Docked);
        assert_eq!(receiver.try_recv()?.field, StatusField::Landed);
        Ok(())
    }

    #[test]
    fn test_channel_sink_with_closed_receiver() {
        let (sink, receiver) = ChannelSink::new();
        drop(receiver);
        sink.publish(transition(StatusField::Docked));
    }

    #[test]
    fn test_arc_sink_forwards() {
        let sink = Arc::new(RecordingSink::new());
        let shared: Arc<dyn EventSink> = sink.clone();
        shared.publish(transition(StatusField::Vehicle));
        assert_eq!(sink.len(), 1);
    }
}
