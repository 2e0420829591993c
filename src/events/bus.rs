//! Serialized event queue.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Any thread or task can publish events via `EventPublisher::publish()`
//! - The runtime task receives them one at a time via `EventBus::recv()`,
//!   or in batch via `EventBus::drain()`
//!
//! Built on tokio's unbounded mpsc channel so publishing never blocks and
//! the runtime can await the next event alongside the frame timer.

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use super::types::AppEvent;

/// Event queue owned by the runtime task.
///
/// # Example
///
/// ```
/// use eno_cursor::events::{AppEvent, EventBus};
///
/// let mut bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::ToggleRunning);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: UnboundedSender<AppEvent>,
    receiver: UnboundedReceiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&mut self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds its own sender, so Disconnected cannot happen
            // while it is alive
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next event.
    ///
    /// Never returns `None` while the bus is alive since it keeps a sender.
    pub async fn recv(&mut self) -> Option<AppEvent> {
        self.receiver.recv().await
    }

    /// Drain all pending events into a Vec.
    pub fn drain(&mut self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone, Debug)]
pub struct EventPublisher {
    sender: UnboundedSender<AppEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// If the bus has been dropped (app shutting down), the send silently
    /// fails.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}
