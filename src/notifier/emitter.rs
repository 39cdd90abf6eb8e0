use tokio::sync::broadcast;

use crate::notifier::collector::Collector;

/// Single-slot multicast event source.
///
/// Each subscribed collector buffers at most one pending event; a newer event overwrites an
/// unconsumed older one. Events emitted while nobody is subscribed are dropped.
#[derive(Debug)]
pub struct Emitter<T> {
    tx: broadcast::Sender<T>,
}

impl<T: Clone + 'static> Emitter<T> {
    /// Create an emitter with no subscribers.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Emit without waiting. Returns `true` when at least one collector was subscribed.
    pub fn try_emit(&self, event: T) -> bool {
        self.tx.send(event).is_ok()
    }

    /// A collector over this emitter. It subscribes when one of its modes is launched.
    pub fn collector(&self) -> Collector<T> {
        Collector::new(self.tx.clone())
    }

    /// Number of collector tasks currently listening.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone + 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/notifier/emitter.rs"]
mod tests;
