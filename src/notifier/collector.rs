use tokio::sync::broadcast::{self, error::RecvError};

use crate::notifier::scope::{Job, TaskScope};

/// Consumption modes layered over an [`Emitter`](crate::Emitter).
///
/// Every mode subscribes synchronously when called, so an event emitted after the call and
/// before the task is first polled is still observed.
#[derive(Clone, Debug)]
pub struct Collector<T> {
    tx: broadcast::Sender<T>,
}

impl<T: Clone + 'static> Collector<T> {
    pub(crate) fn new(tx: broadcast::Sender<T>) -> Self {
        Self { tx }
    }

    /// Run `block` on the next event, then stop.
    pub fn once<F>(&self, scope: &mut TaskScope, block: F) -> Job
    where
        F: FnOnce(T) + 'static,
    {
        let mut rx = self.tx.subscribe();
        scope.launch(async move {
            if let Some(event) = next_event(&mut rx).await {
                block(event);
            }
        })
    }

    /// Run `block` on every event until the scope is cancelled or the emitter goes away.
    pub fn forever<F>(&self, scope: &mut TaskScope, mut block: F) -> Job
    where
        F: FnMut(T) + 'static,
    {
        let mut rx = self.tx.subscribe();
        scope.launch(async move {
            while let Some(event) = next_event(&mut rx).await {
                block(event);
            }
        })
    }

    /// Run `block` on every event until it returns `true`.
    pub fn until<F>(&self, scope: &mut TaskScope, mut block: F) -> Job
    where
        F: FnMut(T) -> bool + 'static,
    {
        let mut rx = self.tx.subscribe();
        scope.launch(async move {
            while let Some(event) = next_event(&mut rx).await {
                if block(event) {
                    break;
                }
            }
        })
    }
}

/// Await the next event, skipping over overwritten ones. `None` once the emitter is gone.
async fn next_event<T: Clone>(rx: &mut broadcast::Receiver<T>) -> Option<T> {
    loop {
        match rx.recv().await {
            Ok(event) => return Some(event),
            Err(RecvError::Lagged(skipped)) => {
                tracing::trace!(skipped, "collector skipped overwritten events");
            }
            Err(RecvError::Closed) => return None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/notifier/collector.rs"]
mod tests;
