// ── Reactive value cell ──
//
// A single value behind a `watch` channel. Every write notifies
// subscribers; reads are a cheap `Arc` clone of the latest value.

use std::sync::Arc;

use tokio::sync::watch;

pub(crate) struct Slot<T: Send + Sync + 'static> {
    tx: watch::Sender<Arc<T>>,
}

impl<T: Send + Sync + 'static> Slot<T> {
    pub(crate) fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(Arc::new(initial));
        Self { tx }
    }

    pub(crate) fn get(&self) -> Arc<T> {
        Arc::clone(&self.tx.borrow())
    }

    /// Replace the value and notify subscribers.
    pub(crate) fn set(&self, value: T) {
        // `send_replace` stores the value even with zero receivers.
        self.tx.send_replace(Arc::new(value));
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<T>> {
        self.tx.subscribe()
    }
}
