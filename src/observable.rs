//! Minimal single-value push stream.
//!
//! Each observable holds exactly one current value. Subscribers receive the
//! latest value immediately on subscribe and are woken on every subsequent
//! publish; there is no buffered backlog beyond the latest value.

use tokio::sync::watch;

pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the current value and wake all subscribers. Publishing with
    /// no subscribers attached is fine; the value is still retained for
    /// whoever subscribes later.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Attach a new subscriber. Dropping the receiver detaches it;
    /// subscription lifetime is owned entirely by the caller.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn latest(&self) -> T {
        self.tx.borrow().clone()
    }
}
