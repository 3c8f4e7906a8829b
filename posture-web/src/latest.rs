//! Latest-value mailbox between a frame producer and a UI consumer
//!
//! Producers publish every result, consumers read at their own pace and
//! only ever see the newest one. Nothing queues: an unread value is simply
//! replaced, and the replacement is counted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

struct Inner<T> {
    slot: Mutex<Option<T>>,
    dropped: AtomicU64,
}

/// Cloneable handle; every clone shares one slot
pub struct LatestSlot<T> {
    inner: Arc<Inner<T>>,
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                slot: Mutex::new(None),
                dropped: AtomicU64::new(0),
            }),
        }
    }

    /// Store `value`, replacing anything not yet taken
    pub fn publish(&self, value: T) {
        let stale = self.inner.slot.lock().replace(value);
        if stale.is_some() {
            let dropped = self.inner.dropped.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::trace!(dropped, "unread value replaced");
        }
    }

    /// Remove and return the newest value
    pub fn take(&self) -> Option<T> {
        self.inner.slot.lock().take()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.slot.lock().is_none()
    }

    /// Values overwritten before anyone took them
    pub fn dropped(&self) -> u64 {
        self.inner.dropped.load(Ordering::Relaxed)
    }
}

impl<T: Clone> LatestSlot<T> {
    /// Copy of the newest value, leaving it in place
    pub fn peek(&self) -> Option<T> {
        self.inner.slot.lock().clone()
    }
}

impl<T> Clone for LatestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
