//! Transport seam between the gateway and the storage backend.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::core::error::TransportError;

/// One-shot object storage operations.
///
/// Implementations perform exactly one network exchange per call and never
/// retry internally; retry policy, if any, belongs to the caller.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the object at `path`, failing if it exceeds `max_bytes`.
    async fn get(&self, path: &str, max_bytes: usize) -> Result<Vec<u8>, TransportError>;

    /// Write `data` to `path` in a single operation, overwriting any
    /// existing object.
    async fn put(&self, path: &str, data: &[u8]) -> Result<(), TransportError>;
}

/// Single-shot bridge from a completion-callback API to a future.
///
/// For SDKs that report results through a callback rather than a future:
/// share the [`Completion`] with the callback (behind an `Arc` if the SDK
/// needs ownership) and await the paired receiver. Only the first resolution
/// takes effect; if the awaiting side is dropped first, the resolution is
/// discarded.
pub struct Completion<T> {
    tx: Mutex<Option<oneshot::Sender<T>>>,
}

impl<T> Completion<T> {
    /// Create a completion and the receiver that will observe its value.
    pub fn channel() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Mutex::new(Some(tx)),
            },
            rx,
        )
    }

    /// Resolve with `value`. Returns `true` if this call performed the
    /// resolution, `false` if the completion was already resolved.
    pub fn resolve(&self, value: T) -> bool {
        let Some(tx) = self.tx.lock().ok().and_then(|mut slot| slot.take()) else {
            return false;
        };
        // The receiver may already be gone; the resolution is still consumed.
        let _ = tx.send(value);
        true
    }

    /// Whether the completion has already been resolved.
    pub fn is_resolved(&self) -> bool {
        self.tx.lock().map(|slot| slot.is_none()).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completion_resolves_once() {
        let (completion, rx) = Completion::channel();

        assert!(!completion.is_resolved());
        assert!(completion.resolve(1));
        assert!(completion.is_resolved());

        // Second resolution is ignored.
        assert!(!completion.resolve(2));

        assert_eq!(rx.await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_completion_from_callback_thread() {
        let (completion, rx) = Completion::channel();

        std::thread::spawn(move || {
            completion.resolve(vec![1u8, 2, 3]);
        });

        assert_eq!(rx.await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_resolution_after_receiver_dropped_is_discarded() {
        let (completion, rx) = Completion::<u8>::channel();
        drop(rx);

        // Still counts as the one resolution; the value just goes nowhere.
        assert!(completion.resolve(7));
        assert!(!completion.resolve(8));
    }
}
