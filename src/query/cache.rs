//! Process-lifetime memoization of collection views.
//!
//! # Semantics
//!
//! - A key is computed at most once; once populated it is never recomputed
//!   or evicted for the life of the cache.
//! - Concurrent callers asking for the same unpopulated key share the first
//!   caller's in-flight computation (single-flight) instead of racing.
//! - A failed computation leaves the key empty, so a later call retries.
//!
//! ```text
//! get_or_compute("posts", fetch)
//!        │
//!        ▼
//!   slots: Mutex<FxHashMap<key, Arc<OnceCell<..>>>>   (lock held only to find the slot)
//!        │
//!        ▼
//!   OnceCell::get_or_try_init(fetch)   (callers await the same init)
//! ```

use std::{any::Any, future::Future, sync::Arc};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tokio::sync::OnceCell;

use super::error::QueryError;

type Value = Arc<dyn Any + Send + Sync>;
type Slot = Arc<OnceCell<Value>>;

/// Explicit memo cache, owned by whoever scopes the build.
#[derive(Debug, Default)]
pub struct MemoCache {
    slots: Mutex<FxHashMap<String, Slot>>,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value stored under `key`, computing it with `fetch` first
    /// if the key has never been populated.
    ///
    /// # Errors
    ///
    /// Propagates the error of `fetch`, or [`QueryError::CacheType`] when the
    /// key already holds a value of another type.
    pub async fn get_or_compute<T, F, Fut>(&self, key: &str, fetch: F) -> Result<Arc<T>, QueryError>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, QueryError>>,
    {
        let slot = self.slot(key);
        let value = slot
            .get_or_try_init(|| async { fetch().await.map(|value| Arc::new(value) as Value) })
            .await?;

        Arc::clone(value)
            .downcast::<T>()
            .map_err(|_| QueryError::CacheType { key: key.to_owned() })
    }

    /// Whether `key` has been populated.
    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.slots
            .lock()
            .get(key)
            .is_some_and(|slot| slot.initialized())
    }

    /// Number of populated keys.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: &str) -> Slot {
        Arc::clone(self.slots.lock().entry(key.to_owned()).or_default())
    }
}
